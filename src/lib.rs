pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use routes::app;
