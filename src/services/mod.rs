pub mod cafe_service;

pub use cafe_service::{title_case, CafeError, CafeService};
