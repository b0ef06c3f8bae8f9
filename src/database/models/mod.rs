pub mod cafe;

pub use cafe::{Cafe, CafeForm, MissingField, NewCafe};
