pub mod cafes;
pub mod system;
