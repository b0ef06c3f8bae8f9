pub mod add;
pub mod all;
pub mod random;
pub mod report_closed;
pub mod search;
pub mod update_price;

// Re-export handler functions for use in routing
pub use add::post as cafe_add;
pub use all::get as cafe_all;
pub use random::get as cafe_random;
pub use report_closed::delete as cafe_report_closed;
pub use search::get as cafe_search;
pub use update_price::patch as cafe_update_price;
