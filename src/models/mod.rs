pub mod category;
pub mod category_hours;
pub mod filter;
pub mod grouping;
pub mod log_entry;
pub mod occupancy;
pub mod shift;
pub mod snapshot;
pub mod staffing;
