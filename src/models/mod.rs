pub mod hours_entry;
pub mod monthly_point;
pub mod volunteer;
