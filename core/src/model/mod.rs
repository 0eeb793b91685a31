pub mod reading;
pub mod stats;
