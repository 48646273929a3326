pub mod division_change;
pub mod driver;
pub mod race_result;
pub mod round;
pub mod saved_point;
pub mod season;
pub mod standings;
