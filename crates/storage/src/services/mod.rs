pub mod division_history;
pub mod points_table;
pub mod standings;
