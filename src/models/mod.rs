pub mod day_type;
pub mod record;
pub mod table;
