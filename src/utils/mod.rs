pub mod date;
pub mod formatting;
pub mod path;
pub mod range;
pub mod table;

pub use formatting::hours2readable;
