pub mod aggregate;
pub mod chart;
pub mod config;
pub mod duration;
pub mod normalize;
pub mod summary;
