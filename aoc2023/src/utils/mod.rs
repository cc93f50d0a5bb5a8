pub mod coordinate;
pub mod dp_cache;
pub mod math;
