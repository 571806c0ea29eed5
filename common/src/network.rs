pub mod address;
pub mod ports;
pub mod range;
pub mod target;
