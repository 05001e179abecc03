pub mod axis;
pub mod export;
pub mod generator;

pub use generator::AxisCounts;
