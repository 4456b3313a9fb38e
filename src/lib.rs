pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod pipeline;
