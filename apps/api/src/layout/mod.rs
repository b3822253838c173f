pub mod contract;
pub mod font_metrics;
pub mod wrap;
