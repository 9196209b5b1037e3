pub mod chart;
pub mod summaries;
pub mod videos;
