pub mod aligned;
pub mod analytics;
pub mod chart;
pub mod price;
pub mod report;
pub mod settings;
