pub mod traits;

// API client implementations
pub mod alphavantage;
pub mod frankfurter;
