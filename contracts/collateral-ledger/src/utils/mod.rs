pub mod core;
pub mod settlement;
pub mod valuation;
