//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod current_card;
pub mod footer;
pub mod forecast_chart;
pub mod header;
pub mod logs;
pub mod selector;
