// Rust Date Picker Library
// Calendar grid generation and date selection for picker widgets

pub mod models;
pub mod services;
pub mod utils;
