// Module exports for models

pub mod day;
pub mod selection;
pub mod settings;
