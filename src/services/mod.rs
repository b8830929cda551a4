// Service module exports

pub mod calendar;
pub mod grid;
pub mod navigator;
pub mod selection;
pub mod settings;
