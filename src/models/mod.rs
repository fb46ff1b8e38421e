// Module exports for models

pub mod appointment;
pub mod classification;
pub mod column;
pub mod selection;
