// Clinic Board Library
// Lane-packed day columns and drag-to-book selection for a clinic
// scheduling board; consumed by a presentation layer

pub mod board;
pub mod grid;
pub mod layout;
pub mod models;
pub mod selection;
pub mod utils;
