//! Domain types shared by the bundling pipeline.

pub mod errors;
pub mod model;
