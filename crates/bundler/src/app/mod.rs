//! Application layer: the bundling pipeline and the header emitter it drives.

pub mod bundle;
pub mod emit;
