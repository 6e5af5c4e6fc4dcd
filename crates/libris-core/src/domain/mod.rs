//! Domain models for catalog records

pub mod detail;
pub mod item;

pub use detail::*;
pub use item::*;
