//! Catalog service clients

pub mod openlibrary;
pub mod traits;

pub use openlibrary::*;
pub use traits::*;
