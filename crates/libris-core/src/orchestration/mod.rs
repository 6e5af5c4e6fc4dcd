//! Request lifecycles for the search list and the detail view
//!
//! Both orchestrators are plain state holders. Each exposes a split
//! `begin`/`complete` (or `open`/`resolve`) API that hands out a ticket for
//! the request it started; a completion carrying an outdated ticket is
//! dropped, so only the most recent request of each kind ever reaches
//! visible state. The async `submit` and `load` helpers run a whole cycle
//! against a [`crate::catalog::Catalog`].

pub mod detail;
pub mod search;

pub use detail::*;
pub use search::*;
