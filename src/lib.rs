//! Static catalog of online business models with category and free-text filtering.
//!
//! The catalog is compiled in by the build script from `data/catalog.toml`;
//! [`Repository`] reads it, [`FilterEngine`] narrows it down and
//! [`FilterState`] holds the two user-driven filter signals.

pub mod constants;
pub mod filter_engine;
pub mod filter_state;
pub mod logging;
pub mod models;
pub mod repository;

#[cfg(test)]
mod fixtures;

pub use self::filter_engine::{CountSummary, FilterEngine, FilterResults, ResultState};
pub use self::filter_state::FilterState;
pub use self::repository::Repository;
