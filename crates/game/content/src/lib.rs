//! Loaders that turn user-authored files into calculator input.
//!
//! A player's selection is written as TOML or RON and read into a
//! [`trade_core::Configuration`]:
//!
//! ```toml
//! [options]
//! traders_crunch_challenge = true
//!
//! [equipped.penguino]
//! active = true
//! upgrades = 4
//! ```
//!
//! The option/equipment graph itself is fixed data in `trade-core` and is
//! never loaded from files.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigurationFormat, ConfigurationLoader, LoadResult};
