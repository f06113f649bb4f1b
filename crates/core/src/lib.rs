//! Core types for unidir
//!
//! Record shapes, slug derivation and the validation that runs before
//! any write reaches a storage backend. Nothing in this crate performs I/O.

pub mod constants;
mod env_config;
mod error;
mod lifecycle;
mod slug;
mod university;

pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use lifecycle::*;
pub use slug::*;
pub use university::*;
