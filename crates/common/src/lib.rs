//! Error plumbing shared by strata crates.

pub mod error;

pub use error::{Context, FromMessage};
