//! Core invoice types, formatting, localization, and grouping.
//!
//! This module provides the foundational types for the cost-allocation
//! invoice pipeline: the inbound data model, the Dutch-convention amount
//! formatter, the static label table, and the distribution-key grouper.

mod error;
mod format;
mod group;
mod locale;
mod types;

pub use error::*;
pub use format::*;
pub use group::*;
pub use locale::*;
pub use types::*;
