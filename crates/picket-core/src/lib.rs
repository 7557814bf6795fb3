//! Core types for the Picket safety shield.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other Picket crate: grid cells, the closed
//! action set with its displacement table, and the shield error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod cell;
pub mod error;

pub use action::{Action, ParseActionError};
pub use cell::Cell;
pub use error::ShieldError;
