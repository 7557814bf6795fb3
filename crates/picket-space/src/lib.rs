//! Spatial data structures for the Picket safety shield.
//!
//! This crate owns everything that touches grid geometry:
//!
//! - [`Extent`]: the bounds-checked row-major addressing shared by every
//!   per-cell buffer. No wrap-around addressing exists anywhere.
//! - [`Grid`]: the immutable wall/free matrix of one game snapshot.
//! - [`Layout`]: ASCII layout parsing (`%` walls, `P` agent, `G` adversaries).
//! - [`VisibilityMap`]: the bounded-depth known/unknown classification
//!   around the agent, produced by [`VisibilityMap::scan`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extent;
pub mod grid;
pub mod layout;
pub mod visibility;

pub use error::GridError;
pub use extent::Extent;
pub use grid::{Grid, Terrain};
pub use layout::Layout;
pub use visibility::{Visibility, VisibilityMap};
