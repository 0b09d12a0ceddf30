//! Core coordinate types for the QuadCraft tetrahedral grid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Quadray`] value type (four-component tetrahedral coordinates), its
//! canonical [`QuadKey`], and the Isotropic Vector Matrix constants shared
//! by every other crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod key;
pub mod quadray;

pub use key::{KeyParseError, QuadKey};
pub use quadray::{angle_between, basis_vectors, distance, euclidean_4d, manhattan, Quadray};
