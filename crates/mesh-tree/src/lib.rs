//! # mesh-tree
//!
//! Parser and record types for MeSH (Medical Subject Headings) tree files.
//!
//! A MeSH tree file lists every heading together with each of its tree
//! numbers, one record per line:
//!
//! ```text
//! Nervous System Diseases;C10
//! Neurologic Manifestations;C10.597
//! Neuralgia;C10.597.617.682
//! Neuralgia, Postherpetic;C10.597.617.682.680
//! ```
//!
//! This crate turns each line into a [`TreeReference`]. Building the
//! hierarchy and querying it lives in the `mesh-tree-index` crate.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_tree::{parse_reference, MeshError};
//!
//! let reference = parse_reference("Neuralgia;C10.597.617.682").unwrap();
//! assert_eq!(reference.heading, "Neuralgia");
//! assert_eq!(reference.depth(), 4);
//!
//! // A record without a `;` separator is rejected with the raw line attached
//! let err = parse_reference("Neuralgia").unwrap_err();
//! assert!(matches!(err, MeshError::Format { .. }));
//! ```
//!
//! ## Record Format
//!
//! | Part | Separator | Validation |
//! |------|-----------|------------|
//! | Heading | before the only `;` | none, case preserved |
//! | Tree number | after the `;` | split on `.`, segments kept verbatim |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod parser;
mod reference;

pub use error::{MeshError, MeshResult};
pub use parser::parse_reference;
pub use reference::{PathSegment, TreeReference};
