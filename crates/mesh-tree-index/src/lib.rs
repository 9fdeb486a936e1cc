//! # mesh-tree-index
//!
//! In-memory index of the MeSH (Medical Subject Headings) hierarchy with
//! structural queries.
//!
//! This crate builds on the [`mesh_tree`] record parser: every
//! `heading;tree.number` record is placed into a nested tree keyed by
//! tree-number segment, and its location is remembered under the
//! lower-cased heading for constant-time lookup.
//!
//! ## Quick Start
//!
//! ```rust
//! use mesh_tree_index::MeshIndex;
//!
//! let index = MeshIndex::build([
//!     "Nervous System Diseases;C10",
//!     "Neurologic Manifestations;C10.597",
//!     "Pain;C10.597.617",
//!     "Neuralgia;C10.597.617.682",
//! ])?;
//!
//! assert!(index.contains("neuralgia"));
//! assert_eq!(index.depth("Pain"), 3);
//! assert_eq!(index.parents("Neuralgia"), ["Pain"]);
//! assert_eq!(index.explode("Pain"), ["Pain", "Neuralgia"]);
//! # Ok::<(), mesh_tree_index::MeshError>(())
//! ```
//!
//! ## Loading
//!
//! ```ignore
//! use mesh_tree_index::{LoaderConfig, MeshIndex};
//!
//! // From a MeSH tree file
//! let index = MeshIndex::from_path("mtrees2019.bin")?;
//!
//! // Tolerating blank lines
//! let config = LoaderConfig::builder().with_skip_blank_lines(true).build();
//! let index = MeshIndex::from_path_with_config("mtrees2019.bin", &config)?;
//!
//! // The embedded tree, built once per process
//! let index = mesh_tree_index::default_index();
//! ```
//!
//! ## Queries
//!
//! | Query | Result for an unknown term |
//! |-------|----------------------------|
//! | [`contains`](MeshIndex::contains) | `false` |
//! | [`depth`](MeshIndex::depth) | `0` |
//! | [`explode`](MeshIndex::explode) | empty |
//! | [`parents`](MeshIndex::parents) | empty |
//! | [`reference`](MeshIndex::reference) | empty |
//!
//! ## Feature Flags
//!
//! - `serde` - Derives `Serialize`/`Deserialize` for the index, tree and
//!   references so they can be dumped as JSON or any other serde format

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod config;
mod index;
mod loader;
mod query;
mod stats;
mod tree;

// Public re-exports
pub use config::{LoaderConfig, LoaderConfigBuilder, DEFAULT_MAX_LINE_LENGTH};
pub use index::{Locations, MeshIndex};
pub use loader::{default_index, EMBEDDED_TREE};
pub use stats::IndexStats;
pub use tree::{Node, Tree};

// Re-export commonly used types from dependencies for convenience
pub use mesh_tree::{parse_reference, MeshError, MeshResult, PathSegment, TreeReference};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_index_is_shareable_across_threads() {
        assert_send_sync::<MeshIndex>();
    }

    #[test]
    fn test_concurrent_reads() {
        let index = default_index();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || index.explode("Herpes Zoster").len()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4);
        }
    }

    #[test]
    fn test_re_exports() {
        let reference = parse_reference("Pain;C23.888.592.612").unwrap();
        let _: &PathSegment = &reference.path[0];
        let _: Option<MeshResult<()>> = None;
        let _: Option<LoaderConfigBuilder> = None;
    }
}
