//! Construction of the MeSH index.
//!
//! The index is built in a single pass: every record is parsed, placed in
//! the nested [`Tree`] and its path is appended to the heading lookup.
//! Once built it is never modified, so a `&MeshIndex` can be shared freely
//! between threads.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Instant;

use mesh_tree::{parse_reference, MeshError, MeshResult, PathSegment, TreeReference};

use crate::config::LoaderConfig;
use crate::stats::IndexStats;
use crate::tree::{Insertion, Tree};

/// Lower-cased heading to every tree location recorded for it, in input order.
pub type Locations = HashMap<String, Vec<Vec<PathSegment>>>;

/// The MeSH hierarchy together with a heading lookup.
///
/// # Example
///
/// ```rust
/// use mesh_tree_index::MeshIndex;
///
/// let index = MeshIndex::build(["A;1", "B;1.1", "C;1.1.1"]).unwrap();
///
/// assert!(index.contains("b"));
/// assert_eq!(index.depth("C"), 3);
/// assert_eq!(index.parents("C"), ["B"]);
///
/// let mut exploded = index.explode("A");
/// exploded.sort();
/// assert_eq!(exploded, ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshIndex {
    pub(crate) tree: Tree,
    pub(crate) locations: Locations,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) stats: IndexStats,
}

impl MeshIndex {
    /// Builds an index from tree records using the default [`LoaderConfig`].
    ///
    /// The first malformed record aborts the build.
    pub fn build<I, S>(lines: I) -> MeshResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_config(lines, &LoaderConfig::default())
    }

    /// Builds an index from tree records with a custom configuration.
    pub fn build_with_config<I, S>(lines: I, config: &LoaderConfig) -> MeshResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new(config);
        for line in lines {
            builder.push_line(line.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// The nested tree, rooted at the top-level categories.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The heading lookup, keyed by lower-cased heading.
    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Statistics collected while building this index.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Number of distinct headings.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if no records were loaded.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl FromStr for MeshIndex {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::build(s.lines())
    }
}

/// Accumulates records into a tree and heading lookup.
pub(crate) struct IndexBuilder<'c> {
    config: &'c LoaderConfig,
    tree: Tree,
    locations: Locations,
    stats: IndexStats,
    start: Instant,
}

impl<'c> IndexBuilder<'c> {
    pub(crate) fn new(config: &'c LoaderConfig) -> Self {
        tracing::debug!(?config, "building MeSH index");
        Self {
            config,
            tree: Tree::new(),
            locations: Locations::new(),
            stats: IndexStats::default(),
            start: Instant::now(),
        }
    }

    /// Parses and adds a single record line.
    pub(crate) fn push_line(&mut self, line: &str) -> MeshResult<()> {
        let Some(line) = self.config.prepare_line(line) else {
            tracing::debug!("skipping blank line");
            return Ok(());
        };
        let reference = parse_reference(line)?;
        self.push(reference);
        Ok(())
    }

    fn push(&mut self, reference: TreeReference) {
        self.stats.line_count += 1;
        self.stats.max_depth = self.stats.max_depth.max(reference.depth());

        let heading = reference.normalized_heading();
        let path = reference.path.clone();

        match self.tree.insert(reference) {
            Insertion::Created { depth } => {
                self.stats.node_count += 1;
                tracing::trace!(%heading, depth, "created tree node");
            }
            Insertion::Absorbed => {
                self.stats.absorbed_count += 1;
                tracing::warn!(
                    %heading,
                    tree_number = %path.join("."),
                    "tree number already present, keeping the existing node"
                );
            }
        }

        self.locations.entry(heading).or_default().push(path);
    }

    pub(crate) fn finish(self) -> MeshIndex {
        let mut stats = self.stats;
        stats.heading_count = self.locations.len();
        stats.build_time_ms = self.start.elapsed().as_millis() as u64;

        tracing::debug!(
            records = stats.line_count,
            headings = stats.heading_count,
            nodes = stats.node_count,
            absorbed = stats.absorbed_count,
            elapsed_ms = stats.build_time_ms,
            "built MeSH index"
        );

        MeshIndex {
            tree: self.tree,
            locations: self.locations,
            stats,
        }
    }
}
