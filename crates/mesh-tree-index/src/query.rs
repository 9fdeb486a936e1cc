//! Structural queries over a built [`MeshIndex`].
//!
//! Every query looks the term up case-insensitively. Unknown terms never
//! fail: they produce `false`, `0` or an empty result.

use mesh_tree::{parse_reference, PathSegment, TreeReference};

use crate::index::MeshIndex;

impl MeshIndex {
    fn paths(&self, term: &str) -> &[Vec<PathSegment>] {
        self.locations
            .get(&term.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every tree location recorded for `term`, in input order.
    pub fn locations_of(&self, term: &str) -> Option<&[Vec<PathSegment>]> {
        self.locations
            .get(&term.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Returns true if `term` is a known heading (case-insensitive).
    pub fn contains(&self, term: &str) -> bool {
        self.locations.contains_key(&term.to_lowercase())
    }

    /// Depth of `term` in the hierarchy, or 0 if it is unknown.
    ///
    /// Only the first recorded location counts: a heading placed at several
    /// depths reports the depth of the location that appeared first in the
    /// input.
    pub fn depth(&self, term: &str) -> usize {
        self.paths(term).first().map_or(0, Vec::len)
    }

    /// Expands `term` into itself and every heading beneath it.
    ///
    /// Each location of the term contributes the heading stored at that
    /// node followed by all of its descendants. Results from different
    /// locations are concatenated without removing duplicates; a location
    /// that does not resolve to a node contributes nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_tree_index::MeshIndex;
    ///
    /// let index = MeshIndex::build(["Pain;C23", "Headache;C23.1", "Neuralgia;C23.2"]).unwrap();
    /// assert_eq!(index.explode("pain"), ["Pain", "Headache", "Neuralgia"]);
    /// assert_eq!(index.explode("Headache"), ["Headache"]);
    /// ```
    pub fn explode(&self, term: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for location in self.paths(term) {
            if let Some(node) = self.tree.node_at(location.as_slice()) {
                terms.push(node.reference.heading.clone());
                terms.extend(node.children.terms());
            }
        }
        terms
    }

    /// Headings directly above `term`, one or more per location.
    ///
    /// For a location `p` the candidates are the nodes one level below
    /// `p[..len - 2]`; those whose stored path equals `p[..len - 1]` are
    /// parents. Locations with two or fewer segments have no parents.
    pub fn parents(&self, term: &str) -> Vec<String> {
        let mut parents = Vec::new();
        for location in self.paths(term) {
            if location.len() <= 2 {
                continue;
            }
            let parent_path = &location[..location.len() - 1];
            let Some(candidates) = self.tree.at(&location[..location.len() - 2]) else {
                continue;
            };
            parents.extend(
                candidates
                    .iter()
                    .filter(|(_, node)| node.reference.path.as_slice() == parent_path)
                    .map(|(_, node)| node.reference.heading.clone()),
            );
        }
        parents
    }

    /// A [`TreeReference`] for each location of `term`, carrying `term`
    /// exactly as given.
    ///
    /// # Panics
    ///
    /// Panics if a recorded location no longer forms a valid record. Every
    /// location came from the parser, so this indicates a corrupted index.
    pub fn reference(&self, term: &str) -> Vec<TreeReference> {
        self.paths(term)
            .iter()
            .map(|location| {
                let line = format!("{};{}", term, location.join("."));
                parse_reference(&line).unwrap_or_else(|err| {
                    panic!("indexed location for {term:?} is not a valid record: {err}")
                })
            })
            .collect()
    }
}
