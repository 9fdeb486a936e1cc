//! Nested tree structure of the MeSH hierarchy.
//!
//! Each [`Tree`] is one level of the hierarchy, keyed by tree-number
//! segment. Following a path segment by segment from the root walks down
//! through [`Node::children`].

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, VecDeque};

use mesh_tree::{PathSegment, TreeReference};

/// One level of the MeSH hierarchy, keyed by path segment.
///
/// Levels are ordered by segment so iteration is deterministic.
///
/// Lookups and traversals walk the levels iteratively. Dropping a tree and
/// the derived impls recurse once per level, which is fine for MeSH tree
/// numbers (a dozen segments at most).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Tree {
    nodes: BTreeMap<PathSegment, Node>,
}

/// A heading placed in the tree, with everything indented beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// The reference that first created this node.
    pub reference: TreeReference,
    /// Nodes one level below this one.
    pub children: Tree,
    /// Number of path segments preceding this node.
    pub depth: usize,
}

/// Outcome of inserting a reference into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Insertion {
    /// A new node was created at the given depth.
    Created { depth: usize },
    /// Every segment already existed; the tree is unchanged.
    Absorbed,
}

impl Node {
    fn new(reference: TreeReference, depth: usize) -> Self {
        Self {
            reference,
            children: Tree::new(),
            depth,
        }
    }

    /// The heading stored at this node.
    pub fn heading(&self) -> &str {
        &self.reference.heading
    }

    /// Returns true if nothing lies beneath this node.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Tree {
    /// Creates an empty tree level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes at this level.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if this level has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets the node reached by `segment` at this level.
    pub fn get(&self, segment: &str) -> Option<&Node> {
        self.nodes.get(segment)
    }

    /// Iterates over this level in segment order.
    pub fn iter(&self) -> impl Iterator<Item = (&PathSegment, &Node)> {
        self.nodes.iter()
    }

    /// Gets the children of the node at `location`.
    ///
    /// An empty location returns this tree itself. Returns `None` if any
    /// segment along the way does not exist.
    pub fn at<S: AsRef<str>>(&self, location: &[S]) -> Option<&Tree> {
        let mut tree = self;
        for segment in location {
            tree = &tree.nodes.get(segment.as_ref())?.children;
        }
        Some(tree)
    }

    /// Gets the node at `location`, or `None` if it cannot be reached.
    pub fn node_at<S: AsRef<str>>(&self, location: &[S]) -> Option<&Node> {
        let (last, parent) = location.split_last()?;
        self.at(parent)?.get(last.as_ref())
    }

    /// Collects the heading of every node in this tree and all of its
    /// descendants, level by level.
    pub fn terms(&self) -> Vec<String> {
        let mut terms = Vec::new();
        let mut queue: VecDeque<&Tree> = VecDeque::new();
        queue.push_back(self);

        while let Some(level) = queue.pop_front() {
            for node in level.nodes.values() {
                terms.push(node.reference.heading.clone());
                if !node.children.is_empty() {
                    queue.push_back(&node.children);
                }
            }
        }

        terms
    }

    /// Total number of nodes in this tree and all of its descendants.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&Tree> = vec![self];

        while let Some(level) = pending.pop() {
            count += level.nodes.len();
            pending.extend(level.nodes.values().map(|node| &node.children));
        }

        count
    }

    /// Inserts `reference` at the first segment of its path not yet present.
    ///
    /// Existing nodes are never replaced: the first reference to create a
    /// node keeps it, and a reference whose whole path already exists is
    /// absorbed without changing the tree.
    pub(crate) fn insert(&mut self, reference: TreeReference) -> Insertion {
        let mut level = self;
        for depth in 0..reference.path.len() {
            let segment = reference.path[depth].clone();
            match level.nodes.entry(segment) {
                Entry::Vacant(slot) => {
                    slot.insert(Node::new(reference, depth));
                    return Insertion::Created { depth };
                }
                Entry::Occupied(slot) => level = &mut slot.into_mut().children,
            }
        }
        Insertion::Absorbed
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a PathSegment, &'a Node);
    type IntoIter = std::collections::btree_map::Iter<'a, PathSegment, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
