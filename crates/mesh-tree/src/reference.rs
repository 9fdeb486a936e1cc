//! Tree reference types for MeSH records.

use std::str::FromStr;

use crate::error::MeshError;

/// One segment of a tree number, e.g. `C10` or `668` in `C10.668.829`.
pub type PathSegment = String;

/// A Medical Subject Heading together with one of its tree locations.
///
/// The heading keeps its display form (case preserved). The path is ordered
/// root-to-leaf and is never empty once produced by the parser.
///
/// # Example
///
/// ```rust
/// use mesh_tree::TreeReference;
///
/// let reference: TreeReference = "Neuralgia;C10.668.829.500".parse().unwrap();
/// assert_eq!(reference.heading, "Neuralgia");
/// assert_eq!(reference.depth(), 4);
/// assert_eq!(reference.to_string(), "Neuralgia;C10.668.829.500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeReference {
    /// The Medical Subject Heading in its display form.
    pub heading: String,
    /// The tree location, one segment per level.
    pub path: Vec<PathSegment>,
}

impl TreeReference {
    /// Creates a reference from a heading and a path.
    pub fn new(heading: impl Into<String>, path: Vec<PathSegment>) -> Self {
        Self {
            heading: heading.into(),
            path,
        }
    }

    /// Returns the dotted tree number, e.g. `C10.668.829`.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Number of segments in the path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The path one level up, or `None` for a top-level reference.
    pub fn parent_path(&self) -> Option<&[PathSegment]> {
        match self.path.len() {
            0 | 1 => None,
            len => Some(&self.path[..len - 1]),
        }
    }

    /// The lower-cased heading used as the lookup key in an index.
    pub fn normalized_heading(&self) -> String {
        self.heading.to_lowercase()
    }
}

impl std::fmt::Display for TreeReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.heading, self.path_string())
    }
}

impl FromStr for TreeReference {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_reference(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(heading: &str, path: &[&str]) -> TreeReference {
        TreeReference::new(heading, path.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_path_string() {
        let r = reference("Neuralgia", &["C10", "668", "829", "500"]);
        assert_eq!(r.path_string(), "C10.668.829.500");
        assert_eq!(r.depth(), 4);
    }

    #[test]
    fn test_display_is_line_format() {
        let r = reference("Herpes Zoster", &["C01", "925"]);
        assert_eq!(r.to_string(), "Herpes Zoster;C01.925");
    }

    #[test]
    fn test_parent_path() {
        let r = reference("Neuralgia", &["C10", "668", "829"]);
        assert_eq!(
            r.parent_path(),
            Some(&["C10".to_string(), "668".to_string()][..])
        );

        let top = reference("Nervous System Diseases", &["C10"]);
        assert_eq!(top.parent_path(), None);
    }

    #[test]
    fn test_normalized_heading() {
        let r = reference("Neuralgia, Postherpetic", &["C10"]);
        assert_eq!(r.normalized_heading(), "neuralgia, postherpetic");
        // Display form is untouched
        assert_eq!(r.heading, "Neuralgia, Postherpetic");
    }

    #[test]
    fn test_from_str() {
        let r: TreeReference = "Pain;C23.888.592.612".parse().unwrap();
        assert_eq!(r, reference("Pain", &["C23", "888", "592", "612"]));

        let err = "Pain".parse::<TreeReference>().unwrap_err();
        assert!(matches!(err, MeshError::Format { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let r = reference("Pain", &["C23", "888"]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"heading":"Pain","path":["C23","888"]}"#);

        let back: TreeReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
