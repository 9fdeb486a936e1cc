//! Statistics about index builds.

/// Statistics collected while building a [`MeshIndex`](crate::MeshIndex).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of records read (skipped blank lines excluded).
    pub line_count: usize,
    /// Number of distinct normalised headings.
    pub heading_count: usize,
    /// Number of nodes created in the tree.
    pub node_count: usize,
    /// Records whose full path already existed and were not placed in the tree.
    pub absorbed_count: usize,
    /// Longest tree number seen, in segments.
    pub max_depth: usize,
    /// Time taken to build the index in milliseconds.
    pub build_time_ms: u64,
}

impl IndexStats {
    /// Average number of locations recorded per heading.
    pub fn avg_locations(&self) -> f64 {
        if self.heading_count > 0 {
            self.line_count as f64 / self.heading_count as f64
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MeSH Index Statistics:")?;
        writeln!(f, "  Records:         {}", self.line_count)?;
        writeln!(f, "  Headings:        {}", self.heading_count)?;
        writeln!(f, "  Tree nodes:      {}", self.node_count)?;
        writeln!(f, "  Absorbed:        {}", self.absorbed_count)?;
        writeln!(f, "  Max depth:       {}", self.max_depth)?;
        writeln!(f, "  Avg locations:   {:.1}", self.avg_locations())?;
        writeln!(f, "  Build time:      {}ms", self.build_time_ms)?;
        Ok(())
    }
}
