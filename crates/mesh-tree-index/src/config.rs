//! Configuration types for loading a MeSH index.

/// Default maximum line length in bytes, matching a typical line scanner.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Configuration for reading tree records into an index.
///
/// # Example
///
/// ```rust
/// use mesh_tree_index::LoaderConfig;
///
/// let config = LoaderConfig::builder()
///     .with_skip_blank_lines(true)
///     .with_max_line_length(1024)
///     .build();
/// assert!(config.skip_blank_lines);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Remove a trailing `\r` from each line before parsing.
    pub strip_carriage_return: bool,
    /// Skip empty lines instead of rejecting them as malformed.
    pub skip_blank_lines: bool,
    /// Maximum bytes per line when reading from a source (None = unlimited).
    pub max_line_length: Option<usize>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            strip_carriage_return: true,
            skip_blank_lines: false,
            max_line_length: Some(DEFAULT_MAX_LINE_LENGTH),
        }
    }
}

impl LoaderConfig {
    /// Creates a new builder for LoaderConfig.
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }

    /// Applies the per-line settings, returning `None` if the line is skipped.
    pub(crate) fn prepare_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let line = if self.strip_carriage_return {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        };

        if self.skip_blank_lines && line.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}

/// Builder for LoaderConfig.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
}

impl LoaderConfigBuilder {
    /// Enables or disables stripping of a trailing carriage return.
    pub fn with_strip_carriage_return(mut self, strip: bool) -> Self {
        self.config.strip_carriage_return = strip;
        self
    }

    /// Enables or disables skipping of blank lines.
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.config.skip_blank_lines = skip;
        self
    }

    /// Sets the maximum line length in bytes.
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.config.max_line_length = Some(max);
        self
    }

    /// Removes the line length limit.
    pub fn without_max_line_length(mut self) -> Self {
        self.config.max_line_length = None;
        self
    }

    /// Builds the LoaderConfig.
    pub fn build(self) -> LoaderConfig {
        self.config
    }
}
