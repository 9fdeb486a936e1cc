//! Loading a MeSH index from readers, files and the embedded tree.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

use mesh_tree::MeshResult;

use crate::config::LoaderConfig;
use crate::index::{IndexBuilder, MeshIndex};

/// The MeSH tree shipped with this crate, one record per line.
pub const EMBEDDED_TREE: &str = include_str!("../data/mtrees-sample.txt");

static DEFAULT_INDEX: OnceLock<MeshIndex> = OnceLock::new();

/// Returns the index of the embedded MeSH tree, building it on first use.
///
/// # Panics
///
/// Panics if the embedded tree is malformed, which the crate's own tests
/// rule out.
///
/// # Example
///
/// ```rust
/// let index = mesh_tree_index::default_index();
/// assert!(index.contains("Neuralgia, Postherpetic"));
/// ```
pub fn default_index() -> &'static MeshIndex {
    DEFAULT_INDEX.get_or_init(|| {
        MeshIndex::embedded()
            .unwrap_or_else(|err| panic!("embedded MeSH tree is malformed: {err}"))
    })
}

impl MeshIndex {
    /// Builds a fresh index from the embedded MeSH tree.
    ///
    /// Prefer [`default_index`] unless an owned copy is needed.
    pub fn embedded() -> MeshResult<Self> {
        EMBEDDED_TREE.parse()
    }

    /// Loads an index from any buffered reader using the default config.
    pub fn from_reader<R: BufRead>(reader: R) -> MeshResult<Self> {
        Self::from_reader_with_config(reader, &LoaderConfig::default())
    }

    /// Loads an index from any buffered reader.
    ///
    /// Read failures, invalid UTF-8 and lines longer than
    /// [`LoaderConfig::max_line_length`] abort the load with
    /// [`MeshError::SourceRead`](mesh_tree::MeshError::SourceRead). A record
    /// is never read past the limit, so an over-long line fails after at
    /// most `max_line_length + 2` bytes of it have been buffered.
    pub fn from_reader_with_config<R: BufRead>(
        mut reader: R,
        config: &LoaderConfig,
    ) -> MeshResult<Self> {
        let mut builder = IndexBuilder::new(config);
        let mut buf = Vec::new();

        while read_record(&mut reader, &mut buf, config.max_line_length)? > 0 {
            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf);

            if let Some(max) = config.max_line_length {
                if bytes.len() > max {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("line too long (limit {} bytes)", max),
                    )
                    .into());
                }
            }

            let line = std::str::from_utf8(bytes)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
            builder.push_line(line)?;
        }

        Ok(builder.finish())
    }

    /// Loads an index from a MeSH tree file using the default config.
    pub fn from_path<P: AsRef<Path>>(path: P) -> MeshResult<Self> {
        Self::from_path_with_config(path, &LoaderConfig::default())
    }

    /// Loads an index from a MeSH tree file.
    pub fn from_path_with_config<P: AsRef<Path>>(
        path: P,
        config: &LoaderConfig,
    ) -> MeshResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening MeSH tree file");
        let file = File::open(path)?;
        Self::from_reader_with_config(BufReader::new(file), config)
    }
}

/// Reads one record, including its `\n`, into `buf`.
///
/// With a limit, at most `max + 2` bytes are taken: enough for a record of
/// `max` bytes plus its terminator and one byte to detect the overflow.
fn read_record<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    max_line_length: Option<usize>,
) -> io::Result<usize> {
    buf.clear();
    match max_line_length {
        Some(max) => reader
            .by_ref()
            .take(max as u64 + 2)
            .read_until(b'\n', buf),
        None => reader.read_until(b'\n', buf),
    }
}
