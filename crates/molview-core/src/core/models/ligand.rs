use super::record::StructureRecord;
use crate::core::io::escape::{EscapeSet, escape};
use crate::core::io::reader::{RecordError, read_escaped};
use std::path::{Path, PathBuf};

pub const DEFAULT_LIGAND_STYLE: &str = "ball-and-stick";

#[derive(Debug, Clone, PartialEq)]
pub struct Ligand {
    path: PathBuf,
    content: String,
    style: String,
}

impl Ligand {
    /// Loads a ligand from a PDB file, escaping its newlines.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Io`] if the file cannot be read as text.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        style: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let content = read_escaped(path, EscapeSet::Newlines)?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
            style: style.into(),
        })
    }

    /// Builds a ligand from text already in memory; `raw` is escaped the same way a file is.
    pub fn from_text(path: impl Into<PathBuf>, raw: &str, style: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: escape(raw, EscapeSet::Newlines),
            style: style.into(),
        }
    }
}

impl StructureRecord for Ligand {
    fn path(&self) -> &Path {
        &self.path
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn style(&self) -> &str {
        &self.style
    }
}
