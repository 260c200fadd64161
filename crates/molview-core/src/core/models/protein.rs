use super::pocket::Pocket;
use super::record::StructureRecord;
use crate::core::io::escape::{EscapeSet, escape};
use crate::core::io::reader::{RecordError, read_escaped};
use std::path::{Path, PathBuf};

pub const DEFAULT_PROTEIN_STYLE: &str = "cartoon";

/// Representation style that renders the protein as an opaque surface.
pub const SURFACE_STYLE: &str = "surface";

#[derive(Debug, Clone, PartialEq)]
pub struct Protein {
    path: PathBuf,
    content: String,
    style: String,
    surface_alpha: f64,
    pockets: Vec<Pocket>,
}

impl Protein {
    /// Loads a protein, escaping its newlines. With the [`SURFACE_STYLE`] style the
    /// surface alpha is pinned to `1.0` whatever value was requested.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Io`] if the file cannot be read as text.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        style: impl Into<String>,
        surface_alpha: f64,
    ) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let content = read_escaped(path, EscapeSet::Newlines)?;
        Ok(Self::with_content(path.to_path_buf(), content, style.into(), surface_alpha))
    }

    pub fn from_text(
        path: impl Into<PathBuf>,
        raw: &str,
        style: impl Into<String>,
        surface_alpha: f64,
    ) -> Self {
        Self::with_content(
            path.into(),
            escape(raw, EscapeSet::Newlines),
            style.into(),
            surface_alpha,
        )
    }

    fn with_content(path: PathBuf, content: String, style: String, surface_alpha: f64) -> Self {
        let surface_alpha = if style == SURFACE_STYLE {
            1.0
        } else {
            surface_alpha
        };
        Self {
            path,
            content,
            style,
            surface_alpha,
            pockets: Vec::new(),
        }
    }

    /// Appends a pocket. Pockets render in the order they were added.
    pub fn add_pocket(&mut self, pocket: Pocket) {
        self.pockets.push(pocket);
    }

    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    pub fn surface_alpha(&self) -> f64 {
        self.surface_alpha
    }
}

impl StructureRecord for Protein {
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
