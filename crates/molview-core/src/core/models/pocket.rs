use super::color::DEFAULT_POCKET_COLOR;
use super::record::StructureRecord;
use crate::core::io::escape::{EscapeSet, escape};
use crate::core::io::reader::{RecordError, read_escaped};
use std::path::{Path, PathBuf};

pub const DEFAULT_POCKET_STYLE: &str = "gaussian-surface";

/// A binding-pocket surface attached to a [`Protein`](super::protein::Protein).
///
/// The color key is not checked here. An unknown key surfaces as a lookup error when the
/// pocket is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Pocket {
    path: PathBuf,
    content: String,
    style: String,
    surface_alpha: f64,
    color_key: String,
}

impl Pocket {
    /// Loads a pocket surface, escaping newlines and tabs. The color starts as
    /// [`DEFAULT_POCKET_COLOR`].
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
        let content = read_escaped(path, EscapeSet::NewlinesAndTabs)?;
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
            escape(raw, EscapeSet::NewlinesAndTabs),
            style.into(),
            surface_alpha,
        )
    }

    fn with_content(path: PathBuf, content: String, style: String, surface_alpha: f64) -> Self {
        Self {
            path,
            content,
            style,
            surface_alpha,
            color_key: DEFAULT_POCKET_COLOR.to_string(),
        }
    }

    /// Replaces the color key, e.g. `"yellow"`.
    pub fn with_color(mut self, color_key: impl Into<String>) -> Self {
        self.color_key = color_key.into();
        self
    }

    pub fn surface_alpha(&self) -> f64 {
        self.surface_alpha
    }

    pub fn color_key(&self) -> &str {
        &self.color_key
    }
}

impl StructureRecord for Pocket {
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
