use super::builder::{BodyBuilder, DocumentBuilder, LigandBody, ProteinBody};
use super::error::RenderError;
use super::template::DEFAULT_OUTPUT_PATH;
use crate::core::models::structure::Structure;
use std::path::{Path, PathBuf};
use tracing::info;

/// Selects the body builder matching the structure's kind.
pub fn body_builder_for(structure: &Structure) -> Box<dyn BodyBuilder + '_> {
    match structure {
        Structure::Ligand(ligand) => Box::new(LigandBody::new(ligand)),
        Structure::Protein(protein) => Box::new(ProteinBody::new(protein)),
    }
}

fn assemble(structure: &Structure) -> Result<DocumentBuilder, RenderError> {
    let body = body_builder_for(structure);
    let mut document = DocumentBuilder::new();
    document.build_prefix();
    body.build_body(&mut document)?;
    document.build_suffix();
    Ok(document)
}

/// Renders a complete HTML document for `structure` without touching the disk.
///
/// # Errors
///
/// Returns [`RenderError::UnknownColor`] if a pocket carries a color key that is not in
/// the table.
pub fn render_document(structure: &Structure) -> Result<String, RenderError> {
    Ok(assemble(structure)?.finish())
}

/// Writes rendered documents to a single output location.
#[derive(Debug, Clone)]
pub struct Renderer {
    output_path: PathBuf,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl Renderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Renders `structure` and overwrites the output file with the result.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownColor`] for an unknown pocket color, or
    /// [`RenderError::Write`] if the output cannot be written. Nothing is written when
    /// rendering fails.
    pub fn render(&self, structure: &Structure) -> Result<(), RenderError> {
        info!("Rendering {} document to {:?}.", structure, self.output_path);
        assemble(structure)?.save(&self.output_path)
    }
}
