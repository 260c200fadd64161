use super::error::RenderError;
use super::pocket::format_pocket;
use super::template::{LOAD_LIGAND, LOAD_POCKETS, LOAD_STRUCTURE, MOLSTAR_PREFIX, MOLSTAR_SUFFIX};
use crate::core::models::ligand::Ligand;
use crate::core::models::protein::Protein;
use crate::core::models::record::StructureRecord;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Ordered buffer of document fragments, owned by a single render call.
///
/// Fragments are only ever appended, and are joined once by [`finish`](Self::finish)
/// or [`save`](Self::save).
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    fragments: Vec<Cow<'static, str>>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_prefix(&mut self) {
        self.fragments.push(Cow::Borrowed(MOLSTAR_PREFIX));
    }

    pub fn build_suffix(&mut self) {
        self.fragments.push(Cow::Borrowed(MOLSTAR_SUFFIX));
    }

    pub fn push(&mut self, fragment: impl Into<Cow<'static, str>>) {
        self.fragments.push(fragment.into());
    }

    pub fn fragments(&self) -> &[Cow<'static, str>] {
        &self.fragments
    }

    pub fn finish(self) -> String {
        self.fragments.concat()
    }

    /// Writes the joined document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Write`] if the file cannot be created or written. A
    /// partially written file is left as is.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let to_write_error = |source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        };

        let document = self.finish();
        let file = File::create(path).map_err(to_write_error)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(document.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(to_write_error)?;

        debug!("Wrote {} bytes to {:?}.", document.len(), path);
        Ok(())
    }
}

/// Emits the kind-specific statements between the template prefix and suffix.
pub trait BodyBuilder {
    fn build_body(&self, document: &mut DocumentBuilder) -> Result<(), RenderError>;
}

fn structure_data_statement(content: &str) -> String {
    format!("var structureData = `{}`.trim();", content)
}

pub struct LigandBody<'a> {
    ligand: &'a Ligand,
}

impl<'a> LigandBody<'a> {
    pub fn new(ligand: &'a Ligand) -> Self {
        Self { ligand }
    }
}

impl BodyBuilder for LigandBody<'_> {
    fn build_body(&self, document: &mut DocumentBuilder) -> Result<(), RenderError> {
        let ligand_data = structure_data_statement(self.ligand.content());
        let ligand_type = format!("var ligand_type = `{}`;", self.ligand.style());
        let loading = format!(
            "{}(viewer, structureData, structureFormat, 'ligand', ligand_type);",
            LOAD_LIGAND
        );

        document.push(format!("\n{}\n{}\n{}", ligand_data, ligand_type, loading));
        Ok(())
    }
}

pub struct ProteinBody<'a> {
    protein: &'a Protein,
}

impl<'a> ProteinBody<'a> {
    pub fn new(protein: &'a Protein) -> Self {
        Self { protein }
    }

    fn load_structure_directive(style: &str, surface_alpha: f64) -> String {
        format!(
            "{}(viewer, structureData, structureFormat, dataLabel='protein', protein_style_type='{}', protein_surface_alpha={});",
            LOAD_STRUCTURE, style, surface_alpha
        )
    }

    fn load_pockets_directive(style: &str, surface_alpha: f64) -> String {
        format!(
            "{}(viewer, pocketDataList, pocketFormat, pocket_style_type='{}', pocket_surface_alpha={});",
            LOAD_POCKETS, style, surface_alpha
        )
    }
}

impl BodyBuilder for ProteinBody<'_> {
    fn build_body(&self, document: &mut DocumentBuilder) -> Result<(), RenderError> {
        let protein = self.protein;
        let protein_data = structure_data_statement(protein.content());
        document.push(format!(
            "\n{}\n{}\n",
            protein_data,
            Self::load_structure_directive(protein.style(), protein.surface_alpha())
        ));

        // Bulk pocket styling comes from the first pocket only.
        let Some(first_pocket) = protein.pockets().first() else {
            trace!("Protein {:?} has no pockets.", protein.path());
            return Ok(());
        };

        document.push("var pocketDataList = [\n");
        for pocket in protein.pockets() {
            document.push(format_pocket(pocket)?);
        }
        document.push("];");

        let surface_alpha = first_pocket.surface_alpha();
        document.push(format!(
            "\nvar pocket_surface_alpha = {};\n{}",
            surface_alpha,
            Self::load_pockets_directive(first_pocket.style(), surface_alpha)
        ));

        debug!(
            "Added {} pocket(s) for {:?}.",
            protein.pockets().len(),
            protein.path()
        );
        Ok(())
    }
}
