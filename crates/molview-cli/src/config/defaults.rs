use molview::core::models::color::DEFAULT_POCKET_COLOR;
use molview::core::models::ligand::DEFAULT_LIGAND_STYLE;
use molview::core::models::pocket::DEFAULT_POCKET_STYLE;
use molview::core::models::protein::DEFAULT_PROTEIN_STYLE;
use molview::render::template::DEFAULT_OUTPUT_PATH;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub output: PathBuf,
    pub ligand_style: String,
    pub protein_style: String,
    pub protein_surface_alpha: f64,
    pub pocket_style: String,
    pub pocket_surface_alpha: f64,
    pub pocket_color: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            ligand_style: DEFAULT_LIGAND_STYLE.to_string(),
            protein_style: DEFAULT_PROTEIN_STYLE.to_string(),
            protein_surface_alpha: 0.0,
            pocket_style: DEFAULT_POCKET_STYLE.to_string(),
            pocket_surface_alpha: 1.0,
            pocket_color: DEFAULT_POCKET_COLOR.to_string(),
        }
    }
}
