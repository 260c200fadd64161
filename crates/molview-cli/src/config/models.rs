use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct LigandJob {
    pub input: PathBuf,
    pub style: String,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PocketJob {
    pub path: PathBuf,
    pub style: String,
    pub surface_alpha: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProteinJob {
    pub input: PathBuf,
    pub style: String,
    pub surface_alpha: f64,
    pub pockets: Vec<PocketJob>,
    pub output: PathBuf,
}
