pub mod colors;
pub mod ligand;
pub mod protein;
