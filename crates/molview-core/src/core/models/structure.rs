use super::ligand::Ligand;
use super::protein::Protein;
use std::fmt;

/// A record that can head a rendered document.
///
/// Pockets only ever appear nested inside a [`Protein`], so they have no variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    Ligand(Ligand),
    Protein(Protein),
}

impl From<Ligand> for Structure {
    fn from(ligand: Ligand) -> Self {
        Structure::Ligand(ligand)
    }
}

impl From<Protein> for Structure {
    fn from(protein: Protein) -> Self {
        Structure::Protein(protein)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Structure::Ligand(_) => "Ligand",
                Structure::Protein(_) => "Protein",
            }
        )
    }
}
