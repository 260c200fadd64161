//! # Core Models Module
//!
//! Structure records loaded from PDB files and the lookup tables used to display them.
//!
//! ## Key Components
//!
//! - [`ligand`] - A small molecule rendered on its own
//! - [`protein`] - A macromolecule with an ordered list of binding pockets
//! - [`pocket`] - A pocket surface attached to a protein, drawn in a table color
//! - [`color`] - The fixed pocket color table
//! - [`record`] - The accessors shared by all three record kinds
//! - [`structure`] - The closed set of records that can head a document
//!
//! ## Usage
//!
//! ```ignore
//! use molview::core::models::{pocket::Pocket, protein::Protein};
//!
//! let mut protein = Protein::from_path("5HOB.pdb", "cartoon", 0.4)?;
//! protein.add_pocket(Pocket::from_path("5HOB_yellow_pocket.pdb", "gaussian-surface", 1.0)?
//!     .with_color("yellow"));
//! ```

pub mod color;
pub mod ligand;
pub mod pocket;
pub mod protein;
pub mod record;
pub mod structure;
