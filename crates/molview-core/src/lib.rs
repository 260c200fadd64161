//! # molview Core Library
//!
//! Builds self-contained HTML pages that embed the Mol* molecular viewer, pre-loaded
//! with structures read from PDB files: proteins, ligands and binding-pocket surfaces.
//!
//! ## Architecture
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Immutable structure records (`Ligand`, `Protein`,
//!   `Pocket`), the fixed pocket color table, and the I/O helpers that read a file and
//!   escape it for embedding inside a JavaScript template literal.
//!
//! - **[`render`]: Document Assembly.** The static viewer template, the per-kind body
//!   builders and the dispatcher that turns a [`core::models::structure::Structure`]
//!   into a finished HTML document on disk.
//!
//! ## Example
//!
//! ```no_run
//! use molview::core::models::{pocket::Pocket, protein::Protein, structure::Structure};
//! use molview::render::dispatch::Renderer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut protein = Protein::from_path("5HOB.pdb", "cartoon", 0.4)?;
//! protein.add_pocket(Pocket::from_path("5HOB_pocket.pdb", "gaussian-surface", 1.0)?);
//!
//! Renderer::default().render(&Structure::Protein(protein))?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod render;
