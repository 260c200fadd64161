//! # Core Module
//!
//! Data-holding building blocks shared by every rendering path.
//!
//! - **Structure Records** ([`models`]) - Ligand, protein and pocket records plus the
//!   pocket color table.
//! - **File I/O** ([`io`]) - Whole-file reads and template-literal escaping.
//!
//! Records are value objects: their escaped content is captured once at construction
//! and never changes afterwards.

pub mod io;
pub mod models;
