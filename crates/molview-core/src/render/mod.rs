//! # Render Module
//!
//! Turns structure records into a finished Mol* viewer page.
//!
//! - [`template`] - The fixed HTML/JavaScript shell and loader routine names
//! - [`pocket`] - Formats one pocket as an entry of the `pocketDataList` array
//! - [`builder`] - The fragment buffer and the per-kind body builders
//! - [`dispatch`] - Picks a body builder for a [`Structure`](crate::core::models::structure::Structure)
//!   and writes the result
//! - [`error`] - Failures raised while rendering or saving

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod pocket;
pub mod template;
