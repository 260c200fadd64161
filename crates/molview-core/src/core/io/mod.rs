//! Reading structure files and escaping their text for embedding in a script literal.
//!
//! Structure files are treated as opaque text. Nothing here parses PDB records; the
//! only transformation applied is the escaping of control characters that would
//! otherwise break the generated JavaScript.

pub mod escape;
pub mod reader;
