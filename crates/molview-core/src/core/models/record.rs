use std::path::Path;

/// Read-only view shared by ligand, protein and pocket records.
///
/// Implementors capture their escaped file content once at construction; there is no
/// way to replace it afterwards.
pub trait StructureRecord {
    /// Location the record was loaded from.
    fn path(&self) -> &Path;

    /// File text with newlines (and, for pockets, tabs) escaped.
    fn content(&self) -> &str;

    /// Mol* representation type, e.g. `cartoon` or `ball-and-stick`.
    fn style(&self) -> &str;
}
