use super::escape::{EscapeSet, escape};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to read structure file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads all text from a reader and escapes it.
///
/// # Errors
///
/// Returns the underlying I/O error, including `InvalidData` for non-UTF-8 input.
pub fn read_escaped_from(reader: &mut impl Read, set: EscapeSet) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(escape(&text, set))
}

/// Reads a whole structure file and escapes it for embedding.
///
/// The file handle is dropped before returning, on success and on error.
///
/// # Arguments
///
/// * `path` - The file to read.
/// * `set` - Which control characters to escape.
///
/// # Errors
///
/// Returns [`RecordError::Io`] carrying the path if the file is missing, unreadable or
/// not valid UTF-8. Empty files are not an error.
pub fn read_escaped<P: AsRef<Path>>(path: P, set: EscapeSet) -> Result<String, RecordError> {
    let path = path.as_ref();
    let to_record_error = |source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_record_error)?;
    let mut reader = BufReader::new(file);
    let content = read_escaped_from(&mut reader, set).map_err(to_record_error)?;

    debug!(
        "Read {} escaped bytes from {:?} ({:?}).",
        content.len(),
        path,
        set
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn read_escaped_returns_escaped_file_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ligand.pdb");
        fs::write(&path, "HETATM 1\nEND\n").unwrap();

        let content = read_escaped(&path, EscapeSet::Newlines).unwrap();
        assert_eq!(content, "HETATM 1\\nEND\\n");
    }

    #[test]
    fn read_escaped_accepts_empty_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.pdb");
        fs::write(&path, "").unwrap();

        assert_eq!(read_escaped(&path, EscapeSet::Newlines).unwrap(), "");
    }

    #[test]
    fn missing_file_reports_path_and_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.pdb");

        let err = read_escaped(&path, EscapeSet::Newlines).unwrap_err();
        let RecordError::Io {
            path: err_path,
            source,
        } = &err;
        assert_eq!(err_path, &path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.pdb"));
    }

    #[test]
    fn invalid_utf8_propagates_as_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.pdb");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = read_escaped(&path, EscapeSet::Newlines).unwrap_err();
        let RecordError::Io { source, .. } = err;
        assert_eq!(source.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn read_escaped_from_works_on_in_memory_readers() {
        let mut reader = "A\tB\n".as_bytes();
        let content = read_escaped_from(&mut reader, EscapeSet::NewlinesAndTabs).unwrap();
        assert_eq!(content, "A\\tB\\n");
    }
}
