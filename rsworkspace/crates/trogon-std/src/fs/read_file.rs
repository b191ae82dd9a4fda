use std::io;
use std::path::Path;

/// Contents must be valid UTF-8; anything else is an
/// [`io::ErrorKind::InvalidData`] error.
pub trait ReadFile {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
