use std::path::Path;

/// Existence only; whether the file is readable is answered by
/// [`ReadFile`](super::ReadFile).
pub trait ExistsFile {
    fn exists(&self, path: &Path) -> bool;
}
