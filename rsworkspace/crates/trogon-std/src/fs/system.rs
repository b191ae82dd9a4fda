use std::path::Path;

use super::{ExistsFile, ReadFile};

/// Zero-sized type — delegates to `std::fs`.
pub struct SystemFs;

impl ReadFile for SystemFs {
    #[inline]
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl ExistsFile for SystemFs {
    #[inline]
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_system_fs_nonexistent_file() {
        let fs = SystemFs;
        assert!(!fs.exists(Path::new("/nonexistent_trogon_std_dotenv_12345")));
    }

    #[test]
    fn test_system_fs_directory_is_not_a_file() {
        let dir = std::env::temp_dir();
        assert!(!SystemFs.exists(&dir));
    }

    #[test]
    fn test_generic_function_with_system_fs() {
        fn read_dotenv<F: ReadFile>(fs: &F, path: &Path) -> String {
            fs.read_to_string(path).unwrap_or_default()
        }

        let fs = SystemFs;
        assert_eq!(read_dotenv(&fs, Path::new("/nonexistent_12345/.env")), "");
    }
}
