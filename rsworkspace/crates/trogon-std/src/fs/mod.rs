//! Zero-cost abstraction for the filesystem reads a `.env` loader needs.
//!
//! # Examples
//!
//! ```
//! use trogon_std::fs::{ExistsFile, ReadFile, SystemFs};
//! use std::path::Path;
//!
//! fn read_optional<F: ReadFile + ExistsFile>(fs: &F, path: &Path) -> Option<String> {
//!     if !fs.exists(path) {
//!         return None;
//!     }
//!     fs.read_to_string(path).ok()
//! }
//!
//! let dotenv = read_optional(&SystemFs, Path::new(".env"));
//! ```
//!
//! ```ignore
//! use trogon_std::fs::MemFs;
//! use std::path::Path;
//!
//! let fs = MemFs::new();
//! fs.insert(".env", "PORT=8080\n");
//!
//! assert_eq!(read_optional(&fs, Path::new(".env")).as_deref(), Some("PORT=8080\n"));
//! ```

mod exists_file;
mod mem;
mod read_file;
mod system;

pub use exists_file::ExistsFile;
#[cfg(any(test, feature = "test-support"))]
pub use mem::MemFs;
pub use read_file::ReadFile;
pub use system::SystemFs;
