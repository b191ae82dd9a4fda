//! Zero-cost abstraction for the arguments the process was started with.
//!
//! # Examples
//!
//! ```
//! use trogon_std::args::{ReadArgs, SystemArgs};
//!
//! fn has_flag<A: ReadArgs>(args: &A, flag: &str) -> bool {
//!     args.args().iter().any(|arg| arg == flag)
//! }
//!
//! let verbose = has_flag(&SystemArgs, "--verbose");
//! ```
//!
//! ```ignore
//! use trogon_std::args::FixedArgs;
//!
//! let args = FixedArgs::new(["app", "--verbose"]);
//! assert!(has_flag(&args, "--verbose"));
//! ```

mod fixed;
mod read_args;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use fixed::FixedArgs;
pub use read_args::ReadArgs;
pub use system::SystemArgs;
