use std::io;

/// Failures use [`io::Error`] so callers can wrap them the same way they
/// wrap filesystem errors.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait WriteEnv {
    fn set_var(&self, key: &str, value: &str) -> io::Result<()>;
}
