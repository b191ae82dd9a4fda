use std::io;

/// Removing a key that is not set is not an error.
pub trait RemoveEnv {
    fn remove_var(&self, key: &str) -> io::Result<()>;
}
