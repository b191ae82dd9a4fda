#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::{env, io};

#[cfg(any(test, feature = "test-support"))]
use super::{ReadEnv, RemoveEnv, WriteEnv};

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability — all methods take `&self`,
/// consistent with [`MemFs`](crate::fs::MemFs).
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
        }
    }

    /// Seeds a variable without going through [`WriteEnv`].
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }

    /// Copy of every variable, for asserting that a store was left untouched.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.vars.borrow().clone()
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for InMemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let env = Self::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

#[cfg(any(test, feature = "test-support"))]
impl WriteEnv for InMemoryEnv {
    fn set_var(&self, key: &str, value: &str) -> io::Result<()> {
        self.set(key, value);
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
impl RemoveEnv for InMemoryEnv {
    fn remove_var(&self, key: &str) -> io::Result<()> {
        self.remove(key);
        Ok(())
    }
}
