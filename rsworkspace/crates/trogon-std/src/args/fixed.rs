#[cfg(any(test, feature = "test-support"))]
use super::ReadArgs;

/// Startup arguments fixed at construction.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedArgs {
    args: Vec<String>,
}

#[cfg(any(test, feature = "test-support"))]
impl FixedArgs {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// No arguments at all, not even a program name.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadArgs for FixedArgs {
    fn args(&self) -> Vec<String> {
        self.args.clone()
    }
}
