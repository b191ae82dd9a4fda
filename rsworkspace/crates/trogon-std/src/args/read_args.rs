/// Ordered startup arguments, program name first when the host provides one.
pub trait ReadArgs {
    fn args(&self) -> Vec<String>;

    /// `true` if any argument starts with `prefix`.
    fn any_starts_with(&self, prefix: &str) -> bool {
        self.args().iter().any(|arg| arg.starts_with(prefix))
    }
}
