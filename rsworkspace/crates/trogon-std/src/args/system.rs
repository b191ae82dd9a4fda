use super::ReadArgs;

/// Zero-sized type — delegates to `std::env::args_os`.
///
/// Arguments that are not valid Unicode are converted lossily rather than
/// panicking like `std::env::args`.
pub struct SystemArgs;

impl ReadArgs for SystemArgs {
    #[inline]
    fn args(&self) -> Vec<String> {
        std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}
