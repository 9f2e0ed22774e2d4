/// Unwrap a `Result` whose error renders with `Display`.
pub trait DisplayError<T, E: std::fmt::Display> {
    /// Panics with the `Display` rendering of the error, rather than the
    /// `Debug` one a plain `unwrap` would use.
    fn unwrap_display(self) -> T;
}

impl<T, E: std::fmt::Display> DisplayError<T, E> for std::result::Result<T, E> {
    fn unwrap_display(self) -> T {
        self.unwrap_or_else(|e| panic!("❌ {} ❌", e))
    }
}
