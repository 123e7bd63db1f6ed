/// Blocking user-interaction seam.
///
/// The controller never talks to a terminal (or any UI toolkit)
/// directly: validation warnings, write-path failures, and delete
/// confirmations all go through this trait. The terminal front end
/// reads stdin; the test suite scripts the answers.
pub trait UserPrompt: Send + Sync {
    /// Surface a blocking, user-facing message.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `false` aborts the calling operation
    /// with no side effect.
    fn confirm(&self, message: &str) -> bool;
}
