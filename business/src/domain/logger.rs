/// Logging port used by use cases and data adapters.
///
/// Kept free of any logging crate so the domain stays I/O agnostic.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
