use crate::utils::error::Result;

/// Parses a raw phone number and renders it in international format.
///
/// Implementations must not assume a default region: the raw string carries
/// its own country code.
pub trait NumberFormatter: Send + Sync {
    /// Name of the numbering-plan library behind this formatter, for logging.
    fn backend(&self) -> &'static str;

    /// Version of that library, for logging.
    fn version(&self) -> &'static str;

    fn format_international(&self, raw: &str) -> Result<String>;
}
