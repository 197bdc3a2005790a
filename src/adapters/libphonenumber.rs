use crate::core::NumberFormatter;
use crate::utils::error::{FormatError, Result};
use phonenumber::Mode;

/// Major/minor version of the `phonenumber` dependency in Cargo.toml.
pub const PHONENUMBER_VERSION: &str = "0.3";

/// `NumberFormatter` backed by the `phonenumber` crate's bundled libphonenumber metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumber;

impl LibPhoneNumber {
    pub fn new() -> Self {
        Self
    }
}

impl NumberFormatter for LibPhoneNumber {
    fn backend(&self) -> &'static str {
        "phonenumber"
    }

    fn version(&self) -> &'static str {
        PHONENUMBER_VERSION
    }

    fn format_international(&self, raw: &str) -> Result<String> {
        // 不指定地區，國碼必須包含在字串中
        let parsed =
            phonenumber::parse(None, raw).map_err(|e| FormatError::PhoneNumberError {
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Parsed {} (country code {}, national number {})",
            raw,
            parsed.code().value(),
            parsed.national().value()
        );

        Ok(parsed.format().mode(Mode::International).to_string())
    }
}
