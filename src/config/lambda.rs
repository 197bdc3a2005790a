#[cfg(feature = "lambda")]
use crate::utils::error::Result;
#[cfg(feature = "lambda")]
use crate::utils::validation::parse_bool_flag;
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub function_name: String,
    pub log_json: bool,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let log_json = match lookup("PHONE_FORMATTER_LOG_JSON") {
            Some(value) => parse_bool_flag("PHONE_FORMATTER_LOG_JSON", &value)?,
            None => true,
        };

        Ok(Self {
            function_name: lookup("AWS_LAMBDA_FUNCTION_NAME")
                .unwrap_or_else(|| "FormatPhoneNumber".to_string()),
            log_json,
        })
    }
}

#[cfg(feature = "lambda")]
impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        // 驗證函數名稱
        validate_non_empty_string("function_name", &self.function_name)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
