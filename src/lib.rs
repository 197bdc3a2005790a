pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::libphonenumber::LibPhoneNumber;
pub use core::formatter::PhoneFormatter;
pub use domain::model::{FormatRequest, FormatResponse, HttpReply};
pub use utils::error::{FormatError, Result};
