pub mod formatter;

pub use crate::domain::model::{FormatRequest, FormatResponse, HttpReply};
pub use crate::domain::ports::NumberFormatter;
pub use crate::utils::error::Result;
