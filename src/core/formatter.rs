use crate::core::{FormatRequest, FormatResponse, HttpReply, NumberFormatter};
use crate::utils::error::Result;
use std::io::Write;

pub struct PhoneFormatter<F: NumberFormatter> {
    formatter: F,
}

impl<F: NumberFormatter> PhoneFormatter<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    pub fn backend(&self) -> &'static str {
        self.formatter.backend()
    }

    /// Formats `raw` internationally, with hyphens replaced by spaces.
    pub fn format_number(&self, raw: &str) -> Result<FormatResponse> {
        let international = self.formatter.format_international(raw)?;
        tracing::debug!("Formatted {} as {}", raw, international);

        Ok(FormatResponse {
            original_phone_number: raw.to_string(),
            international_phone_number: international.replace('-', " "),
        })
    }

    pub fn format_body(&self, body: &[u8]) -> Result<FormatResponse> {
        let request = FormatRequest::from_slice(body)?;
        self.format_number(&request.phone_number)
    }

    /// Handles one request body. Never fails: every error becomes a 400 reply.
    pub fn handle(&self, body: &[u8]) -> HttpReply {
        tracing::info!("Processing request for phone number conversion.");
        tracing::info!(
            "Phone number backend: {} version {}",
            self.formatter.backend(),
            self.formatter.version()
        );

        self.respond(self.format_body(body))
    }

    pub fn respond(&self, result: Result<FormatResponse>) -> HttpReply {
        let rendered =
            result.and_then(|response| serde_json::to_string(&response).map_err(Into::into));

        match rendered {
            Ok(body) => HttpReply::ok_json(body),
            Err(e) => {
                tracing::error!("Error processing request: {}", e);
                HttpReply::bad_request(&e)
            }
        }
    }

    /// Formats each number, one line per result: `original -> international`,
    /// or the JSON response body when `json` is set. Failures go to `err` with
    /// the standard error prefix. Returns how many numbers failed.
    pub fn format_all<O, E>(
        &self,
        numbers: &[String],
        json: bool,
        out: &mut O,
        err: &mut E,
    ) -> Result<usize>
    where
        O: Write,
        E: Write,
    {
        let mut failures = 0;

        for number in numbers {
            match self.format_number(number) {
                Ok(response) if json => writeln!(out, "{}", serde_json::to_string(&response)?)?,
                Ok(response) => writeln!(
                    out,
                    "{} -> {}",
                    response.original_phone_number, response.international_phone_number
                )?,
                Err(e) => {
                    failures += 1;
                    tracing::debug!("Failed to format {}: {:?}", number, e);
                    writeln!(err, "{}", HttpReply::bad_request(&e).body)?;
                }
            }
        }

        Ok(failures)
    }
}
