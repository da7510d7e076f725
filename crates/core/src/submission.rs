//! Parsing and validation of `POST /solve` bodies.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. body is valid JSON
//! 2. body is a JSON object
//! 3. `url` is present and truthy (and a string)
//! 4. `secret` is present and truthy
//!
//! The secret comparison itself is a separate step ([`Submission::authorize`])
//! so the caller decides when it happens, but a [`Submission`] can only be
//! turned into a dispatchable URL through it.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::CoreError;

/// A syntactically valid submission that has not been authorized yet.
#[derive(Clone)]
pub struct Submission {
    url: String,
    // Kept as the raw JSON value: a non-string secret is accepted here and
    // rejected by the comparison, never coerced to text.
    secret: Value,
}

impl Submission {
    /// Parse and validate a raw request body.
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| CoreError::MalformedBody)?;

        let Value::Object(mut fields) = value else {
            return Err(CoreError::InvalidShape);
        };

        let url = match take_truthy(&mut fields, "url")? {
            Value::String(url) => url,
            _ => return Err(CoreError::InvalidField("url")),
        };
        let secret = take_truthy(&mut fields, "secret")?;

        Ok(Self { url, secret })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Compare the submitted secret against the configured one and, on
    /// success, release the URL for dispatch.
    ///
    /// Plain string equality.
    pub fn authorize(self, expected: &str) -> Result<String, CoreError> {
        match &self.secret {
            Value::String(secret) if secret == expected => Ok(self.url),
            _ => Err(CoreError::Forbidden),
        }
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("url", &self.url)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Remove `name` from the object, failing with `MissingField` when it is
/// absent or falsy.
fn take_truthy(fields: &mut Map<String, Value>, name: &'static str) -> Result<Value, CoreError> {
    match fields.remove(name) {
        Some(value) if is_truthy(&value) => Ok(value),
        _ => Err(CoreError::MissingField(name)),
    }
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays and
/// objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
