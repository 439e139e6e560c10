use rand::Rng;
use rand::distributions::{Alphanumeric, DistString};
use serde_json::Value;

use crate::error::ValidationError;

/// Largest digit count whose `10^n` upper bound still fits in a `u64`.
pub const MAX_NUMBER_DIGITS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Number,
    String,
    /// A configured kind with no generator. The `id` field is set to `null`.
    Unknown,
}

impl IdKind {
    /// Maps a configured kind name to an id kind. An empty name means no id is
    /// configured; any other unrecognized name maps to [`IdKind::Unknown`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "number" => Some(IdKind::Number),
            "string" => Some(IdKind::String),
            _ => Some(IdKind::Unknown),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IdKind::Number => "number",
            IdKind::String => "string",
            IdKind::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdValue {
    Number(u64),
    Text(String),
    Null,
}

impl From<IdValue> for Value {
    fn from(value: IdValue) -> Self {
        match value {
            IdValue::Number(number) => Value::from(number),
            IdValue::Text(text) => Value::String(text),
            IdValue::Null => Value::Null,
        }
    }
}

/// Kind and length of the random id injected into POST bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSpec {
    kind: IdKind,
    length: usize,
}

impl IdSpec {
    /// # Errors
    ///
    /// Returns an error when a numeric id would need more than
    /// [`MAX_NUMBER_DIGITS`] digits.
    pub const fn new(kind: IdKind, length: usize) -> Result<Self, ValidationError> {
        if matches!(kind, IdKind::Number) && length > MAX_NUMBER_DIGITS {
            return Err(ValidationError::IdLengthTooLarge {
                length,
                max: MAX_NUMBER_DIGITS,
            });
        }
        Ok(Self { kind, length })
    }

    #[must_use]
    pub const fn kind(&self) -> IdKind {
        self.kind
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Draws a fresh id from `rng`. Numbers are uniform in `[0, 10^length)`,
    /// strings are `length` characters from `[a-zA-Z0-9]`. Unknown kinds draw
    /// nothing and yield [`IdValue::Null`].
    pub fn generate<R>(&self, rng: &mut R) -> IdValue
    where
        R: Rng + ?Sized,
    {
        match self.kind {
            IdKind::Number => {
                let upper = u32::try_from(self.length)
                    .ok()
                    .and_then(|digits| 10u64.checked_pow(digits))
                    .unwrap_or(u64::MAX);
                IdValue::Number(rng.gen_range(0..upper))
            }
            IdKind::String => IdValue::Text(Alphanumeric.sample_string(rng, self.length)),
            IdKind::Unknown => IdValue::Null,
        }
    }
}
