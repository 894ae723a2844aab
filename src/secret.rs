//! # Secret Values
//!
//! A secret payload is either text or binary. Exactly one form is sent per
//! request, and the form decides whether the `SecretString` or the
//! `SecretBinary` slot is filled.

use aws_sdk_secretsmanager::primitives::Blob;
use std::fmt;

/// Text or binary secret payload
#[derive(Clone, PartialEq, Eq)]
pub enum SecretValue {
    /// Goes into `SecretString`
    Text(String),
    /// Goes into `SecretBinary`
    Binary(Vec<u8>),
}

impl SecretValue {
    /// Text payload, if this is a text secret
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SecretValue::Text(text) => Some(text),
            SecretValue::Binary(_) => None,
        }
    }

    /// Binary payload, if this is a binary secret
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            SecretValue::Text(_) => None,
            SecretValue::Binary(bytes) => Some(bytes),
        }
    }

    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, SecretValue::Binary(_))
    }

    /// Raw bytes of the payload regardless of form
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            SecretValue::Text(text) => text.as_bytes(),
            SecretValue::Binary(bytes) => bytes,
        }
    }

    /// Split into the `(SecretString, SecretBinary)` request slots
    pub(crate) fn into_slots(self) -> (Option<String>, Option<Blob>) {
        match self {
            SecretValue::Text(text) => (Some(text), None),
            SecretValue::Binary(bytes) => (None, Some(Blob::new(bytes))),
        }
    }

    /// Pick whichever response slot is populated, preferring the string slot
    pub(crate) fn from_slots(text: Option<&str>, binary: Option<&Blob>) -> Option<Self> {
        text.map(|t| SecretValue::Text(t.to_string()))
            .or_else(|| binary.map(|b| SecretValue::Binary(b.as_ref().to_vec())))
    }
}

// Payloads never reach logs.
impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretValue::Text(text) => f
                .debug_struct("Text")
                .field("len", &text.len())
                .finish_non_exhaustive(),
            SecretValue::Binary(bytes) => f
                .debug_struct("Binary")
                .field("len", &bytes.len())
                .finish_non_exhaustive(),
        }
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        SecretValue::Text(value.to_string())
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        SecretValue::Text(value)
    }
}

impl From<Vec<u8>> for SecretValue {
    fn from(value: Vec<u8>) -> Self {
        SecretValue::Binary(value)
    }
}

impl From<&[u8]> for SecretValue {
    fn from(value: &[u8]) -> Self {
        SecretValue::Binary(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for SecretValue {
    fn from(value: &[u8; N]) -> Self {
        SecretValue::Binary(value.to_vec())
    }
}
