//! Free-text phone number format checks.
//!
//! Numbers are parsed without a default region, so only internationally
//! formatted input (leading `+` and country code) can pass. Presence is a
//! separate concern: an empty value is always accepted here.

use phonenumber::{is_valid, parse};
use thiserror::Error;

/// Reason a phone number string was rejected. Only the first failing rule is
/// reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Phone number cannot be parsed")]
    Unparseable,
    #[error("Phone number is parsed, but invalid")]
    Invalid,
    #[error("Phone number extensions are not allowed")]
    Extension,
}

/// Checks a phone number typed by the user.
///
/// `None` and `""` are valid. Anything else must parse, satisfy the numbering
/// plan of its region and carry no extension.
pub fn validate_phone_string(value: Option<&str>) -> Result<(), PhoneError> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(());
    };

    let number = parse(None, value).map_err(|_| PhoneError::Unparseable)?;

    if !is_valid(&number) {
        return Err(PhoneError::Invalid);
    }
    if number.extension().is_some() {
        return Err(PhoneError::Extension);
    }

    Ok(())
}
