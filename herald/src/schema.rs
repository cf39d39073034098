//! Payload schemas for inbound release events.
//!
//! One explicit schema per category, built from composable per-field
//! checks. Unknown fields are dropped; missing fields, wrong types, empty
//! required strings, and malformed URLs are rejected. Validation is
//! synchronous, performs no I/O, and reports the first violated
//! constraint in declared field order.

use serde_json::{Map, Value};
use url::Url;

use crate::error::ValidationError;
use crate::event::{LauncherRelease, LoaderRelease, ModRelease, ReleaseCategory, ReleaseEvent};

/// Validate a raw payload against its category schema.
pub fn validate(category: ReleaseCategory, payload: &Value) -> Result<ReleaseEvent, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    match category {
        ReleaseCategory::ModVersion => validate_mod(object).map(ReleaseEvent::Mod),
        ReleaseCategory::LauncherVersion => validate_launcher(object).map(ReleaseEvent::Launcher),
        ReleaseCategory::LoaderVersion => validate_loader(object).map(ReleaseEvent::Loader),
    }
}

fn validate_mod(object: &Map<String, Value>) -> Result<ModRelease, ValidationError> {
    Ok(ModRelease {
        title: require_text(object, "title")?,
        description: require_text(object, "description")?,
        banner_url: require_url(object, "banner_url")?,
        icon_url: require_url(object, "icon_url")?,
        mod_url: require_url(object, "mod_url")?,
        author_name: require_text(object, "author_name")?,
        author_url: require_url(object, "author_url")?,
        version: require_text(object, "version")?,
        changelog: require_text(object, "changelog")?,
        initial: require_bool(object, "initial")?,
    })
}

fn validate_launcher(object: &Map<String, Value>) -> Result<LauncherRelease, ValidationError> {
    Ok(LauncherRelease {
        title: require_text(object, "title")?,
        description: require_text(object, "description")?,
        icon_url: require_url(object, "icon_url")?,
        version: require_text(object, "version")?,
        changelog: require_text(object, "changelog")?,
    })
}

fn validate_loader(object: &Map<String, Value>) -> Result<LoaderRelease, ValidationError> {
    Ok(LoaderRelease {
        title: require_text(object, "title")?,
        description: require_text(object, "description")?,
        icon_url: require_url(object, "icon_url")?,
        version: require_text(object, "version")?,
    })
}

/// A required non-empty string field.
fn require_text(object: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    let value = object
        .get(field)
        .ok_or(ValidationError::MissingField(field))?;
    let text = value.as_str().ok_or(ValidationError::WrongType {
        field,
        expected: "string",
    })?;
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(text.to_string())
}

/// A required string field that must parse as a URL (any scheme).
fn require_url(object: &Map<String, Value>, field: &'static str) -> Result<Url, ValidationError> {
    let text = require_text(object, field)?;
    Url::parse(&text).map_err(|reason| ValidationError::MalformedUrl { field, reason })
}

/// A required boolean field.
fn require_bool(object: &Map<String, Value>, field: &'static str) -> Result<bool, ValidationError> {
    let value = object
        .get(field)
        .ok_or(ValidationError::MissingField(field))?;
    value.as_bool().ok_or(ValidationError::WrongType {
        field,
        expected: "boolean",
    })
}
