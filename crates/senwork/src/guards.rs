//! Runtime shape checks for untyped JSON
//!
//! Each guard answers "does this value look like an X?" without decoding it.
//! Checks are shallow: they look at the fields that identify a record and at
//! the types of a few fields that must be arrays or bounded numbers, and
//! nothing deeper. A guard never panics and returns `false` for `null`,
//! primitives, arrays, and objects missing any checked field.
//!
//! [`parse_api_response`] combines a guard with the envelope check, and
//! [`Guard`] ties each record type to its guard so that
//! [`parse_guarded`] can pick the right one from the target type.
//!
//! # Examples
//!
//! ```rust
//! use senwork::guards::{is_about_info, parse_api_response};
//! use senwork::types::AboutInfo;
//! use serde_json::json;
//!
//! let body = json!({
//!     "success": true,
//!     "data": {"name": "Sen", "title": "工程师", "email": "a@b.c", "avatar": "url"}
//! });
//!
//! let about: Option<AboutInfo> = parse_api_response(&body, is_about_info);
//! assert_eq!(about.unwrap().name, "Sen");
//! ```

use crate::types::{AboutInfo, ContactForm, Experience, Project, Service, Skill};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

fn has_string(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(Value::is_string)
}

fn has_array(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(Value::is_array)
}

fn has_strings<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Map<String, Value>> {
    let object = value.as_object()?;
    keys.iter()
        .all(|key| has_string(object, key))
        .then_some(object)
}

/// `name`, `title`, `email` and `avatar` are strings.
pub fn is_about_info(value: &Value) -> bool {
    has_strings(value, &["name", "title", "email", "avatar"]).is_some()
}

/// `name` and `category` are strings and `proficiency` is an integer in
/// `0..=100`, bounds included.
pub fn is_skill(value: &Value) -> bool {
    has_strings(value, &["name", "category"]).is_some_and(|object| {
        object
            .get("proficiency")
            .and_then(Value::as_u64)
            .is_some_and(|proficiency| proficiency <= 100)
    })
}

/// `id`, `name`, `shortDesc` and `category` are strings and `features` is an
/// array.
pub fn is_service(value: &Value) -> bool {
    has_strings(value, &["id", "name", "shortDesc", "category"])
        .is_some_and(|object| has_array(object, "features"))
}

/// `id`, `company`, `position` and `startDate` are strings.
pub fn is_experience(value: &Value) -> bool {
    has_strings(value, &["id", "company", "position", "startDate"]).is_some()
}

/// `id`, `name` and `description` are strings and `techStack` is an array.
pub fn is_project(value: &Value) -> bool {
    has_strings(value, &["id", "name", "description"])
        .is_some_and(|object| has_array(object, "techStack"))
}

/// `name`, `email`, `subject` and `message` are strings.
pub fn is_contact_form(value: &Value) -> bool {
    has_strings(value, &["name", "email", "subject", "message"]).is_some()
}

/// The envelope reports success and carries a `data` field.
///
/// A `data` of `null` counts as present; the payload guard decides whether
/// `null` is acceptable.
pub fn is_api_success(value: &Value) -> bool {
    value.get("success") == Some(&Value::Bool(true)) && value.get("data").is_some()
}

/// The envelope reports failure and carries an `error` field.
pub fn is_api_error(value: &Value) -> bool {
    value.get("success") == Some(&Value::Bool(false)) && value.get("error").is_some()
}

/// Extract validated data from an envelope.
///
/// Returns `None` when `response` is not an object, when it is not a success
/// envelope with data, when `validator` rejects the data, or when the data
/// does not decode into `T`. Never returns an error.
pub fn parse_api_response<T, V>(response: &Value, validator: V) -> Option<T>
where
    T: DeserializeOwned,
    V: Fn(&Value) -> bool,
{
    if !response.is_object() || !is_api_success(response) {
        trace!("Response is not a success envelope");
        return None;
    }

    let data = response.get("data")?;
    if !validator(data) {
        trace!("Envelope data rejected by guard");
        return None;
    }

    serde_json::from_value(data.clone()).ok()
}

/// A record type with a runtime guard.
pub trait Guard: DeserializeOwned {
    /// Whether `value` has the shape of `Self`.
    fn guard(value: &Value) -> bool;
}

impl Guard for AboutInfo {
    fn guard(value: &Value) -> bool {
        is_about_info(value)
    }
}

impl Guard for Skill {
    fn guard(value: &Value) -> bool {
        is_skill(value)
    }
}

impl Guard for Service {
    fn guard(value: &Value) -> bool {
        is_service(value)
    }
}

impl Guard for Experience {
    fn guard(value: &Value) -> bool {
        is_experience(value)
    }
}

impl Guard for Project {
    fn guard(value: &Value) -> bool {
        is_project(value)
    }
}

impl Guard for ContactForm {
    fn guard(value: &Value) -> bool {
        is_contact_form(value)
    }
}

/// An array whose every element passes `T`'s guard.
impl<T: Guard> Guard for Vec<T> {
    fn guard(value: &Value) -> bool {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(T::guard))
    }
}

/// [`parse_api_response`] with `T`'s own guard.
pub fn parse_guarded<T: Guard>(response: &Value) -> Option<T> {
    parse_api_response(response, T::guard)
}
