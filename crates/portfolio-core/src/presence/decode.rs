//! Presence payload decoding.
//!
//! Upstreams and proxies disagree on the response shape, so a record is
//! matched against a fixed, ordered list of known shapes. The first match
//! wins; a record matching none of them is [`PresenceRecord::Unknown`].

use serde_json::Value;

use super::PresenceState;

const ENVELOPE_KEYS: [&str; 4] = ["userPresences", "data", "presences", "presence"];
const CODE_KEYS: [&str; 3] = ["userPresenceType", "presenceType", "type"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationHint {
    Studio,
    Place,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceRecord {
    /// A numeric presence code field.
    Code(i64),
    /// A presence code sent as a string ("2").
    CodeString(i64),
    /// Derived from the `lastLocation` text.
    Location(LocationHint),
    /// Only an `isOnline` flag.
    OnlineFlag(bool),
    /// A `placeId` without any code.
    InPlace,
    Unknown,
}

impl PresenceRecord {
    pub fn decode(record: &Value) -> Self {
        let Some(obj) = record.as_object() else {
            return PresenceRecord::Unknown;
        };

        if let Some(code) = CODE_KEYS
            .iter()
            .find_map(|k| obj.get(*k).and_then(Value::as_i64))
        {
            return PresenceRecord::Code(code);
        }

        // Only the first non-null code field counts, like the web client.
        let first_code = CODE_KEYS
            .iter()
            .find_map(|k| obj.get(*k).filter(|v| !v.is_null()));
        if let Some(code) = first_code.and_then(Value::as_str).and_then(leading_int) {
            return PresenceRecord::CodeString(code);
        }

        if let Some(location) = obj.get("lastLocation").and_then(Value::as_str) {
            if location.to_ascii_lowercase().contains("studio") {
                return PresenceRecord::Location(LocationHint::Studio);
            }
            if !location.is_empty() && location.bytes().all(|b| b.is_ascii_digit()) {
                return PresenceRecord::Location(LocationHint::Place);
            }
        }

        if let Some(online) = obj.get("isOnline").and_then(Value::as_bool) {
            return PresenceRecord::OnlineFlag(online);
        }

        let nested_place = obj.get("currentPlace").and_then(|p| p.get("placeId"));
        if obj.get("placeId").is_some_and(truthy) || nested_place.is_some_and(truthy) {
            return PresenceRecord::InPlace;
        }

        PresenceRecord::Unknown
    }

    pub fn state(&self) -> PresenceState {
        match self {
            PresenceRecord::Code(code) | PresenceRecord::CodeString(code) => {
                PresenceState::from_code(*code)
            }
            PresenceRecord::Location(LocationHint::Studio) => PresenceState::InStudio,
            PresenceRecord::Location(LocationHint::Place) | PresenceRecord::InPlace => {
                PresenceState::InGame
            }
            PresenceRecord::OnlineFlag(true) => PresenceState::Online,
            PresenceRecord::OnlineFlag(false) | PresenceRecord::Unknown => PresenceState::Offline,
        }
    }
}

/// Pull the single presence record out of a response body.
///
/// The first present envelope key wins (falling back to the body itself);
/// arrays yield their first element, objects are used as is.
pub fn extract_record(body: &Value) -> Option<&Value> {
    let inner = ENVELOPE_KEYS
        .iter()
        .find_map(|k| body.get(*k).filter(|v| !v.is_null()))
        .unwrap_or(body);
    match inner {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(inner),
        _ => None,
    }
}

/// Decode a whole response body straight to a state.
pub fn decode_body(body: &Value) -> PresenceState {
    extract_record(body)
        .map(PresenceRecord::decode)
        .unwrap_or(PresenceRecord::Unknown)
        .state()
}

fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
