//! Best-effort casting of environment strings into typed values
//!
//! Each value goes through an ordered list of rules, first match wins:
//! pass-through marker, loose number, boolean, JSON, then plain string.

pub mod numeric;

pub use numeric::{is_loose_numeric, loose_number};

use crate::domain::Settings;
use crate::env::EnvSnapshot;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Cast environment: same keys as the snapshot, typed values.
pub type CastEnv = Map<String, Value>;

/// Which rule decided a value's final form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CastOutcome {
    Passthrough,
    Numeric,
    /// Numeric by the loose test but not representable as a JSON number
    NonFinite,
    Boolean,
    Json,
    JsonFailed,
    Miss,
}

impl CastOutcome {
    pub fn describe(self) -> &'static str {
        match self {
            CastOutcome::Passthrough => "remains string, flagged for pass through",
            CastOutcome::Numeric => "was cast numeric",
            CastOutcome::NonFinite => "remains string, number is not finite",
            CastOutcome::Boolean => "was cast boolean",
            CastOutcome::Json => "was cast from JSON",
            CastOutcome::JsonFailed => "remains string, casting JSON string failed",
            CastOutcome::Miss => "remains string, miss",
        }
    }
}

/// Cast a single raw value.
pub fn cast_value(settings: &Settings, raw: &str) -> (Value, CastOutcome) {
    if settings.passthrough {
        if let Some(kept) = raw.strip_suffix(settings.passthrough_char) {
            return (Value::String(kept.to_string()), CastOutcome::Passthrough);
        }
    }

    if settings.cast_numbers {
        if let Some(number) = loose_number(raw) {
            return match number_value(number) {
                Some(value) => (value, CastOutcome::Numeric),
                None => (Value::String(raw.to_string()), CastOutcome::NonFinite),
            };
        }
    }

    if settings.cast_booleans {
        match raw.to_lowercase().as_str() {
            "true" => return (Value::Bool(true), CastOutcome::Boolean),
            "false" => return (Value::Bool(false), CastOutcome::Boolean),
            _ => {}
        }
    }

    if settings.cast_json {
        return match serde_json::from_str::<Value>(raw) {
            Ok(value) => (value, CastOutcome::Json),
            Err(_) => (Value::String(raw.to_string()), CastOutcome::JsonFailed),
        };
    }

    (Value::String(raw.to_string()), CastOutcome::Miss)
}

/// Cast every variable of `env`. The snapshot itself is left untouched.
pub fn cast_vars(settings: &Settings, env: &EnvSnapshot) -> CastEnv {
    let mut out = CastEnv::new();
    for (key, raw) in env.iter() {
        let (value, outcome) = cast_value(settings, raw);
        if settings.debug_casting {
            tracing::debug!(key, ?outcome, "{} {}", key, outcome.describe());
        }
        out.insert(key.to_string(), value);
    }
    out
}

/// Integral values become JSON integers; non-finite values have no JSON form.
fn number_value(number: f64) -> Option<Value> {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        return Some(Value::from(number as i64));
    }
    Number::from_f64(number).map(Value::Number)
}
