//! Conversion between EDM values and wire scalars.

use std::fmt::Display;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Datelike, NaiveDateTime, SecondsFormat, Utc};
use edmtable_model::{EdmType, EdmValue};
use uuid::Uuid;

use crate::error::{CodecError, CodecResult};
use crate::wire::WireValue;

/// Per-kind value conversion used by the entity codec.
///
/// The entity codec decides which properties need annotations and which
/// keys are metadata; everything kind-specific goes through this trait.
/// Implementations must be stateless, so one instance can serve any
/// number of concurrent calls.
pub trait TypeCodec: Send + Sync {
    /// Converts a native value to its wire form as `edm_type`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ValueConversion`] if the value cannot be
    /// represented as `edm_type`.
    fn serialize(&self, edm_type: EdmType, value: &EdmValue) -> CodecResult<WireValue>;

    /// Converts a wire scalar to a native value of `edm_type`.
    ///
    /// JSON `null` yields `Ok(None)` for every kind.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ValueConversion`] if the scalar cannot be
    /// read as `edm_type`.
    fn deserialize(&self, edm_type: EdmType, wire: &WireValue) -> CodecResult<Option<EdmValue>>;

    /// Guesses the kind of an unannotated wire scalar.
    fn infer_type(&self, wire: &WireValue) -> EdmType;

    /// Resolves an `@odata.type` annotation to a kind.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedKind`] for unknown names.
    fn parse_type(&self, type_name: &str) -> CodecResult<EdmType> {
        Ok(type_name.parse::<EdmType>()?)
    }

    /// Whether a value of `edm_type` serialized as `wire` needs an
    /// explicit `@odata.type` annotation to survive a round trip.
    fn requires_annotation(&self, edm_type: EdmType, wire: &WireValue) -> bool {
        match edm_type {
            EdmType::String | EdmType::Boolean | EdmType::Int32 => false,
            EdmType::Double => !matches!(wire, WireValue::Number(_)),
            EdmType::Binary | EdmType::Int64 | EdmType::DateTime | EdmType::Guid => true,
        }
    }
}

/// The standard table storage conversions.
///
/// Wire forms:
/// - `Edm.Int64` as a decimal string
/// - `Edm.Double` as a JSON number, or `"NaN"`, `"Infinity"`, `"-Infinity"`
/// - `Edm.DateTime` as RFC 3339 in UTC
/// - `Edm.Guid` as a hyphenated lowercase string
/// - `Edm.Binary` as standard base64
#[derive(Debug, Clone, Copy, Default)]
pub struct EdmTypeCodec;

impl TypeCodec for EdmTypeCodec {
    fn serialize(&self, edm_type: EdmType, value: &EdmValue) -> CodecResult<WireValue> {
        let wire = match (edm_type, value) {
            (EdmType::String, value) => WireValue::Text(render_text(value)),
            (EdmType::Boolean, EdmValue::Boolean(b)) => WireValue::Bool(*b),
            (EdmType::Boolean, EdmValue::String(s)) => WireValue::Bool(parse_bool(s)?),
            (EdmType::Int32, EdmValue::Int32(n)) => WireValue::Integer(i64::from(*n)),
            (EdmType::Int32, EdmValue::Int64(n)) => {
                WireValue::Integer(i64::from(narrow_i32(*n)?))
            }
            (EdmType::Int32, EdmValue::String(s)) => {
                WireValue::Integer(i64::from(parse_text::<i32>(edm_type, s)?))
            }
            (EdmType::Int64, EdmValue::Int32(_) | EdmValue::Int64(_)) => {
                WireValue::Text(value.as_i64().unwrap_or_default().to_string())
            }
            (EdmType::Int64, EdmValue::String(s)) => {
                WireValue::Text(parse_text::<i64>(edm_type, s)?.to_string())
            }
            (EdmType::Double, EdmValue::Double(f)) => double_to_wire(*f),
            (EdmType::Double, EdmValue::Int32(n)) => double_to_wire(f64::from(*n)),
            (EdmType::Double, EdmValue::Int64(n)) => double_to_wire(*n as f64),
            (EdmType::Double, EdmValue::String(s)) => double_to_wire(parse_text(edm_type, s)?),
            (EdmType::DateTime, EdmValue::DateTime(dt)) => WireValue::Text(datetime_text(dt)?),
            (EdmType::DateTime, EdmValue::String(s)) => {
                WireValue::Text(datetime_text(&parse_datetime(s)?)?)
            }
            (EdmType::Guid, EdmValue::Guid(g)) => WireValue::Text(g.to_string()),
            (EdmType::Guid, EdmValue::String(s)) => WireValue::Text(parse_guid(s)?.to_string()),
            (EdmType::Binary, EdmValue::Binary(b)) => WireValue::Text(STANDARD.encode(b)),
            (edm_type, value) => {
                return Err(CodecError::value_conversion(
                    edm_type,
                    format!("incompatible {} value", value.edm_type()),
                ))
            }
        };
        Ok(wire)
    }

    fn deserialize(&self, edm_type: EdmType, wire: &WireValue) -> CodecResult<Option<EdmValue>> {
        let value = match (edm_type, wire) {
            (_, WireValue::Null) => return Ok(None),
            (EdmType::String, WireValue::Text(s)) => EdmValue::String(s.clone()),
            (EdmType::String, WireValue::Bool(b)) => EdmValue::String(b.to_string()),
            (EdmType::String, WireValue::Integer(i)) => EdmValue::String(i.to_string()),
            (EdmType::String, WireValue::Number(f)) => EdmValue::String(f.to_string()),
            (EdmType::Boolean, WireValue::Bool(b)) => EdmValue::Boolean(*b),
            (EdmType::Boolean, WireValue::Text(s)) => EdmValue::Boolean(parse_bool(s)?),
            (EdmType::Int32, WireValue::Integer(i)) => EdmValue::Int32(narrow_i32(*i)?),
            (EdmType::Int32, WireValue::Text(s)) => EdmValue::Int32(parse_text(edm_type, s)?),
            (EdmType::Int64, WireValue::Integer(i)) => EdmValue::Int64(*i),
            (EdmType::Int64, WireValue::Text(s)) => EdmValue::Int64(parse_text(edm_type, s)?),
            (EdmType::Double, WireValue::Number(f)) => EdmValue::Double(*f),
            (EdmType::Double, WireValue::Integer(i)) => EdmValue::Double(*i as f64),
            (EdmType::Double, WireValue::Text(s)) => EdmValue::Double(parse_text(edm_type, s)?),
            (EdmType::DateTime, WireValue::Text(s)) => EdmValue::DateTime(parse_datetime(s)?),
            (EdmType::Guid, WireValue::Text(s)) => EdmValue::Guid(parse_guid(s)?),
            (EdmType::Binary, WireValue::Text(s)) => EdmValue::Binary(
                STANDARD
                    .decode(s)
                    .map_err(|e| CodecError::value_conversion(EdmType::Binary, e.to_string()))?,
            ),
            (edm_type, wire) => {
                return Err(CodecError::value_conversion(
                    edm_type,
                    format!("unexpected JSON {}", wire.shape()),
                ))
            }
        };
        Ok(Some(value))
    }

    fn infer_type(&self, wire: &WireValue) -> EdmType {
        match wire {
            WireValue::Null | WireValue::Text(_) => EdmType::String,
            WireValue::Bool(_) => EdmType::Boolean,
            WireValue::Integer(i) if i32::try_from(*i).is_ok() => EdmType::Int32,
            WireValue::Integer(_) => EdmType::Int64,
            WireValue::Number(_) => EdmType::Double,
        }
    }
}

/// Formats a timestamp the way the table service writes it.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

// RFC 3339 has no form for years past 9999.
fn datetime_text(dt: &DateTime<Utc>) -> CodecResult<String> {
    if (0..=9999).contains(&dt.year()) {
        Ok(format_datetime(dt))
    } else {
        Err(CodecError::value_conversion(
            EdmType::DateTime,
            format!("year {} is outside 0000-9999", dt.year()),
        ))
    }
}

fn parse_datetime(s: &str) -> CodecResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Older payloads omit the zone designator; those are UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| CodecError::value_conversion(EdmType::DateTime, format!("`{s}`: {e}")))
}

fn parse_guid(s: &str) -> CodecResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| CodecError::value_conversion(EdmType::Guid, format!("`{s}`: {e}")))
}

fn parse_bool(s: &str) -> CodecResult<bool> {
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CodecError::value_conversion(
            EdmType::Boolean,
            format!("`{s}` is not a boolean"),
        ))
    }
}

fn parse_text<T>(edm_type: EdmType, s: &str) -> CodecResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    s.parse::<T>()
        .map_err(|e| CodecError::value_conversion(edm_type, format!("`{s}`: {e}")))
}

fn narrow_i32(n: i64) -> CodecResult<i32> {
    i32::try_from(n)
        .map_err(|_| CodecError::value_conversion(EdmType::Int32, format!("{n} is out of range")))
}

fn double_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        f.to_string()
    }
}

fn double_to_wire(f: f64) -> WireValue {
    if f.is_finite() {
        WireValue::Number(f)
    } else {
        WireValue::Text(double_text(f))
    }
}

fn render_text(value: &EdmValue) -> String {
    match value {
        EdmValue::String(s) => s.clone(),
        EdmValue::Binary(b) => STANDARD.encode(b),
        EdmValue::Boolean(b) => b.to_string(),
        EdmValue::Int32(n) => n.to_string(),
        EdmValue::Int64(n) => n.to_string(),
        EdmValue::Double(f) => double_text(*f),
        EdmValue::DateTime(dt) => format_datetime(dt),
        EdmValue::Guid(g) => g.to_string(),
    }
}
