//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! Every digest in the workspace (search traces, solutions, comparison
//! reports) is computed over bytes produced here.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. No whitespace (`{"a":1,"b":[2,3]}`).
//! 3. Strings are escaped per RFC 8259 §7; non-ASCII passes through as UTF-8.
//! 4. Numbers must be integers (`i64` or `u64`). Floats are rejected so that
//!    platform float formatting can never leak into a digest.
//! 5. `null`, `true`, `false` are written literally.

use std::io::Write;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Null => buf.extend_from_slice(b"null"),
        serde_json::Value::Bool(true) => buf.extend_from_slice(b"true"),
        serde_json::Value::Bool(false) => buf.extend_from_slice(b"false"),
        serde_json::Value::Number(n) => write_number(buf, n)?,
        serde_json::Value::String(s) => write_string(buf, s),
        serde_json::Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_string(buf, key);
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

fn write_number(buf: &mut Vec<u8>, n: &serde_json::Number) -> Result<(), CanonError> {
    // i64 first so negatives keep their sign; u64 covers the upper half.
    if let Some(i) = n.as_i64() {
        let _ = write!(buf, "{i}");
    } else if let Some(u) = n.as_u64() {
        let _ = write!(buf, "{u}");
    } else {
        return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
    }
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(buf, "\\u{:04x}", u32::from(c));
            }
            c => {
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
    buf.push(b'"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_sorted_at_every_level() {
        let v = json!({"strategy": "bfs", "metadata": {"z": 1, "a": 2}, "cost": 3});
        let bytes = canonical_json_bytes(&v).unwrap();
        assert_eq!(
            bytes,
            br#"{"cost":3,"metadata":{"a":2,"z":1},"strategy":"bfs"}"#
        );
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let v1: serde_json::Value = serde_json::from_str(r#"{"x":1,"a":2,"m":3}"#).unwrap();
        let v2: serde_json::Value = serde_json::from_str(r#"{"m":3,"x":1,"a":2}"#).unwrap();
        assert_eq!(
            canonical_json_bytes(&v1).unwrap(),
            canonical_json_bytes(&v2).unwrap()
        );
    }

    #[test]
    fn whitespace_is_stripped() {
        let v: serde_json::Value =
            serde_json::from_str("{ \"moves\" : [ \"Up\" , \"Left\" ] }").unwrap();
        assert_eq!(
            canonical_json_bytes(&v).unwrap(),
            br#"{"moves":["Up","Left"]}"#
        );
    }

    #[test]
    fn floats_are_rejected() {
        let err = canonical_json_bytes(&json!({"cost": 1.5})).unwrap_err();
        assert!(matches!(err, CanonError::NonIntegerNumber { .. }));
    }

    #[test]
    fn integer_extremes_round_out() {
        assert_eq!(canonical_json_bytes(&json!(-42)).unwrap(), b"-42");
        assert_eq!(
            canonical_json_bytes(&json!(u64::MAX)).unwrap(),
            u64::MAX.to_string().as_bytes()
        );
    }

    #[test]
    fn literals_and_empty_containers() {
        let v = json!({"a": null, "b": true, "c": false, "d": [], "e": {}});
        assert_eq!(
            canonical_json_bytes(&v).unwrap(),
            br#"{"a":null,"b":true,"c":false,"d":[],"e":{}}"#
        );
    }

    #[test]
    fn strings_are_escaped() {
        let v = json!("A -> B\n\t\"q\"\\\u{0001}");
        assert_eq!(
            canonical_json_bytes(&v).unwrap(),
            br#""A -> B\n\t\"q\"\\\u0001""#
        );
    }

    #[test]
    fn array_order_preserved() {
        assert_eq!(canonical_json_bytes(&json!([3, 1, 2])).unwrap(), b"[3,1,2]");
    }

    #[test]
    fn unicode_passthrough() {
        let bytes = canonical_json_bytes(&json!({"label": "Süd"})).unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), r#"{"label":"Süd"}"#);
    }
}
