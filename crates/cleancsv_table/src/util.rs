//! Cell-level helpers shared by the loader and the cleaner.

use polars::prelude::AnyValue;

/// Return whether a cell counts as data.
///
/// Null, NaN, empty text, numeric zero and `false` are falsy.
pub fn is_truthy_any_value(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => false,
        AnyValue::Boolean(val) => *val,
        AnyValue::String(val) => !val.is_empty(),
        AnyValue::StringOwned(val) => !val.is_empty(),
        AnyValue::UInt8(val) => *val != 0,
        AnyValue::UInt16(val) => *val != 0,
        AnyValue::UInt32(val) => *val != 0,
        AnyValue::UInt64(val) => *val != 0,
        AnyValue::Int8(val) => *val != 0,
        AnyValue::Int16(val) => *val != 0,
        AnyValue::Int32(val) => *val != 0,
        AnyValue::Int64(val) => *val != 0,
        AnyValue::Int128(val) => *val != 0,
        AnyValue::Float32(val) => !val.is_nan() && *val != 0.0,
        AnyValue::Float64(val) => !val.is_nan() && *val != 0.0,
        _ => true,
    }
}

/// Render a cell as display text; `None` for null/NaN.
///
/// Whole floats keep one decimal (`5.0`), booleans render as `True`/`False`.
pub fn convert_any_value_to_text(value: &AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::Boolean(val) => Some(if *val { "True" } else { "False" }.to_string()),
        AnyValue::String(val) => Some(val.to_string()),
        AnyValue::StringOwned(val) => Some(val.to_string()),
        AnyValue::Float32(val) => convert_float_to_text(*val as f64),
        AnyValue::Float64(val) => convert_float_to_text(*val),
        _ => Some(value.to_string()),
    }
}

fn convert_float_to_text(x: f64) -> Option<String> {
    if x.is_nan() {
        return None;
    }
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        return Some(format!("{x:.1}"));
    }
    Some(x.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness_treats_zero_and_empty_as_falsy() {
        assert!(!is_truthy_any_value(&AnyValue::Null));
        assert!(!is_truthy_any_value(&AnyValue::String("")));
        assert!(!is_truthy_any_value(&AnyValue::Int64(0)));
        assert!(!is_truthy_any_value(&AnyValue::Float64(f64::NAN)));
        assert!(!is_truthy_any_value(&AnyValue::Boolean(false)));

        assert!(is_truthy_any_value(&AnyValue::String(" ")));
        assert!(is_truthy_any_value(&AnyValue::Int64(-3)));
        assert!(is_truthy_any_value(&AnyValue::Float64(0.5)));
    }

    #[test]
    fn test_convert_any_value_to_text() {
        assert_eq!(convert_any_value_to_text(&AnyValue::Null), None);
        assert_eq!(convert_any_value_to_text(&AnyValue::Float64(f64::NAN)), None);
        assert_eq!(
            convert_any_value_to_text(&AnyValue::Float64(5.0)),
            Some("5.0".to_string())
        );
        assert_eq!(
            convert_any_value_to_text(&AnyValue::Float64(2.25)),
            Some("2.25".to_string())
        );
        assert_eq!(
            convert_any_value_to_text(&AnyValue::Int64(1200)),
            Some("1200".to_string())
        );
        assert_eq!(
            convert_any_value_to_text(&AnyValue::Boolean(true)),
            Some("True".to_string())
        );
    }
}
