//! # Input Validator
//!
//! Turns raw form input into a validated [`InputRecord`] against a
//! formula's declared fields. Validation is all-or-nothing: the first
//! failing field aborts the attempt and no partial record escapes.
//!
//! Per declared field, in declaration order:
//!
//! 1. absent or blank + required -> [`CalcError::MissingField`]
//! 2. absent or blank + optional -> substitute the default, or omit the
//!    field entirely when no default is declared
//! 3. unparseable as the declared kind -> [`CalcError::InvalidNumber`]
//! 4. below the declared minimum -> [`CalcError::BelowMinimum`]

use crate::errors::{CalcError, CalcResult};
use crate::formula::{FormulaSpec, InputField, InputRecord, NumericKind, RawInputs, RawValue};

/// Validate raw inputs against a formula's input contract.
///
/// ## Example
///
/// ```rust
/// use toolbox_core::formula::RawInputs;
/// use toolbox_core::formulas::slope;
/// use toolbox_core::validate::validate;
///
/// let spec = slope::spec();
/// let record = validate(&spec, &RawInputs::new().with("rise", "1").with("run", "1")).unwrap();
/// assert_eq!(record.get("run").unwrap(), 1.0);
/// ```
pub fn validate(spec: &FormulaSpec, raw: &RawInputs) -> CalcResult<InputRecord> {
    let mut record = InputRecord::new();

    for field in &spec.fields {
        if let Some(value) = parse_field(field, raw.get(field.name))? {
            record.push(field.name, value);
        }
    }

    Ok(record)
}

/// Resolve one field to its validated value, `Ok(None)` when an optional
/// field without a default is left blank.
fn parse_field(field: &InputField, raw: Option<&RawValue>) -> CalcResult<Option<f64>> {
    let value = match raw {
        None => return blank_field(field),
        Some(RawValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return blank_field(field);
            }
            parse_text(field, text)?
        }
        Some(RawValue::Number(value)) => check_kind(field, *value)?,
    };

    if let Some(minimum) = field.minimum {
        if value < minimum {
            return Err(CalcError::below_minimum(field.name, value, minimum));
        }
    }

    Ok(Some(value))
}

fn blank_field(field: &InputField) -> CalcResult<Option<f64>> {
    if field.required {
        Err(CalcError::missing_field(field.name))
    } else {
        // Defaults skip the minimum check: they are declared by the spec
        // author, not typed by the user.
        Ok(field.default)
    }
}

fn parse_text(field: &InputField, text: &str) -> CalcResult<f64> {
    let value: f64 = text.parse().map_err(|_| {
        CalcError::invalid_number(field.name, text, "not a number")
    })?;
    check_kind(field, value)
}

fn check_kind(field: &InputField, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_number(
            field.name,
            value.to_string(),
            "not finite",
        ));
    }
    if field.kind == NumericKind::Integer && value.fract() != 0.0 {
        return Err(CalcError::invalid_number(
            field.name,
            value.to_string(),
            "expected a whole number",
        ));
    }
    Ok(value)
}
