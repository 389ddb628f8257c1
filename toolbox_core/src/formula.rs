//! # Formula Data Model
//!
//! Declarative definition of one calculator: its input contract and its
//! pure computation. Each calculator page in the original toolbox carried
//! its own copy of the read-validate-compute-display loop; here a
//! calculator is just a [`FormulaSpec`] value handed to the registry, and
//! the shared validator/engine do the rest.
//!
//! The pattern per calculator:
//!
//! - [`InputField`] list - the input contract (name, label, kind, bounds)
//! - `fn(&InputRecord) -> CalcResult<OutputRecord>` - the formula body
//!
//! ## Example
//!
//! ```rust
//! use toolbox_core::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};
//! use toolbox_core::errors::CalcResult;
//!
//! fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
//!     let mut out = OutputRecord::new();
//!     out.push_number("area", inputs.get("length")? * inputs.get("width")?);
//!     Ok(out)
//! }
//!
//! let spec = FormulaSpec::new(
//!     "rectangle_area",
//!     "Rectangle Area",
//!     vec![
//!         InputField::real("length", "Length"),
//!         InputField::real("width", "Width"),
//!     ],
//!     compute,
//! );
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Numeric kind an input field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericKind {
    /// Whole numbers only (e.g. tube count)
    Integer,
    /// Any finite real number
    Real,
}

/// One declared input of a formula.
///
/// Owned exclusively by its [`FormulaSpec`]. The validator walks these in
/// declaration order, so the order here is also the form layout order.
#[derive(Debug, Clone, Serialize)]
pub struct InputField {
    /// Field name used as the key in raw inputs, records, and CSV columns
    pub name: &'static str,

    /// Human-readable label, unit hint included (e.g. "Diameter (mm)")
    pub label: &'static str,

    /// Numeric kind the raw value must parse as
    pub kind: NumericKind,

    /// Whether a blank submission is an error
    pub required: bool,

    /// Substituted when the field is optional and left blank
    pub default: Option<f64>,

    /// Inclusive lower bound, checked after parsing
    pub minimum: Option<f64>,
}

impl InputField {
    /// A required real-valued field with no bound.
    pub fn real(name: &'static str, label: &'static str) -> Self {
        InputField {
            name,
            label,
            kind: NumericKind::Real,
            required: true,
            default: None,
            minimum: None,
        }
    }

    /// A required integer-valued field with no bound.
    pub fn integer(name: &'static str, label: &'static str) -> Self {
        InputField {
            kind: NumericKind::Integer,
            ..InputField::real(name, label)
        }
    }

    /// Set an inclusive minimum.
    pub fn min(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Make the field optional with a default substituted when blank.
    pub fn default_value(mut self, default: f64) -> Self {
        self.required = false;
        self.default = Some(default);
        self
    }

    /// Make the field optional with no default; blank means the field is
    /// simply absent from the validated record.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// A raw, user-supplied input value before validation.
///
/// Form widgets hand over either the text of an input box or an already
/// numeric value (sliders, steppers). Both go through the same validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

/// By-name collection of raw inputs for one calculation attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInputs {
    values: HashMap<String, RawValue>,
}

impl RawInputs {
    pub fn new() -> Self {
        RawInputs::default()
    }

    /// Builder-style insert.
    ///
    /// ```rust
    /// use toolbox_core::formula::RawInputs;
    ///
    /// let raw = RawInputs::new().with("length", "10").with("width", 5.0);
    /// assert!(raw.get("length").is_some());
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }
}

/// Validated inputs for one calculation attempt.
///
/// Values appear in field declaration order and are consumed once by the
/// engine; afterwards the record survives only as a history snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputRecord {
    values: Vec<(String, f64)>,
}

impl InputRecord {
    pub fn new() -> Self {
        InputRecord::default()
    }

    /// Append a validated value. The validator is the only intended caller,
    /// but tests build records directly.
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.values.push((name.into(), value));
    }

    /// Fetch a value that the formula declared as present. Absence means a
    /// spec/formula mismatch, which is an internal error rather than a user
    /// error.
    pub fn get(&self, name: &str) -> CalcResult<f64> {
        self.find(name).ok_or_else(|| CalcError::Internal {
            message: format!("validated record has no field '{name}'"),
        })
    }

    /// Fetch an optional field (declared with no default).
    pub fn find(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One computed output value: numeric, or derived categorical (pass/fail
/// status strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputValue {
    Number(f64),
    Text(String),
}

impl OutputValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            OutputValue::Number(v) => Some(*v),
            OutputValue::Text(_) => None,
        }
    }
}

impl fmt::Display for OutputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputValue::Number(v) => write!(f, "{v}"),
            OutputValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Computed outputs for one calculation, in display order.
///
/// Immutable once produced by the engine (nothing mutates a stored record;
/// the only writer is the formula that built it).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputRecord {
    fields: Vec<(String, OutputValue)>,
}

impl OutputRecord {
    pub fn new() -> Self {
        OutputRecord::default()
    }

    pub fn push_number(&mut self, name: impl Into<String>, value: f64) {
        self.fields.push((name.into(), OutputValue::Number(value)));
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .push((name.into(), OutputValue::Text(value.into())));
    }

    pub fn get(&self, name: &str) -> Option<&OutputValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Numeric accessor; `None` for absent or textual fields.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(OutputValue::as_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Signature every formula body satisfies: pure function of the validated
/// record, no hidden state, no I/O.
pub type ComputeFn = fn(&InputRecord) -> CalcResult<OutputRecord>;

/// Declarative definition of one calculator.
///
/// Immutable after construction; the registry owns all specs for the life
/// of the process.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaSpec {
    /// Stable identifier (registry key, CSV file naming, UI routing)
    pub id: &'static str,

    /// Display title
    pub title: &'static str,

    /// Input contract in form layout order
    pub fields: Vec<InputField>,

    /// Formula body
    #[serde(skip)]
    pub compute: ComputeFn,
}

impl FormulaSpec {
    pub fn new(
        id: &'static str,
        title: &'static str,
        fields: Vec<InputField>,
        compute: ComputeFn,
    ) -> Self {
        FormulaSpec {
            id,
            title,
            fields,
            compute,
        }
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// True if `name` is one of the declared input fields. Persistence uses
    /// this to classify CSV columns into input vs output.
    pub fn is_input(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}
