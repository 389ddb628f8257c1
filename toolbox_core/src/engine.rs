//! # Calculation Engine
//!
//! Invokes a registered formula against validated inputs. Formula bodies
//! are pure functions of their [`InputRecord`], so identical inputs yield
//! bit-identical outputs on every invocation; the engine adds nothing but
//! the validate-then-compute sequencing.

use crate::errors::CalcResult;
use crate::formula::{FormulaSpec, InputRecord, OutputRecord, RawInputs};
use crate::registry::FormulaRegistry;
use crate::validate::validate;

/// Run a formula against an already validated record.
///
/// Pure: no hidden state, no I/O. Fails only with the domain errors the
/// formula declares (`DivisionByZero`, `InvalidGeometry`).
pub fn compute(spec: &FormulaSpec, inputs: &InputRecord) -> CalcResult<OutputRecord> {
    (spec.compute)(inputs)
}

/// Validate raw inputs and compute in one step.
///
/// Returns both records so the caller can display and archive the pair.
/// This is the whole per-calculation pipeline minus the history append,
/// which belongs to the owning [`Session`](crate::session::Session).
pub fn evaluate(
    registry: &FormulaRegistry,
    calculator_id: &str,
    raw: &RawInputs,
) -> CalcResult<(InputRecord, OutputRecord)> {
    let spec = registry.lookup(calculator_id)?;
    let inputs = validate(spec, raw)?;
    let outputs = compute(spec, &inputs)?;
    Ok((inputs, outputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BUILTIN;

    #[test]
    fn test_evaluate_pipeline() {
        let raw = RawInputs::new().with("length", "10").with("width", "5");
        let (inputs, outputs) = evaluate(&BUILTIN, "rectangle_area", &raw).unwrap();
        assert_eq!(inputs.get("length").unwrap(), 10.0);
        assert!((outputs.number("area").unwrap() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_unknown_calculator() {
        let err = evaluate(&BUILTIN, "nope", &RawInputs::new()).unwrap_err();
        assert_eq!(err.error_code(), "FORMULA_NOT_FOUND");
    }

    #[test]
    fn test_compute_is_deterministic() {
        let spec = BUILTIN.lookup("ellipse_perimeter").unwrap();
        let raw = RawInputs::new().with("semi_major", 500.0).with("semi_minor", 300.0);
        let inputs = crate::validate::validate(spec, &raw).unwrap();
        let first = compute(spec, &inputs).unwrap();
        let second = compute(spec, &inputs).unwrap();
        assert_eq!(first, second);
    }
}
