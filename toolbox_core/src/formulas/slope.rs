//! Slope to degree converter: `percent = rise/run · 100`,
//! `angle = atan(percent/100)` in degrees.
//!
//! The declared minimum of 1 on `run` makes the zero-divisor case
//! unreachable through validation, but the formula still guards it for
//! callers that build records directly.

use crate::errors::{CalcError, CalcResult};
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};

pub const ID: &str = "slope_to_degree";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "Slope to Degree Converter",
        vec![
            InputField::integer("rise", "Slope Rise").min(0.0),
            InputField::integer("run", "Slope Run").min(1.0),
        ],
        compute,
    )
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let rise = inputs.get("rise")?;
    let run = inputs.get("run")?;

    if run == 0.0 {
        return Err(CalcError::division_by_zero("run"));
    }

    let slope_percent = rise / run * 100.0;
    let angle_deg = (slope_percent / 100.0).atan().to_degrees();

    let mut out = OutputRecord::new();
    out.push_number("slope_percent", slope_percent);
    out.push_number("angle_deg", angle_deg);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::RawInputs;
    use crate::validate::validate;

    #[test]
    fn test_unit_slope_is_45_degrees() {
        let spec = spec();
        let raw = RawInputs::new().with("rise", "1").with("run", "1");
        let inputs = validate(&spec, &raw).unwrap();
        let out = (spec.compute)(&inputs).unwrap();
        assert!((out.number("slope_percent").unwrap() - 100.0).abs() < 1e-12);
        assert!((out.number("angle_deg").unwrap() - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_run_rejected_by_bounds() {
        let spec = spec();
        let raw = RawInputs::new().with("rise", "1").with("run", "0");
        let err = validate(&spec, &raw).unwrap_err();
        assert_eq!(err.error_code(), "BELOW_MINIMUM");
    }

    #[test]
    fn test_zero_run_guard_in_formula() {
        // A hand-built record can bypass the bound; the formula still
        // refuses to divide.
        let mut inputs = InputRecord::new();
        inputs.push("rise", 1.0);
        inputs.push("run", 0.0);
        let err = compute(&inputs).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("run"));
    }

    #[test]
    fn test_flat_slope() {
        let spec = spec();
        let raw = RawInputs::new().with("rise", "0").with("run", "10");
        let inputs = validate(&spec, &raw).unwrap();
        let out = (spec.compute)(&inputs).unwrap();
        assert_eq!(out.number("slope_percent").unwrap(), 0.0);
        assert_eq!(out.number("angle_deg").unwrap(), 0.0);
    }
}
