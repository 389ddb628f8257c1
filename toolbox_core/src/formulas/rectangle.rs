//! Rectangle area: `area = length * width`.
//!
//! The simplest page in the toolbox, kept mostly as the smoke-test
//! calculator for the registry pipeline.

use crate::errors::CalcResult;
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};

pub const ID: &str = "rectangle_area";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "Rectangle Area",
        vec![
            InputField::real("length", "Length").min(0.0),
            InputField::real("width", "Width").min(0.0),
        ],
        compute,
    )
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let length = inputs.get("length")?;
    let width = inputs.get("width")?;

    let mut out = OutputRecord::new();
    out.push_number("area", length * width);
    Ok(out)
}
