//! Arc length of a reinforcement-pad cutout on a cylindrical shell:
//! `arc = 2π · (d/2) · (angle/360)`.

use std::f64::consts::PI;

use crate::errors::CalcResult;
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};

pub const ID: &str = "arc_length";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "Arc Length of RF Pad",
        vec![
            InputField::real("diameter", "Diameter (mm)").min(0.0),
            InputField::real("angle", "Angle (°)").min(0.0),
        ],
        compute,
    )
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let diameter = inputs.get("diameter")?;
    let angle = inputs.get("angle")?;

    let radius = diameter / 2.0;
    let arc_length = 2.0 * PI * radius * (angle / 360.0);

    let mut out = OutputRecord::new();
    out.push_number("arc_length_mm", arc_length);
    Ok(out)
}
