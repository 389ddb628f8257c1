//! ASME Section VIII Div. 1, UG-27(c)(1): required thickness and MAWP of
//! a cylindrical shell under internal pressure, checked against the
//! nominal wall.
//!
//! ```text
//! tc     = t − Ca − mill_tol          (corroded thickness)
//! R      = Do/2 − tc                  (inside radius, corroded)
//! t_req  = P·R / (S·E − 0.6·P)
//! MAWP   = S·E·tc / (R + 0.6·tc)
//! ```
//!
//! The check passes when the nominal wall covers `t_req` plus the
//! corrosion and mill allowances. Design temperature, density, and
//! tangent length are record-keeping fields: they take no part in the
//! formula but ride along in the input snapshot so the exported history
//! row matches the vessel data sheet.

use crate::errors::{CalcError, CalcResult};
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};

pub const ID: &str = "shell_thickness";

/// Status strings reported in the `status` output field.
pub const STATUS_OK: &str = "OK";
pub const STATUS_NOT_ENOUGH: &str = "NOT ENOUGH";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "ASME UG-27 Shell Thickness",
        vec![
            InputField::real("design_pressure", "Design Pressure P (MPa)").min(0.0),
            InputField::real("allowable_stress", "Allowable Stress S (MPa)").min(0.0),
            InputField::real("joint_efficiency", "Joint Efficiency E (0-1)").min(0.0),
            InputField::real("outside_diameter", "Outside Diameter Do (mm)").min(0.0),
            InputField::real("nominal_thickness", "Nominal Wall Thickness t (mm)").min(0.0),
            InputField::real("corrosion_allowance", "Corrosion Allowance Ca (mm)").min(0.0),
            InputField::real("mill_tolerance", "Mill Tolerance (mm)").min(0.0),
            InputField::real("design_temperature", "Design Temperature (°C)").optional(),
            InputField::real("density", "Density (kg/m³)").min(0.0).optional(),
            InputField::real("tangent_length", "Tangent-to-Tangent Length L (mm)")
                .min(0.0)
                .optional(),
        ],
        compute,
    )
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let p = inputs.get("design_pressure")?;
    let s = inputs.get("allowable_stress")?;
    let e = inputs.get("joint_efficiency")?;
    let do_mm = inputs.get("outside_diameter")?;
    let t = inputs.get("nominal_thickness")?;
    let ca = inputs.get("corrosion_allowance")?;
    let mill_tol = inputs.get("mill_tolerance")?;

    let tc = t - ca - mill_tol;
    if tc <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "corroded_thickness",
            "t − Ca − mill_tol is not positive; nothing is left of the wall",
        ));
    }

    let r = do_mm / 2.0 - tc;
    if r <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "inside_radius",
            "Do/2 − tc is not positive; check Do against t, Ca, mill_tol",
        ));
    }

    let denom = s * e - 0.6 * p;
    if denom <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "stress_denominator",
            "S·E − 0.6·P is not positive; UG-27 thin-shell formula does not apply",
        ));
    }

    let t_req = p * r / denom;
    let total_required = t_req + ca + mill_tol;
    let mawp = s * e * tc / (r + 0.6 * tc);

    let mut out = OutputRecord::new();
    out.push_number("corroded_thickness_mm", tc);
    out.push_number("inside_radius_mm", r);
    out.push_number("required_thickness_mm", t_req);
    out.push_number("total_required_thickness_mm", total_required);
    out.push_number("mawp_mpa", mawp);
    out.push_text(
        "status",
        if t >= total_required {
            STATUS_OK
        } else {
            STATUS_NOT_ENOUGH
        },
    );
    Ok(out)
}
