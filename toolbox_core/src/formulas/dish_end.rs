//! Dish-end blank dimensions and volume for the two dish geometries used
//! on vertical tanks.
//!
//! Torispherical (crown radius = ID, knuckle radius = ID/10):
//! `V = 0.0847·ID³ + π·ID²·SF/4` (mm³, converted to m³)
//!
//! Ellipsoidal (2:1):
//! `V = π·ID³/24 + π·ID²·SF/4`
//!
//! Both sets of outputs appear in one record, prefixed `tori_` and
//! `ellip_`, the way the page showed both tables at once.

use std::f64::consts::PI;

use crate::errors::CalcResult;
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};
use crate::units::{CubicMeters, Liters};

pub const ID: &str = "dish_end_volume";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "Dish End Volume",
        vec![
            InputField::real("tank_id", "Tank ID (mm)").min(0.0),
            InputField::real("straight_flange", "Straight Flange SF (mm)").min(0.0),
            InputField::real("dish_thickness", "Dish Thickness (mm)").min(0.0),
        ],
        compute,
    )
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let id = inputs.get("tank_id")?;
    let sf = inputs.get("straight_flange")?;
    let thk = inputs.get("dish_thickness")?;

    let d2 = id * id;
    let d3 = d2 * id;
    // Shared straight-flange cylinder contribution
    let flange_volume_mm3 = PI * d2 * sf / 4.0;

    // Torispherical (100-10)
    let tori_volume = CubicMeters((0.0847 * d3 + flange_volume_mm3) * 1e-9);
    let mut out = OutputRecord::new();
    out.push_number("tori_crown_radius_mm", id);
    out.push_number("tori_knuckle_radius_mm", 0.10 * id);
    out.push_number("tori_blank_dia_mm", id + 0.10 * id + 2.0 * sf);
    out.push_number("tori_height_mm", 0.194 * id + sf + thk);
    out.push_number("tori_volume_m3", tori_volume.value());
    out.push_number("tori_volume_l", Liters::from(tori_volume).value());

    // Ellipsoidal (2:1)
    let ellip_volume = CubicMeters((PI * d3 / 24.0 + flange_volume_mm3) * 1e-9);
    out.push_number("ellip_crown_radius_mm", 0.9 * id);
    out.push_number("ellip_blank_dia_mm", 1.17 * id + 2.0 * sf);
    out.push_number("ellip_height_mm", 0.25 * id + sf + thk);
    out.push_number("ellip_volume_m3", ellip_volume.value());
    out.push_number("ellip_volume_l", Liters::from(ellip_volume).value());

    Ok(out)
}
