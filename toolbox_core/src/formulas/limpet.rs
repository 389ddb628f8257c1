//! Limpet coil length, weight, and heat-transfer area.
//!
//! The coil wraps the shell at the limpet mid-height, so one turn runs on
//! a circle of `shell_id + 2·shell_thk + 2·limpet_thk`. Turn count is the
//! covered shell height over the pitch. Weight treats each turn as half a
//! torus surface of the limpet pipe (the 1.04 factor is the crest length
//! allowance carried over from the shop standard) scaled by wall
//! thickness and density.

use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};
use crate::units::{Meters, Millimeters};

pub const ID: &str = "limpet_coil";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "Limpet Coil Length, Weight & Heat Transfer Area",
        vec![
            InputField::real("shell_id", "Shell ID (mm)").min(0.0),
            InputField::real("shell_height", "Shell Height (mm)").min(0.0),
            InputField::real("shell_thk", "Shell Thickness (mm)").min(0.0),
            InputField::real("limpet_od", "Limpet OD (mm)").min(0.0),
            InputField::real("limpet_thk", "Limpet Thickness (mm)").min(0.0),
            InputField::real("limpet_pitch", "Limpet Pitch (mm)").min(0.0),
            InputField::real("coil_coverage", "Coil Coverage (%)").min(0.0),
            InputField::real("density", "Material Density (kg/m³)").min(0.0),
        ],
        compute,
    )
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let shell_id = inputs.get("shell_id")?;
    let shell_height = inputs.get("shell_height")?;
    let shell_thk = inputs.get("shell_thk")?;
    let limpet_od = inputs.get("limpet_od")?;
    let limpet_thk = inputs.get("limpet_thk")?;
    let limpet_pitch = inputs.get("limpet_pitch")?;
    let coil_coverage = inputs.get("coil_coverage")?;
    let density = inputs.get("density")?;

    if limpet_pitch == 0.0 {
        return Err(CalcError::division_by_zero("limpet_pitch"));
    }

    // Wrap diameter at the limpet mid-wall
    let wrap_dia_mm = shell_id + 2.0 * shell_thk + 2.0 * limpet_thk;

    let single_turn_length = Meters::from(Millimeters(wrap_dia_mm * PI));
    let turns = shell_height * (coil_coverage / 100.0) / limpet_pitch;
    let total_length = Meters(single_turn_length.value() * turns);

    // Half-torus surface of the limpet pipe per turn, times wall volume
    let turn_weight_kg =
        (wrap_dia_mm * PI) * (PI * limpet_od * 1.04 / 2.0) * (limpet_thk * density) * 1e-9;
    let total_weight_kg = turn_weight_kg * turns;

    // Wetted area is taken on the bare shell circumference
    let wetted_length = Meters::from(Millimeters(PI * shell_id * turns));
    let heat_transfer_area =
        PI * Meters::from(Millimeters(limpet_od)).value() * wetted_length.value();

    let mut out = OutputRecord::new();
    out.push_number("single_turn_length_m", single_turn_length.value());
    out.push_number("turns", turns);
    out.push_number("total_length_m", total_length.value());
    out.push_number("turn_weight_kg", turn_weight_kg);
    out.push_number("total_weight_kg", total_weight_kg);
    out.push_number("heat_transfer_area_m2", heat_transfer_area);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::RawInputs;
    use crate::validate::validate;

    fn base_raw() -> RawInputs {
        RawInputs::new()
            .with("shell_id", 2000.0)
            .with("shell_height", 3000.0)
            .with("shell_thk", 8.0)
            .with("limpet_od", 80.0)
            .with("limpet_thk", 6.0)
            .with("limpet_pitch", 120.0)
            .with("coil_coverage", 80.0)
            .with("density", 7850.0)
    }

    fn run(raw: &RawInputs) -> CalcResult<OutputRecord> {
        let spec = spec();
        let inputs = validate(&spec, raw)?;
        (spec.compute)(&inputs)
    }

    #[test]
    fn test_turn_geometry() {
        let out = run(&base_raw()).unwrap();
        // Wrap dia = 2000 + 16 + 12 = 2028 mm; one turn = 2.028π m
        let single = out.number("single_turn_length_m").unwrap();
        assert!((single - 2.028 * PI).abs() < 1e-9);

        // Turns = 3000·0.8 / 120 = 20
        let turns = out.number("turns").unwrap();
        assert!((turns - 20.0).abs() < 1e-12);

        let total = out.number("total_length_m").unwrap();
        assert!((total - single * 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_scales_with_turns() {
        let out = run(&base_raw()).unwrap();
        let per_turn = out.number("turn_weight_kg").unwrap();
        let total = out.number("total_weight_kg").unwrap();
        assert!((total - per_turn * 20.0).abs() < 1e-9);

        // 2028π · (π·80·1.04/2) · 6·7850 · 1e-9 = 39.22 kg per turn
        assert!((per_turn - 39.22).abs() < 0.01);
    }

    #[test]
    fn test_heat_transfer_area() {
        let out = run(&base_raw()).unwrap();
        // Wetted length = π·2000·20/1000 = 40π m; area = π·0.08·40π
        let expected = PI * 0.08 * (PI * 2.0 * 20.0);
        assert!((out.number("heat_transfer_area_m2").unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_pitch_is_division_by_zero() {
        let err = run(&base_raw().with("limpet_pitch", 0.0)).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("limpet_pitch"));
    }
}
