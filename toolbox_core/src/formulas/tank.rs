//! Target volume to tank dimensions over an L/D ratio range.
//!
//! For a flat-bottomed cylinder holding volume `V` at aspect ratio
//! `L/D = r`: `d = (4V / (π·r))^(1/3)`, `h = r·d`. The pair is solved at
//! the minimum and maximum ratio of the acceptable range, and optionally
//! again for a gross volume inflated by a margin percentage.

use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};

pub const ID: &str = "tank_dimensions";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "Tank L/D Ratio Sizing",
        vec![
            InputField::real("volume", "Operating Volume (m³)").min(0.0),
            InputField::real("min_ratio", "Minimum L/D Ratio").default_value(1.25),
            InputField::real("max_ratio", "Maximum L/D Ratio").default_value(2.0),
            InputField::real("margin_percent", "Volume Margin (%)").min(0.0).optional(),
        ],
        compute,
    )
}

/// Solve one (diameter, height) pair.
fn solve(volume: f64, ratio: f64, field: &'static str) -> CalcResult<(f64, f64)> {
    if ratio <= 0.0 {
        return Err(CalcError::division_by_zero(field));
    }
    let diameter = (4.0 * volume / (PI * ratio)).cbrt();
    Ok((diameter, ratio * diameter))
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let volume = inputs.get("volume")?;
    let min_ratio = inputs.get("min_ratio")?;
    let max_ratio = inputs.get("max_ratio")?;

    let mut out = OutputRecord::new();

    let (d, h) = solve(volume, min_ratio, "min_ratio")?;
    out.push_number("min_ratio_diameter_m", d);
    out.push_number("min_ratio_height_m", h);

    let (d, h) = solve(volume, max_ratio, "max_ratio")?;
    out.push_number("max_ratio_diameter_m", d);
    out.push_number("max_ratio_height_m", h);

    if let Some(margin) = inputs.find("margin_percent") {
        let gross = volume * (1.0 + margin / 100.0);
        out.push_number("gross_volume_m3", gross);

        let (d, h) = solve(gross, min_ratio, "min_ratio")?;
        out.push_number("gross_min_ratio_diameter_m", d);
        out.push_number("gross_min_ratio_height_m", h);

        let (d, h) = solve(gross, max_ratio, "max_ratio")?;
        out.push_number("gross_max_ratio_diameter_m", d);
        out.push_number("gross_max_ratio_height_m", h);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::RawInputs;
    use crate::validate::validate;

    fn run(raw: &RawInputs) -> CalcResult<OutputRecord> {
        let spec = spec();
        let inputs = validate(&spec, raw)?;
        (spec.compute)(&inputs)
    }

    fn cylinder_volume(d: f64, h: f64) -> f64 {
        PI / 4.0 * d * d * h
    }

    #[test]
    fn test_solution_reproduces_volume() {
        let out = run(&RawInputs::new().with("volume", "100")).unwrap();
        for prefix in ["min_ratio", "max_ratio"] {
            let d = out.number(&format!("{prefix}_diameter_m")).unwrap();
            let h = out.number(&format!("{prefix}_height_m")).unwrap();
            assert!((cylinder_volume(d, h) - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_default_ratio_range() {
        let out = run(&RawInputs::new().with("volume", "100")).unwrap();
        let d = out.number("min_ratio_diameter_m").unwrap();
        let h = out.number("min_ratio_height_m").unwrap();
        assert!((h / d - 1.25).abs() < 1e-12);

        let d = out.number("max_ratio_diameter_m").unwrap();
        let h = out.number("max_ratio_height_m").unwrap();
        assert!((h / d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_margin_adds_gross_block() {
        let out = run(&RawInputs::new().with("volume", "100").with("margin_percent", "10")).unwrap();
        assert!((out.number("gross_volume_m3").unwrap() - 110.0).abs() < 1e-12);
        let d = out.number("gross_max_ratio_diameter_m").unwrap();
        let h = out.number("gross_max_ratio_height_m").unwrap();
        assert!((cylinder_volume(d, h) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_margin_no_gross_block() {
        let out = run(&RawInputs::new().with("volume", "100")).unwrap();
        assert!(out.get("gross_volume_m3").is_none());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_zero_ratio_guarded() {
        let err = run(&RawInputs::new().with("volume", "100").with("min_ratio", "0")).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("min_ratio"));
    }
}
