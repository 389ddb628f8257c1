//! Tube-bundle heat-transfer area: `area = π · d · L · N / 1000`
//! (tube OD in mm, length in m, area in m²).

use std::f64::consts::PI;

use crate::errors::CalcResult;
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};
use crate::units::{Meters, Millimeters};

pub const ID: &str = "heat_exchanger_area";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "Tube Heat Transfer Area",
        vec![
            InputField::real("tube_diameter", "Tube Diameter (mm)").min(0.0),
            InputField::real("tube_length", "Tube Length (m)").min(0.0),
            InputField::integer("tube_count", "Number of Tubes").min(1.0),
        ],
        compute,
    )
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let diameter = Meters::from(Millimeters(inputs.get("tube_diameter")?));
    let length = inputs.get("tube_length")?;
    let count = inputs.get("tube_count")?;

    let mut out = OutputRecord::new();
    out.push_number("heat_transfer_area_m2", PI * diameter.value() * length * count);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::RawInputs;
    use crate::validate::validate;

    #[test]
    fn test_standard_bundle() {
        let spec = spec();
        let raw = RawInputs::new()
            .with("tube_diameter", "25")
            .with("tube_length", "6")
            .with("tube_count", "200");
        let inputs = validate(&spec, &raw).unwrap();
        let out = (spec.compute)(&inputs).unwrap();
        // π·25·6·200/1000 = 94.2477... (25 mm OD and 6 m length give
        // 0.4712 m² per tube)
        assert!((out.number("heat_transfer_area_m2").unwrap() - 94.247_779_607_693_79).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_tube_count_rejected() {
        let spec = spec();
        let raw = RawInputs::new()
            .with("tube_diameter", "25")
            .with("tube_length", "6")
            .with("tube_count", "200.5");
        assert!(validate(&spec, &raw).is_err());
    }

    #[test]
    fn test_zero_tubes_rejected() {
        let spec = spec();
        let raw = RawInputs::new()
            .with("tube_diameter", "25")
            .with("tube_length", "6")
            .with("tube_count", "0");
        let err = validate(&spec, &raw).unwrap_err();
        assert_eq!(err.error_code(), "BELOW_MINIMUM");
    }
}
