//! Ellipse perimeter, five values reported side by side for comparison:
//!
//! 1. RMS-of-axes approximation `2π·√((a²+b²)/2)` - within ~5% while the
//!    ellipse is not too squashed
//! 2. Ramanujan I: `π·(3(a+b) − √((3a+b)(a+3b)))`
//! 3. Ramanujan II (h-method): `π·(a+b)·(1 + 3h/(10+√(4−3h)))` with
//!    `h = (a−b)²/(a+b)²`
//! 4. Ramanujan's extended form with its curious `3a·e²⁰/2³⁶` correction
//!    term
//! 5. The elliptic-integral perimeter `4a·∫₀^{π/2} √(1−e²sin²θ) dθ`,
//!    evaluated by composite Simpson quadrature
//!
//! Eccentricity is the standard `e = √(1 − b²/a²)`. None of the five is
//! authoritative; the integral is the accuracy reference.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::errors::{CalcError, CalcResult};
use crate::formula::{FormulaSpec, InputField, InputRecord, OutputRecord};
use crate::quadrature::{simpson, DEFAULT_SUBINTERVALS};

pub const ID: &str = "ellipse_perimeter";

pub fn spec() -> FormulaSpec {
    FormulaSpec::new(
        ID,
        "Ellipse Perimeter",
        vec![
            InputField::real("semi_major", "Semi-Major Axis (a)").min(1.0),
            InputField::real("semi_minor", "Semi-Minor Axis (b)").min(1.0),
        ],
        compute,
    )
}

fn compute(inputs: &InputRecord) -> CalcResult<OutputRecord> {
    let a = inputs.get("semi_major")?;
    let b = inputs.get("semi_minor")?;

    if b > a {
        return Err(CalcError::invalid_geometry(
            "semi_minor",
            "semi-minor axis exceeds semi-major axis",
        ));
    }

    let h = (a - b).powi(2) / (a + b).powi(2);
    let e_squared = 1.0 - (b * b) / (a * a);

    let rms = 2.0 * PI * ((a * a + b * b) / 2.0).sqrt();
    let ramanujan_1 = PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt());
    let ramanujan_2 = PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
    let ramanujan_extended = PI
        * ((a + b)
            + 3.0 * (a - b).powi(2) / (10.0 * (a + b) + (a * a + 14.0 * a * b + b * b).sqrt())
            + 3.0 * a * 20f64.exp() / 2f64.powi(36));

    let integral = simpson(
        |theta| (1.0 - e_squared * theta.sin().powi(2)).sqrt(),
        0.0,
        FRAC_PI_2,
        DEFAULT_SUBINTERVALS,
    );
    let elliptic = 4.0 * a * integral;

    let mut out = OutputRecord::new();
    out.push_number("approx_rms", rms);
    out.push_number("ramanujan_1", ramanujan_1);
    out.push_number("ramanujan_2", ramanujan_2);
    out.push_number("ramanujan_extended", ramanujan_extended);
    out.push_number("elliptic_integral", elliptic);
    Ok(out)
}
