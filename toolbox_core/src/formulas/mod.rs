//! # Built-in Calculators
//!
//! One module per calculator page of the original toolbox. Each module
//! exports `spec()` returning its [`FormulaSpec`]; the formula body and
//! the input contract live side by side, and nothing else is page
//! specific - validation, history, and rendering are shared machinery.
//!
//! ## Available Calculators
//!
//! - [`rectangle`] - rectangle area
//! - [`arc`] - arc length of an RF pad on a shell
//! - [`slope`] - rise/run to slope percent and degrees
//! - [`ellipse`] - ellipse perimeter, four approximations plus the
//!   elliptic-integral value
//! - [`dish_end`] - torispherical and ellipsoidal dish-end dimensions and
//!   volume
//! - [`limpet`] - limpet coil length, weight, and heat-transfer area
//! - [`heat_exchanger`] - tube-bundle heat-transfer area
//! - [`shell_thickness`] - ASME UG-27 cylindrical shell thickness check
//! - [`tank`] - target volume to tank diameter/height over an L/D range

pub mod arc;
pub mod dish_end;
pub mod ellipse;
pub mod heat_exchanger;
pub mod limpet;
pub mod rectangle;
pub mod shell_thickness;
pub mod slope;
pub mod tank;

use crate::formula::FormulaSpec;

/// All built-in specs, in the original page order.
pub fn all() -> Vec<FormulaSpec> {
    vec![
        rectangle::spec(),
        arc::spec(),
        slope::spec(),
        ellipse::spec(),
        dish_end::spec(),
        limpet::spec(),
        heat_exchanger::spec(),
        shell_thickness::spec(),
        tank::spec(),
    ]
}
