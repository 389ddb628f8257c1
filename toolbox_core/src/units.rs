//! # Unit Types
//!
//! Thin newtype wrappers for the metric units the formulas convert
//! between. Shop drawings are dimensioned in millimetres while results
//! are reported in metres, square metres, and litres, so the conversions
//! happen constantly; the wrappers keep the factors of 1000 in one place.
//!
//! ## Example
//!
//! ```rust
//! use toolbox_core::units::{Meters, Millimeters};
//!
//! let od = Millimeters(80.0);
//! let od_m: Meters = od.into();
//! assert_eq!(od_m.0, 0.08);
//! ```

use serde::{Deserialize, Serialize};

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Volume in litres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<CubicMeters> for Liters {
    fn from(m3: CubicMeters) -> Self {
        Liters(m3.0 * 1000.0)
    }
}

impl From<Liters> for CubicMeters {
    fn from(l: Liters) -> Self {
        CubicMeters(l.0 / 1000.0)
    }
}

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_value!(Millimeters);
impl_value!(Meters);
impl_value!(CubicMeters);
impl_value!(Liters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters() {
        let mm = Millimeters(1250.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 1.25);
    }

    #[test]
    fn test_cubic_meters_to_liters() {
        let m3 = CubicMeters(0.125);
        let l: Liters = m3.into();
        assert_eq!(l.0, 125.0);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let m = Meters(6.0);
        assert_eq!(serde_json::to_string(&m).unwrap(), "6.0");
    }
}
