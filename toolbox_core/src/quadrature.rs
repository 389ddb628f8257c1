//! # Fixed-Step Quadrature
//!
//! Composite Simpson's rule, used by the ellipse-perimeter formula to
//! evaluate the complete elliptic integral of the second kind. The only
//! numerical routine in the crate; everything else is closed-form.
//!
//! At the default 10000 subintervals the relative error on the elliptic
//! integrand is well under 1e-9 for any eccentricity below 1.

/// Default subinterval count for [`simpson`].
pub const DEFAULT_SUBINTERVALS: usize = 10_000;

/// Composite Simpson's rule over `[a, b]`.
///
/// Simpson's rule needs an even number of subintervals; an odd `n` is
/// rounded up. `n = 0` is treated as 2.
///
/// ## Example
///
/// ```rust
/// use toolbox_core::quadrature::simpson;
///
/// // ∫₀^π sin(x) dx = 2
/// let integral = simpson(f64::sin, 0.0, std::f64::consts::PI, 100);
/// assert!((integral - 2.0).abs() < 1e-9);
/// ```
pub fn simpson(f: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> f64 {
    let n = match n {
        0 => 2,
        n if n % 2 == 1 => n + 1,
        n => n,
    };

    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);

    for i in 1..n {
        let x = a + h * i as f64;
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(x);
    }

    sum * h / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_polynomial_exact() {
        // Simpson is exact for cubics.
        let integral = simpson(|x| x * x * x, 0.0, 2.0, 2);
        assert!((integral - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_odd_subintervals_rounded_up() {
        let odd = simpson(|x| x * x, 0.0, 1.0, 3);
        let even = simpson(|x| x * x, 0.0, 1.0, 4);
        assert_eq!(odd, even);
    }

    #[test]
    fn test_zero_subintervals() {
        let integral = simpson(|x| x, 0.0, 1.0, 0);
        assert!((integral - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_quarter_circle() {
        // ∫₀^{π/2} sin²θ dθ = π/4
        let integral = simpson(|t| t.sin().powi(2), 0.0, FRAC_PI_2, DEFAULT_SUBINTERVALS);
        assert!((integral - PI / 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_elliptic_integrand_accuracy() {
        // E(e) for e² = 0.75 is 1.2110560275684594 (Abramowitz & Stegun 17.3.3 tables).
        let e2 = 0.75;
        let integral = simpson(
            |t| (1.0 - e2 * t.sin().powi(2)).sqrt(),
            0.0,
            FRAC_PI_2,
            DEFAULT_SUBINTERVALS,
        );
        assert!((integral - 1.211_056_027_568_459_4).abs() / integral < 1e-9);
    }
}
