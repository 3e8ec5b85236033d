use crate::error::{Error, Result};
use crate::simplex::Simplex;

/// Bound on `|f(x) - f(y)|` given Lipschitz constants on `f` (`l_f`) and on
/// `f`'s gradient (`l_g`), both `>= 0` and possibly `+inf`.
///
/// Below `cutoff = l_f / l_g` the gradient-Lipschitz (quadratic) envelope is
/// tighter; at and beyond `cutoff` the function-Lipschitz (linear) envelope
/// is tighter. The two pieces meet continuously at `cutoff`. Infinite
/// constants are handled explicitly rather than left to IEEE 754 `inf`
/// arithmetic, since `f64::INFINITY / f64::INFINITY` is `NaN`.
#[derive(Clone, Copy, Debug)]
pub struct OrdinaryPointBoundCalculator {
    l_f: f64,
    l_g: f64,
    cutoff: f64,
    offset: f64,
}

impl OrdinaryPointBoundCalculator {
    /// `l_f` is the Lipschitz constant on the function, `l_g` on its
    /// gradient. Both must be non-negative; `f64::INFINITY` is a valid value
    /// for either. Returns `Err(Error::InvalidLipschitzConstant)` otherwise.
    pub fn new(l_f: f64, l_g: f64) -> Result<Self> {
        if l_f < 0.0 {
            return Err(Error::InvalidLipschitzConstant { value: l_f });
        }
        if l_g < 0.0 {
            return Err(Error::InvalidLipschitzConstant { value: l_g });
        }

        let cutoff = if l_g.is_infinite() {
            0.0
        } else if l_f.is_infinite() {
            f64::INFINITY
        } else if l_g == 0.0 {
            f64::INFINITY
        } else {
            l_f / l_g
        };

        let offset = if l_g.is_infinite() {
            0.0
        } else if l_f.is_infinite() || l_g == 0.0 {
            0.0
        } else {
            0.5 * l_f * l_f / l_g
        };

        Ok(OrdinaryPointBoundCalculator {
            l_f,
            l_g,
            cutoff,
            offset,
        })
    }

    /// `h(distance)`: an upper bound on `|f(x) - f(y)|` when `||x - y|| =
    /// distance`.
    pub fn bound(&self, distance: f64) -> f64 {
        if self.l_g.is_infinite() {
            return self.l_f * distance;
        }
        if self.l_f.is_infinite() {
            return 0.5 * self.l_g * distance * distance;
        }
        if distance < self.cutoff {
            0.5 * self.l_g * distance * distance
        } else {
            self.l_f * distance - self.offset
        }
    }
}

/// Which vertex of a simplex the simplex-level bound is anchored to.
#[derive(Clone, Copy, Debug)]
pub enum SimplexBoundRule {
    /// `max(f) - h(max distance from argmax(f))`: the rule the driver uses.
    MaxVertex,
    /// `min(f) - h(max distance from argmin(f))`: a looser sibling rule,
    /// provided for completeness; not exercised by the optimizer.
    MinVertex,
}

/// Converts a [`Simplex`] into a scalar lower bound on the objective over
/// it, using an [`OrdinaryPointBoundCalculator`]. Pure and stateless beyond
/// its configuration.
#[derive(Clone, Copy, Debug)]
pub struct SimplexBoundCalculator {
    point_bound: OrdinaryPointBoundCalculator,
    rule: SimplexBoundRule,
}

impl SimplexBoundCalculator {
    pub fn new(point_bound: OrdinaryPointBoundCalculator) -> Self {
        SimplexBoundCalculator {
            point_bound,
            rule: SimplexBoundRule::MaxVertex,
        }
    }

    pub fn with_rule(point_bound: OrdinaryPointBoundCalculator, rule: SimplexBoundRule) -> Self {
        SimplexBoundCalculator { point_bound, rule }
    }

    /// Lower bound on `f` over the convex hull of `simplex`.
    pub fn bound(&self, simplex: &Simplex) -> f64 {
        match self.rule {
            SimplexBoundRule::MaxVertex => {
                let anchor = simplex.vertex_with_max_value();
                let max_distance = simplex
                    .function_points()
                    .iter()
                    .map(|fp| anchor.point().distance(fp.point()))
                    .fold(0.0_f64, f64::max);
                anchor.value() - self.point_bound.bound(max_distance)
            }
            SimplexBoundRule::MinVertex => {
                let anchor = simplex.vertex_with_min_value();
                let max_distance = simplex
                    .function_points()
                    .iter()
                    .map(|fp| anchor.point().distance(fp.point()))
                    .fold(0.0_f64, f64::max);
                anchor.value() - self.point_bound.bound(max_distance)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function_point::FunctionPoint;
    use crate::point::Point;

    fn fp(coords: Vec<f64>, value: f64) -> FunctionPoint {
        FunctionPoint::new(Point::new(coords), value)
    }

    #[test]
    fn lg_infinite_gives_pure_function_lipschitz_bound() {
        let h = OrdinaryPointBoundCalculator::new(3.0, f64::INFINITY).unwrap();
        assert_eq!(h.bound(2.0), 6.0);
        assert_eq!(h.bound(5.0), 15.0);
    }

    #[test]
    fn lf_infinite_gives_pure_gradient_lipschitz_bound() {
        let h = OrdinaryPointBoundCalculator::new(f64::INFINITY, 2.0).unwrap();
        assert_eq!(h.bound(3.0), 0.5 * 2.0 * 9.0);
    }

    #[test]
    fn quadratic_regime_doubling_law() {
        let h = OrdinaryPointBoundCalculator::new(100.0, 1.0).unwrap();
        let delta = 0.01;
        assert!(2.0 * delta < h.cutoff);
        assert!((h.bound(2.0 * delta) - 4.0 * h.bound(delta)).abs() < 1e-9);
    }

    #[test]
    fn linear_regime_slope_is_lf() {
        let h = OrdinaryPointBoundCalculator::new(2.0, 1.0).unwrap();
        let delta = h.cutoff + 10.0;
        let eps = 0.001;
        let slope = (h.bound(delta + eps) - h.bound(delta)) / eps;
        assert!((slope - 2.0).abs() < 1e-6);
    }

    #[test]
    fn continuous_at_cutoff() {
        let h = OrdinaryPointBoundCalculator::new(2.0, 1.0).unwrap();
        let eps = 1e-6;
        let left = h.bound(h.cutoff - eps);
        let right = h.bound(h.cutoff + eps);
        assert!((left - right).abs() < 1e-5);
    }

    #[test]
    fn rejects_negative_lipschitz_constants() {
        assert!(matches!(
            OrdinaryPointBoundCalculator::new(-1.0, 1.0),
            Err(Error::InvalidLipschitzConstant { value }) if value == -1.0
        ));
        assert!(matches!(
            OrdinaryPointBoundCalculator::new(1.0, -1.0),
            Err(Error::InvalidLipschitzConstant { value }) if value == -1.0
        ));
    }

    #[test]
    fn bound_never_exceeds_min_vertex_value() {
        let s = Simplex::new(vec![fp(vec![-1.0], 1.0), fp(vec![1.0], 1.0)]).unwrap();
        let calc = SimplexBoundCalculator::new(OrdinaryPointBoundCalculator::new(0.0, 2.0).unwrap());
        assert!(calc.bound(&s) <= s.vertex_with_min_value().value());
    }

    #[test]
    fn zero_constants_give_trivial_bound() {
        let s = Simplex::new(vec![fp(vec![-1.0], 1.0), fp(vec![1.0], 4.0)]).unwrap();
        let calc = SimplexBoundCalculator::new(OrdinaryPointBoundCalculator::new(0.0, 0.0).unwrap());
        assert_eq!(calc.bound(&s), s.vertex_with_max_value().value());
    }

    #[test]
    fn min_vertex_rule_anchors_on_the_minimum_and_matches_the_formula() {
        let s = Simplex::new(vec![fp(vec![-1.0], 1.0), fp(vec![1.0], 4.0)]).unwrap();
        let point_bound = OrdinaryPointBoundCalculator::new(0.0, 2.0).unwrap();
        let calc = SimplexBoundCalculator::with_rule(point_bound, SimplexBoundRule::MinVertex);

        let anchor = s.vertex_with_min_value();
        let max_distance = s
            .function_points()
            .iter()
            .map(|fp| anchor.point().distance(fp.point()))
            .fold(0.0_f64, f64::max);
        let expected = anchor.value() - point_bound.bound(max_distance);

        assert_eq!(calc.bound(&s), expected);
        assert_ne!(
            calc.bound(&s),
            SimplexBoundCalculator::new(point_bound).bound(&s)
        );
    }
}
