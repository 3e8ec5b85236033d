use std::hash::{Hash, Hasher};

use crate::point::Point;

/// A point together with the objective's value there.
///
/// Immutable after construction. `is_local_minimum` defaults to `false` and
/// is unused by the driver; it exists so tighter, local-minimum-aware bounds
/// (out of scope here) have somewhere to record the fact without changing
/// the shape of every `FunctionPoint` in the system.
#[derive(Clone, Debug)]
pub struct FunctionPoint {
    point: Point,
    value: f64,
    is_local_minimum: bool,
}

impl FunctionPoint {
    pub fn new(point: Point, value: f64) -> Self {
        FunctionPoint {
            point,
            value,
            is_local_minimum: false,
        }
    }

    pub fn with_local_minimum(point: Point, value: f64, is_local_minimum: bool) -> Self {
        FunctionPoint {
            point,
            value,
            is_local_minimum,
        }
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_local_minimum(&self) -> bool {
        self.is_local_minimum
    }
}

impl PartialEq for FunctionPoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point && self.value == other.value
    }
}

impl Eq for FunctionPoint {}

impl Hash for FunctionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.point.coords() {
            c.to_bits().hash(state);
        }
        self.value.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_local_minimum_defaults_to_false() {
        let fp = FunctionPoint::new(Point::new(vec![1.0]), 3.5);
        assert!(!fp.is_local_minimum());
    }

    #[test]
    fn equal_point_and_value_are_equal() {
        let a = FunctionPoint::new(Point::new(vec![1.0, 2.0]), 3.5);
        let b = FunctionPoint::new(Point::new(vec![1.0, 2.0]), 3.5);
        assert_eq!(a, b);
    }

    #[test]
    fn different_point_is_unequal() {
        let a = FunctionPoint::new(Point::new(vec![1.0]), 3.5);
        let b = FunctionPoint::new(Point::new(vec![2.0]), 3.5);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_matches_equality() {
        use std::collections::hash_map::DefaultHasher;

        let a = FunctionPoint::new(Point::new(vec![1.0, 2.0]), 3.5);
        let b = FunctionPoint::new(Point::new(vec![1.0, 2.0]), 3.5);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        b.hash(&mut hb);

        assert_eq!(ha.finish(), hb.finish());
    }
}
