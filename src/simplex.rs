use crate::error::{Error, InvalidSimplexReason, Result};
use crate::function_point::FunctionPoint;

/// The convex hull of `d+1` vertices in `ℝ^d`, represented by the
/// `FunctionPoint` evaluated at each vertex.
///
/// Does not itself validate that the hull is non-degenerate, and does not
/// enforce that a branching point is interior to the hull; the optimizer is
/// responsible for the overall covering of the domain.
#[derive(Clone, Debug)]
pub struct Simplex {
    function_points: Vec<FunctionPoint>,
    dimension: usize,
}

impl Simplex {
    /// Validates and builds a simplex from exactly `dimension + 1` vertices,
    /// all of the same dimension, all with finite scalar values.
    pub fn new(function_points: Vec<FunctionPoint>) -> Result<Self> {
        if function_points.is_empty() {
            return Err(Error::InvalidSimplex {
                reason: InvalidSimplexReason::WrongCount,
            });
        }
        let dimension = function_points[0].point().dimension();
        if function_points.len() != dimension + 1 {
            return Err(Error::InvalidSimplex {
                reason: InvalidSimplexReason::WrongCount,
            });
        }
        for fp in &function_points {
            if fp.point().dimension() != dimension {
                return Err(Error::InvalidSimplex {
                    reason: InvalidSimplexReason::InconsistentDimension,
                });
            }
            if !fp.value().is_finite() {
                return Err(Error::InvalidSimplex {
                    reason: InvalidSimplexReason::NonScalarValue,
                });
            }
        }
        Ok(Simplex {
            function_points,
            dimension,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn function_points(&self) -> &[FunctionPoint] {
        &self.function_points
    }

    /// The vertex with the greatest objective value. Ties broken by first
    /// occurrence.
    pub fn vertex_with_max_value(&self) -> &FunctionPoint {
        let mut best = &self.function_points[0];
        for fp in &self.function_points[1..] {
            if fp.value() > best.value() {
                best = fp;
            }
        }
        best
    }

    /// The vertex with the least objective value. Ties broken by first
    /// occurrence.
    pub fn vertex_with_min_value(&self) -> &FunctionPoint {
        let mut best = &self.function_points[0];
        for fp in &self.function_points[1..] {
            if fp.value() < best.value() {
                best = fp;
            }
        }
        best
    }

    /// Produces `d+1` simplices, one per existing vertex, each with that
    /// vertex replaced by `fp`. Exposed by the data type but not the rule
    /// the driver branches with (see `crate::optimizer`'s two-way rule).
    pub fn branch_on_interior_point(&self, fp: FunctionPoint) -> Vec<Simplex> {
        let n = self.function_points.len();
        (0..n)
            .map(|exclude| {
                let mut points: Vec<FunctionPoint> = self
                    .function_points
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != exclude)
                    .map(|(_, fp)| fp.clone())
                    .collect();
                points.push(fp.clone());
                Simplex::new(points).expect("branching preserves simplex invariants")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn fp(coords: Vec<f64>, value: f64) -> FunctionPoint {
        FunctionPoint::new(Point::new(coords), value)
    }

    fn segment() -> Simplex {
        Simplex::new(vec![fp(vec![-1.0], 1.0), fp(vec![1.0], 4.0)]).unwrap()
    }

    #[test]
    fn rejects_wrong_vertex_count() {
        let err = Simplex::new(vec![fp(vec![0.0], 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSimplex {
                reason: InvalidSimplexReason::WrongCount
            }
        ));
    }

    #[test]
    fn rejects_inconsistent_dimension() {
        let err = Simplex::new(vec![fp(vec![0.0], 1.0), fp(vec![0.0, 0.0], 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSimplex {
                reason: InvalidSimplexReason::InconsistentDimension
            }
        ));
    }

    #[test]
    fn rejects_non_finite_value() {
        let err = Simplex::new(vec![fp(vec![0.0], f64::NAN), fp(vec![1.0], 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSimplex {
                reason: InvalidSimplexReason::NonScalarValue
            }
        ));
    }

    #[test]
    fn max_and_min_vertex_are_found() {
        let s = segment();
        assert_eq!(s.vertex_with_max_value().value(), 4.0);
        assert_eq!(s.vertex_with_min_value().value(), 1.0);
    }

    #[test]
    fn max_vertex_tie_breaks_to_first_occurrence() {
        let s = Simplex::new(vec![fp(vec![0.0], 2.0), fp(vec![1.0], 2.0)]).unwrap();
        assert_eq!(s.vertex_with_max_value().point().coords(), &[0.0]);
    }

    #[test]
    fn branch_on_interior_point_returns_dplus1_simplices() {
        let s = segment();
        let mid = fp(vec![0.0], 0.0);
        let children = s.branch_on_interior_point(mid);
        assert_eq!(children.len(), 2);
        for child in &children {
            assert_eq!(child.function_points().len(), 2);
        }
    }
}
