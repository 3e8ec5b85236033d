use log::{debug, trace};

use crate::bound::SimplexBoundCalculator;
use crate::error::{Error, Result};
use crate::function_point::FunctionPoint;
use crate::point::Point;
use crate::queue::PriorityQueue;
use crate::simplex::Simplex;

pub const DEFAULT_MAX_FUNCTION_EVALUATIONS: usize = 1000;
pub const DEFAULT_FTOL: f64 = 1e-5;

/// Best-first branch-and-bound driver over a simplicial partition of a box
/// domain. Owns the priority queue of unevaluated simplices, branches the
/// most promising one per step, and tracks the incumbent (best-known
/// `FunctionPoint`).
pub struct BranchBoundOptimizer<F>
where
    F: Fn(&Point) -> f64,
{
    objective: F,
    bound_calculator: SimplexBoundCalculator,
    queue: PriorityQueue<Simplex>,
    incumbent: FunctionPoint,
}

impl<F> BranchBoundOptimizer<F>
where
    F: Fn(&Point) -> f64,
{
    /// Builds an optimizer from a non-empty set of initial simplices
    /// (typically the output of a [`crate::triangulate::Triangulator`]).
    /// The incumbent starts out as the minimum-valued vertex across every
    /// initial simplex.
    pub fn new(
        objective: F,
        initial_simplices: Vec<Simplex>,
        bound_calculator: SimplexBoundCalculator,
    ) -> Result<Self> {
        if initial_simplices.is_empty() {
            return Err(Error::InvalidInput);
        }

        let incumbent = Self::min_vertex_across(&initial_simplices);

        let mut queue = PriorityQueue::new();
        for simplex in initial_simplices {
            let bound = bound_calculator.bound(&simplex);
            queue.insert(simplex, bound);
        }

        debug!(
            "optimizer initialized: {} initial simplices, incumbent value {}",
            queue.size(),
            incumbent.value()
        );

        Ok(BranchBoundOptimizer {
            objective,
            bound_calculator,
            queue,
            incumbent,
        })
    }

    fn min_vertex_across(simplices: &[Simplex]) -> FunctionPoint {
        let mut best: Option<&FunctionPoint> = None;
        for simplex in simplices {
            let candidate = simplex.vertex_with_min_value();
            best = match best {
                None => Some(candidate),
                Some(current) if candidate.value() < current.value() => Some(candidate),
                Some(current) => Some(current),
            };
        }
        best.expect("initial_simplices is non-empty").clone()
    }

    /// The best-known `FunctionPoint`, readable at any time.
    pub fn current_min_function_point(&self) -> &FunctionPoint {
        &self.incumbent
    }

    pub fn queue_size(&self) -> usize {
        self.queue.size()
    }

    /// Runs `optimize` with the library defaults
    /// (`max_function_evaluations = 1000`, `ftol = 1e-5`).
    pub fn optimize(&mut self) -> FunctionPoint {
        self.optimize_with(DEFAULT_MAX_FUNCTION_EVALUATIONS, DEFAULT_FTOL)
    }

    /// Performs at most `max_function_evaluations` branch steps (each
    /// evaluating the objective exactly once), stopping early once the
    /// popped candidate's bound certifies the incumbent is within `ftol` of
    /// the true minimum. Returns the incumbent either way; a subsequent call
    /// on the same instance resumes from where this one left off.
    pub fn optimize_with(&mut self, max_function_evaluations: usize, ftol: f64) -> FunctionPoint {
        for _ in 0..max_function_evaluations {
            let candidate = match self.queue.pop_min() {
                Ok(candidate) => candidate,
                Err(Error::EmptyQueue) => {
                    debug!("queue exhausted, returning incumbent");
                    return self.incumbent.clone();
                }
                Err(other) => unreachable!("pop_min failed unexpectedly: {other}"),
            };

            if candidate.value() > self.incumbent.value() - ftol {
                trace!(
                    "candidate bound {} not better than incumbent {} - ftol {}, parking and stopping",
                    candidate.value(),
                    self.incumbent.value(),
                    ftol
                );
                self.queue.insert_pair(candidate);
                return self.incumbent.clone();
            }

            self.process_candidate(candidate.into_object());
        }

        debug!("max_function_evaluations reached, returning incumbent");
        self.incumbent.clone()
    }

    fn process_candidate(&mut self, simplex: Simplex) {
        let (child_a, child_b) = self.branch_on_candidate(simplex);
        for child in [child_a, child_b] {
            let bound = self.bound_calculator.bound(&child);
            self.queue.insert(child, bound);
        }
    }

    /// Bisects the longest edge incident to the max-value vertex: finds the
    /// farthest vertex from it, evaluates the objective at their midpoint,
    /// and emits the two children obtained by swapping in that midpoint for
    /// each endpoint in turn. Distinct from
    /// `Simplex::branch_on_interior_point`'s `d+1`-way branching, which the
    /// driver does not use.
    fn branch_on_candidate(&mut self, simplex: Simplex) -> (Simplex, Simplex) {
        let max_index = index_of_max_value(simplex.function_points());
        let vertex_max = simplex.function_points()[max_index].clone();

        let far_index = index_of_farthest(simplex.function_points(), &vertex_max);
        let vertex_far = simplex.function_points()[far_index].clone();

        let midpoint = vertex_max.point().midpoint(vertex_far.point());
        let vertex_mid = self.evaluate_function_point(midpoint);

        let others: Vec<FunctionPoint> = simplex
            .function_points()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != max_index && *i != far_index)
            .map(|(_, fp)| fp.clone())
            .collect();

        let mut child_with_max = others.clone();
        child_with_max.push(vertex_mid.clone());
        child_with_max.push(vertex_max);

        let mut child_with_far = others;
        child_with_far.push(vertex_mid);
        child_with_far.push(vertex_far);

        (
            Simplex::new(child_with_max).expect("branching preserves simplex invariants"),
            Simplex::new(child_with_far).expect("branching preserves simplex invariants"),
        )
    }

    /// Evaluates the objective at `point`, producing its `FunctionPoint`,
    /// and updates the incumbent if the new value is better. The sole place
    /// `incumbent` changes after construction.
    fn evaluate_function_point(&mut self, point: Point) -> FunctionPoint {
        let value = (self.objective)(&point);
        let function_point = FunctionPoint::new(point, value);
        if function_point.value() < self.incumbent.value() {
            trace!(
                "incumbent improved: {} -> {}",
                self.incumbent.value(),
                function_point.value()
            );
            self.incumbent = function_point.clone();
        }
        function_point
    }
}

fn index_of_max_value(function_points: &[FunctionPoint]) -> usize {
    let mut best = 0;
    for (i, fp) in function_points.iter().enumerate().skip(1) {
        if fp.value() > function_points[best].value() {
            best = i;
        }
    }
    best
}

fn index_of_farthest(function_points: &[FunctionPoint], from: &FunctionPoint) -> usize {
    let mut best = 0;
    let mut best_distance = from.point().distance(function_points[0].point());
    for (i, fp) in function_points.iter().enumerate().skip(1) {
        let distance = from.point().distance(fp.point());
        if distance > best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::OrdinaryPointBoundCalculator;
    use crate::triangulate::{KuhnTriangulator, Triangulator};

    fn quadratic_bowl() -> (Box<dyn Fn(&Point) -> f64>, Vec<Simplex>) {
        let objective = |p: &Point| p.coords().iter().map(|c| c * c).sum();
        let simplices = KuhnTriangulator
            .triangulate(&objective, &[(-1.0, 1.0)])
            .unwrap();
        (Box::new(objective), simplices)
    }

    #[test]
    fn incumbent_starts_as_min_vertex_of_initial_simplices() {
        let (objective, simplices) = quadratic_bowl();
        let calc = SimplexBoundCalculator::new(OrdinaryPointBoundCalculator::new(f64::INFINITY, 2.0).unwrap());
        let optimizer = BranchBoundOptimizer::new(objective, simplices, calc).unwrap();
        assert_eq!(optimizer.current_min_function_point().value(), 1.0);
    }

    #[test]
    fn one_dimensional_quadratic_converges_within_tolerance() {
        let (objective, simplices) = quadratic_bowl();
        let calc = SimplexBoundCalculator::new(OrdinaryPointBoundCalculator::new(f64::INFINITY, 2.0).unwrap());
        let mut optimizer = BranchBoundOptimizer::new(objective, simplices, calc).unwrap();

        let result = optimizer.optimize_with(50, 1e-3);
        assert!(result.value() <= 1e-3);
        assert!(result.point().coords()[0].abs() <= 1e-3_f64.sqrt() + 1e-9);
    }

    #[test]
    fn budget_stop_performs_exactly_the_requested_evaluations() {
        let dimension = 7usize;
        let objective = |p: &Point| p.coords().iter().map(|c| c * c).sum();
        let bounds: Vec<(f64, f64)> = (0..dimension).map(|_| (-1.0, 1.0)).collect();
        let simplices = KuhnTriangulator.triangulate(&objective, &bounds).unwrap();
        let initial_size = simplices.len();

        let calc = SimplexBoundCalculator::new(OrdinaryPointBoundCalculator::new(f64::INFINITY, 2.0).unwrap());
        let mut optimizer = BranchBoundOptimizer::new(objective, simplices, calc).unwrap();

        optimizer.optimize_with(5, 0.0);
        assert_eq!(optimizer.queue_size(), initial_size + 5);
    }

    #[test]
    fn huge_ftol_stops_immediately_and_parks_the_candidate() {
        let (objective, simplices) = quadratic_bowl();
        let initial_size = simplices.len();
        let calc = SimplexBoundCalculator::new(OrdinaryPointBoundCalculator::new(f64::INFINITY, 2.0).unwrap());
        let mut optimizer = BranchBoundOptimizer::new(objective, simplices, calc).unwrap();

        optimizer.optimize_with(50, 1e5);
        assert_eq!(optimizer.queue_size(), initial_size);
    }

    #[test]
    fn construction_rejects_empty_initial_simplices() {
        let calc = SimplexBoundCalculator::new(OrdinaryPointBoundCalculator::new(1.0, 1.0).unwrap());
        let result = BranchBoundOptimizer::new(|_: &Point| 0.0, Vec::new(), calc);
        assert!(matches!(result, Err(Error::InvalidInput)));
    }
}
