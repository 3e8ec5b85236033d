//! Deterministic global minimization of a real-valued, multivariate
//! objective over a bounded hyperrectangle.
//!
//! The search is a best-first branch-and-bound over a simplicial partition
//! of the domain: an external [`triangulate::Triangulator`] (or a caller's
//! own pre-built simplices) seeds the search, [`bound::SimplexBoundCalculator`]
//! derives a provably valid lower bound on the objective over each simplex
//! from Lipschitz constants on the function and its gradient, and
//! [`optimizer::BranchBoundOptimizer`] repeatedly branches the
//! most-promising simplex until the gap between the best bound remaining in
//! the queue and the incumbent closes within tolerance, or a function
//! evaluation budget runs out.
//!
//! ```
//! use simplex_bb::bound::{OrdinaryPointBoundCalculator, SimplexBoundCalculator};
//! use simplex_bb::optimizer::BranchBoundOptimizer;
//! use simplex_bb::point::Point;
//! use simplex_bb::triangulate::{KuhnTriangulator, Triangulator};
//!
//! let objective = |p: &Point| p.coords().iter().map(|c| c * c).sum();
//! let simplices = KuhnTriangulator
//!     .triangulate(&objective, &[(-1.0, 1.0)])
//!     .unwrap();
//!
//! let bound_calculator =
//!     SimplexBoundCalculator::new(OrdinaryPointBoundCalculator::new(f64::INFINITY, 2.0).unwrap());
//! let mut optimizer = BranchBoundOptimizer::new(objective, simplices, bound_calculator).unwrap();
//!
//! let result = optimizer.optimize_with(50, 1e-3);
//! assert!(result.value() <= 1e-3);
//! ```

pub mod bound;
pub mod error;
pub mod function_point;
pub mod object_value_pair;
pub mod optimizer;
pub mod point;
pub mod queue;
pub mod simplex;
pub mod triangulate;

pub use bound::{OrdinaryPointBoundCalculator, SimplexBoundCalculator, SimplexBoundRule};
pub use error::{Error, InvalidSimplexReason, Result};
pub use function_point::FunctionPoint;
pub use object_value_pair::ObjectValuePair;
pub use optimizer::BranchBoundOptimizer;
pub use point::Point;
pub use queue::{heapsort, PriorityQueue};
pub use simplex::Simplex;
pub use triangulate::{AxisBounds, KuhnTriangulator, Triangulator};
