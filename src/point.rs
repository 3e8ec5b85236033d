/// A finite-length, immutable point in `ℝ^d`.
///
/// Equality is component-wise; there is no tolerance for floating-point
/// noise.
#[derive(Clone, Debug, PartialEq)]
pub struct Point(Vec<f64>);

impl Point {
    pub fn new(coords: Vec<f64>) -> Self {
        Point(coords)
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// Euclidean (`L2`) distance to `other`. Panics if dimensions differ.
    pub fn distance(&self, other: &Point) -> f64 {
        assert_eq!(
            self.dimension(),
            other.dimension(),
            "distance between points of different dimension"
        );
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Componentwise midpoint of `self` and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        assert_eq!(
            self.dimension(),
            other.dimension(),
            "midpoint between points of different dimension"
        );
        Point(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| 0.5 * (a + b))
                .collect(),
        )
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Point::new(coords)
    }
}
