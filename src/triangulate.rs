use crate::error::Result;
use crate::function_point::FunctionPoint;
use crate::point::Point;
use crate::simplex::Simplex;

/// One axis's `(lo, hi)` extent of the hyperrectangle to triangulate.
pub type AxisBounds = (f64, f64);

/// External contract for turning a hyperrectangle into an initial cover of
/// simplices. [`KuhnTriangulator`] is the one concrete implementation this
/// crate ships.
pub trait Triangulator {
    fn triangulate(
        &self,
        objective: &dyn Fn(&Point) -> f64,
        bounds: &[AxisBounds],
    ) -> Result<Vec<Simplex>>;
}

/// Enumerates the `2^d` corners of a box (bit `k` of the corner index
/// selects `lo`/`hi` on axis `k`) and decomposes the box into `d!` simplices
/// via the standard Kuhn triangulation: for every permutation `π` of the
/// axes, walk from the all-`lo` corner flipping one axis to `hi` at a time,
/// in the order `π`, producing `d+1` vertices per simplex.
///
/// Deterministic by construction: the vertex set is exactly the corner set,
/// the hulls cover the box, and their interiors are pairwise disjoint,
/// without depending on a third-party computational-geometry backend whose
/// output could vary across platforms or versions.
pub struct KuhnTriangulator;

impl Triangulator for KuhnTriangulator {
    fn triangulate(
        &self,
        objective: &dyn Fn(&Point) -> f64,
        bounds: &[AxisBounds],
    ) -> Result<Vec<Simplex>> {
        let d = bounds.len();
        let num_corners = 1usize << d;

        let corners: Vec<FunctionPoint> = (0..num_corners)
            .map(|id| {
                let coords: Vec<f64> = (0..d)
                    .map(|k| {
                        let (lo, hi) = bounds[k];
                        if (id >> k) & 1 == 1 {
                            hi
                        } else {
                            lo
                        }
                    })
                    .collect();
                let point = Point::new(coords);
                let value = objective(&point);
                FunctionPoint::new(point, value)
            })
            .collect();

        let mut simplices = Vec::new();
        for perm in permutations(d) {
            let mut corner_id = 0usize;
            let mut vertices = Vec::with_capacity(d + 1);
            vertices.push(corners[corner_id].clone());
            for &axis in &perm {
                corner_id |= 1 << axis;
                vertices.push(corners[corner_id].clone());
            }
            simplices.push(Simplex::new(vertices)?);
        }
        Ok(simplices)
    }
}

/// All permutations of `0..n`, in lexicographic order (Heap's algorithm
/// would be faster but less readable; `n` is the problem's dimension, kept
/// small by construction in every caller of this crate).
fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut items: Vec<usize> = (0..n).collect();
    let mut out = Vec::new();
    permute(&mut items, 0, &mut out);
    out
}

fn permute(items: &mut Vec<usize>, k: usize, out: &mut Vec<Vec<usize>>) {
    if k == items.len() {
        out.push(items.clone());
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, out);
        items.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_of_3_has_6_entries() {
        assert_eq!(permutations(3).len(), 6);
    }

    #[test]
    fn triangulate_produces_dimensional_simplices() {
        let bounds = [(-1.0, 1.0), (-1.0, 1.0)];
        let simplices = KuhnTriangulator
            .triangulate(&|p: &Point| p.coords().iter().map(|c| c * c).sum(), &bounds)
            .unwrap();

        assert_eq!(simplices.len(), 2); // 2! = 2
        for s in &simplices {
            assert_eq!(s.dimension(), 2);
            assert_eq!(s.function_points().len(), 3);
        }
    }

    #[test]
    fn triangulate_uses_every_corner() {
        let bounds = [(-1.0, 1.0), (0.0, 2.0), (5.0, 7.0)];
        let simplices = KuhnTriangulator
            .triangulate(&|p: &Point| p.coords().iter().sum(), &bounds)
            .unwrap();

        let mut all_points: Vec<Vec<u64>> = Vec::new();
        for s in &simplices {
            for fp in s.function_points() {
                all_points.push(fp.point().coords().iter().map(|c| c.to_bits()).collect());
            }
        }

        // 2^3 = 8 corners, each must appear in at least one simplex
        for id in 0..8u32 {
            let coords: Vec<f64> = (0..3)
                .map(|k| {
                    let (lo, hi) = bounds[k];
                    if (id >> k) & 1 == 1 {
                        hi
                    } else {
                        lo
                    }
                })
                .collect();
            let bits: Vec<u64> = coords.iter().map(|c| c.to_bits()).collect();
            assert!(all_points.contains(&bits));
        }
    }
}
