use binary_heap_plus::{BinaryHeap, MinComparator};

use crate::error::{Error, Result};
use crate::object_value_pair::ObjectValuePair;

/// Min-priority queue over `(object, value)` pairs.
///
/// The wrapped payload is always an [`ObjectValuePair`] (the queue doesn't
/// know or care what simplex it's holding), and the incumbent-pruning
/// decision is left to the caller (the optimizer's termination test), so the
/// queue itself only needs `insert`/`pop_min`/`size` plus the re-insertion
/// ("parking") operation the driver uses to resume a later `optimize` call.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<ObjectValuePair<T>, MinComparator>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::from_vec_min(Vec::new()),
        }
    }

    pub fn from_pairs<I: IntoIterator<Item = ObjectValuePair<T>>>(pairs: I) -> Self {
        PriorityQueue {
            heap: BinaryHeap::from_vec_min(pairs.into_iter().collect()),
        }
    }

    /// Insert `object` with sort key `value`. Accepts re-insertion of a
    /// previously popped element unchanged.
    pub fn insert(&mut self, object: T, value: f64) {
        self.heap.push(ObjectValuePair::new(object, value));
    }

    /// Re-insert a pair that was just popped, e.g. to park the candidate the
    /// driver decided not to process this step.
    pub fn insert_pair(&mut self, pair: ObjectValuePair<T>) {
        self.heap.push(pair);
    }

    /// Remove and return the pair with the least `value`. Every subsequent
    /// call returns a value no smaller than the one before, until the queue
    /// is drained.
    pub fn pop_min(&mut self) -> Result<ObjectValuePair<T>> {
        self.heap.pop().ok_or(Error::EmptyQueue)
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.len() == 0
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts `values` by repeatedly draining a [`PriorityQueue`] built from them.
/// Exercises the same insert/pop_min path the optimizer relies on.
pub fn heapsort(values: Vec<f64>) -> Vec<f64> {
    let mut queue: PriorityQueue<()> = PriorityQueue::from_pairs(
        values.into_iter().map(|v| ObjectValuePair::new((), v)),
    );
    let mut out = Vec::with_capacity(queue.size());
    while let Ok(pair) = queue.pop_min() {
        out.push(pair.value());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_min_yields_nondecreasing_sequence() {
        let values = [7.0, 2.0, 9.0, 2.0, 5.0, 3.0, 0.0, 1.0, 2.0];
        let mut queue = PriorityQueue::new();
        for v in values {
            queue.insert(v, v);
        }

        let mut popped = Vec::new();
        while let Ok(pair) = queue.pop_min() {
            popped.push(pair.value());
        }
        assert_eq!(popped, vec![0.0, 1.0, 2.0, 2.0, 2.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn insert_then_pop_returns_the_inserted_element_when_smallest() {
        let mut queue: PriorityQueue<&str> = PriorityQueue::new();
        queue.insert("only", 1.0);
        let popped = queue.pop_min().unwrap();
        assert_eq!(*popped.object(), "only");
    }

    #[test]
    fn pop_from_empty_queue_is_empty_queue_error() {
        let mut queue: PriorityQueue<()> = PriorityQueue::new();
        assert!(matches!(queue.pop_min(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn reinserted_element_is_retrievable_again() {
        let mut queue = PriorityQueue::new();
        queue.insert("a", 1.0);
        queue.insert("b", 2.0);
        let popped = queue.pop_min().unwrap();
        queue.insert_pair(popped);
        assert_eq!(queue.size(), 2);
        assert_eq!(*queue.pop_min().unwrap().object(), "a");
    }

    #[test]
    fn heapsort_sorts_arbitrary_finite_sequences() {
        let input = vec![5.0, -1.0, 3.3, 0.0, 2.2, -7.0];
        let mut expected = input.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(heapsort(input), expected);
    }
}
