use std::cmp::Ordering;

use crate::error::GraphError;

/// Binary min-heap whose entries are addressed by a dense index in
/// `[0, capacity)`.
///
/// `heap` holds `(index, key)` pairs with the minimum at position 0 and the
/// children of position `k` at `2k + 1` and `2k + 2`. `positions` is the
/// inverse mapping, so `positions[heap[k].0] == Some(k)` for every occupied
/// position. Every mutation repairs only the path it touched with a swim
/// and/or a sink, keeping all operations at `O(log n)`.
#[derive(Clone, Debug)]
pub struct IndexedMinQueue<K> {
    heap: Vec<(usize, K)>,
    positions: Vec<Option<usize>>,
}

impl<K: PartialOrd> IndexedMinQueue<K> {
    pub fn new(capacity: usize) -> Self {
        IndexedMinQueue {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Number of distinct indices the queue accepts.
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, index: usize) -> Result<bool, GraphError> {
        self.check_index(index)?;
        Ok(self.positions[index].is_some())
    }

    pub fn insert(&mut self, index: usize, key: K) -> Result<(), GraphError> {
        if self.contains(index)? {
            return Err(GraphError::DuplicateIndex(index));
        }

        let position = self.heap.len();
        self.heap.push((index, key));
        self.positions[index] = Some(position);
        self.swim(position);
        Ok(())
    }

    /// Index currently holding the smallest key. Ties are broken arbitrarily.
    pub fn min_index(&self) -> Result<usize, GraphError> {
        self.heap
            .first()
            .map(|(index, _)| *index)
            .ok_or(GraphError::Underflow)
    }

    pub fn min_key(&self) -> Result<&K, GraphError> {
        self.heap
            .first()
            .map(|(_, key)| key)
            .ok_or(GraphError::Underflow)
    }

    pub fn key_of(&self, index: usize) -> Result<&K, GraphError> {
        let position = self.position_of(index)?;
        Ok(&self.heap[position].1)
    }

    /// Removes the index with the smallest key and returns it.
    pub fn delete_min(&mut self) -> Result<usize, GraphError> {
        if self.heap.is_empty() {
            return Err(GraphError::Underflow);
        }
        Ok(self.remove_at(0))
    }

    /// Sets a strictly smaller key for `index`.
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<(), GraphError> {
        let position = self.position_of(index)?;
        if key.partial_cmp(&self.heap[position].1) != Some(Ordering::Less) {
            return Err(GraphError::NotADecrease(index));
        }

        self.heap[position].1 = key;
        self.swim(position);
        Ok(())
    }

    /// Sets a strictly larger key for `index`.
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<(), GraphError> {
        let position = self.position_of(index)?;
        if key.partial_cmp(&self.heap[position].1) != Some(Ordering::Greater) {
            return Err(GraphError::NotAnIncrease(index));
        }

        self.heap[position].1 = key;
        self.sink(position);
        Ok(())
    }

    /// Sets the key of `index` regardless of direction.
    pub fn change_key(&mut self, index: usize, key: K) -> Result<(), GraphError> {
        let position = self.position_of(index)?;
        self.heap[position].1 = key;
        let position = self.swim(position);
        self.sink(position);
        Ok(())
    }

    pub fn delete(&mut self, index: usize) -> Result<(), GraphError> {
        let position = self.position_of(index)?;
        self.remove_at(position);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), GraphError> {
        if index >= self.positions.len() {
            return Err(GraphError::InvalidIndex {
                index,
                capacity: self.positions.len(),
            });
        }
        Ok(())
    }

    fn position_of(&self, index: usize) -> Result<usize, GraphError> {
        self.check_index(index)?;
        self.positions[index].ok_or(GraphError::NotPresent(index))
    }

    /// Moves the entry at `position` to the end, drops it and repairs the
    /// entry that took its place.
    fn remove_at(&mut self, position: usize) -> usize {
        let last = self.heap.len() - 1;
        self.exchange(position, last);
        let (index, _) = self.heap.swap_remove(last);
        self.positions[index] = None;

        if position < self.heap.len() {
            let position = self.swim(position);
            self.sink(position);
        }

        index
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        self.heap[a].1 > self.heap[b].1
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].0] = Some(a);
        self.positions[self.heap[b].0] = Some(b);
    }

    /// Returns the final position of the moved entry.
    fn swim(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.greater(parent, position) {
                break;
            }
            self.exchange(parent, position);
            position = parent;
        }
        position
    }

    fn sink(&mut self, mut position: usize) {
        loop {
            let mut child = 2 * position + 1;
            if child >= self.heap.len() {
                break;
            }
            if child + 1 < self.heap.len() && self.greater(child, child + 1) {
                child += 1;
            }
            if !self.greater(position, child) {
                break;
            }
            self.exchange(position, child);
            position = child;
        }
    }
}

impl<K: PartialOrd + Clone> IndexedMinQueue<K> {
    /// Indices in ascending key order, drained from a copy of the queue.
    ///
    /// The live queue is left untouched.
    pub fn sorted_indices(&self) -> SortedIndices<K> {
        SortedIndices {
            queue: self.clone(),
        }
    }
}

/// Lazy, finite drain of a snapshot of an [`IndexedMinQueue`].
#[derive(Clone, Debug)]
pub struct SortedIndices<K> {
    queue: IndexedMinQueue<K>,
}

impl<K: PartialOrd> Iterator for SortedIndices<K> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.delete_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<K: PartialOrd> ExactSizeIterator for SortedIndices<K> {}

impl<'a, K: PartialOrd + Clone> IntoIterator for &'a IndexedMinQueue<K> {
    type Item = usize;
    type IntoIter = SortedIndices<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorted_indices()
    }
}
