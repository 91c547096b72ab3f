//! k-subsets of an ordered slice.

/// Lazy iterator over the k-element subsets of `items`, in lexicographic
/// index order. Cloning restarts from the current position.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

/// All k-subsets of `items`. Empty when `k == 0` or `k > items.len()`.
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        done: k == 0 || k > items.len(),
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let items = self.items;
        let current = self.indices.iter().map(|&i| &items[i]).collect();

        // Advance the rightmost index that still has room, then reset the tail.
        let k = self.indices.len();
        let n = items.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return Some(current);
            }
            i -= 1;
            if self.indices[i] < n - k + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(current)
    }
}
