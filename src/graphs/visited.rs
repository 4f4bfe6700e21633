use bit_vec::BitVec;
use rustc_hash::FxHashSet;
use std::hash::Hash;

use crate::graphs::edges::Dense;

/// Set of already discovered values, used by traversals.
pub trait Visited<V>: Default {
    /// Marks `value` as visited.
    ///
    /// Returns true the first time a value is visited.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
}

impl<V> Visited<V> for FxHashSet<V>
where
    V: Eq + Hash + Copy,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }
}

/// Bitset keyed by the dense position of the value.
///
/// Grows on demand, so a default (empty) bitset works for any graph,
/// but presizing with `BitVec::from_elem(n, false)` avoids reallocation.
impl<V: Dense> Visited<V> for BitVec {
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        let index = value.index();
        let len = self.len();
        if index >= len {
            self.grow(index + 1 - len, false);
        }

        if self[index] {
            false
        } else {
            self.set(index, true);
            true
        }
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.get(value.index()).unwrap_or(false)
    }
}
