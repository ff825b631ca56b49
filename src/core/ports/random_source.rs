//! Random source port
//!
//! Suggestion generation picks a power word, an emoji and a hook number at
//! random. The choice goes through this trait so tests can pin it.

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Pick one element of `items`, or `None` when it is empty
pub fn pick<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_index(items.len()) % items.len())
}
