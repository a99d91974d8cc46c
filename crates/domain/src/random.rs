//! Random number port.
//!
//! The domain never owns a generator. Dice and random language picks draw
//! from whatever implementation the caller injects.

/// Uniform integer source.
pub trait RandomSource: Send + Sync {
    /// Returns an integer in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        (**self).gen_range(min, max)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for std::sync::Arc<T> {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        (**self).gen_range(min, max)
    }
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn choose<'a, T>(items: &'a [T], rng: &dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let last = i32::try_from(items.len() - 1).unwrap_or(i32::MAX);
    let index = rng.gen_range(0, last).clamp(0, last);
    items.get(index as usize)
}
