use std::sync::{Arc, RwLock};

/// Shared observable state cell with interior mutability.
///
/// `State<T>` backs the observable fields of editors and validators
/// (value, enabled flag, published outcome). It wraps `Arc<RwLock<T>>`,
/// making handles cheap to clone while every clone sees the same value.
///
/// # Example
///
/// ```
/// use formwork::State;
///
/// let value = State::new(String::from("a"));
/// let alias = value.clone();
/// alias.set(String::from("b"));
/// assert_eq!(value.get(), "b");
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Create a new state cell with the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the current value through a closure without cloning.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value.
    pub fn set(&self, value: T) {
        match self.inner.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }

    /// Replace the value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        match self.inner.write() {
            Ok(mut guard) => std::mem::replace(&mut *guard, value),
            Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), value),
        }
    }

    /// Update the value in place using a closure.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_cell() {
        let state = State::new(1);
        let alias = state.clone();
        alias.set(2);
        assert_eq!(state.get(), 2);
    }

    #[test]
    fn replace_returns_previous_value() {
        let state = State::new(String::from("old"));
        let previous = state.replace(String::from("new"));
        assert_eq!(previous, "old");
        assert_eq!(state.get(), "new");
    }

    #[test]
    fn update_mutates_in_place() {
        let state = State::new(vec![1, 2]);
        state.update(|v| v.push(3));
        assert_eq!(state.get(), vec![1, 2, 3]);
    }
}
