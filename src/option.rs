//! Explicit optional values
//!
//! [`Option<T>`] is either present (holds a `T`) or absent (holds nothing).
//! Every operation is total: nothing here panics, and absence is surfaced
//! to the caller as a boolean it has to branch on.

use std::fmt;

type StdOption<T> = std::option::Option<T>;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<T> {
    Present(T),
    Absent,
}

/// A value of type `T` that may be missing.
///
/// Instances never change state after construction: no method takes
/// `&mut self`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Option<T> {
    slot: Slot<T>,
}

impl<T> Option<T> {
    /// Wrap `value` in the present state.
    pub fn some(value: T) -> Self {
        Self {
            slot: Slot::Present(value),
        }
    }

    /// The absent state. `T` usually has to be pinned by the caller,
    /// e.g. `Option::<String>::none()`.
    pub fn none() -> Self {
        Self { slot: Slot::Absent }
    }

    pub fn is_some(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Return the contained value, or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self.slot {
            Slot::Present(value) => value,
            Slot::Absent => default,
        }
    }

    /// Borrow the contained value as a standard library option.
    pub fn as_std_ref(&self) -> StdOption<&T> {
        match &self.slot {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }
}

impl<T: Default> Option<T> {
    /// Return the contained value and `true`, or `T::default()` and `false`
    /// when absent.
    ///
    /// ```
    /// use optionkit::Option;
    ///
    /// let (name, ok) = Option::<String>::none().unwrap();
    /// assert!(!ok);
    /// assert_eq!(name, "");
    /// ```
    pub fn unwrap(self) -> (T, bool) {
        match self.slot {
            Slot::Present(value) => (value, true),
            Slot::Absent => (T::default(), false),
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::none(),
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(value: Option<T>) -> Self {
        match value.slot {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Present(value) => f.debug_tuple("Some").field(value).finish(),
            Slot::Absent => f.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Present(value) => write!(f, "Some({})", value),
            Slot::Absent => f.write_str("None"),
        }
    }
}
