use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{NONE_GET_ERROR, NoneGetError};
use crate::fallback::Fallback;
use crate::nullable::Nullable;

/// A value that is either present (`Some`) or absent (`None`).
///
/// `O` never changes variant through its combinators: `map` and `filter`
/// produce a result, they do not rewrite the receiver. `None` carries no
/// payload, so every `None` is the same value as [`O::NONE`].
///
/// Callbacks given to [`filter`](O::filter), [`for_each`](O::for_each) and
/// [`map`](O::map) receive `(value, index, source)`. There is only ever one
/// element, so `index` is always `0`; `source` is the option the call was
/// made on.
///
/// The `Some(..)` / `None` text form comes from `Display` and needs
/// `T: Display`; use `{:?}` for other payloads such as `O<Vec<u8>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum O<T> {
    Some(T),
    None,
}

/// Classifies `possible` as present or absent.
///
/// Absent means an empty `core::option::Option` or a null pointer and yields
/// `O::None`. Anything else, `0` and `false` included, is wrapped in
/// `O::Some` unmodified.
pub fn option<N: Nullable>(possible: N) -> O<N::Value> {
    O::new(possible)
}

impl<T> O<T> {
    /// The absent value.
    pub const NONE: Self = O::None;

    /// Classifying constructor, see [`option`].
    pub fn new<N: Nullable<Value = T>>(possible: N) -> Self {
        match possible.into_present() {
            Some(val) => {
                tracing::trace!("option: input present");
                O::Some(val)
            }
            None => {
                tracing::trace!("option: input absent, yielding None");
                O::None
            }
        }
    }

    /// Constructs an `O::Some(val)` variant without checking for presence.
    ///
    /// `O::some(None::<u8>)` is `Some(None)`, not `None`. Use this when the
    /// value is already known to be there.
    pub fn some(val: T) -> Self {
        O::Some(val)
    }

    /// Constructs an `O::None` variant.
    pub fn none() -> Self {
        O::None
    }

    /// Returns true if the value is `Some`.
    pub fn is_defined(&self) -> bool {
        matches!(self, O::Some(_))
    }

    /// Returns true if the value is `None`.
    pub fn is_empty(&self) -> bool {
        !self.is_defined()
    }

    /// Returns the contained value, or the shared [`NONE_GET_ERROR`] on `None`.
    pub fn get(self) -> Result<T, &'static NoneGetError> {
        match self {
            O::Some(val) => Ok(val),
            O::None => {
                tracing::trace!("get called on None");
                Err(&NONE_GET_ERROR)
            }
        }
    }

    /// Returns the contained value, otherwise resolves `fallback`.
    ///
    /// On `Some` the fallback is dropped without being invoked. On `None` a
    /// closure is called exactly once; a [`Value`](crate::Value) is returned
    /// as it is.
    pub fn get_or_else<F: Fallback<T>>(self, fallback: F) -> T {
        match self {
            O::Some(val) => val,
            O::None => fallback.resolve(),
        }
    }

    /// Keeps `self` only if `predicate` returns `true`.
    ///
    /// On a pass the very same option is handed back, not a rebuilt one.
    /// The predicate is not called on `None`.
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T, usize, &Self) -> bool,
    {
        let keep = match &self {
            O::Some(val) => predicate(val, 0, &self),
            O::None => false,
        };
        if keep { self } else { O::None }
    }

    /// Like [`filter`](O::filter), with `this` passed to the predicate as its
    /// first argument.
    pub fn filter_with<C: ?Sized, F>(self, this: &C, predicate: F) -> Self
    where
        F: FnOnce(&C, &T, usize, &Self) -> bool,
    {
        self.filter(|val, index, source| predicate(this, val, index, source))
    }

    /// Calls `callback` once with the value, or not at all on `None`.
    pub fn for_each<F>(&self, callback: F)
    where
        F: FnOnce(&T, usize, &Self),
    {
        if let O::Some(val) = self {
            callback(val, 0, self);
        }
    }

    /// Like [`for_each`](O::for_each), with `this` passed to the callback as
    /// its first argument.
    pub fn for_each_with<C: ?Sized, F>(&self, this: &C, callback: F)
    where
        F: FnOnce(&C, &T, usize, &Self),
    {
        self.for_each(|val, index, source| callback(this, val, index, source))
    }

    /// Maps the value through `callback`, wrapping the result with
    /// [`O::some`].
    ///
    /// The result is not re-classified: a callback that returns an empty
    /// `core::option::Option` gives `Some(None)`.
    pub fn map<U, F>(&self, callback: F) -> O<U>
    where
        F: FnOnce(&T, usize, &Self) -> U,
    {
        match self {
            O::Some(val) => O::some(callback(val, 0, self)),
            O::None => O::None,
        }
    }

    /// Like [`map`](O::map), with `this` passed to the callback as its first
    /// argument.
    pub fn map_with<C: ?Sized, U, F>(&self, this: &C, callback: F) -> O<U>
    where
        F: FnOnce(&C, &T, usize, &Self) -> U,
    {
        self.map(|val, index, source| callback(this, val, index, source))
    }

    /// A fresh one-element vector for `Some`, an empty one for `None`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            O::Some(val) => vec![val.clone()],
            O::None => Vec::new(),
        }
    }

    /// Expects the value to be `Some`, panics with `msg` if not.
    pub fn expect(self, msg: &str) -> T {
        match self {
            O::Some(val) => val,
            O::None => panic!("{msg}"),
        }
    }

    /// Converts from `&O<T>` to `O<&T>`.
    pub fn as_ref(&self) -> O<&T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            O::Some(val) => Some(val),
            O::None => None,
        }
    }

    /// Iterates over the value, if any.
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Default for O<T> {
    fn default() -> Self {
        O::None
    }
}

impl<T> From<Option<T>> for O<T> {
    fn from(opt: Option<T>) -> Self {
        O::new(opt)
    }
}

impl<T> From<O<T>> for Option<T> {
    fn from(opt: O<T>) -> Self {
        opt.into_option()
    }
}

impl<T> IntoIterator for O<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a O<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for O<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            O::Some(val) => write!(f, "Some({val})"),
            O::None => f.write_str("None"),
        }
    }
}
