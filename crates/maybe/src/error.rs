use thiserror::Error;

/// Returned by [`O::get`](crate::O::get) when there is no value to hand out.
///
/// There is exactly one instance, [`NONE_GET_ERROR`]. Every failing `get`
/// returns a reference to it, so callers can tell this failure apart from
/// any other error by address as well as by value:
///
/// ```
/// use maybe::{O, NONE_GET_ERROR};
///
/// let err = O::<u32>::NONE.get().unwrap_err();
/// assert!(core::ptr::eq(err, &NONE_GET_ERROR));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("None.get error")]
pub struct NoneGetError {
    _private: (),
}

/// The shared "get on None" error.
pub static NONE_GET_ERROR: NoneGetError = NoneGetError { _private: () };
