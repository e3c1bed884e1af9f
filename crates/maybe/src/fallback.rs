/// What [`O::get_or_else`](crate::O::get_or_else) falls back to on `None`.
///
/// A zero-argument closure is invoked once and its result returned. Anything
/// wrapped in [`Value`] is returned as it is, which is also the way to hand
/// back a callable as the default without calling it.
pub trait Fallback<T> {
    fn resolve(self) -> T;
}

impl<T, F: FnOnce() -> T> Fallback<T> for F {
    fn resolve(self) -> T {
        self()
    }
}

/// A plain default value for [`O::get_or_else`](crate::O::get_or_else).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Value<T>(pub T);

impl<T> Fallback<T> for Value<T> {
    fn resolve(self) -> T {
        self.0
    }
}
