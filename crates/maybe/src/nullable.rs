use alloc::borrow::{Cow, ToOwned};
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ptr::NonNull;

/// Presence classification used by the [`option`](crate::option) constructor.
///
/// Only the language's two "nothing here" markers count as absent: an
/// empty `core::option::Option` and a null raw pointer. Every other value is
/// present, however falsy it looks, so `0`, `false`, `""` and an empty `Vec`
/// all come back as `Some`.
pub trait Nullable {
    type Value;

    /// Splits `self` into the present value, or `None` if it is absent.
    fn into_present(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_present(self) -> Option<T> {
        self
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Value = *const T;

    fn into_present(self) -> Option<*const T> {
        if self.is_null() { None } else { Some(self) }
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = *mut T;

    fn into_present(self) -> Option<*mut T> {
        if self.is_null() { None } else { Some(self) }
    }
}

// ——— Always-present values ——————————————————

/// Marks concrete types as always present, so [`option`](crate::option)
/// wraps them in `Some` unconditionally.
///
/// ```
/// struct Point { x: i32, y: i32 }
/// maybe::present!(Point);
///
/// assert!(maybe::option(Point { x: 1, y: 2 }).is_defined());
/// ```
#[macro_export]
macro_rules! present {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Nullable for $ty {
                type Value = $ty;

                fn into_present(self) -> ::core::option::Option<$ty> {
                    ::core::option::Option::Some(self)
                }
            }
        )+
    };
}

present!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

macro_rules! tuple_present {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<$($name),+> Nullable for ($($name,)+) {
                type Value = ($($name,)+);

                fn into_present(self) -> Option<Self::Value> {
                    Some(self)
                }
            }
        )+
    };
}

tuple_present!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
);

/// Covers `&str` and slices too.
impl<'a, T: ?Sized> Nullable for &'a T {
    type Value = &'a T;

    fn into_present(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> Nullable for &'a mut T {
    type Value = &'a mut T;

    fn into_present(self) -> Option<&'a mut T> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Box<T> {
    type Value = Box<T>;

    fn into_present(self) -> Option<Box<T>> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Rc<T> {
    type Value = Rc<T>;

    fn into_present(self) -> Option<Rc<T>> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Arc<T> {
    type Value = Arc<T>;

    fn into_present(self) -> Option<Arc<T>> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    type Value = NonNull<T>;

    fn into_present(self) -> Option<NonNull<T>> {
        Some(self)
    }
}

impl<'a, B: ?Sized + ToOwned> Nullable for Cow<'a, B> {
    type Value = Cow<'a, B>;

    fn into_present(self) -> Option<Cow<'a, B>> {
        Some(self)
    }
}

impl<T> Nullable for Vec<T> {
    type Value = Vec<T>;

    fn into_present(self) -> Option<Vec<T>> {
        Some(self)
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    type Value = [T; N];

    fn into_present(self) -> Option<[T; N]> {
        Some(self)
    }
}
