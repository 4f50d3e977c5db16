//! Null detection across value categories, and the flattening rule used by
//! `Optional::flat_map`.
//!
//! Absence comes in two tiers. `Option::None` is absent outright. A null raw
//! pointer is absent even though the pointer value itself exists, and so is a
//! `Some` that wraps something null-like. Sequences, mappings, channels,
//! callables and smart pointers cannot be null on their own; their null form
//! is the `None` of an enclosing `Option`. Plain values are never null-like.

use std::borrow::Cow;
use std::cell::{Cell, OnceCell, RefCell};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CString, OsString};
use std::io;
use std::marker::PhantomData;
use std::num::Wrapping;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::{Duration, Instant, SystemTime};

use crate::error::{Error, Result};
use crate::optional::Optional;

/// Decides whether a value counts as "no value".
///
/// The default answers `false`, which is right for every type that has no
/// null representation of its own. Plain user types can opt in with
/// [`nullable_value!`](crate::nullable_value).
pub trait Nullable {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

/// How the result of a `flat_map` callback becomes an `Optional`.
///
/// An `Optional` is taken verbatim. Any other value goes through
/// `Optional::of_nilable`. A `None` standing in for an `Optional` is a null
/// container and is rejected.
pub trait Flatten: Sized {
    type Item;

    fn into_optional(self) -> Result<Optional<Self::Item>>;

    /// Result for a `None` in place of a value of this type.
    #[inline]
    fn flatten_none() -> Result<Optional<Self::Item>> {
        Ok(Optional::EMPTY)
    }
}

/// Implements [`Nullable`] and [`Flatten`] for plain value types that are
/// never null-like.
///
/// ```
/// use optional::{nullable_value, Optional};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
/// nullable_value!(Port);
///
/// assert!(Optional::of_nilable(Port(80)).is_present());
/// ```
#[macro_export]
macro_rules! nullable_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Nullable for $ty {}

            impl $crate::Flatten for $ty {
                type Item = $ty;

                #[inline]
                fn into_optional(self) -> $crate::Result<$crate::Optional<$ty>> {
                    Ok($crate::Optional::of_nilable(self))
                }
            }
        )*
    };
}

// Same as `nullable_value!`, for types with generic parameters.
macro_rules! generic_value {
    ($($(#[$attr:meta])* [$($g:tt)*] $ty:ty),* $(,)?) => {
        $(
            $(#[$attr])*
            impl<$($g)*> Nullable for $ty {}

            $(#[$attr])*
            impl<$($g)*> Flatten for $ty {
                type Item = $ty;

                #[inline]
                fn into_optional(self) -> Result<Optional<$ty>> {
                    Ok(Optional::of_nilable(self))
                }
            }
        )*
    };
}

nullable_value!(
    (), bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    String, CString, OsString, PathBuf,
    Duration, Instant, SystemTime,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr,
    Ordering, io::Error, Error,
);

generic_value!(
    // references and smart pointers
    ['a, T: ?Sized] &'a T,
    ['a, T: ?Sized] &'a mut T,
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
    [T: ?Sized] NonNull<T>,
    ['a, B: ?Sized + ToOwned] Cow<'a, B>,
    // sequences
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T, const N: usize] [T; N],
    // mappings and sets
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    // channels
    [T] Sender<T>,
    [T] SyncSender<T>,
    [T] Receiver<T>,
    // cells and locks
    [T] Cell<T>,
    [T] RefCell<T>,
    [T] OnceCell<T>,
    [T] OnceLock<T>,
    [T] Mutex<T>,
    [T] RwLock<T>,
    // callables
    [R] fn() -> R,
    [A, R] fn(A) -> R,
    [A, B, R] fn(A, B) -> R,
    [A, B, C, R] fn(A, B, C) -> R,
    // Callables taking references are higher-ranked and only overlap the
    // plain shapes above through the leak check.
    #[allow(coherence_leak_check)]
    [A: ?Sized, R] for<'a> fn(&'a A) -> R,
    #[allow(coherence_leak_check)]
    [A: ?Sized, R: ?Sized] for<'a> fn(&'a A) -> &'a R,
    #[allow(coherence_leak_check)]
    [A: ?Sized, R] for<'a> fn(&'a mut A) -> R,
    #[allow(coherence_leak_check)]
    [A: ?Sized, B: ?Sized, R] for<'a, 'b> fn(&'a A, &'b B) -> R,
    // results: an `Err` is a value, not an absence
    [T, E] core::result::Result<T, E>,
    // records and wrappers
    [T] Wrapping<T>,
    [T] Reverse<T>,
    [T: ?Sized] PhantomData<T>,
    [A] (A,),
    [A, B] (A, B),
    [A, B, C] (A, B, C),
    [A, B, C, D] (A, B, C, D),
);

impl<T: Nullable> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        match self {
            None => true,
            Some(inner) => inner.is_null(),
        }
    }
}

impl<T: Flatten> Flatten for Option<T> {
    type Item = T::Item;

    #[inline]
    fn into_optional(self) -> Result<Optional<T::Item>> {
        match self {
            Some(inner) => inner.into_optional(),
            None => T::flatten_none(),
        }
    }

    #[inline]
    fn flatten_none() -> Result<Optional<T::Item>> {
        T::flatten_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: ?Sized> Flatten for *const T {
    type Item = *const T;

    #[inline]
    fn into_optional(self) -> Result<Optional<*const T>> {
        Ok(Optional::of_nilable(self))
    }
}

impl<T: ?Sized> Flatten for *mut T {
    type Item = *mut T;

    #[inline]
    fn into_optional(self) -> Result<Optional<*mut T>> {
        Ok(Optional::of_nilable(self))
    }
}

// An `Optional` is a container, never a null reference. Its null form is
// `Option<Optional<T>>::None`.
impl<T> Nullable for Optional<T> {}

impl<T> Flatten for Optional<T> {
    type Item = T;

    #[inline]
    fn into_optional(self) -> Result<Optional<T>> {
        Ok(self)
    }

    #[inline]
    fn flatten_none() -> Result<Optional<T>> {
        Err(Error::MapperReturnedNullContainer)
    }
}
