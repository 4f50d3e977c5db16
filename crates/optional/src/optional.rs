//! The `Optional<T>` container.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ptr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::destination::Destination;
use crate::error::{Error, Result};
use crate::nullable::{Flatten, Nullable};

/// A container which may or may not hold a usable value.
///
/// An `Optional` is either present or empty, and never changes state once
/// built. A present `Optional` never holds a null-like payload: every
/// constructor runs the payload through [`Nullable::is_null`].
#[derive(Clone, Copy)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// The empty `Optional`. Every empty instance behaves and compares the same.
    pub const EMPTY: Self = Optional { value: None };

    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.value.as_ref().map_or(true, predicate) {
            self
        } else {
            Self::EMPTY
        }
    }

    /// Applies `mapper` to the value and wraps the result with
    /// [`Optional::of_nilable`].
    ///
    /// A mapper that itself returns an `Optional` produces an
    /// `Optional<Optional<_>>`; use [`Optional::flat_map`] to avoid the
    /// nesting.
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        U: Nullable,
        F: FnOnce(T) -> U,
    {
        match self.value {
            Some(v) => Optional::of_nilable(mapper(v)),
            None => Optional::EMPTY,
        }
    }

    /// Applies `mapper` to the value without re-wrapping an `Optional` result.
    ///
    /// A plain result is wrapped with [`Optional::of_nilable`]. Fails with
    /// [`Error::MapperReturnedNullContainer`] if the mapper returns `None` in
    /// place of an `Optional`.
    pub fn flat_map<R, F>(self, mapper: F) -> Result<Optional<R::Item>>
    where
        R: Flatten,
        F: FnOnce(T) -> R,
    {
        match self.value {
            Some(v) => mapper(v).into_optional(),
            None => Ok(Optional::EMPTY),
        }
    }

    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(v) = &self.value {
            action(v);
        }
    }

    pub fn if_present_or_else<F, E>(&self, action: F, empty_action: E)
    where
        F: FnOnce(&T),
        E: FnOnce(),
    {
        match &self.value {
            Some(v) => action(v),
            None => empty_action(),
        }
    }

    #[inline]
    pub fn get(self) -> Result<T> {
        self.value.ok_or(Error::EmptyValue)
    }

    #[inline]
    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns the value, or whatever `supplier` returns. The supplied value
    /// is not null-checked.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the `Optional` is empty.
    #[track_caller]
    pub fn or_else_panic(self, message: &str) -> T {
        match self.value {
            Some(v) => v,
            None => panic!("optional.or_else_panic: {}", message),
        }
    }

    /// Like [`Optional::or_else_panic`] with the message `nil value`.
    #[track_caller]
    pub fn or_else_panic_default(self) -> T {
        self.or_else_panic("nil value")
    }

    pub fn get_into<D: Destination<T>>(self, dst: D) -> Result<()> {
        dst.store(self.get()?)
    }

    pub fn or_else_into<D: Destination<T>>(self, other: T, dst: D) -> Result<()> {
        dst.store(self.or_else(other))
    }

    pub fn or_else_get_into<F, D>(self, supplier: F, dst: D) -> Result<()>
    where
        F: FnOnce() -> T,
        D: Destination<T>,
    {
        dst.store(self.or_else_get(supplier))
    }

    /// Stores the value into `dst`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the `Optional` is empty.
    #[track_caller]
    pub fn or_else_panic_into<D: Destination<T>>(self, message: &str, dst: D) -> Result<()> {
        dst.store(self.or_else_panic(message))
    }

    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        Optional { value: self.value.as_ref() }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T: Nullable> Optional<T> {
    /// Wraps a value that must be present.
    ///
    /// Fails with [`Error::ValueRequired`] if `value` is null-like.
    pub fn of(value: T) -> Result<Self> {
        if value.is_null() {
            return Err(Error::ValueRequired);
        }
        Ok(Optional { value: Some(value) })
    }

    /// Wraps `value`, or returns [`Optional::EMPTY`] if it is null-like.
    pub fn of_nilable(value: T) -> Self {
        if value.is_null() {
            Self::EMPTY
        } else {
            Optional { value: Some(value) }
        }
    }

    /// Returns `self` if present, otherwise wraps the supplied value with
    /// [`Optional::of`].
    pub fn or<F>(self, supplier: F) -> Result<Self>
    where
        F: FnOnce() -> T,
    {
        if self.is_present() {
            return Ok(self);
        }
        Self::of(supplier())
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Nullable> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::EMPTY, Self::of_nilable)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        optional.value
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self.value == other.value
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "Optional({:?})", v),
            None => f.write_str("Optional.Empty"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Serialized as the inner `Option`; deserialization re-applies the null check.
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de> + Nullable,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}
