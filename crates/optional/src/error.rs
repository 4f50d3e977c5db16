//! Errors raised by `Optional` construction, extraction and destination writes.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor or fallback supplier demanded a value and got a null-like one.
    #[error("optional: value required, got a null-like value")]
    ValueRequired,
    #[error("optional: no value present")]
    EmptyValue,
    /// A `flat_map` callback returned a null `Optional` rather than an empty one.
    #[error("optional: flat_map callback returned a null Optional")]
    MapperReturnedNullContainer,
    #[error("optional: destination is not writable")]
    NotAWritableDestination,
    /// The destination's storage type is not `value`, the type being stored.
    #[error("optional: destination cannot hold a {value}")]
    TypeMismatch { value: &'static str },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
