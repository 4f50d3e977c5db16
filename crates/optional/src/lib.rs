//! optional: a container for values that may or may not be present.
//!
//! `Optional<T>` is meant as a return type where "no result" must be
//! represented and handing back a null-like value would invite mistakes.
//! Construction rejects or discards null-like payloads (see [`Nullable`]),
//! and the value is consumed through a fluent algebra (`filter`, `map`,
//! `flat_map`, `or`) and extractors that either return the value or store it
//! into a caller-supplied [`Destination`].
//!
//! ```
//! use optional::Optional;
//!
//! let n = Optional::of(42).unwrap().map(|x| x + 2).get().unwrap();
//! assert_eq!(n, 44);
//!
//! let s = Optional::of("foo").unwrap().filter(|v| *v != "foo").or_else("bar");
//! assert_eq!(s, "bar");
//! ```

pub mod destination;
pub mod error;
pub mod nullable;
pub mod optional;

pub use destination::Destination;
pub use error::{Error, Result};
pub use nullable::{Flatten, Nullable};
pub use optional::Optional;
