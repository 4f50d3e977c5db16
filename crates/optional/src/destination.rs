//! Typed writes into caller-owned storage, used by the `*_into` extractors.

use std::any::{type_name, Any};
use std::cell::{Cell, OnceCell, RefCell};

use crate::error::{Error, Result};

/// Storage that a value of type `T` can be written into.
///
/// A plain `&mut T` is always writable and type checked at compile time. The
/// other destinations check at the time of the write: `&mut dyn Any` checks
/// the storage type, and the cell types check that they can be written now.
pub trait Destination<T> {
    /// Overwrites the destination with `value`, dropping what it held before.
    fn store(self, value: T) -> Result<()>;
}

impl<T> Destination<T> for &mut T {
    #[inline]
    fn store(self, value: T) -> Result<()> {
        *self = value;
        Ok(())
    }
}

impl<T: Any> Destination<T> for &mut dyn Any {
    fn store(self, value: T) -> Result<()> {
        match self.downcast_mut::<T>() {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::TypeMismatch { value: type_name::<T>() }),
        }
    }
}

impl<T> Destination<T> for &Cell<T> {
    #[inline]
    fn store(self, value: T) -> Result<()> {
        self.set(value);
        Ok(())
    }
}

impl<T> Destination<T> for &RefCell<T> {
    fn store(self, value: T) -> Result<()> {
        let mut slot = self.try_borrow_mut().map_err(|_| Error::NotAWritableDestination)?;
        *slot = value;
        Ok(())
    }
}

// Write-once: a cell that is already set rejects the value.
impl<T> Destination<T> for &OnceCell<T> {
    fn store(self, value: T) -> Result<()> {
        self.set(value).map_err(|_| Error::NotAWritableDestination)
    }
}
