//! Single-slot type-erased value.
//!
//! A [`TypedValue`] holds at most one value together with the runtime tag of its
//! type. Reads are strict: the requested type must be exactly the stored type.
//! There is no numeric widening and no conversion between related types, so a
//! stored `u32` cannot be read back as `u64` or `i32`.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use crate::ValueError;

#[derive(Clone)]
struct Slot {
    type_name: &'static str,
    payload: Arc<dyn Any + Send + Sync>,
}

/// A type-erased container for exactly one value of a caller-chosen type.
///
/// Cloning is cheap: clones share the stored payload, which is immutable.
/// [`TypedValue::set`] swaps in a fresh payload, so a clone taken earlier keeps
/// the old value.
#[derive(Clone, Default)]
pub struct TypedValue {
    slot: Option<Slot>,
}

impl TypedValue {
    /// Creates a value holding `value`.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        let mut out = Self::default();
        out.set(value);
        out
    }

    /// Stores `value`, replacing any previous value and its type tag.
    pub fn set<T>(&mut self, value: T)
    where
        T: Any + Send + Sync,
    {
        self.slot = Some(Slot {
            type_name: type_name::<T>(),
            payload: Arc::new(value),
        });
    }

    /// Returns a copy of the stored value if it was stored as exactly `T`.
    pub fn get<T>(&self) -> Result<T, ValueError>
    where
        T: Any + Clone,
    {
        let slot = self.slot.as_ref().ok_or(ValueError::Uninitialized)?;
        slot.payload
            .downcast_ref::<T>()
            .cloned()
            .ok_or(ValueError::TypeMismatch {
                stored: slot.type_name,
                requested: type_name::<T>(),
            })
    }

    pub fn is_set(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns `true` if a value is stored and its type is exactly `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.slot.as_ref().is_some_and(|slot| slot.payload.is::<T>())
    }

    /// Name of the stored type, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        self.slot.as_ref().map(|slot| slot.type_name)
    }
}

impl fmt::Debug for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(slot) => write!(f, "TypedValue<{}>", slot.type_name),
            None => f.write_str("TypedValue<unset>"),
        }
    }
}
