//! Type descriptors handed between toolchain stages.
//!
//! An absent type is modelled as `Option<TypeDescriptor>`. Code that needs a
//! descriptor regardless resolves `None` through [`descriptor_or_empty`], which
//! yields [`TypeDescriptor::EMPTY`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Coarse classification of a type's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    Void,
    Bool,
    Char,
    Int,
    Float,
    Pointer,
    Struct,
}

/// Name, storage tag and byte size of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: Cow<'static, str>,
    pub tag: TypeTag,
    pub size: u64,
}

/// A type position that may be unoccupied.
pub type TypeSlot = Option<TypeDescriptor>;

impl TypeDescriptor {
    /// The canonical "no type": `Void`, tagged [`TypeTag::Void`], zero bytes.
    pub const EMPTY: Self = Self { name: Cow::Borrowed("Void"), tag: TypeTag::Void, size: 0 };

    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, tag: TypeTag, size: u64) -> Self {
        Self { name: name.into(), tag, size }
    }

    /// True for the empty descriptor and anything indistinguishable from it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Clones a slot. An empty slot stays empty.
    #[must_use]
    pub fn clone_slot(slot: Option<&Self>) -> TypeSlot {
        slot.cloned()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

static EMPTY: TypeDescriptor = TypeDescriptor::EMPTY;

/// Returns the shared empty-type descriptor.
#[must_use]
pub fn empty_type_descriptor() -> &'static TypeDescriptor {
    &EMPTY
}

/// Resolves an optional type to a descriptor, substituting the empty type for `None`.
#[must_use]
pub fn descriptor_or_empty(slot: Option<&TypeDescriptor>) -> &TypeDescriptor {
    slot.unwrap_or(&EMPTY)
}
