//! A uniform get/set/compare surface over a value that is either owned
//! ([`Property`]), borrowed ([`PropertyRef`]) or reached through a raw
//! pointer ([`PropertyPtr`]).
//!
//! The borrowed and pointer variants write through: assigning replaces the
//! value of the object they were bound to and never rebinds them.

use std::cmp::Ordering;

mod error;
mod owned;
mod pointer;
mod reference;

pub use error::Error;
pub use owned::Property;
pub use pointer::PropertyPtr;
pub use reference::PropertyRef;

/// What every property variant can do, regardless of who owns the value.
pub trait Holder {
    type Target;

    fn target(&self) -> &Self::Target;

    /// Replaces the value. For non-owning variants this writes through to
    /// the bound object.
    fn write(&mut self, value: Self::Target);

    fn holds(&self, other: &Self::Target) -> bool
    where
        Self::Target: PartialEq,
    {
        self.target() == other
    }

    fn compare(&self, other: &Self::Target) -> Option<Ordering>
    where
        Self::Target: PartialOrd,
    {
        self.target().partial_cmp(other)
    }
}
