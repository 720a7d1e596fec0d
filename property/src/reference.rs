use std::{cmp::Ordering, fmt};

use log::trace;

use crate::Holder;

/// Bound to an object it does not own. Assignment overwrites that object in
/// place; the binding itself is fixed for the property's lifetime, which the
/// borrow `'a` keeps inside the object's lifetime.
#[derive(Debug)]
pub struct PropertyRef<'a, T> {
    value: &'a mut T,
}

impl<'a, T> PropertyRef<'a, T> {
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &*self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut *self.value
    }

    /// Hands back the live reference the property was bound to.
    pub fn into_inner(self) -> &'a mut T {
        self.value
    }

    pub fn set(&mut self, value: T) -> &mut Self {
        trace!("writing through to {:p}", self.value);
        *self.value = value;
        self
    }

    /// Copy-assigns `source` into the bound object, reusing its resources
    /// where `T::clone_from` can.
    pub fn copy_from(&mut self, source: &T) -> &mut Self
    where
        T: Clone,
    {
        trace!("copying through to {:p}", self.value);
        self.value.clone_from(source);
        self
    }
}

impl<'a, T> Holder for PropertyRef<'a, T> {
    type Target = T;

    fn target(&self) -> &T {
        &*self.value
    }

    fn write(&mut self, value: T) {
        self.set(value);
    }
}

impl<'a, T> From<&'a mut T> for PropertyRef<'a, T> {
    fn from(value: &'a mut T) -> Self {
        Self::new(value)
    }
}

impl<'a, T> AsRef<T> for PropertyRef<'a, T> {
    fn as_ref(&self) -> &T {
        &*self.value
    }
}

impl<'a, T: PartialEq> PartialEq<T> for PropertyRef<'a, T> {
    fn eq(&self, other: &T) -> bool {
        *self.value == *other
    }
}

impl<'a, T: PartialOrd> PartialOrd<T> for PropertyRef<'a, T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        (*self.value).partial_cmp(other)
    }
}

impl<'a, T: fmt::Display> fmt::Display for PropertyRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
