use std::{cmp::Ordering, fmt};

use crate::Holder;

/// Owns its value. Cloning, copying and moving behave exactly as they do for
/// `T`; two properties never share state.
#[derive(Clone, Copy, Debug, Default, Hash, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Property<T> {
    value: T,
}

impl<T> Property<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// A copy of the held value.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Drops the old value.
    pub fn set(&mut self, value: T) -> &mut Self {
        self.value = value;
        self
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Holder for Property<T> {
    type Target = T;

    fn target(&self) -> &T {
        &self.value
    }

    fn write(&mut self, value: T) {
        self.set(value);
    }
}

impl<T> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> AsRef<T> for Property<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq<T> for Property<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: PartialOrd> PartialOrd<T> for Property<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<T: fmt::Display> fmt::Display for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
