use std::{cmp::Ordering, fmt, ptr};

use log::{trace, warn};

use crate::{Error, Holder};

/// Bound once, at construction, to the object a raw pointer points at.
///
/// Assigning another pointer copies *its pointee's value* into the bound
/// object; it does not make the property follow the new pointer. `get` keeps
/// returning the address the property was built from.
#[derive(Debug)]
pub struct PropertyPtr<'a, T> {
    value: &'a mut T,
}

impl<'a, T> PropertyPtr<'a, T> {
    /// # Safety
    /// `ptr` must be non-null, aligned and point to an initialised `T` that
    /// stays valid for `'a` and is not accessed through any other path while
    /// the property is alive.
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        debug_assert!(!ptr.is_null(), "property bound to a null pointer");
        Self {
            // SAFETY: upheld by the caller.
            value: unsafe { &mut *ptr },
        }
    }

    /// # Safety
    /// Same as [`PropertyPtr::from_raw`], except that a null `ptr` is
    /// reported as [`Error::NullPointer`].
    pub unsafe fn try_from_raw(ptr: *mut T) -> Result<Self, Error> {
        if ptr.is_null() {
            warn!("refusing to bind a property to a null pointer");
            return Err(Error::NullPointer);
        }
        // SAFETY: non-null checked above, the rest is upheld by the caller.
        Ok(unsafe { Self::from_raw(ptr) })
    }

    pub fn from_mut(value: &'a mut T) -> Self {
        Self { value }
    }

    /// The address of the bound object.
    pub fn get(&self) -> *const T {
        &*self.value
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        &mut *self.value
    }

    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Overwrites the bound object with a copy of `*ptr`.
    ///
    /// # Safety
    /// `ptr` must be non-null, aligned and point to an initialised `T` that is
    /// valid for reads. It may point at the bound object itself.
    pub unsafe fn set(&mut self, ptr: *const T) -> &mut Self
    where
        T: Clone,
    {
        debug_assert!(!ptr.is_null(), "assigned a null pointer to a property");
        if ptr::eq(ptr, self.get()) {
            return self;
        }

        trace!("copying {:p}", ptr);
        // SAFETY: upheld by the caller; `ptr` does not alias the bound object.
        let value = unsafe { (*ptr).clone() };
        self.overwrite(value);
        self
    }

    fn overwrite(&mut self, value: T) {
        trace!("writing through to {:p}", self.value);
        *self.value = value;
    }

    /// # Safety
    /// Same as [`PropertyPtr::set`], except that a null `ptr` is reported as
    /// [`Error::NullPointer`] and leaves the bound object untouched.
    pub unsafe fn try_set(&mut self, ptr: *const T) -> Result<&mut Self, Error>
    where
        T: Clone,
    {
        if ptr.is_null() {
            warn!("refusing to assign a null pointer to a property");
            return Err(Error::NullPointer);
        }
        // SAFETY: non-null checked above, the rest is upheld by the caller.
        Ok(unsafe { self.set(ptr) })
    }

    /// Compares the bound object with `*other`.
    ///
    /// # Safety
    /// `other` must be non-null, aligned and point to an initialised `T`.
    pub unsafe fn eq_ptr(&self, other: *const T) -> bool
    where
        T: PartialEq,
    {
        // SAFETY: upheld by the caller.
        let other = unsafe { &*other };
        *self.value == *other
    }

    /// # Safety
    /// Same as [`PropertyPtr::eq_ptr`].
    pub unsafe fn partial_cmp_ptr(&self, other: *const T) -> Option<Ordering>
    where
        T: PartialOrd,
    {
        // SAFETY: upheld by the caller.
        (*self.value).partial_cmp(unsafe { &*other })
    }
}

impl<'a, T> Holder for PropertyPtr<'a, T> {
    type Target = T;

    fn target(&self) -> &T {
        &*self.value
    }

    fn write(&mut self, value: T) {
        self.overwrite(value);
    }
}

impl<'a, T> From<&'a mut T> for PropertyPtr<'a, T> {
    fn from(value: &'a mut T) -> Self {
        Self::from_mut(value)
    }
}

impl<'a, T> AsRef<T> for PropertyPtr<'a, T> {
    fn as_ref(&self) -> &T {
        &*self.value
    }
}

impl<'a, T: PartialEq> PartialEq<T> for PropertyPtr<'a, T> {
    fn eq(&self, other: &T) -> bool {
        *self.value == *other
    }
}

impl<'a, T: PartialOrd> PartialOrd<T> for PropertyPtr<'a, T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        (*self.value).partial_cmp(other)
    }
}

impl<'a, T: fmt::Display> fmt::Display for PropertyPtr<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use std::{cmp::Ordering, ptr};

    use matches::assert_matches;

    use super::PropertyPtr;
    use crate::{Error, Holder};

    #[test]
    fn test_get_returns_bound_address() {
        let mut target = 3;
        let address: *mut i32 = &mut target;

        let property = unsafe { PropertyPtr::from_raw(address) };
        assert!(ptr::eq(property.get(), address));
        assert!(property == 3);
    }

    #[test]
    fn test_set_writes_pointee_through() {
        logger::init_test_logger();

        let mut target = String::from("x");
        let other = String::from("q");
        let address: *mut String = &mut target;
        {
            let mut property = unsafe { PropertyPtr::from_raw(address) };
            unsafe { property.set(&other) };

            assert!(ptr::eq(property.get(), address));
            assert!(!ptr::eq(property.get(), &other));
            assert!(property == other);
        }
        assert_eq!(target, "q");
        assert_eq!(other, "q");
    }

    #[test]
    fn test_holder_write_keeps_binding() {
        logger::init_test_logger();

        let mut target = 1u16;
        let address: *mut u16 = &mut target;
        {
            let mut property = unsafe { PropertyPtr::from_raw(address) };
            property.write(2);

            assert!(ptr::eq(property.get(), address));
            assert!(property.holds(&2));
        }
        assert_eq!(target, 2);
    }

    #[test]
    fn test_self_assignment() {
        let mut target = vec![4, 5];
        let mut property = PropertyPtr::from_mut(&mut target);

        let own = property.as_mut_ptr();
        unsafe { property.set(own) };
        assert!(property == vec![4, 5]);

        let current = property.value();
        unsafe { property.set(&current) };
        assert!(property == vec![4, 5]);
    }

    #[test]
    fn test_null_is_rejected() {
        logger::init_test_logger();

        let result = unsafe { PropertyPtr::<u32>::try_from_raw(ptr::null_mut()) };
        assert_matches!(result, Err(Error::NullPointer));

        let mut target = 8u32;
        let mut property = PropertyPtr::from_mut(&mut target);
        assert_matches!(
            unsafe { property.try_set(ptr::null()) },
            Err(Error::NullPointer)
        );
        assert!(property == 8);

        let replacement = 9u32;
        assert!(unsafe { property.try_set(&replacement) }.is_ok());
        assert!(property == 9);
    }

    #[test]
    fn test_compare_against_pointee() {
        let mut target = 10;
        let property = PropertyPtr::from_mut(&mut target);
        let (lower, same, higher) = (9, 10, 11);

        unsafe {
            assert!(property.eq_ptr(&same));
            assert!(!property.eq_ptr(&lower));
            assert_eq!(property.partial_cmp_ptr(&lower), Some(Ordering::Greater));
            assert_eq!(property.partial_cmp_ptr(&higher), Some(Ordering::Less));
        }
        assert!(property < higher);
        assert_eq!(property.to_string(), "10");
    }
}
