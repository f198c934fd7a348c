//! Object container operations.
//!
//! Objects are a `Vec<Member>`, not a hash map, because the spec requires
//! insertion-order iteration and "first match wins" lookup — properties a
//! hash map can't give for free. Every method panics if `self` is not
//! [`Value::Object`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::value::{Member, Value};

impl Value {
    /// Grows the object's backing storage to hold at least `capacity`
    /// members without reallocating.
    pub fn reserve_object(&mut self, capacity: usize) {
        let members = self.as_object_mut();
        if capacity > members.capacity() {
            // `Vec::reserve`'s `additional` is relative to `len()`, not
            // `capacity()` — reserving `capacity - capacity()` would
            // undershoot `capacity` whenever `len() < capacity()`.
            members.reserve_exact(capacity - members.len());
        }
    }

    /// Shrinks the object's backing storage as close to its current
    /// number of members as the allocator allows.
    ///
    /// `Vec::shrink_to_fit` is only documented to drop "as close as
    /// possible" to `len()`, not to guarantee `capacity() == len()`
    /// exactly, so this is a best-effort approximation of the spec's
    /// "reallocate to exactly `size` slots."
    pub fn shrink_object(&mut self) {
        self.as_object_mut().shrink_to_fit();
    }

    /// Removes and drops every member, retaining the current capacity.
    pub fn clear_object(&mut self) {
        self.as_object_mut().clear();
    }

    /// Returns the number of live members.
    pub fn object_len(&self) -> usize {
        self.as_object().len()
    }

    /// Returns the number of members the object can hold before it must
    /// reallocate.
    pub fn object_capacity(&self) -> usize {
        match self {
            Value::Object(members) => members.capacity(),
            other => panic!("object_capacity: value is not an Object ({other:?})"),
        }
    }

    /// Returns the index of the first member with key `key`, if any.
    pub fn find_object_index(&self, key: &str) -> Option<usize> {
        self.as_object().iter().position(|m| m.key == key)
    }

    /// Returns the value of the first member with key `key`, if any.
    pub fn find_object_value(&self, key: &str) -> Option<&Value> {
        self.as_object()
            .iter()
            .find(|m| m.key == key)
            .map(|m| &m.value)
    }

    /// Returns a mutable reference to the value of the first member with
    /// key `key`, if any.
    pub fn find_object_value_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut()
            .iter_mut()
            .find(|m| m.key == key)
            .map(|m| &mut m.value)
    }

    /// Returns a handle to the value of the member with key `key`,
    /// creating an empty `Null`-valued member for `key` first if none
    /// exists yet.
    pub fn set_object_value<S: Into<String>>(&mut self, key: S) -> &mut Value {
        let key = key.into();
        let members = self.as_object_mut();
        let index = match members.iter().position(|m| m.key == key) {
            Some(index) => index,
            None => {
                members.push(Member::new(key, Value::Null));
                members.len() - 1
            }
        };
        &mut members[index].value
    }

    /// Removes and drops the member at `index`, shifting later members
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_object_value(&mut self, index: usize) {
        self.as_object_mut().remove(index);
    }
}

pub(crate) fn finish(staged: Vec<Member>) -> Value {
    let mut members = staged;
    members.shrink_to_fit();
    Value::Object(members)
}
