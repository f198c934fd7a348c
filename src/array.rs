//! Array container operations.
//!
//! These are thin wrappers around `Vec<Value>` that give the crate's
//! public surface the same named operations the spec describes
//! (`reserve`, `shrink`, `push`/`pop`/`insert`/`erase`, `clear`), even
//! though `Vec` already implements the underlying growth and shift
//! behavior. Every method panics if `self` is not [`Value::Array`],
//! matching "wrong tag on an accessor is a contract violation."

use alloc::vec::Vec;

use crate::value::Value;

impl Value {
    /// Grows the array's backing storage to hold at least `capacity`
    /// elements without reallocating. A no-op if already at or above
    /// `capacity`.
    pub fn reserve_array(&mut self, capacity: usize) {
        let items = self.as_array_mut();
        if capacity > items.capacity() {
            // `Vec::reserve`'s `additional` is relative to `len()`, not
            // `capacity()` — reserving `capacity - capacity()` would
            // undershoot `capacity` whenever `len() < capacity()`.
            items.reserve_exact(capacity - items.len());
        }
    }

    /// Shrinks the array's backing storage as close to its current
    /// number of elements as the allocator allows.
    ///
    /// `Vec::shrink_to_fit` is only documented to drop "as close as
    /// possible" to `len()`, not to guarantee `capacity() == len()`
    /// exactly, so this is a best-effort approximation of the spec's
    /// "reallocate to exactly `size` slots."
    pub fn shrink_array(&mut self) {
        self.as_array_mut().shrink_to_fit();
    }

    /// Appends a new [`Value::Null`] element and returns a handle to it.
    ///
    /// The returned `&mut Value` is only valid until the next mutation of
    /// this array; the borrow checker enforces that statically.
    pub fn push_array_element(&mut self) -> &mut Value {
        let items = self.as_array_mut();
        items.push(Value::Null);
        items.last_mut().expect("just pushed an element")
    }

    /// Removes and drops the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_array_element(&mut self) {
        let items = self.as_array_mut();
        assert!(items.pop().is_some(), "pop_array_element: array is empty");
    }

    /// Inserts a new [`Value::Null`] at `index`, shifting later elements
    /// up by one, and returns a handle to the new slot.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_array_element(&mut self, index: usize) -> &mut Value {
        let items = self.as_array_mut();
        items.insert(index, Value::Null);
        &mut items[index]
    }

    /// Removes `count` elements starting at `index`, dropping them and
    /// shifting later elements down.
    ///
    /// # Panics
    ///
    /// Panics if `index + count > len()`.
    pub fn erase_array_elements(&mut self, index: usize, count: usize) {
        let items = self.as_array_mut();
        assert!(
            index + count <= items.len(),
            "erase_array_elements: out of bounds"
        );
        items.drain(index..index + count);
    }

    /// Removes and drops every element, retaining the current capacity.
    pub fn clear_array(&mut self) {
        self.as_array_mut().clear();
    }

    /// Returns the number of live elements.
    pub fn array_len(&self) -> usize {
        self.as_array().len()
    }

    /// Returns the number of elements the array can hold before it must
    /// reallocate.
    pub fn array_capacity(&self) -> usize {
        // `as_array` only hands back a shared slice, which can't answer
        // this; go through the mutable accessor read-only via a local
        // Vec reference is unnecessary — match directly instead.
        match self {
            Value::Array(items) => items.capacity(),
            other => panic!("array_capacity: value is not an Array ({other:?})"),
        }
    }

    /// Returns the element at `index`, if any.
    pub fn get_array_element(&self, index: usize) -> Option<&Value> {
        self.as_array().get(index)
    }

    /// Returns a mutable reference to the element at `index`, if any.
    pub fn get_array_element_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.as_array_mut().get_mut(index)
    }
}

pub(crate) fn finish(staged: Vec<Value>) -> Value {
    let mut items = staged;
    items.shrink_to_fit();
    Value::Array(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn pushback_grows_and_returns_a_handle() {
        let mut v = Value::Array(Vec::new());
        *v.push_array_element() = Value::Number(1.0);
        *v.push_array_element() = Value::Number(2.0);
        assert_eq!(v.array_len(), 2);
        assert_eq!(v.get_array_element(0), Some(&Value::Number(1.0)));
    }

    #[test]
    fn popback_removes_the_last_element() {
        let mut v = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
        v.pop_array_element();
        assert_eq!(v.array_len(), 1);
        assert_eq!(v.get_array_element(0), Some(&Value::Number(1.0)));
    }

    #[test]
    fn insert_shifts_later_elements_up() {
        let mut v = Value::Array(vec![Value::Number(1.0), Value::Number(3.0)]);
        *v.insert_array_element(1) = Value::Number(2.0);
        assert_eq!(
            v.as_array(),
            &[Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]
        );
    }

    #[test]
    fn erase_zero_elements_leaves_the_array_unchanged() {
        let mut v = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
        v.erase_array_elements(1, 0);
        assert_eq!(v.array_len(), 2);
    }

    #[test]
    fn erase_drops_and_shifts_down() {
        let mut v = Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ]);
        v.erase_array_elements(0, 2);
        assert_eq!(v.as_array(), &[Value::Number(3.0)]);
    }

    #[test]
    fn clear_drops_elements_but_keeps_capacity() {
        let mut v = Value::Array(Vec::with_capacity(8));
        *v.push_array_element() = Value::Number(1.0);
        let cap_before = v.array_capacity();
        v.clear_array();
        assert_eq!(v.array_len(), 0);
        assert_eq!(v.array_capacity(), cap_before);
    }

    #[test]
    fn reserve_is_a_no_op_when_already_big_enough() {
        let mut v = Value::Array(Vec::with_capacity(16));
        v.reserve_array(4);
        assert!(v.array_capacity() >= 16);
    }

    #[test]
    fn reserve_reaches_the_requested_capacity_when_len_is_below_capacity() {
        let mut v = Value::default();
        v.set_array(5);
        v.reserve_array(20);
        assert!(v.array_capacity() >= 20);
    }
}
