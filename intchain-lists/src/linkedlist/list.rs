/*
   Integer Linked List: a doubly linked list specialized to integer
   payloads. The list preallocates node storage and doesn't have to
   allocate and deallocate memory on every insert / remove operation

   Copyright 2026 The intchain developers

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::linkedlist::{fl, iter::Iter, iter::IterMut, node::InternalNode};
use core::fmt;
use core::ptr;

/// A doubly linked list over `i64` payloads that owns its nodes and
/// can pre-allocate node storage. Elements can be pushed and popped
/// at either end in constant time; insertion and removal in the
/// middle are keyed by payload value and scan forward from the head.
///
/// Node storage is managed through an internal free list: slots
/// removed from the chain are reused by later insertions, and
/// capacity grows by doubling when the free list runs dry. Capacity
/// is deallocated when the list is dropped.
///
/// Nodes themselves are never exposed; only payload values are
/// observable, through the accessors and the
/// [iterators](#method.iter) that traverse the chain in either
/// direction.
///
/// # Getting Started
///
/// ```text
/// [dependencies]
/// intchain = "0.1.0"
/// ```
///
/// ```
/// use intchain::lists::LinkedList;
///
/// let mut list = LinkedList::with_capacity(10);
/// for i in 0..10 {
///     list.push_tail(i);
/// }
///
/// for e in list.iter() {
///     println!("{}", e);
/// }
/// ```
#[derive(Debug)]
pub struct LinkedList {
    pub(super) head: *mut InternalNode,
    pub(super) tail: *mut InternalNode,
    len: usize,
    fl: fl::FreeList,
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for LinkedList {
    fn default() -> LinkedList {
        LinkedList::new()
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a i64;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut LinkedList {
    type Item = &'a mut i64;
    type IntoIter = IterMut<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Renders the forward sequence in the fixed bracket notation
/// `<LinkedList>{v1, v2, ...}`. Intended for diagnostics and test
/// assertions, not persistence.
///
/// # Examples
/// ```
/// use intchain::lists::LinkedList;
/// let mut list = LinkedList::new();
/// list.push_tail(10);
/// list.push_tail(20);
/// list.push_tail(30);
/// assert_eq!(list.to_string(), "<LinkedList>{10, 20, 30}");
/// ```
impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<LinkedList>{{")?;
        let mut first = true;
        for val in self.iter() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{}", val)?;
        }
        write!(f, "}}")
    }
}

impl LinkedList {
    /// Creates an empty linked list with a default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use intchain::lists::LinkedList;
    /// let list = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> LinkedList {
        LinkedList {
            len: 0,
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            fl: fl::FreeList::new(8),
        }
    }

    /// Creates an empty linked list with the specified capacity. The
    /// list will continue to reallocate additional node storage by
    /// doubling the capacity everytime the capacity is exceeded.
    ///
    /// The list does not deallocate node storage when elements are
    /// removed.
    ///
    /// If the capacity is set to 0, new storage is allocated for one
    /// node everytime an element is added to a full list.
    ///
    /// # Examples
    ///
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::with_capacity(10);
    /// for i in 0..10 {
    ///     // All these are pushed without any allocations
    ///     list.push_head(i);
    /// }
    ///
    /// assert_eq!(list.len(), 10);
    /// assert_eq!(list.capacity(), 10);
    ///
    /// // This will result in an allocation and the capacity will be doubled
    /// list.push_head(1);
    /// assert_eq!(list.len(), 11);
    /// assert_eq!(list.capacity(), 20);
    /// ```
    pub fn with_capacity(capacity: usize) -> LinkedList {
        LinkedList {
            len: 0,
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            fl: fl::FreeList::new(capacity),
        }
    }

    /// Returns a bidirectional iterator over the list, starting at
    /// the head. Every call starts a fresh walk from the current
    /// head.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_tail(1);
    /// list.push_tail(2);
    /// list.push_tail(3);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns a bidirectional iterator over the list, starting at
    /// the tail and following `prev` links. Visits the elements in
    /// exactly the opposite order of [`iter()`](#method.iter) over
    /// the same list state.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_tail(1);
    /// list.push_tail(2);
    /// list.push_tail(3);
    ///
    /// let mut iter = list.iter_reverse();
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter_reverse(&self) -> Iter<'_> {
        Iter::new_reverse(self)
    }

    /// Returns a bidirectional iterator over the list with mutable
    /// references that allows the values to be modified
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_tail(1);
    /// list.push_tail(2);
    /// list.push_tail(3);
    ///
    /// for e in list.iter_mut() {
    ///     *e += 100;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&101));
    /// assert_eq!(iter.next(), Some(&102));
    /// assert_eq!(iter.next(), Some(&103));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self)
    }

    /// Removes all elements from this list. This has no effect on
    /// the allocated capacity of the list.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::with_capacity(10);
    /// list.push_head(1);
    /// list.push_head(2);
    /// list.push_head(3);
    ///
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.capacity(), 10);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        let mut cur: *mut InternalNode = self.head;
        while !cur.is_null() {
            self.pop_ptr(cur);
            cur = self.head;
        }
    }

    /// Returns a reference to the value at the head of the list or
    /// `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.head(), None);
    ///
    /// list.push_head(1);
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    pub fn head(&self) -> Option<&i64> {
        if self.head.is_null() {
            return None;
        }

        unsafe { Some(&(*self.head).val) }
    }

    /// Returns a mutable reference to the value at the head of the
    /// list or `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_head(1);
    /// assert_eq!(list.head(), Some(&1));
    /// match list.head_mut() {
    ///     None => {},
    ///     Some(x) => *x = 5,
    /// }
    /// assert_eq!(list.head(), Some(&5));
    /// ```
    pub fn head_mut(&mut self) -> Option<&mut i64> {
        if self.head.is_null() {
            return None;
        }

        unsafe { Some(&mut (*self.head).val) }
    }

    /// Returns a reference to the value at the tail of the list or
    /// `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.tail(), None);
    ///
    /// list.push_tail(1);
    /// assert_eq!(list.tail(), Some(&1));
    /// ```
    pub fn tail(&self) -> Option<&i64> {
        if self.tail.is_null() {
            return None;
        }

        unsafe { Some(&(*self.tail).val) }
    }

    /// Returns a mutable reference to the value at the tail of the
    /// list or `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_tail(1);
    /// assert_eq!(list.tail(), Some(&1));
    /// match list.tail_mut() {
    ///     None => {},
    ///     Some(x) => *x = 5,
    /// }
    /// assert_eq!(list.tail(), Some(&5));
    /// ```
    pub fn tail_mut(&mut self) -> Option<&mut i64> {
        if self.tail.is_null() {
            return None;
        }
        unsafe { Some(&mut (*self.tail).val) }
    }

    /// Returns true if the list is empty and false otherwise.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list has a head node and false if the
    /// list is empty.
    pub fn has_head(&self) -> bool {
        !self.head.is_null()
    }

    /// Returns true if the list has a tail node and false if the
    /// list is empty.
    pub fn has_tail(&self) -> bool {
        !self.tail.is_null()
    }

    /// Returns true if both the head and the tail of the list are
    /// absent, i.e. the list is empty. The head is absent exactly
    /// when the tail is.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// assert!(list.head_and_tail_none());
    ///
    /// list.push_head(1);
    /// assert!(!list.head_and_tail_none());
    /// ```
    pub fn head_and_tail_none(&self) -> bool {
        self.head.is_null() && self.tail.is_null()
    }

    /// Returns true if both the head and the tail of the list are
    /// present, i.e. the list holds at least one element.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// assert!(!list.head_and_tail_some());
    ///
    /// list.push_tail(1);
    /// assert!(list.head_and_tail_some());
    /// ```
    pub fn head_and_tail_some(&self) -> bool {
        !self.head.is_null() && !self.tail.is_null()
    }

    /// Returns the number of elements the list can hold before new
    /// node storage is allocated.
    pub fn capacity(&self) -> usize {
        self.len() + self.fl.len()
    }

    /// Returns the number of elements in the list
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.push_head(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an element to the head (front) of the list. If the list
    /// was empty the new node becomes the tail as well. This
    /// operation always succeeds.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_head(1);
    /// assert_eq!(list.head(), Some(&1));
    ///
    /// list.push_head(2);
    /// assert_eq!(list.head(), Some(&2));
    /// assert_eq!(list.tail(), Some(&1));
    /// ```
    pub fn push_head(&mut self, elem: i64) {
        let raw_n = self.fl.acquire(elem);

        unsafe {
            if self.head.is_null() {
                (*raw_n).next = ptr::null_mut();
            } else {
                (*self.head).prev = raw_n;
                (*raw_n).next = self.head;
            }

            if self.tail.is_null() {
                self.tail = raw_n;
            }
            self.head = raw_n;
        }

        self.len += 1;
    }

    /// Adds an element to the tail (back) of the list. If the list
    /// was empty the new node becomes the head as well. This
    /// operation always succeeds.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_tail(1);
    /// assert_eq!(list.tail(), Some(&1));
    ///
    /// list.push_tail(2);
    /// assert_eq!(list.tail(), Some(&2));
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    pub fn push_tail(&mut self, elem: i64) {
        let raw_n = self.fl.acquire(elem);

        unsafe {
            if self.tail.is_null() {
                (*raw_n).prev = ptr::null_mut();
            } else {
                (*self.tail).next = raw_n;
                (*raw_n).prev = self.tail;
            }
            if self.head.is_null() {
                self.head = raw_n;
            }
            self.tail = raw_n;
        }
        self.len += 1;
    }

    /// Removes and returns the value at the head (front) of the list
    /// or None if the list is empty. Popping an empty list is a
    /// no-op, not an error.
    ///
    /// This operation should complete in *O*(*1*) time
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.pop_head(), None);
    ///
    /// list.push_head(1);
    /// list.push_head(2);
    /// assert_eq!(list.pop_head(), Some(2));
    /// assert_eq!(list.pop_head(), Some(1));
    /// assert_eq!(list.pop_head(), None);
    /// ```
    pub fn pop_head(&mut self) -> Option<i64> {
        if self.head.is_null() {
            return None;
        }
        Some(self.pop_ptr(self.head))
    }

    /// Removes and returns the value at the tail (back) of the list
    /// or None if the list is empty. Popping an empty list is a
    /// no-op, not an error.
    ///
    /// This operation should complete in *O*(*1*) time
    ///
    /// # Examples
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.pop_tail(), None);
    ///
    /// list.push_tail(1);
    /// list.push_tail(2);
    /// assert_eq!(list.pop_tail(), Some(2));
    /// assert_eq!(list.pop_tail(), Some(1));
    /// assert_eq!(list.pop_tail(), None);
    /// ```
    pub fn pop_tail(&mut self) -> Option<i64> {
        if self.tail.is_null() {
            return None;
        }

        Some(self.pop_ptr(self.tail))
    }

    /// Returns `true` if the list contains an element equal to the
    /// given value.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    ///
    /// list.push_tail(0);
    /// list.push_tail(1);
    /// list.push_tail(2);
    ///
    /// assert_eq!(list.contains(0), true);
    /// assert_eq!(list.contains(10), false);
    /// ```
    pub fn contains(&self, x: i64) -> bool {
        self.iter().any(|e| *e == x)
    }

    /// Inserts `new_elem` immediately after the first node (in
    /// forward order) whose payload equals `elem`. If the match is
    /// the tail, this behaves exactly like
    /// [`push_tail`](#method.push_tail). If no node matches, the
    /// list is unchanged; the miss is a silent no-op, so callers
    /// that need to distinguish "inserted" from "no match" should
    /// check [`contains`](#method.contains) first.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_tail(10);
    /// list.push_tail(20);
    /// list.push_tail(30);
    ///
    /// list.push_after(20, 25);
    /// assert_eq!(list.to_string(), "<LinkedList>{10, 20, 25, 30}");
    ///
    /// // a missing value leaves the list unchanged
    /// list.push_after(99, 1);
    /// assert_eq!(list.to_string(), "<LinkedList>{10, 20, 25, 30}");
    /// ```
    pub fn push_after(&mut self, elem: i64, new_elem: i64) {
        let mut cur = self.head;
        unsafe {
            while !cur.is_null() {
                if (*cur).val == elem {
                    if cur == self.tail {
                        self.push_tail(new_elem);
                    } else {
                        let raw_n = self.fl.acquire(new_elem);
                        (*(*cur).next).prev = raw_n;
                        (*raw_n).next = (*cur).next;
                        (*cur).next = raw_n;
                        (*raw_n).prev = cur;
                        self.len += 1;
                    }
                    // insert after the first match only
                    return;
                }
                cur = (*cur).next;
            }
        }
    }

    /// Removes the first node (in forward order) whose payload
    /// equals `elem`. Head and tail matches degenerate to the pop
    /// operations; an interior match is spliced out by linking its
    /// neighbors to each other. If no node matches, the list is
    /// unchanged (silent no-op).
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_tail(10);
    /// list.push_tail(20);
    /// list.push_tail(10);
    ///
    /// // only the earliest occurrence is removed
    /// list.remove(10);
    /// assert_eq!(list.to_string(), "<LinkedList>{20, 10}");
    ///
    /// list.remove(99);
    /// assert_eq!(list.to_string(), "<LinkedList>{20, 10}");
    /// ```
    pub fn remove(&mut self, elem: i64) {
        let mut cur = self.head;
        unsafe {
            while !cur.is_null() {
                if (*cur).val == elem {
                    self.pop_ptr(cur);
                    return;
                }
                cur = (*cur).next;
            }
        }
    }

    /// Rewrites the payload of every node equal to `old_elem` with
    /// `new_elem` in a single forward pass. Unlike
    /// [`remove`](#method.remove) and
    /// [`push_after`](#method.push_after) this is exhaustive, not
    /// first-match-only. If no node matches, the list is unchanged.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use intchain::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_tail(10);
    /// list.push_tail(20);
    /// list.push_tail(10);
    /// list.push_tail(30);
    ///
    /// list.replace(10, 99);
    /// assert_eq!(list.to_string(), "<LinkedList>{99, 20, 99, 30}");
    /// ```
    pub fn replace(&mut self, old_elem: i64, new_elem: i64) {
        for val in self.iter_mut() {
            if *val == old_elem {
                *val = new_elem;
            }
        }
    }

    ////////////////////
    //Private Helpers
    ////////////////////

    /// Removes and returns the value pointed to by the specified raw
    /// pointer, relinking both neighbors and the head/tail entry
    /// points. This method will panic if the specified pointer is
    /// null. The node slot is returned to the free list.
    fn pop_ptr(&mut self, ptr: *mut InternalNode) -> i64 {
        if ptr.is_null() {
            panic!("cannot pop null pointer");
        }

        unsafe {
            if !(*ptr).next.is_null() {
                (*(*ptr).next).prev = (*ptr).prev;
            }

            if !(*ptr).prev.is_null() {
                (*(*ptr).prev).next = (*ptr).next;
            }

            if self.head == ptr {
                self.head = (*ptr).next;
            }

            if self.tail == ptr {
                self.tail = (*ptr).prev;
            }
            self.len -= 1;
            self.fl.release(ptr)
        }
    }
}
