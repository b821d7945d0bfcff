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
use crate::linkedlist::{list::LinkedList, node::InternalNode};

#[derive(Debug)]
enum IterDirection {
    HeadToTail,
    TailToHead,
}

/// A bidirectional iterator over the values of the
/// [`LinkedList`](LinkedList).
///
/// This struct is created by the [`.iter()`](LinkedList#method.iter)
/// and [`.iter_reverse()`](LinkedList#method.iter_reverse) methods of
/// the [`LinkedList`](LinkedList). The cursor is private to the list;
/// it borrows the list for its entire lifetime, so the chain cannot
/// be mutated while an iterator is live.
///
/// # Examples
/// ```
/// use intchain::lists::LinkedList;
/// use intchain::lists::linkedlist::Iter;
///
/// let mut list = LinkedList::new();
/// list.push_head(1);
/// list.push_head(2);
/// list.push_head(3);
/// list.push_head(4);
/// list.push_head(5);
///
/// let mut iter: Iter = list.iter();
/// assert_eq!(iter.next(), Some(&5));
/// assert_eq!(iter.next(), Some(&4));
/// assert_eq!(iter.next(), Some(&3));
/// iter = iter.reverse();
/// assert_eq!(iter.next(), Some(&4));
/// assert_eq!(iter.next(), Some(&5));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a> {
    list: &'a LinkedList,
    cursor: *mut InternalNode,
    dir: IterDirection,
}

/// A bidirectional iterator over the values of the [`LinkedList`]
/// with mutable references that allow the values to be modified.
///
/// This struct is created by the
/// [`.iter_mut()`](LinkedList#method.iter_mut) method of the
/// [`LinkedList`](LinkedList).
///
/// # Examples
/// ```
/// use intchain::lists::LinkedList;
/// use intchain::lists::linkedlist::IterMut;
/// use intchain::lists::linkedlist::Iter;
///
/// let mut list = LinkedList::new();
/// list.push_head(1);
/// list.push_head(2);
/// list.push_head(3);
///
/// let iter_mut: IterMut = list.iter_mut();
/// for e in iter_mut {
///     *e += 100;
/// }
///
/// let mut iter: Iter = list.iter();
/// assert_eq!(iter.next(), Some(&103));
/// assert_eq!(iter.next(), Some(&102));
/// assert_eq!(iter.next(), Some(&101));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct IterMut<'a> {
    list: &'a mut LinkedList,
    cursor: *mut InternalNode,
    dir: IterDirection,
}

macro_rules! iter_reverse {
    ($self: ident) => {
        /// Reverses the direction of the iterator
        pub fn reverse(mut $self) -> Self {
            if $self.cursor.is_null() {
                match $self.dir {
                    IterDirection::HeadToTail => {
                        $self.dir = IterDirection::TailToHead;
                        $self.cursor = $self.list.tail;
                    }
                    IterDirection::TailToHead => {
                        $self.dir = IterDirection::HeadToTail;
                        $self.cursor = $self.list.head;
                    }
                }
            } else {
                unsafe {
                    match $self.dir {
                        IterDirection::HeadToTail => {
                            if $self.cursor == $self.list.head {
                                $self.cursor = $self.list.tail;
                            } else {
                                $self.cursor = (*$self.cursor).prev;
                                if !$self.cursor.is_null() {
                                    $self.cursor = (*$self.cursor).prev;
                                }
                            }
                            $self.dir = IterDirection::TailToHead;
                        }
                        IterDirection::TailToHead => {
                            if $self.cursor == $self.list.tail {
                                $self.cursor = $self.list.head;
                            } else {
                                $self.cursor = (*$self.cursor).next;
                                if !$self.cursor.is_null() {
                                    $self.cursor = (*$self.cursor).next;
                                }
                            }
                            $self.dir = IterDirection::HeadToTail;
                        }
                    }
                }
            }
            $self
        }
    };
}

impl<'a> Iter<'a> {
    pub(crate) fn new(list: &'a LinkedList) -> Iter<'a> {
        Iter {
            list,
            cursor: list.head,
            dir: IterDirection::HeadToTail,
        }
    }

    pub(crate) fn new_reverse(list: &'a LinkedList) -> Iter<'a> {
        Iter {
            list,
            cursor: list.tail,
            dir: IterDirection::TailToHead,
        }
    }

    iter_reverse!(self);
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(list: &'a mut LinkedList) -> IterMut<'a> {
        IterMut {
            cursor: list.head,
            list,
            dir: IterDirection::HeadToTail,
        }
    }

    iter_reverse!(self);
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i64;
    fn next(&mut self) -> Option<&'a i64> {
        if self.cursor.is_null() {
            return None;
        }
        let node_ptr = self.cursor;
        unsafe {
            match self.dir {
                IterDirection::HeadToTail => {
                    self.cursor = (*node_ptr).next;
                }
                IterDirection::TailToHead => {
                    self.cursor = (*node_ptr).prev;
                }
            }
            Some(&(*node_ptr).val)
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut i64;
    fn next(&mut self) -> Option<&'a mut i64> {
        if self.cursor.is_null() {
            return None;
        }
        let node_ptr = self.cursor;
        unsafe {
            match self.dir {
                IterDirection::HeadToTail => {
                    self.cursor = (*node_ptr).next;
                }
                IterDirection::TailToHead => {
                    self.cursor = (*node_ptr).prev;
                }
            }
            Some(&mut (*node_ptr).val)
        }
    }
}
