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

use core::ptr;

// A single cell of the chain. `prev` and `next` are null at the head
// and the tail respectively. Every adjacent pair keeps the symmetry
// invariant: if a.next == b then b.prev == a. Nodes never escape the
// linkedlist module; only payload values are observable through the
// public API.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct InternalNode {
    pub(super) val: i64,
    pub(super) prev: *mut InternalNode,
    pub(super) next: *mut InternalNode,
}

impl InternalNode {
    pub(super) fn new(val: i64) -> InternalNode {
        InternalNode {
            val,
            next: ptr::null_mut(),
            prev: ptr::null_mut(),
        }
    }
}
