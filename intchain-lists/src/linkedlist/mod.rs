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

//! A doubly linked list that owns its nodes and can pre-allocate node
//! storage. The list allows pushing and popping elements at either
//! end in constant time, positional insertion and removal keyed by
//! payload value, and lazy traversal in both directions.
//!
//! The payload is always an `i64`; the structure is not generic over
//! the element type.
//!
pub mod fl;
pub mod iter;
pub mod list;
pub mod node;
