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

//! A doubly linked list specialized to `i64` payloads.

pub mod linkedlist;
