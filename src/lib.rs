//! An integer doubly linked list with preallocated node storage,
//! value-keyed mutation and bidirectional traversal.

/// The doubly linked list and the structs that support it
pub mod lists {
    pub use intchain_lists::linkedlist::list::LinkedList;
    /// This module contains structs specific to the [`LinkedList`]
    pub mod linkedlist {
        pub use intchain_lists::linkedlist::iter::Iter;
        pub use intchain_lists::linkedlist::iter::IterMut;
    }
}
