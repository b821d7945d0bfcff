use intchain::lists::LinkedList;

#[test]
fn tail_inserts_round_trip() {
    let mut list = LinkedList::new();
    list.push_tail(10);
    list.push_tail(20);
    list.push_tail(30);
    let fwd: Vec<i64> = list.iter().copied().collect();
    let rev: Vec<i64> = list.iter_reverse().copied().collect();
    assert_eq!(fwd, vec![10, 20, 30]);
    assert_eq!(rev, vec![30, 20, 10]);
}

#[test]
fn head_inserts_reverse_insertion_order() {
    let mut list = LinkedList::new();
    list.push_head(5);
    list.push_head(3);
    list.push_head(1);
    let fwd: Vec<i64> = list.iter().copied().collect();
    assert_eq!(fwd, vec![1, 3, 5]);
}

#[test]
fn push_after_splices_behind_first_match() {
    let mut list = LinkedList::new();
    list.push_tail(10);
    list.push_tail(20);
    list.push_tail(30);
    list.push_after(20, 25);
    assert_eq!(list.to_string(), "<LinkedList>{10, 20, 25, 30}");
}

#[test]
fn remove_deletes_first_match() {
    let mut list = LinkedList::new();
    list.push_tail(10);
    list.push_tail(20);
    list.push_tail(30);
    list.remove(20);
    assert_eq!(list.to_string(), "<LinkedList>{10, 30}");
}

#[test]
fn replace_rewrites_every_occurrence() {
    let mut list = LinkedList::new();
    list.push_tail(10);
    list.push_tail(20);
    list.push_tail(10);
    list.push_tail(30);
    list.replace(10, 99);
    assert_eq!(list.to_string(), "<LinkedList>{99, 20, 99, 30}");
}

#[test]
fn pop_on_empty_list_is_a_noop() {
    let mut list = LinkedList::new();
    assert_eq!(list.pop_head(), None);
    assert!(list.head_and_tail_none());
    assert!(!list.head_and_tail_some());

    list.push_tail(1);
    assert!(!list.head_and_tail_none());
    assert!(list.head_and_tail_some());
}
