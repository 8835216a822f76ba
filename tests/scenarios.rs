use keyed_pq::{Error, KeyedPriorityQueue, Options};

#[test]
fn s1_fifo_among_equals() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 1.0, ()).unwrap();
    pq.add("b", 1.0, ()).unwrap();
    pq.add("c", 1.0, ()).unwrap();

    assert_eq!(pq.pop().unwrap().0, "a");
    assert_eq!(pq.pop().unwrap().0, "b");
    assert_eq!(pq.pop().unwrap().0, "c");
}

#[test]
fn s2_change_value_demotion() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 1.0, ()).unwrap();
    pq.add("b", 2.0, ()).unwrap();
    pq.change_value_by_key(&"a", 5.0).unwrap();

    assert_eq!(pq.pop().unwrap().0, "b");
    assert_eq!(pq.pop().unwrap().0, "a");
}

#[test]
fn s3_change_to_infinity_min_heap() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 3.0, ()).unwrap();
    pq.add("b", 3000.0, ()).unwrap();
    pq.change_value_by_key(&"a", f64::INFINITY).unwrap();

    assert_eq!(pq.pop().unwrap().0, "b");
    assert_eq!(pq.pop().unwrap().0, "a");
}

#[test]
fn s4_delete_then_readd() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 1.0, ()).unwrap();
    pq.add("b", 2.0, ()).unwrap();
    pq.delete_by_key(&"a").unwrap();
    pq.add("a", 10.0, ()).unwrap();

    assert_eq!(pq.pop().unwrap().0, "b");
    assert_eq!(pq.pop().unwrap().0, "a");
}

#[test]
fn s5_bulk_build() {
    let entries = [
        ("0", 0.9, ()),
        ("1", 0.1, ()),
        ("2", 0.5, ()),
    ];
    let mut pq = KeyedPriorityQueue::try_from_entries(entries, keyed_pq::Polarity::Min).unwrap();
    assert!(pq.verify_invariants());

    assert_eq!(pq.pop().unwrap().0, "1");
    assert_eq!(pq.pop().unwrap().0, "2");
    assert_eq!(pq.pop().unwrap().0, "0");
}

#[test]
fn s6_max_heap_polarity() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new_max();
    pq.add("a", 1.0, ()).unwrap();
    pq.add("b", 5.0, ()).unwrap();
    pq.add("c", 3.0, ()).unwrap();

    assert_eq!(pq.pop().unwrap().0, "b");
    assert_eq!(pq.pop().unwrap().0, "c");
    assert_eq!(pq.pop().unwrap().0, "a");
}

#[test]
fn empty_heap_peek_and_pop_fail_with_empty() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    assert_eq!(pq.peek().unwrap_err(), Error::Empty);
    assert_eq!(pq.pop().unwrap_err(), Error::Empty);
}

#[test]
fn single_element_add_pop_and_delete() {
    let mut pq: KeyedPriorityQueue<&str, i32> = KeyedPriorityQueue::new();
    pq.add("only", 1.0, 42).unwrap();
    assert_eq!(pq.pop().unwrap(), ("only", 1.0, 42));

    pq.add("only", 1.0, 42).unwrap();
    pq.delete_by_key(&"only").unwrap();
    assert!(pq.is_empty());
    assert!(!pq.contains(&"only"));
}

#[test]
fn infinite_priorities_order_correctly() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", f64::NEG_INFINITY, ()).unwrap();
    pq.add("b", 0.0, ()).unwrap();
    pq.add("c", f64::INFINITY, ()).unwrap();

    assert_eq!(pq.pop().unwrap().0, "a");
    assert_eq!(pq.pop().unwrap().0, "b");
    assert_eq!(pq.pop().unwrap().0, "c");
}

#[test]
fn nan_priority_is_rejected_without_mutation() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 1.0, ()).unwrap();

    assert_eq!(
        pq.add("b", f64::NAN, ()).unwrap_err(),
        Error::InvalidValue
    );
    assert_eq!(pq.len(), 1);
    assert!(!pq.contains(&"b"));

    assert_eq!(
        pq.change_value_by_key(&"a", f64::NAN).unwrap_err(),
        Error::InvalidValue
    );
    assert_eq!(pq.get(&"a").unwrap().value(), 1.0);
}

#[test]
fn equal_values_pop_in_change_order() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 1.0, ()).unwrap();
    pq.add("b", 1.0, ()).unwrap();
    pq.change_value_by_key(&"a", 1.0).unwrap(); // same value, newer change_index

    assert_eq!(pq.pop().unwrap().0, "b");
    assert_eq!(pq.pop().unwrap().0, "a");
}

#[test]
fn duplicate_key_is_rejected() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 1.0, ()).unwrap();
    assert_eq!(pq.add("a", 2.0, ()).unwrap_err(), Error::DuplicateKey);
}

#[test]
fn unknown_key_is_rejected() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    assert_eq!(
        pq.change_value_by_key(&"missing", 1.0).unwrap_err(),
        Error::UnknownKey
    );
    assert_eq!(pq.delete_by_key(&"missing").unwrap_err(), Error::UnknownKey);
}

#[test]
fn handle_becomes_stale_after_removal() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    let handle = pq.add("a", 1.0, ()).unwrap();
    pq.pop().unwrap();

    assert!(pq.get_by_handle(handle).is_none());
    assert_eq!(
        pq.change_value_by_handle(handle, 2.0).unwrap_err(),
        Error::StaleHandle
    );
}

#[test]
fn handle_from_another_heap_is_stale() {
    let mut a: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    let b: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    let handle = a.add("x", 1.0, ()).unwrap();

    assert!(b.get_by_handle(handle).is_none());
}

#[test]
fn default_handle_is_always_stale() {
    let pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    let handle = keyed_pq::Handle::default();
    assert!(pq.get_by_handle(handle).is_none());
}

#[test]
fn options_builder_constructs_configured_heap() {
    let pq: KeyedPriorityQueue<&str, ()> = Options::new()
        .max_heap(true)
        .capacity(16)
        .initial_entries([("a", 1.0, ()), ("b", 5.0, ()), ("c", 3.0, ())])
        .build()
        .unwrap();

    assert_eq!(pq.polarity(), keyed_pq::Polarity::Max);
    assert_eq!(pq.len(), 3);
    assert!(pq.verify_invariants());
}

#[test]
fn iter_ordered_does_not_mutate_the_heap() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 3.0, ()).unwrap();
    pq.add("b", 1.0, ()).unwrap();
    pq.add("c", 2.0, ()).unwrap();

    let ordered: Vec<_> = pq.iter_ordered().map(|(k, _, _)| k).collect();
    assert_eq!(ordered, ["b", "c", "a"]);
    assert_eq!(pq.len(), 3);
}

#[test]
fn iter_unordered_yields_every_live_key_in_heap_array_order_without_consuming() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 3.0, ()).unwrap();
    pq.add("b", 1.0, ()).unwrap();
    pq.add("c", 2.0, ()).unwrap();

    let values: Vec<f64> = pq.iter_unordered().map(|item| item.value()).collect();
    assert_eq!(values, pq.export_values());

    let mut keys: Vec<_> = pq.iter_unordered().map(|item| *item.key()).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["a", "b", "c"]);

    assert_eq!(pq.len(), 3);
    assert!(pq.verify_invariants());
}

#[test]
fn drain_yields_in_priority_order_and_empties_the_heap() {
    let mut pq: KeyedPriorityQueue<&str, ()> = KeyedPriorityQueue::new();
    pq.add("a", 3.0, ()).unwrap();
    pq.add("b", 1.0, ()).unwrap();
    pq.add("c", 2.0, ()).unwrap();

    let drained: Vec<_> = pq.drain().map(|(k, _, _)| k).collect();
    assert_eq!(drained, ["b", "c", "a"]);
    assert!(pq.is_empty());
}
