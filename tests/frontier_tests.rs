use sssp_trace::data_structures::Frontier;

#[test]
fn test_frontier_pops_minimum_first() {
    let mut frontier: Frontier<i64> = Frontier::new();
    frontier.push(1, 10);
    frontier.push(2, 5);
    frontier.push(3, 8);
    assert_eq!(frontier.pop(), Some((2, 5)));
    assert_eq!(frontier.pop(), Some((3, 8)));
    assert_eq!(frontier.pop(), Some((1, 10)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_frontier_keeps_duplicate_entries() {
    // No decrease-key: a second push for the same vertex coexists with the
    // stale one.
    let mut frontier: Frontier<i64> = Frontier::new();
    frontier.push(1, 10);
    frontier.push(1, 2);
    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some((1, 2)));
    assert_eq!(frontier.pop(), Some((1, 10)));
}

#[test]
fn test_frontier_peek_does_not_remove() {
    let mut frontier: Frontier<i64> = Frontier::new();
    assert!(frontier.is_empty());
    frontier.push(4, 7);
    assert_eq!(frontier.peek(), Some((4, 7)));
    assert_eq!(frontier.len(), 1);
    assert_eq!(frontier.pop(), Some((4, 7)));
    assert!(frontier.is_empty());
}
