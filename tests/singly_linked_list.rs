use dfs_graph::{Comparator, Node, SinglyLinkedList};

fn list_with_head(head: &str) -> SinglyLinkedList<String> {
    SinglyLinkedList::with_head(Comparator::by_value(), head.to_string())
}

fn next_data(node: Option<&Node<String>>) -> Option<&str> {
    node.and_then(Node::next).map(|n| n.data().as_str())
}

#[test]
fn test_new_list_has_head_set() {
    let list = list_with_head("bar");
    assert_eq!(list.head().map(|n| n.data().as_str()), Some("bar"));
}

#[test]
fn test_append_on_list_with_head() {
    let mut list = list_with_head("foo");
    list.append("bar".into());
    assert_eq!(next_data(list.head()), Some("bar"));
}

#[test]
fn test_append_multiple_values() {
    let mut list = list_with_head("foo");
    list.append("bar".into());
    list.append("baz".into());
    assert_eq!(next_data(list.head()), Some("bar"));
    assert_eq!(next_data(list.head().and_then(Node::next)), Some("baz"));
}

#[test]
fn test_comparator_distinguishes_strings() {
    let list = list_with_head("bar");
    let head = list.head().unwrap().data();
    assert!(!list.equality_comparator().eq(&"foo".to_string(), head));
    assert!(list.equality_comparator().eq(&"bar".to_string(), head));
}

#[test]
fn test_delete_resets_chain() {
    let mut list = list_with_head("foo");
    list.append("bar".into());
    list.append("baz".into());
    list.delete(&"bar".to_string());
    assert_eq!(next_data(list.head()), Some("baz"));
}

#[test]
fn test_delete_unknown_keeps_chain() {
    let mut list = list_with_head("foo");
    list.append("bar".into());
    list.append("baz".into());
    list.delete(&"test".to_string());
    assert_eq!(next_data(list.head().and_then(Node::next)), Some("baz"));
    let all: Vec<&str> = list.iter().map(String::as_str).collect();
    assert_eq!(all, ["foo", "bar", "baz"]);
}

#[test]
fn test_delete_head_updates_head() {
    let mut list = list_with_head("foo");
    list.append("bar".into());
    list.append("baz".into());
    list.delete(&"foo".to_string());
    assert_eq!(list.head().map(|n| n.data().as_str()), Some("bar"));
    assert_eq!(next_data(list.head()), Some("baz"));
}

#[test]
fn test_delete_sole_head_empties_list() {
    let mut list = list_with_head("foo");
    list.delete(&"foo".to_string());
    assert!(list.head().is_none());
}

#[test]
fn test_search_missing_returns_none() {
    let mut list = list_with_head("foo");
    list.append("bar".into());
    list.append("baz".into());
    assert!(list.search(&"test".to_string()).is_none());
}

#[test]
fn test_search_existing_returns_node() {
    let mut list = list_with_head("foo");
    list.append("bar".into());
    list.append("baz".into());
    let node = list.search(&"bar".to_string()).unwrap();
    assert_eq!(node.data(), "bar");
    assert_eq!(node.next().map(|n| n.data().as_str()), Some("baz"));
}

#[test]
fn test_identity_comparator_on_shared_values() {
    use std::sync::Arc;

    let a = Arc::new(String::from("same"));
    let b = Arc::new(String::from("same"));
    let mut list = SinglyLinkedList::new(Comparator::new(|x: &Arc<String>, y: &Arc<String>| {
        Arc::ptr_eq(x, y)
    }));
    list.append(Arc::clone(&a));

    assert!(list.search(&a).is_some());
    assert!(list.search(&b).is_none());
    assert!(list.delete(&b).is_none());
    assert_eq!(list.len(), 1);
}

#[test]
fn test_serializes_as_sequence() {
    let list: SinglyLinkedList<u8> = [3, 1, 4].into_iter().collect();
    assert_eq!(serde_json::to_string(&list).unwrap(), "[3,1,4]");
}
