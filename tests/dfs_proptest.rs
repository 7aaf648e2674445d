use dfs_graph::{Comparator, Graph, SinglyLinkedList};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs as PetDfs;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n), 0..n * 3);
        (Just(n), edges)
    })
}

#[derive(Debug, Clone)]
enum Operation {
    Append(u8),
    Delete(u8),
}

proptest! {
    #[test]
    fn dfs_matches_petgraph_reachability((n, edges) in graph_strategy(), start in 0usize..24) {
        let mut graph = Graph::<usize>::new(n).unwrap();
        let mut oracle = DiGraph::<(), ()>::new();
        let nodes: Vec<NodeIndex> = (0..n).map(|_| oracle.add_node(())).collect();
        for &(src, dest) in &edges {
            graph.add_edge(src, dest);
            oracle.add_edge(nodes[src], nodes[dest], ());
        }

        let visited = graph.dfs(&start);
        if start >= n {
            prop_assert!(visited.is_empty());
            return Ok(());
        }

        let mut expected = BTreeSet::new();
        let mut walk = PetDfs::new(&oracle, nodes[start]);
        while let Some(ix) = walk.next(&oracle) {
            expected.insert(ix.index());
        }

        let unique: BTreeSet<usize> = visited.iter().copied().collect();
        prop_assert_eq!(unique.len(), visited.len(), "dfs yielded a vertex twice");
        prop_assert_eq!(unique, expected);
        prop_assert_eq!(visited[0], start);
    }

    #[test]
    fn dfs_stack_has_no_duplicates((n, edges) in graph_strategy(), seed in proptest::collection::vec(0usize..24, 0..8)) {
        let mut graph = Graph::<usize>::new(n).unwrap();
        for &(src, dest) in &edges {
            graph.add_edge(src, dest);
        }
        let mut seed_set = Vec::new();
        for value in seed {
            if !seed_set.contains(&value) {
                seed_set.push(value);
            }
        }

        for src in 0..n {
            let stack = graph.get_dfs_stack(&src, seed_set.clone());
            prop_assert_eq!(&stack[..seed_set.len()], &seed_set[..]);
            let unique: BTreeSet<usize> = stack.iter().copied().collect();
            prop_assert_eq!(unique.len(), stack.len());

            let again = graph.get_dfs_stack(&src, stack.clone());
            prop_assert_eq!(again, stack);
        }
    }

    #[test]
    fn list_matches_vec_model(ops in proptest::collection::vec(
        prop_oneof![
            any::<u8>().prop_map(Operation::Append),
            any::<u8>().prop_map(Operation::Delete),
        ],
        1..100
    )) {
        let mut model: Vec<u8> = Vec::new();
        let mut list = SinglyLinkedList::new(Comparator::by_value());

        for op in ops {
            match op {
                Operation::Append(v) => {
                    model.push(v);
                    list.append(v);
                }
                Operation::Delete(v) => {
                    let expected = model.iter().position(|&m| m == v).map(|i| model.remove(i));
                    prop_assert_eq!(list.delete(&v), expected, "delete result mismatch for {}", v);
                }
            }
            prop_assert_eq!(list.len(), model.len());
        }

        let contents: Vec<u8> = list.iter().copied().collect();
        prop_assert_eq!(contents, model.clone());
        for v in &model {
            prop_assert_eq!(list.search(v).map(|n| *n.data()), Some(*v));
        }
    }
}
