//! Depth-first search over an indexed and a keyed graph.
//!
//! Run with `cargo run --example traversal --features tracing` and
//! `RUST_LOG=dfs_graph=trace` to see the traversal events.

use dfs_graph::{Comparator, Graph, GraphError};

fn main() -> Result<(), GraphError> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Indexed graph");
    println!("=============");

    let mut graph = Graph::new(5)?;
    for (src, dest) in [(0, 1), (0, 2), (0, 3), (1, 0), (1, 2), (2, 0), (2, 1), (2, 4), (3, 0), (4, 2)] {
        graph.add_edge(src, dest);
    }
    println!("  dfs(0) = {:?}", graph.dfs(&0));
    println!("  dfs(2) = {:?}", graph.dfs(&2));
    println!("  stack from 2 = {:?}", graph.get_dfs_stack(&2, Vec::new()));

    println!("\nKeyed graph");
    println!("===========");

    let stations = ["Gare du Nord", "Chatelet", "Bastille", "Nation"].map(String::from);
    let same_name = Comparator::new(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
    let mut metro = Graph::from_vertices(stations, Some(same_name))?;
    metro.add_edge(0, "chatelet".to_string());
    metro.add_edge(1, "bastille".to_string());
    metro.add_edge(1, "gare du nord".to_string());

    let start = "Gare du Nord".to_string();
    println!("  dfs({start}) = {:?}", metro.dfs(&start));
    println!("  dfs(Nation) = {:?}", metro.dfs(&"Nation".to_string()));
    println!("  dfs(Opera) = {:?}", metro.dfs(&"Opera".to_string()));

    if let Err(err) = Graph::<String>::from_vertices(Vec::new(), None) {
        println!("\nconstruction without comparator: {err}");
    }

    Ok(())
}
