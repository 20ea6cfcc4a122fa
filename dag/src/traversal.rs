//! Breadth-first reachability over out-edges.

use crate::containers::Fifo;
use crate::graph::Graph;
use crate::ordered::OrderedSet;

/// Collect every vertex reachable from `src` by following out-edges, as an
/// ordered name set. The source vertex itself is not included.
pub fn reachable_from(graph: &Graph, src: usize) -> OrderedSet {
    let mut visited = vec![false; graph.vertex_count()];
    let mut frontier = Fifo::new();
    let mut reached = OrderedSet::new();

    visited[src] = true;
    frontier.enqueue(src);

    while let Some(node) = frontier.dequeue() {
        if node != src {
            if let Some(name) = graph.name_of(node) {
                reached.insert(name);
            }
        }

        for &neighbor in graph.out_edges(node) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                frontier.enqueue(neighbor);
            }
        }
    }

    reached
}
