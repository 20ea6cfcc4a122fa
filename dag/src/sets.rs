//! Derived DAG sets: past, future, anticone, tips.

use crate::graph::Graph;
use crate::ordered::OrderedSet;
use crate::traversal::reachable_from;

/// Ancestors of the vertex at `src`: everything reachable over the
/// child -> parent edges as given.
pub fn past(graph: &Graph, src: usize) -> OrderedSet {
    reachable_from(graph, src)
}

/// Descendants of the vertex at `src`: reachability over the transposed
/// graph walks the parent -> child direction.
pub fn future(graph: &Graph, src: usize) -> OrderedSet {
    let transposed = graph.transpose();
    reachable_from(&transposed, src)
}

/// Vertices other than `src` that are neither ancestors nor descendants
/// of it.
pub fn anticone(graph: &Graph, src: usize, past: &OrderedSet, future: &OrderedSet) -> OrderedSet {
    let mut result = OrderedSet::new();

    for index in 0..graph.vertex_count() {
        if index == src {
            continue;
        }
        let Some(name) = graph.name_of(index) else { continue };
        if !past.contains(name) && !future.contains(name) {
            result.insert(name);
        }
    }

    result
}

/// Vertices with in-degree zero: no block points at them yet.
pub fn tips(graph: &Graph) -> OrderedSet {
    let mut in_degree = vec![0usize; graph.vertex_count()];
    for node in 0..graph.vertex_count() {
        for &target in graph.out_edges(node) {
            in_degree[target] += 1;
        }
    }

    let mut result = OrderedSet::new();
    for (index, &degree) in in_degree.iter().enumerate() {
        if degree == 0 {
            if let Some(name) = graph.name_of(index) {
                result.insert(name);
            }
        }
    }

    result
}

/// The four sets reported for one named vertex.
#[derive(Debug)]
pub struct NodeSets {
    pub past: OrderedSet,
    pub future: OrderedSet,
    pub anticone: OrderedSet,
    pub tips: OrderedSet,
}

impl NodeSets {
    /// Compute all four sets for `name`, or `None` when the name is not a
    /// known vertex.
    pub fn compute(graph: &Graph, name: &str) -> Option<Self> {
        let src = graph.index_of(name)?;

        let past = past(graph, src);
        let future = future(graph, src);
        let anticone = anticone(graph, src, &past, &future);
        let tips = tips(graph);

        Some(Self { past, future, anticone, tips })
    }
}
