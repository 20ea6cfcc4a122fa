//! Cycle detection over the whole graph.

use crate::containers::Lifo;
use crate::graph::Graph;

/// Per-vertex marker for the depth-first walk. Each vertex moves
/// Unvisited -> OnStack -> Done exactly once.
#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Unvisited,
    OnStack,
    Done,
}

/// Check whether the graph contains a cycle.
///
/// Depth-first search with an explicit work stack instead of recursion, so
/// deep graphs cannot overflow the call stack. A frame holds the vertex
/// and a cursor into its out-edges; meeting an out-neighbor that is still
/// on the stack means the walk closed on itself. A self-loop trips the
/// same check.
pub fn has_cycle(graph: &Graph) -> bool {
    let mut state = vec![VisitState::Unvisited; graph.vertex_count()];
    let mut stack: Lifo<(usize, usize)> = Lifo::new();

    for root in 0..graph.vertex_count() {
        if state[root] != VisitState::Unvisited {
            continue;
        }

        state[root] = VisitState::OnStack;
        stack.push((root, 0));

        while let Some(frame) = stack.top_mut() {
            let (node, cursor) = *frame;
            let edges = graph.out_edges(node);

            if cursor < edges.len() {
                frame.1 += 1;
                let neighbor = edges[cursor];
                match state[neighbor] {
                    VisitState::OnStack => return true,
                    VisitState::Unvisited => {
                        state[neighbor] = VisitState::OnStack;
                        stack.push((neighbor, 0));
                    }
                    VisitState::Done => {}
                }
            } else {
                state[node] = VisitState::Done;
                stack.pop();
            }
        }
    }

    false
}
