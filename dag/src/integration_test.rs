#[cfg(test)]
mod integration_tests {
    use crate::{anticone, future, has_cycle, past, tips, Graph, GraphSource, NodeSets};

    fn graph(text: &str) -> Graph {
        Graph::from_source(&GraphSource::parse(text).unwrap())
    }

    // Every vertex other than the queried one lands in exactly one of
    // past, future, anticone.
    fn assert_partition(g: &Graph, name: &str) {
        let src = g.index_of(name).unwrap();
        let past = past(g, src);
        let future = future(g, src);
        let anticone = anticone(g, src, &past, &future);

        assert_eq!(past.len() + future.len() + anticone.len() + 1, g.vertex_count());

        for index in 0..g.vertex_count() {
            let other = g.name_of(index).unwrap();
            if other == name {
                assert!(!past.contains(other));
                assert!(!future.contains(other));
                assert!(!anticone.contains(other));
                continue;
            }
            let memberships = [past.contains(other), future.contains(other), anticone.contains(other)];
            assert_eq!(
                memberships.iter().filter(|&&hit| hit).count(),
                1,
                "vertex {} must be in exactly one set relative to {}",
                other,
                name
            );
        }
    }

    #[test]
    fn test_sets_partition_every_vertex() {
        let g = graph(
            "7\nGenesis A B C D E F\n7\nA : Genesis\nB : Genesis\nC : A B\nD : A\nE : C\nF : D\n",
        );
        assert!(!has_cycle(&g));

        for index in 0..g.vertex_count() {
            let name = g.name_of(index).unwrap().to_string();
            assert_partition(&g, &name);
        }
    }

    #[test]
    fn test_reference_scenario() {
        let g = graph("4\nGenesis A B C\n3\nA : Genesis\nB : Genesis\nC : A\n");
        assert!(!has_cycle(&g));

        let sets = NodeSets::compute(&g, "A").unwrap();
        assert_eq!(sets.past.iter().collect::<Vec<_>>(), vec!["Genesis"]);
        assert_eq!(sets.future.iter().collect::<Vec<_>>(), vec!["C"]);
        assert_eq!(sets.anticone.iter().collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(sets.tips.iter().collect::<Vec<_>>(), vec!["B", "C"]);
    }

    #[test]
    fn test_cycle_verdicts() {
        assert!(has_cycle(&graph("2\nX Y\n2\nX : Y\nY : X\n")));
        assert!(has_cycle(&graph("1\nX\n1\nX : X\n")));
        assert!(!has_cycle(&graph("4\nGenesis A B C\n3\nA : Genesis\nB : Genesis\nC : A\n")));
    }

    #[test]
    fn test_transpose_is_involutive() {
        let g = graph("4\nGenesis A B C\n4\nA : Genesis\nB : Genesis\nC : A B\n");
        let round_trip = g.transpose().transpose();

        assert_eq!(round_trip.vertex_count(), g.vertex_count());
        for index in 0..g.vertex_count() {
            let mut original: Vec<usize> = g.out_edges(index).to_vec();
            let mut back: Vec<usize> = round_trip.out_edges(index).to_vec();
            original.sort_unstable();
            back.sort_unstable();
            assert_eq!(original, back);
        }
    }

    #[test]
    fn test_topological_order_graph_is_acyclic() {
        // Edges only ever point from later vertices to earlier ones.
        let mut text = String::from("6\nGenesis A B C D E\n5\n");
        text.push_str("A : Genesis\nB : A\nC : B\nD : C\nE : D\n");
        assert!(!has_cycle(&graph(&text)));
    }

    #[test]
    fn test_tips_of_fork_heavy_graph() {
        let g = graph("5\nGenesis A B C D\n4\nA : Genesis\nB : Genesis\nC : Genesis\nD : A\n");
        let tips = tips(&g);
        assert_eq!(tips.iter().collect::<Vec<_>>(), vec!["B", "C", "D"]);
    }
}
