/// Every graph representation should pass the same suite of graph-operation tests.
/// `test_graph_ops!(module_name, GraphType)` stamps it out for a given representation.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty) => {
        #[cfg(test)]
        mod $env {
            use std::collections::BTreeMap;

            use crate::{ops::*, repr::*, *};
            use itertools::Itertools;
            use rand::{Rng, RngCore, SeedableRng};
            use rand_distr::Uniform;
            use rand_pcg::Pcg64Mcg;

            type G = $graph;

            /// Draws a random pair of (possibly equal, possibly out-of-range) nodes
            fn random_pair<R: Rng>(rng: &mut R, n: NumNodes) -> (Node, Node) {
                (rng.random_range(0..n + 2), rng.random_range(0..n + 2))
            }

            #[test]
            fn graph_new() {
                for n in 0..30 {
                    let graph = G::new(n);

                    assert_eq!(graph.edge_count(), 0);
                    assert_eq!(graph.vertex_count(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.vertices().all(|u| graph.node_value(u) == Some(0.0)));
                    assert!(graph.vertices().all(|u| graph.mst_edge(u).is_none()));
                    assert!(graph.vertices().all(|u| graph.neighbors(u).is_empty()));

                    let graph = G::try_new(n).unwrap();
                    assert_eq!(graph.vertex_count(), n);
                    assert_eq!(graph.edge_count(), 0);
                }
            }

            #[test]
            fn add_edge_then_adjacent() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [2 as NumNodes, 5, 20] {
                    let mut graph = G::new(n);
                    for _ in 0..(n * n) {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        if u == v {
                            continue;
                        }

                        let m = graph.edge_count();
                        if graph.is_adjacent(u, v) {
                            assert!(!graph.add_edge(u, v, 1.0));
                            assert_eq!(graph.edge_count(), m);
                        } else {
                            assert!(graph.add_edge(u, v, 1.0));
                            assert!(graph.is_adjacent(u, v));
                            assert!(graph.is_adjacent(v, u));
                            assert_eq!(graph.edge_count(), m + 1);

                            assert!(!graph.add_edge(u, v, 2.0));
                            assert!(!graph.add_edge(v, u, 2.0));
                            assert_eq!(graph.edge_count(), m + 1);
                            assert_eq!(graph.edge_value(u, v), Some(1.0));
                        }
                    }
                }
            }

            #[test]
            fn delete_edge_properties() {
                let mut graph = G::new(4);
                assert!(!graph.delete_edge(0, 1));
                assert_eq!(graph.edge_count(), 0);

                assert!(graph.add_edge(0, 1, 3.0));
                assert!(graph.add_edge(1, 2, 3.0));
                assert!(graph.delete_edge(1, 0));
                assert!(!graph.is_adjacent(0, 1));
                assert_eq!(graph.edge_count(), 1);
                assert!(!graph.delete_edge(0, 1));

                assert!(!graph.delete_edge(2, 2));
                assert!(!graph.delete_edge(1, 7));
                assert!(!graph.delete_edge(9, 1));
                assert_eq!(graph.edge_count(), 1);
                assert_eq!(graph.neighbors(1), vec![2]);
                assert_eq!(graph.neighbors(0), Vec::<Node>::new());
            }

            #[test]
            fn rejects_invalid_edges() {
                let mut graph = G::new(3);

                assert!(!graph.add_edge(1, 1, 1.0));
                assert!(!graph.add_edge(0, 3, 1.0));
                assert!(!graph.add_edge(3, 0, 1.0));
                assert!(!graph.add_edge(0, 1, -1.0));
                assert!(!graph.add_edge(0, 1, f64::NAN));
                assert!(!graph.add_edge(0, 1, f64::INFINITY));
                assert_eq!(graph.edge_count(), 0);
                assert!(graph.vertices().all(|u| graph.neighbors(u).is_empty()));

                assert!(!graph.is_adjacent(1, 1));
                assert!(!graph.is_adjacent(0, 3));
                assert!(!graph.is_adjacent(Node::MAX, 0));
                assert!(graph.neighbors(3).is_empty());
            }

            #[test]
            fn edge_values_are_symmetric() {
                let mut graph = G::new(5);
                assert!(graph.add_edge(0, 4, 2.5));
                assert!(graph.add_edge(2, 4, 1.0));

                assert!(graph.set_edge_value(4, 0, 7.0));
                assert_eq!(graph.edge_value(0, 4), Some(7.0));
                assert_eq!(graph.edge_value(4, 0), Some(7.0));
                assert_eq!(graph.edge_value(2, 4), Some(1.0));

                assert!(graph.set_edge_value(0, 4, 0.0));
                assert_eq!(graph.edge_value(4, 0), Some(0.0));

                assert!(!graph.set_edge_value(0, 4, -3.0));
                assert!(!graph.set_edge_value(0, 1, 3.0));
                assert!(!graph.set_edge_value(3, 3, 3.0));
                assert!(!graph.set_edge_value(0, 5, 3.0));
                assert_eq!(graph.edge_value(0, 4), Some(0.0));

                assert_eq!(graph.edge_value(0, 1), None);
                assert_eq!(graph.edge_value(0, 0), None);
                assert_eq!(graph.edge_value(0, 5), None);
            }

            #[test]
            fn node_values() {
                let mut graph = G::new(3);
                assert!(graph.set_node_value(2, -4.5));
                assert_eq!(graph.node_value(2), Some(-4.5));
                assert_eq!(graph.node_value(0), Some(0.0));

                assert!(!graph.set_node_value(3, 1.0));
                assert_eq!(graph.node_value(3), None);
            }

            #[test]
            fn sampled_weights() {
                let rng = &mut Pcg64Mcg::seed_from_u64(7);
                let distr = Uniform::new(1.0, 10.0).unwrap();

                let mut graph = G::new(10);
                for u in 0..10 {
                    for v in (u + 1)..10 {
                        assert!(graph.add_edge_sampled(u, v, rng, &distr));
                    }
                }
                assert_eq!(graph.edge_count(), 45);
                assert!(graph.edges().all(|e| (1.0..10.0).contains(&e.weight)));
                assert_eq!(graph.density(), 1.0);

                // Rejected insertions do not consume randomness
                let mut copy = rng.clone();
                assert!(!graph.add_edge_sampled(0, 1, rng, &distr));
                assert!(!graph.add_edge_sampled(3, 3, rng, &distr));
                assert_eq!(rng.next_u64(), copy.next_u64());
            }

            #[test]
            fn random_operations_match_reference() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for n in [3 as NumNodes, 10, 25] {
                    let mut graph = G::new(n);
                    let mut reference: BTreeMap<Edge, Weight> = BTreeMap::new();

                    for _ in 0..(n * n * 4) {
                        let (u, v) = random_pair(rng, n);
                        let key = Edge(u, v).normalized();
                        let valid = u != v && u < n && v < n;
                        let weight = rng.random_range(0..20) as Weight;

                        match rng.random_range(0..3) {
                            0 => {
                                let expected = valid && !reference.contains_key(&key);
                                assert_eq!(graph.add_edge(u, v, weight), expected);
                                if expected {
                                    reference.insert(key, weight);
                                }
                            }
                            1 => {
                                let expected = reference.remove(&key).is_some();
                                assert_eq!(graph.delete_edge(u, v), expected);
                            }
                            _ => {
                                let expected =
                                    reference.get_mut(&key).map(|w| *w = weight).is_some();
                                assert_eq!(graph.set_edge_value(u, v, weight), expected);
                            }
                        }

                        assert_eq!(graph.edge_count() as usize, reference.len());
                    }

                    let edges = graph
                        .ordered_edges()
                        .into_iter()
                        .map(|e| (e.edge(), e.weight))
                        .collect_vec();
                    assert_eq!(edges, reference.iter().map(|(e, w)| (*e, *w)).collect_vec());

                    let total_degree: NumNodes = graph.vertices().map(|u| graph.degree_of(u)).sum();
                    assert_eq!(total_degree as usize, 2 * reference.len());

                    for u in 0..n {
                        for v in 0..n {
                            let key = Edge(u, v).normalized();
                            assert_eq!(graph.is_adjacent(u, v), reference.contains_key(&key));
                            assert_eq!(graph.edge_value(u, v), reference.get(&key).copied());
                        }

                        let mut nbs = graph.neighbors(u);
                        nbs.sort_unstable();
                        let expected = reference
                            .keys()
                            .filter_map(|e| {
                                if e.0 == u {
                                    Some(e.1)
                                } else if e.1 == u {
                                    Some(e.0)
                                } else {
                                    None
                                }
                            })
                            .sorted()
                            .collect_vec();
                        assert_eq!(nbs, expected);
                    }
                }
            }

            #[test]
            fn from_weighted_edges_skips_invalid() {
                let edges = vec![
                    WeightedEdge::new(0, 1, 1.0),
                    WeightedEdge::new(1, 0, 2.0),
                    WeightedEdge::new(2, 2, 1.0),
                    WeightedEdge::new(1, 3, 1.0),
                    WeightedEdge::new(1, 2, -1.0),
                    WeightedEdge::new(2, 0, 4.0),
                ];
                let graph = G::from_weighted_edges(3, edges);

                assert_eq!(graph.edge_count(), 2);
                assert_eq!(graph.edge_value(1, 0), Some(1.0));
                assert_eq!(graph.edge_value(0, 2), Some(4.0));
                assert!(!graph.is_adjacent(1, 2));
            }
        }
    };
}

pub(crate) use test_graph_ops;
