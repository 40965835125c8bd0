//! # Triples
//!
//! The Triple-Format consists of the number of vertices `n` followed by one triple `u v w` per
//! undirected edge `{u, v}` of weight `w`. Vertices are 0-based.

use fxhash::FxHashSet;
use log::debug;

use super::*;

/// A GraphReader for the Triple-Format
#[derive(Debug, Clone, Default)]
pub struct TripleReader {
    /// Accept an edge listed a second time in reverse direction with the same weight
    allow_mirrored: bool,
}

impl TripleReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// If set, a single edge `v u w` following an edge `u v w` is silently skipped instead of
    /// being rejected as duplicate. Some files list every undirected edge in both directions.
    /// Repeats in the same direction and further copies are still rejected.
    pub fn allow_mirrored(mut self, allow: bool) -> Self {
        self.allow_mirrored = allow;
        self
    }
}

impl<G> GraphReader<G> for TripleReader
where
    G: GraphEdgeEditing + EdgeWeights + GraphEdgeOrder,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> GraphFileResult<G> {
        let mut tokens = Tokens::new(reader);

        let header = tokens.next_token()?.ok_or(GraphFileError::MissingHeader)?;
        let n: NumNodes = parse_token!(header, "the number of vertices");
        let mut graph = G::try_new(n).ok_or(GraphFileError::TooManyVertices { n })?;

        // Edges `(u, v)` as read whose mirror `(v, u)` has not been seen yet
        let mut unmirrored: FxHashSet<Edge> = FxHashSet::default();

        loop {
            let Some(first) = tokens.next_token()? else {
                break;
            };

            let mut triple = vec![first];
            while triple.len() < 3 {
                match tokens.next_token()? {
                    Some(token) => triple.push(token),
                    None => {
                        return Err(GraphFileError::IncompleteTriple {
                            found: triple.len(),
                        });
                    }
                }
            }

            let line = triple[0].line;
            let u: Node = parse_token!(triple[0], "a vertex id");
            let v: Node = parse_token!(triple[1], "a vertex id");
            let weight: Weight = parse_token!(triple[2], "an edge weight");

            for node in [u, v] {
                raise_error_unless!(
                    node < n,
                    GraphFileError::NodeOutOfRange { line, node, n }
                );
            }
            raise_error_unless!(u != v, GraphFileError::SelfLoop { line, node: u });
            raise_error_unless!(
                is_valid_weight(weight),
                GraphFileError::InvalidWeight { line, u, v, weight }
            );

            if let Some(existing) = graph.edge_value(u, v) {
                raise_error_unless!(
                    self.allow_mirrored && existing == weight && unmirrored.remove(&Edge(v, u)),
                    GraphFileError::DuplicateEdge { line, u, v }
                );
                continue;
            }

            let inserted = graph.add_edge(u, v, weight);
            debug_assert!(inserted);
            if self.allow_mirrored {
                unmirrored.insert(Edge(u, v));
            }
        }

        debug!(
            "Read graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

/// Trait for creating graphs from a TripleReader.
/// Used as shorthand for default TripleReader settings
pub trait TripleRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_triples<R: BufRead>(reader: R) -> GraphFileResult<Self>;

    /// Tries to read the graph from a given file
    fn try_read_triples_file<P: AsRef<Path>>(path: P) -> GraphFileResult<Self> {
        Self::try_read_triples(BufReader::new(File::open(path)?))
    }
}

impl<G> TripleRead for G
where
    G: GraphEdgeEditing + EdgeWeights + GraphEdgeOrder,
{
    fn try_read_triples<R: BufRead>(reader: R) -> GraphFileResult<Self> {
        TripleReader::default().try_read_graph(reader)
    }
}

/// A writer for the Triple-Format.
///
/// Every undirected edge is written exactly once as `u v w` with `u < v`.
/// Weights are written in their shortest representation that reads back to the same value.
#[derive(Debug, Clone, Default)]
pub struct TripleWriter;

impl TripleWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for TripleWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", graph.vertex_count())?;

        for WeightedEdge { u, v, weight } in graph.edges() {
            writeln!(writer, "{u} {v} {weight}")?;
        }

        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the Triple-Format.
/// Shorthand for default settings.
pub trait TripleWrite {
    /// Tries to write the graph to a writer
    fn try_write_triples<W: Write>(&self, writer: W) -> std::io::Result<()>;

    /// Tries to write the graph to a file
    fn try_write_triples_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_triples(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> TripleWrite for G {
    fn try_write_triples<W: Write>(&self, writer: W) -> std::io::Result<()> {
        TripleWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    fn read(input: &str) -> GraphFileResult<AdjArray> {
        AdjArray::try_read_triples(input.as_bytes())
    }

    #[test]
    fn read_example() {
        let input = "4\n0 1 1\n1 2 2\n2 3 1\n0 3 5\n";
        let graph = AdjMatrix::try_read_triples(input.as_bytes()).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_value(3, 0), Some(5.0));
        assert_eq!(graph.edge_value(2, 1), Some(2.0));
        assert!(!graph.is_adjacent(0, 2));
    }

    #[test]
    fn line_breaks_are_not_significant() {
        let graph = read("  4 0 1\n1 1 2 2\n\n2\n3 1   0 3 5.5").unwrap();
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_value(0, 3), Some(5.5));
        assert_eq!(graph.neighbors(1), vec![0, 2]);

        let graph = read("0").unwrap();
        assert_eq!(graph.vertex_count(), 0);

        let graph = read("7\n").unwrap();
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn write_example() {
        let edges: [(Node, Node, Weight); 4] = [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (3, 0, 5.5)];
        let graph = AdjArray::from_weighted_edges(4, edges);

        let mut buffer = Vec::new();
        graph.try_write_triples(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "4\n0 1 1\n0 3 5.5\n1 2 2\n2 3 1\n"
        );
    }

    #[test]
    fn round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [0, 1, 10, 50] {
            let graph = SparseAdjArray::gnp(rng, n, 0.3);

            let mut buffer = Vec::new();
            TripleWriter::new()
                .try_write_graph(&graph, &mut buffer)
                .unwrap();
            let read: AdjMatrix = TripleReader::new().try_read_graph(buffer.as_slice()).unwrap();

            assert_eq!(read.vertex_count(), graph.vertex_count());
            assert_eq!(read.ordered_edges(), graph.ordered_edges());
        }
    }

    #[test]
    fn round_trip_file() {
        let _ = env_logger::builder().is_test(true).try_init();

        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph = AdjArray::gnp_weighted(rng, 30, 0.2, 0.0..1.0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        graph.try_write_triples_file(&path).unwrap();

        let read = AdjArray::try_read_triples_file(&path).unwrap();
        assert_eq!(read.vertex_count(), 30);
        assert_eq!(read.ordered_edges(), graph.ordered_edges());
    }

    #[test]
    fn oversized_header() {
        let result = AdjMatrix::try_read_triples("4000000000\n".as_bytes());
        assert!(matches!(
            result,
            Err(GraphFileError::TooManyVertices { n: 4_000_000_000 })
        ));

        let result = AdjMatrix::try_read_triples("4294967295\n0 1 1".as_bytes());
        assert!(matches!(result, Err(GraphFileError::TooManyVertices { .. })));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AdjArray::try_read_triples_file(dir.path().join("does-not-exist.txt"));
        assert!(
            matches!(result, Err(GraphFileError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(read(""), Err(GraphFileError::MissingHeader)));
        assert!(matches!(read(" \n\n "), Err(GraphFileError::MissingHeader)));

        assert!(matches!(
            read("four\n0 1 1"),
            Err(GraphFileError::InvalidToken { line: 1, .. })
        ));
        assert!(matches!(
            read("3\n0 -1 2"),
            Err(GraphFileError::InvalidToken { line: 2, .. })
        ));
        assert!(matches!(
            read("3\n0 1 1\n1 2 heavy"),
            Err(GraphFileError::InvalidToken { line: 3, .. })
        ));

        assert!(matches!(
            read("3\n0 1"),
            Err(GraphFileError::IncompleteTriple { found: 2 })
        ));
        assert!(matches!(
            read("3\n0 1 2 2"),
            Err(GraphFileError::IncompleteTriple { found: 1 })
        ));

        assert!(matches!(
            read("3\n0 3 1"),
            Err(GraphFileError::NodeOutOfRange { node: 3, n: 3, .. })
        ));
        assert!(matches!(
            read("3\n1 1 1"),
            Err(GraphFileError::SelfLoop { node: 1, .. })
        ));
        assert!(matches!(
            read("3\n0 1 1\n1 0 1"),
            Err(GraphFileError::DuplicateEdge { line: 3, u: 1, v: 0 })
        ));
        assert!(matches!(
            read("3\n0 1 -2"),
            Err(GraphFileError::InvalidWeight { .. })
        ));
        assert!(matches!(
            read("3\n0 1 NaN"),
            Err(GraphFileError::InvalidWeight { .. })
        ));
        assert!(matches!(
            read("3\n0 1 inf"),
            Err(GraphFileError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn mirrored_edges() {
        let input = "3\n0 1 4\n1 0 4\n1 2 1\n2 1 1";
        assert!(matches!(
            read(input),
            Err(GraphFileError::DuplicateEdge { .. })
        ));

        let graph: AdjArray = TripleReader::new()
            .allow_mirrored(true)
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_value(1, 0), Some(4.0));

        // Only a single copy in reverse direction is accepted
        for input in [
            "3\n0 1 4\n0 1 4\n1 0 4",
            "3\n0 1 4\n1 0 4\n0 1 4",
            "3\n0 1 4\n1 0 4\n1 0 4",
        ] {
            let result: GraphFileResult<AdjArray> = TripleReader::new()
                .allow_mirrored(true)
                .try_read_graph(input.as_bytes());
            assert!(matches!(result, Err(GraphFileError::DuplicateEdge { .. })));
        }

        // Mirrored copies must agree on the weight
        let result: GraphFileResult<AdjArray> = TripleReader::new()
            .allow_mirrored(true)
            .try_read_graph("3\n0 1 4\n1 0 3".as_bytes());
        assert!(matches!(result, Err(GraphFileError::DuplicateEdge { .. })));
    }
}
