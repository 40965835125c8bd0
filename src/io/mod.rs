/*!
# IO

Utilities for reading and writing weighted graphs from and to files.

## Triple Format

The only supported format is a whitespace-delimited list of tokens:
```text
<n>
<u1> <v1> <w1>
<u2> <v2> <w2>
...
```
The first token is the number of vertices `n`, followed by one triple per undirected edge with
0-based vertex ids in `0..n` and a non-negative weight. Line breaks are not significant.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers
  (e.g. [`TripleReader`], [`TripleWriter`]).
- [`TripleRead`] and [`TripleWrite`] are shorthands using default settings that are available
  on every graph representation.

Reading never panics on malformed input: every inconsistency is reported as a
[`GraphFileError`](crate::error::GraphFileError).
*/

pub mod triples;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Lines, Write},
    path::Path,
};

use crate::{error::*, prelude::*};

pub use triples::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> GraphFileResult<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> GraphFileResult<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> std::io::Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> std::io::Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// A whitespace-delimited token together with the (1-based) line it was found in
#[derive(Debug, Clone)]
struct Token {
    line: usize,
    text: String,
}

/// Splits the lines of a reader into whitespace-delimited tokens
struct Tokens<R> {
    lines: Lines<R>,
    line: usize,
    current: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            current: Vec::new().into_iter(),
        }
    }

    /// Returns the next token, `None` at the end of the input, or propagates an IO error
    fn next_token(&mut self) -> GraphFileResult<Option<Token>> {
        loop {
            if let Some(text) = self.current.next() {
                return Ok(Some(Token {
                    line: self.line,
                    text,
                }));
            }

            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    self.line += 1;
                    self.current = line?
                        .split_whitespace()
                        .map(String::from)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
            }
        }
    }
}

/// Shorthand for returning an error early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $error : expr) => {
        if !($cond) {
            return Err($error);
        }
    };
}

/// Tries to parse a token and returns early with `GraphFileError::InvalidToken` if it fails
macro_rules! parse_token {
    ($token : expr, $expected : expr) => {{
        let token: &Token = &$token;
        match token.text.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(GraphFileError::InvalidToken {
                    line: token.line,
                    token: token.text.clone(),
                    expected: $expected,
                });
            }
        }
    }};
}

use parse_token;
use raise_error_unless;
