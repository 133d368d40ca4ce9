//! Plain-text `.dat` format: one hyperedge per line, vertex ids separated by
//! single spaces. An empty hyperedge is an empty line.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use hgen_core::errors::{ErrorInfo, HgenError};
use hgen_core::{Hyperedge, Hypergraph, VertexId};

/// Writes the hypergraph in `.dat` form to an arbitrary writer.
pub fn write_dat_to<W: Write>(graph: &Hypergraph, mut writer: W) -> io::Result<()> {
    for edge in graph {
        let mut first = true;
        for vertex in edge.vertices() {
            if !first {
                writer.write_all(b" ")?;
            }
            write!(writer, "{vertex}")?;
            first = false;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Renders the hypergraph as a `.dat` string.
pub fn to_dat_string(graph: &Hypergraph) -> String {
    let mut buffer = Vec::new();
    // Writing into a `Vec` cannot fail.
    write_dat_to(graph, &mut buffer)
        .map(|()| String::from_utf8_lossy(&buffer).into_owned())
        .unwrap_or_default()
}

/// Writes the hypergraph to `path`, replacing any existing file.
pub fn write_dat(graph: &Hypergraph, path: &Path) -> Result<(), HgenError> {
    let file = File::create(path).map_err(|err| HgenError::io("create-dat", path, err))?;
    write_dat_to(graph, BufWriter::new(file)).map_err(|err| HgenError::io("write-dat", path, err))
}

/// Parses `.dat` text back into a hypergraph.
pub fn parse_dat(text: &str) -> Result<Hypergraph, HgenError> {
    let mut graph = Hypergraph::new();
    for (line_no, line) in text.lines().enumerate() {
        let vertices = line
            .split_whitespace()
            .map(|token| {
                token.parse::<VertexId>().map_err(|err| {
                    HgenError::Parse(
                        ErrorInfo::new("bad-vertex-token", err.to_string())
                            .with_context("line", (line_no + 1).to_string())
                            .with_context("token", token),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let edge = Hyperedge::try_new(vertices).map_err(|err| match err {
            HgenError::Parse(info) => {
                HgenError::Parse(info.with_context("line", (line_no + 1).to_string()))
            }
            other => other,
        })?;
        graph.insert(edge);
    }
    Ok(graph)
}

/// Reads and parses a `.dat` file.
pub fn read_dat(path: &Path) -> Result<Hypergraph, HgenError> {
    let text = fs::read_to_string(path).map_err(|err| HgenError::io("read-dat", path, err))?;
    parse_dat(&text)
}
