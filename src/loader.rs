//! Readers for the three whitespace-delimited city files.
//!
//! All formats share the same line discipline: fields are split on whitespace, lines with
//! fewer than three fields are skipped, and trailing fields are ignored.
//!
//! | file           | column 0  | column 1 | column 2 |
//! |----------------|-----------|----------|----------|
//! | `RoadVertices` | vertex id | lon      | lat      |
//! | `RoadEdges`    | ignored   | start id | end id   |
//! | `Restaurants`  | ignored   | lon      | lat      |

use crate::data_structures::{Coordinate, Edge, ParsePolicy, VertexId, VertexMap};
use crate::error::{PlotError, PlotResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

pub const MIN_FIELDS: usize = 3;

/// Why a line did not produce a record.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    TooFewFields(usize),
    Malformed { field: usize, value: String },
    InvalidUtf8,
}

/// Result of parsing a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome<T> {
    Record(T),
    Skipped(SkipReason),
}

fn field<T: FromStr>(fields: &[&str], idx: usize) -> Result<T, SkipReason> {
    fields[idx].parse().map_err(|_| SkipReason::Malformed {
        field: idx,
        value: fields[idx].to_string(),
    })
}

pub fn parse_line<T>(
    line: &str,
    parse: impl Fn(&[&str]) -> Result<T, SkipReason>,
) -> LineOutcome<T> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return LineOutcome::Skipped(SkipReason::TooFewFields(fields.len()));
    }
    match parse(&fields) {
        Ok(record) => LineOutcome::Record(record),
        Err(reason) => LineOutcome::Skipped(reason),
    }
}

/// Like [`parse_line`], but for a raw line that may not be valid UTF-8.
pub fn parse_raw_line<T>(
    bytes: &[u8],
    parse: impl Fn(&[&str]) -> Result<T, SkipReason>,
) -> LineOutcome<T> {
    match std::str::from_utf8(bytes) {
        Ok(line) => parse_line(line, parse),
        Err(_) => LineOutcome::Skipped(SkipReason::InvalidUtf8),
    }
}

pub fn parse_vertex(fields: &[&str]) -> Result<(VertexId, Coordinate), SkipReason> {
    Ok((field(fields, 0)?, (field(fields, 1)?, field(fields, 2)?)))
}

pub fn parse_edge_ids(fields: &[&str]) -> Result<(VertexId, VertexId), SkipReason> {
    Ok((field(fields, 1)?, field(fields, 2)?))
}

pub fn parse_restaurant(fields: &[&str]) -> Result<Coordinate, SkipReason> {
    Ok((field(fields, 1)?, field(fields, 2)?))
}

fn read_records<T>(
    path: &Path,
    policy: ParsePolicy,
    parse: impl Fn(&[&str]) -> Result<T, SkipReason>,
) -> PlotResult<Vec<T>> {
    let file = File::open(path).map_err(|e| PlotError::io(path, e))?;
    let mut records = Vec::new();

    for (idx, bytes) in BufReader::new(file).split(b'\n').enumerate() {
        let bytes = bytes.map_err(|e| PlotError::io(path, e))?;
        let line = idx + 1;
        let reason = match parse_raw_line(&bytes, &parse) {
            LineOutcome::Record(record) => {
                records.push(record);
                continue;
            }
            LineOutcome::Skipped(SkipReason::TooFewFields(_)) => continue,
            LineOutcome::Skipped(reason) => reason,
        };

        match (policy, reason) {
            (ParsePolicy::Strict, SkipReason::Malformed { field, value }) => {
                return Err(PlotError::Parse {
                    path: path.to_path_buf(),
                    line,
                    field,
                    value,
                })
            }
            (ParsePolicy::Strict, _) => {
                return Err(PlotError::Encoding {
                    path: path.to_path_buf(),
                    line,
                })
            }
            (ParsePolicy::Lenient, reason) => {
                warn!("Skipping {}:{}: {:?}", path.display(), line, reason)
            }
        }
    }

    Ok(records)
}

/// Vertex id to coordinate. A repeated id overwrites the earlier line.
pub fn load_vertices(path: &Path, policy: ParsePolicy) -> PlotResult<VertexMap> {
    Ok(read_records(path, policy, parse_vertex)?.into_iter().collect())
}

/// Edges in file order, with both endpoints resolved through `vertices`.
/// Edges naming an unknown vertex are dropped without a trace.
pub fn load_edges(path: &Path, vertices: &VertexMap, policy: ParsePolicy) -> PlotResult<Vec<Edge>> {
    let ids = read_records(path, policy, parse_edge_ids)?;
    Ok(ids
        .into_iter()
        .filter_map(|(start, end)| Some((*vertices.get(&start)?, *vertices.get(&end)?)))
        .collect())
}

pub fn load_restaurants(path: &Path, policy: ParsePolicy) -> PlotResult<Vec<Coordinate>> {
    read_records(path, policy, parse_restaurant)
}
