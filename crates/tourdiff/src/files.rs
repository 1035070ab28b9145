//! Reading tours and reading or writing move files.
//!
//! A move file is a JSON array with one `[first_edges, second_edges]` pair
//! per move, each edge written as `[u, v]`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tourdiff_core::KMove;
use tourdiff_split::{Decomposer, Decomposition};
use tourdiff_tsplib::read_tour;
use tracing::info;

use crate::error::Result;

/// Serializes moves to compact JSON.
pub fn moves_to_json(moves: &[KMove]) -> Result<String> {
    Ok(serde_json::to_string(moves)?)
}

/// Parses moves from JSON. Edges are canonicalized on the way in.
pub fn moves_from_json(json: &str) -> Result<Vec<KMove>> {
    Ok(serde_json::from_str(json)?)
}

/// Writes moves to a JSON file.
pub fn write_moves(path: impl AsRef<Path>, moves: &[KMove]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, moves)?;
    writer.flush()?;
    info!(event = "moves_written", move_count = moves.len(), path = %path.display());
    Ok(())
}

/// Reads moves from a JSON file.
pub fn read_moves(path: impl AsRef<Path>) -> Result<Vec<KMove>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Reads two TSPLIB tour files and decomposes their difference.
pub fn decompose_files(
    decomposer: &Decomposer,
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
) -> Result<Decomposition> {
    let first = read_tour(first)?;
    let second = read_tour(second)?;
    Ok(decomposer.decompose(&first, &second)?)
}
