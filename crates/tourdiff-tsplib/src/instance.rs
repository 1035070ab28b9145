//! `NODE_COORD_SECTION` reader.

use std::path::Path;

use tourdiff_core::Vertex;

use crate::error::TsplibError;

const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";

/// A city position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

/// City coordinates of a TSPLIB instance, in file order.
///
/// Vertex `v` of a tour is the city at index `v - 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instance {
    coords: Vec<Coord>,
}

impl Instance {
    /// Creates an instance from coordinates in vertex order.
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the instance has no cities.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// All coordinates in vertex order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Position of 1-based vertex `v`.
    pub fn coord(&self, v: Vertex) -> Result<Coord, TsplibError> {
        v.checked_sub(1)
            .and_then(|i| self.coords.get(i))
            .copied()
            .ok_or(TsplibError::VertexOutOfRange {
                vertex: v,
                len: self.coords.len(),
            })
    }

    /// EUC_2D distance between 1-based vertices `i` and `j`.
    ///
    /// The Euclidean distance is rounded to the nearest integer, ties to even.
    pub fn distance(&self, i: Vertex, j: Vertex) -> Result<i64, TsplibError> {
        let a = self.coord(i)?;
        let b = self.coord(j)?;
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        Ok((dx * dx + dy * dy).sqrt().round_ties_even() as i64)
    }
}

/// Parses the coordinate section of a TSPLIB instance document.
///
/// Reading starts on the line after `NODE_COORD_SECTION` and stops at a line
/// containing `EOF` or at an empty line. Each line is `id x y`; the id is
/// ignored and coordinates are stored in file order.
pub fn parse_instance(text: &str) -> Result<Instance, TsplibError> {
    let mut lines = text.lines().enumerate();
    if !lines.any(|(_, line)| line.contains(NODE_COORD_SECTION)) {
        return Err(TsplibError::MissingSection(NODE_COORD_SECTION));
    }

    let mut coords = Vec::new();
    for (index, line) in lines {
        let line = line.trim();
        if line.contains("EOF") || line.is_empty() {
            break;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [_, x, y, ..] = fields.as_slice() else {
            return Err(TsplibError::Parse {
                line: index + 1,
                message: format!("expected 'id x y', got '{line}'"),
            });
        };
        let parse = |field: &str| {
            field.parse::<f64>().map_err(|e| TsplibError::Parse {
                line: index + 1,
                message: format!("bad coordinate '{field}': {e}"),
            })
        };
        coords.push(Coord {
            x: parse(*x)?,
            y: parse(*y)?,
        });
    }
    Ok(Instance::new(coords))
}

/// Reads a TSPLIB instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Instance, TsplibError> {
    let text = std::fs::read_to_string(path)?;
    parse_instance(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourdiff_test::tsplib::SQUARE_INSTANCE;

    #[test]
    fn test_parse_instance() {
        let instance = parse_instance(SQUARE_INSTANCE).unwrap();
        assert_eq!(instance.len(), 5);
        assert_eq!(instance.coord(3).unwrap(), Coord { x: 3.0, y: 4.0 });
        assert_eq!(instance.coord(5).unwrap(), Coord { x: 2.5, y: 0.0 });
    }

    #[test]
    fn test_distance_rounds_ties_to_even() {
        let instance = parse_instance(SQUARE_INSTANCE).unwrap();
        assert_eq!(instance.distance(1, 3).unwrap(), 5);
        // 2.5 and 0.5 both round down to the even neighbor.
        assert_eq!(instance.distance(1, 5).unwrap(), 2);
        assert_eq!(instance.distance(5, 2).unwrap(), 0);
    }

    #[test]
    fn test_vertex_out_of_range() {
        let instance = parse_instance(SQUARE_INSTANCE).unwrap();
        assert!(matches!(
            instance.distance(0, 1),
            Err(TsplibError::VertexOutOfRange { vertex: 0, len: 5 })
        ));
        assert!(matches!(
            instance.coord(6),
            Err(TsplibError::VertexOutOfRange { vertex: 6, len: 5 })
        ));
    }

    #[test]
    fn test_short_coordinate_line() {
        let err = parse_instance("NODE_COORD_SECTION\n1 0\n").unwrap_err();
        assert!(matches!(err, TsplibError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_missing_section() {
        assert!(matches!(
            parse_instance("NAME : x\nEOF\n"),
            Err(TsplibError::MissingSection(_))
        ));
    }
}
