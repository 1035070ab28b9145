//! `TOUR_SECTION` reader.

use std::path::Path;

use tourdiff_core::{Tour, Vertex};

use crate::error::TsplibError;

const TOUR_SECTION: &str = "TOUR_SECTION";

/// Parses the tour section of a TSPLIB tour document.
///
/// Reading starts on the line after `TOUR_SECTION` and stops at the first
/// line containing `-1` or `EOF`, or at an empty line. The first field of
/// every line in between is a vertex id; ids are kept 1-based.
pub fn parse_tour(text: &str) -> Result<Tour, TsplibError> {
    let mut lines = text.lines().enumerate();
    if !lines.any(|(_, line)| line.contains(TOUR_SECTION)) {
        return Err(TsplibError::MissingSection(TOUR_SECTION));
    }

    let mut vertices = Vec::new();
    for (index, line) in lines {
        let line = line.trim();
        if line.contains("-1") || line.contains("EOF") || line.is_empty() {
            break;
        }
        let field = line.split_whitespace().next().unwrap_or(line);
        let vertex: Vertex = field.parse().map_err(|e| TsplibError::Parse {
            line: index + 1,
            message: format!("bad vertex id '{field}': {e}"),
        })?;
        vertices.push(vertex);
    }
    Ok(Tour::new(vertices))
}

/// Reads a TSPLIB tour file.
pub fn read_tour(path: impl AsRef<Path>) -> Result<Tour, TsplibError> {
    let text = std::fs::read_to_string(path)?;
    parse_tour(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourdiff_test::tsplib::{tour_document, SQUARE_TOUR};

    #[test]
    fn test_parse_tour() {
        let tour = parse_tour(SQUARE_TOUR).unwrap();
        assert_eq!(tour.vertices(), &[1, 5, 2, 3, 4]);
    }

    #[test]
    fn test_parse_tour_stops_at_empty_line() {
        let tour = parse_tour("TOUR_SECTION\n3\n1\n\n2\n").unwrap();
        assert_eq!(tour.vertices(), &[3, 1]);
    }

    #[test]
    fn test_parse_tour_uses_first_field() {
        let tour = parse_tour("TOUR_SECTION\n  4 ignored\n2\nEOF\n").unwrap();
        assert_eq!(tour.vertices(), &[4, 2]);
    }

    #[test]
    fn test_parse_tour_missing_section() {
        assert!(matches!(
            parse_tour("NAME : x\n1\n2\n"),
            Err(TsplibError::MissingSection(_))
        ));
    }

    #[test]
    fn test_parse_tour_bad_id() {
        let err = parse_tour("NAME : x\nTOUR_SECTION\n1\nabc\n").unwrap_err();
        assert!(matches!(err, TsplibError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_read_tour_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.tour");
        std::fs::write(&path, tour_document("a", &[2, 4, 1, 3])).unwrap();
        assert_eq!(read_tour(&path).unwrap().vertices(), &[2, 4, 1, 3]);
    }
}
