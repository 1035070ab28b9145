//! Small TSPLIB documents.

/// A five-city EUC_2D instance.
///
/// Cities 1..=4 are the corners of a 3 x 4 rectangle; city 5 sits on the
/// bottom side at x = 2.5, so its distances to cities 1 and 2 are exact halves.
pub const SQUARE_INSTANCE: &str = "\
NAME : square5
COMMENT : rectangle with a point on one side
TYPE : TSP
DIMENSION : 5
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0 0
2 3 0
3 3 4
4 0 4
5 2.5 0
EOF
";

/// A tour over [`SQUARE_INSTANCE`] visiting `1 5 2 3 4`.
pub const SQUARE_TOUR: &str = "\
NAME : square5.tour
TYPE : TOUR
DIMENSION : 5
TOUR_SECTION
1
5
2
3
4
-1
EOF
";

/// Renders `vertices` as a TSPLIB tour document.
pub fn tour_document(name: &str, vertices: &[usize]) -> String {
    let mut s = format!(
        "NAME : {name}\nTYPE : TOUR\nDIMENSION : {}\nTOUR_SECTION\n",
        vertices.len()
    );
    for v in vertices {
        s.push_str(&format!("{v}\n"));
    }
    s.push_str("-1\nEOF\n");
    s
}
