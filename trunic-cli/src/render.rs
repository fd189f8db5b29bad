//! ASCII-art rendering of a single glyph.
//!
//! Each alphabet character is a stroke: a fixed set of cells in a
//! 12-row by 5-column grid. Rows 0-4 hold the upper half of the glyph,
//! row 5 the horizontal midline, rows 6-10 the lower half, and row 11 the
//! below-baseline ring drawn by `V`. The cell assignments approximate how
//! the strokes sit in the source script; they are presentation only and
//! carry no analysis meaning.

pub const GRID_ROWS: usize = 12;
pub const GRID_COLS: usize = 5;

const MIDLINE_ROW: usize = 5;

const STROKES: &[(char, &[(usize, usize)])] = &[
    ('1', &[(0, 2), (1, 1), (2, 0)]),
    ('2', &[(2, 2), (3, 2), (4, 2)]),
    ('3', &[(0, 2), (1, 3), (2, 4)]),
    ('4', &[(2, 0), (3, 1), (4, 2)]),
    ('Q', &[(2, 0), (3, 0), (4, 0)]),
    ('W', &[(0, 2), (1, 2), (2, 2)]),
    ('E', &[(2, 4), (3, 3), (4, 2)]),
    ('R', &[(2, 4), (3, 4), (4, 4)]),
    ('A', &[(6, 0), (7, 0), (8, 0)]),
    ('S', &[(6, 2), (7, 2), (8, 2)]),
    ('D', &[(6, 4), (7, 4), (8, 4)]),
    ('F', &[(8, 0), (9, 1), (10, 2)]),
    ('Z', &[(8, 4), (9, 3), (10, 2)]),
    ('X', &[(8, 2), (9, 2), (10, 2)]),
    ('C', &[(6, 0), (7, 1), (8, 2)]),
    ('V', &[(11, 2)]),
];

/// Draw the glyph whose canonical key is `key` into the fixed grid.
///
/// Characters without a stroke entry (there are none in the alphabet, but
/// a stray separator would qualify) are skipped silently.
pub fn render_glyph(key: &str) -> String {
    let mut grid = [[' '; GRID_COLS]; GRID_ROWS];
    for cell in grid[MIDLINE_ROW].iter_mut() {
        *cell = '-';
    }

    for c in key.chars() {
        if let Some((_, cells)) = STROKES.iter().find(|(stroke, _)| *stroke == c) {
            let mark = if c == 'V' { 'o' } else { '*' };
            for &(row, col) in cells.iter() {
                grid[row][col] = mark;
            }
        }
    }

    let mut out = String::with_capacity(GRID_ROWS * (GRID_COLS + 1));
    for row in grid.iter() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
