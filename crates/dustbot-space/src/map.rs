//! Text map loading.
//!
//! A map file holds the column count, the row count, then one line per
//! grid row:
//!
//! ```text
//! 4
//! 3
//! @__*
//! _##_
//! *___
//! ```
//!
//! The robot's map files are traditionally UTF-16 encoded;
//! [`decode_map_bytes`] accepts UTF-16 (with or without a byte-order
//! mark) or UTF-8.

use crate::grid::GridWorld;
use dustbot_core::{CellKind, Coord, WorldError};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Character for an obstacle cell.
pub const OBSTACLE: char = '#';
/// Character for a dirty cell.
pub const DIRTY: char = '*';
/// Character for the robot's start cell.
pub const START: char = '@';
/// Character written for free cells. Any unrecognised character reads as free.
pub const FREE: char = '_';

/// Errors from reading or parsing a map file.
#[derive(Debug, Error)]
pub enum MapError {
    /// The file ended before both header lines were read.
    #[error("missing {name} header line")]
    MissingHeader {
        /// `"columns"` or `"rows"`.
        name: &'static str,
    },
    /// A header line is not a positive integer.
    #[error("invalid {name} header: '{value}'")]
    InvalidDimension {
        /// `"columns"` or `"rows"`.
        name: &'static str,
        /// The text that failed to parse.
        value: String,
    },
    /// The file ended before all rows were read.
    #[error("missing row {row}")]
    MissingRow {
        /// 0-indexed row number.
        row: usize,
    },
    /// A row has fewer characters than the declared column count.
    #[error("row {row} has {found} cells, expected {expected}")]
    ShortRow {
        /// 0-indexed row number.
        row: usize,
        /// Declared column count.
        expected: usize,
        /// Characters actually present.
        found: usize,
    },
    /// No `@` marker in the map.
    #[error("map has no start marker '@'")]
    MissingStart,
    /// More than one `@` marker in the map.
    #[error("map has more than one start marker: {first} and {second}")]
    MultipleStarts {
        /// The first marker, in row-major order.
        first: Coord,
        /// The next marker found.
        second: Coord,
    },
    /// The parsed cells do not form a valid world.
    #[error("invalid world: {0}")]
    World(#[from] WorldError),
    /// The bytes are not valid UTF-8 / UTF-16.
    #[error("map is not valid {encoding}")]
    Encoding {
        /// Which encoding was attempted.
        encoding: &'static str,
    },
    /// The file could not be read.
    #[error("failed to read map: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed map: the world and where the robot starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedMap {
    /// The grid world.
    pub world: GridWorld,
    /// Position of the `@` marker.
    pub start: Coord,
}

/// Map a map-file character to its cell kind.
pub fn cell_from_char(ch: char) -> CellKind {
    match ch {
        OBSTACLE => CellKind::Obstacle,
        DIRTY => CellKind::Dirty,
        START => CellKind::Start,
        _ => CellKind::Free,
    }
}

/// Map a cell kind to the character written for it.
pub fn cell_to_char(kind: CellKind) -> char {
    match kind {
        CellKind::Obstacle => OBSTACLE,
        CellKind::Dirty => DIRTY,
        CellKind::Start => START,
        CellKind::Free => FREE,
    }
}

/// Decode raw map bytes to text.
///
/// A UTF-16 byte-order mark (`FF FE` or `FE FF`) selects UTF-16 in that
/// byte order. Without a mark, a NUL in the first two bytes marks
/// UTF-16 text: a map always opens with an ASCII digit, so `d 00` is
/// little-endian and `00 d` big-endian. Anything else is read as UTF-8
/// with an optional UTF-8 byte-order mark stripped.
pub fn decode_map_bytes(bytes: &[u8]) -> Result<String, MapError> {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => utf8(rest),
        [lo, 0, ..] if *lo != 0 => decode_utf16(bytes, u16::from_le_bytes),
        [0, hi, ..] if *hi != 0 => decode_utf16(bytes, u16::from_be_bytes),
        _ => utf8(bytes),
    }
}

fn utf8(bytes: &[u8]) -> Result<String, MapError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| MapError::Encoding { encoding: "UTF-8" })
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, MapError> {
    if bytes.len() % 2 != 0 {
        return Err(MapError::Encoding { encoding: "UTF-16" });
    }
    let units = bytes.chunks_exact(2).map(|p| unit([p[0], p[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| MapError::Encoding { encoding: "UTF-16" })
}

fn parse_dimension(line: Option<&str>, name: &'static str) -> Result<usize, MapError> {
    let line = line.ok_or(MapError::MissingHeader { name })?;
    let value = line.trim();
    match value.parse::<usize>() {
        Ok(n) if n > 0 && n <= GridWorld::MAX_DIM as usize => Ok(n),
        _ => Err(MapError::InvalidDimension {
            name,
            value: value.to_string(),
        }),
    }
}

/// Parse map text (header lines followed by rows).
///
/// Each row keeps its first `columns` characters; anything after that
/// is ignored. Lines after the last declared row are ignored. Header
/// values must lie in `1..=GridWorld::MAX_DIM`.
pub fn parse_map(text: &str) -> Result<LoadedMap, MapError> {
    let mut lines = text.lines();
    let cols = parse_dimension(lines.next(), "columns")?;
    let rows = parse_dimension(lines.next(), "rows")?;

    // Sized by the text, not the header: a header may promise more rows
    // than the file holds.
    let mut grid_rows = Vec::new();
    for row in 0..rows {
        grid_rows.push(lines.next().ok_or(MapError::MissingRow { row })?);
    }
    parse_grid(&grid_rows, cols)
}

/// Parse rows of map characters without a header.
///
/// The column count is the length of the first row; every row must be
/// at least that long.
///
/// # Examples
///
/// ```
/// use dustbot_core::Coord;
/// use dustbot_space::parse_rows;
///
/// let map = parse_rows(&["@_*", "_#_"]).unwrap();
/// assert_eq!(map.start, Coord::new(0, 0));
/// assert_eq!(map.world.dimensions(), (2, 3));
/// ```
pub fn parse_rows(rows: &[&str]) -> Result<LoadedMap, MapError> {
    let cols = rows.first().map_or(0, |r| r.chars().count());
    if rows.is_empty() || cols == 0 {
        return Err(MapError::World(WorldError::EmptyWorld));
    }
    parse_grid(rows, cols)
}

fn parse_grid(rows: &[&str], cols: usize) -> Result<LoadedMap, MapError> {
    let text_len: usize = rows.iter().map(|r| r.len()).sum();
    let mut cells = Vec::with_capacity(rows.len().saturating_mul(cols).min(text_len));
    let mut start: Option<Coord> = None;

    for (r, line) in rows.iter().enumerate() {
        let before = cells.len();
        for (c, ch) in line.chars().take(cols).enumerate() {
            let kind = cell_from_char(ch);
            if kind == CellKind::Start {
                let here = Coord::new(r as i32, c as i32);
                if let Some(first) = start {
                    return Err(MapError::MultipleStarts {
                        first,
                        second: here,
                    });
                }
                start = Some(here);
            }
            cells.push(kind);
        }
        let found = cells.len() - before;
        if found < cols {
            return Err(MapError::ShortRow {
                row: r,
                expected: cols,
                found,
            });
        }
    }

    let start = start.ok_or(MapError::MissingStart)?;
    let rows_u32 = u32::try_from(rows.len()).unwrap_or(u32::MAX);
    let cols_u32 = u32::try_from(cols).unwrap_or(u32::MAX);
    let world = GridWorld::new(rows_u32, cols_u32, cells)?;
    Ok(LoadedMap { world, start })
}

/// Read, decode, and parse a map file.
pub fn load_map(path: impl AsRef<Path>) -> Result<LoadedMap, MapError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let text = decode_map_bytes(&bytes)?;
    let map = parse_map(&text)?;
    debug!(
        path = %path.display(),
        rows = map.world.rows(),
        cols = map.world.cols(),
        start = %map.start,
        dirty = map.world.dirty_cells().len(),
        "loaded map"
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "4\n3\n@__*\n_##_\n*___\n";

    fn utf16le_with_bom(s: &str) -> Vec<u8> {
        let mut out = vec![0xFF, 0xFE];
        for u in s.encode_utf16() {
            out.extend_from_slice(&u.to_le_bytes());
        }
        out
    }

    // ── Character mapping ───────────────────────────────────────

    #[test]
    fn char_mapping_round_trips_known_kinds() {
        for kind in [CellKind::Free, CellKind::Obstacle, CellKind::Dirty, CellKind::Start] {
            assert_eq!(cell_from_char(cell_to_char(kind)), kind);
        }
        assert_eq!(cell_from_char('.'), CellKind::Free);
        assert_eq!(cell_from_char(' '), CellKind::Free);
    }

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_sample() {
        let map = parse_map(SAMPLE).unwrap();
        assert_eq!(map.start, Coord::new(0, 0));
        assert_eq!(map.world.dimensions(), (3, 4));
        assert_eq!(map.world.cell_at(Coord::new(0, 3)), Some(CellKind::Dirty));
        assert_eq!(map.world.cell_at(Coord::new(1, 1)), Some(CellKind::Obstacle));
        assert_eq!(map.world.dirty_cells(), vec![Coord::new(0, 3), Coord::new(2, 0)]);
    }

    #[test]
    fn parse_handles_crlf_and_long_rows() {
        let map = parse_map("2\r\n2\r\n@*xyz\r\n__\r\ntrailing\r\n").unwrap();
        assert_eq!(map.world.dimensions(), (2, 2));
        assert_eq!(map.world.render(), "@*\n__\n");
    }

    #[test]
    fn parse_missing_header() {
        assert!(matches!(
            parse_map("3\n"),
            Err(MapError::MissingHeader { name: "rows" })
        ));
        assert!(matches!(
            parse_map(""),
            Err(MapError::MissingHeader { name: "columns" })
        ));
    }

    #[test]
    fn parse_invalid_dimension() {
        assert!(matches!(
            parse_map("three\n1\n@__\n"),
            Err(MapError::InvalidDimension { name: "columns", .. })
        ));
        assert!(matches!(
            parse_map("3\n0\n"),
            Err(MapError::InvalidDimension { name: "rows", .. })
        ));
    }

    #[test]
    fn parse_rejects_dimension_past_grid_limit() {
        assert!(matches!(
            parse_map("1\n1000000000000000000\n@\n"),
            Err(MapError::InvalidDimension { name: "rows", .. })
        ));
        assert!(matches!(
            parse_map("18446744073709551615\n1\n@\n"),
            Err(MapError::InvalidDimension { name: "columns", .. })
        ));
        assert!(matches!(
            parse_map("2147483648\n1\n@\n"),
            Err(MapError::InvalidDimension { name: "columns", .. })
        ));
    }

    #[test]
    fn parse_oversized_header_reports_missing_row() {
        assert!(matches!(
            parse_map("1\n2147483647\n@\n"),
            Err(MapError::MissingRow { row: 1 })
        ));
        assert!(matches!(
            parse_map("2147483647\n1\n@_*\n"),
            Err(MapError::ShortRow {
                row: 0,
                expected: 2147483647,
                found: 3
            })
        ));
    }

    #[test]
    fn parse_missing_and_short_rows() {
        assert!(matches!(
            parse_map("2\n2\n@_\n"),
            Err(MapError::MissingRow { row: 1 })
        ));
        assert!(matches!(
            parse_map("3\n2\n@__\n_\n"),
            Err(MapError::ShortRow {
                row: 1,
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn parse_start_marker_errors() {
        assert!(matches!(parse_map("2\n1\n__\n"), Err(MapError::MissingStart)));
        assert!(matches!(
            parse_map("2\n2\n@_\n_@\n"),
            Err(MapError::MultipleStarts { .. })
        ));
    }

    #[test]
    fn parse_rows_uses_first_row_width() {
        let map = parse_rows(&["@*", "##"]).unwrap();
        assert_eq!(map.world.dimensions(), (2, 2));
        assert!(matches!(
            parse_rows(&[]),
            Err(MapError::World(WorldError::EmptyWorld))
        ));
    }

    // ── Decoding ────────────────────────────────────────────────

    #[test]
    fn decode_utf16_le_bom() {
        let bytes = utf16le_with_bom(SAMPLE);
        assert_eq!(decode_map_bytes(&bytes).unwrap(), SAMPLE);
    }

    #[test]
    fn decode_utf16_be_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for u in SAMPLE.encode_utf16() {
            bytes.extend_from_slice(&u.to_be_bytes());
        }
        assert_eq!(decode_map_bytes(&bytes).unwrap(), SAMPLE);
    }

    #[test]
    fn decode_utf16_without_bom() {
        let le: Vec<u8> = SAMPLE.encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(decode_map_bytes(&le).unwrap(), SAMPLE);
        let be: Vec<u8> = SAMPLE.encode_utf16().flat_map(u16::to_be_bytes).collect();
        assert_eq!(decode_map_bytes(&be).unwrap(), SAMPLE);

        let map = parse_map(&decode_map_bytes(&le).unwrap()).unwrap();
        assert_eq!(map.world.dimensions(), (3, 4));
        assert_eq!(map.start, Coord::new(0, 0));
    }

    #[test]
    fn decode_utf8_with_and_without_bom() {
        assert_eq!(decode_map_bytes(SAMPLE.as_bytes()).unwrap(), SAMPLE);
        let mut bom = vec![0xEF, 0xBB, 0xBF];
        bom.extend_from_slice(SAMPLE.as_bytes());
        assert_eq!(decode_map_bytes(&bom).unwrap(), SAMPLE);
    }

    #[test]
    fn decode_rejects_odd_utf16() {
        assert!(matches!(
            decode_map_bytes(&[0xFF, 0xFE, 0x40]),
            Err(MapError::Encoding { encoding: "UTF-16" })
        ));
    }

    #[test]
    fn decode_rejects_bad_utf8() {
        assert!(matches!(
            decode_map_bytes(&[0xC3, 0x28]),
            Err(MapError::Encoding { encoding: "UTF-8" })
        ));
    }
}
