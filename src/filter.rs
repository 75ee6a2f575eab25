use crate::segment::{find_last, find_markers};
use log::{debug, warn};
use std::fmt::{Debug, Display};

/// Lower bound of the active space window, orbitals at or below it are empty.
pub const EMPTY_OCCUPATION: f64 = 0.000001;
/// Upper bound of the active space window, orbitals at or above it are full.
pub const FULL_OCCUPATION: f64 = 2.000000;
/// Default occupation threshold for natural transition orbitals.
pub const DEFAULT_NTO_THRESHOLD: f64 = 0.01;

/// Where the final block ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Blocks run between consecutive delimiters, anything after the final
    /// delimiter is discarded.
    Paired,
    /// The final block runs to the end of the file.
    ToEnd,
}

impl Default for Boundary {
    fn default() -> Self {
        Self::Paired
    }
}

/// A contiguous run of lines starting at a delimiter line.
#[derive(Debug, PartialEq)]
pub struct Block<'a> {
    /// Position of the delimiter line in the file.
    pub start: usize,
    /// The lines of the block, delimiter included.
    pub lines: &'a [String],
}

/// Decides whether a block is kept from the value of its numeric field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Predicate {
    /// Keep when `lower < value < upper`.
    Window { lower: f64, upper: f64 },
    /// Keep when `value > threshold`.
    Above(f64),
}

impl Predicate {
    /// Partially occupied orbitals only.
    pub const ACTIVE_SPACE: Predicate =
        Predicate::Window { lower: EMPTY_OCCUPATION,
                            upper: FULL_OCCUPATION };

    /// Whether a block with this value is kept.
    pub fn keeps(&self, value: f64) -> bool {
        match *self {
            Self::Window { lower, upper } => value > lower && value < upper,
            Self::Above(threshold) => value > threshold,
        }
    }
}

/// Failure to read the numeric field of a block. Positions are 0-based.
#[derive(PartialEq)]
pub enum FieldError {
    /// No line of the block contains the field marker.
    Missing { block_start: usize, marker: String },
    /// The field is absent or not a float.
    Unparsable {
        position: usize,
        field_index: usize,
        text: String,
    },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { block_start, marker } => write!(
                f,
                "No \"{}\" line in the block starting on line {}",
                marker,
                block_start + 1
            ),
            Self::Unparsable { position,
                               field_index,
                               text, } => write!(
                f,
                "Field {} of line {} (\"{}\") is not a number",
                field_index + 1,
                position + 1,
                text
            ),
        }
    }
}

impl Debug for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Everything up to and including the last line containing `marker`.
pub fn header<'a>(lines: &'a [String], marker: &str) -> Option<&'a [String]> {
    find_last(lines, marker).map(|end| &lines[..=end])
}

/// Splits the file into blocks that each start on a line containing
/// `delimiter`.
pub fn segment<'a>(lines: &'a [String],
                   delimiter: &str,
                   boundary: Boundary)
                   -> Vec<Block<'a>> {
    let markers = find_markers(lines, delimiter);
    debug!("Found {} \"{}\" delimiters", markers.len(), delimiter);
    let mut blocks = markers.windows(2)
                            .map(|pair| Block { start: pair[0],
                                                lines: &lines[pair[0]..pair[1]] })
                            .collect::<Vec<Block>>();
    if let Some(&last) = markers.last() {
        match boundary {
            Boundary::ToEnd => blocks.push(Block { start: last,
                                                   lines: &lines[last..] }),
            Boundary::Paired => {
                warn!("Discarding the {} lines from the last \"{}\" on line {}",
                      lines.len() - last,
                      delimiter,
                      last + 1)
            }
        }
    }
    blocks
}

/// Reads the float in whitespace separated field `field_index` of the first
/// line of `block` containing `field_marker`.
pub fn extract_numeric_field(block: &Block,
                             field_marker: &str,
                             field_index: usize)
                             -> Result<f64, FieldError> {
    let offset = block.lines
                      .iter()
                      .position(|line| line.contains(field_marker))
                      .ok_or_else(|| FieldError::Missing { block_start: block.start,
                                                           marker: field_marker.to_string() })?;
    let text = block.lines[offset].split_whitespace()
                                  .nth(field_index)
                                  .unwrap_or("");
    text.parse::<f64>()
        .map_err(|_| FieldError::Unparsable { position: block.start + offset,
                                              field_index,
                                              text: text.to_string() })
}

/// Concatenates, in order, the lines of every block whose field passes
/// `predicate`.
pub fn filter_blocks<'a>(blocks: &[Block<'a>],
                         field_marker: &str,
                         field_index: usize,
                         predicate: Predicate)
                         -> Result<Vec<&'a String>, FieldError> {
    let mut kept = Vec::new();
    let mut count = 0;
    for block in blocks {
        let value = extract_numeric_field(block, field_marker, field_index)?;
        if predicate.keeps(value) {
            kept.extend(block.lines.iter());
            count += 1;
        }
    }
    debug!("Kept {} of {} blocks with {:?}", count, blocks.len(), predicate);
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split_inclusive('\n').map(String::from).collect()
    }

    fn molden() -> Vec<String> {
        lines("[Molden Format]\n\
               [MO]\n\
               Sym= 1a\n\
               Occup= 2.000000\n\
               1 0.5\n\
               Sym= 2a\n\
               Occup= 1.500000\n\
               1 0.4\n\
               Sym= 3a\n\
               Occup= 0.000000\n\
               1 0.3\n")
    }

    #[test]
    fn header_ends_at_marker() {
        let m = molden();
        assert_eq!(header(&m, "[MO]"), Some(&m[..2]));
    }

    #[test]
    fn header_uses_last_marker() {
        let m = lines("[MO]\na\n[MO]\nb\n");
        assert_eq!(header(&m, "[MO]").map(|h| h.len()), Some(3));
    }

    #[test]
    fn header_missing() {
        let m = lines("[Molden Format]\nSym= 1a\n");
        assert_eq!(header(&m, "[MO]"), None);
    }

    #[test]
    fn segment_paired_drops_last() {
        let m = molden();
        let blocks = segment(&m, "Sym=", Boundary::Paired);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], Block { start: 2, lines: &m[2..5] });
        assert_eq!(blocks[1], Block { start: 5, lines: &m[5..8] });
    }

    #[test]
    fn segment_to_end_keeps_last() {
        let m = molden();
        let blocks = segment(&m, "Sym=", Boundary::ToEnd);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[2], Block { start: 8, lines: &m[8..] });
    }

    #[test]
    fn segment_no_delimiters() {
        let m = lines("[MO]\n");
        assert!(segment(&m, "Sym=", Boundary::ToEnd).is_empty());
        assert!(segment(&m, "Sym=", Boundary::Paired).is_empty());
    }

    #[test]
    fn extract_field() {
        let m = molden();
        let blocks = segment(&m, "Sym=", Boundary::ToEnd);
        let values = blocks.iter()
                           .map(|b| extract_numeric_field(b, "Occup=", 1).unwrap())
                           .collect::<Vec<f64>>();
        assert_eq!(values, vec![2.0, 1.5, 0.0]);
    }

    #[test]
    fn extract_field_missing() {
        let m = lines("Sym= 1a\n1 0.5\nSym= 2a\n");
        let blocks = segment(&m, "Sym=", Boundary::Paired);
        assert_eq!(extract_numeric_field(&blocks[0], "Occup=", 1),
                   Err(FieldError::Missing { block_start: 0,
                                             marker: String::from("Occup=") }));
    }

    #[test]
    fn extract_field_unparsable() {
        let m = lines("Sym= 1a\nOccup= two\nSym= 2a\n");
        let blocks = segment(&m, "Sym=", Boundary::Paired);
        assert_eq!(extract_numeric_field(&blocks[0], "Occup=", 1),
                   Err(FieldError::Unparsable { position: 1,
                                                field_index: 1,
                                                text: String::from("two") }));
    }

    #[test]
    fn active_space_window() {
        let p = Predicate::ACTIVE_SPACE;
        assert!(p.keeps(1.5));
        assert!(p.keeps(0.00001));
        assert!(!p.keeps(2.0));
        assert!(!p.keeps(0.000001));
        assert!(!p.keeps(0.0));
    }

    #[test]
    fn threshold() {
        let p = Predicate::Above(DEFAULT_NTO_THRESHOLD);
        assert!(p.keeps(0.02));
        assert!(!p.keeps(0.01));
        assert!(!p.keeps(0.005));
    }

    #[test]
    fn filter_keeps_block_lines_in_order() {
        let m = molden();
        let blocks = segment(&m, "Sym=", Boundary::ToEnd);
        let kept = filter_blocks(&blocks, "Occup=", 1, Predicate::ACTIVE_SPACE).unwrap();
        assert_eq!(kept, m[5..8].iter().collect::<Vec<&String>>());
    }

    #[test]
    fn filter_propagates_field_error() {
        let m = lines("Sym= 1a\nOccup=\nSym= 2a\n");
        let blocks = segment(&m, "Sym=", Boundary::Paired);
        assert!(filter_blocks(&blocks, "Occup=", 1, Predicate::ACTIVE_SPACE).is_err());
    }
}
