use log::debug;
use std::fmt::{Debug, Display};

/// Which occurrence of a marker to select.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The occurrence at this 0-based index.
    Absolute(usize),
    /// An index counted back from the total step count, -1 being the final
    /// step. Only negative values are meaningful.
    Relative(isize),
    /// The last occurrence at or after the convergence sentinel.
    Optimized,
}

impl Selection {
    /// The final step of the run.
    pub const LAST: Selection = Selection::Relative(-1);

    /// Builds the selection for a signed cycle number, positive values are
    /// absolute and negative values are relative to the last step.
    pub fn from_cycle(cycle: isize) -> Self {
        if cycle < 0 {
            Self::Relative(cycle)
        } else {
            Self::Absolute(cycle as usize)
        }
    }
}

impl Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute(n) => write!(f, "Absolute({})", n),
            Self::Relative(k) => write!(f, "Relative({})", k),
            Self::Optimized => write!(f, "Optimized"),
        }
    }
}

/// The markers whose lines anchor the relative and optimized selections.
pub struct Sentinels<'a> {
    /// Marks the step counter line, the last one holds the total step count.
    pub step_count: &'a str,
    /// Whitespace separated field of the step counter line holding the count.
    pub step_field: usize,
    /// Marks convergence of the run.
    pub convergence: &'a str,
}

/// Why a selection could not be resolved. Positions are 0-based.
#[derive(PartialEq)]
pub enum NotFound {
    /// A required marker is absent from the file.
    Marker(String),
    /// Fewer occurrences of the marker than the index asked for.
    Occurrence {
        marker: String,
        index: usize,
        available: usize,
    },
    /// A relative index that lands before the first step.
    BeforeFirstStep { target: isize, total: usize },
    /// No occurrence of the marker at or after the convergence sentinel.
    AfterSentinel { marker: String, sentinel: String },
    /// The step counter line has no integer where the count should be.
    StepCount { position: usize, text: String },
    /// A block lacks the line carrying its field.
    InBlock { block_start: usize, marker: String },
    /// A data block runs past the end of the file.
    Truncated {
        start: usize,
        rows: usize,
        available: usize,
    },
}

impl Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Marker(marker) => {
                write!(f, "Marker \"{}\" was not found", marker)
            }
            Self::Occurrence { marker,
                               index,
                               available, } => write!(
                f,
                "Cycle {} of \"{}\" was not found, only {} present",
                index, marker, available
            ),
            Self::BeforeFirstStep { target, total } => {
                write!(f, "Cycle {} was not found in {} cycles", target, total)
            }
            Self::AfterSentinel { marker, sentinel } => write!(
                f,
                "No \"{}\" follows \"{}\"",
                marker, sentinel
            ),
            Self::StepCount { position, text } => write!(
                f,
                "Step count \"{}\" on line {} is not an integer",
                text,
                position + 1
            ),
            Self::InBlock { block_start, marker } => write!(
                f,
                "Marker \"{}\" was not found in the block starting on line {}",
                marker,
                block_start + 1
            ),
            Self::Truncated { start,
                              rows,
                              available, } => write!(
                f,
                "Block of {} rows starting on line {} is cut short after {} rows",
                rows,
                start + 1,
                available
            ),
        }
    }
}

impl Debug for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Positions of every line containing `marker`, in file order.
pub fn find_markers(lines: &[String], marker: &str) -> Vec<usize> {
    lines.iter()
         .enumerate()
         .filter_map(|(i, line)| if line.contains(marker) { Some(i) } else { None })
         .collect()
}

/// Position of the first line containing `marker`.
pub fn find_first(lines: &[String], marker: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(marker))
}

/// Position of the last line containing `marker`.
pub fn find_last(lines: &[String], marker: &str) -> Option<usize> {
    lines.iter().rposition(|line| line.contains(marker))
}

/// Reads the total step count from the last step counter line.
pub fn step_count(lines: &[String],
                  sentinels: &Sentinels)
                  -> Result<usize, NotFound> {
    let position = find_last(lines, sentinels.step_count)
        .ok_or_else(|| NotFound::Marker(sentinels.step_count.to_string()))?;
    let text = lines[position].split_whitespace()
                              .nth(sentinels.step_field)
                              .unwrap_or("");
    text.parse::<usize>()
        .map_err(|_| NotFound::StepCount { position,
                                           text: text.to_string() })
}

/// Resolves `selection` against the occurrences of `marker` to the position
/// of a single marker line.
///
/// * `lines`: The whole file.
/// * `markers`: The output of [`find_markers`] for `marker`.
/// * `marker`: The marker, used for error reporting.
/// * `selection`: Which occurrence to pick.
/// * `sentinels`: The step counter and convergence markers.
pub fn resolve(lines: &[String],
               markers: &[usize],
               marker: &str,
               selection: Selection,
               sentinels: &Sentinels)
               -> Result<usize, NotFound> {
    let occurrence = |index: usize| {
        markers.get(index)
               .copied()
               .ok_or_else(|| NotFound::Occurrence { marker: marker.to_string(),
                                                     index,
                                                     available: markers.len() })
    };
    let position = match selection {
        Selection::Absolute(n) => occurrence(n)?,
        Selection::Relative(k) => {
            let total = step_count(lines, sentinels)?;
            let target = total as isize + k;
            debug!("Relative cycle {} of {} steps targets occurrence {}",
                   k,
                   total,
                   target);
            if target < 0 {
                return Err(NotFound::BeforeFirstStep { target, total });
            }
            occurrence(target as usize)?
        }
        Selection::Optimized => {
            let sentinel = find_first(lines, sentinels.convergence)
                .ok_or_else(|| NotFound::Marker(sentinels.convergence.to_string()))?;
            // every occurrence past the sentinel overrides the previous one
            markers.iter()
                   .filter(|&&p| p >= sentinel)
                   .last()
                   .copied()
                   .ok_or_else(|| NotFound::AfterSentinel {
                       marker: marker.to_string(),
                       sentinel: sentinels.convergence.to_string(),
                   })?
        }
    };
    debug!("{:?} of \"{}\" resolved to line {}",
           selection,
           marker,
           position + 1);
    Ok(position)
}

/// The `rows` lines starting `offset` lines after `position`.
pub fn data_block(lines: &[String],
                  position: usize,
                  offset: usize,
                  rows: usize)
                  -> Result<&[String], NotFound> {
    let start = position + offset;
    let end = start + rows;
    if end > lines.len() {
        return Err(NotFound::Truncated { start,
                                         rows,
                                         available: lines.len().saturating_sub(start) });
    }
    Ok(&lines[start..end])
}
