use crate::errors::ExtractError;
use crate::io::{self, Extractor, LogFile};
use crate::record::{self, parse_row, Record, GEOMETRY};
use crate::segment::{self, find_first, find_markers, resolve, Selection, Sentinels};
use log::debug;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Marks the line whose second field is the number of atoms.
pub const ATOM_COUNT: &str = "NAtoms";
/// Lines between an orientation marker and its first atom row.
pub const HEADER_ROWS: usize = 5;
/// The step counter and convergence lines of an optimization.
pub const SENTINELS: Sentinels<'static> =
    Sentinels { step_count: "Step number",
                step_field: 2,
                convergence: "Stationary point found" };

/// The frame a Gaussian geometry table is printed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Input,
    Standard,
    ZMatrix,
}

impl Orientation {
    /// The line that heads a table in this frame.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Input => "Input orientation:",
            Self::Standard => "Standard orientation:",
            Self::ZMatrix => "Z-Matrix orientation:",
        }
    }

    /// Parses the command-line name of a frame.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "input" => Some(Self::Input),
            "standard" => Some(Self::Standard),
            "zmat" => Some(Self::ZMatrix),
            _ => None,
        }
    }
}

/// Which geometry of the optimization to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The converged geometry.
    Optimized,
    /// A cycle counted from 0, or back from the last cycle when negative.
    Cycle(isize),
}

impl Step {
    pub fn selection(&self) -> Selection {
        match *self {
            Self::Optimized => Selection::Optimized,
            Self::Cycle(n) => Selection::from_cycle(n),
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimized => write!(f, "opt"),
            Self::Cycle(n) => write!(f, "{}", n),
        }
    }
}

/// Reads the number of atoms from the first line containing "NAtoms".
pub fn atom_count(log: &LogFile) -> Result<usize, ExtractError> {
    let position = find_first(&log.lines, ATOM_COUNT).ok_or_else(|| {
        ExtractError::from_selection(&log.name,
                                     segment::NotFound::Marker(ATOM_COUNT.to_string()))
    })?;
    let text = log.lines[position].split_whitespace().nth(1).unwrap_or("");
    text.parse::<usize>()
        .map_err(|_| ExtractError::MalformedRow { file: log.name.clone(),
                                                  line: position + 1,
                                                  reason: format!("atom count \"{}\" is not an integer",
                                                                  text) })
}

/// Finds the atom rows of the selected geometry. Returns the position of the
/// first row and the rows.
pub fn select_rows<'a>(log: &'a LogFile,
                       orientation: Orientation,
                       step: Step)
                       -> Result<(usize, &'a [String]), ExtractError> {
    let atoms = atom_count(log)?;
    let marker = orientation.marker();
    let markers = find_markers(&log.lines, marker);
    debug!("{} has {} atoms and {} \"{}\" tables",
           log.name,
           atoms,
           markers.len(),
           marker);
    let position = resolve(&log.lines,
                           &markers,
                           marker,
                           step.selection(),
                           &SENTINELS).map_err(|e| {
                                          ExtractError::from_selection(&log.name, e)
                                      })?;
    let rows = segment::data_block(&log.lines, position, HEADER_ROWS, atoms)
        .map_err(|e| ExtractError::from_selection(&log.name, e))?;
    Ok((position + HEADER_ROWS, rows))
}

/// Splits each atom row into a geometry record.
pub fn parse_geometry(log: &LogFile,
                      first_row: usize,
                      rows: &[String])
                      -> Result<Vec<Record<'static>>, ExtractError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            parse_row(row, &GEOMETRY).map_err(|e| {
                                         ExtractError::from_row(&log.name,
                                                                first_row + i,
                                                                e)
                                     })
        })
        .collect()
}

/// Exports one geometry of a Gaussian optimization to an xyz file.
pub struct Geometry {
    pub orientation: Orientation,
    pub step: Step,
}

impl Extractor for Geometry {
    fn output_path(&self, input: &Path) -> PathBuf {
        io::xyz_path(input, &self.step.to_string())
    }

    fn extract(&self, log: &LogFile) -> Result<Vec<String>, ExtractError> {
        let (first_row, rows) = select_rows(log, self.orientation, self.step)?;
        let records = parse_geometry(log, first_row, rows)?;
        // the only row error left is a bad atomic number, find which row
        record::xyz_lines(&records).map_err(|e| {
            let row = records.iter()
                             .position(|r| record::render(r, &record::XYZ_COLUMNS).is_err())
                             .unwrap_or(0);
            ExtractError::from_row(&log.name, first_row + row, e)
        })
    }

    fn success_message(&self, input: &str) -> String {
        format!("> Geometry from {} successfully exported to XYZ file!",
                input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(coords: [&str; 3]) -> String {
        format!(" ---------------------------------------------------------------------\n\
                 \x20Center     Atomic      Atomic             Coordinates (Angstroms)\n\
                 \x20Number     Number       Type             X           Y           Z\n\
                 \x20---------------------------------------------------------------------\n\
                 \x20     1          8           0        0.000000    0.000000    {}\n\
                 \x20     2          1           0        0.000000    0.763239   {}\n\
                 \x20     3          1           0        0.000000   -0.763239   {}\n\
                 \x20---------------------------------------------------------------------\n",
                coords[0], coords[1], coords[2])
    }

    fn three_step_log() -> LogFile {
        let mut text = String::from(" NAtoms=      3 NQM=        3\n");
        for (i, z) in ["0.110000", "0.120000", "0.130000"].iter().enumerate() {
            text.push_str("                          Input orientation:\n");
            text.push_str(&table([*z, "-0.470000", "-0.470000"]));
            text.push_str(&format!(" Step number   {} out of a maximum of   20\n", i + 1));
        }
        LogFile::from_text("water.log", &text)
    }

    #[test]
    fn orientation_markers() {
        assert_eq!(Orientation::Input.marker(), "Input orientation:");
        assert_eq!(Orientation::Standard.marker(), "Standard orientation:");
        assert_eq!(Orientation::ZMatrix.marker(), "Z-Matrix orientation:");
    }

    #[test]
    fn orientation_names() {
        assert_eq!(Orientation::from_name("input"), Some(Orientation::Input));
        assert_eq!(Orientation::from_name("standard"),
                   Some(Orientation::Standard));
        assert_eq!(Orientation::from_name("zmat"), Some(Orientation::ZMatrix));
        assert_eq!(Orientation::from_name("Input"), None);
    }

    #[test]
    fn step_labels() {
        assert_eq!(Step::Optimized.to_string(), "opt");
        assert_eq!(Step::Cycle(2).to_string(), "2");
        assert_eq!(Step::Cycle(-1).to_string(), "-1");
    }

    #[test]
    fn atom_count_from_natoms() {
        assert_eq!(atom_count(&three_step_log()).unwrap(), 3);
    }

    #[test]
    fn atom_count_missing() {
        let log = LogFile::from_text("water.log", "Input orientation:\n");
        assert!(matches!(atom_count(&log),
                         Err(ExtractError::MarkerNotFound { .. })));
    }

    #[test]
    fn atom_count_unparsable() {
        let log = LogFile::from_text("water.log", " NAtoms= x\n");
        assert!(matches!(atom_count(&log),
                         Err(ExtractError::MalformedRow { line: 1, .. })));
    }

    #[test]
    fn second_cycle_rows() {
        let log = three_step_log();
        let (first, rows) =
            select_rows(&log, Orientation::Input, Step::Cycle(1)).unwrap();
        let markers = find_markers(&log.lines, "Input orientation:");
        assert_eq!(first, markers[1] + 5);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].trim_end().ends_with("0.120000"));
    }

    #[test]
    fn last_cycle_rows() {
        let log = three_step_log();
        let (_, rows) =
            select_rows(&log, Orientation::Input, Step::Cycle(-1)).unwrap();
        assert!(rows[0].trim_end().ends_with("0.130000"));
    }

    #[test]
    fn missing_cycle() {
        let log = three_step_log();
        let r = select_rows(&log, Orientation::Input, Step::Cycle(5));
        assert!(matches!(r, Err(ExtractError::MarkerNotFound { .. })));
    }

    #[test]
    fn missing_orientation() {
        let log = three_step_log();
        let r = select_rows(&log, Orientation::Standard, Step::Cycle(0));
        assert!(matches!(r, Err(ExtractError::MarkerNotFound { .. })));
    }

    #[test]
    fn optimized_needs_stationary_point() {
        let log = three_step_log();
        let r = select_rows(&log, Orientation::Input, Step::Optimized);
        match r {
            Err(e) => assert_eq!(e.to_string(),
                                 "Marker \"Stationary point found\" was not found in water.log."),
            Ok(_) => panic!("Expected an error"),
        }
    }

    #[test]
    fn extract_xyz() {
        let log = three_step_log();
        let geometry = Geometry { orientation: Orientation::Input,
                                  step: Step::Cycle(0) };
        let lines = geometry.extract(&log).unwrap();
        assert_eq!(lines.concat(),
                   "3\n\n\
                    O\t  0.000000\t  0.000000\t  0.110000\n\
                    H\t  0.000000\t  0.763239\t -0.470000\n\
                    H\t  0.000000\t -0.763239\t -0.470000\n");
    }

    #[test]
    fn extract_malformed_row() {
        let text = " NAtoms=      2\n Input orientation:\n -\n -\n -\n -\n 1 8 0 0.0 0.0 0.0\n 2 1 0 0.0\n";
        let log = LogFile::from_text("bad.log", text);
        let geometry = Geometry { orientation: Orientation::Input,
                                  step: Step::Cycle(0) };
        assert!(matches!(geometry.extract(&log),
                         Err(ExtractError::MalformedRow { line: 8, .. })));
    }

    #[test]
    fn extract_unknown_element() {
        let text = " NAtoms=      2\n Input orientation:\n -\n -\n -\n -\n 1 8 0 0.0 0.0 0.0\n 2 300 0 0.0 0.0 0.0\n";
        let log = LogFile::from_text("bad.log", text);
        let geometry = Geometry { orientation: Orientation::Input,
                                  step: Step::Cycle(0) };
        match geometry.extract(&log) {
            Err(ExtractError::UnknownElementCode { line, code, .. }) => {
                assert_eq!(line, 8);
                assert_eq!(code, "300");
            }
            _ => panic!("Expected UnknownElementCode"),
        }
    }

    #[test]
    fn output_path_uses_step() {
        let geometry = Geometry { orientation: Orientation::Input,
                                  step: Step::Optimized };
        assert_eq!(geometry.output_path(Path::new("water.log")),
                   PathBuf::from("water.opt.xyz"));
    }
}
