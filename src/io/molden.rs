use crate::errors::ExtractError;
use crate::filter::{self, Boundary, Predicate};
use crate::io::{self, Extractor, LogFile};
use crate::segment::NotFound;
use std::path::{Path, PathBuf};

/// The last header line, the orbitals follow it.
pub const HEADER_END: &str = "[MO]";
/// First line of every orbital.
pub const ORBITAL_START: &str = "Sym=";
/// The line holding the occupation of an orbital.
pub const OCCUPATION: &str = "Occup=";
/// Whitespace separated field of the occupation line holding the value.
pub const OCCUPATION_FIELD: usize = 1;

/// Keeps the header of a Molden file and the orbitals whose occupation
/// passes `predicate`.
pub fn filter_orbitals(log: &LogFile,
                       predicate: Predicate,
                       boundary: Boundary)
                       -> Result<Vec<String>, ExtractError> {
    let header = filter::header(&log.lines, HEADER_END).ok_or_else(|| {
                     ExtractError::from_selection(&log.name,
                                                  NotFound::Marker(HEADER_END.to_string()))
                 })?;
    let blocks = filter::segment(&log.lines, ORBITAL_START, boundary);
    let orbitals =
        filter::filter_blocks(&blocks, OCCUPATION, OCCUPATION_FIELD, predicate)
            .map_err(|e| ExtractError::from_field(&log.name, e))?;
    Ok(header.iter().chain(orbitals).cloned().collect())
}

/// Keeps only the partially occupied orbitals of a CAS Molden file.
pub struct ActiveSpace {
    pub boundary: Boundary,
}

impl Extractor for ActiveSpace {
    fn output_path(&self, input: &Path) -> PathBuf {
        io::prefixed_path(input, "cas")
    }

    fn extract(&self, log: &LogFile) -> Result<Vec<String>, ExtractError> {
        filter_orbitals(log, Predicate::ACTIVE_SPACE, self.boundary)
    }

    fn success_message(&self, input: &str) -> String {
        format!("> Molden File from {} successfully processed!", input)
    }
}

/// Drops natural transition orbitals at or below an occupation threshold.
pub struct NtoCleaner {
    pub threshold: f64,
    pub boundary: Boundary,
}

impl Extractor for NtoCleaner {
    fn output_path(&self, input: &Path) -> PathBuf {
        io::prefixed_path(input, "nto")
    }

    fn extract(&self, log: &LogFile) -> Result<Vec<String>, ExtractError> {
        filter_orbitals(log, Predicate::Above(self.threshold), self.boundary)
    }

    fn success_message(&self, input: &str) -> String {
        format!("> NTO Molden File from {} successfully cleaned!", input)
    }
}
