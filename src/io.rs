use crate::errors::ExtractError;
use std::path::{Path, PathBuf};

pub mod gaussian;
pub mod molden;
pub mod output;
pub mod reader;

pub use output::OutputDocument;
pub use reader::LogFile;

/// One conversion from a quantum chemistry output file to a simpler file.
/// Each binary drives a single implementor through [`Extractor::run`].
pub trait Extractor {
    /// Where the output for `input` is written.
    fn output_path(&self, input: &Path) -> PathBuf;

    /// Builds the output lines from the input file.
    fn extract(&self, log: &LogFile) -> Result<Vec<String>, ExtractError>;

    /// The message printed once the output is written.
    fn success_message(&self, input: &str) -> String;

    /// Reads `input`, extracts and writes the output. Nothing is written if
    /// the extraction fails.
    fn run(&self, input: &Path) -> Result<OutputDocument, ExtractError> {
        let log = LogFile::open(input)?;
        let lines = self.extract(&log)?;
        let document = OutputDocument::new(self.output_path(input), lines);
        document.write()?;
        Ok(document)
    }
}

/// The file name of `path` up to its first '.'.
fn file_stem_before_dot(path: &Path) -> String {
    let name = file_name(path);
    match name.split('.').next() {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `dir/name.ext` becomes `dir/name.<label>.xyz`.
pub fn xyz_path(input: &Path, label: &str) -> PathBuf {
    input.with_file_name(format!("{}.{}.xyz", file_stem_before_dot(input), label))
}

/// `dir/name` becomes `dir/<prefix>.name`.
pub fn prefixed_path(input: &Path, prefix: &str) -> PathBuf {
    input.with_file_name(format!("{}.{}", prefix, file_name(input)))
}
