use crate::errors::ExtractError;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// The lines of an output file and where they go.
pub struct OutputDocument {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl OutputDocument {
    /// Creates the document. Lines must carry their own terminators.
    pub fn new(path: PathBuf, lines: Vec<String>) -> Self {
        Self { path, lines }
    }

    /// The full text of the file.
    pub fn contents(&self) -> String {
        self.lines.concat()
    }

    /// Write the file
    ///
    /// The whole document is built before the file is created so the file is
    /// written in one go.
    pub fn write(&self) -> Result<(), ExtractError> {
        let contents = self.contents();
        let io_error = |source| ExtractError::Io { file:
                                                       self.path
                                                           .display()
                                                           .to_string(),
                                                   source };
        let mut file = File::create(&self.path).map_err(io_error)?;
        file.write_all(contents.as_bytes()).map_err(io_error)?;
        file.flush().map_err(io_error)?;
        info!("Wrote {} lines to {}", self.lines.len(), self.path.display());
        Ok(())
    }
}
