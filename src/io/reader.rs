use crate::errors::ExtractError;
use log::info;
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;

/// Read a file into a mutable buffer
pub struct BufReader {
    reader: io::BufReader<File>,
}

impl BufReader {
    /// Opens the file from the path into a reader
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);

        Ok(Self { reader })
    }

    /// Reads a line from the buffer reader to mutable string
    pub fn read_line<'buf>(&mut self,
                           buffer: &'buf mut String)
                           -> Option<io::Result<(&'buf mut String, usize)>>
    {
        buffer.clear();

        self.reader
            .read_line(buffer)
            .map(|u| if u == 0 { None } else { Some((buffer, u)) })
            .transpose()
    }
}

/// A whole input file held as lines. Each line keeps its terminator so
/// lines can be written back out unchanged.
pub struct LogFile {
    /// The path as given by the user, used in messages.
    pub name: String,
    /// The lines of the file, a line's position is its index.
    pub lines: Vec<String>,
}

impl LogFile {
    /// Reads the file at `path` into memory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        if !path.is_file() {
            return Err(ExtractError::FileNotFound { file: name });
        }
        let io_error = |source| ExtractError::Io { file: name.clone(),
                                                   source };
        let mut reader = BufReader::open(path).map_err(io_error)?;
        let mut buffer = String::new();
        let mut lines = Vec::new();
        while let Some(line) = reader.read_line(&mut buffer) {
            let (text, _) = line.map_err(io_error)?;
            lines.push(text.clone());
        }
        info!("Read {} lines from {}", lines.len(), name);
        Ok(Self { name, lines })
    }

    /// Builds a file from text already in memory.
    pub fn from_text(name: &str, text: &str) -> Self {
        Self { name: name.to_string(),
               lines: text.split_inclusive('\n').map(String::from).collect() }
    }
}
