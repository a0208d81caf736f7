//! Transparent decompression of input files
//!
//! Compression is detected from the first two bytes of the content, never
//! from the file extension:
//!
//! - `1f 8b` → gzip (multi-member streams such as bgzip are read to the end)
//! - `BZ` → bzip2 (multi-stream files are read to the end)
//! - anything else → plain text

use crate::error::{FilterError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const BZIP2_MAGIC: [u8; 2] = *b"BZ";

/// Compression format of an input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
}

impl Compression {
    /// Detect compression from the leading bytes of a stream
    pub fn detect(header: &[u8]) -> Self {
        if header.starts_with(&GZIP_MAGIC) {
            Compression::Gzip
        } else if header.starts_with(&BZIP2_MAGIC) {
            Compression::Bzip2
        } else {
            Compression::None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Gzip => "gzip",
            Compression::Bzip2 => "bzip2",
        }
    }

    fn decode(self, reader: Box<dyn BufRead>) -> Box<dyn BufRead> {
        match self {
            Compression::Gzip => Box::new(BufReader::new(
                flate2::bufread::MultiGzDecoder::new(reader),
            )),
            Compression::Bzip2 => Box::new(BufReader::new(
                bzip2::bufread::MultiBzDecoder::new(reader),
            )),
            Compression::None => reader,
        }
    }
}

/// Accepted mode strings for opening an input
///
/// Only validated and logged: `Text` and `Binary` return the same
/// decompressed reader. The filter always opens in `Text` mode and reads
/// with `read_line`, which is where invalid UTF-8 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    Text,
    Binary,
}

impl FromStr for ReadMode {
    type Err = FilterError;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "r" | "rt" => Ok(ReadMode::Text),
            "rb" => Ok(ReadMode::Binary),
            other => Err(FilterError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Open a file for reading, transparently handling gzip and bzip2
///
/// A short-lived probe handle reads the magic bytes and is closed before the
/// real stream is opened. The path is always a file path; `-` is not special.
pub fn open_ro<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();

    let compression = {
        let probe = File::open(path).map_err(|e| FilterError::open(path, e))?;
        let mut header = Vec::with_capacity(2);
        probe
            .take(2)
            .read_to_end(&mut header)
            .map_err(|e| FilterError::open(path, e))?;
        Compression::detect(&header)
    };

    let file = File::open(path).map_err(|e| FilterError::open(path, e))?;
    log::info!(
        "Reading {} ({:?}, compression: {})",
        path.display(),
        mode,
        compression.name()
    );
    Ok(compression.decode(Box::new(BufReader::new(file))))
}

/// Wrap an already open stream (e.g. stdin), detecting compression by
/// peeking at its buffer
pub fn open_reader<R: Read + 'static>(reader: R, mode: ReadMode) -> Result<Box<dyn BufRead>> {
    let mut reader = BufReader::new(reader);
    let compression = Compression::detect(reader.fill_buf()?);
    log::info!("Reading stream ({:?}, compression: {})", mode, compression.name());
    Ok(compression.decode(Box::new(reader)))
}
