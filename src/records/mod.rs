// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Line-oriented record storage.
//!
//! This module provides:
//! - `LineReader` / `LineWriter`: the line source and sink the database reads and writes
//! - Buffered file-backed implementations of both
//! - The tab-delimited record codec

pub mod codec;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub use codec::{decode, encode};

/// A finite, lazy source of text lines in file order
pub trait LineReader {
    /// Next line without its terminator, or `None` at the end
    fn next_line(&mut self) -> Option<io::Result<String>>;

    /// Where the lines come from, for error reports
    fn location(&self) -> &Path {
        Path::new("<memory>")
    }
}

/// A sink of text lines
pub trait LineWriter {
    /// Write one line; the terminator is added by the writer
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Flush everything written so far
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Where the lines go, for error reports
    fn location(&self) -> &Path {
        Path::new("<memory>")
    }
}

/// Line reader over any buffered input
pub struct BufLineReader<R> {
    lines: io::Lines<R>,
    path: PathBuf,
}

impl<R: BufRead> BufLineReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            path: PathBuf::from("<memory>"),
        }
    }
}

impl BufLineReader<BufReader<File>> {
    /// Open a file for reading. The handle is closed when the reader is dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl<R: BufRead> LineReader for BufLineReader<R> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.lines.next()
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Buffered file reader
pub type FileLineReader = BufLineReader<BufReader<File>>;

/// Line reader over borrowed text
pub struct StrLineReader<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> StrLineReader<'a> {
    /// Read lines from `text`
    pub fn new(text: &'a str) -> Self {
        Self { lines: text.lines() }
    }
}

impl LineReader for StrLineReader<'_> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.lines.next().map(|line| Ok(line.to_string()))
    }
}

/// Line writer over any output, terminating each line with `\n`
pub struct BufLineWriter<W: Write> {
    inner: W,
    path: PathBuf,
}

impl<W: Write> BufLineWriter<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            path: PathBuf::from("<memory>"),
        }
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl BufLineWriter<BufWriter<File>> {
    /// Create or truncate a file for writing
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self {
            inner: BufWriter::new(file),
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl<W: Write> LineWriter for BufLineWriter<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Buffered file writer
pub type FileLineWriter = BufLineWriter<BufWriter<File>>;

impl LineWriter for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
