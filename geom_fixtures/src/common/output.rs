// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Write directives one per line, to stdout or to a file.

use crate::{Directive, FixtureError};
use std::{fs::File,
          io::{self, BufWriter, ErrorKind, Write},
          path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(it: Option<PathBuf>) -> Self {
        match it {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }
}

/// Write each directive followed by `\n`, then flush. Returns the number of lines
/// written.
///
/// A closed reader (eg: `gen-segments | head`) is not an error: writing stops at
/// [`ErrorKind::BrokenPipe`] and the lines written so far are reported.
///
/// # Errors
///
/// Returns [`FixtureError::WriteOutput`] for any other I/O failure.
pub fn write_directives<W: Write>(
    mut writer: W,
    directives: impl IntoIterator<Item = Directive>,
) -> Result<usize, FixtureError> {
    let mut lines = 0;
    for directive in directives {
        match writeln!(writer, "{directive}") {
            Ok(()) => lines += 1,
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                tracing::debug!(lines, "reader closed the pipe, stopping early");
                return Ok(lines);
            }
            Err(e) => return Err(e.into()),
        }
    }
    match writer.flush() {
        Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(lines),
    }
}

/// Open `target` and write all `directives` to it through a [`BufWriter`].
///
/// # Errors
///
/// Returns [`FixtureError::CreateOutput`] if the output file can't be created, and
/// [`FixtureError::WriteOutput`] if writing fails.
pub fn emit(
    target: &OutputTarget,
    directives: impl IntoIterator<Item = Directive>,
) -> Result<usize, FixtureError> {
    let lines = match target {
        OutputTarget::Stdout => {
            write_directives(BufWriter::new(io::stdout().lock()), directives)?
        }
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|source| FixtureError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_directives(BufWriter::new(file), directives)?
        }
    };
    tracing::debug!(?target, lines, "fixture written");
    Ok(lines)
}
