//! Runner for SVM bytecode images.
//!
//! Ties the other crates together: [`run_file`](fn.run_file.html) loads a
//! binary image via `sbcfile` and executes it, and
//! [`run_asm`](fn.run_asm.html) assembles a source file with `sasm` first.
//! Both return the machine in its terminal state so callers can inspect the
//! stack and memory after the run, along with the exit code.

use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use svm::{constants, ExitCode, Machine};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error, PathBuf),
    Asm(sasm::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err, path) => {
                writeln!(f, "Reading file \"{}\" failed: {}", path.display(), err)
            }
            Error::Asm(err) => {
                writeln!(f, "Assembling input failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Runs a code image on a fresh machine with `mem_size` memory cells.
pub fn run_code(code: &[u8], mem_size: usize) -> (Machine, ExitCode) {
    let mut machine = Machine::with_sizes(
        constants::STACK_SIZE,
        constants::RET_STACK_SIZE,
        mem_size,
    );
    let exit_code = machine.run(code);

    (machine, exit_code)
}

/// Loads the image file at `path` and runs it.
pub fn run_file<P: AsRef<Path>>(path: P, mem_size: usize) -> Result<(Machine, ExitCode), Error> {
    let code = sbcfile::read_file(path.as_ref())
        .map_err(|err| Error::Io(err, path.as_ref().to_owned()))?;

    Ok(run_code(&code, mem_size))
}

/// Assembles the source file at `path` and runs the result directly.
pub fn run_asm<P: AsRef<Path>>(path: P, mem_size: usize) -> Result<(Machine, ExitCode), Error> {
    let file =
        File::open(path.as_ref()).map_err(|err| Error::Io(err, path.as_ref().to_owned()))?;

    let mut input = String::new();
    BufReader::new(file)
        .read_to_string(&mut input)
        .map_err(|err| Error::Io(err, path.as_ref().to_owned()))?;

    let (code, _) = sasm::assemble(&input).map_err(|err| {
        Error::Asm(match path.as_ref().to_str() {
            Some(path_str) => err.with_path(path_str),
            None => err,
        })
    })?;

    Ok(run_code(&code, mem_size))
}
