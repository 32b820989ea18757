//! Reading and writing SVM bytecode image files.
//!
//! An image file is the raw byte sequence produced by the assembler: no
//! magic number, no version, no header, no checksum. Operands inside the
//! image are little-endian, but this crate never interprets them; it only
//! moves bytes between streams and files.

use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Vec<u8>> {
    let mut code = Vec::new();
    reader.read_to_end(&mut code)?;
    Ok(code)
}

pub fn write<W: Write>(writer: &mut W, code: &[u8]) -> std::io::Result<()> {
    writer.write_all(code)
}

pub trait ReadSbcExt: Read + Sized {
    fn read_sbc(&mut self) -> std::io::Result<Vec<u8>> {
        read(self)
    }
}

impl<R: Read + Sized> ReadSbcExt for R {}

pub trait WriteSbcExt: Write + Sized {
    fn write_sbc(&mut self, code: &[u8]) -> std::io::Result<()> {
        write(self, code)
    }
}

impl<W: Write + Sized> WriteSbcExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<u8>> {
    BufReader::new(File::open(path)?).read_sbc()
}

pub fn write_file<P: AsRef<Path>>(path: P, code: &[u8]) -> std::io::Result<()> {
    BufWriter::new(File::create(path)?).write_sbc(code)
}
