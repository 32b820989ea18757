/// Associates one assembled instruction with its origin in the source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceMapItem {
    /// 1-based source line of the instruction.
    pub line: u32,
    /// Byte offset of the instruction in the image.
    pub address: u32,
}

pub type SourceMap = Vec<SourceMapItem>;
