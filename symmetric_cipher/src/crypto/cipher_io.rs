//! Block addressing over the places data can live: caller slices, files and
//! growable buffers. Readers hand out whole blocks and pad the final one when
//! encrypting; writers strip padding from the final block when decrypting.

use crate::crypto::cipher_error::{CipherError, CipherResult};
use crate::crypto::cipher_types::PaddingMode;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

pub trait ReadBlock {
    fn block_count(&self) -> usize;
    fn get(&mut self, index: usize) -> CipherResult<Vec<u8>>;
}

pub trait WriteBlock {
    fn put(&mut self, index: usize, block: Vec<u8>) -> CipherResult<()>;

    /// Flushes buffered output and returns the number of bytes written.
    fn finish(&mut self) -> CipherResult<usize>;
}

/// How the block sequence of an input of `len` bytes is laid out.
#[derive(Debug, Clone, Copy)]
pub struct BlockLayout {
    pub block_size: usize,
    pub block_count: usize,
    /// Padding applied to the last block, present only when encrypting.
    pub fill: Option<PaddingMode>,
}

impl BlockLayout {
    pub fn for_encryption(len: u64, block_size: usize, padding: PaddingMode) -> CipherResult<Self> {
        Self::check_non_empty(len)?;
        let full = (len / block_size as u64) as usize;
        if padding.is_padding() {
            Ok(Self {
                block_size,
                block_count: full + 1,
                fill: Some(padding),
            })
        } else {
            Self::check_aligned(len, block_size)?;
            Ok(Self {
                block_size,
                block_count: full,
                fill: None,
            })
        }
    }

    pub fn for_decryption(len: u64, block_size: usize) -> CipherResult<Self> {
        Self::check_non_empty(len)?;
        Self::check_aligned(len, block_size)?;
        Ok(Self {
            block_size,
            block_count: (len / block_size as u64) as usize,
            fill: None,
        })
    }

    pub fn output_len(&self) -> usize {
        self.block_count * self.block_size
    }

    fn check_non_empty(len: u64) -> CipherResult<()> {
        if len == 0 {
            return Err(CipherError::invalid("input is empty"));
        }
        Ok(())
    }

    fn check_aligned(len: u64, block_size: usize) -> CipherResult<()> {
        if len % block_size as u64 != 0 {
            return Err(CipherError::invalid(format!(
                "input length {len} is not a multiple of the {block_size}-byte block"
            )));
        }
        Ok(())
    }

    fn is_padded_block(&self, index: usize) -> bool {
        self.fill.is_some() && index + 1 == self.block_count
    }

    fn check_index(&self, index: usize) -> CipherResult<()> {
        if index >= self.block_count {
            return Err(CipherError::invalid(format!(
                "block {index} is out of range for {} blocks",
                self.block_count
            )));
        }
        Ok(())
    }
}

pub struct ArrayRead<'a> {
    data: &'a [u8],
    layout: BlockLayout,
}

impl<'a> ArrayRead<'a> {
    pub fn new(data: &'a [u8], layout: BlockLayout) -> Self {
        Self { data, layout }
    }
}

impl ReadBlock for ArrayRead<'_> {
    fn block_count(&self) -> usize {
        self.layout.block_count
    }

    fn get(&mut self, index: usize) -> CipherResult<Vec<u8>> {
        self.layout.check_index(index)?;
        let start = index * self.layout.block_size;
        let end = (start + self.layout.block_size).min(self.data.len());

        match self.layout.fill {
            Some(padding) if self.layout.is_padded_block(index) => {
                padding.fill(&self.data[start..end], self.layout.block_size)
            }
            _ => Ok(self.data[start..end].to_vec()),
        }
    }
}

pub struct FileRead {
    reader: BufReader<File>,
    len: u64,
    position: u64,
    layout: BlockLayout,
}

impl FileRead {
    pub fn open(path: &Path, layout_for: impl FnOnce(u64) -> CipherResult<BlockLayout>) -> CipherResult<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        let layout = layout_for(len)?;
        Ok(Self {
            reader: BufReader::new(file),
            len,
            position: 0,
            layout,
        })
    }

    pub fn layout(&self) -> BlockLayout {
        self.layout
    }
}

impl ReadBlock for FileRead {
    fn block_count(&self) -> usize {
        self.layout.block_count
    }

    fn get(&mut self, index: usize) -> CipherResult<Vec<u8>> {
        self.layout.check_index(index)?;
        let offset = (index * self.layout.block_size) as u64;
        if offset != self.position {
            self.reader.seek(SeekFrom::Start(offset))?;
        }

        let available = (self.len - offset).min(self.layout.block_size as u64) as usize;
        let mut block = vec![0u8; available];
        self.reader.read_exact(&mut block)?;
        self.position = offset + available as u64;

        match self.layout.fill {
            Some(padding) if self.layout.is_padded_block(index) => {
                padding.fill(&block, self.layout.block_size)
            }
            _ => Ok(block),
        }
    }
}

/// Strips padding from the final block when `unpack` is set.
struct Unpacker {
    block_count: usize,
    unpack: Option<PaddingMode>,
}

impl Unpacker {
    fn apply(&self, index: usize, block: Vec<u8>) -> CipherResult<Vec<u8>> {
        match self.unpack {
            Some(padding) if index + 1 == self.block_count => padding.unpack(&block),
            _ => Ok(block),
        }
    }
}

pub struct ArrayWrite<'a> {
    out: &'a mut [u8],
    block_size: usize,
    written: usize,
    unpacker: Unpacker,
}

impl<'a> ArrayWrite<'a> {
    pub fn new(out: &'a mut [u8], layout: BlockLayout, unpack: Option<PaddingMode>) -> Self {
        Self {
            out,
            block_size: layout.block_size,
            written: 0,
            unpacker: Unpacker {
                block_count: layout.block_count,
                unpack,
            },
        }
    }
}

impl WriteBlock for ArrayWrite<'_> {
    fn put(&mut self, index: usize, block: Vec<u8>) -> CipherResult<()> {
        let block = self.unpacker.apply(index, block)?;
        let start = index * self.block_size;
        let end = start + block.len();
        if end > self.out.len() {
            return Err(CipherError::invalid(format!(
                "output buffer of {} bytes is too small, {end} needed",
                self.out.len()
            )));
        }
        self.out[start..end].copy_from_slice(&block);
        self.written = self.written.max(end);
        Ok(())
    }

    fn finish(&mut self) -> CipherResult<usize> {
        Ok(self.written)
    }
}

/// Collects output blocks into an owned buffer.
pub struct ListWrite {
    blocks: Vec<Vec<u8>>,
    unpacker: Unpacker,
}

impl ListWrite {
    pub fn new(layout: BlockLayout, unpack: Option<PaddingMode>) -> Self {
        Self {
            blocks: vec![Vec::new(); layout.block_count],
            unpacker: Unpacker {
                block_count: layout.block_count,
                unpack,
            },
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.blocks.concat()
    }
}

impl WriteBlock for ListWrite {
    fn put(&mut self, index: usize, block: Vec<u8>) -> CipherResult<()> {
        let block = self.unpacker.apply(index, block)?;
        let slot = self.blocks.get_mut(index).ok_or_else(|| {
            CipherError::invalid(format!("block {index} is out of range for the output"))
        })?;
        *slot = block;
        Ok(())
    }

    fn finish(&mut self) -> CipherResult<usize> {
        Ok(self.blocks.iter().map(Vec::len).sum())
    }
}

pub struct FileWrite {
    writer: BufWriter<File>,
    block_size: usize,
    position: u64,
    written: u64,
    unpacker: Unpacker,
}

impl FileWrite {
    pub fn create(path: &Path, layout: BlockLayout, unpack: Option<PaddingMode>) -> CipherResult<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
            block_size: layout.block_size,
            position: 0,
            written: 0,
            unpacker: Unpacker {
                block_count: layout.block_count,
                unpack,
            },
        })
    }
}

impl WriteBlock for FileWrite {
    fn put(&mut self, index: usize, block: Vec<u8>) -> CipherResult<()> {
        let block = self.unpacker.apply(index, block)?;
        let offset = (index * self.block_size) as u64;
        if offset != self.position {
            self.writer.seek(SeekFrom::Start(offset))?;
        }
        self.writer.write_all(&block)?;
        self.position = offset + block.len() as u64;
        self.written = self.written.max(self.position);
        Ok(())
    }

    fn finish(&mut self) -> CipherResult<usize> {
        self.writer.flush()?;
        Ok(self.written as usize)
    }
}
