use crate::crypto::cipher_error::{CipherError, CipherResult};
use crate::crypto::cipher_io::{
    ArrayRead, ArrayWrite, BlockLayout, FileRead, FileWrite, ListWrite, ReadBlock, WriteBlock,
};
use crate::crypto::cipher_task::{CipherTask, EncryptionProgress};
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::{CipherMode, PaddingMode};
use crate::crypto::utils::{add_wrapping_be, xor_blocks};
use log::{debug, info, warn};
use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Blocks read, transformed in parallel and written per round.
const PARALLEL_WINDOW: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn is_encrypt(self) -> bool {
        self == Direction::Encrypt
    }
}

/// Binds a block cipher to a mode, a padding scheme and an IV.
///
/// The context keeps no per-call state, so one instance (or its clones) can
/// serve any number of concurrent calls.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn SymmetricCipher + Send + Sync>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Vec<u8>,
    delta: BigUint,
}

impl CipherContext {
    /// `iv` must match the cipher block size; `None` draws a random IV.
    pub fn new(
        algorithm: Box<dyn SymmetricCipher + Send + Sync>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> CipherResult<Self> {
        let block_size = algorithm.block_size();
        if block_size == 0 {
            return Err(CipherError::invalid("cipher block size must be positive"));
        }

        let iv = match iv {
            Some(iv) if iv.len() == block_size => iv,
            Some(iv) => {
                return Err(CipherError::invalid(format!(
                    "IV must be {block_size} bytes, got {}",
                    iv.len()
                )))
            }
            None => Self::generate_iv(block_size, &mut rand::rng()),
        };

        Ok(Self {
            algorithm: Arc::from(algorithm),
            mode,
            padding,
            iv,
            delta: BigUint::one(),
        })
    }

    /// Multiplier of the block index in `RandomDelta` mode.
    pub fn with_delta(mut self, delta: BigUint) -> Self {
        self.delta = delta;
        self
    }

    pub fn generate_iv(block_size: usize, rng: &mut impl RngCore) -> Vec<u8> {
        let mut iv = vec![0u8; block_size];
        rng.fill_bytes(&mut iv);
        iv
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn encrypt(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        self.transform_bytes(Direction::Encrypt, data, &EncryptionProgress::new())
    }

    pub fn decrypt(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        self.transform_bytes(Direction::Decrypt, data, &EncryptionProgress::new())
    }

    /// Encrypts into a caller buffer and returns the number of bytes written.
    /// The buffer must hold the padded output.
    pub fn encrypt_into(&self, data: &[u8], out: &mut [u8]) -> CipherResult<usize> {
        self.transform_into(Direction::Encrypt, data, out, &EncryptionProgress::new())
    }

    /// The buffer must be at least as long as `data`.
    pub fn decrypt_into(&self, data: &[u8], out: &mut [u8]) -> CipherResult<usize> {
        self.transform_into(Direction::Decrypt, data, out, &EncryptionProgress::new())
    }

    pub fn encrypt_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> CipherResult<()> {
        self.transform_file(
            Direction::Encrypt,
            input.as_ref(),
            output.as_ref(),
            &EncryptionProgress::new(),
        )
    }

    pub fn decrypt_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> CipherResult<()> {
        self.transform_file(
            Direction::Decrypt,
            input.as_ref(),
            output.as_ref(),
            &EncryptionProgress::new(),
        )
    }

    pub fn encrypt_async(&self, data: Vec<u8>) -> CipherResult<CipherTask<Vec<u8>>> {
        self.layout(Direction::Encrypt, data.len() as u64)?;
        self.spawn(move |ctx, progress| {
            ctx.transform_bytes(Direction::Encrypt, &data, progress)
        })
    }

    pub fn decrypt_async(&self, data: Vec<u8>) -> CipherResult<CipherTask<Vec<u8>>> {
        self.layout(Direction::Decrypt, data.len() as u64)?;
        self.spawn(move |ctx, progress| {
            ctx.transform_bytes(Direction::Decrypt, &data, progress)
        })
    }

    /// Async form of [`CipherContext::encrypt_into`]; the buffer is handed back
    /// together with the written length.
    pub fn encrypt_into_async(
        &self,
        data: Vec<u8>,
        out: Vec<u8>,
    ) -> CipherResult<CipherTask<(Vec<u8>, usize)>> {
        self.spawn_into(Direction::Encrypt, data, out)
    }

    pub fn decrypt_into_async(
        &self,
        data: Vec<u8>,
        out: Vec<u8>,
    ) -> CipherResult<CipherTask<(Vec<u8>, usize)>> {
        self.spawn_into(Direction::Decrypt, data, out)
    }

    pub fn encrypt_file_async(&self, input: PathBuf, output: PathBuf) -> CipherResult<CipherTask<()>> {
        self.spawn_file(Direction::Encrypt, input, output)
    }

    pub fn decrypt_file_async(&self, input: PathBuf, output: PathBuf) -> CipherResult<CipherTask<()>> {
        self.spawn_file(Direction::Decrypt, input, output)
    }

    /// Runs `job` on the blocking pool of the current Tokio runtime.
    fn spawn<T, F>(&self, job: F) -> CipherResult<CipherTask<T>>
    where
        F: FnOnce(CipherContext, &EncryptionProgress) -> CipherResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let runtime = Handle::try_current()
            .map_err(|err| CipherError::TaskFailed(format!("no Tokio runtime: {err}")))?;
        let progress = Arc::new(EncryptionProgress::new());
        let worker_progress = Arc::clone(&progress);
        let ctx = self.clone();
        let handle = runtime.spawn_blocking(move || job(ctx, &worker_progress));
        Ok(CipherTask::new(handle, progress))
    }

    fn spawn_into(
        &self,
        direction: Direction,
        data: Vec<u8>,
        mut out: Vec<u8>,
    ) -> CipherResult<CipherTask<(Vec<u8>, usize)>> {
        let layout = self.layout(direction, data.len() as u64)?;
        Self::check_capacity(out.len(), layout.output_len())?;
        self.spawn(move |ctx, progress| {
            let written = ctx.transform_into(direction, &data, &mut out, progress)?;
            Ok((out, written))
        })
    }

    fn spawn_file(
        &self,
        direction: Direction,
        input: PathBuf,
        output: PathBuf,
    ) -> CipherResult<CipherTask<()>> {
        Self::check_paths(&input, &output)?;
        self.spawn(move |ctx, progress| {
            ctx.transform_file(direction, &input, &output, progress)
        })
    }

    fn layout(&self, direction: Direction, len: u64) -> CipherResult<BlockLayout> {
        let block_size = self.block_size();
        match direction {
            Direction::Encrypt => BlockLayout::for_encryption(len, block_size, self.padding),
            Direction::Decrypt => BlockLayout::for_decryption(len, block_size),
        }
    }

    fn unpack_mode(&self, direction: Direction) -> Option<PaddingMode> {
        match direction {
            Direction::Decrypt if self.padding.is_padding() => Some(self.padding),
            _ => None,
        }
    }

    /// Decryption needs room for the whole ciphertext: a padding count is
    /// only known once the last block is decrypted.
    fn check_capacity(available: usize, needed: usize) -> CipherResult<()> {
        if available < needed {
            return Err(CipherError::invalid(format!(
                "output buffer of {available} bytes is too small, {needed} needed"
            )));
        }
        Ok(())
    }

    fn check_paths(input: &Path, output: &Path) -> CipherResult<()> {
        if !input.is_file() {
            return Err(CipherError::invalid(format!(
                "input file {} does not exist",
                input.display()
            )));
        }
        if output.as_os_str().is_empty() {
            return Err(CipherError::invalid("output file name is empty"));
        }

        let same = match (fs::canonicalize(input), fs::canonicalize(output)) {
            (Ok(a), Ok(b)) => a == b,
            _ => input == output,
        };
        if same {
            return Err(CipherError::invalid(
                "input and output must be different files",
            ));
        }
        Ok(())
    }

    fn transform_bytes(
        &self,
        direction: Direction,
        data: &[u8],
        progress: &EncryptionProgress,
    ) -> CipherResult<Vec<u8>> {
        let layout = self.layout(direction, data.len() as u64)?;
        let mut reader = ArrayRead::new(data, layout);
        let mut writer = ListWrite::new(layout, self.unpack_mode(direction));
        self.process(direction, &mut reader, &mut writer, progress)?;
        Ok(writer.into_bytes())
    }

    fn transform_into(
        &self,
        direction: Direction,
        data: &[u8],
        out: &mut [u8],
        progress: &EncryptionProgress,
    ) -> CipherResult<usize> {
        let layout = self.layout(direction, data.len() as u64)?;
        Self::check_capacity(out.len(), layout.output_len())?;
        let mut reader = ArrayRead::new(data, layout);
        let mut writer = ArrayWrite::new(out, layout, self.unpack_mode(direction));
        self.process(direction, &mut reader, &mut writer, progress)
    }

    fn transform_file(
        &self,
        direction: Direction,
        input: &Path,
        output: &Path,
        progress: &EncryptionProgress,
    ) -> CipherResult<()> {
        Self::check_paths(input, output)?;

        let mut reader = FileRead::open(input, |len| self.layout(direction, len))?;
        let result = FileWrite::create(output, reader.layout(), self.unpack_mode(direction))
            .and_then(|mut writer| self.process(direction, &mut reader, &mut writer, progress));

        match result {
            Ok(written) => {
                info!(
                    "{:?} {} -> {} ({} bytes, {} {})",
                    direction,
                    input.display(),
                    output.display(),
                    written,
                    self.mode,
                    self.padding
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "{:?} of {} failed ({}), removing partial output {}",
                    direction,
                    input.display(),
                    err,
                    output.display()
                );
                if let Err(remove_err) = fs::remove_file(output) {
                    debug!("could not remove {}: {}", output.display(), remove_err);
                }
                Err(err)
            }
        }
    }

    fn process(
        &self,
        direction: Direction,
        reader: &mut dyn ReadBlock,
        writer: &mut dyn WriteBlock,
        progress: &EncryptionProgress,
    ) -> CipherResult<usize> {
        let block_count = reader.block_count();
        progress.start(block_count);
        debug!(
            "{:?} {} blocks of {} bytes, mode {}, padding {}",
            direction,
            block_count,
            self.block_size(),
            self.mode,
            self.padding
        );

        let outcome = if self.mode.is_parallel(direction.is_encrypt()) {
            self.process_parallel(direction, reader, writer, progress)
        } else {
            self.process_sequential(direction, reader, writer, progress)
        };

        if let Err(CipherError::Cancelled) = outcome {
            warn!("{:?} cancelled after {} of {} blocks", direction, progress.processed(), block_count);
        }
        outcome?;
        writer.finish()
    }

    fn process_parallel(
        &self,
        direction: Direction,
        reader: &mut dyn ReadBlock,
        writer: &mut dyn WriteBlock,
        progress: &EncryptionProgress,
    ) -> CipherResult<()> {
        let block_count = reader.block_count();
        let mut previous = self.iv.clone();

        for start in (0..block_count).step_by(PARALLEL_WINDOW) {
            let end = (start + PARALLEL_WINDOW).min(block_count);
            let inputs = (start..end)
                .map(|index| reader.get(index))
                .collect::<CipherResult<Vec<_>>>()?;

            let outputs = inputs
                .par_iter()
                .enumerate()
                .map(|(offset, block)| {
                    progress.checkpoint()?;
                    let chained = match offset {
                        0 => &previous,
                        _ => &inputs[offset - 1],
                    };
                    self.transform_independent(direction, start + offset, block, chained)
                })
                .collect::<CipherResult<Vec<_>>>()?;

            if let Some(last) = inputs.last() {
                previous.clone_from(last);
            }

            for (offset, block) in outputs.into_iter().enumerate() {
                writer.put(start + offset, block)?;
                progress.advance();
            }
        }

        Ok(())
    }

    /// One block of a mode whose blocks do not depend on earlier outputs.
    /// `chained` is the previous input block (the IV for block 0).
    fn transform_independent(
        &self,
        direction: Direction,
        index: usize,
        block: &[u8],
        chained: &[u8],
    ) -> CipherResult<Vec<u8>> {
        let cipher = &self.algorithm;
        match (self.mode, direction) {
            (CipherMode::ECB, Direction::Encrypt) => cipher.encrypt_block(block),
            (CipherMode::ECB, Direction::Decrypt) => cipher.decrypt_block(block),
            (CipherMode::CBC, Direction::Decrypt) => {
                Ok(xor_blocks(&cipher.decrypt_block(block)?, chained))
            }
            (CipherMode::CFB, Direction::Decrypt) => {
                Ok(xor_blocks(&cipher.encrypt_block(chained)?, block))
            }
            (CipherMode::CTR | CipherMode::RandomDelta, _) => {
                let counter = self.counter_block(index);
                Ok(xor_blocks(&cipher.encrypt_block(&counter)?, block))
            }
            (mode, direction) => Err(CipherError::invalid(format!(
                "{mode} {direction:?} cannot run block-parallel"
            ))),
        }
    }

    /// `IV + i` for CTR and `IV + (delta * i mod 2^(8 * block_size))` for
    /// RandomDelta, both wrapping at the block width.
    fn counter_block(&self, index: usize) -> Vec<u8> {
        let mut counter = self.iv.clone();
        match self.mode {
            CipherMode::RandomDelta => {
                let modulus = BigUint::one() << (8 * counter.len());
                let offset = (&self.delta * BigUint::from(index)) % modulus;
                add_wrapping_be(&mut counter, &offset.to_bytes_be());
            }
            _ => add_wrapping_be(&mut counter, &(index as u128).to_be_bytes()),
        }
        counter
    }

    fn process_sequential(
        &self,
        direction: Direction,
        reader: &mut dyn ReadBlock,
        writer: &mut dyn WriteBlock,
        progress: &EncryptionProgress,
    ) -> CipherResult<()> {
        let cipher = &self.algorithm;
        // previous ciphertext, P^C for PCBC, or the last keystream block for OFB
        let mut feedback = self.iv.clone();

        for index in 0..reader.block_count() {
            progress.checkpoint()?;
            let block = reader.get(index)?;

            let output = match (self.mode, direction) {
                (CipherMode::CBC, Direction::Encrypt) => {
                    let encrypted = cipher.encrypt_block(&xor_blocks(&block, &feedback))?;
                    feedback.clone_from(&encrypted);
                    encrypted
                }
                (CipherMode::PCBC, Direction::Encrypt) => {
                    let encrypted = cipher.encrypt_block(&xor_blocks(&block, &feedback))?;
                    feedback = xor_blocks(&block, &encrypted);
                    encrypted
                }
                (CipherMode::PCBC, Direction::Decrypt) => {
                    let decrypted = xor_blocks(&cipher.decrypt_block(&block)?, &feedback);
                    feedback = xor_blocks(&decrypted, &block);
                    decrypted
                }
                (CipherMode::CFB, Direction::Encrypt) => {
                    let encrypted = xor_blocks(&cipher.encrypt_block(&feedback)?, &block);
                    feedback.clone_from(&encrypted);
                    encrypted
                }
                (CipherMode::OFB, _) => {
                    feedback = cipher.encrypt_block(&feedback)?;
                    xor_blocks(&feedback, &block)
                }
                _ => self.transform_independent(direction, index, &block, &feedback)?,
            };

            writer.put(index, output)?;
            progress.advance();
        }

        Ok(())
    }
}
