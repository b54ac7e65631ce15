use crate::crypto::f_function::round_function;
use symmetric_cipher::crypto::cipher_error::{CipherError, CipherResult};

pub const DELTA: u64 = 0x9E37_79B9_7F4A_7C15;
pub const SUBKEY_COUNT: usize = 48;

fn word(key: &[u8], index: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&key[index * 8..index * 8 + 8]);
    u64::from_be_bytes(bytes)
}

/// Derives the 48 subkeys (three per round) from a 128, 192 or 256-bit key.
pub fn expand_key(key: &[u8]) -> CipherResult<Vec<u64>> {
    let (k3, k2) = match key.len() {
        16 | 24 | 32 => (word(key, 0), word(key, 1)),
        other => {
            return Err(CipherError::invalid(format!(
                "LOKI97 key must be 16, 24 or 32 bytes, got {other}"
            )))
        }
    };
    let (k1, k0) = match key.len() {
        32 => (word(key, 2), word(key, 3)),
        24 => (word(key, 2), round_function(k3, k2)?),
        _ => (round_function(k2, k3)?, round_function(k3, k2)?),
    };

    // [K0, K1, K2, K3]; each subkey becomes the next K0
    let mut state = [k0, k1, k2, k3];
    let mut delta = DELTA;
    let mut subkeys = Vec::with_capacity(SUBKEY_COUNT);

    for _ in 0..SUBKEY_COUNT {
        let [k0, k1, k2, k3] = state;
        let input = k0.wrapping_add(k2).wrapping_add(delta);
        let subkey = k3 ^ round_function(input, k1)?;
        subkeys.push(subkey);
        state = [subkey, k0, k1, k2];
        delta = delta.wrapping_add(DELTA);
    }

    Ok(subkeys)
}
