use loki97_crypto::Loki97Cipher;
use rc5_crypto::RC5;
use symmetric_cipher::crypto::deal::DEAL;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::{CipherContext, CipherMode, PaddingMode, SymmetricCipher};

type BoxedCipher = Box<dyn SymmetricCipher + Send + Sync>;

fn key(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

const CIPHERS: [&str; 6] = ["DES", "DEAL-128", "RC5-16/12", "RC5-32/12", "RC5-64/12", "LOKI97"];

fn build(name: &str) -> BoxedCipher {
    match name {
        "DES" => Box::new(DES::new(&key(8)).unwrap()),
        "DEAL-128" => Box::new(DEAL::new(&key(16)).unwrap()),
        "RC5-16/12" => Box::new(RC5::new(16, 12, &key(10)).unwrap()),
        "RC5-32/12" => Box::new(RC5::new(32, 12, &key(16)).unwrap()),
        "RC5-64/12" => Box::new(RC5::new(64, 12, &key(24)).unwrap()),
        "LOKI97" => Box::new(Loki97Cipher::new(&key(32)).unwrap()),
        other => panic!("no cipher named {other}"),
    }
}

/// Non-zero bytes, so the Zeros padding strips nothing that belongs to the message.
fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251 + 1) as u8).collect()
}

#[test]
fn test_every_cipher_mode_and_padding_roundtrips() {
    for name in CIPHERS {
        let block_size = build(name).block_size();
        let iv: Vec<u8> = (0..block_size as u8).map(|b| b ^ 0xC3).collect();

        for mode in CipherMode::ALL {
            for padding in PaddingMode::ALL {
                let ctx = CipherContext::new(build(name), mode, padding, Some(iv.clone())).unwrap();

                for len in 1..=3 * block_size + 1 {
                    let plain = message(len);
                    let encrypted = ctx.encrypt(&plain);

                    if !padding.is_padding() {
                        if len % block_size != 0 {
                            assert!(encrypted.is_err(), "{name} {mode} {padding} len {len}");
                            continue;
                        }
                        assert_eq!(encrypted.as_ref().unwrap().len(), len);
                    }

                    let encrypted = encrypted.unwrap();
                    if padding.is_padding() {
                        assert_eq!(encrypted.len(), (len / block_size + 1) * block_size);
                    }
                    assert_eq!(
                        ctx.decrypt(&encrypted).unwrap(),
                        plain,
                        "{name} {mode} {padding} len {len}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_block_sizes_reach_the_engine() {
    let sizes: Vec<usize> = CIPHERS.iter().map(|name| build(name).block_size()).collect();
    assert_eq!(sizes, vec![8, 16, 4, 8, 16, 16]);
}
