use hex_literal::hex;
use loki97_crypto::crypto::key_schedule::{expand_key, SUBKEY_COUNT};
use loki97_crypto::Loki97Cipher;
use quickcheck::quickcheck;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;

#[test]
fn test_loki97_256_bit_vector() {
    let key: Vec<u8> = (0..32).collect();
    let plaintext: Vec<u8> = (0..16).collect();
    let cipher = Loki97Cipher::new(&key).unwrap();

    let ciphertext = cipher.encrypt_block(&plaintext).unwrap();
    assert_eq!(ciphertext, hex!("75 08 0E 35 9F 10 FE 64 01 44 B3 5C 57 12 8D AD"));
    assert_eq!(cipher.decrypt_block(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_loki97_shorter_keys() {
    let plaintext: Vec<u8> = (0..16).collect();

    let key128: Vec<u8> = (0..16).collect();
    let cipher = Loki97Cipher::new(&key128).unwrap();
    assert_eq!(
        cipher.encrypt_block(&plaintext).unwrap(),
        hex!("F6 5C F3 B5 3C 5C 7D 3A 44 E4 19 0C B2 05 76 22")
    );

    let key192: Vec<u8> = (0..24).collect();
    let cipher = Loki97Cipher::new(&key192).unwrap();
    assert_eq!(
        cipher.encrypt_block(&plaintext).unwrap(),
        hex!("5E E6 B9 46 0D 53 9E 8D 63 C6 D4 7D A2 AA E2 B4")
    );
}

#[test]
fn test_key_schedule_length() {
    assert_eq!(expand_key(&[0u8; 16]).unwrap().len(), SUBKEY_COUNT);
    assert!(expand_key(&[0u8; 20]).is_err());
}

#[test]
fn test_block_size_and_bad_input() {
    let cipher = Loki97Cipher::new(&[0u8; 24]).unwrap();
    assert_eq!(cipher.block_size(), 16);
    assert!(cipher.encrypt_block(&[0u8; 8]).is_err());
    assert!(Loki97Cipher::new(&[0u8; 8]).is_err());
}

quickcheck! {
    fn prop_loki97_roundtrip(seed: Vec<u8>, block: Vec<u8>, size: u8) -> bool {
        let len = [16, 24, 32][size as usize % 3];
        let mut key = seed;
        key.resize(len, 0x5C);
        let mut block = block;
        block.resize(16, 0);

        let cipher = Loki97Cipher::new(&key).unwrap();
        let ciphertext = cipher.encrypt_block(&block).unwrap();
        cipher.decrypt_block(&ciphertext).unwrap() == block
    }
}
