use hex_literal::hex;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::des_key_expansion::DesKeyExpansion;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

#[test]
fn test_des_textbook_vector() {
    let key = hex!("13 34 57 79 9B BC DF F1");
    let plaintext = hex!("01 23 45 67 89 AB CD EF");
    let expected = hex!("85 E8 13 54 0F 0A B4 05");

    let des = DES::new(&key).unwrap();
    let ciphertext = des.encrypt_block(&plaintext).unwrap();
    assert_eq!(ciphertext, expected);
    assert_eq!(des.decrypt_block(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_des_seven_byte_key_vector() {
    let key = hex!("39 86 EC 4D 5C 19 E9");
    let plaintext = hex!("F5 28 64 E1 90 A3 97 D7");
    let expected = hex!("8B 9E 8E AB 37 1E 08 A6");

    let des = DES::new(&key).unwrap();
    assert_eq!(des.encrypt_block(&plaintext).unwrap(), expected);
    assert_eq!(des.decrypt_block(&expected).unwrap(), plaintext);
}

#[test]
fn test_short_key_gets_odd_parity_bits() {
    let expanded = DesKeyExpansion::expand_short_key(&hex!("39 86 EC 4D 5C 19 E9"));
    assert_eq!(expanded, hex!("38 C2 BA 89 D5 E0 67 D3"));
    assert!(expanded.iter().all(|b| b.count_ones() % 2 == 1));

    let short = DES::new(&hex!("39 86 EC 4D 5C 19 E9")).unwrap();
    let long = DES::new(&expanded).unwrap();
    assert_eq!(short.round_keys(), long.round_keys());
}

#[test]
fn test_des_parity_bits_are_ignored() {
    let a = DES::new(&hex!("13 34 57 79 9B BC DF F1")).unwrap();
    let b = DES::new(&hex!("12 35 56 78 9A BD DE F0")).unwrap();
    assert_eq!(a.round_keys(), b.round_keys());
}

#[test]
fn test_des_round_keys_shape() {
    let round_keys = DesKeyExpansion
        .generate_round_keys(&hex!("13 34 57 79 9B BC DF F1"))
        .unwrap();
    assert_eq!(round_keys.len(), 16);
    assert!(round_keys.iter().all(|k| k.len() == 6));
    assert_eq!(round_keys[0], hex!("1B 02 EF FC 70 72"));
    assert_eq!(round_keys[15], hex!("CB 3D 8B 0E 17 F5"));
}

#[test]
fn test_des_rejects_bad_lengths() {
    assert!(DES::new(&[0u8; 6]).is_err());
    assert!(DES::new(&[0u8; 9]).is_err());

    let des = DES::new(&[0u8; 8]).unwrap();
    assert!(des.encrypt_block(&[0u8; 7]).is_err());
    assert!(des.decrypt_block(&[0u8; 16]).is_err());
}
