use hex_literal::hex;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::deal::DEAL;
use symmetric_cipher::crypto::deal_key_expansion::DealKeyExpansion;
use symmetric_cipher::crypto::des_adapter::DesAdapter;
use symmetric_cipher::crypto::encryption_transformation::EncryptionTransformation;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

#[test]
fn test_deal_128_vector() {
    let key = hex!("A4 78 74 86 EF ED 04 96 28 63 AF D5 5A 37 FB C4");
    let plaintext = hex!("5E B6 0C 37 E3 C4 F2 30 DC A8 2E 77 BF 73 A5 5C");
    let expected = hex!("0B 71 5A 26 2C B3 5A 6F B4 45 2F 04 7B 23 C3 0C");

    let deal = DEAL::new(&key).unwrap();
    let ciphertext = deal.encrypt_block(&plaintext).unwrap();
    assert_eq!(ciphertext, expected);
    assert_eq!(deal.decrypt_block(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_deal_128_round_keys() {
    let key = hex!("A4 78 74 86 EF ED 04 96 28 63 AF D5 5A 37 FB C4");
    let round_keys = DealKeyExpansion.generate_round_keys(&key).unwrap();
    let expected = [
        hex!("F6 9F 7A CA 41 BA 25 D7"),
        hex!("B2 24 E3 BC 08 A7 08 7C"),
        hex!("42 B1 B8 CB 30 E5 A4 17"),
        hex!("71 21 F3 BC 1A CF 41 32"),
        hex!("86 2C 21 29 0F 4B CD 08"),
        hex!("2A FC 98 CE 46 F1 42 ED"),
    ];
    assert_eq!(round_keys, expected.map(|k| k.to_vec()));
}

#[test]
fn test_deal_192_round_keys() {
    let key = hex!("A9 1C 15 21 1A 55 45 0D 97 23 E7 84 A7 41 5E 4D 61 67 64 86 F9 37 ED B7");
    let round_keys = DealKeyExpansion.generate_round_keys(&key).unwrap();
    let expected = [
        hex!("7F 1A AF 36 F3 86 C8 CD"),
        hex!("FA CB 35 8D 46 0C FF 5E"),
        hex!("38 26 FD 9A D0 C1 50 C4"),
        hex!("C1 26 8E 3C D6 D9 85 91"),
        hex!("E4 90 9E 6E CE 1E 3A 65"),
        hex!("CC 16 E4 3A 46 56 04 0A"),
    ];
    assert_eq!(round_keys, expected.map(|k| k.to_vec()));
}

#[test]
fn test_deal_256_round_keys() {
    let key = hex!("17 DE 7A 92 87 15 7C A2 63 A7 03 5E 5B 7B AF E2 71 6F B1 18 DD DD 56 3E 6A E9 FF AE 1E F8 6F BB");
    let round_keys = DealKeyExpansion.generate_round_keys(&key).unwrap();
    let expected = [
        hex!("3D F8 D4 27 44 0C 09 72"),
        hex!("99 D1 65 8D 2E 50 C3 39"),
        hex!("01 FF CF 7B 16 35 E6 04"),
        hex!("13 90 C2 3E 72 49 3B 97"),
        hex!("7A B2 E2 83 23 9B A4 EF"),
        hex!("BC 73 AC 98 F9 4E D0 02"),
        hex!("5D DA 95 92 D5 11 E2 39"),
        hex!("4A 81 B0 B4 44 B9 69 C7"),
    ];
    assert_eq!(round_keys, expected.map(|k| k.to_vec()));
}

#[test]
fn test_deal_round_function_is_des() {
    let adapter = DesAdapter::new();
    let out = adapter
        .transform(&hex!("54 E5 EF 8D 21 7A 32 A6"), &hex!("43 62 E6 53 1C A9 0B"))
        .unwrap();
    assert_eq!(out, hex!("F4 01 21 31 37 54 32 BF"));
}

#[test]
fn test_deal_roundtrip_all_key_sizes() {
    let plaintext = *b"sixteen byte msg";
    for (len, rounds) in [(16, 6), (24, 6), (32, 8)] {
        let key: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(37)).collect();
        let deal = DEAL::new(&key).unwrap();
        assert_eq!(deal.rounds(), rounds);
        assert_eq!(deal.block_size(), 16);

        let ciphertext = deal.encrypt_block(&plaintext).unwrap();
        assert_ne!(ciphertext, plaintext);
        assert_eq!(deal.decrypt_block(&ciphertext).unwrap(), plaintext);
    }
}

#[test]
fn test_deal_rejects_bad_lengths() {
    assert!(DEAL::new(&[0u8; 8]).is_err());
    assert!(DEAL::new(&[0u8; 20]).is_err());

    let deal = DEAL::new(&[0u8; 16]).unwrap();
    assert!(deal.encrypt_block(&[0u8; 8]).is_err());
}
