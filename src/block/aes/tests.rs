use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn cipher_from_hex(key_hex: &str) -> Aes128 {
    let key = Aes128Key::from_slice(&hex::decode(key_hex).unwrap()).unwrap();
    Aes128::new(&key).unwrap()
}

#[test]
fn sbox_tables_are_exact_inverses() {
    for x in 0..=255u8 {
        assert_eq!(INV_S_BOX[S_BOX[x as usize] as usize], x);
        assert_eq!(S_BOX[INV_S_BOX[x as usize] as usize], x);
    }
}

#[test]
fn gf_mul_known_products() {
    // Worked examples from FIPS 197 section 4.2
    assert_eq!(gf_mul(0x57, 0x13), 0xfe);
    assert_eq!(gf_mul(0x57, 0x02), 0xae);
    assert_eq!(gf_mul(0x57, 0x01), 0x57);
    assert_eq!(gf_mul(0x00, 0xff), 0x00);
    // Commutativity spot check
    for (a, b) in [(0x53u8, 0xcau8), (0x02, 0x87), (0xff, 0xff)] {
        assert_eq!(gf_mul(a, b), gf_mul(b, a));
    }
}

#[test]
fn key_expansion_matches_fips_appendix_a() {
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let round_keys = Aes128::expand_key(&key);

    assert_eq!(round_keys[0].to_vec(), key);
    assert_eq!(
        round_keys[1].to_vec(),
        hex::decode("a0fafe1788542cb123a339392a6c7605").unwrap()
    );
    assert_eq!(
        round_keys[10].to_vec(),
        hex::decode("d014f9a8c9ee2589e13f0cc8b6630ca6").unwrap()
    );
}

#[test]
fn encrypt_block_fips_appendix_b() {
    let cipher = cipher_from_hex("2b7e151628aed2a6abf7158809cf4f3c");
    let mut block: [u8; 16] = hex::decode("3243f6a8885a308d313198a2e0370734")
        .unwrap()
        .try_into()
        .unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "3925841d02dc09fbdc118597196a0b32");
}

#[test]
fn encrypt_block_fips_appendix_c1() {
    let cipher = cipher_from_hex("000102030405060708090a0b0c0d0e0f");
    let mut block: [u8; 16] = hex::decode("00112233445566778899aabbccddeeff")
        .unwrap()
        .try_into()
        .unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn decrypt_block_fips_appendix_b() {
    let cipher = cipher_from_hex("2b7e151628aed2a6abf7158809cf4f3c");
    let mut block: [u8; 16] = hex::decode("3925841d02dc09fbdc118597196a0b32")
        .unwrap()
        .try_into()
        .unwrap();
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "3243f6a8885a308d313198a2e0370734");
}

#[test]
fn block_round_trips_both_directions() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xae5);
    for _ in 0..50 {
        let key = Aes128::generate_key(&mut rng);
        let cipher = Aes128::new(&key).unwrap();

        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let original = block;

        cipher.encrypt_block(&mut block).unwrap();
        assert_ne!(block, original);
        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block, original);

        // decrypt-then-encrypt is also the identity
        cipher.decrypt_block(&mut block).unwrap();
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(block, original);
    }
}

#[test]
fn state_transforms_invert_each_other() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for _ in 0..20 {
        let mut state = [0u8; 16];
        rng.fill_bytes(&mut state);
        let original = state;

        Aes128::sub_bytes(&mut state);
        Aes128::inv_sub_bytes(&mut state);
        assert_eq!(state, original);

        Aes128::shift_rows(&mut state);
        Aes128::inv_shift_rows(&mut state);
        assert_eq!(state, original);

        Aes128::mix_columns(&mut state);
        Aes128::inv_mix_columns(&mut state);
        assert_eq!(state, original);
    }
}

#[test]
fn construction_rejects_unsupported_key_sizes() {
    struct RawKey(Vec<u8>);
    impl KeyMaterial for RawKey {
        fn as_bytes(&self) -> &[u8] {
            &self.0
        }
    }

    for size in [0usize, 8, 15, 17, 24, 32] {
        let err = Aes128::new(&RawKey(vec![0u8; size])).unwrap_err();
        assert_eq!(err, Error::UnsupportedKeySize(size));
    }
    assert!(Aes128::new(&RawKey(vec![0u8; 16])).is_ok());
}

#[test]
fn debug_never_prints_round_keys() {
    let cipher = cipher_from_hex("2b7e151628aed2a6abf7158809cf4f3c");
    assert_eq!(format!("{cipher:?}"), "Aes128([REDACTED])");
}

#[test]
fn block_operations_reject_wrong_slice_lengths() {
    let cipher = cipher_from_hex("000102030405060708090a0b0c0d0e0f");
    let mut short = [0u8; 15];
    assert!(cipher.encrypt_block(&mut short).is_err());
    let mut long = [0u8; 17];
    assert!(cipher.decrypt_block(&mut long).is_err());
}
