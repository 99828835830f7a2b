use super::*;
use crate::block::Aes128;
use crate::types::Aes128Key;
use crate::Error;

fn fixture() -> Ctr<Aes128> {
    let key = Aes128Key::new(*b"128bitsforkeysss");
    Ctr::new(Aes128::new(&key).unwrap())
}

#[test]
fn known_vector() {
    let ctr = fixture();
    let nonce = Iv::new(*b"9876543210abcdef");
    let ciphertext = ctr.encrypt(b"Let's test if this is working!", &nonce).unwrap();

    assert_eq!(&ciphertext[..16], b"9876543210abcdef");
    assert_eq!(
        hex::encode(&ciphertext[16..]),
        "bf72dcf98d8f7a2e124790edd727dbd0ba4dfdbbf0f7f7cb28d7f4ba0d61"
    );
    assert_eq!(
        ctr.decrypt(&ciphertext).unwrap(),
        b"Let's test if this is working!"
    );
}

#[test]
fn no_padding_body_length_equals_plaintext_length() {
    let ctr = fixture();
    let nonce = Iv::new([0u8; 16]);
    for len in [0usize, 1, 15, 16, 17, 33] {
        let plaintext = vec![0xA5u8; len];
        let ciphertext = ctr.encrypt(&plaintext, &nonce).unwrap();
        assert_eq!(ciphertext.len(), 16 + len);
    }
}

#[test]
fn encrypt_and_decrypt_are_the_same_operation() {
    let ctr = fixture();
    let nonce = Iv::new(*b"0123456789abcdef");
    let plaintext = b"stream cipher semantics";

    let ciphertext = ctr.encrypt(plaintext, &nonce).unwrap();
    // re-applying the keystream to the body recovers the plaintext
    let reapplied = ctr.encrypt(&ciphertext[16..], &nonce).unwrap();
    assert_eq!(&reapplied[16..], plaintext);
}

#[test]
fn counter_carry_propagates_leftward() {
    let ctr = fixture();
    // nonce ends in 0xFF so the very first increment carries into byte 14
    let mut nonce_bytes = [0u8; 16];
    nonce_bytes[15] = 0xFF;
    let nonce = Iv::new(nonce_bytes);

    let ciphertext = ctr.encrypt(&[0u8; 48], &nonce).unwrap();
    // zero plaintext makes the body the raw keystream; block 2 must be the
    // encryption of ...00 01 00, not ...00 00 00
    let mut expected = nonce_bytes;
    expected[14] = 0x01;
    expected[15] = 0x00;

    use crate::block::BlockCipher;
    let key = Aes128Key::new(*b"128bitsforkeysss");
    let cipher = Aes128::new(&key).unwrap();
    cipher.encrypt_block(&mut expected).unwrap();
    assert_eq!(&ciphertext[32..48], &expected);
}

#[test]
fn full_overflow_widens_the_counter() {
    let mut counter = vec![0xFFu8; 16];
    increment_counter(&mut counter);
    assert_eq!(counter.len(), 17);
    assert_eq!(counter[0], 0x01);
    assert!(counter[1..].iter().all(|&b| b == 0));
}

#[test]
fn decrypt_requires_more_than_a_nonce() {
    let ctr = fixture();
    assert_eq!(
        ctr.decrypt(&[0u8; 16]).unwrap_err(),
        Error::CiphertextTooShort {
            mode: "CTR",
            actual: 16,
            min: 17,
        }
    );
    assert!(ctr.decrypt(&[0u8; 17]).is_ok());
}
