use super::*;
use proptest::prelude::*;

#[test]
fn partial_block_pads_to_sixteen() {
    let padded = add_padding(b"hello").unwrap();
    assert_eq!(padded.len(), 16);
    assert_eq!(&padded[..5], b"hello");
    assert!(padded[5..].iter().all(|&b| b == 11));
}

#[test]
fn full_block_gains_an_extra_block() {
    let block = [0xAAu8; 16];
    let padded = add_padding(&block).unwrap();
    assert_eq!(padded.len(), 32);
    assert_eq!(&padded[..16], &block);
    assert!(padded[16..].iter().all(|&b| b == 0x10));
}

#[test]
fn empty_block_pads_to_one_full_block() {
    let padded = add_padding(&[]).unwrap();
    assert_eq!(padded, vec![0x10; 16]);
}

#[test]
fn oversized_block_is_a_caller_error() {
    assert!(add_padding(&[0u8; 17]).is_err());
}

#[test]
fn pad_always_appends_and_aligns() {
    // 31 bytes -> one padding byte of 0x01
    let msg = [0x42u8; 31];
    let padded = pad(&msg);
    assert_eq!(padded.len(), 32);
    assert_eq!(padded[31], 0x01);

    // aligned input -> full extra block
    let msg = [0x42u8; 32];
    assert_eq!(pad(&msg).len(), 48);

    // empty input -> one block of 0x10
    assert_eq!(pad(&[]), vec![0x10; 16]);
}

#[test]
fn remove_padding_round_trips() {
    for len in 0..=16 {
        let block: Vec<u8> = (0..len as u8).map(|b| b.wrapping_add(0x20)).collect();
        let padded = add_padding(&block).unwrap();
        assert_eq!(remove_padding(&padded).unwrap(), block);
    }
}

#[test]
fn rejects_zero_length_byte() {
    let mut buf = vec![0x41u8; 16];
    buf[15] = 0x00;
    assert_eq!(remove_padding(&buf).unwrap_err(), Error::InvalidPadding);
}

#[test]
fn rejects_length_byte_beyond_block() {
    let mut buf = vec![0x41u8; 16];
    buf[15] = 0x11;
    assert_eq!(remove_padding(&buf).unwrap_err(), Error::InvalidPadding);

    // 0xFF would reach before the start of the buffer entirely
    buf[15] = 0xFF;
    assert_eq!(remove_padding(&buf).unwrap_err(), Error::InvalidPadding);
}

#[test]
fn rejects_inconsistent_run() {
    // ends in 0x06 but only the last byte is 6
    let mut buf = vec![0x41u8; 16];
    buf[15] = 0x06;
    assert_eq!(remove_padding(&buf).unwrap_err(), Error::InvalidPadding);

    // run of the right value except one byte
    let mut buf = vec![0x04u8; 16];
    buf[13] = 0x05;
    assert_eq!(remove_padding(&buf).unwrap_err(), Error::InvalidPadding);
}

#[test]
fn rejects_misaligned_or_empty_buffers() {
    assert!(remove_padding(&[]).is_err());
    assert!(remove_padding(&[0x01u8; 15]).is_err());
    assert!(remove_padding(&[0x01u8; 17]).is_err());
}

proptest! {
    #[test]
    fn pad_then_remove_is_identity(message in proptest::collection::vec(any::<u8>(), 0..96)) {
        let padded = pad(&message);
        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert!(padded.len() > message.len());
        prop_assert_eq!(remove_padding(&padded).unwrap(), message);
    }
}
