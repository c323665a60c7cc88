//! Known-answer tests and primitive-level properties for ForkSkinny.

use {
    crate::{
        forkskinny::{
            decrypt_rounds,
            encrypt_rounds,
            expand_tk1,
            expand_tk2,
            inv_sbox,
            lfsr2,
            lfsr3,
            sbox,
            State,
            RC,
        },
        Ciphertext,
        ForkCipher,
        ForkEncrypt,
        ForkSkinny128_256,
        ForkSkinny128_384,
        Key,
        Plaintext,
    },
    rand::Rng,
};

/// The Skinny-128 S-box as the byte table the cipher specification
/// tabulates. The implementation must never look bytes up in a table, but
/// the tests are free to compare against one.
const SBOX: [u8; 256] = [
    0x65, 0x4c, 0x6a, 0x42, 0x4b, 0x63, 0x43, 0x6b, 0x55, 0x75, 0x5a, 0x7a,
    0x53, 0x73, 0x5b, 0x7b, 0x35, 0x8c, 0x3a, 0x81, 0x89, 0x33, 0x80, 0x3b,
    0x95, 0x25, 0x98, 0x2a, 0x90, 0x23, 0x99, 0x2b, 0xe5, 0xcc, 0xe8, 0xc1,
    0xc9, 0xe0, 0xc0, 0xe9, 0xd5, 0xf5, 0xd8, 0xf8, 0xd0, 0xf0, 0xd9, 0xf9,
    0xa5, 0x1c, 0xa8, 0x12, 0x1b, 0xa0, 0x13, 0xa9, 0x05, 0xb5, 0x0a, 0xb8,
    0x03, 0xb0, 0x0b, 0xb9, 0x32, 0x88, 0x3c, 0x85, 0x8d, 0x34, 0x84, 0x3d,
    0x91, 0x22, 0x9c, 0x2c, 0x94, 0x24, 0x9d, 0x2d, 0x62, 0x4a, 0x6c, 0x45,
    0x4d, 0x64, 0x44, 0x6d, 0x52, 0x72, 0x5c, 0x7c, 0x54, 0x74, 0x5d, 0x7d,
    0xa1, 0x1a, 0xac, 0x15, 0x1d, 0xa4, 0x14, 0xad, 0x02, 0xb1, 0x0c, 0xbc,
    0x04, 0xb4, 0x0d, 0xbd, 0xe1, 0xc8, 0xec, 0xc5, 0xcd, 0xe4, 0xc4, 0xed,
    0xd1, 0xf1, 0xdc, 0xfc, 0xd4, 0xf4, 0xdd, 0xfd, 0x36, 0x8e, 0x38, 0x82,
    0x8b, 0x30, 0x83, 0x39, 0x96, 0x26, 0x9a, 0x28, 0x93, 0x20, 0x9b, 0x29,
    0x66, 0x4e, 0x68, 0x41, 0x49, 0x60, 0x40, 0x69, 0x56, 0x76, 0x58, 0x78,
    0x50, 0x70, 0x59, 0x79, 0xa6, 0x1e, 0xaa, 0x11, 0x19, 0xa3, 0x10, 0xab,
    0x06, 0xb6, 0x08, 0xba, 0x00, 0xb3, 0x09, 0xbb, 0xe6, 0xce, 0xea, 0xc2,
    0xcb, 0xe3, 0xc3, 0xeb, 0xd6, 0xf6, 0xda, 0xfa, 0xd3, 0xf3, 0xdb, 0xfb,
    0x31, 0x8a, 0x3e, 0x86, 0x8f, 0x37, 0x87, 0x3f, 0x92, 0x21, 0x9e, 0x2e,
    0x97, 0x27, 0x9f, 0x2f, 0x61, 0x48, 0x6e, 0x46, 0x4f, 0x67, 0x47, 0x6f,
    0x51, 0x71, 0x5e, 0x7e, 0x57, 0x77, 0x5f, 0x7f, 0xa2, 0x18, 0xae, 0x16,
    0x1f, 0xa7, 0x17, 0xaf, 0x01, 0xb2, 0x0e, 0xbe, 0x07, 0xb7, 0x0f, 0xbf,
    0xe2, 0xca, 0xee, 0xc6, 0xcf, 0xe7, 0xc7, 0xef, 0xd2, 0xf2, 0xde, 0xfe,
    0xd7, 0xf7, 0xdf, 0xff,
];

/// The published round-constant sequence, pinned as a literal to guard the
/// generated [`RC`] table.
const RC_TABLE: [u8; 87] = [
    0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f, 0x7e, 0x7d, 0x7b, 0x77, 0x6f,
    0x5f, 0x3e, 0x7c, 0x79, 0x73, 0x67, 0x4f, 0x1e, 0x3d, 0x7a, 0x75,
    0x6b, 0x57, 0x2e, 0x5c, 0x38, 0x70, 0x61, 0x43, 0x06, 0x0d, 0x1b,
    0x37, 0x6e, 0x5d, 0x3a, 0x74, 0x69, 0x53, 0x26, 0x4c, 0x18, 0x31,
    0x62, 0x45, 0x0a, 0x15, 0x2b, 0x56, 0x2c, 0x58, 0x30, 0x60, 0x41,
    0x02, 0x05, 0x0b, 0x17, 0x2f, 0x5e, 0x3c, 0x78, 0x71, 0x63, 0x47,
    0x0e, 0x1d, 0x3b, 0x76, 0x6d, 0x5b, 0x36, 0x6c, 0x59, 0x32, 0x64,
    0x49, 0x12, 0x25, 0x4a, 0x14, 0x29, 0x52, 0x24, 0x48, 0x10,
];

/// ForkSkinny-128-256 test vectors.
#[test]
fn forkskinny_128_256_vectors() {
    vector_256(
        "0000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "2d95443b6eb3ad88fd9e77a582f0a69a",
        "9ced140351dc571420a0470346bb9b29",
    );

    vector_256(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "000102030405060708090a0b0c0d0e0f",
        "69410b0a12b542361d786d173f5c3527",
        "1e7b7be7d968c4118469d63dd5b69636",
    );
}

/// ForkSkinny-128-384 test vectors.
#[test]
fn forkskinny_128_384_vectors() {
    vector_384(
        "000000000000000000000000000000000000000000000000000000000000000000000000\
         000000000000000000000000",
        "00000000000000000000000000000000",
        "2ac92cd3cf1d7691fe183a6839def8bd",
        "6090c6f23e0b0f51559ec90fe17c738f",
    );

    vector_384(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20212223\
         2425262728292a2b2c2d2e2f",
        "000102030405060708090a0b0c0d0e0f",
        "636ef59e1a584f00c824ef328ab152b0",
        "b1ae079c774974d1c964f4a2ad602d31",
    );
}

fn vector_256(key: &str, data: &str, left: &str, right: &str) {
    let cip = ForkSkinny128_256::new(Key(bytes(key)));
    check(&cip, bytes(data), bytes(left), bytes(right));
}

fn vector_384(key: &str, data: &str, left: &str, right: &str) {
    let cip = ForkSkinny128_384::new(Key(bytes(key)));
    check(&cip, bytes(data), bytes(left), bytes(right));
}

/// Check one known-answer vector through every driver operation.
fn check<Cip: ForkCipher<Block = [u8; 16]>>(
    cip: &Cip,
    data: [u8; 16],
    left: [u8; 16],
    right: [u8; 16],
) {
    let data = Plaintext(data);
    let fork = cip.encrypt(data);
    assert_eq!(fork.left.0, left);
    assert_eq!(fork.right.0, right);

    // Requesting a single block must give the same bytes.
    assert_eq!(cip.encrypt_left(data).0, left);
    assert_eq!(cip.encrypt_right(data).0, right);

    // The right block inverts back into the plaintext and its sibling.
    assert_eq!(cip.decrypt(Ciphertext(right)), data);
    assert_eq!(cip.reconstruct(Ciphertext(right)).0, left);
    let (plain, sibling) = cip.decrypt_fork(Ciphertext(right));
    assert_eq!(plain, data);
    assert_eq!(sibling.0, left);
}

fn bytes<const N: usize>(hex: &str) -> [u8; N] {
    hex::decode(hex).unwrap().try_into().unwrap()
}

#[test]
fn sbox_matches_published_table() {
    for (cell, &subst) in SBOX.iter().enumerate() {
        let lane = u32::from_le_bytes([cell as u8; 4]);
        assert_eq!(sbox(lane), u32::from_le_bytes([subst; 4]));
        assert_eq!(inv_sbox(u32::from_le_bytes([subst; 4])), lane);
    }
}

#[test]
fn sbox_lanes_are_independent() {
    for _ in 0..1000 {
        let word: u32 = rand::thread_rng().gen();
        let expected = u32::from_le_bytes(word.to_le_bytes().map(|b| SBOX[usize::from(b)]));
        assert_eq!(sbox(word), expected);
        assert_eq!(inv_sbox(expected), word);
    }
}

#[test]
fn round_constants_match_published_table() {
    assert_eq!(RC, RC_TABLE);
}

/// The tweakey LFSRs have order 30 on every byte lane, so no schedule entry
/// can see the same lane value twice for the wrong reason within a cycle.
#[test]
fn lfsr_lane_order_is_30() {
    for cell in 0..=255u8 {
        let lane = u32::from_le_bytes([cell; 4]);
        let mut tk2 = lane;
        let mut tk3 = lane;
        for _ in 0..30 {
            tk2 = lfsr2(tk2);
            tk3 = lfsr3(tk3);
        }
        assert_eq!(tk2, lane);
        assert_eq!(tk3, lane);
    }
}

#[test]
fn lfsrs_permute_each_lane() {
    let mut seen2 = [false; 256];
    let mut seen3 = [false; 256];
    for cell in 0..=255u8 {
        let lane = u32::from_le_bytes([cell; 4]);
        seen2[(lfsr2(lane) & 0xff) as usize] = true;
        seen3[(lfsr3(lane) & 0xff) as usize] = true;
    }
    assert!(seen2.into_iter().all(|seen| seen));
    assert!(seen3.into_iter().all(|seen| seen));
}

/// Running the round engine forward over a window and then backward over the
/// same window is the identity, whatever the window.
#[test]
fn inverse_rounds_undo_forward_rounds() {
    let tk1 = expand_tk1::<75>(rand::thread_rng().gen());
    let tk2 = expand_tk2::<75>(rand::thread_rng().gen());
    let original = State(rand::thread_rng().gen());

    for (from, to) in [(0, 21), (21, 48), (48, 75), (5, 70), (0, 75)] {
        let mut state = original;
        encrypt_rounds(&mut state, [&tk1, &tk2], from, to);
        decrypt_rounds(&mut state, [&tk1, &tk2], to, from);
        assert_eq!(state, original, "window {from}..{to}");
    }
}

/// The constant-bearing schedule never repeats an entry, even for degenerate
/// keys whose tweakey state is fully symmetric.
#[test]
fn schedule_entries_do_not_collide() {
    for key in [[0x00; 16], [0xff; 16]] {
        let schedule = expand_tk2::<87>(key);
        for i in 0..87 {
            for j in i + 1..87 {
                assert_ne!(schedule[i], schedule[j], "rounds {i} and {j} collide");
            }
        }
    }
}

#[test]
fn key_slices() {
    let key = [0x2a; 32];
    let sliced = ForkSkinny128_256::from_slice(&key).unwrap();
    let arrayed = ForkSkinny128_256::new(Key(key));
    let data = Plaintext([0x17; 16]);
    assert_eq!(sliced.encrypt(data), arrayed.encrypt(data));

    assert!(ForkSkinny128_256::from_slice(&[0; 31]).is_err());
    assert!(ForkSkinny128_256::from_slice(&[0; 48]).is_err());
    assert!(ForkSkinny128_384::from_slice(&[0; 48]).is_ok());
    assert!(ForkSkinny128_384::from_slice(&[0; 16]).is_err());
}
