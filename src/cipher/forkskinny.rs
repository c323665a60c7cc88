//! ForkSkinny is a tweakable forkcipher built from the Skinny block cipher.
//!
//! A [forkcipher](crate::doc::forkcipher) turns one 128-bit plaintext block
//! into two 128-bit ciphertext blocks under a single tweakey. The plaintext
//! first runs through a common trunk of rounds up to the *forking point*;
//! from there the state feeds two independent tails of rounds. The tail run
//! directly from the forking state produces the **right** block. For the
//! **left** block, a fixed [branching constant](BRANCHING_CONSTANT) is XORed
//! into the forking state first, so the two tails behave as unrelated keyed
//! permutations that merely share a prefix.
//!
//! Because the right tail and the trunk are both invertible, the right block
//! alone supports two inverse operations: walking the trunk back down yields
//! the plaintext, and re-entering the left tail from the recovered forking
//! state yields the left block without ever touching the plaintext. Inverting
//! the left block is not offered.
//!
//! Two tweakey sizes are supported, differing only in their round counts and
//! the number of expanded [schedules](Schedule):
//!
//! | Variant | Tweakey | Trunk rounds | Tail rounds |
//! |---------|---------|--------------|-------------|
//! | [`ForkSkinny128_256`] | 256 bits (TK1, TK2) | 21 | 27 |
//! | [`ForkSkinny128_384`] | 384 bits (TK1, TK2, TK3) | 25 | 31 |
//!
//! The cipher is specified in [Forkcipher: a New Primitive for Authenticated
//! Encryption of Very Short Messages](https://eprint.iacr.org/2019/1004) by
//! Andreeva et al.; the round function, tweakey schedule and S-box are those
//! of [Skinny](https://eprint.iacr.org/2016/660).
//!
//! You can read about the implementation details in the [`encrypt`] and
//! [`decrypt_fork`] functions and the bit-sliced [primitives](sbox).

mod rounds;
mod rows;
mod schedule;

pub use {
    rounds::{decrypt_rounds, encrypt_rounds},
    rows::{inv_sbox, lfsr2, lfsr3, permute_tweakey, rotate_cells, sbox, State},
    schedule::{expand_tk1, expand_tk2, expand_tk3, Schedule, RC},
};

use {
    crate::{Ciphertext, Fork, ForkCipher, ForkDecrypt, ForkEncrypt, Key, Plaintext},
    std::fmt,
};

const FS128_256_TKS: usize = 2;
const FS128_256_BEFORE: usize = 21;
const FS128_256_AFTER: usize = 27;
const FS128_256_ROUNDS: usize = FS128_256_BEFORE + 2 * FS128_256_AFTER;

const FS128_384_TKS: usize = 3;
const FS128_384_BEFORE: usize = 25;
const FS128_384_AFTER: usize = 31;
const FS128_384_ROUNDS: usize = FS128_384_BEFORE + 2 * FS128_384_AFTER;

/// The branching constant, XORed into the forking state before the left tail
/// runs.
///
/// A fixed, unkeyed value: its only job is to separate the starting states of
/// the two tails so that the left and right blocks look like outputs of
/// independent permutations. Read cell by cell it is the byte update of
/// [`lfsr2`] iterated across the block starting from `0x01`.
pub const BRANCHING_CONSTANT: [u32; 4] = [0x08040201, 0x82412010, 0x28140A05, 0x8844A251];

/// [ForkSkinny](self) with a 256-bit tweakey.
#[derive(Debug, Clone)]
pub struct ForkSkinny128_256 {
    tk1: Schedule<FS128_256_ROUNDS>,
    tk2: Schedule<FS128_256_ROUNDS>,
}

impl ForkSkinny128_256 {
    /// Expand the tweakey into the per-round schedules.
    pub fn new(key: Key<[u8; 32]>) -> Self {
        let [tk1, tk2] = key.words();
        Self {
            tk1: expand_tk1(tk1),
            tk2: expand_tk2(tk2),
        }
    }

    /// Like [`new`](Self::new), for keys whose length is only known at
    /// runtime. The slice must be exactly 32 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        key.try_into()
            .map(|key| Self::new(Key(key)))
            .map_err(|_| InvalidKeyLength)
    }

    fn schedules(&self) -> [&Schedule<FS128_256_ROUNDS>; FS128_256_TKS] {
        [&self.tk1, &self.tk2]
    }
}

impl ForkEncrypt for ForkSkinny128_256 {
    type Block = [u8; 16];

    fn encrypt(&self, data: Plaintext<Self::Block>) -> Fork<Ciphertext<Self::Block>> {
        let (left, right) = encrypt::<
            FS128_256_TKS,
            FS128_256_BEFORE,
            FS128_256_AFTER,
            FS128_256_ROUNDS,
        >(self.schedules(), data.0);
        Fork {
            left: Ciphertext(left),
            right: Ciphertext(right),
        }
    }

    fn encrypt_left(&self, data: Plaintext<Self::Block>) -> Ciphertext<Self::Block> {
        Ciphertext(encrypt_left::<
            FS128_256_TKS,
            FS128_256_BEFORE,
            FS128_256_AFTER,
            FS128_256_ROUNDS,
        >(self.schedules(), data.0))
    }

    fn encrypt_right(&self, data: Plaintext<Self::Block>) -> Ciphertext<Self::Block> {
        Ciphertext(encrypt_right::<
            FS128_256_TKS,
            FS128_256_BEFORE,
            FS128_256_AFTER,
            FS128_256_ROUNDS,
        >(self.schedules(), data.0))
    }
}

impl ForkDecrypt for ForkSkinny128_256 {
    type Block = [u8; 16];

    fn decrypt(&self, data: Ciphertext<Self::Block>) -> Plaintext<Self::Block> {
        Plaintext(decrypt::<
            FS128_256_TKS,
            FS128_256_BEFORE,
            FS128_256_AFTER,
            FS128_256_ROUNDS,
        >(self.schedules(), data.0))
    }

    fn reconstruct(&self, data: Ciphertext<Self::Block>) -> Ciphertext<Self::Block> {
        Ciphertext(reconstruct::<
            FS128_256_TKS,
            FS128_256_BEFORE,
            FS128_256_AFTER,
            FS128_256_ROUNDS,
        >(self.schedules(), data.0))
    }

    fn decrypt_fork(
        &self,
        data: Ciphertext<Self::Block>,
    ) -> (Plaintext<Self::Block>, Ciphertext<Self::Block>) {
        let (plain, left) = decrypt_fork::<
            FS128_256_TKS,
            FS128_256_BEFORE,
            FS128_256_AFTER,
            FS128_256_ROUNDS,
        >(self.schedules(), data.0);
        (Plaintext(plain), Ciphertext(left))
    }
}

impl ForkCipher for ForkSkinny128_256 {
    type Block = [u8; 16];
}

/// [ForkSkinny](self) with a 384-bit tweakey.
#[derive(Debug, Clone)]
pub struct ForkSkinny128_384 {
    tk1: Schedule<FS128_384_ROUNDS>,
    tk2: Schedule<FS128_384_ROUNDS>,
    tk3: Schedule<FS128_384_ROUNDS>,
}

impl ForkSkinny128_384 {
    /// Expand the tweakey into the per-round schedules.
    pub fn new(key: Key<[u8; 48]>) -> Self {
        let [tk1, tk2, tk3] = key.words();
        Self {
            tk1: expand_tk1(tk1),
            tk2: expand_tk2(tk2),
            tk3: expand_tk3(tk3),
        }
    }

    /// Like [`new`](Self::new), for keys whose length is only known at
    /// runtime. The slice must be exactly 48 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        key.try_into()
            .map(|key| Self::new(Key(key)))
            .map_err(|_| InvalidKeyLength)
    }

    fn schedules(&self) -> [&Schedule<FS128_384_ROUNDS>; FS128_384_TKS] {
        [&self.tk1, &self.tk2, &self.tk3]
    }
}

impl ForkEncrypt for ForkSkinny128_384 {
    type Block = [u8; 16];

    fn encrypt(&self, data: Plaintext<Self::Block>) -> Fork<Ciphertext<Self::Block>> {
        let (left, right) = encrypt::<
            FS128_384_TKS,
            FS128_384_BEFORE,
            FS128_384_AFTER,
            FS128_384_ROUNDS,
        >(self.schedules(), data.0);
        Fork {
            left: Ciphertext(left),
            right: Ciphertext(right),
        }
    }

    fn encrypt_left(&self, data: Plaintext<Self::Block>) -> Ciphertext<Self::Block> {
        Ciphertext(encrypt_left::<
            FS128_384_TKS,
            FS128_384_BEFORE,
            FS128_384_AFTER,
            FS128_384_ROUNDS,
        >(self.schedules(), data.0))
    }

    fn encrypt_right(&self, data: Plaintext<Self::Block>) -> Ciphertext<Self::Block> {
        Ciphertext(encrypt_right::<
            FS128_384_TKS,
            FS128_384_BEFORE,
            FS128_384_AFTER,
            FS128_384_ROUNDS,
        >(self.schedules(), data.0))
    }
}

impl ForkDecrypt for ForkSkinny128_384 {
    type Block = [u8; 16];

    fn decrypt(&self, data: Ciphertext<Self::Block>) -> Plaintext<Self::Block> {
        Plaintext(decrypt::<
            FS128_384_TKS,
            FS128_384_BEFORE,
            FS128_384_AFTER,
            FS128_384_ROUNDS,
        >(self.schedules(), data.0))
    }

    fn reconstruct(&self, data: Ciphertext<Self::Block>) -> Ciphertext<Self::Block> {
        Ciphertext(reconstruct::<
            FS128_384_TKS,
            FS128_384_BEFORE,
            FS128_384_AFTER,
            FS128_384_ROUNDS,
        >(self.schedules(), data.0))
    }

    fn decrypt_fork(
        &self,
        data: Ciphertext<Self::Block>,
    ) -> (Plaintext<Self::Block>, Ciphertext<Self::Block>) {
        let (plain, left) = decrypt_fork::<
            FS128_384_TKS,
            FS128_384_BEFORE,
            FS128_384_AFTER,
            FS128_384_ROUNDS,
        >(self.schedules(), data.0);
        (Plaintext(plain), Ciphertext(left))
    }
}

impl ForkCipher for ForkSkinny128_384 {
    type Block = [u8; 16];
}

/// Encrypt one block into both output blocks.
///
/// The trunk `[0, BEFORE)` runs once; the right tail `[BEFORE, BEFORE +
/// AFTER)` runs on a copy of the forking state, and the left tail `[BEFORE +
/// AFTER, ROUNDS)` runs on the original after the branching constant is
/// added. Copying at the fork is required here: the right tail destroys its
/// state, so the left tail could not rewind from it.
pub fn encrypt<
    const TKS: usize,    // Number of tweakey schedules.
    const BEFORE: usize, // Rounds in the common trunk.
    const AFTER: usize,  // Rounds in each output tail.
    const ROUNDS: usize, // BEFORE + 2 * AFTER.
>(
    schedules: [&Schedule<ROUNDS>; TKS],
    data: [u8; 16],
) -> ([u8; 16], [u8; 16]) {
    debug_assert_eq!(BEFORE + 2 * AFTER, ROUNDS);
    let mut state = State::from_bytes(data);
    encrypt_rounds(&mut state, schedules, 0, BEFORE);

    let mut right = state;
    encrypt_rounds(&mut right, schedules, BEFORE, BEFORE + AFTER);

    branch(&mut state);
    encrypt_rounds(&mut state, schedules, BEFORE + AFTER, ROUNDS);
    (state.to_bytes(), right.to_bytes())
}

/// Encrypt one block into the left output block only.
///
/// With no right tail to feed, the branching constant is added into the
/// forking state directly instead of into a copy.
pub fn encrypt_left<
    const TKS: usize,    // Number of tweakey schedules.
    const BEFORE: usize, // Rounds in the common trunk.
    const AFTER: usize,  // Rounds in each output tail.
    const ROUNDS: usize, // BEFORE + 2 * AFTER.
>(
    schedules: [&Schedule<ROUNDS>; TKS],
    data: [u8; 16],
) -> [u8; 16] {
    debug_assert_eq!(BEFORE + 2 * AFTER, ROUNDS);
    let mut state = State::from_bytes(data);
    encrypt_rounds(&mut state, schedules, 0, BEFORE);
    branch(&mut state);
    encrypt_rounds(&mut state, schedules, BEFORE + AFTER, ROUNDS);
    state.to_bytes()
}

/// Encrypt one block into the right output block only.
///
/// The trunk and the right tail are adjacent index windows, so they fuse
/// into a single run of forward rounds.
pub fn encrypt_right<
    const TKS: usize,    // Number of tweakey schedules.
    const BEFORE: usize, // Rounds in the common trunk.
    const AFTER: usize,  // Rounds in each output tail.
    const ROUNDS: usize, // BEFORE + 2 * AFTER.
>(
    schedules: [&Schedule<ROUNDS>; TKS],
    data: [u8; 16],
) -> [u8; 16] {
    debug_assert_eq!(BEFORE + 2 * AFTER, ROUNDS);
    let mut state = State::from_bytes(data);
    encrypt_rounds(&mut state, schedules, 0, BEFORE + AFTER);
    state.to_bytes()
}

/// Decrypt the right output block back into the plaintext.
///
/// Inverse rounds from the end of the right tail all the way down to round
/// zero; the branching constant never entered this path, so nothing needs to
/// be removed at the forking point.
pub fn decrypt<
    const TKS: usize,    // Number of tweakey schedules.
    const BEFORE: usize, // Rounds in the common trunk.
    const AFTER: usize,  // Rounds in each output tail.
    const ROUNDS: usize, // BEFORE + 2 * AFTER.
>(
    schedules: [&Schedule<ROUNDS>; TKS],
    data: [u8; 16],
) -> [u8; 16] {
    debug_assert_eq!(BEFORE + 2 * AFTER, ROUNDS);
    let mut state = State::from_bytes(data);
    decrypt_rounds(&mut state, schedules, BEFORE + AFTER, 0);
    state.to_bytes()
}

/// Recompute the left output block from the right one.
///
/// Inverse rounds recover the forking state from the right block, then the
/// branching constant is added and the left tail runs forward.
pub fn reconstruct<
    const TKS: usize,    // Number of tweakey schedules.
    const BEFORE: usize, // Rounds in the common trunk.
    const AFTER: usize,  // Rounds in each output tail.
    const ROUNDS: usize, // BEFORE + 2 * AFTER.
>(
    schedules: [&Schedule<ROUNDS>; TKS],
    data: [u8; 16],
) -> [u8; 16] {
    debug_assert_eq!(BEFORE + 2 * AFTER, ROUNDS);
    let mut state = State::from_bytes(data);
    decrypt_rounds(&mut state, schedules, BEFORE + AFTER, BEFORE);
    branch(&mut state);
    encrypt_rounds(&mut state, schedules, BEFORE + AFTER, ROUNDS);
    state.to_bytes()
}

/// Decrypt the right output block into the plaintext and the left sibling at
/// once.
///
/// The inverse walk back to the forking point is shared; from there a copy
/// feeds the left tail forward while the original continues down the trunk.
pub fn decrypt_fork<
    const TKS: usize,    // Number of tweakey schedules.
    const BEFORE: usize, // Rounds in the common trunk.
    const AFTER: usize,  // Rounds in each output tail.
    const ROUNDS: usize, // BEFORE + 2 * AFTER.
>(
    schedules: [&Schedule<ROUNDS>; TKS],
    data: [u8; 16],
) -> ([u8; 16], [u8; 16]) {
    debug_assert_eq!(BEFORE + 2 * AFTER, ROUNDS);
    let mut state = State::from_bytes(data);
    decrypt_rounds(&mut state, schedules, BEFORE + AFTER, BEFORE);

    let mut left = state;
    branch(&mut left);
    encrypt_rounds(&mut left, schedules, BEFORE + AFTER, ROUNDS);

    decrypt_rounds(&mut state, schedules, BEFORE, 0);
    (state.to_bytes(), left.to_bytes())
}

/// XOR the [branching constant](BRANCHING_CONSTANT) into the forking state.
fn branch(state: &mut State) {
    for (row, constant) in state.0.iter_mut().zip(BRANCHING_CONSTANT) {
        *row ^= constant;
    }
}

/// The key slice passed to a cipher did not have the variant's tweakey
/// length.
#[derive(Debug)]
pub struct InvalidKeyLength;

impl fmt::Display for InvalidKeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key slice does not match the tweakey length")
    }
}

impl std::error::Error for InvalidKeyLength {}
