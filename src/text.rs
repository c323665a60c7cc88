/// Unencrypted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plaintext<T>(pub T);

/// Encrypted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ciphertext<T>(pub T);

/// The pair of sibling blocks produced by one forkcipher encryption.
///
/// Both blocks are full-size ciphertexts of the same plaintext under the same
/// tweakey, related only through the shared trunk of rounds that produced
/// them. Given the right block, the left block can be recomputed without
/// first recovering the plaintext (see
/// [`ForkDecrypt::reconstruct`](crate::ForkDecrypt::reconstruct)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fork<T> {
    pub left: T,
    pub right: T,
}
