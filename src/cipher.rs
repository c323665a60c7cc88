use crate::{Ciphertext, Fork, Plaintext};

pub mod forkskinny;

pub use forkskinny::{ForkSkinny128_256, ForkSkinny128_384, InvalidKeyLength};

// TODO Implement the 64-bit block variant ForkSkinny-64-192, which needs a
// 4-bit S-box over nibble-packed rows.

/// A [forkcipher](crate::doc::forkcipher) encrypts and decrypts data in blocks
/// of fixed size, producing *two* ciphertext blocks from every plaintext
/// block.
///
/// A regular block cipher is a keyed permutation: one plaintext block in, one
/// ciphertext block out. A forkcipher instead expands
/// each block into a pair of sibling blocks (the [fork](crate::Fork)), each of
/// which behaves like the output of an independent keyed permutation. Modes
/// built on top of this primitive use one sibling as the ciphertext and the
/// other as an authentication tag, which is what makes forkciphers attractive
/// for very short messages.
///
/// The encrypt and decrypt halves must agree: decrypting the right block of a
/// fork must return the original plaintext, and reconstructing from the right
/// block must return the left block.
pub trait ForkCipher: ForkEncrypt + ForkDecrypt<Block = <Self as ForkEncrypt>::Block>
where
    Self: ForkEncrypt<Block = <Self as ForkCipher>::Block>,
{
    type Block;
}

/// The encryption half of a [forkcipher](ForkCipher).
pub trait ForkEncrypt {
    type Block;

    /// Encrypt the plaintext into both output blocks.
    fn encrypt(&self, data: Plaintext<Self::Block>) -> Fork<Ciphertext<Self::Block>>;

    /// Encrypt the plaintext into the left output block only.
    fn encrypt_left(&self, data: Plaintext<Self::Block>) -> Ciphertext<Self::Block>;

    /// Encrypt the plaintext into the right output block only.
    fn encrypt_right(&self, data: Plaintext<Self::Block>) -> Ciphertext<Self::Block>;
}

/// The decryption half of a [forkcipher](ForkCipher).
///
/// All operations start from the *right* output block. Inverting the left
/// block is a separate construction which this trait does not offer.
pub trait ForkDecrypt {
    type Block;

    /// Decrypt the right output block back into the plaintext.
    fn decrypt(&self, data: Ciphertext<Self::Block>) -> Plaintext<Self::Block>;

    /// Recompute the left output block from the right one, without recovering
    /// the plaintext.
    fn reconstruct(&self, data: Ciphertext<Self::Block>) -> Ciphertext<Self::Block>;

    /// Decrypt the right output block into the plaintext and the left sibling
    /// at once, sharing the rounds common to both.
    fn decrypt_fork(
        &self,
        data: Ciphertext<Self::Block>,
    ) -> (Plaintext<Self::Block>, Ciphertext<Self::Block>);
}
