#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod cipher;
mod key;
mod text;

pub use {
    cipher::{
        forkskinny,
        ForkCipher,
        ForkDecrypt,
        ForkEncrypt,
        ForkSkinny128_256,
        ForkSkinny128_384,
        InvalidKeyLength,
    },
    key::Key,
    text::{Ciphertext, Fork, Plaintext},
};
