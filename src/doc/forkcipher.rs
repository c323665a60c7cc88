//! A block cipher is a keyed permutation over fixed-size blocks: one
//! plaintext block maps to exactly one ciphertext block, and the mapping is
//! invertible under the key. A *forkcipher* relaxes the "exactly one" part:
//! a single plaintext block maps to an ordered pair of ciphertext blocks,
//! each of which individually behaves like the output of an independent
//! block cipher.
//!
//! # Why fork
//!
//! Authenticated encryption needs both a ciphertext and a tag. For long
//! messages the cost of computing the tag amortizes away, but for messages
//! of a block or less — network control frames, sensor readings — a classic
//! mode pays for two full cipher invocations. A forkcipher produces the
//! material for both in roughly one-and-a-half invocations, because the two
//! output blocks share the rounds up to the forking point.
//!
//! # Reconstruction
//!
//! The two outputs are siblings, not copies: anyone holding the key and one
//! output block can walk back to the forking point and forward again into
//! the other tail. This *reconstruction* operation is what modes use to
//! verify a tag without decrypting, and it never exposes the plaintext.
//!
//! # Tweakeys
//!
//! Like the Skinny family it is built on, ForkSkinny is a *tweakable*
//! cipher: the key material fed to the schedule is the concatenation of the
//! secret key and a public tweak, and the cipher treats the whole
//! concatenation uniformly. Which bytes are secret is a choice made by the
//! calling mode, not by the cipher.
