//! Documentation-only module, explaining concepts referenced from the API
//! docs.

pub mod forkcipher;
