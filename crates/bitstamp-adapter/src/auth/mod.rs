/*
[INPUT]:  Account credentials and the system clock
[OUTPUT]: Credential sets and strictly increasing nonces
[POS]:    Auth layer - handles Bitstamp API authentication material
[UPDATE]: When credential handling or nonce policy changes
*/

pub mod credentials;
pub mod nonce;

pub use credentials::Credentials;
pub use nonce::{NonceGenerator, clock_nonce};
