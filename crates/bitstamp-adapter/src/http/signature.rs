/*
[INPUT]:  Nonce and account credentials
[OUTPUT]: Uppercase hex HMAC-SHA256 request signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or message layout
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Signs private requests with the account's API secret
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Message covered by the signature: `{nonce}{customer_id}{api_key}`
    pub fn message(&self, nonce: u64) -> String {
        format!(
            "{nonce}{}{}",
            self.credentials.customer_id(),
            self.credentials.api_key()
        )
    }

    /// HMAC-SHA256 of [`Self::message`] keyed by the API secret, uppercase hex
    pub fn sign(&self, nonce: u64) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.api_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(self.message(nonce).as_bytes());
        hex::encode_upper(mac.finalize().into_bytes())
    }
}
