/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod funding;
pub mod private;
pub mod public;
pub mod signature;
pub mod trade;
pub mod transport;

pub use error::{BitstampError, Result};
pub use signature::RequestSigner;

pub use client::{BASE_URL, BitstampClient, ClientConfig, Payload};
pub use private::BitstampPrivateClient;
pub use transport::{HttpRequest, HttpTransport, MockTransport, RawResponse, ReqwestTransport};
