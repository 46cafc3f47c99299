/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums, endpoint table and request descriptors
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod descriptor;
pub mod endpoints;
pub mod enums;
pub mod models;
pub mod requests;

pub use descriptor::{Params, RequestDescriptor};
pub use endpoints::Endpoint;
pub use enums::*;
pub use models::*;
pub use requests::*;
