//! Domain layer: request-scoped types, error taxonomy and the model trait.

pub mod error;
pub mod traits;
pub mod types;

pub use error::ProcessError;
pub use traits::GenerativeModel;
pub use types::{MediaPayload, ProcessRequest, ProcessResponse};
