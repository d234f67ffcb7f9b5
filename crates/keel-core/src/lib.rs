//! # Keel Core
//!
//! The domain layer of the Keel starter: the error taxonomy, request
//! validation, message translation, and the ports infrastructure implements.
//! Pure logic with zero framework dependencies.

pub mod domain;
pub mod error;
pub mod i18n;
pub mod ports;
pub mod schema;

pub use error::{ApiError, ErrorData, ErrorKind, Issue, Thrown, serialize_error};
pub use i18n::{Language, Translator};
pub use schema::{Field, RequestPart, Schema};
