//! Botgen Schema Model
//!
//! This crate provides the in-memory representation of a Bot API description:
//! every domain type, every remote method, and their ordered fields. The model
//! is loaded once per generation run and consumed read-only by the
//! `botgen-gen` code generator.
//!
//! ## Core Types
//!
//! - [`ApiDescription`] - The root: all types and methods, in document order
//! - [`TypeDescription`] - A domain entity (e.g. `Chat`, `Message`)
//! - [`MethodDescription`] - A remote operation (e.g. `sendMessage`)
//! - [`FieldDescription`] - A field or parameter with its candidate type union
//! - [`WirePrimitive`] - Scalar wire types (`Integer`, `String`, ...)
//! - [`ModelError`] - Errors raised while parsing a schema document
//!
//! ## Examples
//!
//! ```
//! use botgen_model::ApiDescription;
//!
//! let api = ApiDescription::from_json(r#"{
//!     "types": {
//!         "Chat": {
//!             "name": "Chat",
//!             "fields": [
//!                 {"name": "id", "types": ["Integer"], "required": true, "description": "Chat id"}
//!             ]
//!         }
//!     },
//!     "methods": {
//!         "leaveChat": {
//!             "name": "leaveChat",
//!             "returns": ["Boolean"],
//!             "fields": [
//!                 {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": ""}
//!             ]
//!         }
//!     }
//! }"#).unwrap();
//!
//! let chat = api.get_type("Chat").unwrap();
//! assert_eq!(chat.fields[0].name, "id");
//!
//! let leave = api.get_method("leaveChat").unwrap();
//! assert_eq!(leave.fields[0].preferred_type(), Some("Integer"));
//! ```

pub mod api;
pub mod error;
pub mod prelude;
pub mod types;

// Re-export main types at crate root
pub use api::ApiDescription;
pub use error::ModelError;
pub use types::{FieldDescription, MethodDescription, TypeDescription, WirePrimitive};
