//! Convenient re-exports for working with the schema model.
//!
//! ## Examples
//!
//! ```
//! use botgen_model::prelude::*;
//!
//! let api = ApiDescription::new(vec![], vec![]).unwrap();
//! assert_eq!(api.type_count(), 0);
//! ```

pub use crate::api::ApiDescription;
pub use crate::error::ModelError;
pub use crate::types::{FieldDescription, MethodDescription, TypeDescription, WirePrimitive};
