//! Schema loading and pre-generation validation.
//!
//! The generator hard-codes a handful of schema entries: the update-kind
//! constants come from `Update`, the sticker-kind constants from
//! `Sticker.type`, and the identity-field conventions name `Message` and
//! `File`. Validation checks all of them up front so that a broken schema
//! fails before anything is rendered.
//!
//! ## Examples
//!
//! ```
//! use botgen_gen::validation::validate_api;
//! use botgen_model::ApiDescription;
//!
//! let api = ApiDescription::from_json(r#"{"types": {"Update": {"fields": []}}}"#).unwrap();
//!
//! let err = validate_api(&api).unwrap_err();
//! assert!(err.to_string().contains("Sticker"));
//! ```

use std::fs;
use std::path::Path;

use botgen_model::ApiDescription;
use tracing::{debug, instrument};

use crate::errors::GeneratorError;
use crate::naming::{self, FILE_TYPE, MESSAGE_TYPE};

/// Source of the update-kind constants.
pub const UPDATE_TYPE: &str = "Update";

/// Source of the sticker-kind constants.
pub const STICKER_TYPE: &str = "Sticker";

/// The `Sticker` field whose description lists the sticker kinds.
pub const STICKER_KIND_FIELD: &str = "type";

/// Types the generator cannot run without.
pub const REQUIRED_TYPES: &[&str] = &[UPDATE_TYPE, STICKER_TYPE, MESSAGE_TYPE, FILE_TYPE];

/// Reads, parses and validates a schema document.
///
/// ## Errors
///
/// - `GeneratorError::ReadError` if the file cannot be read
/// - `GeneratorError::ParseError` if the document is malformed
/// - `GeneratorError::SchemaIntegrity` if a required entry is missing
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_api(path: &Path) -> Result<ApiDescription, GeneratorError> {
    let contents = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let api = ApiDescription::from_json(&contents)?;
    debug!(
        types = api.type_count(),
        methods = api.method_count(),
        "Parsed schema"
    );

    validate_api(&api)?;
    Ok(api)
}

/// Validates that every schema entry the generator depends on is present.
///
/// Performs the following checks:
///
/// 1. Each of [`REQUIRED_TYPES`] is declared.
/// 2. `Sticker` declares its `type` field.
/// 3. `Message` and `File` declare their identity fields (`message_id` and
///    `file_id`).
///
/// ## Errors
///
/// Returns `GeneratorError::SchemaIntegrity` naming the first missing entry.
pub fn validate_api(api: &ApiDescription) -> Result<(), GeneratorError> {
    for name in REQUIRED_TYPES {
        if !api.has_type(name) {
            return Err(GeneratorError::integrity(
                *name,
                format!("missing '{name}' type data"),
            ));
        }
    }

    let sticker = api
        .get_type(STICKER_TYPE)
        .ok_or_else(|| GeneratorError::integrity(STICKER_TYPE, "missing 'Sticker' type data"))?;
    if sticker.field(STICKER_KIND_FIELD).is_none() {
        return Err(GeneratorError::integrity(
            STICKER_TYPE,
            format!("missing '{STICKER_KIND_FIELD}' field"),
        ));
    }

    for name in [MESSAGE_TYPE, FILE_TYPE] {
        let identity = naming::identity_field_name(name);
        let has_identity = api
            .get_type(name)
            .is_some_and(|t| t.field(identity).is_some());
        if !has_identity {
            return Err(GeneratorError::integrity(
                name,
                format!("missing identity field '{identity}'"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_field, make_minimal_api, make_type};
    use botgen_model::TypeDescription;
    use std::io::Write;

    fn api_without(name: &str) -> ApiDescription {
        let api = make_minimal_api(vec![], vec![]);
        let types: Vec<TypeDescription> = api.types().filter(|t| t.name != name).cloned().collect();
        ApiDescription::new(types, api.methods().cloned().collect()).unwrap()
    }

    fn api_replacing(replacement: TypeDescription) -> ApiDescription {
        let api = make_minimal_api(vec![], vec![]);
        let types: Vec<TypeDescription> = api
            .types()
            .map(|t| {
                if t.name == replacement.name {
                    replacement.clone()
                } else {
                    t.clone()
                }
            })
            .collect();
        ApiDescription::new(types, api.methods().cloned().collect()).unwrap()
    }

    #[test]
    fn minimal_api_is_valid() {
        let api = make_minimal_api(vec![], vec![]);
        assert!(validate_api(&api).is_ok());
    }

    #[test]
    fn each_required_type_is_checked() {
        for name in REQUIRED_TYPES {
            let err = validate_api(&api_without(name)).unwrap_err();
            assert!(
                matches!(err, GeneratorError::SchemaIntegrity { ref entity, .. } if entity == *name),
                "expected integrity error for {name}, got {err}"
            );
        }
    }

    #[test]
    fn missing_sticker_is_named_in_message() {
        let err = validate_api(&api_without("Sticker")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Schema integrity error for 'Sticker': missing 'Sticker' type data"
        );
    }

    #[test]
    fn sticker_without_type_field_fails() {
        let sticker = make_type(
            "Sticker",
            vec![make_field("file_id", &["String"], true)],
        );
        let err = validate_api(&api_replacing(sticker)).unwrap_err();
        assert!(err.to_string().contains("missing 'type' field"));
    }

    #[test]
    fn message_without_identity_field_fails() {
        let message = make_type("Message", vec![make_field("date", &["Integer"], true)]);
        let err = validate_api(&api_replacing(message)).unwrap_err();
        assert_eq!(err.entity(), Some("Message"));
        assert!(err.to_string().contains("message_id"));
    }

    #[test]
    fn load_api_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_api(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GeneratorError::ReadError { .. }));
    }

    #[test]
    fn load_api_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_api(file.path()).unwrap_err();
        assert!(matches!(err, GeneratorError::ParseError(_)));
    }

    #[test]
    fn load_api_validates_after_parsing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"types": {{"Update": {{"fields": []}}}}, "methods": {{}}}}"#).unwrap();
        let err = load_api(file.path()).unwrap_err();
        assert!(matches!(err, GeneratorError::SchemaIntegrity { ref entity, .. } if entity == "Sticker"));
    }
}
