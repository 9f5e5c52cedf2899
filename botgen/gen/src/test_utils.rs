//! Shared test utilities for botgen-gen tests.
//!
//! This module provides common helper functions for creating schema fixtures
//! across the codebase, reducing duplication and ensuring consistency.

use botgen_model::{ApiDescription, FieldDescription, MethodDescription, TypeDescription};
use proc_macro2::TokenStream;

/// Creates a FieldDescription for testing.
///
/// ## Arguments
///
/// * `name` - Wire name of the field
/// * `types` - Candidate wire types; the first one is preferred
/// * `required` - Whether the field is required
pub fn make_field(name: &str, types: &[&str], required: bool) -> FieldDescription {
    FieldDescription {
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        required,
        description: format!("Test field {}", name),
    }
}

/// Creates a TypeDescription for testing.
pub fn make_type(name: &str, fields: Vec<FieldDescription>) -> TypeDescription {
    TypeDescription {
        name: name.to_string(),
        description: vec![format!("Test type {}", name)],
        fields,
        subtypes: vec![],
        subtype_of: vec![],
    }
}

/// Creates a MethodDescription for testing.
pub fn make_method(
    name: &str,
    returns: &[&str],
    fields: Vec<FieldDescription>,
) -> MethodDescription {
    MethodDescription {
        name: name.to_string(),
        description: vec![format!("Test method {}", name)],
        returns: returns.iter().map(|t| t.to_string()).collect(),
        fields,
    }
}

/// Creates the smallest schema that passes validation, plus extras.
///
/// Declares, in order: `Update`, `User`, `Chat`, `Message`, `File`, `Sticker`.
/// `extra_types` are appended after them; the only methods are `extra_methods`.
///
/// ## Panics
///
/// Panics if an extra type repeats one of the built-in names.
pub fn make_minimal_api(
    extra_types: Vec<TypeDescription>,
    extra_methods: Vec<MethodDescription>,
) -> ApiDescription {
    let mut sticker_type = make_field("type", &["String"], true);
    sticker_type.description =
        r#"Type of the sticker, currently one of "regular", "mask", "custom_emoji"."#.to_string();

    let mut types = vec![
        make_type(
            "Update",
            vec![
                make_field("update_id", &["Integer"], true),
                make_field("message", &["Message"], false),
                make_field("edited_message", &["Message"], false),
            ],
        ),
        make_type(
            "User",
            vec![
                make_field("id", &["Integer"], true),
                make_field("first_name", &["String"], true),
            ],
        ),
        make_type(
            "Chat",
            vec![
                make_field("id", &["Integer"], true),
                make_field("type", &["String"], true),
            ],
        ),
        make_type(
            "Message",
            vec![
                make_field("message_id", &["Integer"], true),
                make_field("from", &["User"], false),
                make_field("chat", &["Chat"], true),
                make_field("reply_to_message", &["Message"], false),
            ],
        ),
        make_type("File", vec![make_field("file_id", &["String"], true)]),
        make_type(
            "Sticker",
            vec![make_field("file_id", &["String"], true), sticker_type],
        ),
    ];
    types.extend(extra_types);

    ApiDescription::new(types, extra_methods).expect("test schema has unique names")
}

/// Formats generated tokens with prettyplease for readable assertions.
///
/// ## Panics
///
/// Panics if the tokens are not a valid Rust file.
pub fn pretty(tokens: TokenStream) -> String {
    let file = syn::parse2::<syn::File>(tokens).expect("generated code should parse");
    prettyplease::unparse(&file)
}
