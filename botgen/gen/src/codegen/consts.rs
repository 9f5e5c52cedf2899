//! Constant set generation.
//!
//! Each constant set is collected into a [`ConstBlock`] and rendered as a Rust
//! enum whose variants are the constants:
//!
//! ```text
//! /// The update types that can be requested from Telegram.
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! pub enum UpdateType {
//!     /// `message`
//!     Message,
//!     /// `edited_message`
//!     EditedMessage,
//! }
//!
//! impl UpdateType {
//!     pub const ALL: &'static [Self] = &[Self::Message, Self::EditedMessage];
//!     pub const fn as_str(self) -> &'static str { ... }
//! }
//! ```

use std::collections::HashSet;

use botgen_model::ApiDescription;
use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use crate::errors::GeneratorError;
use crate::naming;
use crate::parser::extract_quoted_values;
use crate::validation::{STICKER_KIND_FIELD, STICKER_TYPE, UPDATE_TYPE};

/// A single named constant and its wire value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstEntry {
    /// Variant name (PascalCase).
    pub name: String,
    /// Wire value; may be empty.
    pub value: String,
}

impl ConstEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named set of constants, rendered as one enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstBlock {
    /// Enum name.
    pub name: String,
    /// Doc comment for the enum.
    pub doc: String,
    /// Constants in emission order.
    pub entries: Vec<ConstEntry>,
}

/// Collects one constant per optional `Update` field, in declared order.
///
/// Required fields (the update id) are not update kinds and are skipped.
///
/// ## Errors
///
/// Returns `GeneratorError::SchemaIntegrity` if `Update` is missing.
pub fn update_type_consts(api: &ApiDescription) -> Result<ConstBlock, GeneratorError> {
    let update = api
        .get_type(UPDATE_TYPE)
        .ok_or_else(|| GeneratorError::integrity(UPDATE_TYPE, "missing 'Update' type data"))?;

    let entries = update
        .fields
        .iter()
        .filter(|f| !f.required)
        .map(|f| ConstEntry::new(naming::snake_to_pascal(&f.name), &f.name))
        .collect();

    Ok(ConstBlock {
        name: "UpdateType".to_string(),
        doc: "The update types that can be requested from Telegram.".to_string(),
        entries,
    })
}

/// Collects one constant per quoted literal in the `Sticker.type` description.
///
/// Repeated literals are emitted once, at their first occurrence.
///
/// ## Errors
///
/// Returns `GeneratorError::SchemaIntegrity` if `Sticker` or its `type` field
/// is missing.
pub fn sticker_type_consts(api: &ApiDescription) -> Result<ConstBlock, GeneratorError> {
    let sticker = api
        .get_type(STICKER_TYPE)
        .ok_or_else(|| GeneratorError::integrity(STICKER_TYPE, "missing 'Sticker' type data"))?;
    let field = sticker.field(STICKER_KIND_FIELD).ok_or_else(|| {
        GeneratorError::integrity(STICKER_TYPE, format!("missing '{STICKER_KIND_FIELD}' field"))
    })?;

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for literal in extract_quoted_values(&field.description) {
        if !seen.insert(literal) {
            debug!(literal, "Skipping repeated sticker type literal");
            continue;
        }
        entries.push(ConstEntry::new(naming::snake_to_pascal(literal), literal));
    }

    Ok(ConstBlock {
        name: "StickerType".to_string(),
        doc: "The kinds of sticker Telegram sends.".to_string(),
        entries,
    })
}

/// The fixed set of message formatting modes.
pub fn parse_mode_consts() -> ConstBlock {
    ConstBlock {
        name: "ParseMode".to_string(),
        doc: "The formatting modes accepted by methods that send text.".to_string(),
        entries: vec![
            ConstEntry::new("Html", "HTML"),
            ConstEntry::new("MarkdownV2", "MarkdownV2"),
            ConstEntry::new("Markdown", "Markdown"),
            ConstEntry::new("None", ""),
        ],
    }
}

/// Renders a constant block as an enum with `ALL`, `as_str()`, `Display`
/// and `AsRef<str>`.
///
/// ## Errors
///
/// Returns `GeneratorError::Render` naming the block if a variant name is not
/// an identifier or appears twice.
pub fn generate_const_block(block: &ConstBlock) -> Result<TokenStream, GeneratorError> {
    let render = || -> Result<TokenStream, GeneratorError> {
        let enum_name = naming::ident(&block.name)?;

        let mut seen = HashSet::new();
        let mut variants = Vec::with_capacity(block.entries.len());
        for entry in &block.entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(GeneratorError::render(&entry.name, "duplicate constant name"));
            }
            variants.push(naming::ident(&entry.name)?);
        }

        let values: Vec<&str> = block.entries.iter().map(|e| e.value.as_str()).collect();
        let variant_docs: Vec<String> = block
            .entries
            .iter()
            .map(|e| {
                if e.value.is_empty() {
                    " Empty value.".to_string()
                } else {
                    format!(" `{}`", e.value)
                }
            })
            .collect();
        let doc = format!(" {}", block.doc);

        Ok(quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum #enum_name {
                #(
                    #[doc = #variant_docs]
                    #variants,
                )*
            }

            impl #enum_name {
                /// Every variant, in declaration order.
                pub const ALL: &'static [Self] = &[#(Self::#variants),*];

                /// Returns the wire value.
                pub const fn as_str(self) -> &'static str {
                    match self {
                        #(Self::#variants => #values,)*
                    }
                }
            }

            impl ::std::fmt::Display for #enum_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl AsRef<str> for #enum_name {
                fn as_ref(&self) -> &str {
                    self.as_str()
                }
            }
        })
    };

    render().map_err(|e| e.within(&block.name))
}

/// Generates every constant set: update types, parse modes, sticker types.
///
/// ## Errors
///
/// Propagates schema integrity and render failures.
pub fn generate_consts(api: &ApiDescription) -> Result<TokenStream, GeneratorError> {
    let blocks = [
        update_type_consts(api)?,
        parse_mode_consts(),
        sticker_type_consts(api)?,
    ];

    let mut tokens = TokenStream::new();
    for block in &blocks {
        debug!(name = %block.name, entries = block.entries.len(), "Rendering constant set");
        tokens.extend(generate_const_block(block)?);
    }
    Ok(tokens)
}
