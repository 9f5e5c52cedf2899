//! Core types for Bot API descriptions.
//!
//! This module provides the building blocks of a loaded schema:
//!
//! - [`FieldDescription`] - A single field of a type, or a parameter of a method
//! - [`TypeDescription`] - A domain entity (e.g. `Chat`, `Message`, `File`)
//! - [`MethodDescription`] - A single remote operation (e.g. `sendMessage`)
//! - [`WirePrimitive`] - The scalar wire types a field may carry

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Scalar wire types understood by the generator.
///
/// Anything that is not a primitive (and not an `Array of ...` wrapper) must be
/// the name of a domain type in the schema.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use botgen_model::WirePrimitive;
///
/// assert_eq!(WirePrimitive::from_str("Integer").unwrap(), WirePrimitive::Integer);
/// assert_eq!(WirePrimitive::from_str("Float number").unwrap(), WirePrimitive::Float);
/// assert!(WirePrimitive::from_str("Message").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum WirePrimitive {
    /// 64-bit signed integer.
    Integer,
    /// Floating point number.
    #[strum(to_string = "Float", serialize = "Float number")]
    Float,
    /// UTF-8 string.
    String,
    /// Boolean flag.
    Boolean,
    /// A boolean that is always `true` on the wire.
    True,
    /// A boolean that is always `false` on the wire.
    False,
}

/// A field of a type, or a parameter of a method.
///
/// ## Examples
///
/// ```
/// use botgen_model::FieldDescription;
///
/// let field = FieldDescription {
///     name: "chat_id".to_string(),
///     types: vec!["Integer".to_string(), "String".to_string()],
///     required: true,
///     description: "Unique identifier for the target chat".to_string(),
/// };
///
/// assert_eq!(field.preferred_type(), Some("Integer"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// Wire name, snake_case (e.g. `reply_to_message_id`).
    pub name: String,
    /// Candidate wire types, in declaration order.
    ///
    /// The first entry is the preferred type; the order is significant.
    #[serde(default)]
    pub types: Vec<String>,
    /// Whether the field must always be present.
    #[serde(default)]
    pub required: bool,
    /// Free-text description. May embed quoted literal values.
    #[serde(default)]
    pub description: String,
}

impl FieldDescription {
    /// Returns the first declared candidate type, if any.
    pub fn preferred_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

/// A domain entity described by the schema.
///
/// ## Examples
///
/// ```
/// use botgen_model::{FieldDescription, TypeDescription};
///
/// let chat = TypeDescription {
///     name: "Chat".to_string(),
///     description: vec!["This object represents a chat.".to_string()],
///     fields: vec![FieldDescription {
///         name: "id".to_string(),
///         types: vec!["Integer".to_string()],
///         required: true,
///         description: "Unique identifier for this chat.".to_string(),
///     }],
///     subtypes: vec![],
///     subtype_of: vec![],
/// };
///
/// assert!(chat.field("id").is_some());
/// assert!(chat.field("title").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    /// Canonical type name (PascalCase).
    #[serde(default)]
    pub name: String,
    /// Description paragraphs.
    #[serde(default)]
    pub description: Vec<String>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescription>,
    /// Names of the concrete types this (union) type stands for.
    #[serde(default)]
    pub subtypes: Vec<String>,
    /// Names of the union types this type belongs to.
    #[serde(default)]
    pub subtype_of: Vec<String>,
}

impl TypeDescription {
    /// Looks up a field by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A remote operation described by the schema.
///
/// ## Examples
///
/// ```
/// use botgen_model::{FieldDescription, MethodDescription};
///
/// let method = MethodDescription {
///     name: "sendMessage".to_string(),
///     description: vec![],
///     returns: vec!["Message".to_string()],
///     fields: vec![
///         FieldDescription {
///             name: "chat_id".to_string(),
///             types: vec!["Integer".to_string()],
///             required: true,
///             description: String::new(),
///         },
///         FieldDescription {
///             name: "disable_notification".to_string(),
///             types: vec!["Boolean".to_string()],
///             required: false,
///             description: String::new(),
///         },
///     ],
/// };
///
/// assert!(method.has_field("chat_id"));
/// assert!(method.has_optional_fields());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescription {
    /// Canonical method name (camelCase, e.g. `sendMessage`).
    #[serde(default)]
    pub name: String,
    /// Description paragraphs.
    #[serde(default)]
    pub description: Vec<String>,
    /// Candidate return types, in declaration order.
    #[serde(default)]
    pub returns: Vec<String>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescription>,
}

impl MethodDescription {
    /// Looks up a parameter by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the method declares a parameter with this name.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns true if at least one parameter is optional.
    pub fn has_optional_fields(&self) -> bool {
        self.fields.iter().any(|f| !f.required)
    }
}
