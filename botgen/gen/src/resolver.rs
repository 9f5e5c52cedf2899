//! Wire type resolution.
//!
//! Maps the wire type names used in the schema (`Integer`, `Array of Message`,
//! `Chat`, ...) onto the Rust types the generated code refers to.

use std::str::FromStr;

use botgen_model::{ApiDescription, FieldDescription, MethodDescription, WirePrimitive};
use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, quote};

use crate::errors::GeneratorError;
use crate::naming;

/// Prefix marking a list wire type, e.g. `Array of PhotoSize`.
const ARRAY_PREFIX: &str = "Array of ";

/// A resolved Rust type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RustType {
    /// A scalar wire type.
    Primitive(WirePrimitive),
    /// A domain type declared in the schema.
    Entity(Ident),
    /// `Vec<T>`.
    List(Box<RustType>),
}

impl RustType {
    /// Returns true if values of this type can be copied out of `&self`
    /// without `.clone()`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use botgen_gen::resolver::RustType;
    /// use botgen_model::WirePrimitive;
    ///
    /// assert!(RustType::Primitive(WirePrimitive::Integer).is_copy());
    /// assert!(!RustType::Primitive(WirePrimitive::String).is_copy());
    /// ```
    pub fn is_copy(&self) -> bool {
        match self {
            Self::Primitive(p) => *p != WirePrimitive::String,
            Self::Entity(_) | Self::List(_) => false,
        }
    }
}

impl ToTokens for RustType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ty = match self {
            Self::Primitive(WirePrimitive::Integer) => quote! { i64 },
            Self::Primitive(WirePrimitive::Float) => quote! { f64 },
            Self::Primitive(WirePrimitive::String) => quote! { String },
            Self::Primitive(WirePrimitive::Boolean | WirePrimitive::True | WirePrimitive::False) => {
                quote! { bool }
            }
            Self::Entity(name) => quote! { #name },
            Self::List(inner) => quote! { Vec<#inner> },
        };
        tokens.extend(ty);
    }
}

/// Returns the first declared candidate type of a field.
///
/// ## Errors
///
/// Returns `GeneratorError::TypeResolution` naming the field if it declares no
/// candidate types.
pub fn preferred_type(field: &FieldDescription) -> Result<&str, GeneratorError> {
    field
        .preferred_type()
        .ok_or_else(|| GeneratorError::resolution(&field.name, "field declares no candidate types"))
}

/// Returns true if `name` is a type declared in the schema.
pub fn is_domain_type(api: &ApiDescription, name: &str) -> bool {
    api.has_type(name)
}

/// Resolves a wire type name to a Rust type.
///
/// ## Examples
///
/// ```
/// use botgen_gen::resolver::rust_type;
/// use botgen_model::ApiDescription;
/// use quote::ToTokens;
///
/// let api = ApiDescription::from_json(r#"{"types": {"PhotoSize": {"fields": []}}}"#).unwrap();
///
/// let ty = rust_type(&api, "Array of Array of PhotoSize").unwrap();
/// assert_eq!(ty.to_token_stream().to_string(), "Vec < Vec < PhotoSize > >");
/// assert!(rust_type(&api, "Sticker").is_err());
/// ```
///
/// ## Errors
///
/// Returns `GeneratorError::TypeResolution` for names that are neither a
/// primitive nor a declared type.
pub fn rust_type(api: &ApiDescription, wire: &str) -> Result<RustType, GeneratorError> {
    if let Some(inner) = wire.strip_prefix(ARRAY_PREFIX) {
        return Ok(RustType::List(Box::new(rust_type(api, inner)?)));
    }

    if let Ok(primitive) = WirePrimitive::from_str(wire) {
        return Ok(RustType::Primitive(primitive));
    }

    if is_domain_type(api, wire) {
        let name = naming::ident(wire)
            .map_err(|_| GeneratorError::resolution(wire, "type name is not a Rust identifier"))?;
        return Ok(RustType::Entity(name));
    }

    Err(GeneratorError::resolution(wire, "unknown wire type"))
}

/// Resolves the preferred type of a field.
///
/// ## Errors
///
/// Returns `GeneratorError::TypeResolution` with the field name in the entity
/// path.
pub fn field_rust_type(
    api: &ApiDescription,
    field: &FieldDescription,
) -> Result<RustType, GeneratorError> {
    let wire = preferred_type(field)?;
    rust_type(api, wire).map_err(|e| e.within(&field.name))
}

/// Resolves the preferred return type of a method.
///
/// ## Errors
///
/// Returns `GeneratorError::TypeResolution` naming the method if it declares
/// no return type or the return type is unknown.
pub fn return_type(
    api: &ApiDescription,
    method: &MethodDescription,
) -> Result<RustType, GeneratorError> {
    let wire = method
        .returns
        .first()
        .ok_or_else(|| GeneratorError::resolution(&method.name, "method declares no return type"))?;
    rust_type(api, wire).map_err(|e| e.within(&method.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_field, make_method, make_minimal_api};

    fn tokens(ty: &RustType) -> String {
        ty.to_token_stream().to_string()
    }

    #[test]
    fn primitives_map_to_rust_scalars() {
        let api = make_minimal_api(vec![], vec![]);
        assert_eq!(tokens(&rust_type(&api, "Integer").unwrap()), "i64");
        assert_eq!(tokens(&rust_type(&api, "Float").unwrap()), "f64");
        assert_eq!(tokens(&rust_type(&api, "Float number").unwrap()), "f64");
        assert_eq!(tokens(&rust_type(&api, "String").unwrap()), "String");
        assert_eq!(tokens(&rust_type(&api, "Boolean").unwrap()), "bool");
        assert_eq!(tokens(&rust_type(&api, "True").unwrap()), "bool");
    }

    #[test]
    fn domain_types_map_to_their_name() {
        let api = make_minimal_api(vec![], vec![]);
        let ty = rust_type(&api, "Chat").unwrap();
        assert_eq!(tokens(&ty), "Chat");
        assert!(!ty.is_copy());
    }

    #[test]
    fn arrays_nest() {
        let api = make_minimal_api(vec![], vec![]);
        let ty = rust_type(&api, "Array of String").unwrap();
        assert_eq!(tokens(&ty), "Vec < String >");
        assert!(!ty.is_copy());
    }

    #[test]
    fn unknown_type_is_resolution_error() {
        let api = make_minimal_api(vec![], vec![]);
        let err = rust_type(&api, "Array of Nope").unwrap_err();
        assert!(matches!(err, GeneratorError::TypeResolution { .. }));
        assert_eq!(err.entity(), Some("Nope"));
    }

    #[test]
    fn preferred_type_takes_first_candidate() {
        let field = make_field("chat_id", &["Integer", "String"], true);
        assert_eq!(preferred_type(&field).unwrap(), "Integer");
    }

    #[test]
    fn preferred_type_fails_without_candidates() {
        let field = make_field("broken", &[], true);
        let err = preferred_type(&field).unwrap_err();
        assert_eq!(err.entity(), Some("broken"));
    }

    #[test]
    fn field_rust_type_names_field_in_error() {
        let api = make_minimal_api(vec![], vec![]);
        let field = make_field("thing", &["Gizmo"], false);
        let err = field_rust_type(&api, &field).unwrap_err();
        assert_eq!(err.entity(), Some("thing > Gizmo"));
    }

    #[test]
    fn return_type_uses_first_entry() {
        let api = make_minimal_api(vec![], vec![]);
        let method = make_method("getFile", &["File", "Boolean"], vec![]);
        assert_eq!(tokens(&return_type(&api, &method).unwrap()), "File");
    }

    #[test]
    fn return_type_requires_an_entry() {
        let api = make_minimal_api(vec![], vec![]);
        let method = make_method("doNothing", &[], vec![]);
        let err = return_type(&api, &method).unwrap_err();
        assert_eq!(err.entity(), Some("doNothing"));
    }

    #[test]
    fn is_domain_type_checks_type_table() {
        let api = make_minimal_api(vec![], vec![]);
        assert!(is_domain_type(&api, "Message"));
        assert!(!is_domain_type(&api, "Integer"));
    }
}
