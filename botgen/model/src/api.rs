//! The root of a loaded schema.
//!
//! [`ApiDescription`] owns every type and method in **document order**. The
//! schema document stores both tables as JSON objects; they are read with an
//! order-preserving map visitor so that every later traversal is stable and
//! re-running the generator reproduces byte-identical output.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::ModelError;
use crate::types::{MethodDescription, TypeDescription};

/// A named schema entry whose key must agree with its inner name.
trait Named {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

impl Named for TypeDescription {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Named for MethodDescription {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// JSON object read as a list of `(key, value)` pairs, keeping document order.
struct Ordered<T>(Vec<(String, T)>);

impl<T> Default for Ordered<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Ordered<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor<T>(PhantomData<T>);

        impl<'de, T: DeserializeOwned> Visitor<'de> for OrderedVisitor<T> {
            type Value = Ordered<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of schema entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// On-disk shape of the schema document.
#[derive(Deserialize)]
struct RawApi {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    changelog: Option<String>,
    #[serde(default)]
    types: Ordered<TypeDescription>,
    #[serde(default)]
    methods: Ordered<MethodDescription>,
}

/// The loaded, read-only model of all types and methods.
///
/// ## Examples
///
/// ```
/// use botgen_model::ApiDescription;
///
/// let api = ApiDescription::from_json(r#"{
///     "version": "Bot API 7.0",
///     "types": {
///         "Update": {"name": "Update", "fields": []},
///         "Chat": {"name": "Chat", "fields": []}
///     },
///     "methods": {
///         "getMe": {"name": "getMe", "returns": ["User"], "fields": []}
///     }
/// }"#).unwrap();
///
/// let names: Vec<_> = api.types().map(|t| t.name.as_str()).collect();
/// assert_eq!(names, vec!["Update", "Chat"]);
/// assert!(api.has_type("Chat"));
/// assert_eq!(api.get_method("getMe").unwrap().returns, vec!["User"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApiDescription {
    /// Schema version string, when the document declares one.
    pub version: Option<String>,
    /// Release date of the described API version.
    pub release_date: Option<String>,
    /// Link to the changelog of the described API version.
    pub changelog: Option<String>,
    types: Vec<TypeDescription>,
    methods: Vec<MethodDescription>,
    type_index: HashMap<String, usize>,
    method_index: HashMap<String, usize>,
}

impl ApiDescription {
    /// Builds a model from types and methods given in declaration order.
    ///
    /// ## Errors
    ///
    /// Returns `ModelError::DuplicateType` / `ModelError::DuplicateMethod` if a
    /// name appears twice.
    pub fn new(
        types: Vec<TypeDescription>,
        methods: Vec<MethodDescription>,
    ) -> Result<Self, ModelError> {
        let mut type_index = HashMap::with_capacity(types.len());
        for (idx, t) in types.iter().enumerate() {
            if type_index.insert(t.name.clone(), idx).is_some() {
                return Err(ModelError::DuplicateType(t.name.clone()));
            }
        }

        let mut method_index = HashMap::with_capacity(methods.len());
        for (idx, m) in methods.iter().enumerate() {
            if method_index.insert(m.name.clone(), idx).is_some() {
                return Err(ModelError::DuplicateMethod(m.name.clone()));
            }
        }

        Ok(Self {
            version: None,
            release_date: None,
            changelog: None,
            types,
            methods,
            type_index,
            method_index,
        })
    }

    /// Parses a schema document.
    ///
    /// Entries may omit their inner `name`, in which case the key is used.
    ///
    /// ## Errors
    ///
    /// - `ModelError::Json` for malformed documents
    /// - `ModelError::NameMismatch` if an entry's name disagrees with its key
    /// - `ModelError::DuplicateType` / `ModelError::DuplicateMethod` for repeated keys
    pub fn from_json(input: &str) -> Result<Self, ModelError> {
        let raw: RawApi = serde_json::from_str(input)?;

        let types = reconcile_names(raw.types)?;
        let methods = reconcile_names(raw.methods)?;

        let mut api = Self::new(types, methods)?;
        api.version = raw.version;
        api.release_date = raw.release_date;
        api.changelog = raw.changelog;
        Ok(api)
    }

    /// Iterates over all types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescription> {
        self.types.iter()
    }

    /// Iterates over all methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDescription> {
        self.methods.iter()
    }

    /// Looks up a type by canonical name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDescription> {
        self.type_index.get(name).map(|&idx| &self.types[idx])
    }

    /// Looks up a method by canonical name.
    pub fn get_method(&self, name: &str) -> Option<&MethodDescription> {
        self.method_index.get(name).map(|&idx| &self.methods[idx])
    }

    /// Returns true if `name` is a key of the type table.
    pub fn has_type(&self, name: &str) -> bool {
        self.type_index.contains_key(name)
    }

    /// Number of types in the model.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of methods in the model.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

fn reconcile_names<T: Named>(entries: Ordered<T>) -> Result<Vec<T>, ModelError> {
    entries
        .0
        .into_iter()
        .map(|(key, mut entry)| {
            if entry.name().is_empty() {
                entry.set_name(key);
            } else if entry.name() != key {
                return Err(ModelError::NameMismatch {
                    key,
                    name: entry.name().to_string(),
                });
            }
            Ok(entry)
        })
        .collect()
}
