//! Entity helper method generation.
//!
//! A helper is a method on a domain entity that forwards to a `Bot` method,
//! filling in the parameters it can derive from the entity itself. For the
//! pair (`Message`, `unpinChatMessage`) this produces:
//!
//! ```text
//! impl Message {
//!     /// Helper method for [`Bot::unpin_chat_message`].
//!     pub fn unpin(&self, bot: &Bot, opts: Option<UnpinChatMessageOpts>) -> Result<bool, BotError> {
//!         let mut opts = opts.unwrap_or_default();
//!         if opts.message_id.is_none() {
//!             opts.message_id = Some(self.message_id);
//!         }
//!         bot.unpin_chat_message(self.chat.id, Some(opts))
//!     }
//! }
//! ```
//!
//! ## Planning
//!
//! For every (entity, method) pair, entities outer and methods inner, both in
//! declared order:
//!
//! 1. The method name must contain the entity name; what is left after
//!    removing it becomes the helper name.
//! 2. The entity's own identity is correlated first (`chat_id` or `id` on
//!    `Chat`). Pairs where no parameter carries it produce no helper.
//! 3. The identity of every entity-typed field is correlated next
//!    (`chat_id` from `Message.chat`). The name of a correlated field type
//!    is removed from the helper name as well.

use std::collections::{BTreeMap, HashMap};

use botgen_model::{ApiDescription, FieldDescription, MethodDescription, TypeDescription};
use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info};

use crate::codegen::opts::opts_struct_ident;
use crate::errors::GeneratorError;
use crate::naming;
use crate::resolver::{self, RustType};

/// Entity fields that are never used as a correlation source.
const EXCLUDED_SOURCE_FIELDS: &[&str] = &["reply_to_message"];

/// Parameter names reserved by the helper signature.
const RESERVED_PARAMS: &[&str] = &["bot", "opts"];

/// The chat parameter that is redirected when a method also takes a source chat.
const CHAT_ID_PARAM: &str = "chat_id";

/// The source chat parameter of forward/copy style methods.
const FROM_CHAT_ID_PARAM: &str = "from_chat_id";

/// Where a correlated parameter takes its value from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The entity's own identity field: `self.<field>`.
    Identity {
        field: String,
        optional: bool,
        ty: RustType,
    },
    /// The identity of an entity-typed field: `self.<field>.<id_field>`.
    Nested {
        field: String,
        field_optional: bool,
        id_field: String,
        id_optional: bool,
        ty: RustType,
    },
}

impl Source {
    /// Returns true if the value read from `self` is an `Option`.
    pub fn is_option(&self) -> bool {
        match self {
            Self::Identity { optional, .. } => *optional,
            Self::Nested {
                field_optional,
                id_optional,
                ..
            } => *field_optional || *id_optional,
        }
    }

    /// Returns the access path for logs and docs, e.g. `self.chat.id`.
    pub fn path(&self) -> String {
        match self {
            Self::Identity { field, .. } => format!("self.{field}"),
            Self::Nested {
                field, id_field, ..
            } => format!("self.{field}.{id_field}"),
        }
    }

    /// Builds the expression reading this value out of `self`.
    ///
    /// Non-`Copy` values are cloned. Optional entity fields are walked with
    /// `as_ref().map(..)` or `as_ref().and_then(..)`.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::Render` if a field name is not an identifier.
    pub fn expr(&self) -> Result<TokenStream, GeneratorError> {
        match self {
            Self::Identity { field, ty, .. } => {
                let field = naming::field_ident(field)?;
                let clone = clone_suffix(ty);
                Ok(quote! { self.#field #clone })
            }
            Self::Nested {
                field,
                field_optional,
                id_field,
                id_optional,
                ty,
            } => {
                let field = naming::field_ident(field)?;
                let id_field = naming::field_ident(id_field)?;
                let clone = clone_suffix(ty);
                Ok(match (field_optional, id_optional) {
                    (false, _) => quote! { self.#field.#id_field #clone },
                    (true, false) => quote! { self.#field.as_ref().map(|v| v.#id_field #clone) },
                    (true, true) => quote! { self.#field.as_ref().and_then(|v| v.#id_field #clone) },
                })
            }
        }
    }
}

fn clone_suffix(ty: &RustType) -> TokenStream {
    if ty.is_copy() {
        TokenStream::new()
    } else {
        quote! { .clone() }
    }
}

/// A helper planned for one (entity, method) pair.
#[derive(Debug, Clone)]
pub struct HelperPlan<'a> {
    /// The receiver type.
    pub entity: &'a TypeDescription,
    /// The method the helper forwards to.
    pub method: &'a MethodDescription,
    /// Helper name, snake_case.
    pub name: String,
    /// Correlated method parameters, keyed by parameter name.
    pub correlations: BTreeMap<String, Source>,
}

/// Returns true if `method` is a helper candidate for `entity`.
///
/// ## Examples
///
/// ```
/// use botgen_gen::codegen::helpers::applies_to;
/// use botgen_gen::test_utils::{make_method, make_type};
///
/// let chat = make_type("Chat", vec![]);
/// assert!(applies_to(&chat, &make_method("pinChatMessage", &["True"], vec![])));
/// assert!(!applies_to(&chat, &make_method("sendMessage", &["Message"], vec![])));
/// ```
pub fn applies_to(entity: &TypeDescription, method: &MethodDescription) -> bool {
    !entity.name.is_empty() && method.name.contains(&entity.name)
}

/// Builds the source for the entity's own identity field.
fn identity_source(
    api: &ApiDescription,
    entity: &TypeDescription,
) -> Result<Source, GeneratorError> {
    let id_field = naming::identity_field_name(&entity.name);
    let field = entity.field(id_field).ok_or_else(|| {
        GeneratorError::resolution(
            &entity.name,
            format!("entity-identity field '{id_field}' cannot be located"),
        )
    })?;

    Ok(Source::Identity {
        field: field.name.clone(),
        optional: !field.required,
        ty: resolver::field_rust_type(api, field)?,
    })
}

/// Builds the source for the identity of an entity-typed field.
fn nested_source(
    api: &ApiDescription,
    entity: &TypeDescription,
    field: &FieldDescription,
    nested: &TypeDescription,
) -> Result<Source, GeneratorError> {
    let id_field_name = naming::identity_field_name(&nested.name);
    let id_field = nested.field(id_field_name).ok_or_else(|| {
        GeneratorError::resolution(
            format!("{}.{}", entity.name, field.name),
            format!(
                "entity-identity field '{id_field_name}' cannot be located on '{}'",
                nested.name
            ),
        )
    })?;

    Ok(Source::Nested {
        field: field.name.clone(),
        field_optional: !field.required,
        id_field: id_field.name.clone(),
        id_optional: !id_field.required,
        ty: resolver::field_rust_type(api, id_field).map_err(|e| e.within(&nested.name))?,
    })
}

/// Records a correlation unless an optional source would feed a required
/// parameter.
fn correlate(
    correlations: &mut BTreeMap<String, Source>,
    target: &FieldDescription,
    source: Source,
) -> bool {
    if target.required && source.is_option() {
        debug!(
            param = %target.name,
            source = %source.path(),
            "Optional source cannot fill a required parameter"
        );
        return false;
    }
    debug!(param = %target.name, source = %source.path(), "Correlated parameter");
    correlations.insert(target.name.clone(), source);
    true
}

/// Plans the helper for one (entity, method) pair.
///
/// Returns `None` if the method does not apply to the entity or no parameter
/// carries the entity's own identity.
///
/// ## Errors
///
/// - `GeneratorError::TypeResolution` if an identity field cannot be located
///   or a field type cannot be resolved
/// - `GeneratorError::Render` if nothing is left of the method name to name
///   the helper
pub fn plan_helper<'a>(
    api: &ApiDescription,
    entity: &'a TypeDescription,
    method: &'a MethodDescription,
) -> Result<Option<HelperPlan<'a>>, GeneratorError> {
    if !applies_to(entity, method) {
        return Ok(None);
    }

    let mut remainder = method.name.replace(&entity.name, "");
    let mut correlations = BTreeMap::new();

    let id_param = naming::id_param_name(&entity.name);
    for mf in &method.fields {
        if mf.name == id_param || mf.name == "id" {
            let source = identity_source(api, entity)?;
            correlate(&mut correlations, mf, source);
        }
    }

    if correlations.is_empty() {
        debug!(entity = %entity.name, method = %method.name, "No identity parameter, skipping");
        return Ok(None);
    }

    for field in &entity.fields {
        if EXCLUDED_SOURCE_FIELDS.contains(&field.name.as_str()) {
            continue;
        }
        let preferred = resolver::preferred_type(field).map_err(|e| e.within(&entity.name))?;
        let Some(nested) = api.get_type(preferred) else {
            continue;
        };
        let Some(mf) = method.field(&format!("{}_id", field.name)) else {
            continue;
        };

        let target = if mf.name == CHAT_ID_PARAM {
            method.field(FROM_CHAT_ID_PARAM).unwrap_or(mf)
        } else {
            mf
        };

        let source = nested_source(api, entity, field, nested)?;
        if correlate(&mut correlations, target, source) {
            remainder = remainder.replace(&nested.name, "");
        }
    }

    let name = naming::to_snake(&remainder);
    if name.is_empty() {
        return Err(GeneratorError::render(
            &entity.name,
            format!("helper name is empty after removing '{}'", entity.name),
        ));
    }

    Ok(Some(HelperPlan {
        entity,
        method,
        name,
        correlations,
    }))
}

/// Generates the receiver method for a planned helper.
///
/// ## Errors
///
/// - `GeneratorError::Render` for a non-identifier helper name or a
///   parameter colliding with `bot` / `opts`
/// - `GeneratorError::TypeResolution` for unresolvable parameter types
pub fn generate_helper(
    api: &ApiDescription,
    plan: &HelperPlan<'_>,
) -> Result<TokenStream, GeneratorError> {
    let method = plan.method;
    let helper_name = naming::ident(&plan.name)?;
    let bot_method_name = naming::to_snake(&method.name);
    let bot_method = naming::ident(&bot_method_name)?;
    let ret = resolver::return_type(api, method)?;

    let mut params = Vec::new();
    let mut args = Vec::new();
    let mut backfills = Vec::new();
    let mut docs = vec![format!(" Helper method for [`Bot::{bot_method_name}`].")];

    for mf in &method.fields {
        let ident = naming::field_ident(&mf.name)?;

        if let Some(source) = plan.correlations.get(&mf.name) {
            let value = source.expr()?;
            if mf.required {
                args.push(value);
            } else {
                let value = if source.is_option() {
                    value
                } else {
                    quote! { Some(#value) }
                };
                backfills.push(quote! {
                    if opts.#ident.is_none() {
                        opts.#ident = #value;
                    }
                });
            }
            continue;
        }

        if !mf.required {
            continue;
        }
        if RESERVED_PARAMS.contains(&mf.name.as_str()) {
            return Err(GeneratorError::render(
                &mf.name,
                "parameter name collides with a helper parameter",
            ));
        }

        let ty = resolver::field_rust_type(api, mf)?;
        params.push(quote! { #ident: #ty });
        args.push(quote! { #ident });
    }

    let mut prelude = TokenStream::new();
    if method.has_optional_fields() {
        let opts_ty = opts_struct_ident(method)?;
        params.push(quote! { opts: Option<#opts_ty> });
        if backfills.is_empty() {
            args.push(quote! { opts });
        } else {
            prelude = quote! {
                let mut opts = opts.unwrap_or_default();
                #(#backfills)*
            };
            args.push(quote! { Some(opts) });
        }
    }

    let filled: Vec<String> = method
        .fields
        .iter()
        .filter_map(|mf| {
            plan.correlations
                .get(&mf.name)
                .map(|source| format!(" - `{}`: `{}`", mf.name, source.path()))
        })
        .collect();
    if !filled.is_empty() {
        docs.push(String::new());
        docs.push(" Parameters filled from this value:".to_string());
        docs.push(String::new());
        docs.extend(filled);
    }

    Ok(quote! {
        #(#[doc = #docs])*
        pub fn #helper_name(&self, bot: &Bot, #(#params),*) -> Result<#ret, BotError> {
            #prelude
            bot.#bot_method(#(#args),*)
        }
    })
}

/// Plans every helper for one entity, checking helper names are unique.
///
/// ## Errors
///
/// Propagates planning failures, and returns `GeneratorError::Render` if two
/// methods produce the same helper name.
pub fn plan_entity_helpers<'a>(
    api: &'a ApiDescription,
    entity: &'a TypeDescription,
) -> Result<Vec<HelperPlan<'a>>, GeneratorError> {
    let mut plans = Vec::new();
    let mut seen: HashMap<String, &str> = HashMap::new();

    for method in api.methods() {
        let Some(plan) = plan_helper(api, entity, method).map_err(|e| e.within(&method.name))?
        else {
            continue;
        };
        if let Some(previous) = seen.insert(plan.name.clone(), &method.name) {
            return Err(GeneratorError::render(
                &plan.name,
                format!(
                    "helper generated by both '{previous}' and '{}'",
                    method.name
                ),
            ));
        }
        plans.push(plan);
    }

    Ok(plans)
}

/// Generates one `impl` block of helpers per entity, in declared order.
///
/// ## Errors
///
/// Aborts on the first failure, naming the entity and method involved.
pub fn generate_helpers(api: &ApiDescription) -> Result<TokenStream, GeneratorError> {
    let mut tokens = TokenStream::new();
    let mut total = 0usize;

    for entity in api.types() {
        let plans =
            plan_entity_helpers(api, entity).map_err(|e| e.within(&entity.name))?;
        if plans.is_empty() {
            continue;
        }

        let entity_ident = naming::ident(&entity.name).map_err(|e| e.within(&entity.name))?;
        let mut helpers = Vec::with_capacity(plans.len());
        for plan in &plans {
            let helper = generate_helper(api, plan)
                .map_err(|e| e.within(&plan.method.name).within(&entity.name))?;
            helpers.push(helper);
        }

        debug!(entity = %entity.name, count = helpers.len(), "Generated helpers");
        total += helpers.len();
        tokens.extend(quote! {
            impl #entity_ident {
                #(#helpers)*
            }
        });
    }

    info!(count = total, "Generated entity helpers");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_field, make_method, make_minimal_api, make_type, pretty};
    use tracing_test::traced_test;

    fn wrap(tokens: TokenStream) -> String {
        pretty(quote! { impl Entity { #tokens } })
    }

    fn plan_for<'a>(
        api: &'a ApiDescription,
        entity: &str,
        method: &str,
    ) -> Option<HelperPlan<'a>> {
        let entity = api.get_type(entity).unwrap();
        let method = api.get_method(method).unwrap();
        plan_helper(api, entity, method).unwrap()
    }

    fn unpin_chat_message() -> MethodDescription {
        make_method(
            "unpinChatMessage",
            &["True"],
            vec![
                make_field("chat_id", &["Integer", "String"], true),
                make_field("message_id", &["Integer"], false),
            ],
        )
    }

    // === Applicability ===

    #[test]
    fn applies_to_requires_substring() {
        let chat = make_type("Chat", vec![]);
        assert!(applies_to(&chat, &make_method("getChat", &["Chat"], vec![])));
        assert!(!applies_to(&chat, &make_method("getMe", &["User"], vec![])));
    }

    #[test]
    fn applies_to_rejects_empty_entity_name() {
        let nameless = make_type("", vec![]);
        assert!(!applies_to(&nameless, &make_method("getMe", &["User"], vec![])));
    }

    // === Planning ===

    #[test]
    fn chat_helper_elides_chat_id_and_keeps_optionals() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "sendChatAction",
                &["True"],
                vec![
                    make_field("chat_id", &["Integer", "String"], true),
                    make_field("action", &["String"], true),
                    make_field("reply_to_message_id", &["Integer"], false),
                ],
            )],
        );

        let plan = plan_for(&api, "Chat", "sendChatAction").unwrap();
        assert_eq!(plan.name, "send_action");
        assert_eq!(plan.correlations.len(), 1);
        assert_eq!(plan.correlations["chat_id"].path(), "self.id");
        assert!(!plan.correlations.contains_key("reply_to_message_id"));
    }

    #[test]
    #[traced_test]
    fn no_correlation_means_no_helper() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "setChatTitle",
                &["True"],
                vec![make_field("title", &["String"], true)],
            )],
        );
        assert!(plan_for(&api, "Chat", "setChatTitle").is_none());
        assert!(logs_contain("No identity parameter, skipping"));
    }

    #[test]
    #[traced_test]
    fn nested_correlation_alone_means_no_helper() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "sendMessage",
                &["Message"],
                vec![
                    make_field("chat_id", &["Integer", "String"], true),
                    make_field("text", &["String"], true),
                ],
            )],
        );
        assert!(plan_for(&api, "Message", "sendMessage").is_none());
        assert!(logs_contain("No identity parameter, skipping"));
        assert!(!logs_contain("Correlated parameter"));
    }

    #[test]
    fn unrelated_method_means_no_helper() {
        let api = make_minimal_api(vec![], vec![unpin_chat_message()]);
        assert!(plan_for(&api, "User", "unpinChatMessage").is_none());
    }

    #[test]
    fn nested_entity_field_correlates_and_shortens_name() {
        let api = make_minimal_api(vec![], vec![unpin_chat_message()]);

        let plan = plan_for(&api, "Message", "unpinChatMessage").unwrap();
        assert_eq!(plan.name, "unpin");
        assert_eq!(plan.correlations["chat_id"].path(), "self.chat.id");
        assert_eq!(plan.correlations["message_id"].path(), "self.message_id");
    }

    #[test]
    fn from_chat_id_receives_entity_chat() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "forwardMessage",
                &["Message"],
                vec![
                    make_field("chat_id", &["Integer", "String"], true),
                    make_field("from_chat_id", &["Integer", "String"], true),
                    make_field("message_id", &["Integer"], true),
                ],
            )],
        );

        let plan = plan_for(&api, "Message", "forwardMessage").unwrap();
        assert_eq!(plan.name, "forward");
        assert!(!plan.correlations.contains_key("chat_id"));
        assert_eq!(plan.correlations["from_chat_id"].path(), "self.chat.id");
    }

    #[test]
    fn reply_to_message_is_never_a_source() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "copyMessage",
                &["MessageId"],
                vec![
                    make_field("message_id", &["Integer"], true),
                    make_field("reply_to_message_id", &["Integer"], true),
                ],
            )],
        );
        let plan = plan_for(&api, "Message", "copyMessage").unwrap();
        assert!(!plan.correlations.contains_key("reply_to_message_id"));
    }

    #[test]
    fn optional_source_skips_required_target() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "banMessageSender",
                &["True"],
                vec![
                    make_field("message_id", &["Integer"], true),
                    make_field("from_id", &["Integer"], true),
                ],
            )],
        );
        let plan = plan_for(&api, "Message", "banMessageSender").unwrap();
        assert!(!plan.correlations.contains_key("from_id"));
        assert_eq!(plan.name, "ban_sender");
    }

    #[test]
    fn optional_source_fills_optional_target() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "reportMessageSender",
                &["True"],
                vec![
                    make_field("message_id", &["Integer"], true),
                    make_field("from_id", &["Integer"], false),
                ],
            )],
        );
        let plan = plan_for(&api, "Message", "reportMessageSender").unwrap();
        assert!(plan.correlations["from_id"].is_option());
        assert_eq!(plan.name, "report_sender");
    }

    #[test]
    fn missing_identity_field_is_resolution_error() {
        let api = make_minimal_api(
            vec![make_type("Poll", vec![make_field("question", &["String"], true)])],
            vec![make_method(
                "stopPoll",
                &["Poll"],
                vec![make_field("poll_id", &["String"], true)],
            )],
        );
        let entity = api.get_type("Poll").unwrap();
        let method = api.get_method("stopPoll").unwrap();

        let err = plan_helper(&api, entity, method).unwrap_err();
        assert!(matches!(err, GeneratorError::TypeResolution { .. }));
        assert!(err.to_string().contains("entity-identity field 'id' cannot be located"));
    }

    #[test]
    fn empty_helper_name_is_render_error() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "Chat",
                &["True"],
                vec![make_field("chat_id", &["Integer"], true)],
            )],
        );
        let entity = api.get_type("Chat").unwrap();
        let method = api.get_method("Chat").unwrap();

        let err = plan_helper(&api, entity, method).unwrap_err();
        assert!(matches!(err, GeneratorError::Render { .. }));
    }

    // === Emission ===

    #[test]
    fn helper_calls_bot_with_required_args_in_order() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "deleteMessage",
                &["True"],
                vec![
                    make_field("chat_id", &["Integer", "String"], true),
                    make_field("message_id", &["Integer"], true),
                ],
            )],
        );
        let plan = plan_for(&api, "Message", "deleteMessage").unwrap();
        let code = wrap(generate_helper(&api, &plan).unwrap());

        assert!(code.contains("pub fn delete(&self, bot: &Bot) -> Result<bool, BotError>"));
        assert!(code.contains("bot.delete_message(self.chat.id, self.message_id)"));
        assert!(code.contains("/// Helper method for [`Bot::delete_message`]."));
    }

    #[test]
    fn helper_backfills_optional_correlation() {
        let api = make_minimal_api(vec![], vec![unpin_chat_message()]);
        let plan = plan_for(&api, "Message", "unpinChatMessage").unwrap();
        let code = wrap(generate_helper(&api, &plan).unwrap());

        assert!(code.contains("opts: Option<UnpinChatMessageOpts>"));
        assert!(code.contains("let mut opts = opts.unwrap_or_default();"));
        assert!(code.contains("if opts.message_id.is_none() {"));
        assert!(code.contains("opts.message_id = Some(self.message_id);"));
        assert!(code.contains("bot.unpin_chat_message(self.chat.id, Some(opts))"));
    }

    #[test]
    fn helper_passes_opts_through_without_backfill() {
        let api = make_minimal_api(vec![], vec![unpin_chat_message()]);
        let plan = plan_for(&api, "Chat", "unpinChatMessage").unwrap();
        let code = wrap(generate_helper(&api, &plan).unwrap());

        assert!(code.contains("pub fn unpin_message("));
        assert!(code.contains("bot.unpin_chat_message(self.id, opts)"));
        assert!(!code.contains("unwrap_or_default"));
    }

    #[test]
    fn helper_clones_non_copy_values() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "getFile",
                &["File"],
                vec![make_field("file_id", &["String"], true)],
            )],
        );
        let plan = plan_for(&api, "File", "getFile").unwrap();
        let code = wrap(generate_helper(&api, &plan).unwrap());

        assert!(code.contains("pub fn get(&self, bot: &Bot) -> Result<File, BotError>"));
        assert!(code.contains("bot.get_file(self.file_id.clone())"));
    }

    #[test]
    fn helper_maps_optional_nested_source() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "reportMessageSender",
                &["True"],
                vec![
                    make_field("message_id", &["Integer"], true),
                    make_field("from_id", &["Integer"], false),
                ],
            )],
        );
        let plan = plan_for(&api, "Message", "reportMessageSender").unwrap();
        let code = wrap(generate_helper(&api, &plan).unwrap());

        assert!(code.contains("opts.from_id = self.from.as_ref().map(|v| v.id);"));
    }

    #[test]
    fn helper_rejects_reserved_parameter_names() {
        let api = make_minimal_api(
            vec![],
            vec![make_method(
                "leaveChat",
                &["True"],
                vec![
                    make_field("chat_id", &["Integer"], true),
                    make_field("bot", &["String"], true),
                ],
            )],
        );
        let plan = plan_for(&api, "Chat", "leaveChat").unwrap();
        let err = generate_helper(&api, &plan).unwrap_err();
        assert_eq!(err.entity(), Some("bot"));
    }

    #[test]
    fn helpers_group_per_entity_in_declared_order() {
        let api = make_minimal_api(
            vec![],
            vec![
                make_method(
                    "leaveChat",
                    &["True"],
                    vec![make_field("chat_id", &["Integer"], true)],
                ),
                unpin_chat_message(),
            ],
        );

        let code = pretty(generate_helpers(&api).unwrap());

        assert_eq!(code.matches("impl Chat {").count(), 1);
        assert_eq!(code.matches("impl Message {").count(), 1);
        assert!(code.find("impl Chat {").unwrap() < code.find("impl Message {").unwrap());
        assert!(code.find("pub fn leave(").unwrap() < code.find("pub fn unpin_message(").unwrap());
    }

    #[test]
    fn duplicate_helper_names_are_render_errors() {
        let api = make_minimal_api(
            vec![],
            vec![
                make_method(
                    "getChat",
                    &["Chat"],
                    vec![make_field("chat_id", &["Integer"], true)],
                ),
                make_method(
                    "getChatChat",
                    &["Chat"],
                    vec![make_field("chat_id", &["Integer"], true)],
                ),
            ],
        );

        let err = generate_helpers(&api).unwrap_err();
        assert!(matches!(err, GeneratorError::Render { .. }));
        assert_eq!(err.entity(), Some("Chat > get"));
        assert!(err.to_string().contains("'getChat' and 'getChatChat'"));
    }
}
