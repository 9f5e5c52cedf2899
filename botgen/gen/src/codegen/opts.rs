//! Options struct generation.
//!
//! Every method with at least one optional parameter gets a
//! `<Method>Opts` struct bundling those parameters. The struct is shared by
//! the `Bot` method and every helper that calls it.

use botgen_model::{ApiDescription, MethodDescription};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use tracing::debug;

use crate::errors::GeneratorError;
use crate::naming;
use crate::resolver;

/// Returns the options struct name for a method (`sendMessage` ->
/// `SendMessageOpts`).
pub fn opts_struct_name(method: &MethodDescription) -> String {
    format!("{}Opts", naming::to_title(&method.name))
}

/// Returns the options struct identifier for a method.
///
/// ## Errors
///
/// Returns `GeneratorError::Render` if the method name does not form an
/// identifier.
pub fn opts_struct_ident(method: &MethodDescription) -> Result<Ident, GeneratorError> {
    naming::ident(&opts_struct_name(method))
}

/// Generates the options struct for a single method.
///
/// Returns `None` for methods without optional parameters.
///
/// ## Examples
///
/// ```text
/// /// Optional parameters for [`Bot::unpin_chat_message`].
/// #[derive(Debug, Clone, Default, serde::Serialize)]
/// pub struct UnpinChatMessageOpts {
///     /// Identifier of the message to unpin.
///     #[serde(skip_serializing_if = "Option::is_none")]
///     pub message_id: Option<i64>,
/// }
/// ```
///
/// ## Errors
///
/// Returns `GeneratorError::TypeResolution` or `GeneratorError::Render` with
/// the method name in the entity path.
pub fn generate_opts_struct(
    api: &ApiDescription,
    method: &MethodDescription,
) -> Result<Option<TokenStream>, GeneratorError> {
    if !method.has_optional_fields() {
        return Ok(None);
    }

    let render = || -> Result<TokenStream, GeneratorError> {
        let struct_name = opts_struct_ident(method)?;
        let doc = format!(
            " Optional parameters for [`Bot::{}`].",
            naming::to_snake(&method.name)
        );

        let mut fields = Vec::new();
        for field in method.fields.iter().filter(|f| !f.required) {
            let ident = naming::field_ident(&field.name)?;
            let ty = resolver::field_rust_type(api, field)?;
            let field_doc = format!(" {}", field.description);
            fields.push(quote! {
                #[doc = #field_doc]
                #[serde(skip_serializing_if = "Option::is_none")]
                pub #ident: Option<#ty>,
            });
        }

        Ok(quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Default, serde::Serialize)]
            pub struct #struct_name {
                #(#fields)*
            }
        })
    };

    render().map(Some).map_err(|e| e.within(&method.name))
}

/// Generates options structs for every method, in declared order.
///
/// ## Errors
///
/// Propagates the first failure.
pub fn generate_opts(api: &ApiDescription) -> Result<TokenStream, GeneratorError> {
    let mut tokens = TokenStream::new();
    let mut count = 0usize;
    for method in api.methods() {
        if let Some(opts) = generate_opts_struct(api, method)? {
            tokens.extend(opts);
            count += 1;
        }
    }
    debug!(count, "Generated options structs");
    Ok(tokens)
}
