//! Name conversion utilities.
//!
//! Every function here is a pure function of its input string. The generator
//! relies on that: the same schema always produces the same identifiers.
//!
//! ## Conventions
//!
//! | Input | Function | Output |
//! |---|---|---|
//! | `custom_emoji` | [`snake_to_pascal`] | `CustomEmoji` |
//! | `reply_to_message_id` | [`snake_to_camel`] | `replyToMessageId` |
//! | `send` | [`to_title`] | `Send` |
//! | `editMessageLiveLocation` | [`to_snake`] | `edit_message_live_location` |
//! | `ChatMember` | [`id_param_name`] | `chat_member_id` |
//! | `Message` | [`identity_field_name`] | `message_id` |

use proc_macro2::Ident;

use crate::errors::GeneratorError;

/// The entity whose identity field is `message_id` rather than `id`.
pub const MESSAGE_TYPE: &str = "Message";

/// The entity whose identity field is `file_id` rather than `id`.
pub const FILE_TYPE: &str = "File";

/// Upper-cases the first character, leaving the rest untouched.
///
/// ## Examples
///
/// ```
/// use botgen_gen::naming::to_title;
///
/// assert_eq!(to_title("send"), "Send");
/// assert_eq!(to_title("editMessageText"), "EditMessageText");
/// assert_eq!(to_title(""), "");
/// ```
pub fn to_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts snake_case to camelCase.
///
/// The first segment is lower-cased; every following segment is title-cased.
/// Empty segments (leading, trailing or doubled underscores) are dropped.
///
/// ## Examples
///
/// ```
/// use botgen_gen::naming::snake_to_camel;
///
/// assert_eq!(snake_to_camel("reply_to_message_id"), "replyToMessageId");
/// assert_eq!(snake_to_camel("chat"), "chat");
/// assert_eq!(snake_to_camel("HTML_mode"), "htmlMode");
/// ```
pub fn snake_to_camel(s: &str) -> String {
    let mut segments = s.split('_').filter(|seg| !seg.is_empty());
    let mut out = String::with_capacity(s.len());

    if let Some(first) = segments.next() {
        out.push_str(&first.to_lowercase());
    }
    for seg in segments {
        out.push_str(&to_title(seg));
    }

    out
}

/// Converts snake_case to PascalCase.
///
/// ## Examples
///
/// ```
/// use botgen_gen::naming::snake_to_pascal;
///
/// assert_eq!(snake_to_pascal("custom_emoji"), "CustomEmoji");
/// assert_eq!(snake_to_pascal("edited_message"), "EditedMessage");
/// assert_eq!(snake_to_pascal("regular"), "Regular");
/// assert_eq!(snake_to_pascal("markdown_v2"), "MarkdownV2");
/// ```
pub fn snake_to_pascal(s: &str) -> String {
    to_title(&snake_to_camel(s))
}

/// Converts camelCase or PascalCase to snake_case.
///
/// Acronyms stay together (`HTTPClient` -> `http_client`); input that is
/// already snake_case is returned unchanged.
///
/// ## Examples
///
/// ```
/// use botgen_gen::naming::to_snake;
///
/// assert_eq!(to_snake("ChatMember"), "chat_member");
/// assert_eq!(to_snake("sendMessage"), "send_message");
/// assert_eq!(to_snake("MarkdownV2"), "markdown_v2");
/// assert_eq!(to_snake("reply_to_message"), "reply_to_message");
/// ```
pub fn to_snake(s: &str) -> String {
    split_camel_case(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Returns the parameter name a method uses to refer to an entity.
///
/// ## Examples
///
/// ```
/// use botgen_gen::naming::id_param_name;
///
/// assert_eq!(id_param_name("Chat"), "chat_id");
/// assert_eq!(id_param_name("CallbackQuery"), "callback_query_id");
/// ```
pub fn id_param_name(entity: &str) -> String {
    format!("{}_id", to_snake(entity))
}

/// Returns the name of an entity's own identity field.
///
/// Messages and files carry their identity in `message_id` and `file_id`;
/// every other entity uses `id`.
///
/// ## Examples
///
/// ```
/// use botgen_gen::naming::identity_field_name;
///
/// assert_eq!(identity_field_name("Message"), "message_id");
/// assert_eq!(identity_field_name("File"), "file_id");
/// assert_eq!(identity_field_name("Chat"), "id");
/// ```
pub fn identity_field_name(entity: &str) -> &'static str {
    match entity {
        MESSAGE_TYPE => "message_id",
        FILE_TYPE => "file_id",
        _ => "id",
    }
}

/// Parses `name` as a Rust identifier.
///
/// Keywords are rejected; use [`field_ident`] where a raw identifier is
/// acceptable.
///
/// ## Errors
///
/// Returns `GeneratorError::Render` naming `name` if it is not an identifier.
pub fn ident(name: &str) -> Result<Ident, GeneratorError> {
    syn::parse_str::<Ident>(name)
        .map_err(|_| GeneratorError::render(name, "not a valid Rust identifier"))
}

/// Parses a wire field name as a Rust identifier, falling back to a raw
/// identifier for keywords (`type` -> `r#type`).
///
/// ## Examples
///
/// ```
/// use botgen_gen::naming::field_ident;
///
/// assert_eq!(field_ident("chat_id").unwrap().to_string(), "chat_id");
/// assert_eq!(field_ident("type").unwrap().to_string(), "r#type");
/// assert!(field_ident("2fa").is_err());
/// ```
///
/// ## Errors
///
/// Returns `GeneratorError::Render` if neither form is a valid identifier.
pub fn field_ident(name: &str) -> Result<Ident, GeneratorError> {
    ident(name).or_else(|_| {
        syn::parse_str::<Ident>(&format!("r#{name}"))
            .map_err(|_| GeneratorError::render(name, "not a valid Rust identifier"))
    })
}

/// Splits a camelCase or PascalCase string into individual words.
///
/// - "sendMessage" -> ["send", "Message"]
/// - "ChatMember" -> ["Chat", "Member"]
/// - "HTTPClient" -> ["HTTP", "Client"]
/// - "MarkdownV2" -> ["Markdown", "V2"]
/// - "chat" -> ["chat"]
fn split_camel_case(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let chars: Vec<(usize, char)> = s.char_indices().collect();

    for i in 1..chars.len() {
        let (idx, current) = chars[i];
        let prev = chars[i - 1].1;

        // Split before uppercase that follows lowercase or a digit: "sendMessage" -> "send", "Message"
        // Split before uppercase followed by lowercase when preceded by uppercase: "HTTPClient" -> "HTTP", "Client"
        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (i + 1 < chars.len() && chars[i + 1].1.is_lowercase() && prev.is_uppercase()));

        if is_new_word {
            if idx > word_start {
                words.push(&s[word_start..idx]);
            }
            word_start = idx;
        }
    }

    // Add the final word
    if word_start < s.len() {
        words.push(&s[word_start..]);
    }

    words
}
