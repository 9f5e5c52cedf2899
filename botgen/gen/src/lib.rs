//! botgen code generator library.
//!
//! This crate generates Rust source for a Telegram Bot API client from a
//! machine-readable description of the API's types and methods. The
//! generated code includes:
//!
//! - Constant enums: `UpdateType`, `ParseMode` and `StickerType`
//! - One `<Method>Opts` struct per method with optional parameters
//! - Helper methods on domain entities that forward to `Bot`, filling in
//!   the parameters derivable from the entity (`message.delete(&bot)`)
//!
//! ## Modules
//!
//! - [`validation`] - Schema loading and required-entry checks
//! - [`naming`] - Name conversion utilities
//! - [`resolver`] - Wire type to Rust type resolution
//! - [`parser`] - Quoted literal extraction from descriptions
//! - [`codegen`] - Code generation for constants, options and helpers
//! - [`output`] - Final assembly, validation, and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use botgen_gen::output::{OutputMode, generate_and_write};
//! use botgen_gen::validation::load_api;
//!
//! let api = load_api(Path::new("schema/api.json")).unwrap();
//!
//! // Print the generated files instead of writing them
//! generate_and_write(&api, Path::new("generated"), OutputMode::DryRun).unwrap();
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! // gen_consts.rs
//! pub enum UpdateType { Message, EditedMessage, ... }
//! pub enum ParseMode { Html, MarkdownV2, Markdown, None }
//! pub enum StickerType { Regular, Mask, CustomEmoji }
//!
//! // gen_opts.rs
//! pub struct SendMessageOpts { pub parse_mode: Option<String>, ... }
//!
//! // gen_helpers.rs
//! impl Message {
//!     pub fn delete(&self, bot: &Bot) -> Result<bool, BotError>;
//! }
//! ```

pub mod codegen;
pub mod errors;
pub mod naming;
pub mod output;
pub mod parser;
pub mod resolver;
#[doc(hidden)]
pub mod test_utils;
pub mod validation;
