//! Code generation modules for botgen.
//!
//! This module contains generators that produce Rust source code from a
//! loaded Bot API schema. Each submodule produces one output file's worth of
//! declarations.
//!
//! ## Submodules
//!
//! - [`consts`] - Update type, parse mode and sticker type enums
//! - [`opts`] - Per-method options structs bundling optional parameters
//! - [`helpers`] - Entity helper methods forwarding to `Bot`
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the assembly and file writing logic.

pub mod consts;
pub mod helpers;
pub mod opts;

pub use consts::{ConstBlock, ConstEntry, generate_consts};
pub use helpers::{HelperPlan, generate_helpers};
pub use opts::generate_opts;
