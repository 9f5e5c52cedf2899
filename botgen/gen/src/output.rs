//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling all generated
//! pieces into complete Rust files, validating the output, formatting it, and
//! writing it to disk atomically.
//!
//! ## Output Structure
//!
//! The generator produces three sibling module files:
//! ```text
//! generated/
//! ├── gen_consts.rs    # UpdateType, ParseMode, StickerType
//! ├── gen_opts.rs      # <Method>Opts structs
//! └── gen_helpers.rs   # impl <Entity> { helper methods }
//! ```
//!
//! They are meant to be declared as modules next to `Bot`, `BotError` and
//! the data structs, which they pull in with `use super::*;`.
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **All or nothing**: Every file is rendered before the first one is written
//! - **Atomic writes**: Uses temp file + persist to prevent partial writes

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use botgen_model::ApiDescription;
use proc_macro2::TokenStream;
use quote::quote;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::codegen::{generate_consts, generate_helpers, generate_opts};
use crate::errors::GeneratorError;

/// Notice prepended to every generated file.
pub const HEADER: &str = "// THIS FILE IS AUTOGENERATED BY botgen. DO NOT EDIT.\n\
                          // Regenerate by running `botgen` in the repository root.\n\n";

/// File holding the constant enums.
pub const CONSTS_FILE: &str = "gen_consts.rs";

/// File holding the options structs.
pub const OPTS_FILE: &str = "gen_opts.rs";

/// File holding the entity helpers.
pub const HELPERS_FILE: &str = "gen_helpers.rs";

/// What to do with the rendered files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Write changed files to the output directory.
    #[default]
    Write,
    /// Print every file to stdout; touch nothing on disk.
    DryRun,
    /// Fail if any file on disk differs from the rendered output.
    Check,
}

/// Outcome for a single output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// New content was written.
    Written,
    /// The file on disk already had this content.
    Unchanged,
    /// The content was printed to stdout.
    Printed,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Written => "written",
            Self::Unchanged => "unchanged",
            Self::Printed => "printed",
        };
        f.write_str(s)
    }
}

/// A fully rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub name: &'static str,
    /// Formatted contents, header included.
    pub content: String,
}

/// The result of handling one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Assembles `gen_consts.rs`.
///
/// ## Errors
///
/// Propagates schema integrity and render failures.
pub fn assemble_consts_module(api: &ApiDescription) -> Result<TokenStream, GeneratorError> {
    let consts = generate_consts(api)?;
    Ok(quote! {
        #consts
    })
}

/// Assembles `gen_opts.rs`.
///
/// ## Errors
///
/// Propagates type resolution and render failures.
pub fn assemble_opts_module(api: &ApiDescription) -> Result<TokenStream, GeneratorError> {
    let opts = generate_opts(api)?;
    Ok(quote! {
        #[allow(unused_imports)]
        use super::*;

        #opts
    })
}

/// Assembles `gen_helpers.rs`.
///
/// ## Errors
///
/// Propagates type resolution and render failures.
pub fn assemble_helpers_module(api: &ApiDescription) -> Result<TokenStream, GeneratorError> {
    let helpers = generate_helpers(api)?;
    Ok(quote! {
        #[allow(unused_imports)]
        use super::*;

        #helpers
    })
}

/// Validates generated code by parsing it with syn.
///
/// ## Errors
///
/// Returns `GeneratorError::Render` naming `name` if the code fails to parse.
pub fn validate_code(name: &str, tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::render(name, format!("generated code is invalid: {e}")))
}

/// Formats generated code using prettyplease, prepending [`HEADER`].
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{HEADER}{formatted}")
}

/// Renders every output file.
///
/// Nothing is written here; a failure in any file means no file is produced.
///
/// ## Errors
///
/// Returns the first generation failure, with the file name in the entity path.
pub fn render_all(api: &ApiDescription) -> Result<Vec<GeneratedFile>, GeneratorError> {
    type Assembler = fn(&ApiDescription) -> Result<TokenStream, GeneratorError>;
    let assemblers: [(&'static str, Assembler); 3] = [
        (CONSTS_FILE, assemble_consts_module),
        (OPTS_FILE, assemble_opts_module),
        (HELPERS_FILE, assemble_helpers_module),
    ];

    let mut files = Vec::with_capacity(assemblers.len());
    for (name, assemble) in assemblers {
        let tokens = assemble(api).map_err(|e| e.within(name))?;
        let file = validate_code(name, &tokens)?;
        debug!(file = name, "Rendered");
        files.push(GeneratedFile {
            name,
            content: format_code(&file),
        });
    }
    Ok(files)
}

/// Writes content to a file atomically using a temp file + persist.
///
/// The temp file is created in the target directory, so the final rename
/// never crosses a filesystem boundary.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let write_err = |e: std::io::Error| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
        path: parent.display().to_string(),
        source: e,
    })?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp_file.write_all(content.as_bytes()).map_err(write_err)?;
    temp_file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Writes `content` unless the file already holds exactly that.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if the write fails.
pub fn write_if_changed(path: &Path, content: &str) -> Result<FileStatus, GeneratorError> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        debug!(path = %path.display(), "Unchanged, skipping write");
        return Ok(FileStatus::Unchanged);
    }

    write_atomic(path, content)?;
    info!(path = %path.display(), "Wrote generated file");
    Ok(FileStatus::Written)
}

/// Renders every file and applies `mode` to the output directory.
///
/// This is the main entry point for code generation.
///
/// ## Errors
///
/// Returns an error if:
/// - Code generation fails (nothing is written)
/// - File writing fails
/// - In `Check` mode, a file on disk is missing or differs
#[instrument(skip(api), fields(output = %output_dir.display()))]
pub fn generate_and_write(
    api: &ApiDescription,
    output_dir: &Path,
    mode: OutputMode,
) -> Result<Vec<FileReport>, GeneratorError> {
    let files = render_all(api)?;
    info!(
        files = files.len(),
        version = api.version.as_deref().unwrap_or("unknown"),
        "Rendered generated files"
    );

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        let path = output_dir.join(file.name);
        let status = match mode {
            OutputMode::Write => write_if_changed(&path, &file.content)?,
            OutputMode::DryRun => {
                println!("=== {} ===\n{}", file.name, file.content);
                FileStatus::Printed
            }
            OutputMode::Check => {
                let current = fs::read_to_string(&path).ok();
                if current.as_deref() != Some(file.content.as_str()) {
                    return Err(GeneratorError::OutOfDate {
                        path: path.display().to_string(),
                    });
                }
                FileStatus::Unchanged
            }
        };
        reports.push(FileReport { path, status });
    }

    Ok(reports)
}
