//! Output accumulation and writing
//!
//! Declarations are collected in interface order, rendered once with
//! prettyplease and written to the destination in a single write. Running an
//! external formatter afterwards is optional and never affects the outcome.

use crate::error::ScannerError;
use proc_macro2::TokenStream;
use quote::quote;
use std::path::Path;
use std::process::Command;

/// Collects generated declarations for one output file
#[derive(Debug, Default)]
pub struct Emitter {
    header: TokenStream,
    items: Vec<TokenStream>,
}

impl Emitter {
    /// Start a file with the given header
    pub fn new(header: TokenStream) -> Self {
        Self {
            header,
            items: Vec::new(),
        }
    }

    /// Append the declarations of one interface
    pub fn push(&mut self, item: TokenStream) {
        self.items.push(item);
    }

    /// Render the whole file
    ///
    /// Falls back to the unformatted token text if the output does not parse
    /// as a Rust file.
    pub fn render(&self) -> String {
        let header = &self.header;
        let items = &self.items;
        let code = quote! {
            #header
            #(#items)*
        }
        .to_string();

        match syn::parse_file(&code) {
            Ok(parsed) => prettyplease::unparse(&parsed),
            Err(e) => {
                tracing::warn!(error = %e, "generated code does not parse, writing it unformatted");
                code
            }
        }
    }
}

/// Write the rendered file
///
/// An existing destination is only replaced when `overwrite` is set.
pub fn write_output(path: &Path, code: &str, overwrite: bool) -> Result<(), ScannerError> {
    if path.exists() && !overwrite {
        return Err(ScannerError::OutputExists(path.to_path_buf()));
    }

    std::fs::write(path, code).map_err(|source| ScannerError::Emission {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = code.len(), "bindings written");
    Ok(())
}

/// Run `rustfmt` on a written file
///
/// Returns whether formatting succeeded. Failures are logged only; the file on
/// disk is already valid.
pub fn run_rustfmt(path: &Path) -> bool {
    match Command::new("rustfmt").arg("--edition").arg("2024").arg(path).status() {
        Ok(status) if status.success() => {
            tracing::debug!(path = %path.display(), "rustfmt finished");
            true
        }
        Ok(status) => {
            tracing::warn!(%status, "rustfmt failed, output left as generated");
            false
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "rustfmt not found, run \"rustfmt {}\" yourself",
                path.display()
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_push_order() {
        let mut emitter = Emitter::new(quote! { #![doc = " header"] });
        emitter.push(quote! { pub struct First; });
        emitter.push(quote! { pub struct Second; });
        assert_eq!(emitter.items.len(), 2);

        let code = emitter.render();
        assert!(code.starts_with("//! header\n"));
        let first = code.find("pub struct First;").unwrap();
        let second = code.find("pub struct Second;").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_falls_back_when_unparsable() {
        let mut emitter = Emitter::default();
        assert!(emitter.items.is_empty());
        emitter.push(quote! { pub struct; });

        let code = emitter.render();
        assert_eq!(code, "pub struct ;");
    }

    #[test]
    fn test_write_and_overwrite_protection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.rs");

        write_output(&path, "pub struct A;\n", false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub struct A;\n");

        let err = write_output(&path, "pub struct B;\n", false).unwrap_err();
        assert!(err.is_soft());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub struct A;\n");

        write_output(&path, "pub struct B;\n", true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub struct B;\n");
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("client.rs");

        let err = write_output(&path, "", false).unwrap_err();
        assert!(matches!(err, ScannerError::Emission { .. }));
        assert!(!err.is_soft());
    }
}
