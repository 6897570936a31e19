//! Generator options
//!
//! Everything the code generator needs to know beyond the protocol itself.
//! Built by the CLI and threaded through the pipeline.

use crate::error::ScannerError;
use proc_macro2::TokenStream;
use quote::ToTokens;

/// Naming convention for event record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldCase {
    /// `surface_x`
    #[default]
    Snake,
    /// `surfaceX`
    Camel,
}

impl std::str::FromStr for FieldCase {
    type Err = ScannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snake" => Ok(FieldCase::Snake),
            "camel" => Ok(FieldCase::Camel),
            other => Err(ScannerError::Options(format!(
                "unknown field case {:?} (expected snake or camel)",
                other
            ))),
        }
    }
}

/// Options for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Location printed in the generated header
    pub source: String,

    /// Module path of the runtime transport (`Context`, `Proxy`, ...)
    pub runtime_path: String,

    /// Module path of the base protocol bindings, used by extensions
    pub base_path: String,

    /// Naming convention for event record fields
    pub field_case: FieldCase,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            source: String::new(),
            runtime_path: "crate::client".to_string(),
            base_path: "crate::protocol::wayland".to_string(),
            field_case: FieldCase::Snake,
        }
    }
}

impl GeneratorOptions {
    /// Check that the configured module paths are valid Rust paths
    pub fn validate(&self) -> Result<(), ScannerError> {
        parse_path("runtime path", &self.runtime_path)?;
        parse_path("base path", &self.base_path)?;
        Ok(())
    }

    /// Runtime module path as tokens
    pub fn runtime_tokens(&self) -> Result<TokenStream, ScannerError> {
        parse_path("runtime path", &self.runtime_path).map(|p| p.to_token_stream())
    }

    /// Base protocol module path as tokens
    pub fn base_tokens(&self) -> Result<TokenStream, ScannerError> {
        parse_path("base path", &self.base_path).map(|p| p.to_token_stream())
    }
}

fn parse_path(what: &str, path: &str) -> Result<syn::Path, ScannerError> {
    syn::parse_str::<syn::Path>(path)
        .map_err(|e| ScannerError::Options(format!("invalid {} {:?}: {}", what, path, e)))
}
