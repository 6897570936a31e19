//! Enum constant generation
//!
//! Each enum becomes a `u32` type alias plus one constant per entry. Values are
//! emitted as Rust-native literals: hex for bitfields, decimal otherwise.

use super::{description_lines, doc_lines};
use crate::error::ScannerError;
use crate::ir::{Enum, Interface};
use crate::names::{pascal_case, NameRegistry};
use heck::ToShoutySnakeCase;
use proc_macro2::{Literal, Span, TokenStream};
use quote::{format_ident, quote, ToTokens};

/// Generate constant blocks for every enum of an interface
pub fn generate(iface: &Interface, registry: &NameRegistry) -> Result<Vec<TokenStream>, ScannerError> {
    iface
        .enums
        .iter()
        .map(|enum_def| generate_enum(iface, enum_def, registry))
        .collect()
}

fn generate_enum(
    iface: &Interface,
    enum_def: &Enum,
    registry: &NameRegistry,
) -> Result<TokenStream, ScannerError> {
    let iface_name = registry.resolve(&iface.name)?;
    let type_name = registry.resolve_enum(&iface.name, &enum_def.name)?;
    let type_ident = format_ident!("{}", type_name);

    let prefix = format!(
        "{}_{}",
        iface_name.to_shouty_snake_case(),
        pascal_case(&enum_def.name).to_shouty_snake_case()
    );

    let mut constants = Vec::new();
    for entry in &enum_def.entries {
        let entry_name = registry.resolve_entry(&iface.name, &enum_def.name, &entry.name)?;
        let const_ident = format_ident!("{}_{}", prefix, entry_name);

        let value = if enum_def.bitfield {
            syn::LitInt::new(&format!("{:#x}", entry.value), Span::call_site()).into_token_stream()
        } else {
            Literal::u32_unsuffixed(entry.value).into_token_stream()
        };

        let docs = doc_lines(entry.summary.iter());
        constants.push(quote! {
            #docs
            pub const #const_ident: #type_ident = #value;
        });
    }

    let mut lines = description_lines(&enum_def.description);
    if enum_def.bitfield {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Bit flags; values may be combined with `|`.".to_string());
    }
    let docs = doc_lines(lines);

    Ok(quote! {
        #docs
        pub type #type_ident = u32;

        #(#constants)*
    })
}
