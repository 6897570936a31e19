//! Declaration compiler
//!
//! Turns each interface of the IR into Rust declarations:
//! - the proxy type, its metadata and constructor
//! - one method per request, bound to the request's opcode
//! - event records, handler registration and dispatch
//! - enum constants

mod enum_gen;
mod event;
mod interface;
mod request;
mod types;

use crate::error::ScannerError;
use crate::ir::{Description, Interface, Protocol};
use crate::names::NameRegistry;
use crate::options::GeneratorOptions;
use once_cell::sync::Lazy;
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use std::collections::HashSet;

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
        "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
        "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override",
        "priv", "pub", "ref", "return", "static", "struct", "trait", "true", "try", "type",
        "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
    ]
    .into_iter()
    .collect()
});

/// Build an identifier from a schema name, escaping Rust keywords
pub(crate) fn rust_ident(name: &str) -> Ident {
    match name {
        "self" | "Self" | "super" | "crate" => format_ident!("{}_", name),
        _ if KEYWORDS.contains(name) => Ident::new_raw(name, Span::call_site()),
        _ if name.starts_with(|c: char| c.is_ascii_digit()) => format_ident!("_{}", name),
        _ => format_ident!("{}", name),
    }
}

/// Turn text lines into `#[doc]` attributes
pub(crate) fn doc_lines<I, S>(lines: I) -> TokenStream
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let attrs = lines.into_iter().map(|line| {
        let line = line.as_ref();
        let text = if line.is_empty() {
            String::new()
        } else {
            format!(" {}", line)
        };
        quote! { #[doc = #text] }
    });
    quote! { #(#attrs)* }
}

/// Reflow a description body into trimmed lines, dropping leading and
/// trailing blank lines
pub(crate) fn reflow(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].iter().map(|l| l.to_string()).collect()
}

/// Summary followed by the reflowed body
pub(crate) fn description_lines(description: &Description) -> Vec<String> {
    let mut lines = Vec::new();
    if !description.summary.is_empty() {
        lines.push(capitalize(description.summary.trim()));
    }
    let body = reflow(&description.text);
    if !body.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(body);
    }
    lines
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// File header: provenance comment, lint allowances and imports
pub fn file_header(
    protocol: &Protocol,
    options: &GeneratorOptions,
) -> Result<TokenStream, ScannerError> {
    let mut lines = vec![
        format!("Client bindings for the `{}` protocol", protocol.name),
        String::new(),
        "Generated by wl-scanner.".to_string(),
    ];
    if !options.source.is_empty() {
        lines.push(format!("From: {}", options.source));
    }
    if let Some(copyright) = &protocol.copyright {
        lines.push(String::new());
        lines.extend(reflow(copyright));
    }
    lines.push(String::new());
    lines.push("@generated".to_string());

    let docs = lines.iter().map(|line| {
        let text = if line.is_empty() {
            String::new()
        } else {
            format!(" {}", line)
        };
        quote! { #![doc = #text] }
    });

    let runtime = options.runtime_tokens()?;
    let base_import = if protocol.is_base() {
        quote! {}
    } else {
        let base = options.base_tokens()?;
        quote! { use #base::*; }
    };

    Ok(quote! {
        #(#docs)*

        #![allow(missing_docs)]
        #![allow(unused_imports)]
        #![allow(clippy::too_many_arguments)]

        use std::os::fd::RawFd;
        use std::sync::{Arc, PoisonError, RwLock};

        use #runtime::{Argument, BaseProxy, Context, Error, Event, Handler, Proxy};
        #base_import
    })
}

/// Generate every declaration of one interface
///
/// Order: type definition, constructor, requests, event records with
/// handler registration and dispatch, enum constants.
pub fn generate_interface(
    iface: &Interface,
    registry: &NameRegistry,
    options: &GeneratorOptions,
) -> Result<TokenStream, ScannerError> {
    let canonical = registry.resolve(&iface.name)?;
    let type_ident = format_ident!("{}", canonical);

    let events = event::generate(iface, &type_ident, registry, options)?;
    let type_def = interface::generate_type(iface, &type_ident, &events.handler_fields);
    let constructor = interface::generate_constructor(iface, &type_ident, events.has_events());
    let requests = request::generate(iface, registry)?;
    let proxy_impl = interface::generate_proxy_impl(&type_ident, events.dispatch.as_ref());
    let enums = enum_gen::generate(iface, registry)?;

    let records = &events.records;
    let handler_methods = &events.handler_methods;
    let event_impl = if events.has_events() {
        quote! {
            impl #type_ident {
                #(#handler_methods)*
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #type_def

        impl #type_ident {
            #constructor
            #(#requests)*
        }

        #(#records)*

        #event_impl

        #proxy_impl

        #(#enums)*
    })
}
