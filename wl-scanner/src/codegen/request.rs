//! Request method generation
//!
//! Each request becomes a method on the proxy type. The request's position in
//! the interface is its opcode; it is emitted as an associated constant
//! (`SYNC_OPCODE`) that the method passes to `send_request`.

use super::types::{classify, ArgClass, Primitive};
use super::{description_lines, doc_lines, rust_ident};
use crate::error::ScannerError;
use crate::ir::{ArgType, Interface, Request};
use crate::names::NameRegistry;
use heck::ToShoutySnakeCase;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

/// Parameter names introduced by a late-bound new-object argument
const LATE_BOUND_PARAMS: [&str; 2] = ["interface", "version"];

/// Generate one method per request, in declaration order
pub fn generate(iface: &Interface, registry: &NameRegistry) -> Result<Vec<TokenStream>, ScannerError> {
    iface
        .requests
        .iter()
        .enumerate()
        .map(|(opcode, request)| {
            let opcode = u16::try_from(opcode).map_err(|_| {
                ScannerError::Schema(format!("interface {} has too many requests", iface.name))
            })?;
            generate_request(iface, request, opcode, registry)
        })
        .collect()
}

fn generate_request(
    iface: &Interface,
    request: &Request,
    opcode: u16,
    registry: &NameRegistry,
) -> Result<TokenStream, ScannerError> {
    let method = rust_ident(&request.name);
    check_late_bound_names(iface, request)?;

    let mut params = Vec::new();
    let mut wire_args = Vec::new();
    let mut constructed: Vec<(Ident, Ident)> = Vec::new();

    for arg in &request.args {
        let name = rust_ident(&arg.name);
        let nullable = arg.allow_null;

        match classify(arg, &iface.name, registry)? {
            ArgClass::LateBoundNewObject => {
                params.push(quote! { interface: &str });
                params.push(quote! { version: u32 });
                params.push(quote! { #name: &dyn Proxy });
                wire_args.push(quote! { Argument::String(Some(interface.to_string())) });
                wire_args.push(quote! { Argument::Uint(version) });
                wire_args.push(quote! { Argument::NewId(#name.id()) });
            }
            ArgClass::NewObject(target) => {
                wire_args.push(quote! { Argument::NewId(#name.id()) });
                constructed.push((name, target));
            }
            ArgClass::Object(target) => {
                let ty = match target {
                    Some(target) => quote! { &#target },
                    None => quote! { &dyn Proxy },
                };
                if nullable {
                    params.push(quote! { #name: Option<#ty> });
                    wire_args.push(quote! { Argument::Object(#name.map(|p| p.id())) });
                } else {
                    params.push(quote! { #name: #ty });
                    wire_args.push(quote! { Argument::Object(Some(#name.id())) });
                }
            }
            ArgClass::Enum { wire, type_name } => {
                params.push(quote! { #name: #type_name });
                wire_args.push(match wire {
                    Primitive::Int => quote! { Argument::Int(#name as i32) },
                    _ => quote! { Argument::Uint(#name) },
                });
            }
            ArgClass::Primitive(primitive) => {
                let ty = primitive.param_type(nullable);
                params.push(quote! { #name: #ty });
                wire_args.push(primitive.encode(&name, nullable));
            }
        }
    }

    let opcode_ident = format_ident!("{}_OPCODE", request.name.to_shouty_snake_case());
    let opcode = Literal::u16_unsuffixed(opcode);
    let docs = request_docs(request);

    let send = quote! {
        self.context().send_request(self, Self::#opcode_ident, &[#(#wire_args),*])
    };

    let (ret_type, body) = match constructed.as_slice() {
        [] => (quote! { () }, send),
        [(name, target)] => (
            quote! { Arc<#target> },
            quote! {
                let #name = #target::new(self.context());
                #send?;
                Ok(#name)
            },
        ),
        many => {
            let names: Vec<_> = many.iter().map(|(name, _)| name).collect();
            let targets: Vec<_> = many.iter().map(|(_, target)| target).collect();
            (
                quote! { (#(Arc<#targets>),*) },
                quote! {
                    #(let #names = #targets::new(self.context());)*
                    #send?;
                    Ok((#(#names),*))
                },
            )
        }
    };

    Ok(quote! {
        pub const #opcode_ident: u16 = #opcode;

        #docs
        pub fn #method(&self, #(#params),*) -> Result<#ret_type, Error> {
            #body
        }
    })
}

/// A late-bound new object adds `interface` and `version` parameters; an
/// argument of the same request may not use those names.
fn check_late_bound_names(iface: &Interface, request: &Request) -> Result<(), ScannerError> {
    let late_bound = request
        .args
        .iter()
        .any(|arg| arg.arg_type == ArgType::NewId && arg.interface.is_none());
    if !late_bound {
        return Ok(());
    }

    match request
        .args
        .iter()
        .find(|arg| LATE_BOUND_PARAMS.contains(&arg.name.as_str()))
    {
        Some(arg) => Err(ScannerError::Schema(format!(
            "request {}.{}: argument {:?} clashes with the interface/version parameters of its untyped new_id",
            iface.name, request.name, arg.name
        ))),
        None => Ok(()),
    }
}

fn request_docs(request: &Request) -> TokenStream {
    let mut lines = description_lines(&request.description);
    if request.destructor {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("This request is a destructor: the object must not be used afterwards.".to_string());
    }
    if let Some(since) = request.since {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("Available since version {}.", since));
    }
    doc_lines(lines)
}
