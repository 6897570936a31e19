//! Argument classification and wire type mapping
//!
//! Every argument is classified once into an [`ArgClass`]; request and event
//! generation match on it exhaustively.

use super::rust_ident;
use crate::error::ScannerError;
use crate::ir::{Arg, ArgType};
use crate::names::NameRegistry;
use crate::options::FieldCase;
use heck::ToSnakeCase;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

/// Plain wire value types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Int,
    Uint,
    String,
    Fd,
    Fixed,
    Array,
}

impl Primitive {
    /// Rust type of a request parameter
    pub fn param_type(self, nullable: bool) -> TokenStream {
        match self {
            Primitive::Int => quote! { i32 },
            Primitive::Uint => quote! { u32 },
            Primitive::String if nullable => quote! { Option<&str> },
            Primitive::String => quote! { &str },
            Primitive::Fd => quote! { RawFd },
            Primitive::Fixed => quote! { f32 },
            Primitive::Array => quote! { &[i32] },
        }
    }

    /// Rust type of an event record field
    pub fn field_type(self) -> TokenStream {
        match self {
            Primitive::Int => quote! { i32 },
            Primitive::Uint => quote! { u32 },
            Primitive::String => quote! { String },
            Primitive::Fd => quote! { RawFd },
            Primitive::Fixed => quote! { f32 },
            Primitive::Array => quote! { Vec<i32> },
        }
    }

    /// Decode operation on the runtime event buffer
    pub fn decode_method(self) -> Ident {
        match self {
            Primitive::Int => format_ident!("int32"),
            Primitive::Uint => format_ident!("uint32"),
            Primitive::String => format_ident!("string"),
            Primitive::Fd => format_ident!("fd"),
            Primitive::Fixed => format_ident!("float32"),
            Primitive::Array => format_ident!("array"),
        }
    }

    /// Wrap a parameter into a runtime `Argument`
    pub fn encode(self, value: &Ident, nullable: bool) -> TokenStream {
        match self {
            Primitive::Int => quote! { Argument::Int(#value) },
            Primitive::Uint => quote! { Argument::Uint(#value) },
            Primitive::String if nullable => {
                quote! { Argument::String(#value.map(str::to_string)) }
            }
            Primitive::String => quote! { Argument::String(Some(#value.to_string())) },
            Primitive::Fd => quote! { Argument::Fd(#value) },
            Primitive::Fixed => quote! { Argument::Fixed(#value) },
            Primitive::Array => quote! { Argument::Array(#value.to_vec()) },
        }
    }
}

/// Resolved shape of an argument
#[derive(Debug, Clone)]
pub enum ArgClass {
    /// Plain value
    Primitive(Primitive),
    /// Integer typed with a generated enum alias
    Enum {
        /// `Int` or `Uint`
        wire: Primitive,
        /// Canonical enum type name
        type_name: Ident,
    },
    /// Reference to an existing object; `None` when the interface is not fixed
    Object(Option<Ident>),
    /// Object created by the call, of a statically known interface
    NewObject(Ident),
    /// Object created by the call, interface chosen by the caller
    LateBoundNewObject,
}

/// Classify an argument of an interface named `owner`
///
/// Late-bound new objects are detected before anything else: they are the
/// only shape where the caller constructs the object.
pub fn classify(arg: &Arg, owner: &str, registry: &NameRegistry) -> Result<ArgClass, ScannerError> {
    let resolve = |iface: &str| registry.resolve(iface).map(|name| format_ident!("{}", name));

    Ok(match (arg.arg_type, arg.interface.as_deref()) {
        (ArgType::NewId, None) => ArgClass::LateBoundNewObject,
        (ArgType::NewId, Some(iface)) => ArgClass::NewObject(resolve(iface)?),
        (ArgType::Object, iface) => ArgClass::Object(iface.map(resolve).transpose()?),
        (ArgType::Int | ArgType::Uint, _) if arg.enum_ref.is_some() => {
            let reference = arg.enum_ref.as_deref().unwrap_or_default();
            let type_name = registry.resolve_enum(owner, reference)?;
            let wire = if arg.arg_type == ArgType::Int {
                Primitive::Int
            } else {
                Primitive::Uint
            };
            ArgClass::Enum {
                wire,
                type_name: format_ident!("{}", type_name),
            }
        }
        (ArgType::Int, _) => ArgClass::Primitive(Primitive::Int),
        (ArgType::Uint, _) => ArgClass::Primitive(Primitive::Uint),
        (ArgType::String, _) => ArgClass::Primitive(Primitive::String),
        (ArgType::Fd, _) => ArgClass::Primitive(Primitive::Fd),
        (ArgType::Fixed, _) => ArgClass::Primitive(Primitive::Fixed),
        (ArgType::Array, _) => ArgClass::Primitive(Primitive::Array),
    })
}

/// Identifier of an event record field
pub fn field_ident(name: &str, case: FieldCase) -> Ident {
    match case {
        FieldCase::Snake => rust_ident(&name.to_snake_case()),
        FieldCase::Camel => rust_ident(&crate::names::camel_case(name)),
    }
}
