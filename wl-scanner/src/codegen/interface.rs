//! Proxy type, constructor and `Proxy` impl of an interface

use super::{description_lines, doc_lines};
use crate::ir::Interface;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

/// Generate the proxy struct and, when the interface has events, its
/// handler table
///
/// All handler lists of an instance sit behind one `RwLock`.
pub fn generate_type(iface: &Interface, type_ident: &Ident, handler_fields: &[TokenStream]) -> TokenStream {
    let docs = doc_lines(description_lines(&iface.description));

    if handler_fields.is_empty() {
        return quote! {
            #docs
            pub struct #type_ident {
                base: BaseProxy,
            }
        };
    }

    let handlers_ident = format_ident!("{}Handlers", type_ident);
    quote! {
        #docs
        pub struct #type_ident {
            base: BaseProxy,
            handlers: RwLock<#handlers_ident>,
        }

        #[derive(Default)]
        struct #handlers_ident {
            #(#handler_fields,)*
        }
    }
}

/// Generate interface metadata and the constructor
pub fn generate_constructor(iface: &Interface, type_ident: &Ident, has_events: bool) -> TokenStream {
    let native = &iface.name;
    let version = iface.version;
    let doc = format!(" Create a new `{}` and register it with `ctx`", type_ident);

    let init = if has_events {
        quote! {
            Self {
                base: BaseProxy::new(ctx),
                handlers: RwLock::default(),
            }
        }
    } else {
        quote! {
            Self {
                base: BaseProxy::new(ctx),
            }
        }
    };

    quote! {
        /// Interface name on the wire
        pub const INTERFACE: &'static str = #native;

        /// Interface version these bindings were generated from
        pub const VERSION: u32 = #version;

        #[doc = #doc]
        pub fn new(ctx: &Context) -> Arc<Self> {
            let ret = Arc::new(#init);
            ctx.register(ret.clone());
            ret
        }
    }
}

/// Generate the `Proxy` impl; `dispatch` is only overridden when the
/// interface has events
pub fn generate_proxy_impl(type_ident: &Ident, dispatch: Option<&TokenStream>) -> TokenStream {
    quote! {
        impl Proxy for #type_ident {
            fn base(&self) -> &BaseProxy {
                &self.base
            }

            #dispatch
        }
    }
}
