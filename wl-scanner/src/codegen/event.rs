//! Event records, handler registration and dispatch
//!
//! Every event gets a record struct and an add/remove handler pair. The
//! interface gets one `dispatch` that matches on the incoming opcode, decodes
//! the payload only when someone is listening, and ignores opcodes it does
//! not know.
//!
//! Dispatch snapshots the matching handler list under the read lock and
//! releases it before any handler runs, so handlers may add or remove
//! handlers on the object that is dispatching.

use super::types::{classify, field_ident, ArgClass, Primitive};
use super::{doc_lines, rust_ident};
use crate::error::ScannerError;
use crate::ir::{Event, Interface};
use crate::names::{pascal_case, NameRegistry};
use crate::options::{FieldCase, GeneratorOptions};
use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

/// Generated pieces for all events of one interface
#[derive(Default)]
pub struct EventTokens {
    /// Record structs, one per event
    pub records: Vec<TokenStream>,

    /// Fields of the per-instance handler table
    pub handler_fields: Vec<TokenStream>,

    /// `add_*_handler` / `remove_*_handler` methods
    pub handler_methods: Vec<TokenStream>,

    /// Body of `Proxy::dispatch`, absent without events
    pub dispatch: Option<TokenStream>,
}

impl EventTokens {
    pub fn has_events(&self) -> bool {
        !self.handler_fields.is_empty()
    }
}

/// Generate records, handlers and dispatch for every event of `iface`
pub fn generate(
    iface: &Interface,
    type_ident: &Ident,
    registry: &NameRegistry,
    options: &GeneratorOptions,
) -> Result<EventTokens, ScannerError> {
    let mut tokens = EventTokens::default();
    let mut arms = Vec::new();

    for (opcode, event) in iface.events.iter().enumerate() {
        let opcode = u16::try_from(opcode).map_err(|_| {
            ScannerError::Schema(format!("interface {} has too many events", iface.name))
        })?;
        let record_ident = format_ident!("{}{}Event", type_ident, pascal_case(&event.name));
        let list_ident = rust_ident(&event.name);

        let record = generate_record(iface, event, type_ident, &record_ident, registry, options.field_case)?;
        tokens.records.push(record.definition);

        tokens.handler_fields.push(quote! {
            #list_ident: Vec<Arc<dyn Handler<#record_ident>>>
        });
        tokens
            .handler_methods
            .push(generate_handler_methods(event, &record_ident, &list_ident));

        let opcode = Literal::u16_unsuffixed(opcode);
        let decoders = &record.decoders;
        arms.push(quote! {
            #opcode => {
                let handlers = self
                    .handlers
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .#list_ident
                    .clone();
                if !handlers.is_empty() {
                    let ev = #record_ident {
                        #(#decoders,)*
                    };
                    for handler in &handlers {
                        handler.handle(&ev);
                    }
                }
            }
        });
    }

    if !arms.is_empty() {
        tokens.dispatch = Some(quote! {
            fn dispatch(&self, event: &mut Event) {
                match event.opcode() {
                    #(#arms)*
                    _ => {}
                }
            }
        });
    }

    Ok(tokens)
}

struct Record {
    definition: TokenStream,
    decoders: Vec<TokenStream>,
}

fn generate_record(
    iface: &Interface,
    event: &Event,
    type_ident: &Ident,
    record_ident: &Ident,
    registry: &NameRegistry,
    case: FieldCase,
) -> Result<Record, ScannerError> {
    let mut fields = Vec::new();
    let mut decoders = Vec::new();

    for arg in &event.args {
        let field = field_ident(&arg.name, case);
        let (ty, decode) = match classify(arg, &iface.name, registry)? {
            ArgClass::Primitive(primitive) => {
                let method = primitive.decode_method();
                (primitive.field_type(), quote! { event.#method() })
            }
            ArgClass::Enum { wire, type_name } => {
                let method = wire.decode_method();
                let decode = match wire {
                    Primitive::Int => quote! { event.#method() as u32 },
                    _ => quote! { event.#method() },
                };
                (quote! { #type_name }, decode)
            }
            ArgClass::Object(Some(target)) | ArgClass::NewObject(target) => (
                quote! { Option<Arc<#target>> },
                quote! { event.proxy::<#target>(self.context()) },
            ),
            ArgClass::Object(None) | ArgClass::LateBoundNewObject => (
                quote! { Option<Arc<dyn Proxy>> },
                quote! { event.any_proxy(self.context()) },
            ),
        };

        let docs = doc_lines(arg.summary.iter());
        fields.push(quote! {
            #docs
            pub #field: #ty
        });
        decoders.push(quote! { #field: #decode });
    }

    let mut doc = vec![format!("`{}` event of [`{}`]", event.name, type_ident)];
    if !event.description.summary.is_empty() {
        doc[0].push_str(&format!(": {}", event.description.summary.trim()));
    }
    if let Some(since) = event.since {
        doc.push(String::new());
        doc.push(format!("Available since version {}.", since));
    }
    let docs = doc_lines(doc);

    let allow = match case {
        FieldCase::Camel => quote! { #[allow(non_snake_case)] },
        FieldCase::Snake => quote! {},
    };

    Ok(Record {
        definition: quote! {
            #docs
            #[derive(Clone)]
            #allow
            pub struct #record_ident {
                #(#fields,)*
            }
        },
        decoders,
    })
}

fn generate_handler_methods(event: &Event, record_ident: &Ident, list_ident: &Ident) -> TokenStream {
    let add = format_ident!("add_{}_handler", event.name);
    let remove = format_ident!("remove_{}_handler", event.name);
    let add_doc = format!(" Register a handler for [`{}`]", record_ident);
    let remove_doc = format!(
        " Remove the first registration of `handler` for [`{}`], if any",
        record_ident
    );

    quote! {
        #[doc = #add_doc]
        pub fn #add(&self, handler: Arc<dyn Handler<#record_ident>>) {
            self.handlers
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .#list_ident
                .push(handler);
        }

        #[doc = #remove_doc]
        pub fn #remove(&self, handler: &Arc<dyn Handler<#record_ident>>) {
            let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
            if let Some(index) = handlers.#list_ident.iter().position(|h| Arc::ptr_eq(h, handler)) {
                handlers.#list_ident.remove(index);
            }
        }
    }
}
