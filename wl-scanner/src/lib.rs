//! wl-scanner
//!
//! Compiles a Wayland protocol XML description into Rust client bindings.
//!
//! The pipeline is strictly sequential:
//! 1. load the schema and decode it into the [`ir::Protocol`] IR
//! 2. register the canonical name of every interface and enum
//! 3. generate the declarations of each interface, in document order
//! 4. render and write the output file, optionally running `rustfmt`

#![deny(missing_docs)]

pub mod codegen;
pub mod emitter;
pub mod error;
pub mod ir;
pub mod names;
pub mod options;
pub mod parser;
pub mod source;

pub use error::ScannerError;
pub use options::{FieldCase, GeneratorOptions};

use emitter::Emitter;
use ir::Protocol;
use names::NameRegistry;
use source::SchemaSource;
use std::path::PathBuf;

/// Everything needed for one end-to-end run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Where to read the schema from
    pub source: SchemaSource,

    /// Output file
    pub output: PathBuf,

    /// Replace an existing output file
    pub overwrite: bool,

    /// Run `rustfmt` on the written file
    pub rustfmt: bool,

    /// Code generation options
    pub generator: GeneratorOptions,
}

/// Generate the bindings for a decoded protocol
///
/// The name registry is fully built before any interface is generated, so
/// references to interfaces declared later in the document resolve.
pub fn generate(protocol: &Protocol, options: &GeneratorOptions) -> Result<String, ScannerError> {
    options.validate()?;

    let registry = NameRegistry::for_protocol(protocol);
    let mut emitter = Emitter::new(codegen::file_header(protocol, options)?);

    for iface in &protocol.interfaces {
        tracing::debug!(
            interface = %iface.name,
            requests = iface.requests.len(),
            events = iface.events.len(),
            enums = iface.enums.len(),
            "generating interface"
        );
        emitter.push(codegen::generate_interface(iface, &registry, options)?);
    }

    Ok(emitter.render())
}

/// Load, generate and write
pub fn run(config: &RunConfig) -> Result<(), ScannerError> {
    let bytes = config.source.read()?;
    let protocol = parser::parse_protocol(&bytes)?;
    tracing::info!(
        protocol = %protocol.name,
        interfaces = protocol.interfaces.len(),
        "schema loaded"
    );

    let code = generate(&protocol, &config.generator)?;
    emitter::write_output(&config.output, &code, config.overwrite)?;

    if config.rustfmt {
        emitter::run_rustfmt(&config.output);
    }

    Ok(())
}
