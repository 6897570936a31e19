//! wl-scanner
//!
//! Generates Rust client bindings from a Wayland protocol description.
//!
//! Usage:
//!   wl-scanner --source protocol/wayland.xml -o src/protocol/wayland.rs
//!   wl-scanner --dev -o src/protocol/wayland.rs --overwrite
//!   wl-scanner --source xdg-shell.xml -o src/protocol/xdg_shell.rs --rustfmt

#![deny(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wl_scanner::source::{SchemaSource, DEVEL_WAYLAND_XML};
use wl_scanner::{FieldCase, GeneratorOptions, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "wl-scanner")]
#[command(about = "Generate Rust client bindings from a Wayland protocol XML file")]
struct Args {
    /// Schema location: a file path or an http(s) URL
    #[arg(long, default_value = "wayland.xml")]
    source: String,

    /// Use the development copy of wayland.xml from upstream
    #[arg(long, conflicts_with = "source")]
    dev: bool,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Replace the output file if it already exists
    #[arg(long)]
    overwrite: bool,

    /// Module path of the client runtime in the generated code
    #[arg(long, env = "WL_SCANNER_RUNTIME_PATH", default_value = "crate::client")]
    runtime_path: String,

    /// Module path of the core protocol bindings, imported by extensions
    #[arg(long, env = "WL_SCANNER_BASE_PATH", default_value = "crate::protocol::wayland")]
    base_path: String,

    /// Naming convention of event record fields (snake or camel)
    #[arg(long, default_value = "snake")]
    field_case: FieldCase,

    /// Run rustfmt on the generated file
    #[arg(long)]
    rustfmt: bool,
}

impl Args {
    fn into_config(self) -> RunConfig {
        let location = if self.dev {
            DEVEL_WAYLAND_XML.to_string()
        } else {
            self.source
        };

        RunConfig {
            source: SchemaSource::parse(&location),
            output: self.output,
            overwrite: self.overwrite,
            rustfmt: self.rustfmt,
            generator: GeneratorOptions {
                source: location,
                runtime_path: self.runtime_path,
                base_path: self.base_path,
                field_case: self.field_case,
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Args::parse().into_config();

    match wl_scanner::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_soft() => {
            tracing::warn!("{}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
