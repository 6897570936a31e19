//! Name registry
//!
//! Maps schema-native identifiers (`wl_shm_pool`) to the canonical identifiers
//! used in generated code (`ShmPool`). Interfaces and enums are registered in
//! a dedicated pass over the whole protocol before any code is generated, so
//! that an argument may reference an interface declared further down.

use crate::error::ScannerError;
use crate::ir::Protocol;
use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToUpperCamelCase};
use std::collections::BTreeMap;

/// Namespace prefix of the core protocol
pub const NAMESPACE_PREFIX: &str = "wl_";

/// Core interfaces that extension protocols may reference without declaring
pub const FOREIGN_INTERFACES: &[&str] = &[
    "wl_display",
    "wl_registry",
    "wl_callback",
    "wl_compositor",
    "wl_shm_pool",
    "wl_shm",
    "wl_buffer",
    "wl_data_offer",
    "wl_data_source",
    "wl_data_device",
    "wl_data_device_manager",
    "wl_shell",
    "wl_shell_surface",
    "wl_surface",
    "wl_seat",
    "wl_pointer",
    "wl_keyboard",
    "wl_touch",
    "wl_output",
    "wl_region",
    "wl_subcompositor",
    "wl_subsurface",
];

/// Core enums that extension protocols may reference, as `(interface, enum)`
pub const FOREIGN_ENUMS: &[(&str, &str)] = &[
    ("wl_shm", "format"),
    ("wl_data_device_manager", "dnd_action"),
    ("wl_seat", "capability"),
    ("wl_pointer", "button_state"),
    ("wl_pointer", "axis"),
    ("wl_pointer", "axis_source"),
    ("wl_keyboard", "keymap_format"),
    ("wl_keyboard", "key_state"),
    ("wl_output", "subpixel"),
    ("wl_output", "transform"),
    ("wl_output", "mode"),
];

/// Convert a native name to PascalCase, stripping the namespace prefix
pub fn pascal_case(native: &str) -> String {
    strip_prefix(native).to_upper_camel_case()
}

/// Convert a native name to camelCase, stripping the namespace prefix
///
/// Used for event record field names when the lower-first accessor
/// convention is requested.
pub fn camel_case(native: &str) -> String {
    strip_prefix(native).to_lower_camel_case()
}

fn strip_prefix(native: &str) -> &str {
    native.strip_prefix(NAMESPACE_PREFIX).unwrap_or(native)
}

/// Registry of canonical names for one compiler run
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    interfaces: BTreeMap<String, String>,
    enums: BTreeMap<String, String>,
    entries: BTreeMap<String, String>,
}

impl NameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the registration pass over a whole protocol
    ///
    /// Seeds the foreign table first when the protocol extends the base
    /// protocol, then registers every interface, enum and entry.
    pub fn for_protocol(protocol: &Protocol) -> Self {
        let mut registry = Self::new();
        if !protocol.is_base() {
            registry.seed_foreign();
        }

        for iface in &protocol.interfaces {
            registry.register_interface(&iface.name);
        }
        for iface in &protocol.interfaces {
            for enum_def in &iface.enums {
                registry.register_enum(&iface.name, &enum_def.name);
                for entry in &enum_def.entries {
                    registry.register_entry(&iface.name, &enum_def.name, &entry.name);
                }
            }
        }

        tracing::debug!(
            interfaces = registry.interfaces.len(),
            enums = registry.enums.len(),
            "name registry built"
        );
        registry
    }

    /// Register the well-known core interfaces and enums
    pub fn seed_foreign(&mut self) {
        for name in FOREIGN_INTERFACES {
            self.register_interface(name);
        }
        for (iface, enum_name) in FOREIGN_ENUMS {
            self.register_enum(iface, enum_name);
        }
    }

    /// Register an interface and return its canonical name
    ///
    /// Idempotent: registering the same name again returns the same result
    /// without adding an entry.
    pub fn register_interface(&mut self, native: &str) -> String {
        self.interfaces
            .entry(native.to_string())
            .or_insert_with(|| pascal_case(native))
            .clone()
    }

    /// Register an enum of an interface and return its canonical type name
    ///
    /// The type name is the interface's canonical name followed by the enum's,
    /// e.g. `wl_shm` + `format` gives `ShmFormat`.
    pub fn register_enum(&mut self, iface: &str, enum_name: &str) -> String {
        let canonical = format!("{}{}", pascal_case(iface), pascal_case(enum_name));
        self.enums
            .entry(format!("{}.{}", iface, enum_name))
            .or_insert(canonical)
            .clone()
    }

    /// Register an enum entry and return its canonical name
    ///
    /// Entries become constant names, so the canonical form is the native
    /// name in constant casing: `flipped_90` gives `FLIPPED_90`.
    pub fn register_entry(&mut self, iface: &str, enum_name: &str, entry: &str) -> String {
        self.entries
            .entry(format!("{}.{}.{}", iface, enum_name, entry))
            .or_insert_with(|| entry.to_shouty_snake_case())
            .clone()
    }

    /// Look up the canonical name of a registered interface
    pub fn resolve(&self, native: &str) -> Result<&str, ScannerError> {
        self.interfaces
            .get(native)
            .map(String::as_str)
            .ok_or_else(|| ScannerError::UnresolvedName(format!("interface {}", native)))
    }

    /// Resolve an enum reference made from inside `owner`
    ///
    /// A bare reference (`format`) names an enum of the owning interface; a
    /// qualified one (`wl_output.transform`) is resolved globally.
    pub fn resolve_enum(&self, owner: &str, reference: &str) -> Result<&str, ScannerError> {
        let key = match reference.split_once('.') {
            None if !reference.is_empty() => format!("{}.{}", owner, reference),
            Some((iface, enum_name))
                if !iface.is_empty() && !enum_name.is_empty() && !enum_name.contains('.') =>
            {
                reference.to_string()
            }
            _ => return Err(ScannerError::MalformedReference(reference.to_string())),
        };

        self.enums
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| ScannerError::UnresolvedName(format!("enum {}", key)))
    }

    /// Look up the canonical name of a registered enum entry
    pub fn resolve_entry(
        &self,
        iface: &str,
        enum_name: &str,
        entry: &str,
    ) -> Result<&str, ScannerError> {
        let key = format!("{}.{}.{}", iface, enum_name, entry);
        self.entries
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| ScannerError::UnresolvedName(format!("enum entry {}", key)))
    }
}
