//! Protocol XML decoding
//!
//! Decodes a schema document into the [`Protocol`] IR. This is a structural
//! decode only: references to other interfaces or enums are kept as strings
//! and resolved later by the name registry.

use crate::error::ScannerError;
use crate::ir::{Arg, ArgType, Description, Entry, Enum, Event, Interface, Protocol, Request};
use roxmltree::Node;
use std::collections::HashSet;

/// Decode raw schema bytes
pub fn parse_protocol(bytes: &[u8]) -> Result<Protocol, ScannerError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ScannerError::Schema(format!("document is not UTF-8: {}", e)))?;
    parse_protocol_str(text)
}

/// Decode a schema document held in a string
pub fn parse_protocol_str(text: &str) -> Result<Protocol, ScannerError> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();

    if root.tag_name().name() != "protocol" {
        return Err(ScannerError::Schema(format!(
            "expected <protocol> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut protocol = Protocol {
        name: required_attr(root, "name")?.to_string(),
        copyright: child(root, "copyright").and_then(|n| n.text()).map(|t| t.trim().to_string()),
        interfaces: Vec::new(),
    };

    let mut seen = HashSet::new();
    for node in children(root, "interface") {
        let interface = parse_interface(node)?;
        if !seen.insert(interface.name.clone()) {
            return Err(ScannerError::Schema(format!(
                "interface {} declared twice",
                interface.name
            )));
        }
        protocol.interfaces.push(interface);
    }

    Ok(protocol)
}

fn parse_interface(node: Node) -> Result<Interface, ScannerError> {
    let name = required_attr(node, "name")?;
    let version = required_attr(node, "version")?;
    let version = match version.trim().parse::<u32>() {
        Ok(v) if v > 0 => v,
        _ => {
            return Err(ScannerError::Schema(format!(
                "interface {} has invalid version {:?}",
                name, version
            )));
        }
    };

    // Requests and events may be interleaved in the document; the opcode is
    // the position among siblings of the same kind.
    let requests = children(node, "request")
        .map(parse_request)
        .collect::<Result<Vec<_>, _>>()?;
    let events = children(node, "event")
        .map(parse_event)
        .collect::<Result<Vec<_>, _>>()?;
    let enums = children(node, "enum")
        .map(parse_enum)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Interface {
        name: name.to_string(),
        version,
        description: parse_description(node),
        requests,
        events,
        enums,
    })
}

fn parse_request(node: Node) -> Result<Request, ScannerError> {
    let name = required_attr(node, "name")?;
    let destructor = match node.attribute("type") {
        None => false,
        Some("destructor") => true,
        Some(other) => {
            return Err(ScannerError::Schema(format!(
                "request {} has unknown type {:?}",
                name, other
            )));
        }
    };

    Ok(Request {
        name: name.to_string(),
        destructor,
        since: parse_since(node)?,
        description: parse_description(node),
        args: parse_args(node)?,
    })
}

fn parse_event(node: Node) -> Result<Event, ScannerError> {
    Ok(Event {
        name: required_attr(node, "name")?.to_string(),
        since: parse_since(node)?,
        description: parse_description(node),
        args: parse_args(node)?,
    })
}

fn parse_args(node: Node) -> Result<Vec<Arg>, ScannerError> {
    children(node, "arg")
        .map(|arg| -> Result<Arg, ScannerError> {
            let name = required_attr(arg, "name")?;
            let wire = required_attr(arg, "type")?;
            let arg_type = ArgType::from_wire(wire).ok_or_else(|| {
                ScannerError::Schema(format!("arg {} has unknown type {:?}", name, wire))
            })?;

            Ok(Arg {
                name: name.to_string(),
                arg_type,
                interface: non_empty_attr(arg, "interface"),
                enum_ref: non_empty_attr(arg, "enum"),
                allow_null: parse_bool(arg, "allow-null")?,
                summary: non_empty_attr(arg, "summary"),
            })
        })
        .collect()
}

fn parse_enum(node: Node) -> Result<Enum, ScannerError> {
    let name = required_attr(node, "name")?;

    let mut entries = Vec::new();
    for entry in children(node, "entry") {
        let entry_name = required_attr(entry, "name")?;
        let literal = required_attr(entry, "value")?;
        let value = parse_value(literal).ok_or_else(|| {
            ScannerError::Schema(format!(
                "entry {}.{} has invalid value {:?}",
                name, entry_name, literal
            ))
        })?;

        entries.push(Entry {
            name: entry_name.to_string(),
            value,
            summary: non_empty_attr(entry, "summary"),
            since: parse_since(entry)?,
        });
    }

    Ok(Enum {
        name: name.to_string(),
        bitfield: parse_bool(node, "bitfield")?,
        description: parse_description(node),
        entries,
    })
}

/// Parse an entry value written as decimal, `0x` hex, `0o` octal or `0b` binary
pub fn parse_value(literal: &str) -> Option<u32> {
    let s = literal.trim();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(oct) = s.strip_prefix("0o") {
        (oct, 8)
    } else if let Some(bin) = s.strip_prefix("0b") {
        (bin, 2)
    } else {
        (s, 10)
    };
    u32::from_str_radix(digits, radix).ok()
}

fn parse_description(node: Node) -> Description {
    match child(node, "description") {
        Some(desc) => Description {
            summary: desc.attribute("summary").unwrap_or_default().to_string(),
            text: desc.text().unwrap_or_default().to_string(),
        },
        None => Description::default(),
    }
}

fn parse_since(node: Node) -> Result<Option<u32>, ScannerError> {
    match node.attribute("since") {
        None => Ok(None),
        Some(s) => s.trim().parse().map(Some).map_err(|_| {
            ScannerError::Schema(format!("invalid since attribute {:?}", s))
        }),
    }
}

fn parse_bool(node: Node, attr: &str) -> Result<bool, ScannerError> {
    match node.attribute(attr) {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(ScannerError::Schema(format!(
            "attribute {} must be true or false, found {:?}",
            attr, other
        ))),
    }
}

fn required_attr<'a>(node: Node<'a, '_>, attr: &str) -> Result<&'a str, ScannerError> {
    node.attribute(attr).ok_or_else(|| {
        ScannerError::Schema(format!(
            "<{}> is missing required attribute {:?}",
            node.tag_name().name(),
            attr
        ))
    })
}

fn non_empty_attr(node: Node, attr: &str) -> Option<String> {
    node.attribute(attr)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &'static str) -> Option<Node<'a, 'input>> {
    children(node, tag).next()
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == tag)
}
