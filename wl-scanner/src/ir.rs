//! Intermediate Representation (IR) of a protocol description
//!
//! The IR is a structural decode of the schema document. It keeps declaration
//! order everywhere: the index of a request or event inside its interface is
//! the opcode used on the wire.

/// Root of a protocol description
#[derive(Debug, Clone, Default)]
pub struct Protocol {
    /// Protocol name (`wayland` for the core protocol)
    pub name: String,

    /// Copyright notice, if present
    pub copyright: Option<String>,

    /// Interfaces in declaration order
    pub interfaces: Vec<Interface>,
}

impl Protocol {
    /// Whether this is the base protocol every extension builds on
    pub fn is_base(&self) -> bool {
        self.name == "wayland"
    }
}

/// Summary line plus free-form text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    /// Short summary attribute
    pub summary: String,

    /// Body text, untrimmed
    pub text: String,
}

/// A versioned object type
#[derive(Debug, Clone)]
pub struct Interface {
    /// Native name, e.g. `wl_surface`
    pub name: String,

    /// Interface version (always positive)
    pub version: u32,

    /// Description
    pub description: Description,

    /// Requests; the index is the request opcode
    pub requests: Vec<Request>,

    /// Events; the index is the event opcode
    pub events: Vec<Event>,

    /// Enums
    pub enums: Vec<Enum>,
}

/// A client to server call
#[derive(Debug, Clone)]
pub struct Request {
    /// Native name
    pub name: String,

    /// Object becomes invalid after this request
    pub destructor: bool,

    /// Interface version that introduced the request
    pub since: Option<u32>,

    /// Description
    pub description: Description,

    /// Arguments in wire order
    pub args: Vec<Arg>,
}

/// A server to client notification
#[derive(Debug, Clone)]
pub struct Event {
    /// Native name
    pub name: String,

    /// Interface version that introduced the event
    pub since: Option<u32>,

    /// Description
    pub description: Description,

    /// Arguments in wire order
    pub args: Vec<Arg>,
}

/// Primitive wire type of an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// `int`
    Int,
    /// `uint`
    Uint,
    /// `string`
    String,
    /// `fd`
    Fd,
    /// `fixed`
    Fixed,
    /// `array`
    Array,
    /// `object`
    Object,
    /// `new_id`
    NewId,
}

impl ArgType {
    /// Parse the `type` attribute of an `<arg>`
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "int" => Some(ArgType::Int),
            "uint" => Some(ArgType::Uint),
            "string" => Some(ArgType::String),
            "fd" => Some(ArgType::Fd),
            "fixed" => Some(ArgType::Fixed),
            "array" => Some(ArgType::Array),
            "object" => Some(ArgType::Object),
            "new_id" => Some(ArgType::NewId),
            _ => None,
        }
    }
}

/// An argument of a request or event
#[derive(Debug, Clone)]
pub struct Arg {
    /// Native name
    pub name: String,

    /// Wire type
    pub arg_type: ArgType,

    /// Referenced interface for `object` and `new_id` args
    pub interface: Option<String>,

    /// Enum reference, either `enum` or `interface.enum`
    pub enum_ref: Option<String>,

    /// `allow-null` attribute
    pub allow_null: bool,

    /// Summary attribute
    pub summary: Option<String>,
}

/// A named group of constants
#[derive(Debug, Clone)]
pub struct Enum {
    /// Native name
    pub name: String,

    /// Entries are bit flags
    pub bitfield: bool,

    /// Description
    pub description: Description,

    /// Entries in declaration order
    pub entries: Vec<Entry>,
}

/// One constant of an enum
#[derive(Debug, Clone)]
pub struct Entry {
    /// Native name
    pub name: String,

    /// Parsed value
    pub value: u32,

    /// Summary attribute
    pub summary: Option<String>,

    /// Interface version that introduced the entry
    pub since: Option<u32>,
}
