use std::fmt;

use crate::error::WireError;

/// Every element type tag this crate knows how to delimit.
///
/// ```text
/// ┌──────┬───────────────────┬─────────────────────────────────┐
/// │ Tag  │ Type              │ Value layout                    │
/// ├──────┼───────────────────┼─────────────────────────────────┤
/// │ 0x01 │ Double            │ 8 bytes                         │
/// │ 0x02 │ String            │ int32 L │ L bytes (ends in 0x00) │
/// │ 0x03 │ Document          │ self-delimiting, int32 = total  │
/// │ 0x04 │ Array             │ self-delimiting, int32 = total  │
/// │ 0x05 │ Binary            │ int32 L │ subtype │ L bytes      │
/// │ 0x06 │ Undefined         │ empty                           │
/// │ 0x07 │ ObjectId          │ 12 bytes                        │
/// │ 0x08 │ Boolean           │ 1 byte                          │
/// │ 0x09 │ DateTime          │ 8 bytes                         │
/// │ 0x0A │ Null              │ empty                           │
/// │ 0x0B │ Regex             │ cstring pattern │ cstring opts  │
/// │ 0x0C │ DbPointer         │ string │ 12 bytes               │
/// │ 0x0D │ JavaScript        │ string                          │
/// │ 0x0E │ Symbol            │ string                          │
/// │ 0x0F │ JavaScriptScope   │ self-delimiting, int32 = total  │
/// │ 0x10 │ Int32             │ 4 bytes                         │
/// │ 0x11 │ Timestamp         │ 8 bytes                         │
/// │ 0x12 │ Int64             │ 8 bytes                         │
/// │ 0x13 │ Decimal128        │ 16 bytes                        │
/// │ 0x7F │ MaxKey            │ empty                           │
/// │ 0xFF │ MinKey            │ empty                           │
/// └──────┴───────────────────┴─────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    Double = 0x01,
    String = 0x02,
    Document = 0x03,
    Array = 0x04,
    Binary = 0x05,
    Undefined = 0x06,
    ObjectId = 0x07,
    Boolean = 0x08,
    DateTime = 0x09,
    Null = 0x0A,
    Regex = 0x0B,
    DbPointer = 0x0C,
    JavaScript = 0x0D,
    Symbol = 0x0E,
    JavaScriptScope = 0x0F,
    Int32 = 0x10,
    Timestamp = 0x11,
    Int64 = 0x12,
    Decimal128 = 0x13,
    MaxKey = 0x7F,
    MinKey = 0xFF,
}

impl ElementType {
    /// Map a raw tag byte to its type.
    ///
    /// # Errors
    ///
    /// [`WireError::UnknownType`] for any tag outside the table above.
    pub fn from_tag(tag: u8) -> Result<Self, WireError> {
        let element_type = match tag {
            0x01 => Self::Double,
            0x02 => Self::String,
            0x03 => Self::Document,
            0x04 => Self::Array,
            0x05 => Self::Binary,
            0x06 => Self::Undefined,
            0x07 => Self::ObjectId,
            0x08 => Self::Boolean,
            0x09 => Self::DateTime,
            0x0A => Self::Null,
            0x0B => Self::Regex,
            0x0C => Self::DbPointer,
            0x0D => Self::JavaScript,
            0x0E => Self::Symbol,
            0x0F => Self::JavaScriptScope,
            0x10 => Self::Int32,
            0x11 => Self::Timestamp,
            0x12 => Self::Int64,
            0x13 => Self::Decimal128,
            0x7F => Self::MaxKey,
            0xFF => Self::MinKey,
            other => return Err(WireError::UnknownType { tag: other }),
        };
        Ok(element_type)
    }

    /// The tag byte as it appears on the wire.
    #[must_use]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Whether the value is itself a document (and can be walked into).
    #[must_use]
    pub fn is_document(self) -> bool {
        matches!(self, Self::Document | Self::Array)
    }

    /// Short type name, as used in error messages and dumps.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::String => "string",
            Self::Document => "document",
            Self::Array => "array",
            Self::Binary => "binary",
            Self::Undefined => "undefined",
            Self::ObjectId => "objectId",
            Self::Boolean => "bool",
            Self::DateTime => "date",
            Self::Null => "null",
            Self::Regex => "regex",
            Self::DbPointer => "dbPointer",
            Self::JavaScript => "javascript",
            Self::Symbol => "symbol",
            Self::JavaScriptScope => "javascriptWithScope",
            Self::Int32 => "int",
            Self::Timestamp => "timestamp",
            Self::Int64 => "long",
            Self::Decimal128 => "decimal",
            Self::MaxKey => "maxKey",
            Self::MinKey => "minKey",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for ElementType {
    type Error = WireError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}
