//! Numeric kinds a statistics window can be instantiated for
//!
//! The set is closed: every kind listed here has a matching
//! [`Sample`](crate::statistics::Sample) implementation.

use core::fmt;
use core::str::FromStr;

/// One of the ten scalar numeric kinds supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumericKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl NumericKind {
    /// All supported kinds, integers first
    pub const ALL: [NumericKind; 10] = [
        NumericKind::Int8,
        NumericKind::Int16,
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::UInt8,
        NumericKind::UInt16,
        NumericKind::UInt32,
        NumericKind::UInt64,
        NumericKind::Float32,
        NumericKind::Float64,
    ];

    /// Width of one value in bytes
    pub const fn byte_width(self) -> usize {
        match self {
            NumericKind::Int8 | NumericKind::UInt8 => 1,
            NumericKind::Int16 | NumericKind::UInt16 => 2,
            NumericKind::Int32 | NumericKind::UInt32 | NumericKind::Float32 => 4,
            NumericKind::Int64 | NumericKind::UInt64 | NumericKind::Float64 => 8,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, NumericKind::Float32 | NumericKind::Float64)
    }

    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            NumericKind::UInt8 | NumericKind::UInt16 | NumericKind::UInt32 | NumericKind::UInt64
        )
    }

    /// Canonical type name as a host type registry spells it
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::Int8 => "int8",
            NumericKind::Int16 => "int16",
            NumericKind::Int32 => "int32",
            NumericKind::Int64 => "int64",
            NumericKind::UInt8 => "uint8",
            NumericKind::UInt16 => "uint16",
            NumericKind::UInt32 => "uint32",
            NumericKind::UInt64 => "uint64",
            NumericKind::Float32 => "float32",
            NumericKind::Float64 => "float64",
        }
    }

    /// Name of the matching Rust primitive
    pub const fn rust_name(self) -> &'static str {
        match self {
            NumericKind::Int8 => "i8",
            NumericKind::Int16 => "i16",
            NumericKind::Int32 => "i32",
            NumericKind::Int64 => "i64",
            NumericKind::UInt8 => "u8",
            NumericKind::UInt16 => "u16",
            NumericKind::UInt32 => "u32",
            NumericKind::UInt64 => "u64",
            NumericKind::Float32 => "f32",
            NumericKind::Float64 => "f64",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a type name does not denote a supported numeric kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownKind;

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown numeric kind")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownKind {}

impl FromStr for NumericKind {
    type Err = UnknownKind;

    /// Accepts the canonical names (`uint32`) and the Rust spellings (`u32`),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NumericKind::ALL
            .into_iter()
            .find(|kind| {
                s.eq_ignore_ascii_case(kind.name()) || s.eq_ignore_ascii_case(kind.rust_name())
            })
            .ok_or(UnknownKind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in NumericKind::ALL {
            assert_eq!(kind.name().parse::<NumericKind>(), Ok(kind));
        }
        assert_eq!("U16".parse::<NumericKind>(), Ok(NumericKind::UInt16));
        assert_eq!(" f32 ".parse::<NumericKind>(), Ok(NumericKind::Float32));
        assert_eq!("bool".parse::<NumericKind>(), Err(UnknownKind));
        assert_eq!("float128".parse::<NumericKind>(), Err(UnknownKind));
    }

    #[test]
    fn test_widths() {
        assert_eq!(NumericKind::Int8.byte_width(), 1);
        assert_eq!(NumericKind::UInt16.byte_width(), 2);
        assert_eq!(NumericKind::Float32.byte_width(), 4);
        assert_eq!(NumericKind::Int64.byte_width(), 8);
    }

    #[test]
    fn test_classification() {
        assert!(NumericKind::Float64.is_float());
        assert!(NumericKind::Float64.is_signed());
        assert!(!NumericKind::UInt32.is_signed());
        assert!(NumericKind::Int32.is_signed());
        assert!(!NumericKind::Int32.is_float());
    }
}
