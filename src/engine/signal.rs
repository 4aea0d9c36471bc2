//! Signals as the host declares them

use crate::kind::NumericKind;
use crate::traits::ConfigError;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Shape and type of one host signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalDescriptor {
    pub name: String,
    /// Type name from the host type registry, e.g. `float32`
    pub type_name: String,
    /// Number of elements, 1 for a scalar
    pub elements: u32,
    /// Number of dimensions, 0 for a scalar
    pub dimensions: u8,
}

impl SignalDescriptor {
    /// Descriptor for a scalar signal
    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            elements: 1,
            dimensions: 0,
        }
    }

    /// Descriptor for an array signal
    pub fn array(name: impl Into<String>, type_name: impl Into<String>, elements: u32) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            elements,
            dimensions: 1,
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.elements == 1 && self.dimensions == 0
    }

    /// Resolve to a numeric kind, requiring a scalar shape
    pub fn scalar_kind(&self) -> Result<NumericKind, ConfigError> {
        let kind = self
            .type_name
            .parse::<NumericKind>()
            .map_err(|_| ConfigError::UnsupportedType {
                signal: self.name.clone(),
                type_name: self.type_name.clone(),
            })?;

        if !self.is_scalar() {
            return Err(ConfigError::NotScalar {
                signal: self.name.clone(),
                elements: self.elements,
                dimensions: self.dimensions,
            });
        }

        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind() {
        let signal = SignalDescriptor::scalar("In", "uint32");
        assert!(signal.is_scalar());
        assert_eq!(signal.scalar_kind(), Ok(NumericKind::UInt32));
    }

    #[test]
    fn test_unsupported_type() {
        let signal = SignalDescriptor::scalar("In", "bool");
        assert_eq!(
            signal.scalar_kind(),
            Err(ConfigError::UnsupportedType {
                signal: "In".into(),
                type_name: "bool".into()
            })
        );
    }

    #[test]
    fn test_array_rejected() {
        let signal = SignalDescriptor::array("In", "float64", 4);
        assert_eq!(
            signal.scalar_kind(),
            Err(ConfigError::NotScalar {
                signal: "In".into(),
                elements: 4,
                dimensions: 1
            })
        );
    }
}
