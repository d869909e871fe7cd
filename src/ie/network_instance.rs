//! Network Instance IE.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Represents a Network Instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInstance {
    pub instance: String,
}

impl NetworkInstance {
    /// Creates a new Network Instance.
    pub fn new(instance: &str) -> Self {
        NetworkInstance {
            instance: instance.to_string(),
        }
    }

    /// Marshals the Network Instance into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        self.instance.as_bytes().to_vec()
    }

    /// Unmarshals a byte slice into a Network Instance.
    ///
    /// Per 3GPP TS 29.244 Release 18 Section 8.2.4, Network Instance supports:
    /// - **Non-empty**: Specifies network routing context (APN/DNN-style encoding)
    /// - **Zero-length**: Clear/reset network instance (used in Update FAR to remove routing)
    ///
    /// # Zero-Length Semantics
    /// In update operations (e.g., Update FAR):
    /// - Omitted IE: Keep current network instance
    /// - Present with value: Change to new network instance
    /// - Present with zero-length: Clear network instance (default routing)
    pub fn unmarshal(payload: &[u8]) -> Result<Self, PfcpError> {
        let instance = String::from_utf8(payload.to_vec()).map_err(|e| {
            PfcpError::encoding_error("Network Instance", IeType::NetworkInstance, e.utf8_error())
        })?;
        Ok(NetworkInstance { instance })
    }

    /// Wraps the Network Instance in a NetworkInstance IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::NetworkInstance, self.marshal())
    }
}
