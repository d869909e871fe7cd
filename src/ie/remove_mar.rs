//! Remove MAR Information Element.
//!
//! Per 3GPP TS 29.244 Section 7.5.4.15, the Remove MAR grouped IE contains
//! a MAR ID identifying the Multi-Access Rule to remove.

use crate::error::PfcpError;
use crate::ie::mar_id::MarId;
use crate::ie::{Ie, IeType};

/// Remove MAR per 3GPP TS 29.244 §7.5.4.15.
///
/// Grouped IE carrying a single MAR ID (raw bytes pattern — the payload is
/// the raw marshaled MarId value without an additional TLV wrapper).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveMar {
    pub mar_id: MarId,
}

impl RemoveMar {
    pub fn new(mar_id: MarId) -> Self {
        RemoveMar { mar_id }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.mar_id.marshal().to_vec()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        Ok(RemoveMar {
            mar_id: MarId::unmarshal(data)?,
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::RemoveMar, self.marshal())
    }
}
