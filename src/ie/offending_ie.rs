// src/ie/offending_ie.rs

//! Offending IE Information Element.

use crate::error::PfcpError;
use crate::ie::IeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffendingIe {
    pub ie_type: u16,
}

impl OffendingIe {
    pub fn new(ie_type: u16) -> Self {
        OffendingIe { ie_type }
    }

    pub fn marshal(&self) -> [u8; 2] {
        self.ie_type.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 2 {
            return Err(PfcpError::invalid_length(
                "Offending IE",
                IeType::OffendingIe,
                2,
                data.len(),
            ));
        }
        Ok(OffendingIe {
            ie_type: u16::from_be_bytes(data[0..2].try_into().unwrap()),
        })
    }
}
