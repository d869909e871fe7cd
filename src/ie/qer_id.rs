// src/ie/qer_id.rs

//! QER ID Information Element.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QerId {
    pub value: u32,
}

impl QerId {
    pub fn new(value: u32) -> Self {
        QerId { value }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// Unmarshals a byte slice into a QER ID.
    ///
    /// Per 3GPP TS 29.244, QER ID requires exactly 4 bytes (Rule ID).
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "QER ID",
                IeType::QerId,
                4,
                data.len(),
            ));
        }
        Ok(QerId {
            value: u32::from_be_bytes(data[0..4].try_into().unwrap()),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::QerId, self.marshal().to_vec())
    }
}
