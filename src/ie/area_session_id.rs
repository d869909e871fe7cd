//! Area Session ID Information Element.
//!
//! Per 3GPP TS 29.244, contains the area session ID for MBS
//! (Multicast Broadcast Service) sessions.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaSessionId {
    pub value: u16,
}

impl AreaSessionId {
    pub fn new(value: u16) -> Self {
        Self { value }
    }

    pub fn marshal(&self) -> [u8; 2] {
        self.value.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 2 {
            return Err(PfcpError::invalid_length(
                "Area Session ID",
                IeType::AreaSessionId,
                2,
                data.len(),
            ));
        }
        Ok(Self {
            value: u16::from_be_bytes(data[0..2].try_into().unwrap()),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::AreaSessionId, self.marshal().to_vec())
    }
}
