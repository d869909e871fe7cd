//! Maximum Packet Delay Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.165, contains the maximum packet delay
//! in microseconds for QoS monitoring.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaximumPacketDelay {
    pub delay_us: u32,
}

impl MaximumPacketDelay {
    pub fn new(delay_us: u32) -> Self {
        Self { delay_us }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.delay_us.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Maximum Packet Delay",
                IeType::MaximumPacketDelay,
                4,
                data.len(),
            ));
        }
        Ok(Self {
            delay_us: u32::from_be_bytes(data[0..4].try_into().unwrap()),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::MaximumPacketDelay, self.marshal().to_vec())
    }
}
