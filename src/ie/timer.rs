// src/ie/timer.rs

//! Timer Information Element.

use crate::error::PfcpError;
use crate::ie::IeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub value: u32,
}

impl Timer {
    pub fn new(value: u32) -> Self {
        Timer { value }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// Unmarshals a byte slice into a Timer.
    ///
    /// Per 3GPP TS 29.244, Timer requires exactly 4 bytes (u32).
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Timer",
                IeType::Timer,
                4,
                data.len(),
            ));
        }
        Ok(Timer {
            value: u32::from_be_bytes(data[0..4].try_into().unwrap()),
        })
    }
}
