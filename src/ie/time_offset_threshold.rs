//! Time Offset Threshold Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.147, carries a signed 64-bit nanosecond
//! threshold for TSN clock drift reporting.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Time Offset Threshold IE.
///
/// Signed 64-bit value in nanoseconds used as a threshold for TSN
/// (Time-Sensitive Networking) time offset reporting per IEEE 802.1AS.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.147
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOffsetThreshold {
    /// Threshold in nanoseconds (signed)
    pub nanoseconds: i64,
}

impl TimeOffsetThreshold {
    pub fn new(nanoseconds: i64) -> Self {
        Self { nanoseconds }
    }

    pub fn marshal(&self) -> [u8; 8] {
        self.nanoseconds.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 8 {
            return Err(PfcpError::invalid_length(
                "Time Offset Threshold",
                IeType::TimeOffsetThreshold,
                8,
                data.len(),
            ));
        }
        Ok(Self {
            nanoseconds: i64::from_be_bytes([
                data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
            ]),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::TimeOffsetThreshold, self.marshal().to_vec())
    }
}
