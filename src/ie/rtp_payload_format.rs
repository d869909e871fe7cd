//! RTP Payload Format Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.237, indicates the video codec format
//! used for RTP payload.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// RTP payload format values per 3GPP TS 29.244 Section 8.2.237.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtpPayloadFormat {
    /// H.264 (AVC) video codec
    H264,
    /// H.265 (HEVC) video codec
    H265,
    /// Unknown/reserved value
    Unknown(u8),
}

impl RtpPayloadFormat {
    fn to_byte(self) -> u8 {
        match self {
            RtpPayloadFormat::H264 => 1,
            RtpPayloadFormat::H265 => 2,
            RtpPayloadFormat::Unknown(v) => v,
        }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [self.to_byte()]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "RTP Payload Format",
                IeType::RtpPayloadFormat,
                1,
                0,
            ));
        }
        Ok(match data[0] {
            1 => RtpPayloadFormat::H264,
            2 => RtpPayloadFormat::H265,
            v => RtpPayloadFormat::Unknown(v),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::RtpPayloadFormat, self.marshal().to_vec())
    }
}
