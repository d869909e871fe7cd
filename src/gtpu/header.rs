//! The 8-octet GTP-U v1 mandatory header, and the 4-octet PDU-Session-
//! Container extension header used when a message is QFI-tagged.

use crate::error::PfcpError;
use crate::ie::IeType;

use super::{
    EXT_HEADER_TYPE_PDU_SESSION_CONTAINER, FLAGS_BASE, FLAGS_WITH_EXTENSION,
    NO_MORE_EXTENSION_HEADERS,
};

pub const HEADER_LEN: usize = 8;

/// The mandatory GTP-U v1 header: flags, message type, payload length, and
/// TEID. `length` counts the bytes *after* this 8-octet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GtpuHeader {
    pub flags: u8,
    pub message_type: u8,
    pub length: u16,
    pub teid: u32,
}

impl GtpuHeader {
    pub fn new(message_type: u8, teid: u32, has_extension: bool) -> Self {
        GtpuHeader {
            flags: if has_extension {
                FLAGS_WITH_EXTENSION
            } else {
                FLAGS_BASE
            },
            message_type,
            length: 0,
            teid,
        }
    }

    pub fn has_extension(&self) -> bool {
        self.flags & 0x04 != 0
    }

    pub fn marshal(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0] = self.flags;
        out[1] = self.message_type;
        out[2..4].copy_from_slice(&self.length.to_be_bytes());
        out[4..8].copy_from_slice(&self.teid.to_be_bytes());
        out
    }

    pub fn parse(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < HEADER_LEN {
            return Err(PfcpError::invalid_length(
                "GTP-U Header",
                IeType::Unknown,
                HEADER_LEN,
                data.len(),
            ));
        }
        Ok(GtpuHeader {
            flags: data[0],
            message_type: data[1],
            length: u16::from_be_bytes([data[2], data[3]]),
            teid: u32::from_be_bytes([data[4], data[5], data[6], data[7]]),
        })
    }
}

/// PDU-Session-Container extension header (3GPP TS 38.415), present only
/// when the base header's E flag is set. Always 4 octets: `len`,
/// `pdu_type`, `qfi`, and the next-extension-header-type sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PduSessionContainer {
    pub pdu_type: u8,
    pub qfi: u8,
}

pub const PDU_SESSION_CONTAINER_LEN: usize = 4;

impl PduSessionContainer {
    pub fn marshal(&self) -> [u8; PDU_SESSION_CONTAINER_LEN] {
        [
            1,
            self.pdu_type,
            self.qfi,
            NO_MORE_EXTENSION_HEADERS,
        ]
    }

    pub fn parse(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < PDU_SESSION_CONTAINER_LEN {
            return Err(PfcpError::invalid_length(
                "PDU Session Container",
                IeType::Unknown,
                PDU_SESSION_CONTAINER_LEN,
                data.len(),
            ));
        }
        if data[0] != 1 {
            return Err(PfcpError::invalid_value(
                "PDU Session Container",
                "len",
                "extension header length field must be 1 (4-byte unit)",
            ));
        }
        if data[3] != NO_MORE_EXTENSION_HEADERS {
            return Err(PfcpError::invalid_value(
                "PDU Session Container",
                "next_extension_header_type",
                "only a single PDU-session-container extension header is supported",
            ));
        }
        Ok(PduSessionContainer {
            pdu_type: data[1],
            qfi: data[2],
        })
    }
}

impl GtpuHeader {
    pub fn ext_header_type(&self) -> u8 {
        EXT_HEADER_TYPE_PDU_SESSION_CONTAINER
    }
}
