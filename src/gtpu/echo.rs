//! GTP-U Echo Request / Echo Response (3GPP TS 29.281 §7.2.1–7.2.2).
//!
//! Both carry a mandatory Recovery (restart counter) value and, on
//! 5G-capable nodes, a Sending/Recovery Node Features bitmap. Both are
//! fixed-format "Type-Value" fields (no explicit length octet: the value is
//! always one byte), unlike the TLVs in [`super::error_indication`].

use crate::error::PfcpError;

use super::header::{GtpuHeader, HEADER_LEN};
use super::{
    MSG_TYPE_ECHO_REQUEST, MSG_TYPE_ECHO_RESPONSE, TLV_TYPE_RECOVERY,
    TLV_TYPE_SENDING_NODE_FEATURES,
};

/// Shared shape of Echo Request and Echo Response: a mandatory recovery
/// counter and an optional feature bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoBody {
    pub recovery: u8,
    pub sending_node_features: Option<u8>,
}

impl EchoBody {
    fn marshal(&self) -> Vec<u8> {
        let mut out = vec![TLV_TYPE_RECOVERY, self.recovery];
        if let Some(features) = self.sending_node_features {
            out.push(TLV_TYPE_SENDING_NODE_FEATURES);
            out.push(features);
        }
        out
    }

    fn parse(data: &[u8]) -> Result<Self, PfcpError> {
        let mut recovery = None;
        let mut sending_node_features = None;
        let mut offset = 0usize;

        while offset < data.len() {
            if offset + 2 > data.len() {
                return Err(PfcpError::invalid_value(
                    "GTP-U Echo",
                    "body",
                    "truncated type-value field",
                ));
            }
            let tlv_type = data[offset];
            let value = data[offset + 1];
            match tlv_type {
                t if t == TLV_TYPE_RECOVERY => recovery = Some(value),
                t if t == TLV_TYPE_SENDING_NODE_FEATURES => sending_node_features = Some(value),
                _ => {
                    return Err(PfcpError::invalid_value(
                        "GTP-U Echo",
                        "tlv_type",
                        "unrecognized type-value field",
                    ))
                }
            }
            offset += 2;
        }

        let recovery = recovery.ok_or_else(|| {
            PfcpError::invalid_value("GTP-U Echo", "recovery", "mandatory Recovery IE missing")
        })?;

        Ok(EchoBody {
            recovery,
            sending_node_features,
        })
    }
}

macro_rules! echo_message {
    ($name:ident, $msg_type:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub body: EchoBody,
        }

        impl $name {
            pub fn new(recovery: u8, sending_node_features: Option<u8>) -> Self {
                $name {
                    body: EchoBody {
                        recovery,
                        sending_node_features,
                    },
                }
            }

            pub fn recovery(&self) -> u8 {
                self.body.recovery
            }

            pub fn sending_node_features(&self) -> Option<u8> {
                self.body.sending_node_features
            }

            pub fn marshal(&self) -> Vec<u8> {
                let payload = self.body.marshal();
                let mut header = GtpuHeader::new($msg_type, 0, false);
                header.length = payload.len() as u16;
                let mut out = header.marshal().to_vec();
                out.extend_from_slice(&payload);
                out
            }

            pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
                let header = GtpuHeader::parse(data)?;
                if header.message_type != $msg_type {
                    return Err(PfcpError::invalid_value(
                        "GTP-U Echo",
                        "message_type",
                        "header message type does not match expected echo message",
                    ));
                }
                let body = EchoBody::parse(&data[HEADER_LEN..])?;
                Ok($name { body })
            }
        }
    };
}

echo_message!(EchoRequest, MSG_TYPE_ECHO_REQUEST);
echo_message!(EchoResponse, MSG_TYPE_ECHO_RESPONSE);
