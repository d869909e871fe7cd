//! GTP-U v1 Error Indication (3GPP TS 29.281 §7.3.1).
//!
//! Signals an unknown TEID at the peer. Two wire shapes, selected by
//! whether a QFI is present: a plain 8-octet header when `qfi == 0`, or a
//! 12-octet header (base header plus a PDU-Session-Container extension
//! header) when the indication is tagged with a 5G QoS flow.

use std::net::IpAddr;

use crate::error::PfcpError;
use crate::ie::IeType;

use super::header::{GtpuHeader, PduSessionContainer, HEADER_LEN, PDU_SESSION_CONTAINER_LEN};
use super::{
    MSG_TYPE_ERROR_INDICATION, PDU_TYPE_DL_PDU_SESSION_INFORMATION, TLV_TYPE_GTPU_PEER_ADDRESS,
    TLV_TYPE_TEID_DATA_I,
};

/// Builds an Error Indication packet for the given TEID and peer address.
///
/// `qfi == 0` omits the PDU-Session-Container extension header entirely, as
/// the original pre-5G message shape never included one.
pub fn build(teid: u32, addr: IpAddr, qfi: u8) -> Vec<u8> {
    let addr_bytes: Vec<u8> = match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    };

    let mut body = Vec::new();
    body.push(TLV_TYPE_TEID_DATA_I);
    body.extend_from_slice(&teid.to_be_bytes());
    body.push(TLV_TYPE_GTPU_PEER_ADDRESS);
    body.extend_from_slice(&(addr_bytes.len() as u16).to_be_bytes());
    body.extend_from_slice(&addr_bytes);

    let has_extension = qfi != 0;
    let mut header = GtpuHeader::new(MSG_TYPE_ERROR_INDICATION, 0, has_extension);
    let ext_len = if has_extension {
        PDU_SESSION_CONTAINER_LEN
    } else {
        0
    };
    header.length = (ext_len + body.len()) as u16;

    let mut out = header.marshal().to_vec();
    if has_extension {
        let ext = PduSessionContainer {
            pdu_type: PDU_TYPE_DL_PDU_SESSION_INFORMATION,
            qfi,
        };
        out.extend_from_slice(&ext.marshal());
    }
    out.extend_from_slice(&body);
    out
}

/// Recovers `(teid, peer_addr)` from a received Error Indication packet,
/// for use by the FAR-by-(TEID, peer-addr) lookup in the session core.
pub fn parse(data: &[u8]) -> Result<(u32, IpAddr), PfcpError> {
    parse_inner(data).inspect_err(|e| log::warn!("failed to decode GTP-U Error Indication: {}", e))
}

fn parse_inner(data: &[u8]) -> Result<(u32, IpAddr), PfcpError> {
    let header = GtpuHeader::parse(data)?;
    if header.message_type != MSG_TYPE_ERROR_INDICATION {
        return Err(PfcpError::invalid_value(
            "GTP-U Error Indication",
            "message_type",
            "header message type is not Error Indication",
        ));
    }

    let mut offset = HEADER_LEN;
    if header.has_extension() {
        let ext = PduSessionContainer::parse(&data[offset..])?;
        let _ = ext.qfi; // the session core resolves the FAR without needing the QFI here.
        offset += PDU_SESSION_CONTAINER_LEN;
    }

    let body = &data[offset..];
    let mut teid = None;
    let mut peer_addr = None;
    let mut i = 0usize;

    while i < body.len() {
        let tlv_type = body[i];
        match tlv_type {
            t if t == TLV_TYPE_TEID_DATA_I => {
                if i + 5 > body.len() {
                    return Err(PfcpError::invalid_length(
                        "GTP-U Error Indication",
                        IeType::Unknown,
                        5,
                        body.len() - i,
                    ));
                }
                teid = Some(u32::from_be_bytes([
                    body[i + 1],
                    body[i + 2],
                    body[i + 3],
                    body[i + 4],
                ]));
                i += 5;
            }
            t if t == TLV_TYPE_GTPU_PEER_ADDRESS => {
                if i + 3 > body.len() {
                    return Err(PfcpError::invalid_length(
                        "GTP-U Error Indication",
                        IeType::Unknown,
                        3,
                        body.len() - i,
                    ));
                }
                let len = u16::from_be_bytes([body[i + 1], body[i + 2]]) as usize;
                let start = i + 3;
                if start + len > body.len() {
                    return Err(PfcpError::invalid_length(
                        "GTP-U Error Indication",
                        IeType::Unknown,
                        len,
                        body.len() - start,
                    ));
                }
                let octets = &body[start..start + len];
                peer_addr = Some(match len {
                    4 => IpAddr::from(<[u8; 4]>::try_from(octets).unwrap()),
                    16 => IpAddr::from(<[u8; 16]>::try_from(octets).unwrap()),
                    _ => {
                        return Err(PfcpError::invalid_value(
                            "GTP-U Error Indication",
                            "addr",
                            "address length must be 4 (IPv4) or 16 (IPv6)",
                        ))
                    }
                });
                i = start + len;
            }
            _ => {
                return Err(PfcpError::invalid_value(
                    "GTP-U Error Indication",
                    "tlv_type",
                    "unrecognized TLV in Error Indication body",
                ))
            }
        }
    }

    let teid = teid.ok_or_else(|| {
        PfcpError::invalid_value(
            "GTP-U Error Indication",
            "teid",
            "missing Tunnel Endpoint Identifier Data I TLV",
        )
    })?;
    let peer_addr = peer_addr.ok_or_else(|| {
        PfcpError::invalid_value(
            "GTP-U Error Indication",
            "addr",
            "missing GTP-U Peer Address TLV",
        )
    })?;

    Ok((teid, peer_addr))
}
