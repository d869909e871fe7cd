//! Protocol Configuration Options (PCO).
//!
//! 3GPP TS 24.008 §10.5.6.3. A PCO payload is an extension/configuration-
//! protocol byte followed by a sequence of `(id, length, contents)` tuples.

use crate::error::PfcpError;
use crate::ie::IeType;

/// Upper bound on the number of protocol-or-container-id tuples a single
/// PCO payload may carry. Protects the decoder from an attacker-controlled
/// loop bound; 3GPP does not mandate a specific value.
pub const MAX_PROTOCOL_OR_CONTAINER_ID: usize = 16;

/// One `(id, contents)` tuple inside a PCO payload.
///
/// `contents` borrows from the buffer [`Pco::parse`] was called with rather
/// than copying it, mirroring the zero-copy aliasing the GTP reference
/// implementation relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolOrContainerId<'a> {
    pub id: u16,
    pub contents: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pco<'a> {
    pub ext: bool,
    pub configuration_protocol: u8,
    pub ids: Vec<ProtocolOrContainerId<'a>>,
}

impl<'a> Pco<'a> {
    pub fn new(configuration_protocol: u8) -> Self {
        Pco {
            ext: true,
            configuration_protocol,
            ids: Vec::new(),
        }
    }

    /// Parses a PCO payload. `payload` must outlive the returned `Pco`,
    /// since every tuple's `contents` aliases into it.
    pub fn parse(payload: &'a [u8]) -> Result<Self, PfcpError> {
        Self::parse_inner(payload).inspect_err(|e| log::warn!("failed to decode PCO: {}", e))
    }

    fn parse_inner(payload: &'a [u8]) -> Result<Self, PfcpError> {
        if payload.is_empty() {
            return Err(PfcpError::invalid_length(
                "PCO",
                IeType::Unknown,
                1,
                payload.len(),
            ));
        }

        let first = payload[0];
        let ext = first & 0x80 != 0;
        let configuration_protocol = (first >> 4) & 0x07;

        let mut ids = Vec::new();
        let mut size = 1usize;
        while size < payload.len() && ids.len() < MAX_PROTOCOL_OR_CONTAINER_ID {
            if size + 2 > payload.len() {
                return Err(PfcpError::invalid_value(
                    "PCO",
                    "id",
                    "truncated protocol-or-container id",
                ));
            }
            let id = u16::from_be_bytes([payload[size], payload[size + 1]]);
            size += 2;

            if size + 1 > payload.len() {
                return Err(PfcpError::invalid_value(
                    "PCO",
                    "length",
                    "truncated protocol-or-container length",
                ));
            }
            let length = payload[size] as usize;
            size += 1;

            if size + length > payload.len() {
                return Err(PfcpError::invalid_value(
                    "PCO",
                    "contents",
                    "protocol-or-container length exceeds remaining payload",
                ));
            }
            let contents = &payload[size..size + length];
            size += length;

            ids.push(ProtocolOrContainerId { id, contents });
        }

        if size != payload.len() {
            return Err(PfcpError::invalid_value(
                "PCO",
                "payload",
                "trailing bytes after last protocol-or-container id",
            ));
        }

        Ok(Pco {
            ext,
            configuration_protocol,
            ids,
        })
    }

    /// Builds the wire payload for this PCO.
    pub fn build(&self) -> Result<Vec<u8>, PfcpError> {
        if self.ids.len() > MAX_PROTOCOL_OR_CONTAINER_ID {
            return Err(PfcpError::invalid_value(
                "PCO",
                "ids",
                "too many protocol-or-container ids",
            ));
        }

        let mut out = Vec::new();
        let first = (if self.ext { 0x80 } else { 0x00 }) | ((self.configuration_protocol & 0x07) << 4);
        out.push(first);

        for entry in &self.ids {
            if entry.contents.len() > u8::MAX as usize {
                return Err(PfcpError::invalid_value(
                    "PCO",
                    "contents",
                    "single protocol-or-container entry exceeds 255 bytes",
                ));
            }
            out.extend_from_slice(&entry.id.to_be_bytes());
            out.push(entry.contents.len() as u8);
            out.extend_from_slice(entry.contents);
        }

        Ok(out)
    }
}
