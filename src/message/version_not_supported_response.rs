// src/message/version_not_supported_response.rs

//! Version Not Supported Response message implementation.

use crate::ie::{Ie, IeType};
use crate::message::{header::Header, Message, MsgType};
use std::io;

/// Represents a Version Not Supported Response message.
/// This message is sent when a PFCP peer receives a message with an unsupported version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionNotSupportedResponse {
    pub header: Header,
    // ✅ 100% compliant with 3GPP TS 29.244 v18.10.0 Section 7.4.4.7
    // Per spec: "This message shall only contain the PFCP header"
    // The PFCP version in header indicates highest version the sender supports
    pub ies: Vec<Ie>, // No IEs defined by spec - header only message
}

impl VersionNotSupportedResponse {
    /// Creates a new Version Not Supported Response message.
    pub fn new(seq: u32) -> Self {
        let mut header = Header::new(MsgType::VersionNotSupportedResponse, false, 0, seq);
        header.length = 4; // Minimum header length

        VersionNotSupportedResponse {
            header,
            ies: Vec::new(),
        }
    }

    /// Creates a new Version Not Supported Response with additional IEs.
    pub fn new_with_ies(seq: u32, ies: Vec<Ie>) -> Self {
        let mut payload_len = 0;
        for ie in &ies {
            payload_len += ie.len();
        }

        let mut header = Header::new(MsgType::VersionNotSupportedResponse, false, 0, seq);
        header.length = 4 + payload_len;

        VersionNotSupportedResponse { header, ies }
    }
}

impl Message for VersionNotSupportedResponse {
    fn msg_type(&self) -> MsgType {
        MsgType::VersionNotSupportedResponse
    }

    fn marshal(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.marshaled_size());
        self.marshal_into(&mut buf);
        buf
    }

    fn marshal_into(&self, buf: &mut Vec<u8>) {
        buf.reserve(self.marshaled_size());
        self.header.marshal_into(buf);
        for ie in &self.ies {
            ie.marshal_into(buf);
        }
    }

    fn marshaled_size(&self) -> usize {
        let mut size = self.header.len() as usize;
        for ie in &self.ies {
            size += ie.len() as usize;
        }
        size
    }

    fn unmarshal(buf: &[u8]) -> Result<Self, io::Error>
    where
        Self: Sized,
    {
        let header = Header::unmarshal(buf)?;
        let mut ies = Vec::new();

        let mut cursor = header.len() as usize;
        while cursor < buf.len() {
            let ie = Ie::unmarshal(&buf[cursor..])?;
            let ie_len = ie.len() as usize;
            ies.push(ie);
            cursor += ie_len;
        }

        Ok(VersionNotSupportedResponse { header, ies })
    }

    fn seid(&self) -> Option<u64> {
        if self.header.has_seid {
            Some(self.header.seid)
        } else {
            None
        }
    }

    fn sequence(&self) -> u32 {
        self.header.sequence_number
    }

    fn set_sequence(&mut self, seq: u32) {
        self.header.sequence_number = seq;
    }

    fn find_ie(&self, ie_type: IeType) -> Option<&Ie> {
        self.ies.iter().find(|ie| ie.ie_type == ie_type)
    }

    fn ies(&self, ie_type: IeType) -> crate::message::IeIter<'_> {
        crate::message::IeIter::generic(&self.ies, ie_type)
    }

    fn all_ies(&self) -> Vec<&Ie> {
        self.ies.iter().collect()
    }
}

/// Builder for VersionNotSupportedResponse message.
#[derive(Debug, Default)]
pub struct VersionNotSupportedResponseBuilder {
    sequence: u32,
    ies: Vec<Ie>,
}

impl VersionNotSupportedResponseBuilder {
    /// Creates a new VersionNotSupportedResponse builder.
    pub fn new(sequence: u32) -> Self {
        Self {
            sequence,
            ies: Vec::new(),
        }
    }

    /// Adds an IE to the message.
    pub fn ie(mut self, ie: Ie) -> Self {
        self.ies.push(ie);
        self
    }

    /// Adds multiple IEs to the message.
    pub fn ies(mut self, mut ies: Vec<Ie>) -> Self {
        self.ies.append(&mut ies);
        self
    }

    /// Builds the VersionNotSupportedResponse message.
    pub fn build(self) -> VersionNotSupportedResponse {
        if self.ies.is_empty() {
            VersionNotSupportedResponse::new(self.sequence)
        } else {
            VersionNotSupportedResponse::new_with_ies(self.sequence, self.ies)
        }
    }
}
