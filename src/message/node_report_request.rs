// src/message/node_report_request.rs

//! Node Report Request message implementation.

use crate::ie::{Ie, IeType};
use crate::message::{header::Header, Message, MsgType};
use std::io;

/// Represents a Node Report Request message.
/// Used by UPF to report node-level events and information to the CP function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReportRequest {
    pub header: Header,
    pub node_id: Ie,
    pub node_report_type: Option<Ie>,
    pub user_plane_path_failure_report: Option<Ie>,
    pub ies: Vec<Ie>,
}

impl NodeReportRequest {
    /// Creates a new Node Report Request message.
    pub fn new(
        seq: u32,
        node_id: Ie,
        node_report_type: Option<Ie>,
        user_plane_path_failure_report: Option<Ie>,
    ) -> Self {
        let mut payload_len = node_id.len();
        if let Some(ref ie) = node_report_type {
            payload_len += ie.len();
        }
        if let Some(ref ie) = user_plane_path_failure_report {
            payload_len += ie.len();
        }

        let mut header = Header::new(MsgType::NodeReportRequest, false, 0, seq);
        header.length = 4 + payload_len;

        NodeReportRequest {
            header,
            node_id,
            node_report_type,
            user_plane_path_failure_report,
            ies: Vec::new(),
        }
    }

    /// Creates a new Node Report Request with additional IEs.
    pub fn new_with_ies(
        seq: u32,
        node_id: Ie,
        node_report_type: Option<Ie>,
        user_plane_path_failure_report: Option<Ie>,
        ies: Vec<Ie>,
    ) -> Self {
        let mut payload_len = node_id.len();
        if let Some(ref ie) = node_report_type {
            payload_len += ie.len();
        }
        if let Some(ref ie) = user_plane_path_failure_report {
            payload_len += ie.len();
        }
        for ie in &ies {
            payload_len += ie.len();
        }

        let mut header = Header::new(MsgType::NodeReportRequest, false, 0, seq);
        header.length = 4 + payload_len;

        NodeReportRequest {
            header,
            node_id,
            node_report_type,
            user_plane_path_failure_report,
            ies,
        }
    }
}

impl Message for NodeReportRequest {
    fn msg_type(&self) -> MsgType {
        MsgType::NodeReportRequest
    }

    fn marshal(&self) -> Vec<u8> {
        let mut data = self.header.marshal();
        data.extend_from_slice(&self.node_id.marshal());
        if let Some(ref ie) = self.node_report_type {
            data.extend_from_slice(&ie.marshal());
        }
        if let Some(ref ie) = self.user_plane_path_failure_report {
            data.extend_from_slice(&ie.marshal());
        }
        for ie in &self.ies {
            data.extend_from_slice(&ie.marshal());
        }
        // Update length
        let len = (data.len() - 4) as u16;
        data[2..4].copy_from_slice(&len.to_be_bytes());
        data
    }

    fn unmarshal(buf: &[u8]) -> Result<Self, io::Error>
    where
        Self: Sized,
    {
        let header = Header::unmarshal(buf)?;
        let mut node_id = None;
        let mut node_report_type = None;
        let mut user_plane_path_failure_report = None;
        let mut ies = Vec::new();

        let mut cursor = header.len() as usize;
        while cursor < buf.len() {
            let ie = Ie::unmarshal(&buf[cursor..])?;
            let ie_len = ie.len() as usize;
            match ie.ie_type {
                IeType::NodeId => node_id = Some(ie),
                IeType::ReportType => node_report_type = Some(ie),
                IeType::PathFailureReport => user_plane_path_failure_report = Some(ie),
                _ => ies.push(ie),
            }
            cursor += ie_len;
        }

        let node_id = node_id
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Missing NodeId IE"))?;

        Ok(NodeReportRequest {
            header,
            node_id,
            node_report_type,
            user_plane_path_failure_report,
            ies,
        })
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
        match ie_type {
            IeType::NodeId => Some(&self.node_id),
            IeType::ReportType => self.node_report_type.as_ref(),
            IeType::PathFailureReport => self.user_plane_path_failure_report.as_ref(),
            _ => self.ies.iter().find(|ie| ie.ie_type == ie_type),
        }
    }
}
