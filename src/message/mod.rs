//! PFCP messages and their components.

pub mod association_release_request;
pub mod association_release_response;
pub mod association_setup_request;
pub mod association_setup_response;
pub mod association_update_request;
pub mod association_update_response;
pub mod display;
pub mod header;
pub mod heartbeat_request;
pub mod heartbeat_response;
pub mod ie_iter;
pub mod node_report_request;
pub mod node_report_response;
pub mod pfd_management_request;
pub mod pfd_management_response;
pub mod session_deletion_request;
pub mod session_deletion_response;
pub mod session_establishment_request;
pub mod session_establishment_response;
pub mod session_modification_request;
pub mod session_modification_response;
pub mod session_report_request;
pub mod session_report_response;
pub mod session_set_deletion_request;
pub mod session_set_deletion_response;
pub mod session_set_modification_request;
pub mod session_set_modification_response;
pub mod version_not_supported_response;

use crate::ie::Ie;
use std::io;

// Re-export IE iterator types for public API
pub use ie_iter::IeIter;

// Re-export message types for public API
pub use crate::message::association_release_request::AssociationReleaseRequest;
pub use crate::message::association_release_response::AssociationReleaseResponse;
pub use crate::message::association_setup_request::AssociationSetupRequest;
pub use crate::message::association_setup_response::AssociationSetupResponse;
pub use crate::message::association_update_request::AssociationUpdateRequest;
pub use crate::message::association_update_response::AssociationUpdateResponse;
pub use crate::message::heartbeat_request::HeartbeatRequest;
pub use crate::message::heartbeat_response::HeartbeatResponse;
pub use crate::message::node_report_request::NodeReportRequest;
pub use crate::message::node_report_response::NodeReportResponse;
pub use crate::message::pfd_management_request::PfdManagementRequest;
pub use crate::message::pfd_management_response::PfdManagementResponse;
pub use crate::message::session_deletion_request::SessionDeletionRequest;
pub use crate::message::session_deletion_response::SessionDeletionResponse;
pub use crate::message::session_establishment_request::SessionEstablishmentRequest;
pub use crate::message::session_establishment_response::SessionEstablishmentResponse;
pub use crate::message::session_modification_request::SessionModificationRequest;
pub use crate::message::session_modification_response::SessionModificationResponse;
pub use crate::message::session_report_request::SessionReportRequest;
pub use crate::message::session_report_response::SessionReportResponse;
pub use crate::message::session_set_deletion_request::SessionSetDeletionRequest;
pub use crate::message::session_set_deletion_response::SessionSetDeletionResponse;
pub use crate::message::session_set_modification_request::SessionSetModificationRequest;
pub use crate::message::session_set_modification_response::SessionSetModificationResponse;
pub use crate::message::version_not_supported_response::VersionNotSupportedResponse;

// Message Type definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MsgType {
    HeartbeatRequest = 1,
    HeartbeatResponse = 2,
    PfdManagementRequest = 3,
    PfdManagementResponse = 4,
    AssociationSetupRequest = 5,
    AssociationSetupResponse = 6,
    AssociationUpdateRequest = 7,
    AssociationUpdateResponse = 8,
    AssociationReleaseRequest = 9,
    AssociationReleaseResponse = 10,
    VersionNotSupportedResponse = 11,
    NodeReportRequest = 12,
    NodeReportResponse = 13,
    SessionSetDeletionRequest = 14,
    SessionSetDeletionResponse = 15,
    SessionSetModificationRequest = 16,
    SessionSetModificationResponse = 17,
    SessionEstablishmentRequest = 50,
    SessionEstablishmentResponse = 51,
    SessionModificationRequest = 52,
    SessionModificationResponse = 53,
    SessionDeletionRequest = 54,
    SessionDeletionResponse = 55,
    SessionReportRequest = 56,
    SessionReportResponse = 57,
    Unknown,
}

impl From<u8> for MsgType {
    fn from(v: u8) -> Self {
        match v {
            1 => MsgType::HeartbeatRequest,
            2 => MsgType::HeartbeatResponse,
            3 => MsgType::PfdManagementRequest,
            4 => MsgType::PfdManagementResponse,
            5 => MsgType::AssociationSetupRequest,
            6 => MsgType::AssociationSetupResponse,
            7 => MsgType::AssociationUpdateRequest,
            8 => MsgType::AssociationUpdateResponse,
            9 => MsgType::AssociationReleaseRequest,
            10 => MsgType::AssociationReleaseResponse,
            11 => MsgType::VersionNotSupportedResponse,
            12 => MsgType::NodeReportRequest,
            13 => MsgType::NodeReportResponse,
            14 => MsgType::SessionSetDeletionRequest,
            15 => MsgType::SessionSetDeletionResponse,
            16 => MsgType::SessionSetModificationRequest,
            17 => MsgType::SessionSetModificationResponse,
            50 => MsgType::SessionEstablishmentRequest,
            51 => MsgType::SessionEstablishmentResponse,
            52 => MsgType::SessionModificationRequest,
            53 => MsgType::SessionModificationResponse,
            54 => MsgType::SessionDeletionRequest,
            55 => MsgType::SessionDeletionResponse,
            56 => MsgType::SessionReportRequest,
            57 => MsgType::SessionReportResponse,
            _ => MsgType::Unknown,
        }
    }
}

/// A trait representing a PFCP message.
pub trait Message {
    /// Marshals the message into a new `Vec<u8>`.
    ///
    /// This is the standard marshaling method that allocates a new vector.
    /// For better performance in hot paths, consider using `marshal_into`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp_core::message::{Message, heartbeat_request::HeartbeatRequest};
    /// use pfcp_core::ie::{Ie, IeType, recovery_time_stamp::RecoveryTimeStamp};
    /// use std::time::SystemTime;
    ///
    /// let recovery_ts = RecoveryTimeStamp::new(SystemTime::now());
    /// let ts_ie = Ie::new(IeType::RecoveryTimeStamp, recovery_ts.marshal().to_vec());
    /// let request = HeartbeatRequest::new(123, ts_ie, None, vec![]);
    /// let bytes = request.marshal();
    /// ```
    fn marshal(&self) -> Vec<u8>;

    /// Marshals the message into an existing buffer.
    ///
    /// This method appends the marshaled message to the provided buffer,
    /// allowing for buffer reuse and avoiding allocations in hot paths.
    ///
    /// # Performance Note
    ///
    /// The default implementation calls `marshal()` and extends the buffer.
    /// Message types should override this for optimal performance.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp_core::message::{Message, heartbeat_request::HeartbeatRequest};
    /// use pfcp_core::ie::{Ie, IeType, recovery_time_stamp::RecoveryTimeStamp};
    /// use std::time::SystemTime;
    ///
    /// let recovery_ts = RecoveryTimeStamp::new(SystemTime::now());
    /// let ts_ie = Ie::new(IeType::RecoveryTimeStamp, recovery_ts.marshal().to_vec());
    /// let request = HeartbeatRequest::new(123, ts_ie, None, vec![]);
    ///
    /// // Reuse buffer for multiple messages
    /// let mut buf = Vec::new();
    /// request.marshal_into(&mut buf);
    /// // Process buf...
    /// buf.clear();
    /// request.marshal_into(&mut buf);
    /// ```
    fn marshal_into(&self, buf: &mut Vec<u8>) {
        // Default implementation: use existing marshal() method
        buf.extend_from_slice(&self.marshal());
    }

    /// Returns the size of the marshaled message in bytes.
    ///
    /// This can be used to pre-allocate buffers of the correct size,
    /// avoiding reallocations during marshaling.
    ///
    /// # Performance Note
    ///
    /// The default implementation calls `marshal()` which allocates.
    /// Message types should override this for optimal performance.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp_core::message::{Message, heartbeat_request::HeartbeatRequest};
    /// use pfcp_core::ie::{Ie, IeType, recovery_time_stamp::RecoveryTimeStamp};
    /// use std::time::SystemTime;
    ///
    /// let recovery_ts = RecoveryTimeStamp::new(SystemTime::now());
    /// let ts_ie = Ie::new(IeType::RecoveryTimeStamp, recovery_ts.marshal().to_vec());
    /// let request = HeartbeatRequest::new(123, ts_ie, None, vec![]);
    ///
    /// // Pre-allocate exact size needed
    /// let size = request.marshaled_size();
    /// let mut buf = Vec::with_capacity(size);
    /// request.marshal_into(&mut buf);
    /// assert_eq!(buf.len(), size);
    /// ```
    fn marshaled_size(&self) -> usize {
        // Default implementation: marshal to get size (inefficient but works)
        self.marshal().len()
    }

    fn unmarshal(data: &[u8]) -> Result<Self, io::Error>
    where
        Self: Sized;
    fn msg_type(&self) -> MsgType;
    fn msg_name(&self) -> String {
        format!("{:?}", self.msg_type())
    }
    fn version(&self) -> u8 {
        1
    }
    fn seid(&self) -> Option<u64>;
    fn sequence(&self) -> u32;
    fn set_sequence(&mut self, seq: u32);

    /// Get all IEs of a specific type as an iterator.
    ///
    /// This is the recommended way to access IEs in a message. It provides a unified
    /// interface that works consistently whether the IE appears 0, 1, or many times.
    ///
    /// # Benefits
    ///
    /// - **Consistent API**: Same method works for all IE patterns (single, optional, multiple)
    /// - **Prevents bugs**: Iterator makes it clear you're getting all IEs, not just the first
    /// - **Ergonomic**: Use standard iterator methods (`.count()`, `.collect()`, `.map()`, etc.)
    /// - **Zero-cost**: Optimizes to direct access with no runtime overhead
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pfcp_core::message::{Message, SessionEstablishmentRequest};
    /// use pfcp_core::ie::{Ie, IeType, node_id::NodeId};
    /// use std::net::Ipv4Addr;
    ///
    /// # fn example(msg: &SessionEstablishmentRequest) {
    /// // Single mandatory IE
    /// if let Some(node_id_ie) = msg.ies(IeType::NodeId).next() {
    ///     println!("Found Node ID");
    /// }
    ///
    /// // Optional IE
    /// match msg.ies(IeType::PdnType).next() {
    ///     Some(pdn) => println!("PDN Type present"),
    ///     None => println!("No PDN Type"),
    /// }
    ///
    /// // Multiple IEs - iterate all
    /// for pdr in msg.ies(IeType::CreatePdr) {
    ///     println!("Processing PDR: {} bytes", pdr.len());
    /// }
    ///
    /// // Count IEs
    /// let pdr_count = msg.ies(IeType::CreatePdr).count();
    /// println!("Found {} PDRs", pdr_count);
    ///
    /// // Collect into vector
    /// let all_fars: Vec<_> = msg.ies(IeType::CreateFar).collect();
    /// # }
    /// ```
    fn ies(&self, ie_type: crate::ie::IeType) -> IeIter<'_>;

    /// Get the first IE of a specific type.
    ///
    /// **Deprecated:** This method only returns the first IE, which can lead to bugs
    /// when an IE appears multiple times. Use `ies(ie_type).next()` instead.
    ///
    /// # Migration
    ///
    /// ```rust
    /// # use pfcp_core::message::{Message, SessionEstablishmentRequest};
    /// # use pfcp_core::ie::IeType;
    /// # fn example(msg: &SessionEstablishmentRequest) {
    /// // Old way (deprecated)
    /// # #[allow(deprecated)]
    /// let node_id = msg.find_ie(IeType::NodeId);
    ///
    /// // New way (recommended)
    /// let node_id = msg.ies(IeType::NodeId).next();
    /// # }
    /// ```
    #[deprecated(
        since = "0.2.2",
        note = "Use `ies(ie_type).next()` instead. This method only returns the first IE, which can cause bugs with multiple IEs."
    )]
    fn find_ie(&self, ie_type: crate::ie::IeType) -> Option<&Ie> {
        self.ies(ie_type).next()
    }

    /// Get all IEs of a specific type as a vector.
    ///
    /// **Deprecated:** This method allocates a Vec. Use `ies(ie_type)` which returns
    /// an iterator for better ergonomics and performance.
    ///
    /// # Migration
    ///
    /// ```rust
    /// # use pfcp_core::message::{Message, SessionEstablishmentRequest};
    /// # use pfcp_core::ie::IeType;
    /// # fn example(msg: &SessionEstablishmentRequest) {
    /// // Old way (deprecated)
    /// # #[allow(deprecated)]
    /// let pdrs = msg.find_all_ies(IeType::CreatePdr);
    /// for pdr in pdrs {
    ///     // Process
    /// }
    ///
    /// // New way (recommended)
    /// for pdr in msg.ies(IeType::CreatePdr) {
    ///     // Process - no allocation!
    /// }
    ///
    /// // If you really need a Vec
    /// let pdrs: Vec<_> = msg.ies(IeType::CreatePdr).collect();
    /// # }
    /// ```
    #[deprecated(
        since = "0.2.2",
        note = "Use `ies(ie_type)` instead, which returns an iterator. Call `.collect()` if you need a Vec."
    )]
    fn find_all_ies(&self, ie_type: crate::ie::IeType) -> Vec<&Ie> {
        self.ies(ie_type).collect()
    }

    /// Get all IEs from the message.
    ///
    /// Returns a vector containing references to all Information Elements
    /// present in the message, regardless of type.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp_core::message::{Message, heartbeat_request::HeartbeatRequest};
    /// use pfcp_core::ie::{Ie, IeType, recovery_time_stamp::RecoveryTimeStamp};
    /// use std::time::SystemTime;
    ///
    /// let recovery_ts = RecoveryTimeStamp::new(SystemTime::now());
    /// let ts_ie = Ie::new(IeType::RecoveryTimeStamp, recovery_ts.marshal().to_vec());
    /// let request = HeartbeatRequest::new(123, ts_ie, None, vec![]);
    /// let all_ies = request.all_ies();
    /// println!("Message contains {} IEs", all_ies.len());
    /// ```
    fn all_ies(&self) -> Vec<&Ie>;
}

// A generic message for unknown message types.
pub struct Generic {
    header: header::Header,
    ies: Vec<Ie>,
}

impl Message for Generic {
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

    fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        let header = header::Header::unmarshal(data)?;
        let mut cursor = header.len() as usize;
        let mut ies = Vec::new();
        while cursor < data.len() {
            let ie = Ie::unmarshal(&data[cursor..])
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let ie_len = ie.len() as usize;
            ies.push(ie);
            cursor += ie_len;
        }
        Ok(Generic { header, ies })
    }

    fn msg_type(&self) -> MsgType {
        self.header.message_type
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

    fn ies(&self, ie_type: crate::ie::IeType) -> IeIter<'_> {
        IeIter::generic(&self.ies, ie_type)
    }

    #[allow(deprecated)]
    fn find_ie(&self, ie_type: crate::ie::IeType) -> Option<&Ie> {
        self.ies.iter().find(|ie| ie.ie_type == ie_type)
    }

    fn all_ies(&self) -> Vec<&Ie> {
        self.ies.iter().collect()
    }
}

// A simple parse function. In a real implementation, this would be more complex.
pub fn parse(data: &[u8]) -> Result<Box<dyn Message>, io::Error> {
    let header = header::Header::unmarshal(data)?;
    match header.message_type {
        MsgType::HeartbeatRequest => Ok(Box::new(HeartbeatRequest::unmarshal(data)?)),
        MsgType::HeartbeatResponse => Ok(Box::new(HeartbeatResponse::unmarshal(data)?)),
        MsgType::PfdManagementRequest => Ok(Box::new(PfdManagementRequest::unmarshal(data)?)),
        MsgType::PfdManagementResponse => Ok(Box::new(PfdManagementResponse::unmarshal(data)?)),
        MsgType::AssociationSetupRequest => Ok(Box::new(AssociationSetupRequest::unmarshal(data)?)),
        MsgType::AssociationSetupResponse => {
            Ok(Box::new(AssociationSetupResponse::unmarshal(data)?))
        }
        MsgType::AssociationUpdateRequest => {
            Ok(Box::new(AssociationUpdateRequest::unmarshal(data)?))
        }
        MsgType::AssociationUpdateResponse => {
            Ok(Box::new(AssociationUpdateResponse::unmarshal(data)?))
        }
        MsgType::AssociationReleaseRequest => {
            Ok(Box::new(AssociationReleaseRequest::unmarshal(data)?))
        }
        MsgType::AssociationReleaseResponse => {
            Ok(Box::new(AssociationReleaseResponse::unmarshal(data)?))
        }
        MsgType::SessionEstablishmentRequest => {
            Ok(Box::new(SessionEstablishmentRequest::unmarshal(data)?))
        }
        MsgType::SessionDeletionRequest => Ok(Box::new(SessionDeletionRequest::unmarshal(data)?)),
        MsgType::SessionDeletionResponse => Ok(Box::new(SessionDeletionResponse::unmarshal(data)?)),
        MsgType::SessionModificationRequest => {
            Ok(Box::new(SessionModificationRequest::unmarshal(data)?))
        }
        MsgType::SessionModificationResponse => {
            Ok(Box::new(SessionModificationResponse::unmarshal(data)?))
        }
        MsgType::SessionEstablishmentResponse => {
            Ok(Box::new(SessionEstablishmentResponse::unmarshal(data)?))
        }
        MsgType::SessionReportRequest => Ok(Box::new(SessionReportRequest::unmarshal(data)?)),
        MsgType::SessionReportResponse => Ok(Box::new(SessionReportResponse::unmarshal(data)?)),
        MsgType::VersionNotSupportedResponse => {
            Ok(Box::new(VersionNotSupportedResponse::unmarshal(data)?))
        }
        MsgType::NodeReportRequest => Ok(Box::new(NodeReportRequest::unmarshal(data)?)),
        MsgType::NodeReportResponse => Ok(Box::new(NodeReportResponse::unmarshal(data)?)),
        MsgType::SessionSetDeletionRequest => {
            Ok(Box::new(SessionSetDeletionRequest::unmarshal(data)?))
        }
        MsgType::SessionSetDeletionResponse => {
            Ok(Box::new(SessionSetDeletionResponse::unmarshal(data)?))
        }
        MsgType::SessionSetModificationRequest => {
            Ok(Box::new(SessionSetModificationRequest::unmarshal(data)?))
        }
        MsgType::SessionSetModificationResponse => {
            Ok(Box::new(SessionSetModificationResponse::unmarshal(data)?))
        }
        _ => Ok(Box::new(Generic::unmarshal(data)?)),
    }
}
