// src/message/association_setup_response.rs

//! Association Setup Response message implementation.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};
use crate::message::{header::Header, Message, MsgType};
use crate::types::{Seid, SequenceNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationSetupResponse {
    pub header: Header,
    pub node_id: Ie,                           // M - 3GPP TS 29.244 Table 7.4.4.2-1
    pub cause: Ie,                             // M - 3GPP TS 29.244 Table 7.4.4.2-1
    pub recovery_time_stamp: Option<Ie>, // M - 3GPP TS 29.244 Table 7.4.4.2-1 (TODO: Should be mandatory, not Optional)
    pub up_function_features: Option<Ie>, // C - 3GPP TS 29.244 Table 7.4.4.2-1
    pub cp_function_features: Option<Ie>, // C - 3GPP TS 29.244 Table 7.4.4.2-1
    pub alternative_smf_ip_addresses: Vec<Ie>, // O - Multiple - IE Type 178 (N4/N4mb only)
    pub smf_set_id: Option<Ie>, // C - IE Type 180 - When MPAS feature is advertised (N4/N4mb only)
    pub pfcpas_rsp_flags: Option<Ie>, // O - IE Type 184 - PSREI and UUPSI flags
    pub gtpu_path_qos_control_information: Vec<Ie>, // C - Multiple - IE Type 238 (N4 only)
    pub nf_instance_id: Option<Ie>, // O - IE Type 253 - When sent by 5G UP function (N4/N4mb only)
    // TODO: [IE Type 203] Clock Drift Control Information - C - Multiple instances allowed, Grouped IE (N4 only)
    // TODO: [IE Type 233] UE IP address Pool Information - O - Multiple instances allowed (Sxb/N4 only)
    pub ies: Vec<Ie>,
}

impl Message for AssociationSetupResponse {
    fn msg_type(&self) -> MsgType {
        MsgType::AssociationSetupResponse
    }

    fn marshal(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.marshaled_size());
        self.marshal_into(&mut buf);
        buf
    }

    fn marshal_into(&self, buf: &mut Vec<u8>) {
        buf.reserve(self.marshaled_size());
        self.header.marshal_into(buf);
        self.cause.marshal_into(buf);
        self.node_id.marshal_into(buf);
        if let Some(ref ie) = self.up_function_features {
            ie.marshal_into(buf);
        }
        if let Some(ref ie) = self.cp_function_features {
            ie.marshal_into(buf);
        }
        if let Some(ref ie) = self.recovery_time_stamp {
            ie.marshal_into(buf);
        }
        for ie in &self.alternative_smf_ip_addresses {
            ie.marshal_into(buf);
        }
        if let Some(ref ie) = self.smf_set_id {
            ie.marshal_into(buf);
        }
        if let Some(ref ie) = self.pfcpas_rsp_flags {
            ie.marshal_into(buf);
        }
        for ie in &self.gtpu_path_qos_control_information {
            ie.marshal_into(buf);
        }
        if let Some(ref ie) = self.nf_instance_id {
            ie.marshal_into(buf);
        }
        for ie in &self.ies {
            ie.marshal_into(buf);
        }
    }

    fn marshaled_size(&self) -> usize {
        let mut size = self.header.len() as usize;
        size += self.cause.len() as usize;
        size += self.node_id.len() as usize;
        if let Some(ref ie) = self.up_function_features {
            size += ie.len() as usize;
        }
        if let Some(ref ie) = self.cp_function_features {
            size += ie.len() as usize;
        }
        if let Some(ref ie) = self.recovery_time_stamp {
            size += ie.len() as usize;
        }
        for ie in &self.alternative_smf_ip_addresses {
            size += ie.len() as usize;
        }
        if let Some(ref ie) = self.smf_set_id {
            size += ie.len() as usize;
        }
        if let Some(ref ie) = self.pfcpas_rsp_flags {
            size += ie.len() as usize;
        }
        for ie in &self.gtpu_path_qos_control_information {
            size += ie.len() as usize;
        }
        if let Some(ref ie) = self.nf_instance_id {
            size += ie.len() as usize;
        }
        for ie in &self.ies {
            size += ie.len() as usize;
        }
        size
    }

    fn unmarshal(buf: &[u8]) -> Result<Self, PfcpError>
    where
        Self: Sized,
    {
        let header = Header::unmarshal(buf)?;
        let mut cause = None;
        let mut node_id = None;
        let mut up_function_features = None;
        let mut cp_function_features = None;
        let mut recovery_time_stamp = None;
        let mut alternative_smf_ip_addresses = Vec::new();
        let mut smf_set_id = None;
        let mut pfcpas_rsp_flags = None;
        let mut gtpu_path_qos_control_information = Vec::new();
        let mut nf_instance_id = None;
        let mut ies = Vec::new();

        let mut offset = header.len() as usize;
        while offset < buf.len() {
            let ie = Ie::unmarshal(&buf[offset..])?;
            let ie_len = ie.len() as usize;
            match ie.ie_type {
                IeType::Cause => cause = Some(ie),
                IeType::NodeId => node_id = Some(ie),
                IeType::UpFunctionFeatures => up_function_features = Some(ie),
                IeType::CpFunctionFeatures => cp_function_features = Some(ie),
                IeType::RecoveryTimeStamp => recovery_time_stamp = Some(ie),
                IeType::AlternativeSmfIpAddress => alternative_smf_ip_addresses.push(ie),
                IeType::SmfSetId => smf_set_id = Some(ie),
                IeType::PfcpasRspFlags => pfcpas_rsp_flags = Some(ie),
                IeType::GtpuPathQosControlInformation => gtpu_path_qos_control_information.push(ie),
                IeType::NfInstanceId => nf_instance_id = Some(ie),
                _ => ies.push(ie),
            }
            offset += ie_len;
        }

        Ok(AssociationSetupResponse {
            header,
            cause: cause.ok_or(PfcpError::MissingMandatoryIe {
                ie_type: IeType::Cause,
                message_type: Some(MsgType::AssociationSetupResponse),
                parent_ie: None,
            })?,
            node_id: node_id.ok_or(PfcpError::MissingMandatoryIe {
                ie_type: IeType::NodeId,
                message_type: Some(MsgType::AssociationSetupResponse),
                parent_ie: None,
            })?,
            up_function_features,
            cp_function_features,
            recovery_time_stamp,
            alternative_smf_ip_addresses,
            smf_set_id,
            pfcpas_rsp_flags,
            gtpu_path_qos_control_information,
            nf_instance_id,
            ies,
        })
    }

    fn seid(&self) -> Option<Seid> {
        if self.header.has_seid {
            Some(self.header.seid)
        } else {
            None
        }
    }

    fn sequence(&self) -> SequenceNumber {
        self.header.sequence_number
    }

    fn set_sequence(&mut self, seq: SequenceNumber) {
        self.header.sequence_number = seq;
    }

    fn ies(&self, ie_type: IeType) -> crate::message::IeIter<'_> {
        use crate::message::IeIter;

        match ie_type {
            IeType::NodeId => IeIter::single(Some(&self.node_id), ie_type),
            IeType::Cause => IeIter::single(Some(&self.cause), ie_type),
            IeType::RecoveryTimeStamp => IeIter::single(self.recovery_time_stamp.as_ref(), ie_type),
            IeType::UpFunctionFeatures => {
                IeIter::single(self.up_function_features.as_ref(), ie_type)
            }
            IeType::CpFunctionFeatures => {
                IeIter::single(self.cp_function_features.as_ref(), ie_type)
            }
            IeType::AlternativeSmfIpAddress => {
                IeIter::multiple(&self.alternative_smf_ip_addresses, ie_type)
            }
            IeType::SmfSetId => IeIter::single(self.smf_set_id.as_ref(), ie_type),
            IeType::PfcpasRspFlags => IeIter::single(self.pfcpas_rsp_flags.as_ref(), ie_type),
            IeType::GtpuPathQosControlInformation => {
                IeIter::multiple(&self.gtpu_path_qos_control_information, ie_type)
            }
            IeType::NfInstanceId => IeIter::single(self.nf_instance_id.as_ref(), ie_type),
            _ => IeIter::generic(&self.ies, ie_type),
        }
    }

    fn all_ies(&self) -> Vec<&Ie> {
        let mut result = vec![&self.cause, &self.node_id];
        if let Some(ref ie) = self.up_function_features {
            result.push(ie);
        }
        if let Some(ref ie) = self.cp_function_features {
            result.push(ie);
        }
        if let Some(ref ie) = self.recovery_time_stamp {
            result.push(ie);
        }
        result.extend(self.alternative_smf_ip_addresses.iter());
        if let Some(ref ie) = self.smf_set_id {
            result.push(ie);
        }
        if let Some(ref ie) = self.pfcpas_rsp_flags {
            result.push(ie);
        }
        result.extend(self.gtpu_path_qos_control_information.iter());
        if let Some(ref ie) = self.nf_instance_id {
            result.push(ie);
        }
        result.extend(self.ies.iter());
        result
    }
}

impl AssociationSetupResponse {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seq: impl Into<SequenceNumber>,
        cause: Ie,
        node_id: Ie,
        up_function_features: Option<Ie>,
        cp_function_features: Option<Ie>,
        recovery_time_stamp: Option<Ie>,
        alternative_smf_ip_addresses: Vec<Ie>,
        smf_set_id: Option<Ie>,
        pfcpas_rsp_flags: Option<Ie>,
        gtpu_path_qos_control_information: Vec<Ie>,
        nf_instance_id: Option<Ie>,
        ies: Vec<Ie>,
    ) -> Self {
        let mut payload_len = cause.len() + node_id.len();
        if let Some(ie) = &up_function_features {
            payload_len += ie.len();
        }
        if let Some(ie) = &cp_function_features {
            payload_len += ie.len();
        }
        if let Some(ie) = &recovery_time_stamp {
            payload_len += ie.len();
        }
        for ie in &alternative_smf_ip_addresses {
            payload_len += ie.len();
        }
        if let Some(ie) = &smf_set_id {
            payload_len += ie.len();
        }
        if let Some(ie) = &pfcpas_rsp_flags {
            payload_len += ie.len();
        }
        for ie in &gtpu_path_qos_control_information {
            payload_len += ie.len();
        }
        if let Some(ie) = &nf_instance_id {
            payload_len += ie.len();
        }
        for ie in &ies {
            payload_len += ie.len();
        }
        let mut header = Header::new(MsgType::AssociationSetupResponse, false, 0, seq);
        header.length = payload_len + (header.len() - 4);
        AssociationSetupResponse {
            header,
            cause,
            node_id,
            up_function_features,
            cp_function_features,
            recovery_time_stamp,
            alternative_smf_ip_addresses,
            smf_set_id,
            pfcpas_rsp_flags,
            gtpu_path_qos_control_information,
            nf_instance_id,
            ies,
        }
    }
}

/// Builder for AssociationSetupResponse message.
#[derive(Debug, Default)]
pub struct AssociationSetupResponseBuilder {
    sequence: SequenceNumber,
    cause: Option<Ie>,
    node_id: Option<Ie>,
    up_function_features: Option<Ie>,
    cp_function_features: Option<Ie>,
    recovery_time_stamp: Option<Ie>,
    alternative_smf_ip_addresses: Vec<Ie>,
    smf_set_id: Option<Ie>,
    pfcpas_rsp_flags: Option<Ie>,
    gtpu_path_qos_control_information: Vec<Ie>,
    nf_instance_id: Option<Ie>,
    ies: Vec<Ie>,
}

impl AssociationSetupResponseBuilder {
    /// Creates a new AssociationSetupResponse builder.
    pub fn new(sequence: impl Into<SequenceNumber>) -> Self {
        Self {
            sequence: sequence.into(),
            cause: None,
            node_id: None,
            up_function_features: None,
            cp_function_features: None,
            recovery_time_stamp: None,
            alternative_smf_ip_addresses: Vec::new(),
            smf_set_id: None,
            pfcpas_rsp_flags: None,
            gtpu_path_qos_control_information: Vec::new(),
            nf_instance_id: None,
            ies: Vec::new(),
        }
    }

    /// Sets the cause from a CauseValue.
    ///
    /// Accepts a CauseValue enum. For common cases, use convenience methods like
    /// [`cause_accepted`] or [`cause_rejected`]. For full control, use [`cause_ie`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp_core::message::association_setup_response::AssociationSetupResponseBuilder;
    /// use pfcp_core::ie::cause::CauseValue;
    /// use std::net::Ipv4Addr;
    ///
    /// let response = AssociationSetupResponseBuilder::new(1)
    ///     .cause(CauseValue::RequestAccepted)
    ///     .node_id(Ipv4Addr::new(127, 0, 0, 1))
    ///     .build();
    /// ```
    ///
    /// [`cause_accepted`]: #method.cause_accepted
    /// [`cause_rejected`]: #method.cause_rejected
    /// [`cause_ie`]: #method.cause_ie
    pub fn cause(mut self, cause_value: crate::ie::cause::CauseValue) -> Self {
        use crate::ie::cause::Cause;
        use crate::ie::{Ie, IeType};
        let cause = Cause::new(cause_value);
        self.cause = Some(Ie::new(IeType::Cause, cause.marshal().to_vec()));
        self
    }

    /// Convenience method to set cause to Request Accepted.
    ///
    /// Equivalent to `.cause(CauseValue::RequestAccepted)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp_core::message::association_setup_response::AssociationSetupResponseBuilder;
    /// use std::net::Ipv4Addr;
    ///
    /// let response = AssociationSetupResponseBuilder::new(1)
    ///     .cause_accepted()
    ///     .node_id(Ipv4Addr::new(127, 0, 0, 1))
    ///     .build();
    /// ```
    pub fn cause_accepted(self) -> Self {
        self.cause(crate::ie::cause::CauseValue::RequestAccepted)
    }

    /// Convenience method to set cause to Request Rejected.
    ///
    /// Equivalent to `.cause(CauseValue::RequestRejected)`.
    pub fn cause_rejected(self) -> Self {
        self.cause(crate::ie::cause::CauseValue::RequestRejected)
    }

    /// Sets the cause IE directly (required).
    ///
    /// This method provides full control over the IE construction. For common cases,
    /// use [`cause`], [`cause_accepted`], or [`cause_rejected`].
    ///
    /// [`cause`]: #method.cause
    /// [`cause_accepted`]: #method.cause_accepted
    /// [`cause_rejected`]: #method.cause_rejected
    pub fn cause_ie(mut self, cause: Ie) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Sets the node ID from an IP address (required).
    ///
    /// Accepts `Ipv4Addr`, `Ipv6Addr`, or `IpAddr`. For FQDN-based node IDs,
    /// use [`node_id_fqdn`]. For full control, use [`node_id_ie`].
    ///
    /// [`node_id_fqdn`]: #method.node_id_fqdn
    /// [`node_id_ie`]: #method.node_id_ie
    pub fn node_id<T>(mut self, node_id: T) -> Self
    where
        T: Into<std::net::IpAddr>,
    {
        use crate::ie::node_id::NodeId;
        let ip_addr = node_id.into();
        let node = match ip_addr {
            std::net::IpAddr::V4(v4) => NodeId::new_ipv4(v4),
            std::net::IpAddr::V6(v6) => NodeId::new_ipv6(v6),
        };
        self.node_id = Some(node.to_ie());
        self
    }

    /// Sets the node ID from an FQDN (required).
    ///
    /// For IP-based node IDs, use [`node_id`] which accepts IP addresses directly.
    ///
    /// [`node_id`]: #method.node_id
    pub fn node_id_fqdn(mut self, fqdn: &str) -> Self {
        use crate::ie::node_id::NodeId;
        let node = NodeId::new_fqdn(fqdn);
        self.node_id = Some(node.to_ie());
        self
    }

    /// Sets the node ID IE directly (required).
    ///
    /// For common cases, use [`node_id`] for IP addresses or [`node_id_fqdn`] for FQDNs.
    ///
    /// [`node_id`]: #method.node_id
    /// [`node_id_fqdn`]: #method.node_id_fqdn
    pub fn node_id_ie(mut self, node_id: Ie) -> Self {
        self.node_id = Some(node_id);
        self
    }

    /// Sets the UP function features IE (optional).
    pub fn up_function_features(mut self, up_function_features: Ie) -> Self {
        self.up_function_features = Some(up_function_features);
        self
    }

    /// Sets the CP function features IE (optional).
    pub fn cp_function_features(mut self, cp_function_features: Ie) -> Self {
        self.cp_function_features = Some(cp_function_features);
        self
    }

    /// Sets the recovery time stamp from a `SystemTime` (optional).
    ///
    /// This is an ergonomic method that automatically converts the `SystemTime`
    /// to a `RecoveryTimeStamp` IE. For more control, use [`recovery_time_stamp_ie`].
    ///
    /// [`recovery_time_stamp_ie`]: #method.recovery_time_stamp_ie
    pub fn recovery_time_stamp(mut self, timestamp: std::time::SystemTime) -> Self {
        use crate::ie::recovery_time_stamp::RecoveryTimeStamp;
        let ts = RecoveryTimeStamp::new(timestamp);
        self.recovery_time_stamp = Some(ts.to_ie());
        self
    }

    /// Sets the recovery time stamp IE directly (optional).
    ///
    /// For common cases, use [`recovery_time_stamp`] which accepts a `SystemTime` directly.
    ///
    /// [`recovery_time_stamp`]: #method.recovery_time_stamp
    pub fn recovery_time_stamp_ie(mut self, recovery_time_stamp: Ie) -> Self {
        self.recovery_time_stamp = Some(recovery_time_stamp);
        self
    }

    /// Adds an Alternative SMF IP Address IE (optional, multiple allowed).
    pub fn alternative_smf_ip_address(mut self, ie: Ie) -> Self {
        self.alternative_smf_ip_addresses.push(ie);
        self
    }

    /// Adds multiple Alternative SMF IP Address IEs.
    pub fn alternative_smf_ip_addresses(mut self, mut ies: Vec<Ie>) -> Self {
        self.alternative_smf_ip_addresses.append(&mut ies);
        self
    }

    /// Sets the SMF Set ID IE (optional).
    pub fn smf_set_id(mut self, ie: Ie) -> Self {
        self.smf_set_id = Some(ie);
        self
    }

    /// Sets the PFCPASRsp-Flags IE (optional).
    pub fn pfcpas_rsp_flags(mut self, ie: Ie) -> Self {
        self.pfcpas_rsp_flags = Some(ie);
        self
    }

    /// Adds a GTP-U Path QoS Control Information IE (optional, multiple allowed).
    pub fn gtpu_path_qos_control_information(mut self, ie: Ie) -> Self {
        self.gtpu_path_qos_control_information.push(ie);
        self
    }

    /// Sets the NF Instance ID IE (optional).
    pub fn nf_instance_id(mut self, ie: Ie) -> Self {
        self.nf_instance_id = Some(ie);
        self
    }

    /// Adds an additional IE.
    pub fn ie(mut self, ie: Ie) -> Self {
        self.ies.push(ie);
        self
    }

    /// Adds multiple additional IEs.
    pub fn ies(mut self, mut ies: Vec<Ie>) -> Self {
        self.ies.append(&mut ies);
        self
    }

    /// Builds the AssociationSetupResponse message.
    ///
    /// # Panics
    /// Panics if required cause or node_id IEs are not set.
    pub fn build(self) -> AssociationSetupResponse {
        let cause = self
            .cause
            .expect("Cause IE is required for AssociationSetupResponse");
        let node_id = self
            .node_id
            .expect("Node ID IE is required for AssociationSetupResponse");

        AssociationSetupResponse::new(
            self.sequence,
            cause,
            node_id,
            self.up_function_features,
            self.cp_function_features,
            self.recovery_time_stamp,
            self.alternative_smf_ip_addresses,
            self.smf_set_id,
            self.pfcpas_rsp_flags,
            self.gtpu_path_qos_control_information,
            self.nf_instance_id,
            self.ies,
        )
    }

    /// Tries to build the AssociationSetupResponse message.
    ///
    /// # Returns
    /// Returns an error if required IEs are not set.
    pub fn try_build(self) -> Result<AssociationSetupResponse, &'static str> {
        let cause = self
            .cause
            .ok_or("Cause IE is required for AssociationSetupResponse")?;
        let node_id = self
            .node_id
            .ok_or("Node ID IE is required for AssociationSetupResponse")?;

        Ok(AssociationSetupResponse::new(
            self.sequence,
            cause,
            node_id,
            self.up_function_features,
            self.cp_function_features,
            self.recovery_time_stamp,
            self.alternative_smf_ip_addresses,
            self.smf_set_id,
            self.pfcpas_rsp_flags,
            self.gtpu_path_qos_control_information,
            self.nf_instance_id,
            self.ies,
        ))
    }

    /// Builds the AssociationSetupResponse message and marshals it to bytes in one step.
    ///
    /// This is a convenience method equivalent to calling `.build().marshal()`.
    ///
    /// # Panics
    /// Panics if required IEs (Cause, Node ID) are not set.
    pub fn marshal(self) -> Vec<u8> {
        self.build().marshal()
    }
}
