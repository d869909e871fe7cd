//! Heartbeat Request message.

use crate::ie::{Ie, IeType};
use crate::message::{header::Header, Message, MsgType};
use std::io;

/// Represents a Heartbeat Request message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatRequest {
    header: Header,
    recovery_time_stamp: Ie, // M - 3GPP TS 29.244 Table 7.4.2.1-1 - IE Type 96
    source_ip_address: Option<Ie>, // O - 3GPP TS 29.244 Table 7.4.2.1-1 - IE Type 192 - When NAT is deployed
    ies: Vec<Ie>,
}

impl HeartbeatRequest {
    /// Creates a new Heartbeat Request message.
    pub fn new(seq: u32, ts: Ie, ip: Option<Ie>, ies: Vec<Ie>) -> Self {
        let mut payload_len = ts.len();
        if let Some(ref ie) = ip {
            payload_len += ie.len();
        }
        for ie in &ies {
            payload_len += ie.len();
        }

        let mut header = Header::new(MsgType::HeartbeatRequest, false, 0, seq);
        header.length = 4 + payload_len;

        HeartbeatRequest {
            header,
            recovery_time_stamp: ts,
            source_ip_address: ip,
            ies,
        }
    }

    // Typed accessors (recommended API)

    /// Returns the recovery time stamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::SystemTime;
    /// use pfcp_core::message::heartbeat_request::HeartbeatRequestBuilder;
    ///
    /// let request = HeartbeatRequestBuilder::new(1)
    ///     .recovery_time_stamp(SystemTime::now())
    ///     .build();
    ///
    /// let ts = request.recovery_time_stamp().unwrap();
    /// ```
    pub fn recovery_time_stamp(&self) -> Result<crate::ie::recovery_time_stamp::RecoveryTimeStamp, io::Error> {
        crate::ie::recovery_time_stamp::RecoveryTimeStamp::unmarshal(&self.recovery_time_stamp.payload)
    }

    /// Returns the source IP address if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use std::time::SystemTime;
    /// use pfcp_core::message::heartbeat_request::HeartbeatRequestBuilder;
    ///
    /// let request = HeartbeatRequestBuilder::new(1)
    ///     .recovery_time_stamp(SystemTime::now())
    ///     .source_ip_address(Ipv4Addr::new(192, 168, 1, 1))
    ///     .build();
    ///
    /// let source_ip = request.source_ip_address().unwrap().unwrap();
    /// ```
    pub fn source_ip_address(&self) -> Option<Result<crate::ie::source_ip_address::SourceIpAddress, io::Error>> {
        self.source_ip_address.as_ref()
            .map(|ie| crate::ie::source_ip_address::SourceIpAddress::unmarshal(&ie.payload))
    }

    /// Returns a slice of additional IEs.
    pub fn additional_ies(&self) -> &[Ie] {
        &self.ies
    }

    // Raw IE accessors (compatibility layer)

    /// Returns the raw recovery time stamp IE.
    pub fn recovery_time_stamp_ie(&self) -> &Ie {
        &self.recovery_time_stamp
    }

    /// Returns the raw source IP address IE if present.
    pub fn source_ip_address_ie(&self) -> Option<&Ie> {
        self.source_ip_address.as_ref()
    }
}

impl Message for HeartbeatRequest {
    fn marshal(&self) -> Vec<u8> {
        let mut data = self.header.marshal();
        data.extend_from_slice(&self.recovery_time_stamp.marshal());
        if let Some(ref ie) = self.source_ip_address {
            data.extend_from_slice(&ie.marshal());
        }
        for ie in &self.ies {
            data.extend_from_slice(&ie.marshal());
        }
        data
    }

    fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        let header = Header::unmarshal(data)?;
        let mut recovery_time_stamp = None;
        let mut source_ip_address = None;
        let mut ies = Vec::new();

        let mut offset = header.len() as usize;
        while offset < data.len() {
            let ie = Ie::unmarshal(&data[offset..])?;
            let ie_len = ie.len() as usize;
            match ie.ie_type {
                IeType::RecoveryTimeStamp => recovery_time_stamp = Some(ie),
                IeType::SourceIpAddress => source_ip_address = Some(ie),
                _ => ies.push(ie),
            }
            offset += ie_len;
        }

        // Validate mandatory IE is present per 3GPP TS 29.244 Table 7.4.2.1-1
        let recovery_time_stamp = recovery_time_stamp.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "HeartbeatRequest: Missing mandatory Recovery Time Stamp IE (3GPP TS 29.244 Table 7.4.2.1-1)",
            )
        })?;

        Ok(HeartbeatRequest {
            header,
            recovery_time_stamp,
            source_ip_address,
            ies,
        })
    }

    fn msg_type(&self) -> MsgType {
        MsgType::HeartbeatRequest
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
        if self.recovery_time_stamp.ie_type == ie_type {
            return Some(&self.recovery_time_stamp);
        }
        if self
            .source_ip_address
            .as_ref()
            .is_some_and(|ie| ie.ie_type == ie_type)
        {
            return self.source_ip_address.as_ref();
        }
        self.ies.iter().find(|ie| ie.ie_type == ie_type)
    }

    fn ies(&self, ie_type: IeType) -> crate::message::IeIter<'_> {
        use crate::message::IeIter;

        match ie_type {
            IeType::RecoveryTimeStamp => IeIter::single(Some(&self.recovery_time_stamp), ie_type),
            IeType::SourceIpAddress => IeIter::single(self.source_ip_address.as_ref(), ie_type),
            _ => IeIter::generic(&self.ies, ie_type),
        }
    }

    fn all_ies(&self) -> Vec<&Ie> {
        let mut result = Vec::new();
        result.push(&self.recovery_time_stamp);
        if let Some(ref ie) = self.source_ip_address {
            result.push(ie);
        }
        result.extend(self.ies.iter());
        result
    }
}

/// Builder for HeartbeatRequest message.
#[derive(Debug, Default)]
pub struct HeartbeatRequestBuilder {
    sequence: u32,
    recovery_time_stamp: Option<Ie>,
    source_ip_address: Option<Ie>,
    ies: Vec<Ie>,
}

impl HeartbeatRequestBuilder {
    /// Creates a new HeartbeatRequest builder.
    pub fn new(sequence: u32) -> Self {
        Self {
            sequence,
            recovery_time_stamp: None,
            source_ip_address: None,
            ies: Vec::new(),
        }
    }

    /// Sets the recovery time stamp from a `SystemTime`.
    ///
    /// This is an ergonomic method that automatically converts the `SystemTime`
    /// to a `RecoveryTimeStamp` IE. For more control, use [`recovery_time_stamp_ie`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::SystemTime;
    /// use pfcp_core::message::heartbeat_request::HeartbeatRequestBuilder;
    ///
    /// let request = HeartbeatRequestBuilder::new(1)
    ///     .recovery_time_stamp(SystemTime::now())
    ///     .build();
    /// ```
    ///
    /// [`recovery_time_stamp_ie`]: #method.recovery_time_stamp_ie
    pub fn recovery_time_stamp(mut self, timestamp: std::time::SystemTime) -> Self {
        use crate::ie::recovery_time_stamp::RecoveryTimeStamp;
        let ts = RecoveryTimeStamp::new(timestamp);
        self.recovery_time_stamp = Some(Ie::new(IeType::RecoveryTimeStamp, ts.marshal().to_vec()));
        self
    }

    /// Sets the recovery time stamp IE directly.
    ///
    /// This method provides full control over the IE construction. For common cases,
    /// use [`recovery_time_stamp`] which accepts a `SystemTime` directly.
    ///
    /// [`recovery_time_stamp`]: #method.recovery_time_stamp
    pub fn recovery_time_stamp_ie(mut self, ie: Ie) -> Self {
        self.recovery_time_stamp = Some(ie);
        self
    }

    /// Sets the source IP address from an IP address.
    ///
    /// Accepts `Ipv4Addr`, `Ipv6Addr`, or `IpAddr`. For more control, use
    /// [`source_ip_address_ie`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use std::time::SystemTime;
    /// use pfcp_core::message::heartbeat_request::HeartbeatRequestBuilder;
    ///
    /// let request = HeartbeatRequestBuilder::new(1)
    ///     .recovery_time_stamp(SystemTime::now())
    ///     .source_ip_address(Ipv4Addr::new(192, 168, 1, 1))
    ///     .build();
    /// ```
    ///
    /// [`source_ip_address_ie`]: #method.source_ip_address_ie
    pub fn source_ip_address<T>(mut self, ip_addr: T) -> Self
    where
        T: Into<std::net::IpAddr>,
    {
        use crate::ie::source_ip_address::SourceIpAddress;
        let ip_addr = ip_addr.into();
        let source_ip = match ip_addr {
            std::net::IpAddr::V4(v4) => SourceIpAddress::new(Some(v4), None),
            std::net::IpAddr::V6(v6) => SourceIpAddress::new(None, Some(v6)),
        };
        self.source_ip_address = Some(source_ip.to_ie());
        self
    }

    /// Sets the source IP address IE directly.
    ///
    /// This method provides full control over the IE construction. For common cases,
    /// use [`source_ip_address`] which accepts IP addresses directly.
    ///
    /// [`source_ip_address`]: #method.source_ip_address
    pub fn source_ip_address_ie(mut self, ie: Ie) -> Self {
        self.source_ip_address = Some(ie);
        self
    }

    /// Adds an additional IE.
    pub fn ie(mut self, ie: Ie) -> Self {
        self.ies.push(ie);
        self
    }

    /// Adds multiple IEs.
    pub fn ies(mut self, mut ies: Vec<Ie>) -> Self {
        self.ies.append(&mut ies);
        self
    }

    /// Builds the HeartbeatRequest message.
    ///
    /// # Panics
    ///
    /// Panics if the mandatory recovery_time_stamp is not set.
    /// Per 3GPP TS 29.244 Table 7.4.2.1-1, Recovery Time Stamp is mandatory.
    pub fn build(self) -> HeartbeatRequest {
        let recovery_time_stamp = self.recovery_time_stamp.expect(
            "HeartbeatRequest requires recovery_time_stamp (mandatory per 3GPP TS 29.244 Table 7.4.2.1-1)"
        );
        HeartbeatRequest::new(
            self.sequence,
            recovery_time_stamp,
            self.source_ip_address,
            self.ies,
        )
    }

    /// Builds the HeartbeatRequest message and marshals it to bytes in one step.
    ///
    /// This is a convenience method equivalent to calling `.build().marshal()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::SystemTime;
    /// use pfcp_core::message::heartbeat_request::HeartbeatRequestBuilder;
    ///
    /// let bytes = HeartbeatRequestBuilder::new(1)
    ///     .recovery_time_stamp(SystemTime::now())
    ///     .marshal();
    /// ```
    pub fn marshal(self) -> Vec<u8> {
        self.build().marshal()
    }
}
