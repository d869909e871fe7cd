//! Node Report Type Information Element
//!
//! The Node Report Type IE indicates the type of node report in PFCP Node Report messages.
//! Per 3GPP TS 29.244 Section 8.2.69.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Node Report Type
///
/// Contains one-byte bitflags for node report type control.
/// Used to indicate which types of reports are being sent in PFCP Node Report Request messages.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.69
///
/// # Structure
/// - 1 byte: Report type flags
///   - Bit 1 (UPFR): User Plane Path Failure Report
///   - Bit 2 (UPRR): User Plane Path Recovery Report
///   - Bit 3 (CKDR): Clock Drift Report
///   - Bit 4 (GPQR): GTP-U Path QoS Report
///   - Bit 5 (PURR): Peer GTP-U Entity Restart Report
///   - Bit 6 (VSR): Vendor-Specific Report
///   - Bits 7-8: Spare (zeros)
///
/// # Examples
///
/// ```
/// use pfcp_core::ie::node_report_type::NodeReportType;
///
/// // Create Node Report Type with UPFR flag set
/// let nrt = NodeReportType::new(0x01);
/// assert_eq!(nrt.flags(), 0x01);
/// assert!(nrt.upfr());
///
/// // Marshal and unmarshal
/// let bytes = nrt.marshal();
/// let parsed = NodeReportType::unmarshal(&bytes)?;
/// assert_eq!(nrt, parsed);
/// # Ok::<(), pfcp_core::error::PfcpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeReportType {
    /// Report type flags (1 byte)
    flags: u8,
}

impl NodeReportType {
    /// UPFR flag - User Plane Path Failure Report (bit 1)
    pub const UPFR: u8 = 0x01;
    /// UPRR flag - User Plane Path Recovery Report (bit 2)
    pub const UPRR: u8 = 0x02;
    /// CKDR flag - Clock Drift Report (bit 3)
    pub const CKDR: u8 = 0x04;
    /// GPQR flag - GTP-U Path QoS Report (bit 4)
    pub const GPQR: u8 = 0x08;
    /// PURR flag - Peer GTP-U Entity Restart Report (bit 5)
    pub const PURR: u8 = 0x10;
    /// VSR flag - Vendor-Specific Report (bit 6)
    pub const VSR: u8 = 0x20;

    /// Create a new Node Report Type
    ///
    /// # Arguments
    /// * `flags` - Report type flags (1 byte, at least one bit must be set per spec)
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::node_report_type::NodeReportType;
    ///
    /// let nrt = NodeReportType::new(0x01);
    /// assert_eq!(nrt.flags(), 0x01);
    /// ```
    pub fn new(flags: u8) -> Self {
        NodeReportType { flags }
    }

    /// Get the report type flags
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Check if UPFR flag is set (User Plane Path Failure Report)
    pub fn upfr(&self) -> bool {
        self.flags & Self::UPFR != 0
    }

    /// Check if UPRR flag is set (User Plane Path Recovery Report)
    pub fn uprr(&self) -> bool {
        self.flags & Self::UPRR != 0
    }

    /// Check if CKDR flag is set (Clock Drift Report)
    pub fn ckdr(&self) -> bool {
        self.flags & Self::CKDR != 0
    }

    /// Check if GPQR flag is set (GTP-U Path QoS Report)
    pub fn gpqr(&self) -> bool {
        self.flags & Self::GPQR != 0
    }

    /// Check if PURR flag is set (Peer GTP-U Entity Restart Report)
    pub fn purr(&self) -> bool {
        self.flags & Self::PURR != 0
    }

    /// Check if VSR flag is set (Vendor-Specific Report)
    pub fn vsr(&self) -> bool {
        self.flags & Self::VSR != 0
    }

    /// Set UPFR flag
    pub fn set_upfr(&mut self) {
        self.flags |= Self::UPFR;
    }

    /// Clear UPFR flag
    pub fn clear_upfr(&mut self) {
        self.flags &= !Self::UPFR;
    }

    /// Set UPRR flag
    pub fn set_uprr(&mut self) {
        self.flags |= Self::UPRR;
    }

    /// Clear UPRR flag
    pub fn clear_uprr(&mut self) {
        self.flags &= !Self::UPRR;
    }

    /// Set CKDR flag
    pub fn set_ckdr(&mut self) {
        self.flags |= Self::CKDR;
    }

    /// Clear CKDR flag
    pub fn clear_ckdr(&mut self) {
        self.flags &= !Self::CKDR;
    }

    /// Set GPQR flag
    pub fn set_gpqr(&mut self) {
        self.flags |= Self::GPQR;
    }

    /// Clear GPQR flag
    pub fn clear_gpqr(&mut self) {
        self.flags &= !Self::GPQR;
    }

    /// Set PURR flag
    pub fn set_purr(&mut self) {
        self.flags |= Self::PURR;
    }

    /// Clear PURR flag
    pub fn clear_purr(&mut self) {
        self.flags &= !Self::PURR;
    }

    /// Set VSR flag
    pub fn set_vsr(&mut self) {
        self.flags |= Self::VSR;
    }

    /// Clear VSR flag
    pub fn clear_vsr(&mut self) {
        self.flags &= !Self::VSR;
    }

    /// Marshal Node Report Type to bytes
    pub fn marshal(&self) -> Vec<u8> {
        vec![self.flags]
    }

    /// Unmarshal Node Report Type from bytes
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "Node Report Type",
                IeType::NodeReportType,
                1,
                0,
            ));
        }

        Ok(NodeReportType { flags: data[0] })
    }

    /// Convert to generic IE
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::NodeReportType, self.marshal())
    }
}
