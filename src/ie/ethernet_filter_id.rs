//! Ethernet Filter ID Information Element
//!
//! The Ethernet Filter ID IE uniquely identifies an Ethernet packet filter.
//! Per 3GPP TS 29.244 Section 8.2.98, this IE is used to reference specific Ethernet filters.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Ethernet Filter ID
///
/// Uniquely identifies an Ethernet packet filter within a PDR.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.98
///
/// # Structure
/// - 4 octets: Filter ID value in network byte order
///
/// # Examples
///
/// ```
/// use pfcp_core::ie::ethernet_filter_id::EthernetFilterId;
///
/// // Create Ethernet Filter ID
/// let filter_id = EthernetFilterId::new(1);
/// assert_eq!(filter_id.value(), 1);
///
/// // Marshal and unmarshal
/// let bytes = filter_id.marshal();
/// let parsed = EthernetFilterId::unmarshal(&bytes).unwrap();
/// assert_eq!(filter_id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EthernetFilterId {
    /// Filter ID value (32-bit)
    value: u32,
}

impl EthernetFilterId {
    /// Create a new Ethernet Filter ID
    ///
    /// # Arguments
    /// * `value` - Filter ID value
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::ethernet_filter_id::EthernetFilterId;
    ///
    /// let filter_id = EthernetFilterId::new(42);
    /// assert_eq!(filter_id.value(), 42);
    /// ```
    pub fn new(value: u32) -> Self {
        EthernetFilterId { value }
    }

    /// Get the filter ID value
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::ethernet_filter_id::EthernetFilterId;
    ///
    /// let filter_id = EthernetFilterId::new(100);
    /// assert_eq!(filter_id.value(), 100);
    /// ```
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Marshal Ethernet Filter ID to bytes
    ///
    /// # Returns
    /// 4-byte array with filter ID in network byte order
    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// Unmarshal Ethernet Filter ID from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing filter ID data (must be at least 4 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::ethernet_filter_id::EthernetFilterId;
    ///
    /// let filter_id = EthernetFilterId::new(999);
    /// let bytes = filter_id.marshal();
    /// let parsed = EthernetFilterId::unmarshal(&bytes).unwrap();
    /// assert_eq!(filter_id, parsed);
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Ethernet Filter ID",
                IeType::EthernetFilterId,
                4,
                data.len(),
            ));
        }

        let value = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        Ok(EthernetFilterId { value })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::ethernet_filter_id::EthernetFilterId;
    /// use pfcp_core::ie::IeType;
    ///
    /// let filter_id = EthernetFilterId::new(5);
    /// let ie = filter_id.to_ie();
    /// assert_eq!(ie.ie_type, IeType::EthernetFilterId);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::EthernetFilterId, self.marshal().to_vec())
    }
}
