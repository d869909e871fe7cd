//! Activation Time Information Element
//!
//! The Activation Time IE indicates the time when a rule or function
//! should be activated in the User Plane Function.
//! Per 3GPP TS 29.244 Section 8.2.121.

use crate::error::messages;
use crate::ie::{Ie, IeType};
use std::io;

/// Activation Time
///
/// Specifies a 3GPP NTP timestamp when a PDR, FAR, QER, URR, BAR, or MAR
/// should be activated in the UPF.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.121
///
/// # Structure
/// - 4 bytes: 3GPP NTP timestamp (u32, big-endian)
///   The timestamp follows 3GPP TS 23.012 format (seconds since Jan 1, 1900)
///
/// # Examples
///
/// ```
/// use pfcp_core::ie::activation_time::ActivationTime;
///
/// // Create an activation time with timestamp 0x12345678
/// let activation = ActivationTime::new(0x12345678);
/// assert_eq!(activation.timestamp(), 0x12345678);
///
/// // Marshal and unmarshal
/// let bytes = activation.marshal()?;
/// let parsed = ActivationTime::unmarshal(&bytes)?;
/// assert_eq!(activation, parsed);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationTime {
    /// 3GPP NTP timestamp
    timestamp: u32,
}

impl ActivationTime {
    /// Create a new Activation Time
    ///
    /// # Arguments
    /// * `timestamp` - 3GPP NTP timestamp value
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::activation_time::ActivationTime;
    ///
    /// let activation = ActivationTime::new(0xDEADBEEF);
    /// assert_eq!(activation.timestamp(), 0xDEADBEEF);
    /// ```
    pub fn new(timestamp: u32) -> Self {
        ActivationTime { timestamp }
    }

    /// Get the timestamp value
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::activation_time::ActivationTime;
    ///
    /// let activation = ActivationTime::new(100);
    /// assert_eq!(activation.timestamp(), 100);
    /// ```
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Marshal Activation Time to bytes
    ///
    /// # Returns
    /// 4-byte vector containing 3GPP NTP timestamp (big-endian)
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn marshal(&self) -> Result<Vec<u8>, io::Error> {
        let mut buf = Vec::with_capacity(4);
        buf.extend_from_slice(&self.timestamp.to_be_bytes());
        Ok(buf)
    }

    /// Unmarshal Activation Time from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing timestamp data (must be at least 4 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::activation_time::ActivationTime;
    ///
    /// let activation = ActivationTime::new(0x11223344);
    /// let bytes = activation.marshal()?;
    /// let parsed = ActivationTime::unmarshal(&bytes)?;
    /// assert_eq!(activation, parsed);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.len() < 4 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                messages::requires_at_least_bytes("Activation Time", 4),
            ));
        }

        let bytes: [u8; 4] = data[0..4].try_into().unwrap();
        let timestamp = u32::from_be_bytes(bytes);

        Ok(ActivationTime { timestamp })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::activation_time::ActivationTime;
    /// use pfcp_core::ie::IeType;
    ///
    /// let activation = ActivationTime::new(0xFFFFFFFF);
    /// let ie = activation.to_ie()?;
    /// assert_eq!(ie.ie_type, IeType::ActivationTime);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn to_ie(&self) -> Result<Ie, io::Error> {
        let data = self.marshal()?;
        Ok(Ie::new(IeType::ActivationTime, data))
    }
}
