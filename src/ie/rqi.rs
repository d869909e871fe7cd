//! RQI (Reflective QoS Indicator) Information Element
//!
//! The RQI IE indicates whether reflective QoS should be enabled for the QoS flow.
//! Per 3GPP TS 29.244 Section 8.2.88, this is a simple flag IE.
//!
//! Reflective QoS allows the UE to derive uplink QoS rules from downlink traffic,
//! simplifying QoS management in 5G networks.

use crate::ie::{Ie, IeType};
use std::io;

/// RQI (Reflective QoS Indicator)
///
/// Indicates whether reflective QoS is enabled for a QoS flow in 5G networks.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.88
///
/// # Structure
/// - Bit 1 (LSB): RQI flag (0 = disabled, 1 = enabled)
/// - Bits 2-8: Spare (set to 0)
///
/// # Examples
///
/// ```
/// use pfcp_core::ie::rqi::Rqi;
///
/// // Create RQI with reflective QoS enabled
/// let rqi = Rqi::enabled();
/// assert!(rqi.is_enabled());
///
/// // Create RQI with reflective QoS disabled
/// let rqi = Rqi::disabled();
/// assert!(!rqi.is_enabled());
///
/// // Marshal and unmarshal
/// let bytes = rqi.marshal();
/// let parsed = Rqi::unmarshal(&bytes).unwrap();
/// assert_eq!(rqi, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rqi {
    /// Reflective QoS indicator flag
    rqi: bool,
}

impl Rqi {
    /// Create a new RQI IE
    ///
    /// # Arguments
    /// * `enabled` - true if reflective QoS is enabled, false otherwise
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::rqi::Rqi;
    ///
    /// let rqi = Rqi::new(true);
    /// assert!(rqi.is_enabled());
    /// ```
    pub fn new(enabled: bool) -> Self {
        Rqi { rqi: enabled }
    }

    /// Create RQI with reflective QoS enabled
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::rqi::Rqi;
    ///
    /// let rqi = Rqi::enabled();
    /// assert!(rqi.is_enabled());
    /// ```
    pub fn enabled() -> Self {
        Rqi { rqi: true }
    }

    /// Create RQI with reflective QoS disabled
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::rqi::Rqi;
    ///
    /// let rqi = Rqi::disabled();
    /// assert!(!rqi.is_enabled());
    /// ```
    pub fn disabled() -> Self {
        Rqi { rqi: false }
    }

    /// Check if reflective QoS is enabled
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::rqi::Rqi;
    ///
    /// let rqi = Rqi::enabled();
    /// assert!(rqi.is_enabled());
    ///
    /// let rqi = Rqi::disabled();
    /// assert!(!rqi.is_enabled());
    /// ```
    pub fn is_enabled(&self) -> bool {
        self.rqi
    }

    /// Marshal RQI to bytes
    ///
    /// # Returns
    /// 1-byte array with RQI flag in bit 1 (LSB)
    pub fn marshal(&self) -> [u8; 1] {
        let flags = if self.rqi { 0x01 } else { 0x00 };
        [flags]
    }

    /// Unmarshal RQI from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing RQI data (must be at least 1 byte)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::rqi::Rqi;
    ///
    /// let rqi = Rqi::enabled();
    /// let bytes = rqi.marshal();
    /// let parsed = Rqi::unmarshal(&bytes).unwrap();
    /// assert_eq!(rqi, parsed);
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Not enough data for RQI: expected 1 byte",
            ));
        }

        // Extract bit 1 (LSB) per 3GPP TS 29.244 Section 8.2.88
        Ok(Rqi {
            rqi: (data[0] & 0x01) != 0,
        })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::rqi::Rqi;
    /// use pfcp_core::ie::IeType;
    ///
    /// let rqi = Rqi::enabled();
    /// let ie = rqi.to_ie();
    /// assert_eq!(ie.ie_type, IeType::Rqi);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::Rqi, self.marshal().to_vec())
    }
}
