// src/ie/query_urr.rs

//! Query URR Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.77, the Query URR IE is used to request
//! usage reporting information for a specific URR (Usage Reporting Rule).

use crate::ie::urr_id::UrrId;
use crate::ie::{Ie, IeType};
use std::io;

/// Represents the Query URR IE.
///
/// This IE is used in Session Modification Request messages to query the
/// current usage reporting state for a specific URR without modifying it.
///
/// # Structure
///
/// - URR ID (mandatory) - Identifies the URR to query
///
/// # Examples
///
/// ```
/// use pfcp_core::ie::query_urr::QueryUrr;
/// use pfcp_core::ie::urr_id::UrrId;
///
/// // Create a Query URR IE
/// let urr_id = UrrId::new(1);
/// let query_urr = QueryUrr::new(urr_id);
///
/// // Marshal and unmarshal
/// let marshaled = query_urr.marshal();
/// let unmarshaled = QueryUrr::unmarshal(&marshaled).unwrap();
/// assert_eq!(unmarshaled, query_urr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryUrr {
    /// URR ID (mandatory)
    pub urr_id: UrrId,
}

impl QueryUrr {
    /// Creates a new Query URR IE.
    ///
    /// # Arguments
    ///
    /// * `urr_id` - The URR identifier to query
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp_core::ie::query_urr::QueryUrr;
    /// use pfcp_core::ie::urr_id::UrrId;
    ///
    /// let urr_id = UrrId::new(5);
    /// let query_urr = QueryUrr::new(urr_id);
    /// assert_eq!(query_urr.urr_id.id, 5);
    /// ```
    pub fn new(urr_id: UrrId) -> Self {
        QueryUrr { urr_id }
    }

    /// Marshals the Query URR into a byte vector.
    ///
    /// The Query URR contains only the URR ID (4 bytes).
    pub fn marshal(&self) -> Vec<u8> {
        self.urr_id.marshal().to_vec()
    }

    /// Unmarshals a byte slice into a Query URR IE.
    ///
    /// # Arguments
    ///
    /// * `data` - The byte slice to unmarshal (must be 4 bytes for URR ID)
    ///
    /// # Returns
    ///
    /// Returns `Ok(QueryUrr)` on success, or an error if the data is invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data is not exactly 4 bytes (URR ID length)
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        Ok(QueryUrr {
            urr_id: UrrId::unmarshal(data)?,
        })
    }

    /// Wraps the Query URR in an IE.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp_core::ie::query_urr::QueryUrr;
    /// use pfcp_core::ie::urr_id::UrrId;
    /// use pfcp_core::ie::IeType;
    ///
    /// let query_urr = QueryUrr::new(UrrId::new(10));
    /// let ie = query_urr.to_ie();
    /// assert_eq!(ie.ie_type, IeType::QueryUrr);
    /// ```
    pub fn to_ie(self) -> Ie {
        Ie::new(IeType::QueryUrr, self.marshal())
    }
}
