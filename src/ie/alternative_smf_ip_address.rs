//! Alternative SMF IP Address Information Element.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Represents an Alternative SMF IP Address IE.
///
/// This IE indicates the alternative SMF for PFCP sessions which are associated
/// with the FQ-CSID(s) or Group ID(s), or which have their CP F-SEIDs containing the SMF IP Address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeSmfIpAddress {
    pub ipv4_address: Option<Ipv4Addr>,
    pub ipv6_address: Option<Ipv6Addr>,
    pub preferred_pfcp_entity: bool,
}

impl AlternativeSmfIpAddress {
    /// Creates a new Alternative SMF IP Address with IPv4 only.
    pub fn new_ipv4(addr: Ipv4Addr) -> Self {
        AlternativeSmfIpAddress {
            ipv4_address: Some(addr),
            ipv6_address: None,
            preferred_pfcp_entity: false,
        }
    }

    /// Creates a new Alternative SMF IP Address with IPv6 only.
    pub fn new_ipv6(addr: Ipv6Addr) -> Self {
        AlternativeSmfIpAddress {
            ipv4_address: None,
            ipv6_address: Some(addr),
            preferred_pfcp_entity: false,
        }
    }

    /// Creates a new Alternative SMF IP Address with both IPv4 and IPv6.
    pub fn new_dual_stack(ipv4: Ipv4Addr, ipv6: Ipv6Addr) -> Self {
        AlternativeSmfIpAddress {
            ipv4_address: Some(ipv4),
            ipv6_address: Some(ipv6),
            preferred_pfcp_entity: false,
        }
    }

    /// Sets the Preferred PFCP Entity flag.
    pub fn with_preferred_pfcp_entity(mut self, preferred: bool) -> Self {
        self.preferred_pfcp_entity = preferred;
        self
    }

    /// Marshals the Alternative SMF IP Address into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        let mut data = Vec::new();

        // Build flags byte
        let mut flags = 0u8;
        if self.ipv6_address.is_some() {
            flags |= 0x01; // V6 flag (bit 1)
        }
        if self.ipv4_address.is_some() {
            flags |= 0x02; // V4 flag (bit 2)
        }
        if self.preferred_pfcp_entity {
            flags |= 0x04; // PPE flag (bit 3)
        }
        // Bits 4-8 are spare and remain 0

        data.push(flags);

        // Add IPv4 address if present
        if let Some(ipv4) = &self.ipv4_address {
            data.extend_from_slice(&ipv4.octets());
        }

        // Add IPv6 address if present
        if let Some(ipv6) = &self.ipv6_address {
            data.extend_from_slice(&ipv6.octets());
        }

        data
    }

    /// Unmarshals an Alternative SMF IP Address from a byte slice.
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "Alternative SMF IP Address",
                IeType::AlternativeSmfIpAddress,
                1,
                0,
            ));
        }

        let flags = data[0];
        let v6 = (flags & 0x01) != 0; // bit 1
        let v4 = (flags & 0x02) != 0; // bit 2
        let ppe = (flags & 0x04) != 0; // bit 3

        // Check spare bits are zero
        if (flags & 0xF8) != 0 {
            return Err(PfcpError::invalid_value(
                "Alternative SMF IP Address flags",
                format!("0x{:02X}", flags),
                "spare bits must be zero",
            ));
        }

        // At least one address must be present
        if !v4 && !v6 {
            return Err(PfcpError::invalid_value(
                "Alternative SMF IP Address flags",
                format!("0x{:02X}", flags),
                "at least one IP address must be present",
            ));
        }

        let mut offset = 1;
        let mut ipv4_address = None;
        let mut ipv6_address = None;

        // Parse IPv4 address if present
        if v4 {
            if data.len() < offset + 4 {
                return Err(PfcpError::invalid_length(
                    "Alternative SMF IP Address (IPv4)",
                    IeType::AlternativeSmfIpAddress,
                    offset + 4,
                    data.len(),
                ));
            }
            let mut octets = [0u8; 4];
            octets.copy_from_slice(&data[offset..offset + 4]);
            ipv4_address = Some(Ipv4Addr::from(octets));
            offset += 4;
        }

        // Parse IPv6 address if present
        if v6 {
            if data.len() < offset + 16 {
                return Err(PfcpError::invalid_length(
                    "Alternative SMF IP Address (IPv6)",
                    IeType::AlternativeSmfIpAddress,
                    offset + 16,
                    data.len(),
                ));
            }
            let mut octets = [0u8; 16];
            octets.copy_from_slice(&data[offset..offset + 16]);
            ipv6_address = Some(Ipv6Addr::from(octets));
        }

        Ok(AlternativeSmfIpAddress {
            ipv4_address,
            ipv6_address,
            preferred_pfcp_entity: ppe,
        })
    }

    /// Converts to an IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::AlternativeSmfIpAddress, self.marshal())
    }
}

impl From<Ipv4Addr> for AlternativeSmfIpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        AlternativeSmfIpAddress::new_ipv4(addr)
    }
}

impl From<Ipv6Addr> for AlternativeSmfIpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        AlternativeSmfIpAddress::new_ipv6(addr)
    }
}
