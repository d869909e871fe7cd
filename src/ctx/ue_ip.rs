//! UE IP address allocation from configured subnets.
//!
//! A [`Subnet`] owns a pool of pre-enumerated addresses (minus the network
//! and gateway addresses); [`ue_ip_alloc`]/[`ue_ip_free`] hand them out and
//! take them back, or bypass the pool entirely for a caller-requested static
//! address.

use std::collections::VecDeque;
use std::net::IpAddr;

use crate::error::PfcpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    V4,
    V6,
    /// Matches either family in [`find_subnet`] — mirrors a subnet
    /// configured before its address family is known.
    Unspecified,
}

fn maxbytes(family: Family) -> usize {
    match family {
        Family::V4 => 4,
        Family::V6 => 16,
        Family::Unspecified => 0,
    }
}

fn addr_bytes(addr: IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

fn bytes_to_addr(bytes: &[u8]) -> IpAddr {
    match bytes.len() {
        4 => IpAddr::from(<[u8; 4]>::try_from(bytes).unwrap()),
        16 => IpAddr::from(<[u8; 16]>::try_from(bytes).unwrap()),
        _ => unreachable!("subnet addresses are always 4 or 16 bytes"),
    }
}

/// Big-endian increment-by-one of an arbitrary-length byte buffer, carrying
/// across bytes the way incrementing a multi-byte integer would.
fn increment_be(bytes: &mut [u8]) {
    for byte in bytes.iter_mut().rev() {
        if *byte == 0xFF {
            *byte = 0;
        } else {
            *byte += 1;
            return;
        }
    }
}

fn apply_mask(addr: &[u8], prefix_len: u8) -> Vec<u8> {
    let mut out = addr.to_vec();
    let full_bytes = (prefix_len / 8) as usize;
    let rem_bits = prefix_len % 8;
    for (i, b) in out.iter_mut().enumerate() {
        if i < full_bytes {
            continue;
        } else if i == full_bytes && rem_bits > 0 {
            *b &= !(0xFFu8 >> rem_bits);
        } else if i >= full_bytes {
            *b = 0;
        }
    }
    out
}

fn broadcast_of(network: &[u8], prefix_len: u8) -> Vec<u8> {
    let mut out = network.to_vec();
    let full_bytes = (prefix_len / 8) as usize;
    let rem_bits = prefix_len % 8;
    for (i, b) in out.iter_mut().enumerate() {
        if i < full_bytes {
            continue;
        } else if i == full_bytes && rem_bits > 0 {
            *b |= 0xFFu8 >> rem_bits;
        } else if i >= full_bytes {
            *b = 0xFF;
        }
    }
    out
}

/// A configured sub-range within a subnet's address space; `None` on either
/// end falls back to the subnet's own network/broadcast address.
#[derive(Debug, Clone)]
pub struct Range {
    pub low: Option<IpAddr>,
    pub high: Option<IpAddr>,
}

pub struct Subnet {
    pub family: Family,
    /// Empty string matches any APN.
    pub apn: String,
    pub network: IpAddr,
    pub prefix_len: u8,
    pub gateway: IpAddr,
    pub ranges: Vec<Range>,
    pool: VecDeque<IpAddr>,
}

impl Subnet {
    pub fn new(family: Family, apn: &str, network: IpAddr, prefix_len: u8, gateway: IpAddr) -> Self {
        Subnet {
            family,
            apn: apn.to_string(),
            network,
            prefix_len,
            gateway,
            ranges: Vec::new(),
            pool: VecDeque::new(),
        }
    }

    pub fn available(&self) -> usize {
        self.pool.len()
    }
}

/// Enumerates every usable address in `subnet`'s configured ranges (or the
/// whole subnet if none are configured), excluding the network and gateway
/// addresses, and fills its pool.
pub fn pool_generate(subnet: &mut Subnet) -> Result<(), PfcpError> {
    let maxbytes = maxbytes(subnet.family);
    if maxbytes == 0 {
        return Ok(());
    }

    let network_bytes = apply_mask(&addr_bytes(subnet.network), subnet.prefix_len);
    let broadcast_bytes = broadcast_of(&network_bytes, subnet.prefix_len);
    let gateway_bytes = addr_bytes(subnet.gateway);

    let ranges: Vec<Range> = if subnet.ranges.is_empty() {
        vec![Range {
            low: None,
            high: None,
        }]
    } else {
        subnet.ranges.clone()
    };

    let mut pool = VecDeque::new();
    for range in ranges {
        let start_bytes = range
            .low
            .map(addr_bytes)
            .unwrap_or_else(|| network_bytes.clone());
        let mut end_bytes = range
            .high
            .map(addr_bytes)
            .unwrap_or_else(|| broadcast_bytes.clone());
        if range.high.is_some() {
            increment_be(&mut end_bytes);
        }

        let mut current = start_bytes;
        loop {
            if current == end_bytes {
                break;
            }
            if current != network_bytes && current != gateway_bytes {
                pool.push_back(bytes_to_addr(&current));
            }
            increment_be(&mut current);
        }
    }

    subnet.pool = pool;
    Ok(())
}

pub struct UeIp {
    pub addr: IpAddr,
    pub static_ip: bool,
}

pub fn find_subnet<'a>(subnets: &'a [Subnet], family: Family, apn: &str) -> Option<&'a Subnet> {
    subnets.iter().find(|s| {
        let family_ok = s.family == family || s.family == Family::Unspecified;
        let apn_ok = s.apn.is_empty() || s.apn == apn;
        family_ok && apn_ok
    })
}

fn find_subnet_mut<'a>(subnets: &'a mut [Subnet], family: Family, apn: &str) -> Option<&'a mut Subnet> {
    subnets.iter_mut().find(|s| {
        let family_ok = s.family == family || s.family == Family::Unspecified;
        let apn_ok = s.apn.is_empty() || s.apn == apn;
        family_ok && apn_ok
    })
}

/// Allocates a UE IP address for `apn` in `family`. If `requested_addr` is
/// `Some`, the UE keeps that exact address outside the subnet pool
/// (`static_ip = true`); otherwise the next free pool slot is returned.
pub fn ue_ip_alloc(
    subnets: &mut [Subnet],
    family: Family,
    apn: &str,
    requested_addr: Option<IpAddr>,
) -> Result<UeIp, PfcpError> {
    let subnet = find_subnet_mut(subnets, family, apn).ok_or_else(|| {
        PfcpError::invalid_value(
            "UE IP allocation",
            "subnet",
            "no configured subnet matches the requested family and APN",
        )
    })?;

    if let Some(addr) = requested_addr {
        return Ok(UeIp {
            addr,
            static_ip: true,
        });
    }

    let addr = subnet.pool.pop_front().ok_or_else(|| {
        PfcpError::invalid_value("UE IP allocation", "pool", "subnet address pool exhausted")
    })?;
    Ok(UeIp {
        addr,
        static_ip: false,
    })
}

pub fn ue_ip_free(subnet: &mut Subnet, ue_ip: UeIp) {
    if !ue_ip.static_ip {
        subnet.pool.push_back(ue_ip.addr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn generates_pool_excluding_network_and_gateway() {
        let mut subnet = Subnet::new(Family::V4, "", v4("10.45.0.0"), 16, v4("10.45.0.1"));
        subnet.ranges.push(Range {
            low: Some(v4("10.45.0.10")),
            high: Some(v4("10.45.0.20")),
        });
        pool_generate(&mut subnet).unwrap();

        assert_eq!(subnet.available(), 11);
        assert!(!subnet.pool.contains(&v4("10.45.0.0")));
        assert!(!subnet.pool.contains(&v4("10.45.0.1")));
        assert_eq!(subnet.pool.front().copied(), Some(v4("10.45.0.10")));
    }

    #[test]
    fn dynamic_alloc_then_free_restores_pool_size() {
        let mut subnet = Subnet::new(Family::V4, "internet", v4("10.45.0.0"), 16, v4("10.45.0.1"));
        subnet.ranges.push(Range {
            low: Some(v4("10.45.0.10")),
            high: Some(v4("10.45.0.12")),
        });
        pool_generate(&mut subnet).unwrap();
        let before = subnet.available();

        let mut subnets = vec![subnet];
        let ue_ip = ue_ip_alloc(&mut subnets, Family::V4, "internet", None).unwrap();
        assert!(!ue_ip.static_ip);
        assert_eq!(subnets[0].available(), before - 1);

        ue_ip_free(&mut subnets[0], ue_ip);
        assert_eq!(subnets[0].available(), before);
    }

    #[test]
    fn static_request_bypasses_pool() {
        let mut subnet = Subnet::new(Family::V4, "", v4("10.45.0.0"), 24, v4("10.45.0.1"));
        pool_generate(&mut subnet).unwrap();
        let before = subnet.available();

        let mut subnets = vec![subnet];
        let requested = v4("10.45.9.9");
        let ue_ip = ue_ip_alloc(&mut subnets, Family::V4, "", Some(requested)).unwrap();
        assert!(ue_ip.static_ip);
        assert_eq!(ue_ip.addr, requested);
        assert_eq!(subnets[0].available(), before);
    }

    #[test]
    fn find_subnet_matches_empty_apn_as_wildcard() {
        let subnets = vec![Subnet::new(
            Family::V4,
            "",
            v4("10.45.0.0"),
            24,
            v4("10.45.0.1"),
        )];
        assert!(find_subnet(&subnets, Family::V4, "any.apn").is_some());
    }

    #[test]
    fn find_subnet_rejects_wrong_family() {
        let subnets = vec![Subnet::new(
            Family::V4,
            "",
            v4("10.45.0.0"),
            24,
            v4("10.45.0.1"),
        )];
        assert!(find_subnet(&subnets, Family::V6, "").is_none());
    }

    #[test]
    fn alloc_fails_with_no_matching_subnet() {
        let mut subnets: Vec<Subnet> = Vec::new();
        assert!(ue_ip_alloc(&mut subnets, Family::V4, "internet", None).is_err());
    }
}
