//! Bearer Quality of Service (Bearer QoS).
//!
//! 3GPP TS 29.274 §8.15 / TS 24.008. Fixed 22-byte payload: a flags byte,
//! a QCI byte, then four 40-bit big-endian bit-rate fields.

use crate::error::PfcpError;
use crate::ie::IeType;
use crate::wire::{buffer_to_u64, u64_to_buffer};

pub const BEARER_QOS_LEN: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearerQos {
    pub pci: bool,
    pub pl: u8,
    pub pvi: bool,
    pub qci: u8,
    pub ul_mbr: u64,
    pub dl_mbr: u64,
    pub ul_gbr: u64,
    pub dl_gbr: u64,
}

impl BearerQos {
    pub fn parse(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::parse_inner(payload)
            .inspect_err(|e| log::warn!("failed to decode Bearer QoS: {}", e))
    }

    fn parse_inner(payload: &[u8]) -> Result<Self, PfcpError> {
        if payload.len() != BEARER_QOS_LEN {
            return Err(PfcpError::invalid_length(
                "Bearer QoS",
                IeType::Unknown,
                BEARER_QOS_LEN,
                payload.len(),
            ));
        }

        let pci = payload[0] & 0x40 != 0;
        let pl = (payload[0] >> 2) & 0x0F;
        let pvi = payload[0] & 0x01 != 0;
        let qci = payload[1];

        let ul_mbr = buffer_to_u64(&payload[2..7], 5)?;
        let dl_mbr = buffer_to_u64(&payload[7..12], 5)?;
        let ul_gbr = buffer_to_u64(&payload[12..17], 5)?;
        let dl_gbr = buffer_to_u64(&payload[17..22], 5)?;

        Ok(BearerQos {
            pci,
            pl,
            pvi,
            qci,
            ul_mbr,
            dl_mbr,
            ul_gbr,
            dl_gbr,
        })
    }

    pub fn build(&self) -> Result<Vec<u8>, PfcpError> {
        if self.pl > 0x0F {
            return Err(PfcpError::invalid_value(
                "Bearer QoS",
                "pl",
                "priority level must fit in 4 bits",
            ));
        }

        let mut out = vec![0u8; BEARER_QOS_LEN];
        out[0] = (if self.pci { 0x40 } else { 0x00 })
            | ((self.pl & 0x0F) << 2)
            | (if self.pvi { 0x01 } else { 0x00 });
        out[1] = self.qci;

        u64_to_buffer(self.ul_mbr, 5, &mut out[2..7])?;
        u64_to_buffer(self.dl_mbr, 5, &mut out[7..12])?;
        u64_to_buffer(self.ul_gbr, 5, &mut out[12..17])?;
        u64_to_buffer(self.dl_gbr, 5, &mut out[17..22])?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BearerQos {
        BearerQos {
            pci: true,
            pl: 9,
            pvi: false,
            qci: 9,
            ul_mbr: 1_000_000,
            dl_mbr: 10_000_000,
            ul_gbr: 0,
            dl_gbr: 0,
        }
    }

    #[test]
    fn round_trips_sample_values() {
        let qos = sample();
        let bytes = qos.build().unwrap();
        assert_eq!(bytes.len(), BEARER_QOS_LEN);
        assert_eq!(BearerQos::parse(&bytes).unwrap(), qos);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(BearerQos::parse(&[0u8; 21]).is_err());
        assert!(BearerQos::parse(&[0u8; 23]).is_err());
    }

    #[test]
    fn rejects_priority_level_out_of_range() {
        let mut qos = sample();
        qos.pl = 0x1F;
        assert!(qos.build().is_err());
    }

    #[test]
    fn flags_pack_into_first_byte() {
        let qos = BearerQos {
            pci: false,
            pl: 0,
            pvi: true,
            ..sample()
        };
        let bytes = qos.build().unwrap();
        assert_eq!(bytes[0], 0x01);
    }
}
