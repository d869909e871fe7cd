//! User Location Information (ULI).
//!
//! 3GPP TS 29.274 §8.21. A flags byte selects which of six fixed-order
//! sub-structures follow: CGI, SAI, RAI, TAI, ECGI, LAI. Each sub-structure
//! carries a PLMN-ID (nibble-swapped BCD, see [`super::decode_plmn`]) plus
//! its own area/cell identifiers.

use crate::error::PfcpError;
use crate::ie::IeType;
use crate::wire::read_u32;

use super::{decode_plmn, encode_plmn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cgi {
    pub mcc: u16,
    pub mnc: u16,
    pub lac: u16,
    pub ci: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sai {
    pub mcc: u16,
    pub mnc: u16,
    pub lac: u16,
    pub sac: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rai {
    pub mcc: u16,
    pub mnc: u16,
    pub lac: u16,
    pub rac: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tai {
    pub mcc: u16,
    pub mnc: u16,
    pub tac: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ecgi {
    pub mcc: u16,
    pub mnc: u16,
    pub eci: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lai {
    pub mcc: u16,
    pub mnc: u16,
    pub lac: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uli {
    pub cgi: Option<Cgi>,
    pub sai: Option<Sai>,
    pub rai: Option<Rai>,
    pub tai: Option<Tai>,
    pub ecgi: Option<Ecgi>,
    pub lai: Option<Lai>,
}

fn need(payload: &[u8], offset: usize, len: usize, field: &str) -> Result<(), PfcpError> {
    if offset + len > payload.len() {
        return Err(PfcpError::invalid_value(
            "ULI",
            field,
            "sub-field exceeds remaining payload",
        ));
    }
    Ok(())
}

impl Uli {
    pub fn parse(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::parse_inner(payload)
            .inspect_err(|e| log::warn!("failed to decode ULI: {}", e))
    }

    fn parse_inner(payload: &[u8]) -> Result<Self, PfcpError> {
        if payload.is_empty() {
            return Err(PfcpError::invalid_length("ULI", IeType::Unknown, 1, 0));
        }

        let flags = payload[0];
        let mut uli = Uli::default();
        let mut offset = 1usize;

        if flags & 0x01 != 0 {
            need(payload, offset, 7, "cgi")?;
            let (mcc, mnc) = decode_plmn([payload[offset], payload[offset + 1], payload[offset + 2]]);
            let lac = u16::from_be_bytes([payload[offset + 3], payload[offset + 4]]);
            let ci = u16::from_be_bytes([payload[offset + 5], payload[offset + 6]]);
            uli.cgi = Some(Cgi { mcc, mnc, lac, ci });
            offset += 7;
        }
        if flags & 0x02 != 0 {
            need(payload, offset, 7, "sai")?;
            let (mcc, mnc) = decode_plmn([payload[offset], payload[offset + 1], payload[offset + 2]]);
            let lac = u16::from_be_bytes([payload[offset + 3], payload[offset + 4]]);
            let sac = u16::from_be_bytes([payload[offset + 5], payload[offset + 6]]);
            uli.sai = Some(Sai { mcc, mnc, lac, sac });
            offset += 7;
        }
        if flags & 0x04 != 0 {
            need(payload, offset, 7, "rai")?;
            let (mcc, mnc) = decode_plmn([payload[offset], payload[offset + 1], payload[offset + 2]]);
            let lac = u16::from_be_bytes([payload[offset + 3], payload[offset + 4]]);
            let rac = u16::from_be_bytes([payload[offset + 5], payload[offset + 6]]);
            uli.rai = Some(Rai { mcc, mnc, lac, rac });
            offset += 7;
        }
        if flags & 0x08 != 0 {
            need(payload, offset, 5, "tai")?;
            let (mcc, mnc) = decode_plmn([payload[offset], payload[offset + 1], payload[offset + 2]]);
            let tac = u16::from_be_bytes([payload[offset + 3], payload[offset + 4]]);
            uli.tai = Some(Tai { mcc, mnc, tac });
            offset += 5;
        }
        if flags & 0x10 != 0 {
            need(payload, offset, 7, "ecgi")?;
            let (mcc, mnc) = decode_plmn([payload[offset], payload[offset + 1], payload[offset + 2]]);
            let eci = read_u32(&payload[offset + 3..offset + 7])?;
            uli.ecgi = Some(Ecgi { mcc, mnc, eci });
            offset += 7;
        }
        if flags & 0x20 != 0 {
            need(payload, offset, 5, "lai")?;
            let (mcc, mnc) = decode_plmn([payload[offset], payload[offset + 1], payload[offset + 2]]);
            let lac = u16::from_be_bytes([payload[offset + 3], payload[offset + 4]]);
            uli.lai = Some(Lai { mcc, mnc, lac });
            offset += 5;
        }

        if offset != payload.len() {
            return Err(PfcpError::invalid_value(
                "ULI",
                "payload",
                "trailing bytes after last enabled sub-field",
            ));
        }

        Ok(uli)
    }

    pub fn build(&self) -> Vec<u8> {
        let mut flags = 0u8;
        if self.cgi.is_some() {
            flags |= 0x01;
        }
        if self.sai.is_some() {
            flags |= 0x02;
        }
        if self.rai.is_some() {
            flags |= 0x04;
        }
        if self.tai.is_some() {
            flags |= 0x08;
        }
        if self.ecgi.is_some() {
            flags |= 0x10;
        }
        if self.lai.is_some() {
            flags |= 0x20;
        }

        let mut out = vec![flags];

        if let Some(cgi) = self.cgi {
            out.extend_from_slice(&encode_plmn(cgi.mcc, cgi.mnc));
            out.extend_from_slice(&cgi.lac.to_be_bytes());
            out.extend_from_slice(&cgi.ci.to_be_bytes());
        }
        if let Some(sai) = self.sai {
            out.extend_from_slice(&encode_plmn(sai.mcc, sai.mnc));
            out.extend_from_slice(&sai.lac.to_be_bytes());
            out.extend_from_slice(&sai.sac.to_be_bytes());
        }
        if let Some(rai) = self.rai {
            out.extend_from_slice(&encode_plmn(rai.mcc, rai.mnc));
            out.extend_from_slice(&rai.lac.to_be_bytes());
            out.extend_from_slice(&rai.rac.to_be_bytes());
        }
        if let Some(tai) = self.tai {
            out.extend_from_slice(&encode_plmn(tai.mcc, tai.mnc));
            out.extend_from_slice(&tai.tac.to_be_bytes());
        }
        if let Some(ecgi) = self.ecgi {
            out.extend_from_slice(&encode_plmn(ecgi.mcc, ecgi.mnc));
            out.extend_from_slice(&ecgi.eci.to_be_bytes());
        }
        if let Some(lai) = self.lai {
            out.extend_from_slice(&encode_plmn(lai.mcc, lai.mnc));
            out.extend_from_slice(&lai.lac.to_be_bytes());
        }

        out
    }
}
