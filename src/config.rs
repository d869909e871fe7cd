//! Deserializable configuration surface mirroring the YAML shape a caller
//! loads at startup and hands into this crate's init functions
//! (`Subnet::from_config`, `PfcpNode::from_config`).
//!
//! This crate never parses YAML itself: a caller deserializes these structs
//! from whatever `serde_yaml`-compatible source they already load.

use serde::Deserialize;

use crate::error::PfcpError;

/// The PFCP UDP port assigned by 3GPP TS 29.244.
pub const DEFAULT_PFCP_PORT: u16 = 8805;
/// Default TUN device name for the UE IP datapath.
pub const DEFAULT_TUN_IFNAME: &str = "ogstun";

fn default_pfcp_port() -> u16 {
    DEFAULT_PFCP_PORT
}

fn default_tun_ifname() -> String {
    DEFAULT_TUN_IFNAME.to_string()
}

/// One local PFCP listening address, under a local role's `pfcp:` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalPfcpConfig {
    pub family: Option<String>,
    pub addr: Option<String>,
    pub name: Option<String>,
    #[serde(default = "default_pfcp_port")]
    pub port: u16,
    #[serde(default = "default_tun_ifname")]
    pub dev: String,
}

/// One local PDN/subnet definition, under a local role's `pdn:` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalPdnConfig {
    pub addr: String,
    #[serde(default)]
    pub apn: Option<String>,
    #[serde(default)]
    pub dnn: Option<String>,
    #[serde(default = "default_tun_ifname")]
    pub dev: String,
    #[serde(default)]
    pub range: Vec<(String, String)>,
}

/// One remote PFCP peer definition, under a remote role's `pfcp:` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemotePfcpConfig {
    pub family: Option<String>,
    pub addr: Option<String>,
    pub name: Option<String>,
    #[serde(default = "default_pfcp_port")]
    pub port: u16,
    #[serde(default)]
    pub tac: Vec<u16>,
    #[serde(default)]
    pub apn: Vec<String>,
    #[serde(default)]
    pub dnn: Vec<String>,
    #[serde(default)]
    pub e_cell_id: Vec<u32>,
    #[serde(default)]
    pub nr_cell_id: Vec<u64>,
    #[serde(default)]
    pub rr: bool,
}

/// A missing local PFCP binding is a hard configuration error.
pub fn validate_local_pfcp(configs: &[LocalPfcpConfig]) -> Result<(), PfcpError> {
    if configs.is_empty() {
        log::error!("configuration error: no local pfcp binding configured");
        return Err(PfcpError::invalid_value(
            "configuration",
            "pfcp",
            "at least one local PFCP binding is required",
        ));
    }
    Ok(())
}
