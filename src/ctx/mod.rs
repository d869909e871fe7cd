//! The session and rule control-plane core: per-session rule graphs,
//! process-wide lookup hashes, UE IP allocation, and the PFCP peer registry.
//!
//! This module's pieces are grounded directly on the reference SMF/UPF
//! context (`ogs_pfcp_context_t` and friends), generalized from its
//! intrusive-list, raw-pointer-graph, process-aborting style into owned
//! `Vec`s, id-based weak cross-references, and `Result`-returning fallible
//! paths — see `DESIGN.md` for the specific choices and why.

pub mod hash;
pub mod peer;
pub mod pool;
pub mod session;
pub mod ue_ip;

/// Seconds between the Unix epoch (1970-01-01) and the NTP epoch
/// (1900-01-01), per RFC 5905.
pub const NTP_EPOCH_OFFSET: u64 = 2_208_988_800;

/// Process-start timestamp, in NTP epoch seconds (Unix epoch plus
/// [`NTP_EPOCH_OFFSET`]), for the local Recovery Time Stamp this entity
/// reports to peers.
pub fn pfcp_started() -> u64 {
    let unix_secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    unix_secs + NTP_EPOCH_OFFSET
}
