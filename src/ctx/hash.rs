//! Process-wide PDR and FAR lookup hashes, keyed on wire-visible identifiers
//! rather than session-internal ids, so the datapath can resolve an incoming
//! packet's TEID/QFI or a GTP-U Error Indication straight to the owning
//! session and rule without scanning every session.
//!
//! These are the only mutex-guarded state in this crate; everything else is
//! session-local and single-writer.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::gtpu::error_indication;
use crate::ie::far_id::FarId;
use crate::ie::pdr_id::PdrId;
use crate::types::Seid;
use crate::error::PfcpError;

/// Identifies a PDR or FAR by the session that owns it and its rule id
/// within that session, so the hash never has to own (or borrow from) the
/// session graph directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdrRef {
    pub seid: Seid,
    pub pdr_id: PdrId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarRef {
    pub seid: Seid,
    pub far_id: FarId,
}

fn pdr_hash() -> &'static Mutex<HashMap<u64, PdrRef>> {
    static PDR_HASH: OnceLock<Mutex<HashMap<u64, PdrRef>>> = OnceLock::new();
    PDR_HASH.get_or_init(|| Mutex::new(HashMap::new()))
}

fn far_hash() -> &'static Mutex<HashMap<Vec<u8>, FarRef>> {
    static FAR_HASH: OnceLock<Mutex<HashMap<Vec<u8>, FarRef>>> = OnceLock::new();
    FAR_HASH.get_or_init(|| Mutex::new(HashMap::new()))
}

fn lock<T>(m: &'static Mutex<T>) -> MutexGuard<'static, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// `(teid << 8) | qfi`, computed in the 64-bit domain so a full 32-bit TEID
/// never truncates.
pub fn pdr_hash_key(teid: u32, qfi: u8) -> u64 {
    ((teid as u64) << 8) | qfi as u64
}

pub fn pdr_hash_set(key: u64, pdr_ref: PdrRef) {
    lock(pdr_hash()).insert(key, pdr_ref);
}

pub fn pdr_hash_remove(key: u64) {
    lock(pdr_hash()).remove(&key);
}

pub fn pdr_hash_get(key: u64) -> Option<PdrRef> {
    lock(pdr_hash()).get(&key).copied()
}

/// `teid` (4 bytes, big-endian) concatenated with the peer's IPv4 or IPv6
/// address bytes.
pub fn far_hash_key(teid: u32, peer_addr: IpAddr) -> Vec<u8> {
    let mut key = teid.to_be_bytes().to_vec();
    match peer_addr {
        IpAddr::V4(v4) => key.extend_from_slice(&v4.octets()),
        IpAddr::V6(v6) => key.extend_from_slice(&v6.octets()),
    }
    key
}

pub fn far_hash_set(key: Vec<u8>, far_ref: FarRef) {
    lock(far_hash()).insert(key, far_ref);
}

pub fn far_hash_remove(key: &[u8]) {
    lock(far_hash()).remove(key);
}

pub fn far_hash_get(key: &[u8]) -> Option<FarRef> {
    lock(far_hash()).get(key).copied()
}

/// Parses a received GTP-U Error Indication and resolves it straight to the
/// FAR that owns the tunnel it names.
pub fn far_find_by_error_indication(packet: &[u8]) -> Result<Option<FarRef>, PfcpError> {
    let (teid, peer_addr) = error_indication::parse(packet)?;
    let key = far_hash_key(teid, peer_addr);
    Ok(far_hash_get(&key))
}

/// Test-only: drop every entry so property tests over fixed keys don't leak
/// state into one another via the process-wide singleton.
#[cfg(test)]
pub(crate) fn clear_all() {
    lock(pdr_hash()).clear();
    lock(far_hash()).clear();
}
