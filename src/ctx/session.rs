//! The per-session rule graph: PDRs, FARs, URRs, QERs, and an optional BAR,
//! plus the operations PFCP session-modification processing drives them
//! with.

use std::net::IpAddr;

use crate::error::PfcpError;
use crate::ie::apply_action::ApplyAction;
use crate::ie::bar_id::BarId;
use crate::ie::far_id::FarId;
use crate::ie::pdr_id::PdrId;
use crate::ie::precedence::Precedence;
use crate::ie::qer_id::QerId;
use crate::ie::source_interface::SourceInterfaceValue;
use crate::ie::urr_id::UrrId;
use crate::types::Seid;

use super::hash::{self, FarRef, PdrRef};
use super::pool::IdPool;

/// Default per-session rule pool size. The original implementation sizes
/// these from a deployment-wide config value; this crate exposes
/// [`Sess::with_caps`] for callers that need a different bound and defaults
/// to a size comfortable for a single UE session.
pub const DEFAULT_RULE_CAP: u16 = 64;

#[derive(Debug, Clone)]
pub struct Pdr {
    /// Pool-assigned slot, stable for the PDR's lifetime and independent of
    /// its position in `Sess::pdr_list` (which moves under precedence
    /// reordering).
    pub index: u16,
    pub id: PdrId,
    pub precedence: Precedence,
    pub src_if: SourceInterfaceValue,
    pub teid: u32,
    pub qfi: u8,
    pub far_id: Option<FarId>,
    pub urr_id: Option<UrrId>,
    pub qer_id: Option<QerId>,
    hashkey: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Far {
    pub index: u16,
    pub id: FarId,
    pub apply_action: ApplyAction,
    pub outer_header_teid: Option<u32>,
    pub peer_addr: Option<IpAddr>,
    hashkey: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct Urr {
    pub index: u16,
    pub id: UrrId,
}

#[derive(Debug, Clone)]
pub struct Qer {
    pub index: u16,
    pub id: QerId,
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub index: u16,
    pub id: BarId,
}

pub struct Sess {
    pub seid: Seid,
    /// The peer's SEID and address, once known from the peer's F-SEID IE;
    /// `None` before the peer has identified itself (e.g. before a Session
    /// Establishment Response has been sent).
    pub peer_seid: Option<Seid>,
    pub peer_addr: Option<IpAddr>,
    pub pdr_list: Vec<Pdr>,
    pub far_list: Vec<Far>,
    pub urr_list: Vec<Urr>,
    pub qer_list: Vec<Qer>,
    pub bar: Option<Bar>,
    pdr_id_pool: IdPool,
    far_id_pool: IdPool,
    urr_id_pool: IdPool,
    qer_id_pool: IdPool,
    bar_id_pool: IdPool,
}

impl Sess {
    pub fn new(seid: Seid) -> Self {
        Self::with_caps(seid, DEFAULT_RULE_CAP)
    }

    pub fn with_caps(seid: Seid, cap: u16) -> Self {
        Sess {
            seid,
            peer_seid: None,
            peer_addr: None,
            pdr_list: Vec::new(),
            far_list: Vec::new(),
            urr_list: Vec::new(),
            qer_list: Vec::new(),
            bar: None,
            pdr_id_pool: IdPool::new(cap),
            far_id_pool: IdPool::new(cap),
            urr_id_pool: IdPool::new(cap),
            qer_id_pool: IdPool::new(cap),
            bar_id_pool: IdPool::new(cap),
        }
    }
}

fn precedence_insert_position(list: &[Pdr], precedence: Precedence) -> usize {
    list.partition_point(|p| p.precedence.value <= precedence.value)
}

impl Pdr {
    /// Adds a new PDR to `sess`, inserted at the position its precedence
    /// dictates (ascending, ties broken by insertion order).
    pub fn add(
        sess: &mut Sess,
        precedence: Precedence,
        src_if: SourceInterfaceValue,
    ) -> Result<u16, PfcpError> {
        let index = sess.pdr_id_pool.alloc()?;
        let pdr = Pdr {
            index,
            id: PdrId::new(0),
            precedence,
            src_if,
            teid: 0,
            qfi: 0,
            far_id: None,
            urr_id: None,
            qer_id: None,
            hashkey: None,
        };
        let pos = precedence_insert_position(&sess.pdr_list, precedence);
        sess.pdr_list.insert(pos, pdr);
        Ok(index)
    }

    pub fn find(sess: &Sess, id: PdrId) -> Option<&Pdr> {
        sess.pdr_list.iter().find(|p| p.id == id)
    }

    pub fn find_mut(sess: &mut Sess, id: PdrId) -> Option<&mut Pdr> {
        sess.pdr_list.iter_mut().find(|p| p.id == id)
    }

    pub fn find_by_index(sess: &Sess, index: u16) -> Option<&Pdr> {
        sess.pdr_list.iter().find(|p| p.index == index)
    }

    /// Finds the PDR with the given protocol-level id, creating it (with
    /// zero precedence, `Access` source interface) if this is the first
    /// mention.
    pub fn find_or_add(sess: &mut Sess, id: PdrId) -> Result<&mut Pdr, PfcpError> {
        if Pdr::find(sess, id).is_none() {
            let index = Pdr::add(sess, Precedence::new(0), SourceInterfaceValue::Access)?;
            let pdr = sess
                .pdr_list
                .iter_mut()
                .find(|p| p.index == index)
                .expect("just inserted");
            pdr.id = id;
        }
        Ok(Pdr::find_mut(sess, id).expect("present by construction"))
    }

    /// Publishes or refreshes this PDR's hash key from its current TEID and
    /// QFI, unpublishing any previously published key first.
    pub fn publish_hash(sess: &mut Sess, index: u16) {
        let seid = sess.seid;
        let Some(pdr) = sess.pdr_list.iter_mut().find(|p| p.index == index) else {
            return;
        };
        if let Some(old) = pdr.hashkey.take() {
            hash::pdr_hash_remove(old);
        }
        if pdr.teid == 0 {
            return;
        }
        let key = hash::pdr_hash_key(pdr.teid, pdr.qfi);
        pdr.hashkey = Some(key);
        hash::pdr_hash_set(
            key,
            PdrRef {
                seid,
                pdr_id: pdr.id,
            },
        );
    }

    pub fn reorder_by_precedence(
        sess: &mut Sess,
        id: PdrId,
        new_precedence: Precedence,
    ) -> Result<(), PfcpError> {
        let pos = sess
            .pdr_list
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PfcpError::invalid_value("PDR", "id", "no such PDR in session"))?;
        let mut pdr = sess.pdr_list.remove(pos);
        pdr.precedence = new_precedence;
        let insert_at = precedence_insert_position(&sess.pdr_list, new_precedence);
        sess.pdr_list.insert(insert_at, pdr);
        Ok(())
    }

    pub fn remove(sess: &mut Sess, index: u16) {
        let Some(pos) = sess.pdr_list.iter().position(|p| p.index == index) else {
            return;
        };
        let pdr = sess.pdr_list.remove(pos);
        if let Some(key) = pdr.hashkey {
            hash::pdr_hash_remove(key);
        }
        sess.pdr_id_pool.free(pdr.index);
    }

    pub fn remove_all(sess: &mut Sess) {
        let indices: Vec<u16> = sess.pdr_list.iter().map(|p| p.index).collect();
        for index in indices {
            Pdr::remove(sess, index);
        }
    }
}

impl Far {
    pub fn add(sess: &mut Sess) -> Result<u16, PfcpError> {
        let index = sess.far_id_pool.alloc()?;
        sess.far_list.push(Far {
            index,
            id: FarId::new(0),
            apply_action: ApplyAction::FORW,
            outer_header_teid: None,
            peer_addr: None,
            hashkey: None,
        });
        Ok(index)
    }

    pub fn find(sess: &Sess, id: FarId) -> Option<&Far> {
        sess.far_list.iter().find(|f| f.id == id)
    }

    pub fn find_mut(sess: &mut Sess, id: FarId) -> Option<&mut Far> {
        sess.far_list.iter_mut().find(|f| f.id == id)
    }

    pub fn find_or_add(sess: &mut Sess, id: FarId) -> Result<&mut Far, PfcpError> {
        if Far::find(sess, id).is_none() {
            let index = Far::add(sess)?;
            sess.far_list
                .iter_mut()
                .find(|f| f.index == index)
                .expect("just inserted")
                .id = id;
        }
        Ok(Far::find_mut(sess, id).expect("present by construction"))
    }

    /// Publishes or refreshes this FAR's hash key from its current outer
    /// header TEID and peer address. Both must be set; otherwise the key is
    /// left unpublished (the FAR is not yet ready to carry downlink
    /// traffic).
    pub fn publish_hash(sess: &mut Sess, id: FarId) {
        let seid = sess.seid;
        let Some(far) = Far::find_mut(sess, id) else {
            return;
        };
        if let Some(old) = far.hashkey.take() {
            hash::far_hash_remove(&old);
        }
        let (Some(teid), Some(addr)) = (far.outer_header_teid, far.peer_addr) else {
            return;
        };
        let key = hash::far_hash_key(teid, addr);
        far.hashkey = Some(key.clone());
        hash::far_hash_set(key, FarRef { seid, far_id: id });
    }

    /// Removes the FAR, clearing any PDR in the session that still
    /// references it so no dangling cross-reference survives.
    pub fn remove(sess: &mut Sess, id: FarId) {
        for pdr in sess.pdr_list.iter_mut() {
            if pdr.far_id == Some(id) {
                pdr.far_id = None;
            }
        }
        let Some(pos) = sess.far_list.iter().position(|f| f.id == id) else {
            return;
        };
        let far = sess.far_list.remove(pos);
        if let Some(key) = far.hashkey {
            hash::far_hash_remove(&key);
        }
        sess.far_id_pool.free(far.index);
    }

    pub fn remove_all(sess: &mut Sess) {
        let ids: Vec<FarId> = sess.far_list.iter().map(|f| f.id).collect();
        for id in ids {
            Far::remove(sess, id);
        }
    }
}

impl Urr {
    pub fn add(sess: &mut Sess) -> Result<u16, PfcpError> {
        let index = sess.urr_id_pool.alloc()?;
        sess.urr_list.push(Urr {
            index,
            id: UrrId::new(0),
        });
        Ok(index)
    }

    pub fn find(sess: &Sess, id: &UrrId) -> Option<&Urr> {
        sess.urr_list.iter().find(|u| &u.id == id)
    }

    pub fn find_or_add(sess: &mut Sess, id: UrrId) -> Result<&mut Urr, PfcpError> {
        if Urr::find(sess, &id).is_none() {
            let index = Urr::add(sess)?;
            sess.urr_list
                .iter_mut()
                .find(|u| u.index == index)
                .expect("just inserted")
                .id = id.clone();
        }
        Ok(sess
            .urr_list
            .iter_mut()
            .find(|u| u.id == id)
            .expect("present by construction"))
    }

    pub fn remove(sess: &mut Sess, id: &UrrId) {
        for pdr in sess.pdr_list.iter_mut() {
            if pdr.urr_id.as_ref() == Some(id) {
                pdr.urr_id = None;
            }
        }
        let Some(pos) = sess.urr_list.iter().position(|u| &u.id == id) else {
            return;
        };
        let urr = sess.urr_list.remove(pos);
        sess.urr_id_pool.free(urr.index);
    }

    pub fn remove_all(sess: &mut Sess) {
        let ids: Vec<UrrId> = sess.urr_list.iter().map(|u| u.id.clone()).collect();
        for id in ids {
            Urr::remove(sess, &id);
        }
    }
}

impl Qer {
    pub fn add(sess: &mut Sess) -> Result<u16, PfcpError> {
        let index = sess.qer_id_pool.alloc()?;
        sess.qer_list.push(Qer {
            index,
            id: QerId::new(0),
        });
        Ok(index)
    }

    pub fn find(sess: &Sess, id: QerId) -> Option<&Qer> {
        sess.qer_list.iter().find(|q| q.id == id)
    }

    pub fn find_or_add(sess: &mut Sess, id: QerId) -> Result<&mut Qer, PfcpError> {
        if Qer::find(sess, id).is_none() {
            let index = Qer::add(sess)?;
            sess.qer_list
                .iter_mut()
                .find(|q| q.index == index)
                .expect("just inserted")
                .id = id;
        }
        Ok(sess
            .qer_list
            .iter_mut()
            .find(|q| q.id == id)
            .expect("present by construction"))
    }

    pub fn remove(sess: &mut Sess, id: QerId) {
        for pdr in sess.pdr_list.iter_mut() {
            if pdr.qer_id == Some(id) {
                pdr.qer_id = None;
            }
        }
        let Some(pos) = sess.qer_list.iter().position(|q| q.id == id) else {
            return;
        };
        let qer = sess.qer_list.remove(pos);
        sess.qer_id_pool.free(qer.index);
    }

    pub fn remove_all(sess: &mut Sess) {
        let ids: Vec<QerId> = sess.qer_list.iter().map(|q| q.id).collect();
        for id in ids {
            Qer::remove(sess, id);
        }
    }
}

impl Bar {
    /// Installs a fresh, empty BAR on `sess`. At most one BAR may exist per
    /// session; callers that need to change which BAR is attached go
    /// through [`Bar::find_or_add`], not a second call to `add`.
    pub fn add(sess: &mut Sess) -> Result<u16, PfcpError> {
        let index = sess.bar_id_pool.alloc()?;
        sess.bar = Some(Bar {
            index,
            id: BarId::new(0),
        });
        Ok(index)
    }

    pub fn find(sess: &Sess, id: &BarId) -> Option<&Bar> {
        sess.bar.as_ref().filter(|b| &b.id == id)
    }

    /// Finds the BAR with the given protocol-level id. Since a session
    /// carries at most one BAR, a mismatched id replaces whatever BAR is
    /// currently attached rather than adding a second one.
    pub fn find_or_add(sess: &mut Sess, id: BarId) -> Result<&mut Bar, PfcpError> {
        if Bar::find(sess, &id).is_none() {
            Bar::remove_all(sess);
            Bar::add(sess)?;
            sess.bar.as_mut().expect("just inserted").id = id;
        }
        Ok(sess.bar.as_mut().expect("present by construction"))
    }

    pub fn remove(sess: &mut Sess, id: &BarId) {
        if sess.bar.as_ref().map(|b| &b.id == id).unwrap_or(false) {
            Bar::remove_all(sess);
        }
    }

    pub fn remove_all(sess: &mut Sess) {
        if let Some(bar) = sess.bar.take() {
            sess.bar_id_pool.free(bar.index);
        }
    }
}

pub fn associate_far(pdr: &mut Pdr, far: &Far) {
    pdr.far_id = Some(far.id);
}

pub fn associate_urr(pdr: &mut Pdr, urr: &Urr) {
    pdr.urr_id = Some(urr.id.clone());
}

pub fn associate_qer(pdr: &mut Pdr, qer: &Qer) {
    pdr.qer_id = Some(qer.id);
}

/// The last PDR in precedence order whose source interface matches — a
/// fallback classifier for traffic that no higher-precedence PDR claimed.
pub fn sess_default_pdr(sess: &Sess, src_if: SourceInterfaceValue) -> Option<&Pdr> {
    sess.pdr_list.iter().rev().find(|p| p.src_if == src_if)
}

pub fn sess_clear(sess: &mut Sess) {
    Pdr::remove_all(sess);
    Far::remove_all(sess);
    Urr::remove_all(sess);
    Qer::remove_all(sess);
    Bar::remove_all(sess);
}
