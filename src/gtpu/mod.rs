//! GTP-U (3GPP TS 29.281) message builders: Echo Request/Response and Error
//! Indication.
//!
//! These are hand-rolled rather than routed through [`crate::message`],
//! which implements the PFCP wire format, not GTP-U's. GTP-U shares PFCP's
//! big-endian, flag-gated-optional-field conventions but is a distinct
//! protocol running on its own UDP port.

pub mod echo;
pub mod error_indication;
pub mod header;

/// GTP-U message type octet for Echo Request (3GPP TS 29.281 Table 6.1-1).
pub const MSG_TYPE_ECHO_REQUEST: u8 = 1;
/// GTP-U message type octet for Echo Response.
pub const MSG_TYPE_ECHO_RESPONSE: u8 = 2;
/// GTP-U message type octet for Error Indication.
pub const MSG_TYPE_ERROR_INDICATION: u8 = 26;

/// Base GTP-U v1 header flags with no optional fields set: version 1,
/// protocol type = GTP (not GTP'), E/S/PN all clear.
pub const FLAGS_BASE: u8 = 0x30;
/// Base flags with the extension-header bit (E) set, used when a
/// PDU-Session-Container extension header follows.
pub const FLAGS_WITH_EXTENSION: u8 = 0x34;

/// PDU-Session-Container extension header type (3GPP TS 38.415).
pub const EXT_HEADER_TYPE_PDU_SESSION_CONTAINER: u8 = 0x85;
/// Sentinel terminating a GTP-U extension header chain.
pub const NO_MORE_EXTENSION_HEADERS: u8 = 0x00;
/// PDU-session-container PDU type for downlink PDU session information.
pub const PDU_TYPE_DL_PDU_SESSION_INFORMATION: u8 = 0x00;

/// TLV type for "Tunnel Endpoint Identifier Data I" in an Error Indication.
pub const TLV_TYPE_TEID_DATA_I: u8 = 16;
/// TLV type for "GTP-U Peer Address" in an Error Indication.
pub const TLV_TYPE_GTPU_PEER_ADDRESS: u8 = 133;

/// TLV type carrying the Recovery (restart counter) IE in Echo messages.
pub const TLV_TYPE_RECOVERY: u8 = 14;
/// TLV type this crate uses for the Sending/Recovery Node Features bitmap
/// exchanged on 5G-capable GTP-U Echo messages; there is no single
/// universally assigned value for this extension, so it is treated as a
/// vendor-specific octet alongside Recovery rather than cited against a
/// specific 3GPP clause.
pub const TLV_TYPE_SENDING_NODE_FEATURES: u8 = 142;
