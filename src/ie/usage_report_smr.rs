//! Usage Report Within Session Modification Response IE implementation.
//!
//! Per 3GPP TS 29.244 Section 8.2.78, the Usage Report Within Session
//! Modification Response IE is used to report usage information in response
//! to a PFCP Session Modification Request.
//!
//! This IE has the same structure as Usage Report (IE 144) but uses IE type 78
//! to indicate it appears within a Session Modification Response message.

use crate::ie::usage_report::UsageReport;
use crate::ie::{Ie, IeType};
use std::io;

/// Usage Report Within Session Modification Response Information Element.
///
/// This is a context-specific wrapper around the core UsageReport structure.
/// It contains the same fields and behavior as UsageReport, but with IE type 78
/// to indicate it appears in a Session Modification Response message.
///
/// # Structure
/// Identical to UsageReport (IE 144), containing:
/// - URR ID (mandatory)
/// - UR-SEQN (mandatory)
/// - Usage Report Trigger (mandatory)
/// - Plus optional measurement, quota, and extended IEs
///
/// # Example
/// ```
/// use pfcp_core::ie::usage_report_smr::UsageReportSmr;
/// use pfcp_core::ie::usage_report::UsageReportBuilder;
/// use pfcp_core::ie::urr_id::UrrId;
/// use pfcp_core::ie::sequence_number::SequenceNumber;
///
/// let usage_report = UsageReportBuilder::quota_exhausted_report(
///     UrrId::new(1),
///     SequenceNumber::new(42)
/// ).build().unwrap();
///
/// let smr_report = UsageReportSmr::new(usage_report);
/// let ie = smr_report.to_ie();
/// assert_eq!(ie.ie_type, pfcp_core::ie::IeType::UsageReportWithinSessionModificationResponse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReportSmr {
    /// The underlying usage report data
    pub report: UsageReport,
}

impl UsageReportSmr {
    /// Creates a new Usage Report Within Session Modification Response.
    ///
    /// # Arguments
    /// * `report` - The underlying UsageReport containing measurement data
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::usage_report_smr::UsageReportSmr;
    /// use pfcp_core::ie::usage_report::UsageReport;
    /// use pfcp_core::ie::urr_id::UrrId;
    /// use pfcp_core::ie::sequence_number::SequenceNumber;
    /// use pfcp_core::ie::usage_report_trigger::UsageReportTrigger;
    ///
    /// let report = UsageReport::new(
    ///     UrrId::new(1),
    ///     SequenceNumber::new(42),
    ///     UsageReportTrigger::PERIO
    /// );
    /// let smr_report = UsageReportSmr::new(report);
    /// ```
    pub fn new(report: UsageReport) -> Self {
        UsageReportSmr { report }
    }

    /// Marshals the Usage Report Within Session Modification Response to bytes.
    ///
    /// # Returns
    /// A vector containing the marshaled usage report payload (child IEs).
    pub fn marshal(&self) -> Vec<u8> {
        self.report.marshal()
    }

    /// Unmarshals a Usage Report Within Session Modification Response from bytes.
    ///
    /// # Arguments
    /// * `data` - The byte slice containing the usage report payload
    ///
    /// # Returns
    /// A `UsageReportSmr` instance or an error if unmarshaling fails.
    ///
    /// # Errors
    /// Returns `io::Error` if:
    /// - Required fields (URR ID, UR-SEQN, Usage Report Trigger) are missing
    /// - Any child IE cannot be parsed
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        Ok(UsageReportSmr {
            report: UsageReport::unmarshal(data)?,
        })
    }

    /// Wraps the Usage Report in a generic IE with type UsageReportWithinSessionModificationResponse.
    ///
    /// # Returns
    /// An `Ie` with type 78 and the marshaled payload.
    pub fn to_ie(&self) -> Ie {
        Ie::new(
            IeType::UsageReportWithinSessionModificationResponse,
            self.marshal(),
        )
    }
}
