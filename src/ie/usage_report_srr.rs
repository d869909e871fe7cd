//! Usage Report Within Session Report Request IE implementation.
//!
//! Per 3GPP TS 29.244 Section 8.2.80, the Usage Report Within Session
//! Report Request IE is used to report usage information within a
//! PFCP Session Report Request message.
//!
//! This IE has the same structure as Usage Report (IE 144) but uses IE type 80
//! to indicate it appears within a Session Report Request message.

use crate::error::PfcpError;
use crate::ie::usage_report::UsageReport;
use crate::ie::{Ie, IeType};

/// Usage Report Within Session Report Request Information Element.
///
/// This is a context-specific wrapper around the core UsageReport structure.
/// It contains the same fields and behavior as UsageReport, but with IE type 80
/// to indicate it appears in a Session Report Request message.
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
/// use pfcp_core::ie::usage_report_srr::UsageReportSrr;
/// use pfcp_core::ie::usage_report::UsageReportBuilder;
/// use pfcp_core::ie::urr_id::UrrId;
/// use pfcp_core::ie::sequence_number::SequenceNumber;
///
/// let usage_report = UsageReportBuilder::periodic_usage_report(
///     UrrId::new(1),
///     SequenceNumber::new(42)
/// ).build().unwrap();
///
/// let srr_report = UsageReportSrr::new(usage_report);
/// let ie = srr_report.to_ie();
/// assert_eq!(ie.ie_type, pfcp_core::ie::IeType::UsageReportWithinSessionReportRequest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReportSrr {
    /// The underlying usage report data
    pub report: UsageReport,
}

impl UsageReportSrr {
    /// Creates a new Usage Report Within Session Report Request.
    ///
    /// # Arguments
    /// * `report` - The underlying UsageReport containing measurement data
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::usage_report_srr::UsageReportSrr;
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
    /// let srr_report = UsageReportSrr::new(report);
    /// ```
    pub fn new(report: UsageReport) -> Self {
        UsageReportSrr { report }
    }

    /// Marshals the Usage Report Within Session Report Request to bytes.
    ///
    /// # Returns
    /// A vector containing the marshaled usage report payload (child IEs).
    pub fn marshal(&self) -> Vec<u8> {
        self.report.marshal()
    }

    /// Unmarshals a Usage Report Within Session Report Request from bytes.
    ///
    /// # Arguments
    /// * `data` - The byte slice containing the usage report payload
    ///
    /// # Returns
    /// A `UsageReportSrr` instance or an error if unmarshaling fails.
    ///
    /// # Errors
    /// Returns `PfcpError` if:
    /// - Required fields (URR ID, UR-SEQN, Usage Report Trigger) are missing
    /// - Any child IE cannot be parsed
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        Ok(UsageReportSrr {
            report: UsageReport::unmarshal(data)?,
        })
    }

    /// Wraps the Usage Report in a generic IE with type UsageReportWithinSessionReportRequest.
    ///
    /// # Returns
    /// An `Ie` with type 80 and the marshaled payload.
    ///
    /// # Note
    /// This is equivalent to calling `UsageReport::to_ie()` directly, as the default
    /// `to_ie()` method on UsageReport uses IE type 80.
    pub fn to_ie(&self) -> Ie {
        Ie::new(
            IeType::UsageReportWithinSessionReportRequest,
            self.marshal(),
        )
    }
}
