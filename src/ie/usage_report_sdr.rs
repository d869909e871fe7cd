//! Usage Report Within Session Deletion Response IE implementation.
//!
//! Per 3GPP TS 29.244 Section 8.2.79, the Usage Report Within Session
//! Deletion Response IE is used to report usage information in response
//! to a PFCP Session Deletion Request.
//!
//! This IE has the same structure as Usage Report (IE 144) but uses IE type 79
//! to indicate it appears within a Session Deletion Response message.

use crate::error::PfcpError;
use crate::ie::usage_report::UsageReport;
use crate::ie::{Ie, IeType};

/// Usage Report Within Session Deletion Response Information Element.
///
/// This is a context-specific wrapper around the core UsageReport structure.
/// It contains the same fields and behavior as UsageReport, but with IE type 79
/// to indicate it appears in a Session Deletion Response message.
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
/// use pfcp_core::ie::usage_report_sdr::UsageReportSdr;
/// use pfcp_core::ie::usage_report::UsageReportBuilder;
/// use pfcp_core::ie::urr_id::UrrId;
/// use pfcp_core::ie::sequence_number::SequenceNumber;
///
/// let usage_report = UsageReportBuilder::stop_of_traffic_report(
///     UrrId::new(1),
///     SequenceNumber::new(42)
/// ).build().unwrap();
///
/// let sdr_report = UsageReportSdr::new(usage_report);
/// let ie = sdr_report.to_ie();
/// assert_eq!(ie.ie_type, pfcp_core::ie::IeType::UsageReportWithinSessionDeletionResponse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReportSdr {
    /// The underlying usage report data
    pub report: UsageReport,
}

impl UsageReportSdr {
    /// Creates a new Usage Report Within Session Deletion Response.
    ///
    /// # Arguments
    /// * `report` - The underlying UsageReport containing measurement data
    ///
    /// # Example
    /// ```
    /// use pfcp_core::ie::usage_report_sdr::UsageReportSdr;
    /// use pfcp_core::ie::usage_report::UsageReport;
    /// use pfcp_core::ie::urr_id::UrrId;
    /// use pfcp_core::ie::sequence_number::SequenceNumber;
    /// use pfcp_core::ie::usage_report_trigger::UsageReportTrigger;
    ///
    /// let report = UsageReport::new(
    ///     UrrId::new(1),
    ///     SequenceNumber::new(42),
    ///     UsageReportTrigger::STOPT
    /// );
    /// let sdr_report = UsageReportSdr::new(report);
    /// ```
    pub fn new(report: UsageReport) -> Self {
        UsageReportSdr { report }
    }

    /// Marshals the Usage Report Within Session Deletion Response to bytes.
    ///
    /// # Returns
    /// A vector containing the marshaled usage report payload (child IEs).
    pub fn marshal(&self) -> Vec<u8> {
        self.report.marshal()
    }

    /// Unmarshals a Usage Report Within Session Deletion Response from bytes.
    ///
    /// # Arguments
    /// * `data` - The byte slice containing the usage report payload
    ///
    /// # Returns
    /// A `UsageReportSdr` instance or an error if unmarshaling fails.
    ///
    /// # Errors
    /// Returns `PfcpError` if:
    /// - Required fields (URR ID, UR-SEQN, Usage Report Trigger) are missing
    /// - Any child IE cannot be parsed
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        Ok(UsageReportSdr {
            report: UsageReport::unmarshal(data)?,
        })
    }

    /// Wraps the Usage Report in a generic IE with type UsageReportWithinSessionDeletionResponse.
    ///
    /// # Returns
    /// An `Ie` with type 79 and the marshaled payload.
    pub fn to_ie(&self) -> Ie {
        Ie::new(
            IeType::UsageReportWithinSessionDeletionResponse,
            self.marshal(),
        )
    }
}
