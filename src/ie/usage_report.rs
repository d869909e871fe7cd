// src/ie/usage_report.rs

use crate::ie::additional_usage_reports_information::AdditionalUsageReportsInformation;
use crate::ie::application_detection_information::ApplicationDetectionInformation;
use crate::ie::duration_measurement::DurationMeasurement;
use crate::ie::end_time::EndTime;
use crate::ie::query_urr_reference::QueryURRReference;
use crate::ie::quota_holding_time::QuotaHoldingTime;
use crate::ie::sequence_number::SequenceNumber;
use crate::ie::start_time::StartTime;
use crate::ie::time_of_first_packet::TimeOfFirstPacket;
use crate::ie::time_of_last_packet::TimeOfLastPacket;
use crate::ie::time_quota::TimeQuota;
use crate::ie::ue_ip_address_usage_information::UEIPAddressUsageInformation;
use crate::ie::urr_id::UrrId;
use crate::ie::usage_information::UsageInformation;
use crate::ie::usage_report_trigger::UsageReportTrigger;
use crate::ie::volume_measurement::VolumeMeasurement;
use crate::ie::volume_quota::VolumeQuota;
use crate::ie::{Ie, IeType};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReport {
    pub urr_id: UrrId,
    pub ur_seqn: SequenceNumber,
    pub usage_report_trigger: UsageReportTrigger,

    // Phase 1: Core measurement IEs
    pub volume_measurement: Option<VolumeMeasurement>,
    pub duration_measurement: Option<DurationMeasurement>,
    pub time_of_first_packet: Option<TimeOfFirstPacket>,
    pub time_of_last_packet: Option<TimeOfLastPacket>,
    pub usage_information: Option<UsageInformation>,

    // Phase 2: Quota and Time IEs
    pub volume_quota: Option<VolumeQuota>,
    pub time_quota: Option<TimeQuota>,
    pub quota_holding_time: Option<QuotaHoldingTime>,
    pub start_time: Option<StartTime>,
    pub end_time: Option<EndTime>,

    // Phase 3: Extended IEs
    pub query_urr_reference: Option<QueryURRReference>,
    pub application_detection_information: Option<ApplicationDetectionInformation>,
    pub ue_ip_address_usage_information: Option<UEIPAddressUsageInformation>,
    pub additional_usage_reports_information: Option<AdditionalUsageReportsInformation>,
}

impl UsageReport {
    pub fn new(
        urr_id: UrrId,
        ur_seqn: SequenceNumber,
        usage_report_trigger: UsageReportTrigger,
    ) -> Self {
        UsageReport {
            urr_id,
            ur_seqn,
            usage_report_trigger,
            volume_measurement: None,
            duration_measurement: None,
            time_of_first_packet: None,
            time_of_last_packet: None,
            usage_information: None,
            volume_quota: None,
            time_quota: None,
            quota_holding_time: None,
            start_time: None,
            end_time: None,
            query_urr_reference: None,
            application_detection_information: None,
            ue_ip_address_usage_information: None,
            additional_usage_reports_information: None,
        }
    }

    /// Creates a new builder for constructing Usage Report Information Elements.
    pub fn builder(urr_id: UrrId) -> UsageReportBuilder {
        UsageReportBuilder::new(urr_id)
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut buffer = vec![];
        buffer.extend_from_slice(&self.urr_id.to_ie().marshal());
        buffer.extend_from_slice(&self.ur_seqn.to_ie().marshal());
        buffer.extend_from_slice(&self.usage_report_trigger.to_ie().marshal());

        // Marshal Phase 1 measurement IEs
        if let Some(ref vm) = self.volume_measurement {
            if let Ok(ie) = vm.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref dm) = self.duration_measurement {
            if let Ok(ie) = dm.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref tofp) = self.time_of_first_packet {
            if let Ok(ie) = tofp.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref tolp) = self.time_of_last_packet {
            if let Ok(ie) = tolp.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref ui) = self.usage_information {
            if let Ok(ie) = ui.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }

        // Marshal Phase 2 quota and time IEs
        if let Some(ref vq) = self.volume_quota {
            if let Ok(ie) = vq.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref tq) = self.time_quota {
            if let Ok(ie) = tq.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref qht) = self.quota_holding_time {
            if let Ok(ie) = qht.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref st) = self.start_time {
            if let Ok(ie) = st.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref et) = self.end_time {
            if let Ok(ie) = et.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }

        // Marshal Phase 3 extended IEs
        if let Some(ref qur) = self.query_urr_reference {
            if let Ok(ie) = qur.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref adi) = self.application_detection_information {
            if let Ok(ie) = adi.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref ueip) = self.ue_ip_address_usage_information {
            if let Ok(ie) = ueip.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }
        if let Some(ref auri) = self.additional_usage_reports_information {
            if let Ok(ie) = auri.to_ie() {
                buffer.extend_from_slice(&ie.marshal());
            }
        }

        buffer
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, std::io::Error> {
        let mut cursor = 0;
        let mut urr_id = None;
        let mut ur_seqn = None;
        let mut usage_report_trigger = None;
        let mut volume_measurement = None;
        let mut duration_measurement = None;
        let mut time_of_first_packet = None;
        let mut time_of_last_packet = None;
        let mut usage_information = None;
        let mut volume_quota = None;
        let mut time_quota = None;
        let mut quota_holding_time = None;
        let mut start_time = None;
        let mut end_time = None;
        let mut query_urr_reference = None;
        let mut application_detection_information = None;
        let mut ue_ip_address_usage_information = None;
        let mut additional_usage_reports_information = None;

        while cursor < data.len() {
            let ie = Ie::unmarshal(&data[cursor..])?;
            match ie.ie_type {
                IeType::UrrId => urr_id = Some(UrrId::unmarshal(&ie.payload)?),
                IeType::SequenceNumber => ur_seqn = Some(SequenceNumber::unmarshal(&ie.payload)?),
                IeType::UsageReportTrigger => {
                    usage_report_trigger = Some(UsageReportTrigger::unmarshal(&ie.payload)?)
                }
                IeType::VolumeMeasurement => {
                    volume_measurement = Some(VolumeMeasurement::unmarshal(&ie.payload)?)
                }
                IeType::DurationMeasurement => {
                    duration_measurement = Some(DurationMeasurement::unmarshal(&ie.payload)?)
                }
                IeType::TimeOfFirstPacket => {
                    time_of_first_packet = Some(TimeOfFirstPacket::unmarshal(&ie.payload)?)
                }
                IeType::TimeOfLastPacket => {
                    time_of_last_packet = Some(TimeOfLastPacket::unmarshal(&ie.payload)?)
                }
                IeType::UsageInformation => {
                    usage_information = Some(UsageInformation::unmarshal(&ie.payload)?)
                }
                IeType::VolumeQuota => volume_quota = Some(VolumeQuota::unmarshal(&ie.payload)?),
                IeType::TimeQuota => time_quota = Some(TimeQuota::unmarshal(&ie.payload)?),
                IeType::QuotaHoldingTime => {
                    quota_holding_time = Some(QuotaHoldingTime::unmarshal(&ie.payload)?)
                }
                IeType::StartTime => start_time = Some(StartTime::unmarshal(&ie.payload)?),
                IeType::EndTime => end_time = Some(EndTime::unmarshal(&ie.payload)?),
                IeType::QueryUrrReference => {
                    query_urr_reference = Some(QueryURRReference::unmarshal(&ie.payload)?)
                }
                IeType::ApplicationDetectionInformation => {
                    application_detection_information =
                        Some(ApplicationDetectionInformation::unmarshal(&ie.payload)?)
                }
                IeType::UeIpAddressUsageInformation => {
                    ue_ip_address_usage_information =
                        Some(UEIPAddressUsageInformation::unmarshal(&ie.payload)?)
                }
                IeType::AdditionalUsageReportsInformation => {
                    additional_usage_reports_information =
                        Some(AdditionalUsageReportsInformation::unmarshal(&ie.payload)?)
                }
                _ => (),
            }
            cursor += ie.len() as usize;
        }

        Ok(UsageReport {
            urr_id: urr_id.ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, "URR ID not found")
            })?,
            ur_seqn: ur_seqn.ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, "UR-SEQN not found")
            })?,
            usage_report_trigger: usage_report_trigger.ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "Usage Report Trigger not found",
                )
            })?,
            volume_measurement,
            duration_measurement,
            time_of_first_packet,
            time_of_last_packet,
            usage_information,
            volume_quota,
            time_quota,
            quota_holding_time,
            start_time,
            end_time,
            query_urr_reference,
            application_detection_information,
            ue_ip_address_usage_information,
            additional_usage_reports_information,
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::UsageReportWithinSessionReportRequest, self.marshal())
    }
}

/// Builder for constructing Usage Report Information Elements with validation.
///
/// The Usage Report builder provides an ergonomic way to construct usage report IEs
/// that are commonly sent from UPF to SMF to report traffic usage, quota exhaustion,
/// and other monitoring events.
///
/// # Examples
///
/// ```rust
/// use pfcp_core::ie::usage_report::UsageReportBuilder;
/// use pfcp_core::ie::urr_id::UrrId;
/// use pfcp_core::ie::sequence_number::SequenceNumber;
/// use pfcp_core::ie::usage_report_trigger::UsageReportTrigger;
///
/// // Basic usage report for quota exhaustion
/// let quota_report = UsageReportBuilder::new(UrrId::new(1))
///     .sequence_number(SequenceNumber::new(42))
///     .quota_exhausted()
///     .build()
///     .unwrap();
///
/// // Periodic usage report
/// let periodic_report = UsageReportBuilder::new(UrrId::new(2))
///     .sequence_number(SequenceNumber::new(43))
///     .periodic_report()
///     .build()
///     .unwrap();
///
/// // Volume threshold triggered report
/// let volume_report = UsageReportBuilder::volume_threshold_report(
///     UrrId::new(3),
///     SequenceNumber::new(44)
/// ).build().unwrap();
///
/// // Time threshold triggered report
/// let time_report = UsageReportBuilder::time_threshold_report(
///     UrrId::new(4),
///     SequenceNumber::new(45)
/// ).build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct UsageReportBuilder {
    urr_id: Option<UrrId>,
    ur_seqn: Option<SequenceNumber>,
    usage_report_trigger: Option<UsageReportTrigger>,
    volume_measurement: Option<VolumeMeasurement>,
    duration_measurement: Option<DurationMeasurement>,
    time_of_first_packet: Option<TimeOfFirstPacket>,
    time_of_last_packet: Option<TimeOfLastPacket>,
    usage_information: Option<UsageInformation>,
    volume_quota: Option<VolumeQuota>,
    time_quota: Option<TimeQuota>,
    quota_holding_time: Option<QuotaHoldingTime>,
    start_time: Option<StartTime>,
    end_time: Option<EndTime>,
    query_urr_reference: Option<QueryURRReference>,
    application_detection_information: Option<ApplicationDetectionInformation>,
    ue_ip_address_usage_information: Option<UEIPAddressUsageInformation>,
    additional_usage_reports_information: Option<AdditionalUsageReportsInformation>,
}

impl UsageReportBuilder {
    /// Creates a new Usage Report builder with the specified URR ID.
    ///
    /// # Arguments
    ///
    /// * `urr_id` - The Usage Reporting Rule ID that generated this report
    pub fn new(urr_id: UrrId) -> Self {
        UsageReportBuilder {
            urr_id: Some(urr_id),
            ur_seqn: None,
            usage_report_trigger: None,
            volume_measurement: None,
            duration_measurement: None,
            time_of_first_packet: None,
            time_of_last_packet: None,
            usage_information: None,
            volume_quota: None,
            time_quota: None,
            quota_holding_time: None,
            start_time: None,
            end_time: None,
            query_urr_reference: None,
            application_detection_information: None,
            ue_ip_address_usage_information: None,
            additional_usage_reports_information: None,
        }
    }

    /// Sets the sequence number for the usage report.
    ///
    /// The sequence number is used to correlate usage reports and ensure
    /// proper ordering and duplicate detection.
    ///
    /// # Arguments
    ///
    /// * `ur_seqn` - The usage report sequence number
    pub fn sequence_number(mut self, ur_seqn: SequenceNumber) -> Self {
        self.ur_seqn = Some(ur_seqn);
        self
    }

    /// Sets the usage report trigger flags.
    ///
    /// This indicates what event(s) triggered the usage report generation.
    ///
    /// # Arguments
    ///
    /// * `trigger` - The usage report trigger flags
    pub fn trigger(mut self, trigger: UsageReportTrigger) -> Self {
        self.usage_report_trigger = Some(trigger);
        self
    }

    /// Configures the report as a quota exhaustion report.
    ///
    /// This is commonly used when volume or time quotas are exhausted
    /// and traffic needs to be suspended or redirected.
    pub fn quota_exhausted(mut self) -> Self {
        self.usage_report_trigger = Some(UsageReportTrigger::VOLTH | UsageReportTrigger::TIMTH);
        self
    }

    /// Configures the report as a periodic usage report.
    ///
    /// This is used for regular reporting intervals to track ongoing usage.
    pub fn periodic_report(mut self) -> Self {
        self.usage_report_trigger = Some(UsageReportTrigger::PERIO);
        self
    }

    /// Configures the report as a volume threshold triggered report.
    ///
    /// This is used when a volume threshold has been reached.
    pub fn volume_threshold_triggered(mut self) -> Self {
        self.usage_report_trigger = Some(UsageReportTrigger::VOLTH);
        self
    }

    /// Configures the report as a time threshold triggered report.
    ///
    /// This is used when a time threshold has been reached.
    pub fn time_threshold_triggered(mut self) -> Self {
        self.usage_report_trigger = Some(UsageReportTrigger::TIMTH);
        self
    }

    /// Configures the report for start of traffic detection.
    ///
    /// This is used when traffic flow begins for the first time.
    pub fn start_of_traffic(mut self) -> Self {
        self.usage_report_trigger = Some(UsageReportTrigger::START);
        self
    }

    /// Configures the report for stop of traffic detection.
    ///
    /// This is used when traffic flow ends or stops.
    pub fn stop_of_traffic(mut self) -> Self {
        self.usage_report_trigger = Some(UsageReportTrigger::STOPT);
        self
    }

    /// Builds the Usage Report Information Element.
    ///
    /// # Returns
    ///
    /// Returns a `Result<UsageReport, io::Error>`. The operation will fail if:
    /// - URR ID is not set (required field)
    /// - Sequence number is not set (required field)
    /// - Usage report trigger is not set (required field)
    ///
    /// # Errors
    ///
    /// Returns an error if any required fields are missing.
    pub fn build(self) -> Result<UsageReport, io::Error> {
        let urr_id = self
            .urr_id
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "URR ID is required"))?;

        let ur_seqn = self.ur_seqn.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "Sequence number is required")
        })?;

        let usage_report_trigger = self.usage_report_trigger.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "Usage report trigger is required",
            )
        })?;

        Ok(UsageReport {
            urr_id,
            ur_seqn,
            usage_report_trigger,
            volume_measurement: self.volume_measurement,
            duration_measurement: self.duration_measurement,
            time_of_first_packet: self.time_of_first_packet,
            time_of_last_packet: self.time_of_last_packet,
            usage_information: self.usage_information,
            volume_quota: self.volume_quota,
            time_quota: self.time_quota,
            quota_holding_time: self.quota_holding_time,
            start_time: self.start_time,
            end_time: self.end_time,
            query_urr_reference: self.query_urr_reference,
            application_detection_information: self.application_detection_information,
            ue_ip_address_usage_information: self.ue_ip_address_usage_information,
            additional_usage_reports_information: self.additional_usage_reports_information,
        })
    }

    /// Creates a pre-configured builder for quota exhaustion reports.
    ///
    /// This is a common pattern when volume or time quotas are exhausted.
    ///
    /// # Arguments
    ///
    /// * `urr_id` - The Usage Reporting Rule ID
    /// * `ur_seqn` - The usage report sequence number
    pub fn quota_exhausted_report(urr_id: UrrId, ur_seqn: SequenceNumber) -> Self {
        UsageReportBuilder::new(urr_id)
            .sequence_number(ur_seqn)
            .quota_exhausted()
    }

    /// Creates a pre-configured builder for periodic usage reports.
    ///
    /// This is used for regular reporting intervals.
    ///
    /// # Arguments
    ///
    /// * `urr_id` - The Usage Reporting Rule ID
    /// * `ur_seqn` - The usage report sequence number
    pub fn periodic_usage_report(urr_id: UrrId, ur_seqn: SequenceNumber) -> Self {
        UsageReportBuilder::new(urr_id)
            .sequence_number(ur_seqn)
            .periodic_report()
    }

    /// Creates a pre-configured builder for volume threshold reports.
    ///
    /// # Arguments
    ///
    /// * `urr_id` - The Usage Reporting Rule ID
    /// * `ur_seqn` - The usage report sequence number
    pub fn volume_threshold_report(urr_id: UrrId, ur_seqn: SequenceNumber) -> Self {
        UsageReportBuilder::new(urr_id)
            .sequence_number(ur_seqn)
            .volume_threshold_triggered()
    }

    /// Creates a pre-configured builder for time threshold reports.
    ///
    /// # Arguments
    ///
    /// * `urr_id` - The Usage Reporting Rule ID
    /// * `ur_seqn` - The usage report sequence number
    pub fn time_threshold_report(urr_id: UrrId, ur_seqn: SequenceNumber) -> Self {
        UsageReportBuilder::new(urr_id)
            .sequence_number(ur_seqn)
            .time_threshold_triggered()
    }

    /// Creates a pre-configured builder for start of traffic reports.
    ///
    /// # Arguments
    ///
    /// * `urr_id` - The Usage Reporting Rule ID
    /// * `ur_seqn` - The usage report sequence number
    pub fn start_of_traffic_report(urr_id: UrrId, ur_seqn: SequenceNumber) -> Self {
        UsageReportBuilder::new(urr_id)
            .sequence_number(ur_seqn)
            .start_of_traffic()
    }

    /// Creates a pre-configured builder for stop of traffic reports.
    ///
    /// # Arguments
    ///
    /// * `urr_id` - The Usage Reporting Rule ID
    /// * `ur_seqn` - The usage report sequence number
    pub fn stop_of_traffic_report(urr_id: UrrId, ur_seqn: SequenceNumber) -> Self {
        UsageReportBuilder::new(urr_id)
            .sequence_number(ur_seqn)
            .stop_of_traffic()
    }

    // Phase 1: Core measurement IE setters

    /// Sets volume measurement data for the usage report.
    ///
    /// Volume measurement contains traffic volume statistics including
    /// total, uplink, and downlink volumes and packet counts.
    ///
    /// # Arguments
    ///
    /// * `volume_measurement` - The volume measurement data
    pub fn volume_measurement(mut self, volume_measurement: VolumeMeasurement) -> Self {
        self.volume_measurement = Some(volume_measurement);
        self
    }

    /// Sets duration measurement for the usage report.
    ///
    /// Duration measurement contains the session duration in seconds.
    ///
    /// # Arguments
    ///
    /// * `duration_measurement` - The duration measurement data
    pub fn duration_measurement(mut self, duration_measurement: DurationMeasurement) -> Self {
        self.duration_measurement = Some(duration_measurement);
        self
    }

    /// Sets time of first packet for the usage report.
    ///
    /// Time of first packet contains the 3GPP NTP timestamp of the first packet.
    ///
    /// # Arguments
    ///
    /// * `time_of_first_packet` - The time of first packet data
    pub fn time_of_first_packet(mut self, time_of_first_packet: TimeOfFirstPacket) -> Self {
        self.time_of_first_packet = Some(time_of_first_packet);
        self
    }

    /// Sets time of last packet for the usage report.
    ///
    /// Time of last packet contains the 3GPP NTP timestamp of the last packet.
    ///
    /// # Arguments
    ///
    /// * `time_of_last_packet` - The time of last packet data
    pub fn time_of_last_packet(mut self, time_of_last_packet: TimeOfLastPacket) -> Self {
        self.time_of_last_packet = Some(time_of_last_packet);
        self
    }

    /// Sets usage information flags for the usage report.
    ///
    /// Usage information contains flags indicating before/after enforcement
    /// and other usage reporting context.
    ///
    /// # Arguments
    ///
    /// * `usage_information` - The usage information flags
    pub fn usage_information(mut self, usage_information: UsageInformation) -> Self {
        self.usage_information = Some(usage_information);
        self
    }

    // Convenience methods for creating measurement data

    /// Convenience method to set volume data with total, uplink, and downlink volumes.
    ///
    /// # Arguments
    ///
    /// * `total` - Total volume in bytes
    /// * `uplink` - Uplink volume in bytes
    /// * `downlink` - Downlink volume in bytes
    pub fn with_volume_data(mut self, total: u64, uplink: u64, downlink: u64) -> Self {
        let volume_measurement = VolumeMeasurement::new(
            0x07, // TOVOL | ULVOL | DLVOL flags
            Some(total),
            Some(uplink),
            Some(downlink),
            None,
            None,
            None,
        );
        self.volume_measurement = Some(volume_measurement);
        self
    }

    /// Convenience method to set packet count data.
    ///
    /// # Arguments
    ///
    /// * `total` - Total packet count
    /// * `uplink` - Uplink packet count
    /// * `downlink` - Downlink packet count
    pub fn with_packet_data(mut self, total: u64, uplink: u64, downlink: u64) -> Self {
        let volume_measurement = VolumeMeasurement::new(
            0x38, // TONOP | ULNOP | DLNOP flags
            None,
            None,
            None,
            Some(total),
            Some(uplink),
            Some(downlink),
        );
        self.volume_measurement = Some(volume_measurement);
        self
    }

    /// Convenience method to set session duration in seconds.
    ///
    /// # Arguments
    ///
    /// * `seconds` - Duration in seconds
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_measurement = Some(DurationMeasurement::new(seconds));
        self
    }

    /// Convenience method to set packet timing information.
    ///
    /// # Arguments
    ///
    /// * `first_timestamp` - 3GPP NTP timestamp of first packet
    /// * `last_timestamp` - 3GPP NTP timestamp of last packet
    pub fn with_packet_times(mut self, first_timestamp: u32, last_timestamp: u32) -> Self {
        self.time_of_first_packet = Some(TimeOfFirstPacket::new(first_timestamp));
        self.time_of_last_packet = Some(TimeOfLastPacket::new(last_timestamp));
        self
    }

    /// Convenience method to set usage information with flags.
    ///
    /// # Arguments
    ///
    /// * `bef` - Before enforcement flag
    /// * `aft` - After enforcement flag
    /// * `uae` - Usage after enforcement flag
    /// * `ube` - Usage before enforcement flag
    pub fn with_usage_flags(mut self, bef: bool, aft: bool, uae: bool, ube: bool) -> Self {
        self.usage_information = Some(UsageInformation::new_with_flags(bef, aft, uae, ube));
        self
    }

    // Phase 2: Quota and Time IE setters

    /// Sets volume quota for the usage report.
    ///
    /// Volume quota specifies the allowed volume thresholds for traffic monitoring.
    ///
    /// # Arguments
    ///
    /// * `volume_quota` - The volume quota data
    pub fn volume_quota(mut self, volume_quota: VolumeQuota) -> Self {
        self.volume_quota = Some(volume_quota);
        self
    }

    /// Sets time quota for the usage report.
    ///
    /// Time quota specifies the allowed time duration for traffic monitoring.
    ///
    /// # Arguments
    ///
    /// * `time_quota` - The time quota data
    pub fn time_quota(mut self, time_quota: TimeQuota) -> Self {
        self.time_quota = Some(time_quota);
        self
    }

    /// Sets quota holding time for the usage report.
    ///
    /// Quota holding time specifies how long quotas should be held after allocation.
    ///
    /// # Arguments
    ///
    /// * `quota_holding_time` - The quota holding time data
    pub fn quota_holding_time(mut self, quota_holding_time: QuotaHoldingTime) -> Self {
        self.quota_holding_time = Some(quota_holding_time);
        self
    }

    /// Sets start time for the usage report.
    ///
    /// Start time contains the 3GPP NTP timestamp when monitoring began.
    ///
    /// # Arguments
    ///
    /// * `start_time` - The start time data
    pub fn start_time(mut self, start_time: StartTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets end time for the usage report.
    ///
    /// End time contains the 3GPP NTP timestamp when monitoring ended.
    ///
    /// # Arguments
    ///
    /// * `end_time` - The end time data
    pub fn end_time(mut self, end_time: EndTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    // Phase 2 convenience methods

    /// Convenience method to set volume quota with total, uplink, and downlink volumes.
    ///
    /// # Arguments
    ///
    /// * `total` - Total volume quota in bytes
    /// * `uplink` - Uplink volume quota in bytes
    /// * `downlink` - Downlink volume quota in bytes
    pub fn with_volume_quota(mut self, total: u64, uplink: u64, downlink: u64) -> Self {
        let volume_quota = VolumeQuota::new(
            0x07, // TOVOL | ULVOL | DLVOL flags
            Some(total),
            Some(uplink),
            Some(downlink),
        );
        self.volume_quota = Some(volume_quota);
        self
    }

    /// Convenience method to set time quota in seconds.
    ///
    /// # Arguments
    ///
    /// * `quota_seconds` - Time quota in seconds
    pub fn with_time_quota(mut self, quota_seconds: u32) -> Self {
        self.time_quota = Some(TimeQuota::new(quota_seconds));
        self
    }

    /// Convenience method to set quota holding time in seconds.
    ///
    /// # Arguments
    ///
    /// * `holding_seconds` - Quota holding time in seconds
    pub fn with_quota_holding_time(mut self, holding_seconds: u32) -> Self {
        self.quota_holding_time = Some(QuotaHoldingTime::new(holding_seconds));
        self
    }

    /// Convenience method to set monitoring time window.
    ///
    /// # Arguments
    ///
    /// * `start_timestamp` - 3GPP NTP timestamp when monitoring started
    /// * `end_timestamp` - 3GPP NTP timestamp when monitoring ended
    pub fn with_monitoring_window(mut self, start_timestamp: u32, end_timestamp: u32) -> Self {
        self.start_time = Some(StartTime::new(start_timestamp));
        self.end_time = Some(EndTime::new(end_timestamp));
        self
    }

    // Phase 3: Extended IE setters

    /// Sets the Query URR Reference for correlation with query requests.
    ///
    /// # Arguments
    ///
    /// * `query_urr_reference` - QueryURRReference IE for correlation
    pub fn query_urr_reference(mut self, query_urr_reference: QueryURRReference) -> Self {
        self.query_urr_reference = Some(query_urr_reference);
        self
    }

    /// Sets the Application Detection Information from DPI analysis.
    ///
    /// # Arguments
    ///
    /// * `application_detection_information` - DPI results and application info
    pub fn application_detection_information(
        mut self,
        application_detection_information: ApplicationDetectionInformation,
    ) -> Self {
        self.application_detection_information = Some(application_detection_information);
        self
    }

    /// Sets the UE IP Address Usage Information for IP tracking.
    ///
    /// # Arguments
    ///
    /// * `ue_ip_address_usage_information` - UE IP usage statistics
    pub fn ue_ip_address_usage_information(
        mut self,
        ue_ip_address_usage_information: UEIPAddressUsageInformation,
    ) -> Self {
        self.ue_ip_address_usage_information = Some(ue_ip_address_usage_information);
        self
    }

    /// Sets the Additional Usage Reports Information flags.
    ///
    /// # Arguments
    ///
    /// * `additional_usage_reports_information` - Additional usage report flags
    pub fn additional_usage_reports_information(
        mut self,
        additional_usage_reports_information: AdditionalUsageReportsInformation,
    ) -> Self {
        self.additional_usage_reports_information = Some(additional_usage_reports_information);
        self
    }

    // Phase 3: Convenience methods

    /// Convenience method to set URR query reference for correlation.
    ///
    /// # Arguments
    ///
    /// * `reference` - The u32 reference value
    pub fn with_query_reference(mut self, reference: u32) -> Self {
        self.query_urr_reference = Some(QueryURRReference::new(reference));
        self
    }

    /// Convenience method to set simple application detection.
    ///
    /// # Arguments
    ///
    /// * `app_id` - The application identifier string
    pub fn with_detected_application(mut self, app_id: &str) -> Self {
        self.application_detection_information =
            Some(ApplicationDetectionInformation::simple_app(app_id));
        self
    }

    /// Convenience method to set application detection with instance.
    ///
    /// # Arguments
    ///
    /// * `app_id` - The application identifier
    /// * `instance_id` - The application instance identifier
    pub fn with_application_instance(mut self, app_id: &str, instance_id: &str) -> Self {
        self.application_detection_information = Some(
            ApplicationDetectionInformation::app_with_instance(app_id, instance_id),
        );
        self
    }

    /// Convenience method to set UE IP usage with IPv4.
    ///
    /// # Arguments
    ///
    /// * `ipv4` - The IPv4 address
    /// * `count` - Number of UE IP addresses
    pub fn with_ue_ipv4_usage(mut self, ipv4: std::net::Ipv4Addr, count: u32) -> Self {
        self.ue_ip_address_usage_information =
            Some(UEIPAddressUsageInformation::with_ipv4(ipv4, count));
        self
    }

    /// Convenience method to set additional usage report flags.
    ///
    /// # Arguments
    ///
    /// * `auri` - Additional interim usage report flag
    /// * `nouri` - No additional interim usage report flag
    pub fn with_additional_flags(mut self, auri: bool, nouri: bool) -> Self {
        let flags = if auri { 0x01 } else { 0x00 } | if nouri { 0x02 } else { 0x00 };
        self.additional_usage_reports_information =
            Some(AdditionalUsageReportsInformation::new(flags));
        self
    }
}
