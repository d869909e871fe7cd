//! Update BAR within Session Report Response IE.

use crate::ie::bar_id::BarId;
use crate::ie::downlink_data_notification_delay::DownlinkDataNotificationDelay;
use crate::ie::suggested_buffering_packets_count::SuggestedBufferingPacketsCount;
use crate::ie::{Ie, IeType};
use std::io;

/// Represents the Update BAR within Session Report Response.
/// This IE is used specifically within Session Report Response messages
/// to update Buffering Action Rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBarWithinSessionReportResponse {
    pub bar_id: BarId,
    pub downlink_data_notification_delay: Option<DownlinkDataNotificationDelay>,
    pub suggested_buffering_packets_count: Option<SuggestedBufferingPacketsCount>,
}

impl UpdateBarWithinSessionReportResponse {
    /// Creates a new Update BAR within Session Report Response IE.
    pub fn new(bar_id: BarId) -> Self {
        UpdateBarWithinSessionReportResponse {
            bar_id,
            downlink_data_notification_delay: None,
            suggested_buffering_packets_count: None,
        }
    }

    /// Adds a Downlink Data Notification Delay.
    pub fn with_downlink_data_notification_delay(
        mut self,
        delay: DownlinkDataNotificationDelay,
    ) -> Self {
        self.downlink_data_notification_delay = Some(delay);
        self
    }

    /// Adds a Suggested Buffering Packets Count.
    pub fn with_suggested_buffering_packets_count(
        mut self,
        count: SuggestedBufferingPacketsCount,
    ) -> Self {
        self.suggested_buffering_packets_count = Some(count);
        self
    }

    /// Marshals the Update BAR within Session Report Response into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        let mut ies = Vec::new();

        ies.push(self.bar_id.to_ie());

        if let Some(ref delay) = self.downlink_data_notification_delay {
            ies.push(Ie::new(
                IeType::DownlinkDataNotificationDelay,
                delay.marshal(),
            ));
        }

        if let Some(ref count) = self.suggested_buffering_packets_count {
            ies.push(Ie::new(
                IeType::DlBufferingSuggestedPacketCount,
                count.marshal(),
            ));
        }

        let mut data = Vec::new();
        for ie in ies {
            data.extend_from_slice(&ie.marshal());
        }
        data
    }

    /// Unmarshals a byte slice into an Update BAR within Session Report Response IE.
    pub fn unmarshal(payload: &[u8]) -> Result<Self, io::Error> {
        let mut ies = Vec::new();
        let mut offset = 0;
        while offset < payload.len() {
            let ie = Ie::unmarshal(&payload[offset..])?;
            ies.push(ie.clone());
            offset += ie.len() as usize;
        }

        let bar_id = ies
            .iter()
            .find(|ie| ie.ie_type == IeType::BarId)
            .map(|ie| BarId::unmarshal(&ie.payload))
            .transpose()?
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, "Missing mandatory BAR ID IE")
            })?;

        let downlink_data_notification_delay = ies
            .iter()
            .find(|ie| ie.ie_type == IeType::DownlinkDataNotificationDelay)
            .map(|ie| DownlinkDataNotificationDelay::unmarshal(&ie.payload))
            .transpose()?;

        let suggested_buffering_packets_count = ies
            .iter()
            .find(|ie| ie.ie_type == IeType::DlBufferingSuggestedPacketCount)
            .map(|ie| SuggestedBufferingPacketsCount::unmarshal(&ie.payload))
            .transpose()?;

        Ok(UpdateBarWithinSessionReportResponse {
            bar_id,
            downlink_data_notification_delay,
            suggested_buffering_packets_count,
        })
    }

    /// Wraps the Update BAR within Session Report Response in an IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::UpdateBarWithinSessionReportResponse, self.marshal())
    }
}
