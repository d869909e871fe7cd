//! User Plane Inactivity Timer IE.

use crate::ie::{Ie, IeType};
use std::io;
use std::time::Duration;

/// Represents the User Plane Inactivity Timer Information Element.
/// Used to specify the inactivity timer for user plane sessions.
/// Defined in 3GPP TS 29.244 Section 8.2.104.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPlaneInactivityTimer {
    pub timer_value: Duration,
}

impl UserPlaneInactivityTimer {
    /// Creates a new User Plane Inactivity Timer IE.
    pub fn new(timer_value: Duration) -> Self {
        UserPlaneInactivityTimer { timer_value }
    }

    /// Creates a User Plane Inactivity Timer from seconds.
    pub fn from_seconds(seconds: u32) -> Self {
        UserPlaneInactivityTimer::new(Duration::from_secs(seconds as u64))
    }

    /// Creates a User Plane Inactivity Timer from minutes.
    pub fn from_minutes(minutes: u32) -> Self {
        UserPlaneInactivityTimer::new(Duration::from_secs((minutes * 60) as u64))
    }

    /// Creates a User Plane Inactivity Timer from hours.
    pub fn from_hours(hours: u32) -> Self {
        UserPlaneInactivityTimer::new(Duration::from_secs((hours * 3600) as u64))
    }

    /// Gets the timer value as seconds.
    pub fn as_seconds(&self) -> u64 {
        self.timer_value.as_secs()
    }

    /// Gets the timer value as minutes (rounded down).
    pub fn as_minutes(&self) -> u64 {
        self.timer_value.as_secs() / 60
    }

    /// Gets the timer value as hours (rounded down).
    pub fn as_hours(&self) -> u64 {
        self.timer_value.as_secs() / 3600
    }

    /// Gets the timer value.
    pub fn timer_value(&self) -> Duration {
        self.timer_value
    }

    /// Checks if the timer is infinite (represented as 0).
    pub fn is_infinite(&self) -> bool {
        self.timer_value.is_zero()
    }

    /// Creates an infinite timer (0 duration).
    pub fn infinite() -> Self {
        UserPlaneInactivityTimer::new(Duration::ZERO)
    }

    /// Marshals the User Plane Inactivity Timer into a byte vector.
    /// Timer value is encoded as 32-bit unsigned integer in seconds.
    pub fn marshal(&self) -> Vec<u8> {
        let seconds = self.timer_value.as_secs() as u32;
        seconds.to_be_bytes().to_vec()
    }

    /// Unmarshals a byte slice into a User Plane Inactivity Timer IE.
    pub fn unmarshal(payload: &[u8]) -> Result<Self, io::Error> {
        if payload.len() != 4 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "User Plane Inactivity Timer payload must be 4 bytes",
            ));
        }

        let seconds = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);
        let timer_value = Duration::from_secs(seconds as u64);

        Ok(UserPlaneInactivityTimer { timer_value })
    }

    /// Wraps the User Plane Inactivity Timer in a User Plane Inactivity Timer IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::UserPlaneInactivityTimer, self.marshal())
    }

    /// Gets the length of the marshaled timer (always 4 bytes).
    pub fn len(&self) -> usize {
        4
    }

    /// Checks if the timer is empty (not applicable for timer, always false).
    pub fn is_empty(&self) -> bool {
        false
    }
}
