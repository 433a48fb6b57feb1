//! Monitored telemetry channels and per-sample readings.
//!
//! The firmware samples four channels in a fixed order: three signed 16-bit
//! accelerometer axes and one integer supply-voltage reading. Keying the
//! bounds table by [`Channel`] instead of a bare array index prevents
//! ordering mistakes when a regenerated table is installed.

use serde::{Deserialize, Serialize};

/// A monitored sensor channel, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Accelerometer X axis.
    AccelX,
    /// Accelerometer Y axis.
    AccelY,
    /// Accelerometer Z axis.
    AccelZ,
    /// Supply voltage (millivolts on the reference hardware).
    Voltage,
}

impl Channel {
    /// Number of monitored channels.
    pub const COUNT: usize = 4;

    /// All channels in classification order.
    pub const ALL: [Channel; Self::COUNT] = [
        Channel::AccelX,
        Channel::AccelY,
        Channel::AccelZ,
        Channel::Voltage,
    ];

    /// Fixed ordinal index of this channel (0–3).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a channel by its ordinal index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable lowercase name, matching the trainer's column labels.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Channel::AccelX => "accel_x",
            Channel::AccelY => "accel_y",
            Channel::AccelZ => "accel_z",
            Channel::Voltage => "voltage",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One telemetry sample, passed per classification call and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Accelerometer X sample.
    pub ax: i16,
    /// Accelerometer Y sample.
    pub ay: i16,
    /// Accelerometer Z sample.
    pub az: i16,
    /// Voltage sample.
    pub voltage: i32,
}

impl Reading {
    /// Create a reading from raw sensor samples.
    #[must_use]
    pub fn new(ax: i16, ay: i16, az: i16, voltage: i32) -> Self {
        Self {
            ax,
            ay,
            az,
            voltage,
        }
    }

    /// The value for one channel, converted to floating point the same
    /// way the firmware converts it before the range check.
    #[must_use]
    pub fn value(&self, channel: Channel) -> f32 {
        match channel {
            Channel::AccelX => f32::from(self.ax),
            Channel::AccelY => f32::from(self.ay),
            Channel::AccelZ => f32::from(self.az),
            Channel::Voltage => self.voltage as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_ordinals_are_fixed() {
        assert_eq!(Channel::AccelX.index(), 0);
        assert_eq!(Channel::AccelY.index(), 1);
        assert_eq!(Channel::AccelZ.index(), 2);
        assert_eq!(Channel::Voltage.index(), 3);
    }

    #[test]
    fn test_channel_from_index_roundtrip() {
        for channel in Channel::ALL {
            assert_eq!(Channel::from_index(channel.index()), Some(channel));
        }
        assert_eq!(Channel::from_index(4), None);
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::AccelX.to_string(), "accel_x");
        assert_eq!(Channel::Voltage.to_string(), "voltage");
    }

    #[test]
    fn test_reading_value_per_channel() {
        let reading = Reading::new(100, -200, 300, 3300);
        assert_eq!(reading.value(Channel::AccelX), 100.0);
        assert_eq!(reading.value(Channel::AccelY), -200.0);
        assert_eq!(reading.value(Channel::AccelZ), 300.0);
        assert_eq!(reading.value(Channel::Voltage), 3300.0);
    }

    #[test]
    fn test_reading_value_extremes() {
        let reading = Reading::new(i16::MIN, i16::MAX, 0, -99_999);
        assert_eq!(reading.value(Channel::AccelX), -32_768.0);
        assert_eq!(reading.value(Channel::AccelY), 32_767.0);
        assert_eq!(reading.value(Channel::Voltage), -99_999.0);
    }
}
