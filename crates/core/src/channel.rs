//! Channel registry: the lighting zones of the cooler and their protocol fields.
//!
//! The registry is a constant table indexed by [`Channel`]. Group aliases
//! ("all", "fans") live in a second table so adding a group is a data change.
//!
//! | Channel | ID | LEDs | Fill opcode |
//! |---------|----|------|-------------|
//! | pump    | 0  | 16   | 0x32        |
//! | fan-1   | 1  | 18   | 0x40        |
//! | fan-2   | 2  | 18   | 0x40        |
//! | fan-3   | 3  | 18   | 0x40        |

use crate::error::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// An addressable lighting zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Pump,
    #[serde(rename = "fan-1")]
    Fan1,
    #[serde(rename = "fan-2")]
    Fan2,
    #[serde(rename = "fan-3")]
    Fan3,
}

/// Protocol fields for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSpec {
    pub channel: Channel,
    /// Canonical name.
    pub name: &'static str,
    /// Short alias accepted on the command line.
    pub alias: &'static str,
    /// Zone address used in every payload.
    pub channel_id: u8,
    /// Number of addressable LEDs.
    pub led_count: usize,
    /// Command byte of the color fill report for this zone.
    pub fill_opcode: u8,
}

/// All known channels, in discriminant order of [`Channel`].
pub const REGISTRY: [ChannelSpec; 4] = [
    ChannelSpec {
        channel: Channel::Pump,
        name: "pump",
        alias: "pump",
        channel_id: 0,
        led_count: 16,
        fill_opcode: 0x32,
    },
    ChannelSpec {
        channel: Channel::Fan1,
        name: "fan-1",
        alias: "fan1",
        channel_id: 1,
        led_count: 18,
        fill_opcode: 0x40,
    },
    ChannelSpec {
        channel: Channel::Fan2,
        name: "fan-2",
        alias: "fan2",
        channel_id: 2,
        led_count: 18,
        fill_opcode: 0x40,
    },
    ChannelSpec {
        channel: Channel::Fan3,
        name: "fan-3",
        alias: "fan3",
        channel_id: 3,
        led_count: 18,
        fill_opcode: 0x40,
    },
];

/// Named channel groups and their expansion, in write order.
pub const GROUPS: &[(&str, &[Channel])] = &[
    (
        "all",
        &[Channel::Pump, Channel::Fan1, Channel::Fan2, Channel::Fan3],
    ),
    ("fans", &[Channel::Fan1, Channel::Fan2, Channel::Fan3]),
];

impl Channel {
    /// All channels in registry order.
    pub const ALL: &'static [Channel] = &[Self::Pump, Self::Fan1, Self::Fan2, Self::Fan3];

    /// Registry entry for this channel.
    pub fn spec(self) -> &'static ChannelSpec {
        &REGISTRY[self as usize]
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Zone address used in payloads.
    pub fn channel_id(self) -> u8 {
        self.spec().channel_id
    }

    /// Number of LEDs in the zone.
    pub fn led_count(self) -> usize {
        self.spec().led_count
    }

    /// Color fill command byte for the zone.
    pub fn fill_opcode(self) -> u8 {
        self.spec().fill_opcode
    }

    /// Parse a channel from its name or alias (case-insensitive).
    ///
    /// Accepts "pump", "fan-1"/"fan1", "fan-2"/"fan2", "fan-3"/"fan3".
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        REGISTRY
            .iter()
            .find(|spec| spec.name == name || spec.alias == name)
            .map(|spec| spec.channel)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a single channel name.
pub fn resolve(name: &str) -> Result<Channel> {
    Channel::from_name(name).ok_or_else(|| Error::UnknownChannel(name.to_string()))
}

/// Resolve a group alias or a single channel name to channels in write order.
pub fn resolve_group(name: &str) -> Result<Vec<Channel>> {
    let lower = name.to_lowercase();
    let channels = match GROUPS.iter().find(|(group, _)| *group == lower) {
        Some((_, members)) => members.to_vec(),
        None => vec![resolve(name)?],
    };

    debug!(group = name, count = channels.len(), "Resolved channel group");
    Ok(channels)
}

/// Every name `resolve_group` accepts, groups first.
pub fn group_names() -> Vec<&'static str> {
    GROUPS
        .iter()
        .map(|(group, _)| *group)
        .chain(REGISTRY.iter().map(|spec| spec.alias))
        .collect()
}
