//! Lighting commands and batch planning.
//!
//! A [`LightingRequest`] is built from raw user input. Building it resolves the
//! channel group and validates every value, so once a request exists every
//! payload it plans is valid and nothing has been written yet.

use crate::channel::{self, Channel};
use crate::color::{parse_color, Color};
use crate::error::Result;
use crate::protocol::{self, Payload};
use crate::safety::{self, Brightness};
use serde::Serialize;
use tracing::debug;

/// A single lighting intent applied to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingCommand {
    Brightness(Brightness),
    Fill(Color),
}

impl LightingCommand {
    /// Encode this command for one channel.
    pub fn encode(&self, channel: Channel) -> Payload {
        match *self {
            Self::Brightness(brightness) => protocol::encode_brightness(channel, brightness),
            Self::Fill(color) => protocol::encode_color_fill(channel, color),
        }
    }

    /// Human-readable description, used in progress output.
    pub fn describe(&self, channel: Channel) -> String {
        match self {
            Self::Brightness(b) => format!("Setting brightness for '{channel}' to: {b}"),
            Self::Fill(color) => format!("Filling '{channel}' with color: {color}"),
        }
    }
}

/// One report to write, with what it is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedWrite {
    pub channel: Channel,
    pub command: LightingCommand,
    pub payload: Payload,
}

/// Encode one command for every channel, in channel order.
pub fn encode_batch(channels: &[Channel], command: LightingCommand) -> Vec<PlannedWrite> {
    channels
        .iter()
        .map(|&channel| PlannedWrite {
            channel,
            command,
            payload: command.encode(channel),
        })
        .collect()
}

/// A validated set of commands for a resolved channel group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightingRequest {
    pub channels: Vec<Channel>,
    pub commands: Vec<LightingCommand>,
}

impl LightingRequest {
    /// Resolve and validate raw user input.
    ///
    /// Brightness is applied before fill when both are given.
    pub fn from_input(group: &str, brightness: Option<i64>, fill: Option<&str>) -> Result<Self> {
        let channels = channel::resolve_group(group)?;

        let mut commands = Vec::new();
        if let Some(value) = brightness {
            commands.push(LightingCommand::Brightness(safety::validate_brightness(
                value,
            )?));
        }
        if let Some(text) = fill {
            commands.push(LightingCommand::Fill(parse_color(text)?));
        }

        debug!(
            group,
            channels = channels.len(),
            commands = commands.len(),
            "Lighting request validated"
        );
        Ok(Self { channels, commands })
    }

    /// Whether the request writes anything.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() || self.commands.is_empty()
    }

    /// All writes in order: per command, then per channel.
    pub fn plan(&self) -> Vec<PlannedWrite> {
        self.commands
            .iter()
            .flat_map(|&command| encode_batch(&self.channels, command))
            .collect()
    }
}
