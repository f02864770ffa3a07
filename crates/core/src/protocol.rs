//! Lighting report encoding.
//!
//! Every report starts with the HID report number (0) followed by a command
//! header and channel fields. Two commands are known:
//!
//! - Brightness: `[0, 0x70, 0x01, channel_id, brightness]`
//! - Color fill: `[0, fill_opcode, 0x01, 0x07, 0, 0, 0, 0, channel_id]`
//!   followed by one GRB triple per LED of the channel.
//!
//! The purpose of several header bytes is unknown; they are sent as captured.

use crate::channel::Channel;
use crate::color::Color;
use crate::safety::Brightness;
use serde::Serialize;

/// HID report number of all lighting reports.
pub const REPORT_NUMBER: u8 = 0x00;

/// Brightness command bytes, shared by all channels.
pub const BRIGHTNESS_COMMAND: [u8; 2] = [0x70, 0x01];

/// Opaque fill header bytes following the fill opcode.
pub const FILL_HEADER: [u8; 6] = [0x01, 0x07, 0x00, 0x00, 0x00, 0x00];

/// Brightness report length (including report number).
pub const BRIGHTNESS_REPORT_LEN: usize = 5;
/// Fill report length before the per-LED color data.
pub const FILL_HEADER_LEN: usize = 9;
/// Bytes per LED in a fill report.
pub const BYTES_PER_LED: usize = 3;

/// A fully encoded report, written to the device as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// Encode a brightness report for one channel.
pub fn encode_brightness(channel: Channel, brightness: Brightness) -> Payload {
    let mut buf = Vec::with_capacity(BRIGHTNESS_REPORT_LEN);
    buf.push(REPORT_NUMBER);
    buf.extend_from_slice(&BRIGHTNESS_COMMAND);
    buf.push(channel.channel_id());
    buf.push(brightness.value());
    Payload(buf)
}

/// Total fill report length for a channel.
pub fn fill_report_len(channel: Channel) -> usize {
    FILL_HEADER_LEN + BYTES_PER_LED * channel.led_count()
}

/// Encode a static color fill report for one channel.
pub fn encode_color_fill(channel: Channel, color: Color) -> Payload {
    let mut buf = Vec::with_capacity(fill_report_len(channel));
    buf.push(REPORT_NUMBER);
    buf.push(channel.fill_opcode());
    buf.extend_from_slice(&FILL_HEADER);
    buf.push(channel.channel_id());

    let grb = color.grb();
    for _ in 0..channel.led_count() {
        buf.extend_from_slice(&grb);
    }
    Payload(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::validate_brightness;

    #[test]
    fn encode_brightness_layout() {
        for &channel in Channel::ALL {
            for b in [0, 1, 50, 99, 100] {
                let payload = encode_brightness(channel, validate_brightness(b).unwrap());
                assert_eq!(
                    payload.as_bytes(),
                    &[0, 0x70, 0x01, channel.channel_id(), b as u8]
                );
            }
        }
    }

    #[test]
    fn encode_brightness_pump_50() {
        let payload = encode_brightness(Channel::Pump, validate_brightness(50).unwrap());
        assert_eq!(payload.into_vec(), vec![0, 112, 1, 0, 50]);
    }

    #[test]
    fn encode_color_fill_length_follows_led_count() {
        for &channel in Channel::ALL {
            let payload = encode_color_fill(channel, Color::new(1, 2, 3));
            assert_eq!(payload.len(), 9 + 3 * channel.led_count());
            assert_eq!(payload.len(), fill_report_len(channel));
        }
        assert_eq!(fill_report_len(Channel::Pump), 57);
        assert_eq!(fill_report_len(Channel::Fan1), 63);
    }

    #[test]
    fn encode_color_fill_header() {
        let payload = encode_color_fill(Channel::Pump, Color::new(0, 0, 0));
        assert_eq!(
            &payload.as_bytes()[..FILL_HEADER_LEN],
            &[0, 0x32, 0x01, 0x07, 0, 0, 0, 0, 0]
        );

        let payload = encode_color_fill(Channel::Fan2, Color::new(0, 0, 0));
        assert_eq!(
            &payload.as_bytes()[..FILL_HEADER_LEN],
            &[0, 0x40, 0x01, 0x07, 0, 0, 0, 0, 2]
        );
    }

    #[test]
    fn encode_color_fill_uses_grb_order() {
        let (r, g, b) = (0x11, 0x22, 0x33);
        let payload = encode_color_fill(Channel::Pump, Color::new(r, g, b));
        let leds: Vec<&[u8]> = payload.as_bytes()[FILL_HEADER_LEN..]
            .chunks(BYTES_PER_LED)
            .collect();
        assert_eq!(leds.len(), Channel::Pump.led_count());
        for led in leds {
            assert_eq!(led, &[g, r, b]);
            assert_ne!(led, &[r, g, b]);
        }
    }

    #[test]
    fn payload_display_is_hex() {
        let payload = encode_brightness(Channel::Fan3, validate_brightness(100).unwrap());
        assert_eq!(payload.to_string(), "00 70 01 03 64");
    }
}
