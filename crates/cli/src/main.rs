//! hanbo CLI: command-line lighting control for the Razer Hanbo cooler.

use anyhow::Result;
use clap::Parser;
use hanbo_core::channel::{self, REGISTRY};
use hanbo_core::command::{LightingRequest, PlannedWrite};
use hanbo_core::device::{self, DeviceInfo};
use hanbo_core::error::Error;
use hanbo_core::transport::{apply_plan, HidTransport};
use hanbo_core::{HANBO_PID, RAZER_VID};
use tracing::debug;

struct CliHidTransport {
    device: hidapi::HidDevice,
}

impl CliHidTransport {
    /// Open the lighting interface of the first connected cooler.
    fn open(api: &hidapi::HidApi) -> hanbo_core::error::Result<(Self, DeviceInfo)> {
        let devices = device::discover_in(api);
        let info = device::select_lighting_interface(&devices)?.clone();

        let path = std::ffi::CString::new(info.path.clone())
            .map_err(|e| Error::Hid(format!("invalid device path: {e}")))?;
        let device = match api.open_path(&path) {
            Ok(device) => device,
            Err(path_err) => {
                debug!(path = %info.path, error = %path_err, "Open by path failed, trying VID/PID");
                api.open(RAZER_VID, HANBO_PID).map_err(|fallback_err| {
                    device::open_error(
                        &info,
                        &[
                            format!("path {}: {path_err}", info.path),
                            format!("VID/PID: {fallback_err}"),
                        ],
                    )
                })?
            }
        };

        debug!(path = %info.path, "Opened lighting interface");
        Ok((Self { device }, info))
    }
}

impl HidTransport for CliHidTransport {
    fn write_report(&self, data: &[u8]) -> hanbo_core::error::Result<usize> {
        self.device
            .write(data)
            .map_err(|e| Error::Hid(format!("write: {e}")))
    }
}

#[derive(Parser)]
#[command(
    name = "hanbo",
    version,
    about = "Controls the ARGB lighting of a Razer Hanbo cooler"
)]
struct Cli {
    /// Target of the command.
    #[arg(
        long,
        default_value = "all",
        value_parser = ["all", "pump", "fan1", "fan2", "fan3", "fans"]
    )]
    channel: String,

    /// Brightness of the channel (0-100).
    #[arg(short, long, allow_negative_numbers = true)]
    brightness: Option<i64>,

    /// Fill the channel with a static color (#RRGGBB).
    #[arg(long)]
    fill: Option<String>,

    /// Print the reports instead of writing them.
    #[arg(long)]
    dry_run: bool,

    /// Print the dry run as JSON.
    #[arg(long, requires = "dry_run")]
    json: bool,

    /// List connected coolers and exit.
    #[arg(long)]
    list_devices: bool,

    /// List lighting channels and exit.
    #[arg(long)]
    list_channels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.list_channels {
        list_channels();
        return Ok(());
    }

    if cli.list_devices {
        let devices = device::discover_devices()?;
        if devices.is_empty() {
            println!("No Razer Hanbo cooler found.");
        } else {
            for dev in &devices {
                println!("{}", dev.summary());
            }
        }
        return Ok(());
    }

    // Validate everything before touching the device.
    let request =
        LightingRequest::from_input(&cli.channel, cli.brightness, cli.fill.as_deref())?;
    let plan = request.plan();

    if cli.dry_run {
        print_plan(&plan, cli.json)?;
        return Ok(());
    }

    let api = hidapi::HidApi::new().map_err(|e| anyhow::anyhow!("hidapi init: {e}"))?;
    let (transport, info) = CliHidTransport::open(&api)?;
    println!("Found device: {}", info.display_name());

    if request.is_empty() {
        println!("Nothing to do. Use --brightness or --fill.");
        return Ok(());
    }

    apply_plan(&transport, &plan, |write| {
        println!("{}", write.command.describe(write.channel));
    })
    .map_err(|e| match e.partial_update_note() {
        Some(note) => anyhow::Error::new(e).context(format!("lighting update incomplete: {note}")),
        None => e.into(),
    })?;

    Ok(())
}

fn print_plan(plan: &[PlannedWrite], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    if plan.is_empty() {
        println!("No reports to write.");
    }
    for write in plan {
        println!("{}", write.command.describe(write.channel));
        println!("  {} bytes: {}", write.payload.len(), write.payload);
    }
    Ok(())
}

fn list_channels() {
    println!("{:<8} {:>3} {:>5} {:>6}", "CHANNEL", "ID", "LEDS", "OPCODE");
    for spec in &REGISTRY {
        println!(
            "{:<8} {:>3} {:>5}   0x{:02X}",
            spec.alias, spec.channel_id, spec.led_count, spec.fill_opcode
        );
    }
    println!("Groups: {}", channel::group_names().join(", "));
}
