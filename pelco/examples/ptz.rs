use clap::{Parser, Subcommand};
use pelco::{
    protocol::{
        ExtendedCommand, FocusDirection, IrisDirection, PanDirection, PelcoD, TiltDirection,
        ZoomDirection,
    },
    PelcoUdpChannel, Result,
};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Pelco-D PTZ camera control.
///
/// Renders a single Pelco-D frame, prints it in hexadecimal and binary, and
/// optionally sends it to a serial server which accepts raw frames over UDP.
///
/// Move camera 1 left at speed 0x20:
///
/// ```sh
/// ptz --address 1 pan left --speed 32
/// ```
///
/// Recall preset 3 on camera 2 via a serial server:
///
/// ```sh
/// ptz --address 2 --target 192.0.2.10:4001 extended go-to-preset 3
/// ```
#[derive(Debug, Parser)]
#[clap(verbatim_doc_comment)]
struct CliParser {
    /// Address of the camera.
    #[clap(short, long, default_value = "1")]
    pub address: u8,

    /// UDP serial server to send the frame to. When not set, the frame is
    /// only printed.
    #[clap(short, long)]
    pub target: Option<String>,

    #[clap(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Pan the camera.
    Pan {
        direction: PanDirection,

        /// Pan speed, from 1 to 63. Faster speeds use turbo.
        #[clap(short, long)]
        speed: Option<u8>,
    },

    /// Tilt the camera.
    Tilt {
        direction: TiltDirection,

        /// Tilt speed, from 1 to 63.
        #[clap(short, long)]
        speed: Option<u8>,
    },

    /// Zoom the lens.
    Zoom { direction: ZoomDirection },

    /// Focus the lens.
    Focus { direction: FocusDirection },

    /// Open or close the iris.
    Iris { direction: IrisDirection },

    /// Stop all movement.
    Stop,

    /// Switch the camera on, or off with --off.
    Power {
        #[clap(long)]
        off: bool,
    },

    /// Send an extended command.
    Extended { command: ExtendedCommand, value: u8 },
}

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .compact()
        .init();
    let opts = CliParser::parse();

    let mut camera = PelcoD::new(opts.address)?;
    match opts.action {
        Action::Pan { direction, speed } => camera.pan(direction, speed),
        Action::Tilt { direction, speed } => camera.tilt(direction, speed),
        Action::Zoom { direction } => camera.zoom(direction),
        Action::Focus { direction } => camera.focus(direction),
        Action::Iris { direction } => camera.iris(direction),
        Action::Stop => camera.stop(),
        Action::Power { off } => camera.camera_power(!off),
        Action::Extended { command, value } => camera.extended_command(command, value)?,
    }

    let frame = camera.render();
    println!("{}", frame.hex(" "));
    println!("{}", frame.bin(" "));

    if let Some(target) = opts.target {
        let mut chan = PelcoUdpChannel::new();
        chan.connect(target.as_str()).await?;
        chan.send(&frame).await?;
        info!("Sent {frame} to {target}");
    }

    Ok(())
}
