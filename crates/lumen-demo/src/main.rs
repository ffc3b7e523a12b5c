mod controls;
mod game;
mod net;
mod screenshot;
mod settings;
mod world;

use anyhow::Result;
use lumen_engine::device::GpuInit;
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::window::{Runtime, RuntimeConfig};
use lumen_trace::{RemoteChannel, RemotePlayers, SessionId};

use crate::game::Game;
use crate::net::UdpChannel;
use crate::settings::NetSettings;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let net = NetSettings::from_env()?;
    let session = SessionId::generate();
    log::info!("session {session}");

    let channel: Option<Box<dyn RemoteChannel>> = if net.networking_enabled() {
        Some(Box::new(UdpChannel::bind(net.bind, net.peers.clone())?))
    } else {
        log::info!("LUMEN_PEERS not set; playing offline");
        None
    };

    let game = Game::new(session, RemotePlayers::with_expiry(net.player_expiry), channel);

    // Vsync would pin the measured rate to the display refresh.
    let gpu = GpuInit::default().with_present_mode(wgpu::PresentMode::AutoNoVsync);
    let window = RuntimeConfig::default().with_title("lumen").with_size(960.0, 540.0);

    Runtime::run(window, gpu, game)
}
