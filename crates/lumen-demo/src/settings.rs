use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_BIND: &str = "0.0.0.0:47800";

/// Peers silent for this long disappear from the overlay.
pub const DEFAULT_PLAYER_EXPIRY: Duration = Duration::from_secs(10);

/// Network settings read from the environment.
///
/// - `LUMEN_BIND`: local UDP address (default `0.0.0.0:47800`)
/// - `LUMEN_PEERS`: comma-separated peer addresses; networking is off when
///   unset or empty
#[derive(Debug, Clone, PartialEq)]
pub struct NetSettings {
    pub bind: SocketAddr,
    pub peers: Vec<SocketAddr>,
    pub player_expiry: Duration,
}

impl NetSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_raw = lookup("LUMEN_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = resolve(&bind_raw).with_context(|| format!("LUMEN_BIND={bind_raw}"))?;

        let peers = match lookup("LUMEN_PEERS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| resolve(s).with_context(|| format!("LUMEN_PEERS entry {s:?}")))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self { bind, peers, player_expiry: DEFAULT_PLAYER_EXPIRY })
    }

    #[inline]
    pub fn networking_enabled(&self) -> bool {
        !self.peers.is_empty()
    }
}

fn resolve(addr: &str) -> Result<SocketAddr> {
    addr.to_socket_addrs()
        .context("not a socket address")?
        .next()
        .context("address resolved to nothing")
}
