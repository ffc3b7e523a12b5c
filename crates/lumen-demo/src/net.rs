use std::io;
use std::net::{SocketAddr, UdpSocket};

use anyhow::{Context, Result};
use lumen_trace::{PositionUpdate, RemoteChannel, RemoteError};

/// Largest datagram accepted; position updates are well under 200 bytes.
const MAX_DATAGRAM: usize = 1024;

/// Position updates over non-blocking UDP, one JSON object per datagram.
///
/// Every update is sent to each configured peer. Nothing is retried or
/// acknowledged; a lost datagram is superseded by the next movement.
#[derive(Debug)]
pub struct UdpChannel {
    socket: UdpSocket,
    peers: Vec<SocketAddr>,
    buf: Box<[u8; MAX_DATAGRAM]>,
}

impl UdpChannel {
    pub fn bind(addr: SocketAddr, peers: Vec<SocketAddr>) -> Result<Self> {
        let socket = UdpSocket::bind(addr).with_context(|| format!("failed to bind UDP {addr}"))?;
        socket
            .set_nonblocking(true)
            .context("failed to make UDP socket non-blocking")?;

        let channel = Self { socket, peers, buf: Box::new([0; MAX_DATAGRAM]) };
        log::info!("udp channel on {} -> {} peer(s)", channel.local_addr()?, channel.peers.len());
        Ok(channel)
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl RemoteChannel for UdpChannel {
    fn publish(&mut self, update: &PositionUpdate) -> Result<(), RemoteError> {
        let bytes = update.encode()?;
        for peer in &self.peers {
            match self.socket.send_to(&bytes, peer) {
                Ok(_) => {}
                // Full send buffer: drop this update.
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn poll(&mut self) -> Vec<PositionUpdate> {
        let mut out = Vec::new();
        loop {
            match self.socket.recv_from(&mut self.buf[..]) {
                Ok((len, from)) => match PositionUpdate::decode(&self.buf[..len]) {
                    Ok(update) => out.push(update),
                    Err(e) => log::warn!("dropping datagram from {from}: {e}"),
                },
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                // ICMP port-unreachable from a peer that is not up yet.
                Err(e) if e.kind() == io::ErrorKind::ConnectionReset => continue,
                Err(e) => {
                    log::warn!("udp receive failed: {e}");
                    break;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn local() -> SocketAddr {
        "127.0.0.1:0".parse().unwrap()
    }

    fn poll_until(ch: &mut UdpChannel, n: usize) -> Vec<PositionUpdate> {
        let mut got = Vec::new();
        for _ in 0..200 {
            got.extend(ch.poll());
            if got.len() >= n {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        got
    }

    #[test]
    fn update_reaches_peer() {
        let mut b = UdpChannel::bind(local(), vec![]).unwrap();
        let mut a = UdpChannel::bind(local(), vec![b.local_addr().unwrap()]).unwrap();

        let sent = PositionUpdate::new("a", 0.25, 0.5);
        a.publish(&sent).unwrap();

        assert_eq!(poll_until(&mut b, 1), vec![sent]);
    }

    #[test]
    fn garbage_datagrams_are_dropped() {
        let mut b = UdpChannel::bind(local(), vec![]).unwrap();
        let raw = UdpSocket::bind(local()).unwrap();
        let to = b.local_addr().unwrap();

        raw.send_to(b"{\"id\":\"x\"}", to).unwrap();
        raw.send_to(br#"{"id":"x","x":0.1,"y":0.9}"#, to).unwrap();

        let got = poll_until(&mut b, 1);
        assert_eq!(got, vec![PositionUpdate::new("x", 0.1, 0.9)]);
    }

    #[test]
    fn poll_without_traffic_is_empty() {
        let mut ch = UdpChannel::bind(local(), vec![]).unwrap();
        assert!(ch.poll().is_empty());
    }
}
