use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::paint::Color;
use crate::remote::PositionUpdate;
use crate::surface::Surface;

/// Marker radius in output pixels.
pub const MARKER_RADIUS: u32 = 5;

/// Last known position of a peer, normalized to `[0, 1]` screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct RemotePlayer {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
struct Entry {
    player: RemotePlayer,
    updated: Instant,
}

/// Peer id → last position, drawn as markers over the traced frame.
///
/// Entries are created or overwritten by updates (last write wins). With an
/// expiry set, entries not refreshed within it are dropped by [`prune`](Self::prune).
#[derive(Debug, Clone)]
pub struct RemotePlayers {
    entries: HashMap<String, Entry>,
    local_id: Option<String>,
    expiry: Option<Duration>,
    pub marker_color: Color,
}

impl Default for RemotePlayers {
    fn default() -> Self {
        Self::new()
    }
}

impl RemotePlayers {
    /// Mapping whose entries never expire.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            local_id: None,
            expiry: None,
            marker_color: Color::new(255, 64, 64),
        }
    }

    /// Mapping that forgets peers silent for longer than `expiry`.
    pub fn with_expiry(expiry: Duration) -> Self {
        Self { expiry: Some(expiry), ..Self::new() }
    }

    /// Ignores updates carrying `id` (our own messages echoed back).
    pub fn ignoring(mut self, id: impl Into<String>) -> Self {
        self.local_id = Some(id.into());
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RemotePlayer> {
        self.entries.get(id).map(|e| &e.player)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemotePlayer> {
        self.entries.values().map(|e| &e.player)
    }

    /// Records `update` as received at `now`.
    pub fn apply(&mut self, update: PositionUpdate, now: Instant) {
        if self.local_id.as_deref() == Some(update.id.as_str()) {
            return;
        }

        let PositionUpdate { id, x, y } = update;
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.player.x = x;
                entry.player.y = y;
                entry.updated = now;
            }
            None => {
                log::info!("remote player {id} joined");
                self.entries.insert(id.clone(), Entry { player: RemotePlayer { id, x, y }, updated: now });
            }
        }
    }

    /// Drops entries older than the expiry. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let Some(expiry) = self.expiry else { return 0 };
        let before = self.entries.len();
        self.entries.retain(|id, e| {
            let keep = now.saturating_duration_since(e.updated) <= expiry;
            if !keep {
                log::debug!("remote player {id} expired");
            }
            keep
        });
        before - self.entries.len()
    }

    /// Draws one filled disc per player at its denormalized position.
    ///
    /// Positions are clamped to `[0, 1]`; non-finite ones are not drawn.
    pub fn draw(&self, surface: &mut impl Surface) {
        let (w, h) = (surface.width(), surface.height());
        for player in self.iter() {
            if !(player.x.is_finite() && player.y.is_finite()) {
                continue;
            }
            let cx = (player.x.clamp(0.0, 1.0) * w as f32).round() as i64;
            let cy = (player.y.clamp(0.0, 1.0) * h as f32).round() as i64;
            fill_disc(surface, cx, cy, MARKER_RADIUS as i64, self.marker_color);
        }
    }
}

/// Fills a disc as one horizontal span per row.
fn fill_disc(surface: &mut impl Surface, cx: i64, cy: i64, r: i64, color: Color) {
    let (w, h) = (surface.width() as i64, surface.height() as i64);
    for dy in -r..=r {
        let y = cy + dy;
        if y < 0 || y >= h {
            continue;
        }
        let half = ((r * r - dy * dy) as f64).sqrt() as i64;
        let x0 = (cx - half).max(0);
        let x1 = (cx + half + 1).min(w);
        if x0 >= x1 {
            continue;
        }
        surface.set_pixel_block(x0 as u32, y as u32, (x1 - x0) as u32, 1, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Framebuffer;

    fn update(id: &str, x: f32, y: f32) -> PositionUpdate {
        PositionUpdate::new(id, x, y)
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn decoded_update_round_trips_into_mapping() {
        let sent = update("peer-1", 0.125, 0.875);
        let received = PositionUpdate::decode(&sent.encode().unwrap()).unwrap();

        let mut players = RemotePlayers::new();
        players.apply(received, Instant::now());

        let p = players.get("peer-1").unwrap();
        assert_eq!((p.x, p.y), (sent.x, sent.y));
    }

    #[test]
    fn last_write_wins() {
        let mut players = RemotePlayers::new();
        let now = Instant::now();
        players.apply(update("a", 0.1, 0.1), now);
        players.apply(update("a", 0.9, 0.2), now);
        players.apply(update("b", 0.5, 0.5), now);

        assert_eq!(players.len(), 2);
        let a = players.get("a").unwrap();
        assert_eq!((a.x, a.y), (0.9, 0.2));
    }

    #[test]
    fn own_echo_is_ignored() {
        let mut players = RemotePlayers::new().ignoring("me");
        players.apply(update("me", 0.5, 0.5), Instant::now());
        assert!(players.is_empty());
    }

    // ── prune ─────────────────────────────────────────────────────────────

    #[test]
    fn entries_persist_without_expiry() {
        let mut players = RemotePlayers::new();
        let t0 = Instant::now();
        players.apply(update("a", 0.5, 0.5), t0);
        assert_eq!(players.prune(t0 + Duration::from_secs(3600)), 0);
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn stale_entries_expire() {
        let mut players = RemotePlayers::with_expiry(Duration::from_secs(10));
        let t0 = Instant::now();
        players.apply(update("old", 0.5, 0.5), t0);
        players.apply(update("fresh", 0.5, 0.5), t0 + Duration::from_secs(8));

        assert_eq!(players.prune(t0 + Duration::from_secs(10)), 0);
        assert_eq!(players.prune(t0 + Duration::from_secs(11)), 1);
        assert!(players.get("old").is_none());
        assert!(players.get("fresh").is_some());
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn marker_is_drawn_at_denormalized_position() {
        let mut players = RemotePlayers::new();
        players.apply(update("a", 0.5, 0.25), Instant::now());

        let mut fb = Framebuffer::new(100, 80);
        players.draw(&mut fb);

        let c = players.marker_color;
        assert_eq!(fb.pixel(50, 20), Some(c));
        assert_eq!(fb.pixel(50 + MARKER_RADIUS, 20), Some(c));
        assert_eq!(fb.pixel(50 + MARKER_RADIUS + 1, 20), Some(Color::black()));
        // Diagonal corner of the bounding box is outside the disc.
        assert_eq!(fb.pixel(50 + MARKER_RADIUS, 20 + MARKER_RADIUS), Some(Color::black()));
    }

    #[test]
    fn out_of_range_positions_are_clamped_or_skipped() {
        let mut players = RemotePlayers::new();
        let now = Instant::now();
        players.apply(update("far", 1e30, 0.5), now);
        players.apply(update("below", 0.5, -1e30), now);
        players.apply(update("nan", f32::NAN, f32::INFINITY), now);

        let mut fb = Framebuffer::new(10, 10);
        players.draw(&mut fb);

        let c = players.marker_color;
        assert_eq!(fb.pixel(9, 5), Some(c));
        assert_eq!(fb.pixel(5, 0), Some(c));
    }

    #[test]
    fn marker_at_edge_is_clipped() {
        let mut players = RemotePlayers::new();
        players.apply(update("corner", 1.0, 1.0), Instant::now());
        let mut fb = Framebuffer::new(20, 20);
        players.draw(&mut fb);
        assert_eq!(fb.pixel(19, 19), Some(players.marker_color));
    }
}
