//! Position updates exchanged with other participants.
//!
//! The transport is a collaborator behind [`RemoteChannel`]; this module only
//! owns the message shape, its JSON encoding, and the mapping from the local
//! camera to the normalized coordinates peers draw markers at.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Camera;
use crate::error::RemoteError;

/// One participant's normalized position, `x` and `y` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

impl PositionUpdate {
    pub fn new(id: impl Into<String>, x: f32, y: f32) -> Self {
        Self { id: id.into(), x, y }
    }

    /// Serializes to a JSON object `{"id": .., "x": .., "y": ..}`.
    pub fn encode(&self) -> Result<Vec<u8>, RemoteError> {
        serde_json::to_vec(self).map_err(RemoteError::Encode)
    }

    /// Parses and validates a JSON payload.
    pub fn decode(bytes: &[u8]) -> Result<Self, RemoteError> {
        let update: PositionUpdate = serde_json::from_slice(bytes).map_err(RemoteError::Decode)?;
        update.validate()?;
        Ok(update)
    }

    fn validate(&self) -> Result<(), RemoteError> {
        if self.id.is_empty() {
            return Err(RemoteError::Invalid("empty id".into()));
        }
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !in_unit(self.x) || !in_unit(self.y) {
            return Err(RemoteError::Invalid(format!(
                "position ({}, {}) outside [0, 1]",
                self.x, self.y
            )));
        }
        Ok(())
    }
}

/// Random identifier for the local participant, stable for the session.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// World-space rectangle on the XZ plane that maps onto the unit square.
///
/// World X maps to screen x (left to right) and world Z maps to screen y with
/// far (+Z) at the top, so the overlay reads like a minimap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlayArea {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self { min_x: -10.0, max_x: 10.0, min_z: -10.0, max_z: 10.0 }
    }
}

impl PlayArea {
    /// Normalized `(x, y)` of the camera, clamped to `[0, 1]`.
    pub fn normalize(&self, camera: &Camera) -> (f32, f32) {
        let norm = |v: f32, lo: f32, hi: f32| {
            let span = hi - lo;
            if span > 0.0 { ((v - lo) / span).clamp(0.0, 1.0) } else { 0.5 }
        };
        let p = camera.position;
        (
            norm(p.x, self.min_x, self.max_x),
            1.0 - norm(p.z, self.min_z, self.max_z),
        )
    }
}

/// Publishes the local position only when it changes.
#[derive(Debug, Clone)]
pub struct PositionPublisher {
    id: SessionId,
    area: PlayArea,
    last: Option<(f32, f32)>,
}

impl PositionPublisher {
    pub fn new(id: SessionId, area: PlayArea) -> Self {
        Self { id, area, last: None }
    }

    #[inline]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns an update if the camera's normalized position moved since the
    /// last call that returned one.
    pub fn poll(&mut self, camera: &Camera) -> Option<PositionUpdate> {
        let pos = self.area.normalize(camera);
        if self.last == Some(pos) {
            return None;
        }
        self.last = Some(pos);
        Some(PositionUpdate::new(self.id.as_str(), pos.0, pos.1))
    }
}

/// Pub/sub transport for position updates.
///
/// Delivery is best effort and may repeat messages, including the sender's own.
pub trait RemoteChannel {
    fn publish(&mut self, update: &PositionUpdate) -> Result<(), RemoteError>;

    /// Drains every update received since the previous call without blocking.
    fn poll(&mut self) -> Vec<PositionUpdate>;
}

/// In-process channel pair; each end receives what the other publishes.
///
/// Messages pass through the JSON codec so the wire format is exercised.
#[derive(Debug)]
pub struct LoopbackChannel {
    tx: mpsc::Sender<Vec<u8>>,
    rx: mpsc::Receiver<Vec<u8>>,
}

impl LoopbackChannel {
    pub fn pair() -> (Self, Self) {
        let (tx_a, rx_b) = mpsc::channel();
        let (tx_b, rx_a) = mpsc::channel();
        (Self { tx: tx_a, rx: rx_a }, Self { tx: tx_b, rx: rx_b })
    }
}

impl RemoteChannel for LoopbackChannel {
    fn publish(&mut self, update: &PositionUpdate) -> Result<(), RemoteError> {
        let bytes = update.encode()?;
        self.tx.send(bytes).map_err(|_| RemoteError::Disconnected)
    }

    fn poll(&mut self) -> Vec<PositionUpdate> {
        self.rx
            .try_iter()
            .filter_map(|bytes| match PositionUpdate::decode(&bytes) {
                Ok(update) => Some(update),
                Err(e) => {
                    log::warn!("dropping remote message: {e}");
                    None
                }
            })
            .collect()
    }
}
