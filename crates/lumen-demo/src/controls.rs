use lumen_engine::input::{InputFrame, InputState, Key};
use lumen_trace::{Camera, Move, Turn};

const MOVE_BINDINGS: [(Key, Move); 6] = [
    (Key::W, Move::Forward),
    (Key::S, Move::Backward),
    (Key::A, Move::Left),
    (Key::D, Move::Right),
    (Key::Space, Move::Up),
    (Key::Shift, Move::Down),
];

const TURN_BINDINGS: [(Key, Turn); 4] = [
    (Key::ArrowLeft, Turn::YawLeft),
    (Key::ArrowRight, Turn::YawRight),
    (Key::ArrowUp, Turn::PitchUp),
    (Key::ArrowDown, Turn::PitchDown),
];

/// One-shot actions bound to key presses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    ToggleMoveMode,
    Screenshot,
    Quit,
}

/// Maps held keys to camera motion.
#[derive(Debug, Clone)]
pub struct Controls {
    /// World units per second.
    pub move_speed: f32,
    /// Radians per second.
    pub turn_speed: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self { move_speed: 3.0, turn_speed: 1.5 }
    }
}

impl Controls {
    /// Applies every held binding for a frame lasting `dt` seconds.
    pub fn apply(&self, input: &InputState, camera: &mut Camera, dt: f32) {
        for (key, tag) in MOVE_BINDINGS {
            if input.key_down(key) {
                camera.move_by(tag, self.move_speed * dt);
            }
        }
        for (key, tag) in TURN_BINDINGS {
            if input.key_down(key) {
                camera.turn(tag, self.turn_speed * dt);
            }
        }
    }

    /// Actions whose key went down this frame.
    pub fn actions(&self, frame: &InputFrame) -> Vec<Action> {
        let mut out = Vec::new();
        if frame.pressed(Key::Escape) {
            out.push(Action::Quit);
        }
        if frame.pressed(Key::Tab) {
            out.push(Action::ToggleMoveMode);
        }
        if frame.pressed(Key::F12) {
            out.push(Action::Screenshot);
        }
        out
    }
}
