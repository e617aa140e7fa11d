//! Raw device input to simulation commands
//!
//! The presentation shell fills a `RawInput` snapshot each frame. The router
//! turns it into a `TickInput`, tracks trigger edges across frames, and
//! switches the left player between controller and keyboard when joystick 0
//! comes and goes.
//!
//! Bindings:
//! - P1 controller: left stick moves, right stick aims, RT shoots, LT throws
//! - P1 keyboard: WASD moves, mouse aims, E or left click shoots, Space throws
//! - P2: arrow keys move, mouse aims, right click shoots, right Ctrl throws
//! - R restarts after game over

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Aim, InputMode, PlayerInput, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    E,
    R,
    Up,
    Down,
    Left,
    Right,
    Space,
    RControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// Snapshot of the one supported joystick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JoystickState {
    /// Movement stick, each axis in [-100, 100]
    pub left_stick: Vec2,
    /// Aim stick, each axis in [-100, 100]
    pub right_stick: Vec2,
    /// Combined trigger axis: positive is RT, negative is LT
    pub z: f32,
    /// Digital RT (button 7)
    pub rt_button: bool,
    /// Digital LT (button 6)
    pub lt_button: bool,
}

impl JoystickState {
    fn right_trigger(&self) -> bool {
        self.z > TRIGGER_THRESHOLD || self.rt_button
    }

    fn left_trigger(&self) -> bool {
        self.z < -TRIGGER_THRESHOLD || self.lt_button
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoystickEvent {
    Connected(u32),
    Disconnected(u32),
}

/// Everything the shell polled this frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInput {
    /// Keys currently held
    pub keys_down: Vec<Key>,
    /// Keys that went down this frame
    pub keys_pressed: Vec<Key>,
    /// Pointer in arena coordinates
    pub mouse_pos: Vec2,
    /// Mouse buttons that went down this frame
    pub mouse_pressed: Vec<MouseButton>,
    /// Joystick 0, if connected
    pub joystick: Option<JoystickState>,
    pub joystick_events: Vec<JoystickEvent>,
}

impl RawInput {
    fn held(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn clicked(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    /// Unit-ish direction from four held keys
    fn key_axis(&self, up: Key, down: Key, left: Key, right: Key) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.held(up) {
            dir.y -= 1.0;
        }
        if self.held(down) {
            dir.y += 1.0;
        }
        if self.held(left) {
            dir.x -= 1.0;
        }
        if self.held(right) {
            dir.x += 1.0;
        }
        dir
    }
}

/// Turns raw device state into per-player commands
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    /// Device currently assigned to the left player
    pub left_mode: InputMode,
    rt_was_pressed: bool,
    lt_was_pressed: bool,
}

impl InputRouter {
    /// Start in controller mode when a joystick is already plugged in
    pub fn new(joystick_connected: bool) -> Self {
        if joystick_connected {
            log::info!("Controller connected, P1 uses the controller");
        } else {
            log::info!("No controller found, P1 uses the keyboard");
        }
        Self {
            left_mode: if joystick_connected {
                InputMode::Controller
            } else {
                InputMode::KeyboardMouse
            },
            rt_was_pressed: false,
            lt_was_pressed: false,
        }
    }

    pub fn route(&mut self, raw: &RawInput) -> TickInput {
        for event in &raw.joystick_events {
            match *event {
                JoystickEvent::Connected(0) => {
                    self.left_mode = InputMode::Controller;
                    log::info!("Controller connected");
                }
                JoystickEvent::Disconnected(0) => {
                    self.left_mode = InputMode::KeyboardMouse;
                    log::info!("Controller disconnected");
                }
                _ => {}
            }
        }

        let left = match (self.left_mode, raw.joystick) {
            (InputMode::Controller, Some(pad)) => self.controller(&pad),
            _ => {
                self.rt_was_pressed = false;
                self.lt_was_pressed = false;
                keyboard_left(raw)
            }
        };

        let left = PlayerInput {
            mode: Some(self.left_mode),
            ..left
        };
        let right = PlayerInput {
            mode: Some(InputMode::KeyboardMouse),
            ..keyboard_right(raw)
        };

        TickInput {
            players: [left, right],
            restart: raw.pressed(Key::R),
        }
    }

    /// Left player on the gamepad; triggers fire on their rising edge only
    fn controller(&mut self, pad: &JoystickState) -> PlayerInput {
        let movement = Vec2::new(
            beyond_deadzone(pad.left_stick.x) / 100.0,
            beyond_deadzone(pad.left_stick.y) / 100.0,
        );

        let aim = if pad.right_stick.x.abs() > JOYSTICK_DEADZONE
            || pad.right_stick.y.abs() > JOYSTICK_DEADZONE
        {
            Aim::Angle(pad.right_stick.y.atan2(pad.right_stick.x))
        } else {
            Aim::Keep
        };

        let rt = pad.right_trigger();
        let lt = pad.left_trigger();
        let shoot = rt && !self.rt_was_pressed;
        let throw = lt && !self.lt_was_pressed;
        self.rt_was_pressed = rt;
        self.lt_was_pressed = lt;

        PlayerInput {
            movement,
            aim,
            shoot,
            throw,
            mode: None,
        }
    }
}

fn beyond_deadzone(axis: f32) -> f32 {
    if axis.abs() > JOYSTICK_DEADZONE { axis } else { 0.0 }
}

fn keyboard_left(raw: &RawInput) -> PlayerInput {
    PlayerInput {
        movement: raw.key_axis(Key::W, Key::S, Key::A, Key::D),
        aim: Aim::Point(raw.mouse_pos),
        shoot: raw.pressed(Key::E) || raw.clicked(MouseButton::Left),
        throw: raw.pressed(Key::Space),
        mode: None,
    }
}

fn keyboard_right(raw: &RawInput) -> PlayerInput {
    PlayerInput {
        movement: raw.key_axis(Key::Up, Key::Down, Key::Left, Key::Right),
        aim: Aim::Point(raw.mouse_pos),
        shoot: raw.clicked(MouseButton::Right),
        throw: raw.pressed(Key::RControl),
        mode: None,
    }
}
