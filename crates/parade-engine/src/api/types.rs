use serde::{Deserialize, Serialize};

/// Rotation sense of a body. Serialized as `1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    /// Increasing angle.
    #[default]
    Forward,
    /// Decreasing angle.
    Reverse,
}

impl Direction {
    /// `+1.0` or `-1.0`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Reverse),
            other => Err(format!("direction must be 1 or -1, got {other}")),
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Whether a host loop should schedule its next callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

impl LoopControl {
    pub fn from_running(running: bool) -> Self {
        if running {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        }
    }

    pub fn is_continue(self) -> bool {
        self == LoopControl::Continue
    }
}

/// Loop arming instructions produced by engine transitions.
///
/// Each flag is set only when the host has to act; a transition that finds
/// the loop already in the wanted state leaves the flag clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopRequest {
    /// Arm the fixed-interval timer that calls `MotionEngine::tick`.
    pub start_ticks: bool,
    /// Disarm that timer now.
    pub stop_ticks: bool,
    /// Schedule a frame callback that calls `MotionEngine::frame`.
    pub start_frames: bool,
}

impl LoopRequest {
    pub const START_TICKS: u32 = 1;
    pub const STOP_TICKS: u32 = 2;
    pub const START_FRAMES: u32 = 4;

    pub const NONE: Self = Self {
        start_ticks: false,
        stop_ticks: false,
        start_frames: false,
    };

    /// Pack into bit flags for hosts that cannot read structs (WASM).
    pub fn bits(self) -> u32 {
        let mut bits = 0;
        if self.start_ticks {
            bits |= Self::START_TICKS;
        }
        if self.stop_ticks {
            bits |= Self::STOP_TICKS;
        }
        if self.start_frames {
            bits |= Self::START_FRAMES;
        }
        bits
    }
}
