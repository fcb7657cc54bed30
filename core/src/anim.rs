use serde::{Deserialize, Serialize};

use crate::{FLIP_DURATION, Millis};

/// Which way a flip travels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipDirection {
    /// Back face to front face; the front appears only after the midpoint.
    Forward,
    /// Front face to back face; the front stays visible until the midpoint.
    Backward,
}

/// Ease-in-out cubic over normalized time `t` in [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Raw (uneased) progress of a flip started at `started_at`, in [0, 1].
#[inline]
pub fn flip_progress(started_at: Millis, now: Millis) -> f32 {
    let elapsed = now.saturating_sub(started_at);
    (elapsed as f32 / FLIP_DURATION as f32).clamp(0.0, 1.0)
}

/// One interpolated frame of a flip: which face shows and how wide it is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlipFrame {
    /// Horizontal scale of the rendered card; 0 is edge-on at the midpoint.
    pub scale_x: f32,
    /// Whether the front (pair) face is the visible one this frame.
    pub front_visible: bool,
}

/// Resolves a frame from eased progress. Before the midpoint the departing
/// face shrinks 1 -> 0, after it the destination face grows 0 -> 1. The
/// face switch happens exactly at 0.5, so a forward flip reveals late and a
/// backward flip hides late.
pub fn flip_frame(direction: FlipDirection, eased: f32) -> FlipFrame {
    let (scale_x, toward_front) = if eased < 0.5 {
        (1.0 - eased * 2.0, false)
    } else {
        ((eased - 0.5) * 2.0, true)
    };
    let front_visible = match direction {
        FlipDirection::Forward => toward_front,
        FlipDirection::Backward => !toward_front,
    };
    FlipFrame {
        scale_x,
        front_visible,
    }
}
