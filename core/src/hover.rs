use serde::{Deserialize, Serialize};

use crate::{Coord2, FILL_DURATION, Millis};

/// Dwell accumulator for the single cell currently hovered, if any.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoverFill {
    pub cell: Coord2,
    pub started_at: Millis,
}

impl HoverFill {
    /// Fill progress in [0, 1]; reaching 1.0 triggers the reveal.
    pub fn progress(&self, now: Millis) -> f32 {
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed as f32 / FILL_DURATION as f32).clamp(0.0, 1.0)
    }
}

/// Tracks hover dwell over eligible cells. Progress never carries over:
/// switching cells or leaving restarts the fill from zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverTracker {
    active: Option<HoverFill>,
}

impl HoverTracker {
    /// Feeds the cell the pointer currently rests on, already filtered for
    /// eligibility by the caller. Returns the cell whose fill just
    /// completed, at most once per dwell.
    pub fn update(&mut self, hovered: Option<Coord2>, now: Millis) -> Option<Coord2> {
        let Some(cell) = hovered else {
            self.active = None;
            return None;
        };

        match self.active {
            Some(fill) if fill.cell == cell => {
                if fill.progress(now) >= 1.0 {
                    self.active = None;
                    log::debug!("hover fill complete at {:?}", cell);
                    Some(cell)
                } else {
                    None
                }
            }
            _ => {
                self.active = Some(HoverFill {
                    cell,
                    started_at: now,
                });
                None
            }
        }
    }

    pub const fn fill(&self) -> Option<HoverFill> {
        self.active
    }
}
