use ndarray::Array2;

use crate::*;

/// What the adapter draws for one cell this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CellView {
    /// Face-down card showing its checkerboard back.
    Hidden { back: CardBack },
    /// Mid-flip: `scale_x` shrinks the departing face to the midpoint and
    /// grows the destination face after it.
    Flipping {
        progress: f32,
        scale_x: f32,
        face: FaceView,
    },
    /// Settled face-up card awaiting its partner or the mismatch window.
    FaceUp(PairId),
    /// Retired card; the adapter grays it out.
    Matched(PairId),
}

/// The face a mid-flip card shows this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FaceView {
    Back(CardBack),
    Front(PairId),
}

/// The hover-fill ring for the tracked cell, if any.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoverView {
    pub cell: Coord2,
    pub progress: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StatsView {
    pub elapsed: Millis,
    pub total_flips: u32,
    pub matched_pairs: PairCount,
}

/// Immutable per-frame view of the whole game, handed to the adapter for
/// drawing. Capturing one drains the engine's event queue, so each
/// `MatchFound` is observed exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub cells: Array2<CellView>,
    pub hover: Option<HoverView>,
    pub stats: StatsView,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(engine: &mut GameEngine, now: Millis) -> Self {
        let size = engine.deck().size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            cell_view(engine, coords, now)
        });

        let hover = engine.hover_fill().map(|fill| HoverView {
            cell: fill.cell,
            progress: fill.progress(now),
        });

        let stats = engine.stats();
        Self {
            cells,
            hover,
            stats: StatsView {
                elapsed: engine.elapsed(now),
                total_flips: stats.total_flips,
                matched_pairs: stats.matched_pairs,
            },
            events: engine.take_events(),
        }
    }
}

fn cell_view(engine: &GameEngine, coords: Coord2, now: Millis) -> CellView {
    let face = engine.deck()[coords];
    match engine.card_at(coords) {
        CardState::Hidden => CellView::Hidden {
            back: CardBack::for_cell(coords),
        },
        CardState::Revealed { .. } => CellView::FaceUp(face),
        CardState::Matched => CellView::Matched(face),
        CardState::FlippingForward { started_at } => {
            flipping_view(coords, face, FlipDirection::Forward, started_at, now)
        }
        CardState::FlippingBackward { started_at } => {
            flipping_view(coords, face, FlipDirection::Backward, started_at, now)
        }
    }
}

fn flipping_view(
    coords: Coord2,
    face: PairId,
    direction: FlipDirection,
    started_at: Millis,
    now: Millis,
) -> CellView {
    let eased = ease_in_out_cubic(flip_progress(started_at, now));
    let frame = flip_frame(direction, eased);
    let face = if frame.front_visible {
        FaceView::Front(face)
    } else {
        FaceView::Back(CardBack::for_cell(coords))
    };
    CellView::Flipping {
        progress: eased,
        scale_x: frame.scale_x,
        face,
    }
}

/// Renders elapsed play time as `MM:SS` for the HUD.
pub fn format_clock(elapsed: Millis) -> String {
    let total_secs = elapsed / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
