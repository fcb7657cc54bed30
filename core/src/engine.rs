use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Pointer sample and clock reading for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickInput {
    /// Canvas-space pointer position, `None` while the pointer is absent.
    pub pointer: Option<(f32, f32)>,
    pub now: Millis,
}

impl TickInput {
    pub const fn new(pointer: Option<(f32, f32)>, now: Millis) -> Self {
        Self { pointer, now }
    }
}

/// One-shot notifications for the adapter, drained with each snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Two cells just matched; the adapter spawns an effect at each one.
    MatchFound { first: Coord2, second: Coord2 },
}

/// Play counters; monotonically non-decreasing for the life of the game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    /// Completed forward flips.
    pub total_flips: u32,
    pub matched_pairs: PairCount,
}

/// The whole game: deck, per-cell card states, hover dwell, mismatch
/// window, and counters. Everything is a function of the `Millis` timeline
/// fed through [`GameEngine::tick`]; there are no background timers and no
/// callbacks, so all waiting is elapsed-time comparison against stored
/// timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    deck: DeckLayout,
    table: TableLayout,
    board: Array2<CardState>,
    revealed: SmallVec<[Coord2; 2]>,
    hover: HoverTracker,
    mismatch_since: Option<Millis>,
    stats: GameStats,
    started_at: Millis,
    events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(deck: DeckLayout, now: Millis) -> Self {
        let size = deck.size();
        Self {
            deck,
            table: TableLayout::new(size),
            board: Array2::default(size.to_nd_index()),
            revealed: SmallVec::new(),
            hover: HoverTracker::default(),
            mismatch_since: None,
            stats: GameStats::default(),
            started_at: now,
            events: Vec::new(),
        }
    }

    pub fn deck(&self) -> &DeckLayout {
        &self.deck
    }

    pub fn table(&self) -> &TableLayout {
        &self.table
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn card_at(&self, coords: Coord2) -> CardState {
        self.board[coords.to_nd_index()]
    }

    /// Cells currently face-up or retracting and not yet matched, in reveal
    /// order. Never more than two.
    pub fn revealed_cells(&self) -> &[Coord2] {
        &self.revealed
    }

    pub fn hover_fill(&self) -> Option<HoverFill> {
        self.hover.fill()
    }

    pub fn elapsed(&self, now: Millis) -> Millis {
        now.saturating_sub(self.started_at)
    }

    /// All pairs matched. The adapter decides what a finished game shows;
    /// the engine keeps accepting ticks and simply has nothing left to do.
    pub fn is_complete(&self) -> bool {
        self.stats.matched_pairs == self.deck.pair_count()
    }

    /// Match notifications since the last drain; consumed exactly once.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// A cell can accumulate hover dwell only while hidden and while fewer
    /// than two cards are pending resolution. Re-evaluated every tick, so
    /// eligibility holds at the instant a fill completes, not just when the
    /// dwell began.
    pub fn is_eligible(&self, coords: Coord2) -> bool {
        self.card_at(coords).is_hidden() && self.revealed.len() < 2
    }

    /// Advances the game by one frame, in the same order every frame:
    /// retract a due mismatch, commit finished flip animations (match
    /// resolution happens here), then account the pointer's hover dwell.
    pub fn tick(&mut self, input: TickInput) {
        let TickInput { pointer, now } = input;
        self.retract_due_mismatch(now);
        self.advance_flips(now);
        self.track_hover(pointer, now);
        debug_assert!(self.revealed.len() <= 2);
    }

    fn retract_due_mismatch(&mut self, now: Millis) {
        let Some(since) = self.mismatch_since else {
            return;
        };
        if now.saturating_sub(since) < MISMATCH_DURATION {
            return;
        }

        log::debug!(
            "mismatch window over, retracting {:?}",
            self.revealed.as_slice()
        );
        // both cards turn back in the same tick
        for i in 0..self.revealed.len() {
            let cell = self.revealed[i];
            debug_assert!(matches!(self.card_at(cell), CardState::Revealed { .. }));
            self.board[cell.to_nd_index()] = CardState::FlippingBackward { started_at: now };
        }
        self.mismatch_since = None;
    }

    fn advance_flips(&mut self, now: Millis) {
        let (x_end, y_end) = self.deck.size();
        for y in 0..y_end {
            for x in 0..x_end {
                let coords = (x, y);
                match self.card_at(coords) {
                    CardState::FlippingForward { started_at }
                        if now.saturating_sub(started_at) >= FLIP_DURATION =>
                    {
                        self.commit_reveal(coords, now);
                    }
                    CardState::FlippingBackward { started_at }
                        if now.saturating_sub(started_at) >= FLIP_DURATION =>
                    {
                        self.commit_hide(coords);
                    }
                    _ => {}
                }
            }
        }
    }

    fn commit_reveal(&mut self, coords: Coord2, now: Millis) {
        self.board[coords.to_nd_index()] = CardState::Revealed { revealed_at: now };
        self.stats.total_flips += 1;
        self.revealed.push(coords);
        debug_assert!(self.revealed.len() <= 2);
        log::debug!("revealed {:?} as {:?}", coords, self.deck[coords]);

        if self.revealed.len() == 2 {
            self.resolve_pair(now);
        }
    }

    fn commit_hide(&mut self, coords: Coord2) {
        self.board[coords.to_nd_index()] = CardState::Hidden;
        self.revealed.retain(|&mut cell| cell != coords);
        log::debug!("hidden again {:?}", coords);
    }

    fn resolve_pair(&mut self, now: Millis) {
        let (first, second) = (self.revealed[0], self.revealed[1]);
        if self.deck[first] == self.deck[second] {
            self.board[first.to_nd_index()] = CardState::Matched;
            self.board[second.to_nd_index()] = CardState::Matched;
            self.revealed.clear();
            self.stats.matched_pairs += 1;
            self.events.push(GameEvent::MatchFound { first, second });
            log::debug!("match found: {:?} / {:?}", first, second);
            if self.is_complete() {
                log::debug!("all {} pairs matched", self.deck.pair_count());
            }
        } else {
            self.mismatch_since = Some(now);
            log::debug!("mismatch: {:?} / {:?}", first, second);
        }
    }

    fn track_hover(&mut self, pointer: Option<(f32, f32)>, now: Millis) {
        let hovered = pointer
            .and_then(|(px, py)| self.table.cell_at_point(px, py))
            .filter(|&cell| self.is_eligible(cell));

        if let Some(cell) = self.hover.update(hovered, now) {
            self.begin_reveal(cell, now);
        }
    }

    fn begin_reveal(&mut self, coords: Coord2, now: Millis) {
        debug_assert!(self.is_eligible(coords));
        self.board[coords.to_nd_index()] = CardState::FlippingForward { started_at: now };
        log::debug!("flip started at {:?}", coords);
    }
}
