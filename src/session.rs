//! Turn and session controller
//!
//! A [`Session`] owns one game: the dual board, the move ledger, whose turn
//! it is, the outcome and the flip source. Every command validates first and
//! mutates second, so a rejected command leaves the game untouched.
//!
//! ```
//! use gomoku_flip::{ScriptedSource, Session, Stone};
//!
//! // Never flip: every sample is above the probability
//! let mut session = Session::with_source(0.0, ScriptedSource::constant(0.5)).unwrap();
//! let record = session.play(7, 7).unwrap();
//! assert_eq!(record.authoritative, Stone::Black);
//! assert_eq!(session.current_turn(), Stone::White);
//!
//! session.undo().unwrap();
//! assert_eq!(session.length_applied(), 0);
//! session.redo().unwrap();
//! assert_eq!(session.length_applied(), 1);
//! ```

use std::sync::mpsc::Receiver;

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, DualBoard, Pos, Stone};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::events::{EventBus, GameEvent};
use crate::history::{MoveLedger, MoveRecord, Step};
use crate::random::{std_source, FlipSource};
use crate::rules;

/// How the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Awaiting the next move
    #[default]
    Undecided,
    /// Five in a row on the authoritative board
    Won(Stone),
    /// The given side resigned
    Resigned(Stone),
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Undecided
    }

    pub fn winner(self) -> Option<Stone> {
        match self {
            Outcome::Won(stone) => Some(stone),
            Outcome::Resigned(stone) => Some(stone.opponent()),
            Outcome::Undecided => None,
        }
    }
}

/// One applied stone as seen on one of the two boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    pub pos: Pos,
    pub stone: Stone,
}

pub struct Session {
    boards: DualBoard,
    ledger: MoveLedger,
    current_turn: Stone,
    outcome: Outcome,
    flip_probability: f64,
    source: Box<dyn FlipSource>,
    events: EventBus,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("current_turn", &self.current_turn)
            .field("outcome", &self.outcome)
            .field("flip_probability", &self.flip_probability)
            .field("applied", &self.ledger.length_applied())
            .field("recorded", &self.ledger.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// New game drawing flips from an OS-seeded `StdRng`
    pub fn new(flip_probability: f64) -> Result<Self, GameError> {
        Self::with_source(flip_probability, std_source(None))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::with_source(config.flip_probability, std_source(config.seed))
    }

    pub fn with_source(
        flip_probability: f64,
        source: impl FlipSource + 'static,
    ) -> Result<Self, GameError> {
        validate_probability(flip_probability)?;
        Ok(Self {
            boards: DualBoard::new(),
            ledger: MoveLedger::new(),
            current_turn: Stone::Black,
            outcome: Outcome::Undecided,
            flip_probability,
            source: Box::new(source),
            events: EventBus::new(),
        })
    }

    /// Receive every event emitted from now on
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Start a fresh game. Subscribers and the flip source are kept.
    pub fn reset(&mut self, flip_probability: f64) -> Result<(), GameError> {
        validate_probability(flip_probability)?;
        self.boards = DualBoard::new();
        self.ledger = MoveLedger::new();
        self.current_turn = Stone::Black;
        self.outcome = Outcome::Undecided;
        self.flip_probability = flip_probability;
        info!(flip_probability, "new game");
        self.emit_board_changed();
        Ok(())
    }

    /// Place a stone for the side to move.
    ///
    /// The stone lands with the opposite color with probability
    /// `flip_probability`; that choice is made here once and is fixed in the
    /// returned record.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn play(&mut self, x: i32, y: i32) -> Result<MoveRecord, GameError> {
        if self.outcome.is_over() {
            warn!("move rejected: game already ended");
            return Err(GameError::GameAlreadyEnded);
        }
        let pos = Pos::try_new(x, y).ok_or(GameError::OutOfBounds { x, y })?;
        if self.boards.is_occupied(pos) {
            warn!(%pos, "move rejected: position occupied");
            return Err(GameError::DuplicatePosition { x: pos.x, y: pos.y });
        }

        let declared = self.current_turn;
        let authoritative = if self.source.draw() < self.flip_probability {
            declared.opponent()
        } else {
            declared
        };
        let record = MoveRecord::new(pos, authoritative, declared);

        self.boards.apply_forward(&record);
        self.ledger.append(record);
        debug!(%pos, %authoritative, flipped = record.is_flipped(), "move applied");

        let won = rules::check_win(self.boards.authoritative(), authoritative);
        if won {
            self.outcome = Outcome::Won(authoritative);
            info!(winner = %authoritative, moves = self.ledger.len(), "game ended");
        } else {
            self.current_turn = self.current_turn.opponent();
        }

        self.emit_board_changed();
        if won {
            self.events.emit(GameEvent::GameEnded(authoritative));
        }
        Ok(record)
    }

    /// Step back one move
    pub fn undo(&mut self) -> Result<MoveRecord, GameError> {
        let record = self.ledger.step_back()?;
        self.apply_step(Step::Back(record));
        self.emit_board_changed();
        Ok(record)
    }

    /// Step forward one move along the recorded history
    pub fn redo(&mut self) -> Result<MoveRecord, GameError> {
        let record = self.ledger.step_forward()?;
        self.apply_step(Step::Forward(record));
        self.emit_board_changed();
        Ok(record)
    }

    /// Move the pointer to `index` applied moves, one step at a time. Each
    /// intermediate position emits its own board batch.
    pub fn goto_move(&mut self, index: i64) -> Result<(), GameError> {
        let len = self.ledger.len();
        let target = usize::try_from(index)
            .ok()
            .filter(|&target| target <= len)
            .ok_or(GameError::MoveIndexOutOfRange { index, len })?;

        let Session {
            boards,
            ledger,
            current_turn,
            outcome,
            events,
            ..
        } = self;
        let mut pointer = ledger.length_applied();
        ledger.goto_index(target, |step| {
            boards.apply_step(step);
            *current_turn = current_turn.opponent();
            pointer = match step {
                Step::Back(_) => pointer - 1,
                Step::Forward(_) => pointer + 1,
            };
            debug!(pointer, "history step");
            emit_board_batch(events, boards.authoritative(), pointer, len, *outcome);
        })
    }

    /// The side to move gives up
    pub fn resign(&mut self) -> Result<(), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameAlreadyEnded);
        }
        let loser = self.current_turn;
        self.outcome = Outcome::Resigned(loser);
        info!(resigned = %loser, "game ended by resignation");
        self.events.emit(GameEvent::Resigned(loser));
        Ok(())
    }

    fn apply_step(&mut self, step: Step) {
        self.boards.apply_step(step);
        self.current_turn = self.current_turn.opponent();
        debug!(pointer = self.ledger.length_applied(), "history step");
    }

    fn emit_board_changed(&mut self) {
        emit_board_batch(
            &mut self.events,
            self.boards.authoritative(),
            self.ledger.length_applied(),
            self.ledger.len(),
            self.outcome,
        );
    }

    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Recorded five-in-a-row winner, regardless of the pointer
    pub fn winner(&self) -> Option<Stone> {
        match self.outcome {
            Outcome::Won(stone) => Some(stone),
            _ => None,
        }
    }

    pub fn flip_probability(&self) -> f64 {
        self.flip_probability
    }

    pub fn board(&self) -> &DualBoard {
        &self.boards
    }

    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    pub fn length_applied(&self) -> usize {
        self.ledger.length_applied()
    }

    /// Recorded moves, including any rewound future
    pub fn history_len(&self) -> usize {
        self.ledger.len()
    }

    /// A winner is recorded and the pointer sits on the winning move
    pub fn pointer_at_win(&self) -> bool {
        pointer_at_win(self.outcome, self.ledger.length_applied(), self.ledger.len())
    }

    /// Five in a row for `color` on the authoritative board at the pointer
    pub fn check_win(&self, color: Stone) -> bool {
        rules::check_win(self.boards.authoritative(), color)
    }

    /// Open four anywhere on the authoritative board at the pointer
    pub fn has_open_four(&self) -> bool {
        rules::has_open_four(self.boards.authoritative())
    }

    /// The value carried by [`GameEvent::OpenFourDetected`]
    pub fn open_four_warning(&self) -> bool {
        !self.pointer_at_win() && self.has_open_four()
    }

    /// The winning line, while the pointer is on the winning move
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        let winner = self.winner()?;
        if !self.pointer_at_win() {
            return None;
        }
        rules::find_five(self.boards.authoritative(), winner)
    }

    /// Applied stones as the players declared them, in play order
    pub fn declared_trace(&self) -> Vec<TraceEntry> {
        self.ledger
            .applied()
            .iter()
            .map(|r| TraceEntry {
                pos: r.pos,
                stone: r.declared,
            })
            .collect()
    }

    /// Applied stones as they really landed, in play order
    pub fn authoritative_trace(&self) -> Vec<TraceEntry> {
        self.ledger
            .applied()
            .iter()
            .map(|r| TraceEntry {
                pos: r.pos,
                stone: r.authoritative,
            })
            .collect()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.ledger.last_applied()
    }
}

fn validate_probability(p: f64) -> Result<(), GameError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GameError::InvalidFlipProbability(p))
    }
}

fn pointer_at_win(outcome: Outcome, pointer: usize, len: usize) -> bool {
    matches!(outcome, Outcome::Won(_)) && pointer == len
}

fn emit_board_batch(events: &mut EventBus, authoritative: &Board, pointer: usize, len: usize, outcome: Outcome) {
    let open_four = !pointer_at_win(outcome, pointer, len) && rules::has_open_four(authoritative);
    events.emit(GameEvent::BoardChanged);
    events.emit(GameEvent::PointerAtStart(pointer == 0));
    events.emit(GameEvent::PointerAtEnd(pointer == len));
    events.emit(GameEvent::OpenFourDetected(open_four));
}
