use bytemuck::{Pod, Zeroable};

/// Lifecycle state of a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No phrase or sections are live.
    #[default]
    Idle,
    /// A phrase is on display and guesses are accepted.
    Active,
    /// A phrase is on display but the clock and guesses are suspended.
    Paused,
    /// The session has produced its result; sections keep their last state until cleared.
    Finished,
}

impl SessionState {
    /// Whether a phrase and section set are live.
    pub fn is_live(self) -> bool {
        matches!(self, SessionState::Active | SessionState::Paused)
    }
}

/// Outcome of a finished session. Produced exactly once per session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResult {
    /// Whether the whole phrase was revealed.
    pub completed: bool,
    /// Number of wrong guesses made.
    pub failure_count: u32,
    /// Clock time at the finish. 0 when no time limit is configured.
    pub elapsed_seconds: f64,
}

/// Notifications fired on session transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    Started,
    Paused(bool),
    Finish(SessionResult),
    Finished,
}

/// What a letter panel did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySelection {
    Accepted,
    /// The key was already used this session.
    Repeated,
    /// The panel does not offer this key.
    NotOffered,
}

/// What a guess did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The phrase contains the letter; `revealed` glyphs were uncovered.
    Hit { revealed: usize },
    /// The phrase does not contain the letter; one failure was spent.
    Miss,
    Repeated,
    NotOffered,
    /// The session was not active.
    Ignored,
}

/// A session event packed for hosts that read flat float buffers.
/// `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;

    pub const STARTED: f32 = 1.0;
    pub const PAUSED: f32 = 2.0;
    pub const FINISH: f32 = 3.0;
    pub const FINISHED: f32 = 4.0;
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

impl From<&SessionEvent> for EventRecord {
    fn from(event: &SessionEvent) -> Self {
        match *event {
            SessionEvent::Started => EventRecord {
                kind: EventRecord::STARTED,
                ..Default::default()
            },
            SessionEvent::Paused(paused) => EventRecord {
                kind: EventRecord::PAUSED,
                a: flag(paused),
                ..Default::default()
            },
            SessionEvent::Finish(result) => EventRecord {
                kind: EventRecord::FINISH,
                a: flag(result.completed),
                b: result.failure_count as f32,
                c: result.elapsed_seconds as f32,
            },
            SessionEvent::Finished => EventRecord {
                kind: EventRecord::FINISHED,
                ..Default::default()
            },
        }
    }
}
