/// Player commands a host can feed into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A letter key was pressed.
    Guess(char),
    Pause,
    Resume,
    /// Start over with the previous settings.
    Restart,
    /// Give up and finish now.
    ForceFinish,
}

impl InputEvent {
    /// Decode a letter key from the host's codepoint.
    /// Returns `None` for invalid codepoints and control characters.
    pub fn from_codepoint(codepoint: u32) -> Option<Self> {
        char::from_u32(codepoint)
            .filter(|c| !c.is_control() && !c.is_whitespace())
            .map(InputEvent::Guess)
    }
}

/// Commands pushed by the host between frames, applied in order on the next tick.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Queue a command (called by the host between frames).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every pending command, oldest first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending commands.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
