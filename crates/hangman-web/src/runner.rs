use hangman_engine::{
    CatalogError, DisplayConfig, EventRecord, GlyphBuffer, GuessOutcome, InputEvent, InputQueue,
    PhraseCatalog, PhraseDisplay, PhraseSection, SessionError, SessionState, Settings,
    StandardSession,
};

const DEFAULT_SEED: u64 = 0x9E37_79B9;

/// Drives one hangman session from the host's frame loop.
///
/// The host pushes input between frames and calls [`SessionRunner::tick`] once
/// per frame; after the tick the glyph and event buffers describe the frame.
pub struct SessionRunner {
    session: StandardSession,
    settings: Settings,
    input: InputQueue,
    glyphs: GlyphBuffer,
    /// Events emitted during the last frame, packed for flat reads.
    events: Vec<EventRecord>,
    last_outcome: Option<GuessOutcome>,
}

impl SessionRunner {
    /// Wrap a fresh standard session. `scenario_parts` sizes the failure scenario.
    pub fn new(settings: Settings, display: DisplayConfig, scenario_parts: u32) -> Self {
        let session = StandardSession::standard(PhraseDisplay::new(display), scenario_parts)
            .with_settings(settings.clone())
            .with_seed(DEFAULT_SEED);
        Self {
            session,
            settings,
            input: InputQueue::new(),
            glyphs: GlyphBuffer::new(),
            events: Vec::with_capacity(8),
            last_outcome: None,
        }
    }

    /// Build from JSON documents. An empty display document uses the default display.
    pub fn from_json(
        settings_json: &str,
        display_json: &str,
        scenario_parts: u32,
    ) -> Result<Self, serde_json::Error> {
        let settings = Settings::from_json(settings_json)?;
        let display = if display_json.trim().is_empty() {
            DisplayConfig::default()
        } else {
            DisplayConfig::from_json(display_json)?
        };
        Ok(Self::new(settings, display, scenario_parts))
    }

    /// Seed the session's phrase selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.session = self.session.with_seed(seed);
        self
    }

    /// Append the lists of a phrase catalog to the settings used by the next start.
    /// Returns the number of lists added.
    pub fn load_catalog(&mut self, json: &str) -> Result<usize, CatalogError> {
        let lists = PhraseCatalog::from_json(json)?.into_lists();
        let added = lists.len();
        self.settings.phrase_lists.extend(lists);
        Ok(added)
    }

    /// Start a session with the current settings and fill the frame buffers.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.events.clear();
        let started = self.session.start_with(self.settings.clone());
        self.sync_buffers();
        started
    }

    /// Queue a command for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input in order, tick the session, rebuild buffers.
    pub fn tick(&mut self, dt: f32) {
        self.events.clear();
        for event in self.input.drain() {
            self.apply(event);
        }
        self.session.tick(dt);
        self.sync_buffers();
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            // Guesses queued behind the one that settled the session are dropped.
            InputEvent::Guess(letter) if self.session.is_settled() => {
                log::debug!("Dropping guess '{letter}': session already settled");
                self.last_outcome = Some(GuessOutcome::Ignored);
            }
            InputEvent::Guess(letter) => {
                self.last_outcome = Some(self.session.guess(letter));
            }
            InputEvent::Pause => self.session.pause(),
            InputEvent::Resume => self.session.resume(),
            InputEvent::Restart => {
                if let Err(err) = self.session.restart(Some(self.settings.clone())) {
                    log::warn!("Restart failed: {err}");
                }
            }
            InputEvent::ForceFinish => self.session.force_finish(),
        }
    }

    fn sync_buffers(&mut self) {
        self.glyphs.rebuild(self.session.phrase_section().slots());
        self.events
            .extend(self.session.drain_events().iter().map(EventRecord::from));
    }

    /// The session being driven.
    pub fn session(&self) -> &StandardSession {
        &self.session
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Outcome of the most recent guess applied by a tick.
    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    /// A hint for the current phrase, if it has any.
    pub fn hint(&mut self) -> Option<String> {
        self.session.hint().map(str::to_owned)
    }

    /// Theme header text, when the display shows it.
    pub fn theme(&self) -> Option<String> {
        self.session.phrase_section().theme().map(str::to_owned)
    }

    /// Letters of the keys still on the panel.
    pub fn letters(&self) -> String {
        self.session.letter_section().letters()
    }

    /// The phrase as the player sees it, `_` for hidden letters.
    pub fn masked(&self) -> String {
        self.session.phrase_section().masked()
    }

    /// Wrong guesses still allowed.
    pub fn lives_remaining(&self) -> u32 {
        self.session.scenario().remaining()
    }

    /// Session clock time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.session.elapsed_seconds()
    }

    // ---- Pointer accessors for host reads ----

    /// Raw pointer to glyph instance floats.
    pub fn glyphs_ptr(&self) -> *const f32 {
        self.glyphs.instances_ptr()
    }

    /// Number of glyph instances.
    pub fn glyph_count(&self) -> u32 {
        self.glyphs.instance_count()
    }

    /// Glyph instances as a flat float slice.
    pub fn glyph_floats(&self) -> &[f32] {
        self.glyphs.as_floats()
    }

    /// Raw pointer to this frame's event records.
    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    /// Number of event records this frame.
    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    /// This frame's event records.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }
}

/// Numeric state code for hosts: 0 idle, 1 active, 2 paused, 3 finished.
pub fn state_code(state: SessionState) -> u32 {
    match state {
        SessionState::Idle => 0,
        SessionState::Active => 1,
        SessionState::Paused => 2,
        SessionState::Finished => 3,
    }
}
