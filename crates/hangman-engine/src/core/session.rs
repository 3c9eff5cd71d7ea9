//! The hangman session state machine.
//!
//! ```text
//! Idle --start--> Active <--pause/resume--> Paused
//! Active --tick (time up | section completed)--> Finished
//! Active|Paused --force_finish--> Finished --restart--> Active
//! ```
//!
//! Everything runs on the host's frame: guesses arrive between ticks and
//! completion is only evaluated by [`GameSession::tick`].

use crate::api::error::SessionError;
use crate::api::observer::{dispatch, SessionObserver};
use crate::api::section::{LetterSection, PhraseSection, ScenarioSection, Section, SectionContext};
use crate::api::types::{GuessOutcome, KeySelection, SessionEvent, SessionResult, SessionState};
use crate::components::letter_panel::LetterPanel;
use crate::components::phrase_display::PhraseDisplay;
use crate::components::scenario::Scenario;
use crate::core::clock::SessionClock;
use crate::core::matcher::VOWELS;
use crate::core::phrase::Phrase;
use crate::core::rng::Rng;
use crate::core::settings::Settings;

const DEFAULT_SEED: u64 = 0x5EED_1E77;

/// A session wired with the built-in sections.
pub type StandardSession = GameSession<LetterPanel, PhraseDisplay, Scenario>;

/// One game of hangman: owns the settings, the selected phrase, the clock
/// and every section taking part.
pub struct GameSession<L, P, S> {
    letters: L,
    phrase_section: P,
    scenario: S,
    extra_sections: Vec<Box<dyn Section>>,
    observers: Vec<Box<dyn SessionObserver>>,
    events: Vec<SessionEvent>,
    default_settings: Settings,
    active_settings: Option<Settings>,
    state: SessionState,
    clock: SessionClock,
    rng: Rng,
    current_phrase: Option<Phrase>,
    current_list: Option<usize>,
    last_result: Option<SessionResult>,
}

impl<L, P, S> GameSession<L, P, S>
where
    L: LetterSection,
    P: PhraseSection,
    S: ScenarioSection,
{
    /// Create an idle session around the three required sections.
    pub fn new(letters: L, phrase_section: P, scenario: S) -> Self {
        Self {
            letters,
            phrase_section,
            scenario,
            extra_sections: Vec::new(),
            observers: Vec::new(),
            events: Vec::new(),
            default_settings: Settings::default(),
            active_settings: None,
            state: SessionState::Idle,
            clock: SessionClock::new(),
            rng: Rng::new(DEFAULT_SEED),
            current_phrase: None,
            current_list: None,
            last_result: None,
        }
    }

    /// Settings used by [`GameSession::start`] and by restarts without explicit settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.default_settings = settings;
        self
    }

    /// Seed the phrase selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::new(seed);
        self
    }

    /// Register an extra section. Extra sections generate after the built-in ones,
    /// in registration order.
    pub fn add_section(&mut self, section: Box<dyn Section>) {
        self.extra_sections.push(section);
    }

    /// Register an observer notified on every transition.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    // -- Transitions --

    /// Start with the default settings.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.start_with(self.default_settings.clone())
    }

    /// Start with the given settings.
    ///
    /// Rejected while a session is live. From `Finished` this behaves as a restart.
    /// On error the session keeps its state and sections untouched.
    pub fn start_with(&mut self, settings: Settings) -> Result<(), SessionError> {
        if self.state.is_live() {
            log::warn!("Can't start while a session is already running.");
            return Err(SessionError::AlreadyRunning);
        }
        let (list_index, phrase) = self.select_for_start(&settings)?;
        if self.state == SessionState::Finished {
            self.cleanup();
        }
        self.begin(settings, list_index, phrase);
        Ok(())
    }

    /// Clear every section and start again.
    /// Without explicit settings the previous session's settings are reused.
    /// Nothing is cleared when no phrase can be selected.
    pub fn restart(&mut self, settings: Option<Settings>) -> Result<(), SessionError> {
        let settings = settings
            .or_else(|| self.active_settings.clone())
            .unwrap_or_else(|| self.default_settings.clone());
        let (list_index, phrase) = self.select_for_start(&settings)?;
        self.cleanup();
        log::info!("Restarting session");
        self.begin(settings, list_index, phrase);
        Ok(())
    }

    /// Clear every section and return to `Idle` without producing a result.
    pub fn cleanup(&mut self) {
        self.letters.clear();
        self.phrase_section.clear();
        self.scenario.clear();
        for section in &mut self.extra_sections {
            section.clear();
        }
        self.clock.reset();
        self.state = SessionState::Idle;
        self.current_phrase = None;
        self.current_list = None;
    }

    fn select_for_start(&mut self, settings: &Settings) -> Result<(usize, Phrase), SessionError> {
        self.select(settings).map_err(|err| {
            log::warn!("Can't start session: {err}");
            err
        })
    }

    /// Generate every section for the selected phrase and go `Active`.
    fn begin(&mut self, settings: Settings, list_index: usize, phrase: Phrase) {
        let mut phrase = phrase.with_casing(settings.casing);
        if settings.show_vowels {
            phrase = phrase.expose(VOWELS.chars());
        }

        let settings: &Settings = self.active_settings.insert(settings);
        let list = &settings.phrase_lists[list_index];
        let mut ctx = SectionContext {
            settings,
            rng: &mut self.rng,
        };
        self.letters.generate(&mut ctx, list, &phrase);
        self.phrase_section.generate(&mut ctx, list, &phrase);
        self.scenario.generate(&mut ctx, list, &phrase);
        for section in &mut self.extra_sections {
            section.generate(&mut ctx, list, &phrase);
        }

        self.clock.reset();
        if settings.uses_time_limit() {
            self.clock.restart();
        }

        log::info!("Session started: '{}' from '{}'", phrase, list.theme());
        self.current_phrase = Some(phrase);
        self.current_list = Some(list_index);
        self.last_result = None;
        self.state = SessionState::Active;
        self.emit(SessionEvent::Started);
    }

    /// Pick a list uniformly among the non-empty ones, then a phrase from it.
    fn select(&mut self, settings: &Settings) -> Result<(usize, Phrase), SessionError> {
        if settings.phrase_lists.is_empty() {
            return Err(SessionError::NoPhraseLists);
        }
        let candidates: Vec<usize> = settings
            .phrase_lists
            .iter()
            .enumerate()
            .filter(|(_, list)| !list.is_empty())
            .map(|(index, _)| index)
            .collect();

        let list_index = *self.rng.choose(&candidates).ok_or(SessionError::NoPhrases)?;
        let list = &settings.phrase_lists[list_index];
        let phrase_index = self.rng.pick_index(list.count());
        let phrase = list.get(phrase_index).ok_or(SessionError::NoPhrases)?;
        Ok((list_index, phrase.clone()))
    }

    /// Suspend the clock and guesses. No-op unless active.
    pub fn pause(&mut self) {
        if self.state != SessionState::Active {
            if self.state != SessionState::Paused {
                log::warn!("Can't pause a session that is not active.");
            }
            return;
        }
        self.clock.stop();
        self.state = SessionState::Paused;
        self.emit(SessionEvent::Paused(true));
    }

    /// Resume a paused session, restarting the clock if a time limit is set.
    pub fn resume(&mut self) {
        if self.state != SessionState::Paused {
            return;
        }
        if self.settings().uses_time_limit() {
            self.clock.start();
        }
        self.state = SessionState::Active;
        self.emit(SessionEvent::Paused(false));
    }

    /// Advance the clock by one frame and finish the session when time is up
    /// or any section has completed.
    pub fn tick(&mut self, dt: f32) -> SessionState {
        if self.state != SessionState::Active {
            return self.state;
        }
        self.clock.advance(dt);

        let limit = self.settings().time_limit_seconds as f64;
        let time_up = self.clock.is_running() && self.clock.elapsed_seconds() >= limit;

        if time_up || self.is_settled() {
            self.force_finish();
        }
        self.state
    }

    /// Whether any section has completed. The next tick finishes the session;
    /// hosts batching guesses should stop feeding them once this is true.
    pub fn is_settled(&self) -> bool {
        self.letters.is_completed()
            || self.phrase_section.is_completed()
            || self.scenario.is_completed()
            || self.extra_sections.iter().any(|section| section.is_completed())
    }

    /// Finish now and emit the result. Does nothing once finished.
    pub fn force_finish(&mut self) {
        match self.state {
            SessionState::Active | SessionState::Paused => {}
            SessionState::Finished => return,
            SessionState::Idle => {
                log::warn!("Can't finish a session that was never started.");
                return;
            }
        }

        self.clock.stop();
        self.state = SessionState::Finished;

        let result = SessionResult {
            completed: self.phrase_section.is_phrase_completed(),
            failure_count: self.scenario.unlocked_count(),
            elapsed_seconds: self.clock.elapsed_seconds(),
        };
        log::info!(
            "Session finished: completed={} failures={} time={:.2}s",
            result.completed,
            result.failure_count,
            result.elapsed_seconds
        );
        self.last_result = Some(result);
        self.emit(SessionEvent::Finish(result));
        self.emit(SessionEvent::Finished);
    }

    /// Guess a letter. Completion is checked on the next tick, not here.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.state != SessionState::Active {
            log::warn!("Ignoring guess '{letter}' while {:?}", self.state);
            return GuessOutcome::Ignored;
        }
        let Some(phrase) = self.current_phrase.as_ref() else {
            return GuessOutcome::Ignored;
        };

        let outcome = match self.letters.select(letter) {
            KeySelection::NotOffered => GuessOutcome::NotOffered,
            KeySelection::Repeated => GuessOutcome::Repeated,
            KeySelection::Accepted if phrase.contains(letter) => GuessOutcome::Hit {
                revealed: self.phrase_section.set_letter(letter),
            },
            KeySelection::Accepted => {
                self.scenario.fail();
                GuessOutcome::Miss
            }
        };
        log::debug!("Guess '{letter}': {outcome:?}");
        outcome
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            dispatch(observer.as_mut(), &event);
        }
        self.events.push(event);
    }

    // -- Accessors --

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session is paused.
    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    /// Whether guesses are currently accepted.
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Clock time of the session. Stays 0 without a time limit.
    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    /// The settings of the running session, or the defaults before any start.
    pub fn settings(&self) -> &Settings {
        self.active_settings.as_ref().unwrap_or(&self.default_settings)
    }

    /// The phrase being guessed, after casing and exposure.
    pub fn current_phrase(&self) -> Option<&Phrase> {
        self.current_phrase.as_ref()
    }

    /// Theme of the list the current phrase came from.
    pub fn current_theme(&self) -> Option<&str> {
        let index = self.current_list?;
        self.settings().phrase_lists.get(index).map(|list| list.theme())
    }

    /// A hint for the current phrase, if it has any.
    pub fn hint(&mut self) -> Option<&str> {
        self.current_phrase.as_ref()?.pick_hint(&mut self.rng)
    }

    /// The result of the last finished session, until the next start.
    pub fn last_result(&self) -> Option<&SessionResult> {
        self.last_result.as_ref()
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// The input panel section.
    pub fn letter_section(&self) -> &L {
        &self.letters
    }

    /// The phrase display section.
    pub fn phrase_section(&self) -> &P {
        &self.phrase_section
    }

    /// The failure scenario section.
    pub fn scenario(&self) -> &S {
        &self.scenario
    }
}

impl StandardSession {
    /// A session with the built-in sections.
    pub fn standard(display: PhraseDisplay, scenario_parts: u32) -> Self {
        GameSession::new(LetterPanel::new(), display, Scenario::new(scenario_parts))
    }
}
