use crate::api::section::{ScenarioSection, Section, SectionContext};
use crate::core::phrase::{Phrase, PhraseList};

/// The failure scenario: one part is lost for every wrong guess,
/// and the session fails once the lives run out.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    /// Parts set up for the scenario before any session.
    configured_parts: u32,
    /// Parts generated for the current session.
    parts: u32,
    lives: u32,
    unlocked: u32,
}

impl Scenario {
    /// Create a scenario with a fixed number of pre-built parts.
    /// The part count only matters when lives are based on it.
    pub fn new(configured_parts: u32) -> Self {
        Self {
            configured_parts,
            ..Default::default()
        }
    }

    /// Parts in play this session.
    pub fn parts(&self) -> u32 {
        self.parts
    }

    /// Wrong guesses allowed this session.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Wrong guesses still allowed.
    pub fn remaining(&self) -> u32 {
        self.lives.saturating_sub(self.unlocked)
    }

    /// Whether part `index` has been lost.
    pub fn is_part_unlocked(&self, index: u32) -> bool {
        index < self.unlocked
    }
}

impl Section for Scenario {
    fn generate(&mut self, ctx: &mut SectionContext<'_>, _list: &PhraseList, _phrase: &Phrase) {
        self.clear();
        self.lives = if ctx.settings.base_lives_on_scenario_part_count {
            self.configured_parts.max(1)
        } else {
            ctx.settings.lives()
        };
        self.parts = self.lives;
    }

    fn clear(&mut self) {
        self.parts = 0;
        self.lives = 0;
        self.unlocked = 0;
    }

    fn is_completed(&self) -> bool {
        self.lives > 0 && self.unlocked >= self.lives
    }
}

impl ScenarioSection for Scenario {
    fn fail(&mut self) {
        if self.unlocked < self.lives {
            self.unlocked += 1;
        }
    }

    fn unlocked_count(&self) -> u32 {
        self.unlocked
    }
}
