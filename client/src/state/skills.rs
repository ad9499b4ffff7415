//! One-shot skill bar reveal latch.
//!
//! Each bar moves `Idle -> Armed -> Revealed` at most once. `Armed` covers
//! the short pause between first sighting and the width transition.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Fraction of a bar that must be visible before the observer reports it.
pub const REVEAL_THRESHOLD: f64 = 0.5;
/// Pause between first sighting and the width transition.
pub const REVEAL_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Idle,
    Armed,
    Revealed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillBar {
    pub name: String,
    pub percent: u8,
    pub phase: RevealPhase,
}

impl SkillBar {
    /// CSS width for the current phase.
    #[must_use]
    pub fn width(&self) -> String {
        match self.phase {
            RevealPhase::Revealed => format!("{}%", self.percent.min(100)),
            RevealPhase::Idle | RevealPhase::Armed => "0".to_owned(),
        }
    }

    /// Whether the bar no longer needs viewport notifications.
    #[must_use]
    pub fn is_latched(&self) -> bool {
        self.phase != RevealPhase::Idle
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillsState {
    pub bars: Vec<SkillBar>,
}

impl SkillsState {
    pub fn new<'a>(skills: impl IntoIterator<Item = (&'a str, u8)>) -> Self {
        let bars = skills
            .into_iter()
            .map(|(name, percent)| SkillBar { name: name.to_owned(), percent, phase: RevealPhase::Idle })
            .collect();
        Self { bars }
    }

    /// Record a viewport sample for bar `index`.
    ///
    /// Gating on [`REVEAL_THRESHOLD`] belongs to the observer, whose reported
    /// ratio at the crossing can sit just under it. Any intersecting sample
    /// arms. Returns `true` only for the sample that arms the bar.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(bar) = self.bars.get_mut(index) else {
            return false;
        };
        if bar.phase != RevealPhase::Idle || !intersecting {
            return false;
        }
        bar.phase = RevealPhase::Armed;
        true
    }

    /// Complete the reveal of an armed bar. Returns `true` if it changed.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.bars.get_mut(index) {
            Some(bar) if bar.phase == RevealPhase::Armed => {
                bar.phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_latched(&self, index: usize) -> bool {
        self.bars.get(index).is_some_and(SkillBar::is_latched)
    }
}
