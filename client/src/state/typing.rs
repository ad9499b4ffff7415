//! Hero title typing animation.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay from page ready until the title is cleared.
pub const INIT_DELAY_MS: u32 = 500;
/// Delay from clearing the title until the first character appears.
pub const START_DELAY_MS: u32 = 1_000;
/// Interval between characters.
pub const CHAR_INTERVAL_MS: u32 = 100;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingEffect {
    text: String,
    /// `None` until started; the full text shows meanwhile.
    shown: Option<usize>,
}

impl TypingEffect {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), shown: None }
    }

    /// Clear the title. Returns `false` if already started or nothing to type.
    pub fn start(&mut self) -> bool {
        if self.shown.is_some() || self.text.is_empty() {
            return false;
        }
        self.shown = Some(0);
        true
    }

    /// Reveal one more character. Returns `true` while more remain.
    pub fn tick(&mut self) -> bool {
        let total = self.text.chars().count();
        match self.shown.as_mut() {
            Some(n) if *n < total => {
                *n += 1;
                *n < total
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown.is_some_and(|n| n >= self.text.chars().count())
    }

    #[must_use]
    pub fn visible(&self) -> String {
        match self.shown {
            None => self.text.clone(),
            Some(n) => self.text.chars().take(n).collect(),
        }
    }
}
