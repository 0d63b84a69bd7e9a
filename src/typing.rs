use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Typewriter effect over a rotating list of phrases: type a phrase out,
/// hold it, delete it, move on to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingText {
    phrases: Vec<String>,
    index: usize,
    /// Number of chars of the current phrase on screen.
    shown: usize,
    phase: Phase,
    pending: Duration,
}

impl TypingText {
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Self {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            pending: Duration::ZERO,
        }
    }

    /// Swaps the phrase list (e.g. on a language change) and starts over.
    pub fn reset<S: Into<String>>(&mut self, phrases: impl IntoIterator<Item = S>) {
        *self = Self::new(phrases);
    }

    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => TYPE_DELAY,
            Phase::Holding => HOLD_DELAY,
            Phase::Deleting => DELETE_DELAY,
        }
    }

    /// Advances by `elapsed`. Returns true if the visible text changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        let before = (self.index, self.shown);
        self.pending += elapsed;
        while self.pending >= self.delay() {
            self.pending -= self.delay();
            self.step();
        }
        before != (self.index, self.shown)
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.shown < self.phrase_len() {
                    self.shown += 1;
                }
                if self.shown == self.phrase_len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_delay() {
        let mut typing = TypingText::new(["Dev", "Ops"]);
        assert_eq!(typing.text(), "");
        assert!(!typing.advance(Duration::from_millis(99)));
        assert!(typing.advance(Duration::from_millis(1)));
        assert_eq!(typing.text(), "D");
        typing.advance(TYPE_DELAY * 2);
        assert_eq!(typing.text(), "Dev");
    }

    #[test]
    fn test_holds_then_deletes_then_moves_on() {
        let mut typing = TypingText::new(["Dev", "Ops"]);
        typing.advance(TYPE_DELAY * 3);
        assert_eq!(typing.text(), "Dev");

        assert!(!typing.advance(HOLD_DELAY - Duration::from_millis(1)));
        assert_eq!(typing.text(), "Dev");
        typing.advance(Duration::from_millis(1));
        typing.advance(DELETE_DELAY);
        assert_eq!(typing.text(), "De");
        typing.advance(DELETE_DELAY * 2);
        assert_eq!(typing.text(), "");

        typing.advance(TYPE_DELAY * 3);
        assert_eq!(typing.text(), "Ops");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut typing = TypingText::new(["ab"]);
        typing.advance(TYPE_DELAY * 2 + HOLD_DELAY + DELETE_DELAY * 2);
        assert_eq!(typing.text(), "");
        typing.advance(TYPE_DELAY);
        assert_eq!(typing.text(), "a");
    }

    #[test]
    fn test_multibyte_text() {
        let mut typing = TypingText::new(["Año"]);
        typing.advance(TYPE_DELAY * 2);
        assert_eq!(typing.text(), "Añ");
    }

    #[test]
    fn test_no_phrases() {
        let mut typing = TypingText::new(Vec::<String>::new());
        assert!(!typing.advance(Duration::from_secs(10)));
        assert_eq!(typing.text(), "");
    }

    #[test]
    fn test_reset() {
        let mut typing = TypingText::new(["Dev"]);
        typing.advance(TYPE_DELAY * 2);
        typing.reset(["Desarrollador"]);
        assert_eq!(typing.text(), "");
        typing.advance(TYPE_DELAY);
        assert_eq!(typing.text(), "D");
    }
}
