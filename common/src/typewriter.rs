use std::time::Duration;

use crate::config::TypewriterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

// endless type / hold / delete cycle over a list of phrases
//
// the driver calls tick() and sleeps for the returned duration before calling it
// again; text() is what should be on screen in between
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterConfig,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timing: TypewriterConfig) -> Self {
        Typewriter {
            phrases,
            timing,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
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

    pub fn tick(&mut self) -> Duration {
        let ms = |ms: u32| Duration::from_millis(ms.into());

        let Some(phrase) = self.phrases.get(self.index) else {
            return ms(self.timing.hold_ms);
        };
        let len = phrase.chars().count();

        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Holding;
                    ms(self.timing.hold_ms)
                } else {
                    ms(self.timing.type_ms)
                }
            }
            // the hold ends with the first deletion, not a separate empty step
            Phase::Holding | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    ms(self.timing.type_ms)
                } else {
                    ms(self.timing.delete_ms)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TypewriterConfig {
        TypewriterConfig {
            type_ms: 10,
            delete_ms: 5,
            hold_ms: 100,
        }
    }

    #[test]
    fn types_holds_deletes_and_wraps() {
        let mut tw = Typewriter::new(vec!["ab".into(), "c".into()], timing());
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), Duration::from_millis(10));
        assert_eq!(tw.text(), "a");

        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Holding);

        assert_eq!(tw.tick(), Duration::from_millis(5));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.phase(), Phase::Deleting);

        assert_eq!(tw.tick(), Duration::from_millis(10));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);

        tw.tick();
        assert_eq!(tw.text(), "c");

        // the hold tick deletes the only char, then back to the first phrase
        assert_eq!(tw.tick(), Duration::from_millis(10));
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn first_deletion_follows_hold_directly() {
        let mut tw = Typewriter::new(vec!["abc".into()], timing());
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.phase(), Phase::Holding);
        assert_eq!(tw.text(), "abc");

        tw.tick();
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn slices_on_char_boundaries() {
        let mut tw = Typewriter::new(vec!["héllo".into()], timing());
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(Vec::new(), timing());
        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.text(), "");
    }
}
