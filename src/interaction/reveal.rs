pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const STAGGER_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal once, then stop observing.
    Once,
    /// Hide again whenever the element leaves the viewport.
    Rearm,
}

/// Observer configuration for a revealed element.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub mode: RevealMode,
}

impl RevealOptions {
    /// Cards: wait until they are 50px inside the viewport, reveal once.
    pub fn card() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: "0px 0px -50px 0px",
            mode: RevealMode::Once,
        }
    }

    /// Headings: start 50px before they scroll in, replay on every entry.
    pub fn heading() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: "0px 0px 50px 0px",
            mode: RevealMode::Rearm,
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::card()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealChange {
    Shown,
    Hidden,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    threshold: f64,
    mode: RevealMode,
    revealed: bool,
    finished: bool,
}

impl Reveal {
    pub fn new(options: &RevealOptions) -> Self {
        Self {
            threshold: options.threshold,
            mode: options.mode,
            revealed: false,
            finished: false,
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// False once a one-shot reveal has fired; the observer can be dropped.
    pub fn wants_updates(&self) -> bool {
        !self.finished
    }

    /// Feed one intersection entry.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> RevealChange {
        if self.finished {
            return RevealChange::Unchanged;
        }
        let visible = is_intersecting && ratio >= self.threshold;
        match (visible, self.revealed) {
            (true, false) => {
                self.revealed = true;
                if self.mode == RevealMode::Once {
                    self.finished = true;
                }
                RevealChange::Shown
            }
            (false, true) if self.mode == RevealMode::Rearm && !is_intersecting => {
                self.revealed = false;
                RevealChange::Hidden
            }
            _ => RevealChange::Unchanged,
        }
    }
}

/// Delay for the `index`th member of a group revealed in sequence.
pub fn stagger_delay_ms(index: usize, step_ms: u64) -> u64 {
    index as u64 * step_ms
}

/// How long a word-by-word heading takes to finish animating.
pub fn word_animation_ms(word_count: usize, duration_s: f64, stagger_s: f64) -> u64 {
    let total = duration_s * 1000.0 + word_count as f64 * stagger_s * 1000.0;
    total.max(0.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_threshold() {
        let mut reveal = Reveal::new(&RevealOptions::card());
        assert_eq!(reveal.observe(false, 0.0), RevealChange::Unchanged);
        assert_eq!(reveal.observe(true, 0.05), RevealChange::Unchanged);
        assert!(!reveal.revealed());
        assert_eq!(reveal.observe(true, 0.1), RevealChange::Shown);
        assert!(reveal.revealed());
    }

    #[test]
    fn test_once_fires_once() {
        let mut reveal = Reveal::new(&RevealOptions::card());
        assert_eq!(reveal.observe(true, 0.5), RevealChange::Shown);
        assert!(!reveal.wants_updates());
        assert_eq!(reveal.observe(false, 0.0), RevealChange::Unchanged);
        assert_eq!(reveal.observe(true, 1.0), RevealChange::Unchanged);
        assert!(reveal.revealed());
    }

    #[test]
    fn test_rearm_toggles_on_exit() {
        let mut reveal = Reveal::new(&RevealOptions::heading());
        assert_eq!(reveal.observe(true, 0.3), RevealChange::Shown);
        // dipping under the threshold while still on screen keeps it shown
        assert_eq!(reveal.observe(true, 0.02), RevealChange::Unchanged);
        assert_eq!(reveal.observe(false, 0.0), RevealChange::Hidden);
        assert!(reveal.wants_updates());
        assert_eq!(reveal.observe(true, 0.2), RevealChange::Shown);
    }

    #[test]
    fn test_stagger_and_durations() {
        assert_eq!(stagger_delay_ms(0, STAGGER_MS), 0);
        assert_eq!(stagger_delay_ms(2, STAGGER_MS), 200);
        // "Stuff I Made": 3 words, 0.5s + 3 * 0.15s
        assert_eq!(word_animation_ms(3, 0.5, 0.15), 950);
    }
}
