/// Delay between consecutive cards fading in.
pub const FADE_STEP_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeDirection {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeSpeed {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl MarqueeSpeed {
    /// Seconds for one full pass over the (duplicated) list.
    pub fn duration_s(self) -> u32 {
        match self {
            MarqueeSpeed::Fast => 20,
            MarqueeSpeed::Normal => 40,
            MarqueeSpeed::Slow => 80,
        }
    }
}

/// Endless horizontal scroller over a list rendered twice back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marquee {
    pub direction: MarqueeDirection,
    pub speed: MarqueeSpeed,
    pub pause_on_hover: bool,
    started: bool,
    hovered: bool,
}

impl Marquee {
    pub fn new(direction: MarqueeDirection, speed: MarqueeSpeed, pause_on_hover: bool) -> Self {
        Self {
            direction,
            speed,
            pause_on_hover,
            started: false,
            hovered: false,
        }
    }

    /// The duplicated track is in the DOM; the animation may run.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn paused(&self) -> bool {
        self.pause_on_hover && self.hovered
    }

    pub fn css(&self) -> String {
        if !self.started {
            return String::new();
        }
        let direction = match self.direction {
            MarqueeDirection::Left => "forwards",
            MarqueeDirection::Right => "reverse",
        };
        let state = if self.paused() { "paused" } else { "running" };
        format!(
            "animation: scroll {}s linear infinite {direction}; animation-play-state: {state};",
            self.speed.duration_s()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_started() {
        let mut marquee = Marquee::new(MarqueeDirection::Left, MarqueeSpeed::Fast, true);
        assert_eq!(marquee.css(), "");
        marquee.start();
        assert_eq!(
            marquee.css(),
            "animation: scroll 20s linear infinite forwards; animation-play-state: running;"
        );
    }

    #[test]
    fn test_hover_pauses_only_when_enabled() {
        let mut marquee = Marquee::new(MarqueeDirection::Right, MarqueeSpeed::Slow, true);
        marquee.start();
        marquee.set_hovered(true);
        assert!(marquee.paused());
        assert!(marquee.css().contains("80s linear infinite reverse"));
        assert!(marquee.css().ends_with("paused;"));

        let mut marquee = Marquee::new(MarqueeDirection::Left, MarqueeSpeed::Normal, false);
        marquee.start();
        marquee.set_hovered(true);
        assert!(!marquee.paused());
        assert!(marquee.css().contains("40s"));
    }
}
