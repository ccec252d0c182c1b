use super::device::InteractionMode;

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

static TECH_LOGOS: &[(&str, &str)] = &[
    ("React", "react/react-original.svg"),
    ("TypeScript", "typescript/typescript-original.svg"),
    ("Node.js", "nodejs/nodejs-original.svg"),
    ("C#", "csharp/csharp-original.svg"),
    ("Azure", "azure/azure-original.svg"),
    ("JavaScript", "javascript/javascript-original.svg"),
    ("CSS", "css3/css3-original.svg"),
    ("HTML", "html5/html5-original.svg"),
    ("Sass", "sass/sass-original.svg"),
    ("jQuery", "jquery/jquery-original.svg"),
];

/// Logo URL for a technology label, if we have one.
pub fn logo_url(tech: &str) -> Option<String> {
    TECH_LOGOS
        .iter()
        .find(|(name, _)| *name == tech)
        .map(|(_, path)| format!("{DEVICON}/{path}"))
}

pub const LOGO_PX: f64 = 16.0;
pub const GAP_PX: f64 = 6.0;
pub const PADDING_PX: f64 = 16.0;
/// Used when the label has not been laid out yet.
pub const FALLBACK_TEXT_PX: f64 = 50.0;
pub const COLLAPSED_WIDTH_REM: f64 = 1.75;

pub fn expanded_width(text_width: Option<f64>) -> f64 {
    let text = text_width
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(FALLBACK_TEXT_PX);
    LOGO_PX + GAP_PX + text + PADDING_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipState {
    #[default]
    Collapsed,
    HoverExpanded,
    TapExpanded,
}

/// Expansion state of one tech chip.
///
/// Only the input source matching the current [`InteractionMode`] can expand
/// the chip, so hover and tap never compete for the same chip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chip {
    state: ChipState,
    mode: InteractionMode,
}

impl Chip {
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            state: ChipState::Collapsed,
            mode,
        }
    }

    pub fn state(&self) -> ChipState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state != ChipState::Collapsed
    }

    /// Device was reclassified (viewport resize).
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        let stale = match mode {
            InteractionMode::Hover => self.state == ChipState::TapExpanded,
            InteractionMode::Tap => self.state == ChipState::HoverExpanded,
        };
        if stale {
            log::debug!("chip collapsed after switching to {mode:?}");
            self.state = ChipState::Collapsed;
        }
    }

    pub fn pointer_enter(&mut self) {
        if self.mode == InteractionMode::Hover {
            self.state = ChipState::HoverExpanded;
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.mode == InteractionMode::Hover {
            self.state = ChipState::Collapsed;
        }
    }

    pub fn tap(&mut self) {
        if self.mode != InteractionMode::Tap {
            return;
        }
        self.state = match self.state {
            ChipState::TapExpanded => ChipState::Collapsed,
            // a hover expansion is dropped before the tap takes over
            ChipState::HoverExpanded | ChipState::Collapsed => ChipState::TapExpanded,
        };
    }

    /// Pointer or touch landed outside the chip.
    pub fn outside_interaction(&mut self) {
        if self.state == ChipState::TapExpanded {
            self.state = ChipState::Collapsed;
        }
    }

    pub fn css(&self, text_width: Option<f64>) -> String {
        if self.is_expanded() {
            format!(
                "width: {}px; padding-left: 0.5rem; padding-right: 0.5rem;",
                expanded_width(text_width)
            )
        } else {
            format!("width: {COLLAPSED_WIDTH_REM}rem; padding-left: 0; padding-right: 0;")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_lookup() {
        assert_eq!(
            logo_url("C#").as_deref(),
            Some("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/csharp/csharp-original.svg")
        );
        assert!(logo_url("COBOL").is_none());
        assert!(logo_url("react").is_none());
    }

    #[test]
    fn test_hover_on_desktop() {
        let mut chip = Chip::new(InteractionMode::Hover);
        chip.pointer_enter();
        assert_eq!(chip.state(), ChipState::HoverExpanded);
        // taps do nothing on desktop
        chip.tap();
        assert_eq!(chip.state(), ChipState::HoverExpanded);
        chip.pointer_leave();
        assert_eq!(chip.state(), ChipState::Collapsed);
    }

    #[test]
    fn test_touch_ignores_hover_and_toggles_on_tap() {
        let mut chip = Chip::new(InteractionMode::Tap);
        chip.pointer_enter();
        assert!(!chip.is_expanded());

        chip.tap();
        assert_eq!(chip.state(), ChipState::TapExpanded);
        chip.pointer_leave();
        assert_eq!(chip.state(), ChipState::TapExpanded);
        chip.tap();
        assert_eq!(chip.state(), ChipState::Collapsed);

        chip.tap();
        chip.outside_interaction();
        assert_eq!(chip.state(), ChipState::Collapsed);
    }

    #[test]
    fn test_outside_ignored_for_hover_expansion() {
        let mut chip = Chip::new(InteractionMode::Hover);
        chip.pointer_enter();
        chip.outside_interaction();
        assert_eq!(chip.state(), ChipState::HoverExpanded);
    }

    #[test]
    fn test_reclassification_drops_stale_expansion() {
        let mut chip = Chip::new(InteractionMode::Hover);
        chip.pointer_enter();
        chip.set_mode(InteractionMode::Tap);
        assert_eq!(chip.state(), ChipState::Collapsed);

        // tapping after the switch expands by tap only
        chip.tap();
        assert_eq!(chip.state(), ChipState::TapExpanded);
        chip.set_mode(InteractionMode::Tap);
        assert_eq!(chip.state(), ChipState::TapExpanded);
        chip.set_mode(InteractionMode::Hover);
        assert_eq!(chip.state(), ChipState::Collapsed);
    }

    #[test]
    fn test_widths() {
        assert_eq!(expanded_width(Some(40.0)), 78.0);
        assert_eq!(expanded_width(Some(0.0)), 88.0);
        assert_eq!(expanded_width(None), 88.0);

        let mut chip = Chip::new(InteractionMode::Tap);
        assert_eq!(
            chip.css(None),
            "width: 1.75rem; padding-left: 0; padding-right: 0;"
        );
        chip.tap();
        assert_eq!(
            chip.css(Some(40.0)),
            "width: 78px; padding-left: 0.5rem; padding-right: 0.5rem;"
        );
    }
}
