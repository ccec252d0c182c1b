use super::Rect;

/// Delay before a pointer-leave clears the highlight, so moving across the gap
/// between two items does not flicker.
pub const LEAVE_DEBOUNCE_MS: u64 = 150;
pub const SLIDE_TRANSITION_MS: u32 = 200;

/// Horizontal geometry of the highlight, relative to its container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverRect {
    pub left: f64,
    pub width: f64,
}

impl HoverRect {
    pub fn relative(item: Rect, container: Rect) -> Self {
        Self {
            left: item.left - container.left,
            width: item.width,
        }
    }
}

/// Handed out by [`HoverTracker::leave`]; only the most recent one is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveTicket(u64);

/// Tracks which nav item the sliding highlight sits behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverTracker {
    active: Option<usize>,
    current: Option<HoverRect>,
    last: Option<HoverRect>,
    animate: bool,
    generation: u64,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered item `index`. `geometry` is `(item, container)`, or
    /// `None` when either element is gone.
    ///
    /// Returns true when the move should slide from the previous item. A first
    /// hover (nothing active) never slides.
    pub fn enter(&mut self, index: usize, geometry: Option<(Rect, Rect)>) -> bool {
        // cancels any pending leave
        self.generation += 1;

        let transitioning = matches!(self.active, Some(prev) if prev != index);
        self.animate = transitioning;
        self.active = Some(index);
        self.current = geometry.map(|(item, container)| HoverRect::relative(item, container));
        if let Some(rect) = self.current {
            self.last = Some(rect);
        }
        transitioning
    }

    pub fn leave(&mut self) -> LeaveTicket {
        self.generation += 1;
        LeaveTicket(self.generation)
    }

    /// The debounce for `ticket` elapsed. Returns whether it cleared anything.
    pub fn leave_elapsed(&mut self, ticket: LeaveTicket) -> bool {
        if ticket.0 != self.generation || self.active.is_none() {
            return false;
        }
        self.active = None;
        self.current = None;
        self.animate = false;
        true
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn style(&self) -> HighlightStyle {
        let transition_ms = if self.animate { SLIDE_TRANSITION_MS } else { 0 };
        match (self.active, self.current) {
            (Some(_), Some(rect)) => HighlightStyle {
                opacity: 1.0,
                rect,
                transition_ms,
            },
            // fade out where we last were instead of collapsing to the origin
            _ => HighlightStyle {
                opacity: 0.0,
                rect: self.last.unwrap_or_default(),
                transition_ms,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyle {
    pub opacity: f64,
    pub rect: HoverRect,
    pub transition_ms: u32,
}

impl HighlightStyle {
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; left: {}px; width: {}px; transform: translateX(0); transition-duration: {}ms; transition-timing-function: ease-out;",
            self.opacity, self.rect.left, self.rect.width, self.transition_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(left: f64, width: f64) -> Option<(Rect, Rect)> {
        Some((
            Rect::new(100.0 + left, 10.0, width, 32.0),
            Rect::new(100.0, 10.0, 400.0, 32.0),
        ))
    }

    #[test]
    fn test_first_hover_does_not_slide() {
        let mut tracker = HoverTracker::new();
        assert!(!tracker.enter(0, geometry(0.0, 60.0)));
        let style = tracker.style();
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.rect, HoverRect { left: 0.0, width: 60.0 });
        assert_eq!(style.transition_ms, 0);
    }

    #[test]
    fn test_moving_between_items_slides_once() {
        let mut tracker = HoverTracker::new();
        let changes = [
            tracker.enter(0, geometry(0.0, 60.0)),
            tracker.enter(1, geometry(64.0, 80.0)),
        ];
        assert_eq!(changes.iter().filter(|c| **c).count(), 1);
        assert_eq!(tracker.style().transition_ms, SLIDE_TRANSITION_MS);
        assert_eq!(tracker.style().rect.left, 64.0);

        // re-entering the same item is not a transition
        assert!(!tracker.enter(1, geometry(64.0, 80.0)));
    }

    #[test]
    fn test_leave_keeps_last_rect() {
        let mut tracker = HoverTracker::new();
        tracker.enter(2, geometry(150.0, 70.0));
        let ticket = tracker.leave();
        // still active until the debounce fires
        assert_eq!(tracker.active(), Some(2));
        assert!(tracker.leave_elapsed(ticket));

        let style = tracker.style();
        assert_eq!(tracker.active(), None);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.rect, HoverRect { left: 150.0, width: 70.0 });
    }

    #[test]
    fn test_enter_cancels_pending_leave() {
        let mut tracker = HoverTracker::new();
        tracker.enter(0, geometry(0.0, 60.0));
        let ticket = tracker.leave();
        assert!(tracker.enter(1, geometry(64.0, 80.0)));
        assert!(!tracker.leave_elapsed(ticket));
        assert_eq!(tracker.active(), Some(1));
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut tracker = HoverTracker::new();
        tracker.enter(0, geometry(0.0, 60.0));
        let first = tracker.leave();
        let second = tracker.leave();
        assert!(!tracker.leave_elapsed(first));
        assert!(tracker.leave_elapsed(second));
        assert!(!tracker.leave_elapsed(second));
    }

    #[test]
    fn test_after_leave_next_hover_is_fresh() {
        let mut tracker = HoverTracker::new();
        tracker.enter(0, geometry(0.0, 60.0));
        let ticket = tracker.leave();
        tracker.leave_elapsed(ticket);
        assert!(!tracker.enter(3, geometry(200.0, 50.0)));
    }

    #[test]
    fn test_missing_element_is_neutral() {
        let mut tracker = HoverTracker::new();
        tracker.enter(0, None);
        let style = tracker.style();
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.rect, HoverRect::default());
    }
}
