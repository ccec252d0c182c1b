/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 1024.0;

/// How expandable elements should be driven on this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Pointer hover expands, taps do nothing.
    Hover,
    /// Taps toggle, hover is ignored.
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceCapability {
    pub mobile: bool,
    pub touch: bool,
}

impl DeviceCapability {
    pub fn classify(viewport_width: f64, has_touch_events: bool, max_touch_points: i32) -> Self {
        Self {
            mobile: viewport_width < MOBILE_BREAKPOINT,
            touch: has_touch_events || max_touch_points > 0,
        }
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        if self.mobile || self.touch {
            InteractionMode::Tap
        } else {
            InteractionMode::Hover
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let desktop = DeviceCapability::classify(1440.0, false, 0);
        assert_eq!(desktop.interaction_mode(), InteractionMode::Hover);

        let narrow = DeviceCapability::classify(800.0, false, 0);
        assert!(narrow.mobile);
        assert_eq!(narrow.interaction_mode(), InteractionMode::Tap);

        let touch_laptop = DeviceCapability::classify(1440.0, false, 10);
        assert!(touch_laptop.touch);
        assert!(!touch_laptop.mobile);
        assert_eq!(touch_laptop.interaction_mode(), InteractionMode::Tap);

        assert!(!DeviceCapability::classify(1024.0, false, 0).mobile);
    }

    #[test]
    fn test_touch_events_alone_mean_touch() {
        let tablet_landscape = DeviceCapability::classify(1366.0, true, 0);
        assert!(tablet_landscape.touch);
        assert_eq!(tablet_landscape.interaction_mode(), InteractionMode::Tap);

        // detached keyboard screen: same width, touch gone
        let docked = DeviceCapability::classify(1366.0, false, 0);
        assert_eq!(docked.interaction_mode(), InteractionMode::Hover);
    }
}
