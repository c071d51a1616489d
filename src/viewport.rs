//! Deferred media activation: the logic behind lazy video embeds.
//!
//! Everything here is plain Rust so it can be tested off-browser. The
//! hooks in `crate::hooks` bind these types to the IntersectionObserver
//! API and to real timers; this module only decides *when* expensive
//! content may load.

/// Grace period between first visibility and committing to load, so a
/// section scrolled past quickly never pays for its embed.
pub const SETTLE_DELAY_MS: u32 = 200;

/// Configuration for one observed region.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the region that must be visible, 0.0..=1.0.
    pub threshold: f64,
    /// Viewport expansion used for early triggering, e.g. "50px".
    pub root_margin: String,
    /// Stop observing after the first intersection.
    pub trigger_once: bool,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: true,
        }
    }
}

/// Tracks live visibility plus the one-way "has ever been visible" latch.
#[derive(Debug)]
pub struct VisibilityLatch {
    trigger_once: bool,
    is_intersecting: bool,
    has_intersected: bool,
}

impl VisibilityLatch {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            is_intersecting: false,
            has_intersected: false,
        }
    }

    /// Record an intersection report. Returns true only on the call that
    /// latches `has_intersected`; the latch never reverts afterwards.
    pub fn record(&mut self, visible: bool) -> bool {
        self.is_intersecting = visible;
        if visible && !self.has_intersected {
            self.has_intersected = true;
            return true;
        }
        false
    }

    pub fn is_intersecting(&self) -> bool {
        self.is_intersecting
    }

    pub fn has_intersected(&self) -> bool {
        self.has_intersected
    }

    /// Whether the underlying observation can be released. Only latched
    /// single-shot trackers release; continuous ones keep reporting.
    pub fn observation_released(&self) -> bool {
        self.trigger_once && self.has_intersected
    }
}

/// Command the host layer must carry out for the gate. The gate itself
/// never touches timers; it only asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCommand {
    /// Schedule a one-shot settle timer for this many milliseconds.
    StartSettle(u32),
    /// Drop the pending settle timer, if any.
    CancelSettle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Idle,
    Settling,
    Loaded,
    TornDown,
}

/// Decides when a deferred embed may actually load.
///
/// Drive it with `on_mounted` / `on_intersected` / `on_settle_elapsed`
/// and honor the returned commands. `should_load` flips to true exactly
/// once: after mount, after first visibility, after the settle delay ran
/// to completion uncancelled. Tearing the gate down while the timer is
/// pending cancels the load for good.
#[derive(Debug)]
pub struct SettleGate {
    state: GateState,
    mounted: bool,
    intersected: bool,
    settle_delay_ms: u32,
}

impl SettleGate {
    pub fn new() -> Self {
        Self::with_delay(SETTLE_DELAY_MS)
    }

    pub fn with_delay(settle_delay_ms: u32) -> Self {
        Self {
            state: GateState::Idle,
            mounted: false,
            intersected: false,
            settle_delay_ms,
        }
    }

    pub fn should_load(&self) -> bool {
        self.state == GateState::Loaded
    }

    /// The owning view attached to a live rendering environment.
    pub fn on_mounted(&mut self) -> Option<GateCommand> {
        if self.state != GateState::Idle {
            return None;
        }
        self.mounted = true;
        self.arm()
    }

    /// The observed region became visible. Reports arriving before the
    /// mount are dropped: observation may not precede mount readiness.
    pub fn on_intersected(&mut self) -> Option<GateCommand> {
        if self.state != GateState::Idle || !self.mounted {
            return None;
        }
        self.intersected = true;
        self.arm()
    }

    /// The settle timer fired. Returns true when this commits the load;
    /// a stray timer on a gate that is not settling is ignored.
    pub fn on_settle_elapsed(&mut self) -> bool {
        if self.state != GateState::Settling {
            return false;
        }
        self.state = GateState::Loaded;
        true
    }

    /// The owning view is going away. Any pending timer must be dropped
    /// so nothing fires into a dead component.
    pub fn on_teardown(&mut self) -> Option<GateCommand> {
        let was_settling = self.state == GateState::Settling;
        self.state = GateState::TornDown;
        was_settling.then_some(GateCommand::CancelSettle)
    }

    fn arm(&mut self) -> Option<GateCommand> {
        if self.mounted && self.intersected {
            self.state = GateState::Settling;
            Some(GateCommand::StartSettle(self.settle_delay_ms))
        } else {
            None
        }
    }
}

impl Default for SettleGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_reference_values() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px");
        assert!(options.trigger_once);
    }

    #[test]
    fn latch_is_monotonic() {
        let mut latch = VisibilityLatch::new(true);
        assert!(latch.record(true));
        assert!(latch.has_intersected());

        // Scrolling back out toggles the live flag but never the latch.
        assert!(!latch.record(false));
        assert!(!latch.is_intersecting());
        assert!(latch.has_intersected());

        assert!(!latch.record(true));
        assert!(latch.has_intersected());
    }

    #[test]
    fn latch_reports_the_latching_call_exactly_once() {
        let mut latch = VisibilityLatch::new(true);
        assert!(!latch.record(false));
        assert!(latch.record(true));
        assert!(!latch.record(true));
    }

    #[test]
    fn single_shot_latch_releases_observation() {
        let mut latch = VisibilityLatch::new(true);
        assert!(!latch.observation_released());
        latch.record(true);
        assert!(latch.observation_released());
    }

    #[test]
    fn continuous_latch_keeps_observing() {
        let mut latch = VisibilityLatch::new(false);
        latch.record(true);
        assert!(latch.has_intersected());
        assert!(!latch.observation_released());
        latch.record(false);
        assert!(!latch.is_intersecting());
    }

    #[test]
    fn gate_never_loads_on_construction() {
        let gate = SettleGate::new();
        assert!(!gate.should_load());
    }

    #[test]
    fn mount_alone_does_not_arm() {
        let mut gate = SettleGate::new();
        assert_eq!(gate.on_mounted(), None);
        assert!(!gate.should_load());
    }

    #[test]
    fn intersection_before_mount_is_dropped() {
        let mut gate = SettleGate::new();
        assert_eq!(gate.on_intersected(), None);
        assert_eq!(gate.on_mounted(), None);
        // The dropped report does not count; a fresh one is required.
        assert_eq!(
            gate.on_intersected(),
            Some(GateCommand::StartSettle(SETTLE_DELAY_MS))
        );
    }

    #[test]
    fn settle_delay_is_honored_even_when_visible_at_creation() {
        let mut gate = SettleGate::new();
        gate.on_mounted();
        assert_eq!(
            gate.on_intersected(),
            Some(GateCommand::StartSettle(SETTLE_DELAY_MS))
        );
        // Timer requested but not yet elapsed: still showing placeholder.
        assert!(!gate.should_load());
        assert!(gate.on_settle_elapsed());
        assert!(gate.should_load());
    }

    #[test]
    fn gate_arms_exactly_once() {
        let mut gate = SettleGate::new();
        gate.on_mounted();
        assert!(gate.on_intersected().is_some());
        assert_eq!(gate.on_intersected(), None);
        assert_eq!(gate.on_mounted(), None);
    }

    #[test]
    fn stray_timer_without_arming_is_ignored() {
        let mut gate = SettleGate::new();
        assert!(!gate.on_settle_elapsed());
        gate.on_mounted();
        assert!(!gate.on_settle_elapsed());
        assert!(!gate.should_load());
    }

    #[test]
    fn never_visible_region_never_loads() {
        let mut gate = SettleGate::new();
        gate.on_mounted();
        // However long we wait, no intersection means no load.
        for _ in 0..50 {
            assert!(!gate.on_settle_elapsed());
        }
        assert!(!gate.should_load());
    }

    #[test]
    fn teardown_while_settling_cancels_the_load() {
        let mut gate = SettleGate::new();
        gate.on_mounted();
        gate.on_intersected();
        assert_eq!(gate.on_teardown(), Some(GateCommand::CancelSettle));
        // A timer that fires anyway must not resurrect the gate.
        assert!(!gate.on_settle_elapsed());
        assert!(!gate.should_load());
    }

    #[test]
    fn teardown_before_arming_needs_no_cancellation() {
        let mut gate = SettleGate::new();
        gate.on_mounted();
        assert_eq!(gate.on_teardown(), None);
        assert_eq!(gate.on_intersected(), None);
        assert!(!gate.should_load());
    }

    #[test]
    fn load_commits_only_after_the_timer_fires() {
        // The t=199ms / t=201ms boundary, expressed as event order: the
        // gate reports false until the settle event, true right after.
        let mut gate = SettleGate::new();
        gate.on_mounted();
        gate.on_intersected();
        assert!(!gate.should_load());
        gate.on_settle_elapsed();
        assert!(gate.should_load());
    }

    #[test]
    fn independent_gates_share_no_state() {
        let mut first = SettleGate::new();
        let mut second = SettleGate::new();
        first.on_mounted();
        first.on_intersected();
        first.on_settle_elapsed();
        assert!(first.should_load());
        assert!(!second.should_load());
        second.on_mounted();
        assert!(!second.should_load());
    }

    #[test]
    fn custom_delay_is_carried_in_the_command() {
        let mut gate = SettleGate::with_delay(450);
        gate.on_mounted();
        assert_eq!(gate.on_intersected(), Some(GateCommand::StartSettle(450)));
    }
}
