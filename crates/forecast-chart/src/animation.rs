// File: crates/forecast-chart/src/animation.rs
// Summary: Time-driven animation model: easing curves, one-shot tweens, the highlight pulse and the tooltip fade state machine.
// Notes:
// - Nothing here owns a clock. Callers pass `now` from the host's frame
//   scheduler, which keeps every transition deterministic under test.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^2`
    QuadraticOut,
    /// `(1 - cos(pi * t)) / 2`
    SineInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::SineInOut => (1.0 - (PI * t).cos()) * 0.5,
        }
    }
}

fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// One-shot ramp from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self { from, to, start, duration, easing }
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let k = self.easing.apply(progress(self.start, self.duration, now));
        self.from + (self.to - self.from) * k
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        progress(self.start, self.duration, now) >= 1.0
    }
}

/// Reverse-looping opacity oscillation between `high` and `low`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    started: Option<Instant>,
    half_period: Duration,
    high: f64,
    low: f64,
}

impl Pulse {
    pub fn new(half_period: Duration, low: f64) -> Self {
        Self { started: None, half_period, high: 1.0, low }
    }

    /// Start looping. Returns `false` (and leaves the phase alone) if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started.is_some() {
            return false;
        }
        self.started = Some(now);
        true
    }

    /// Stop and snap back to full opacity.
    pub fn stop(&mut self) {
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn opacity(&self, now: Instant) -> f64 {
        let Some(start) = self.started else { return self.high };
        let half = self.half_period.as_secs_f64();
        if half <= 0.0 {
            return self.high;
        }
        let t = now.saturating_duration_since(start).as_secs_f64() / half;
        let leg = t.floor() as u64;
        let frac = t - t.floor();
        // Even legs run high -> low, odd legs play the same curve backwards.
        let k = if leg % 2 == 0 { Easing::SineInOut.apply(frac) } else { Easing::SineInOut.apply(1.0 - frac) };
        self.high + (self.low - self.high) * k
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipPhase {
    Hidden,
    FadingIn(Tween),
    Visible,
    FadingOut(Tween),
}

/// Completed transitions reported by [`TooltipAnimator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipTransition {
    FadeInCompleted,
    FadeOutCompleted,
}

/// `Hidden -> FadingIn -> Visible -> FadingOut -> Hidden`.
///
/// * `show` only acts on `Hidden`; during a fade-out it is ignored and the
///   fade runs to completion.
/// * `hide` during `FadingIn` cancels it and fades out from the current
///   opacity. `hide` during `FadingOut` is a no-op (the fade guard).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipAnimator {
    phase: TooltipPhase,
    fade_in: Duration,
    fade_out: Duration,
}

impl TooltipAnimator {
    pub fn new(fade_in: Duration, fade_out: Duration) -> Self {
        Self { phase: TooltipPhase::Hidden, fade_in, fade_out }
    }

    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    /// Visible in the layout sense: anything but `Hidden`.
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, TooltipPhase::Hidden)
    }

    /// The fade guard: set while a fade-out is in flight.
    pub fn is_fading_out(&self) -> bool {
        matches!(self.phase, TooltipPhase::FadingOut(_))
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, TooltipPhase::FadingIn(_) | TooltipPhase::FadingOut(_))
    }

    pub fn opacity(&self, now: Instant) -> f64 {
        match self.phase {
            TooltipPhase::Hidden => 0.0,
            TooltipPhase::Visible => 1.0,
            TooltipPhase::FadingIn(t) | TooltipPhase::FadingOut(t) => t.value_at(now),
        }
    }

    /// Returns `true` if a fade-in started.
    pub fn show(&mut self, now: Instant) -> bool {
        match self.phase {
            TooltipPhase::Hidden => {
                self.phase = TooltipPhase::FadingIn(Tween::new(0.0, 1.0, now, self.fade_in, Easing::QuadraticOut));
                debug!("tooltip fade-in started");
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if a fade-out started.
    pub fn hide(&mut self, now: Instant) -> bool {
        match self.phase {
            TooltipPhase::Visible | TooltipPhase::FadingIn(_) => {
                let from = self.opacity(now);
                self.phase = TooltipPhase::FadingOut(Tween::new(from, 0.0, now, self.fade_out, Easing::QuadraticOut));
                debug!(from, "tooltip fade-out started");
                true
            }
            TooltipPhase::Hidden | TooltipPhase::FadingOut(_) => false,
        }
    }

    /// Show immediately at full opacity, cancelling any fade.
    pub fn show_now(&mut self) {
        self.phase = TooltipPhase::Visible;
    }

    /// Hide immediately, cancelling any fade.
    pub fn hide_now(&mut self) {
        self.phase = TooltipPhase::Hidden;
    }

    /// Advance to `now`, settling finished fades.
    pub fn tick(&mut self, now: Instant) -> Option<TooltipTransition> {
        match self.phase {
            TooltipPhase::FadingIn(t) if t.is_finished(now) => {
                self.phase = TooltipPhase::Visible;
                Some(TooltipTransition::FadeInCompleted)
            }
            TooltipPhase::FadingOut(t) if t.is_finished(now) => {
                self.phase = TooltipPhase::Hidden;
                debug!("tooltip hidden");
                Some(TooltipTransition::FadeOutCompleted)
            }
            _ => None,
        }
    }
}
