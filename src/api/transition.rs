use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
}

impl Easing {
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        match self {
            Self::Linear => progress.clamp(0.0, 1.0),
        }
    }
}

/// Duration and easing of one animated change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionSpec {
    #[must_use]
    pub const fn linear(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::Linear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f64,
    to: f64,
    spec: TransitionSpec,
    elapsed: Duration,
}

impl Transition {
    fn value(&self) -> f64 {
        if self.spec.duration.is_zero() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f64() / self.spec.duration.as_secs_f64();
        let eased = self.spec.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.spec.duration
    }
}

/// Scalar that either sits at a value or interpolates towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    current: f64,
    transition: Option<Transition>,
}

impl AnimatedValue {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            current: value,
            transition: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.transition
            .as_ref()
            .map_or(self.current, Transition::value)
    }

    /// Final value once any in-flight transition lands.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.transition
            .as_ref()
            .map_or(self.current, |transition| transition.to)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Jumps to `value`, dropping any in-flight transition.
    pub fn set(&mut self, value: f64) {
        self.current = value;
        self.transition = None;
    }

    /// Starts interpolating from the currently displayed value.
    pub fn animate_to(&mut self, value: f64, spec: TransitionSpec) {
        let from = self.value();
        if spec.duration.is_zero() || from == value {
            self.set(value);
            return;
        }
        self.current = from;
        self.transition = Some(Transition {
            from,
            to: value,
            spec,
            elapsed: Duration::ZERO,
        });
    }

    /// Advances the transition; returns `true` when it completed during this step.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.elapsed = transition.elapsed.saturating_add(elapsed);
        if transition.is_finished() {
            self.current = transition.to;
            self.transition = None;
            return true;
        }
        false
    }
}
