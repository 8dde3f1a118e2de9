use pullrefresh_core::Duration;

/// Easing curves used by the header transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    /// Material standard curve.
    FastOutSlowInEasing,
    /// Material deceleration curve, used for entering content.
    LinearOutSlowInEasing,
    /// Material acceleration curve, used for exiting content.
    FastOutLinearInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
            Easing::LinearOutSlowInEasing => CubicBezier::new(0.0, 0.0, 0.2, 1.0).solve(fraction),
            Easing::FastOutLinearInEasing => CubicBezier::new(0.4, 0.0, 1.0, 1.0).solve(fraction),
        }
    }
}

/// Cubic bezier through (0,0) and (1,1) with two control points.
struct CubicBezier {
    x: [f32; 3],
    y: [f32; 3],
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Self::coefficients(x1, x2),
            y: Self::coefficients(y1, y2),
        }
    }

    fn coefficients(p1: f32, p2: f32) -> [f32; 3] {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        [a, b, c]
    }

    fn sample([a, b, c]: [f32; 3], t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn slope([a, b, c]: [f32; 3], t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y, self.parameter_for(fraction))
    }

    /// Finds `t` with `x(t) == fraction`: Newton first, bisection if it stalls.
    fn parameter_for(&self, fraction: f32) -> f32 {
        let mut t = fraction;
        for _ in 0..8 {
            let error = Self::sample(self.x, t) - fraction;
            if error.abs() < 1e-6 {
                return t;
            }
            let slope = Self::slope(self.x, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let error = Self::sample(self.x, t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

/// Time-based animation description handed to the host animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    /// Delay before the animation starts.
    pub delay: Duration,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration: Duration::from_millis(duration_millis),
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Default header entrance: a short decelerating fade.
    pub fn fade_in() -> Self {
        Self::tween(250, Easing::LinearOutSlowInEasing)
    }

    /// Default header exit.
    pub fn fade_out() -> Self {
        Self::tween(250, Easing::FastOutLinearInEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay = Duration::from_millis(delay_millis);
        self
    }

    /// Delay plus duration: when the completion callback is due.
    pub fn total_duration(&self) -> Duration {
        self.delay + self.duration
    }

    /// Eased progress in [0, 1] after `elapsed` since the animation was started.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        let running = elapsed.saturating_sub(self.delay);
        if self.duration.is_zero() {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        let linear = running.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.transform(linear.min(1.0))
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
