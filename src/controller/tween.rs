use glam::Vec2;

/// Values a [`Tween`] can blend between.
pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vec2 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    QuadraticOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::QuadraticOut => t * (2.0 - t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress<T> {
    Running(T),
    Done(T),
}

impl<T: Copy> Progress<T> {
    pub fn value(&self) -> T {
        match *self {
            Progress::Running(v) | Progress::Done(v) => v,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Progress::Done(_))
    }
}

/// An interpolation in progress, advanced by elapsed milliseconds.
///
/// Replacing a running tween is just overwriting it; nothing needs cleanup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub elapsed: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, easing: Easing) -> Self {
        Self { from, to, elapsed: 0.0, duration, easing }
    }

    pub fn advance(&mut self, dt: f32) -> Progress<T> {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        self.progress()
    }

    pub fn progress(&self) -> Progress<T> {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return Progress::Done(self.to);
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        Progress::Running(self.from.interpolate(self.to, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_out_curve() {
        assert_eq!(Easing::QuadraticOut.apply(0.0), 0.0);
        assert_eq!(Easing::QuadraticOut.apply(0.5), 0.75);
        assert_eq!(Easing::QuadraticOut.apply(1.0), 1.0);
        assert_eq!(Easing::QuadraticOut.apply(3.0), 1.0, "clamped past the end");
    }

    #[test]
    fn test_tween_runs_then_finishes() {
        let mut tween = Tween::new(0.0_f32, 10.0, 200.0, Easing::QuadraticOut);
        assert_eq!(tween.progress(), Progress::Running(0.0));

        let half = tween.advance(100.0);
        assert!(!half.is_done());
        assert!((half.value() - 7.5).abs() < 1e-5);

        let end = tween.advance(500.0);
        assert_eq!(end, Progress::Done(10.0));
        assert_eq!(tween.elapsed, 200.0, "elapsed saturates at duration");
    }

    #[test]
    fn test_zero_duration_is_done_immediately() {
        let tween = Tween::new(Vec2::ZERO, Vec2::ONE, 0.0, Easing::QuadraticOut);
        assert_eq!(tween.progress(), Progress::Done(Vec2::ONE));
    }
}
