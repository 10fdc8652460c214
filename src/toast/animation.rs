use std::time::{Duration, Instant};

/// Easing curve applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Kind of motion an animator applies while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Motion {
    SlideUp,
    SlideDown,
    Fade,
}

/// Cell-grid animator for a toast, driven each frame by the host.
///
/// Enter animators run from off-rest toward rest; exit animators run the
/// other way. Opacity is always animated; slide motions add a vertical
/// offset on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    motion: Motion,
    duration: Duration,
    easing: Easing,
    reverse: bool,
    started: Option<Instant>,
}

impl Animator {
    pub fn enter(motion: Motion, duration: Duration, easing: Easing) -> Self {
        Self {
            motion,
            duration,
            easing,
            reverse: false,
            started: None,
        }
    }

    pub fn exit(motion: Motion, duration: Duration, easing: Easing) -> Self {
        Self {
            motion,
            duration,
            easing,
            reverse: true,
            started: None,
        }
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Raw progress in `0.0..=1.0`; `0.0` until started.
    pub fn progress(&self) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (started.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Vertical offset in cells, given how far off-rest the toast travels.
    pub fn offset(&self, travel: u16) -> (i16, i16) {
        let eased = self.easing.apply(self.progress());
        // Enter shrinks the displacement to zero; exit grows it from zero.
        let displacement = if self.reverse { eased } else { 1.0 - eased };
        let cells = (displacement * travel as f32).round() as i16;
        match self.motion {
            // Entering from below the rest position, exiting upward past it.
            Motion::SlideUp => (0, if self.reverse { -cells } else { cells }),
            Motion::SlideDown => (0, if self.reverse { cells } else { -cells }),
            Motion::Fade => (0, 0),
        }
    }

    pub fn opacity(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        if self.reverse { 1.0 - eased } else { eased }
    }
}

/// Default enter animation for styled toasts.
pub fn toast_in() -> Animator {
    Animator::enter(Motion::SlideUp, Duration::from_millis(333), Easing::EaseOut)
}

/// Default exit animation for styled toasts.
pub fn toast_out() -> Animator {
    Animator::exit(Motion::Fade, Duration::from_millis(275), Easing::EaseIn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!((easing.apply(0.0)).abs() < 0.001, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?} at 1");
        }
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn unstarted_animator_sits_at_zero_progress() {
        let animator = toast_in();
        assert_eq!(animator.progress(), 0.0);
        assert!(!animator.is_finished());
        // Enter at zero progress: fully displaced, fully transparent.
        assert_eq!(animator.offset(2), (0, 2));
        assert_eq!(animator.opacity(), 0.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut animator = Animator::enter(Motion::SlideUp, Duration::ZERO, Easing::Linear);
        animator.start();
        assert!(animator.is_finished());
        assert_eq!(animator.offset(3), (0, 0));
        assert!((animator.opacity() - 1.0).abs() < 0.001);
    }

    #[test]
    fn exit_runs_the_curve_backwards() {
        let mut animator = Animator::exit(Motion::SlideUp, Duration::ZERO, Easing::Linear);
        animator.start();
        // Finished exit: fully displaced upward, fully transparent.
        assert_eq!(animator.offset(3), (0, -3));
        assert!(animator.opacity().abs() < 0.001);
    }

    #[test]
    fn fade_never_moves() {
        let mut animator = toast_out();
        animator.start();
        assert_eq!(animator.offset(5), (0, 0));
    }
}
