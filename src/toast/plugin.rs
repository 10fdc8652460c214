//! Optional override hooks letting an external style pack replace parts of a
//! toast. Every getter defaults to `None`, which means "use the default".

use crate::config::Orientation;
use crate::toast::animation::Animator;
use crate::toast::{Gravity, ToastView};

pub trait ToastOverride {
    fn gravity(&self) -> Option<Gravity> {
        None
    }

    fn x_offset(&self) -> Option<i16> {
        None
    }

    fn y_offset(&self) -> Option<i16> {
        None
    }

    fn horizontal_margin(&self) -> Option<u16> {
        None
    }

    fn vertical_margin(&self) -> Option<u16> {
        None
    }

    fn view(&self) -> Option<ToastView> {
        None
    }

    fn enter_animation(&self) -> Option<Animator> {
        None
    }

    fn exit_animation(&self) -> Option<Animator> {
        None
    }

    /// Called before the defaults are recomputed for the new orientation.
    fn on_orientation_change(&self, orientation: Orientation) {
        let _ = orientation;
    }
}

/// Pins every toast to a fixed anchor; backs the `--toast-position` flag.
#[derive(Debug, Clone, Copy)]
pub struct FixedGravity(pub Gravity);

impl ToastOverride for FixedGravity {
    fn gravity(&self) -> Option<Gravity> {
        Some(self.0)
    }
}
