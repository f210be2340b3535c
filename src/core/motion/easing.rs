//! Easing curves for motion timing.
//!
//! The curves mirror the ones the page was designed against:
//! - `Linear`
//! - `PowerOut(n)`: the `power1.out` .. `power4.out` family, i.e.
//!   `1 - (1 - t)^(n + 1)`
//! - `BackOut { overshoot }`: `back.out(s)`, which overshoots the target
//!   before settling
//!
//! ```
//! use triade::core::motion::Ease;
//!
//! let ease = Ease::POWER4_OUT;
//! assert_eq!(ease.evaluate(0.0), 0.0);
//! assert_eq!(ease.evaluate(1.0), 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Ease {
    /// No easing.
    Linear,

    /// Polynomial deceleration of degree `power + 1`.
    PowerOut { power: u8 },

    /// Overshooting deceleration.
    BackOut { overshoot: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Self::POWER1_OUT
    }
}

impl Ease {
    pub const POWER1_OUT: Ease = Ease::PowerOut { power: 1 };
    pub const POWER2_OUT: Ease = Ease::PowerOut { power: 2 };
    pub const POWER3_OUT: Ease = Ease::PowerOut { power: 3 };
    pub const POWER4_OUT: Ease = Ease::PowerOut { power: 4 };

    /// `back.out(1.7)`
    pub const BACK_OUT: Ease = Ease::BackOut { overshoot: 1.7 };

    /// Evaluate the curve at `t`.
    ///
    /// Input is clamped to `[0, 1]`. The endpoints are exact for every curve;
    /// `BackOut` may exceed 1.0 in between.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }

        match *self {
            Self::Linear => t,
            Self::PowerOut { power } => 1.0 - (1.0 - t).powi(i32::from(power) + 1),
            Self::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}
