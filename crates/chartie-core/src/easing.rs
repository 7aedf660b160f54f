// File: crates/chartie-core/src/easing.rs
// Summary: Animation easing curves mapping linear progress onto eased progress.

use serde::{Deserialize, Serialize};

/// Easing curve. Every variant maps [0,1] onto [0,1] with `f(0)=0` and `f(1)=1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub const ALL: [Easing; 4] = [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut];

    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for e in Easing::ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e:?}");
            assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn ease_in_out_is_continuous_at_half() {
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        let below = Easing::EaseInOut.apply(0.5 - 1e-9);
        assert!((below - 0.5).abs() < 1e-6);
    }

    #[test]
    fn curves_are_monotonic() {
        for e in Easing::ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = e.apply(i as f64 / 100.0);
                assert!(v >= prev, "{e:?} not monotonic at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn deserializes_camel_case() {
        let e: Easing = serde_json::from_str("\"easeOut\"").unwrap();
        assert_eq!(e, Easing::EaseOut);
    }
}
