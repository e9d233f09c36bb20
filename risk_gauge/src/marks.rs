//! Step mark placement along a gauge sub-range.

use serde::{Deserialize, Serialize};

/// A tick annotation at a fixed value interval within one sub-range.
///
/// The offset is the unsigned angular distance from the shared center angle;
/// the renderer subtracts it on the loss side and adds it on the profit side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepMark {
    pub offset_deg: f64,
    pub value: f64,
}

/// Marks at every multiple of `step` up to `side_max`, proportionally placed
/// along an `arc_deg` sub-range. No mark at zero. Returns an empty list when
/// the step or the side maximum is non-positive.
pub fn step_marks(side_max: f64, arc_deg: f64, step: f64) -> Vec<StepMark> {
    if step <= 0.0 || side_max <= 0.0 {
        return Vec::new();
    }
    let count = (side_max / step).floor() as usize;
    (1..=count)
        .map(|i| {
            let value = i as f64 * step;
            StepMark {
                offset_deg: (value / side_max) * arc_deg,
                value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn four_marks_for_thousand_by_two_fifty() {
        let marks = step_marks(1000.0, 135.0, 250.0);
        assert_eq!(marks.len(), 4);
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![250.0, 500.0, 750.0, 1000.0]);
        // Last mark lands on the sub-range extreme.
        assert!((marks[3].offset_deg - 135.0).abs() < EPS);
    }

    #[test]
    fn offsets_are_proportional() {
        let marks = step_marks(1000.0, 135.0, 250.0);
        assert!((marks[0].offset_deg - 33.75).abs() < EPS);
        assert!((marks[1].offset_deg - 67.5).abs() < EPS);
    }

    #[test]
    fn step_larger_than_max_yields_no_marks() {
        assert!(step_marks(100.0, 135.0, 250.0).is_empty());
    }

    #[test]
    fn non_positive_step_is_rejected_not_divided() {
        assert!(step_marks(1000.0, 135.0, 0.0).is_empty());
        assert!(step_marks(1000.0, 135.0, -50.0).is_empty());
    }

    #[test]
    fn non_positive_side_max_yields_no_marks() {
        assert!(step_marks(0.0, 135.0, 250.0).is_empty());
        assert!(step_marks(-1000.0, 135.0, 250.0).is_empty());
    }
}
