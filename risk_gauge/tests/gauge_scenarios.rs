//! End-to-end gauge geometry scenarios: a configured layout, realistic
//! maxima and a live value, checked down to the emitted arc angles.

use risk_gauge::{
    describe_arc, side_percentage, step_marks, AngleOrigin, SplitLayout, SweepLayout,
};

const EPS: f64 = 1e-9;

#[test]
fn balanced_gauge_half_profit() {
    // maxLoss 500 / maxProfit 500, total +250: profit side, 50%, the active
    // arc spans half of the profit sub-arc.
    let layout = SplitLayout::bidirectional();
    let arc = layout.split(500.0, 500.0);

    let (is_profit, pct) = side_percentage(250.0, 500.0, 500.0);
    assert!(is_profit);
    assert!((pct - 50.0).abs() < EPS);

    let fill = arc.fill_angle(250.0);
    let half_profit = arc.profit_start() + arc.profit_arc_deg / 2.0;
    assert!((fill - half_profit).abs() < EPS);
}

#[test]
fn lopsided_gauge_clamps_at_loss_extreme() {
    // maxLoss 5000 / maxProfit 10000, total -6000: percentage clamps to 100
    // and the fill reaches the loss-side extreme.
    let layout = SplitLayout::bidirectional();
    let arc = layout.split(5000.0, 10000.0);

    let (is_profit, pct) = side_percentage(-6000.0, 5000.0, 10000.0);
    assert!(!is_profit);
    assert!((pct - 100.0).abs() < EPS);

    let fill = arc.fill_angle(-6000.0);
    assert!((fill - arc.loss_start()).abs() < EPS);
}

#[test]
fn zero_value_sits_at_center_for_both_split_layouts() {
    for layout in [SplitLayout::bidirectional(), SplitLayout::full_circle()] {
        let arc = layout.split(500.0, 1000.0);
        let fill = arc.fill_angle(0.0);
        assert!(
            (fill - layout.center_angle_deg).abs() < EPS,
            "zero must produce a zero-length active arc at the center"
        );
        // And the degenerate active arc is still a drawable path.
        let d = describe_arc(200.0, 200.0, 150.0, arc.profit_start(), fill, layout.origin);
        assert!(d.starts_with("M "));
        assert!(!d.contains("NaN"));
    }
}

#[test]
fn step_marks_match_the_trail_step_grid() {
    let layout = SplitLayout::bidirectional();
    let arc = layout.split(1000.0, 1000.0);
    let marks = step_marks(1000.0, arc.profit_arc_deg, 250.0);
    assert_eq!(marks.len(), 4);
    for (i, mark) in marks.iter().enumerate() {
        assert!((mark.value - 250.0 * (i + 1) as f64).abs() < EPS);
        let angle = arc.profit_start() + mark.offset_deg;
        assert!(angle <= arc.profit_end() + EPS);
    }
}

#[test]
fn defaulted_status_renders_without_panicking() {
    // A failed status fetch leaves all-zero numbers at the point of use.
    // The whole geometry pipeline must stay finite on that input.
    let layout = SplitLayout::bidirectional();
    let arc = layout.split(0.0, 0.0);
    let fill = arc.fill_angle(0.0);
    assert!(fill.is_finite());
    let d = describe_arc(200.0, 200.0, 150.0, arc.loss_start(), arc.loss_end(), layout.origin);
    assert!(!d.contains("NaN"));
    assert!(step_marks(0.0, arc.profit_arc_deg, 0.0).is_empty());
}

#[test]
fn single_sided_sweep_tracks_trades_count() {
    // Trades-today gauge: 7 of 10 trades used on a 270° sweep.
    let sweep = SweepLayout::three_quarter();
    let pct = (7.0 / 10.0) * 100.0;
    let angle = sweep.value_angle(pct);
    assert!((angle - (-135.0 + 0.7 * 270.0)).abs() < EPS);

    let d = describe_arc(100.0, 100.0, 70.0, sweep.start_angle_deg, angle, AngleOrigin::East);
    // 189° of fill crosses the 180° threshold: long arc.
    assert!(d.contains(" 1 0 "));
}
