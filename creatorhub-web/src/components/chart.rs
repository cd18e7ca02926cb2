//! Minimal SVG charts for the profile analytics card

use leptos::prelude::*;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 160.0;
const PAD: f64 = 8.0;

/// Map `values` onto `polyline` points inside a `width` x `height` box.
///
/// The y axis spans `min..=max`; a flat range is drawn through the middle.
pub fn polyline_points(values: &[f64], width: f64, height: f64, min: f64, max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let step = if values.len() > 1 {
        (width - 2.0 * PAD) / (values.len() - 1) as f64
    } else {
        0.0
    };
    let span = max - min;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PAD + step * i as f64;
            let ratio = if span > 0.0 { (v - min) / span } else { 0.5 };
            let y = height - PAD - ratio.clamp(0.0, 1.0) * (height - 2.0 * PAD);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rounded-out axis bounds with a little headroom, e.g. scores 9.3..9.8 -> 9.0..10.0.
pub fn axis_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let lo = min.floor();
    let hi = max.ceil();
    if hi > lo {
        (lo, hi)
    } else {
        (lo, lo + 1.0)
    }
}

/// Line chart of one series with x labels underneath.
#[component]
pub fn LineChart(
    values: Vec<f64>,
    labels: Vec<String>,
    #[prop(into)] title: String,
    #[prop(default = "chart-line")] class: &'static str,
) -> impl IntoView {
    let (min, max) = axis_bounds(&values);
    let points = polyline_points(&values, WIDTH, HEIGHT, min, max);

    view! {
        <figure class="chart">
            <figcaption>{title}</figcaption>
            <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="chart-svg" preserveAspectRatio="none">
                <polyline class=class points=points fill="none"></polyline>
            </svg>
            <div class="chart-labels">
                {labels.into_iter().map(|l| view! { <span>{l}</span> }).collect_view()}
            </div>
        </figure>
    }
}

/// Horizontal bars on a 0..=10 scale.
#[component]
pub fn ScoreBars(items: Vec<(String, f64)>) -> impl IntoView {
    view! {
        <div class="score-bars">
            {items
                .into_iter()
                .map(|(name, score)| {
                    let width = format!("width: {:.0}%", (score / 10.0).clamp(0.0, 1.0) * 100.0);
                    view! {
                        <div class="score-bar-row">
                            <span class="score-bar-label">{name}</span>
                            <div class="score-bar-track">
                                <div class="score-bar-fill" style=width></div>
                            </div>
                            <span class="score-bar-value">{format!("{score:.1}")}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_spans_box() {
        let points = polyline_points(&[0.0, 5.0, 10.0], 100.0, 50.0, 0.0, 10.0);
        assert_eq!(points, "8.0,42.0 50.0,25.0 92.0,8.0");
    }

    #[test]
    fn test_polyline_flat_and_empty() {
        assert_eq!(polyline_points(&[], 100.0, 50.0, 0.0, 1.0), "");
        assert_eq!(polyline_points(&[3.0], 100.0, 50.0, 3.0, 3.0), "8.0,25.0");
    }

    #[test]
    fn test_axis_bounds() {
        assert_eq!(axis_bounds(&[9.3, 9.8]), (9.0, 10.0));
        assert_eq!(axis_bounds(&[15.0, 25.0]), (15.0, 25.0));
        assert_eq!(axis_bounds(&[2.0, 2.0]), (2.0, 3.0));
        assert_eq!(axis_bounds(&[]), (0.0, 1.0));
    }
}
