//! Axis ticks for angular plots.

/// `num_ticks` evenly spaced ticks over `limits` (radians, both ends
/// included) and their labels in degrees, e.g. `"45.0°"`.
pub fn generate_ticks(num_ticks: usize, limits: (f64, f64)) -> (Vec<f64>, Vec<String>) {
    let (lo, hi) = limits;
    let ticks: Vec<f64> = match num_ticks {
        0 => Vec::new(),
        1 => vec![lo],
        n => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| lo + step * i as f64).collect()
        }
    };
    let labels = ticks
        .iter()
        .map(|t| format!("{:.1}°", t.to_degrees()))
        .collect();
    (ticks, labels)
}
