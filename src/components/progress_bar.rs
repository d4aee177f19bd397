use crate::theme::ColorScheme;

/// Clamps a progress value into `0..=100`; NaN counts as no progress.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

pub fn progress_track_classes(scheme: ColorScheme) -> &'static str {
    if scheme.is_dark() {
        "w-full bg-slate-700 rounded-full h-2.5 overflow-hidden"
    } else {
        "w-full bg-slate-200 rounded-full h-2.5 overflow-hidden"
    }
}
