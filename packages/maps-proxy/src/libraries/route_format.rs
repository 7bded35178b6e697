/// Convert an upstream distance in meters to kilometers with one decimal place
pub fn distance_km(meters: f64) -> f64 {
    (meters / 100.0).round() / 10.0
}

/// Convert an upstream duration in seconds to whole minutes
pub fn duration_minutes(seconds: f64) -> i64 {
    (seconds / 60.0).round() as i64
}

pub fn format_distance(km: f64) -> String {
    format!("{:.1} كم", km)
}

/// Arabic duration label: hours and minutes, hours only, or minutes only
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;

    match (hours, remainder) {
        (0, m) => format!("{} دقيقة", m),
        (h, 0) => format!("{} ساعة", h),
        (h, m) => format!("{} ساعة و {} دقيقة", h, m),
    }
}
