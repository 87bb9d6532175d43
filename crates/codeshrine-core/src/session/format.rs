//! Elapsed-time display formatting.
//!
//! Presentation contract only - the session state itself is an integer
//! second count. Sessions under one hour render without the hour field,
//! matching the original menu-bar app.

/// `HH:MM:SS` once an hour has passed, `MM:SS` before that.
pub fn format_clock(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Compact menu-bar form: `"Xh Ym"` past the hour, `"Ym"` before.
pub fn format_compact(secs: u64) -> String {
    let total_minutes = secs / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
