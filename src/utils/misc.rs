use chrono::TimeDelta;

/// Drops every character outside the ASCII range.
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// OpenStreetMap link centered on a coordinate, with a marker.
pub fn map_link(latitude: f64, longitude: f64, zoom: u8) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={latitude:.5}&mlon={longitude:.5}#map={zoom}/{latitude:.5}/{longitude:.5}"
    )
}

/// "3 min 7 sec"; negative spans read as zero.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!("{} min {} sec", seconds / 60, seconds % 60)
}
