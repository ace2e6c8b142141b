#![allow(dead_code)]

use uuid::Uuid;

/// Formats a byte count as a human-readable size. Base-1024 units, two
/// decimal places with trailing zeros dropped, and zero is `"0 Bytes"`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut exponent = 0;
    while value >= 1024.0 && exponent < UNITS.len() - 1 {
        value /= 1024.0;
        exponent += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

/// Process-unique identifier for a new resume record.
pub fn new_resume_id() -> String {
    Uuid::new_v4().to_string()
}
