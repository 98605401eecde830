//! Human readable byte counts.

const UNITS: [(&str, u64); 5] = [
    ("PB", 1 << 50),
    ("TB", 1 << 40),
    ("GB", 1 << 30),
    ("MB", 1 << 20),
    ("kB", 1 << 10),
];

/// Formats a byte count with a binary unit suffix.
///
/// Sizes below 1024 are printed as whole bytes. Larger sizes are scaled to
/// the largest unit (kB, MB, GB, TB or PB, powers of 1024) they reach and
/// printed with `digits` fractional digits, one by default.
///
/// # Examples
///
/// ```
/// use svyio_core::text::humanize_file_size;
///
/// assert_eq!(humanize_file_size(0, None), "0 bytes");
/// assert_eq!(humanize_file_size(512, None), "512 bytes");
/// assert_eq!(humanize_file_size(1536, None), "1.5 kB");
/// assert_eq!(humanize_file_size(5 * 1024 * 1024, Some(2)), "5.00 MB");
/// ```
#[must_use]
pub fn humanize_file_size(size: u64, digits: Option<usize>) -> String {
    let digits = digits.unwrap_or(1);

    UNITS
        .iter()
        .find(|(_, factor)| size >= *factor)
        .map_or_else(
            || format!("{size} bytes"),
            |(unit, factor)| format!("{:.digits$} {unit}", size as f64 / *factor as f64),
        )
}
