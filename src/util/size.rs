//! Human-readable size strings
//!
//! Sizes never display above gigabytes: anything at MB scale or larger is
//! shown in MB, with the GB equivalent in parentheses once it reaches 1 GB.

const UNIT_STEP: u64 = 1024;
const SMALL_UNITS: [&str; 2] = ["Bytes", "KB"];

/// Two-decimal fixed notation of the exact binary value.
///
/// `2.675` is stored just below the midpoint and gives `"2.67"`. Values that
/// sit exactly on a midpoint (`0.125`) round away from zero.
pub fn to_fixed_2(value: f64) -> String {
    // Negative zero prints unsigned
    let value = if value == 0.0 { 0.0 } else { value };
    match exact_half_hundredths(value) {
        Some(doubled) => {
            let hundredths = (doubled + 1) / 2;
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
        }
        // Fixed-precision formatting already rounds the exact value
        None => format!("{:.2}", value),
    }
}

/// `|value| * 200` when that is an odd integer, i.e. `value` lies exactly
/// halfway between two hundredths
fn exact_half_hundredths(value: f64) -> Option<u64> {
    let scaled = value * 200.0;
    if !scaled.is_finite() || scaled.fract() != 0.0 || scaled.abs() >= 2f64.powi(53) {
        return None;
    }
    // Zero residual means the product was not rounded
    if value.mul_add(200.0, -scaled) != 0.0 {
        return None;
    }
    let doubled = scaled.abs() as u64;
    (doubled % 2 == 1).then_some(doubled)
}

/// Up to two decimals with trailing zeros dropped (`1.50` → `1.5`, `2.00` → `2`)
fn trim_fixed_2(value: f64) -> String {
    let fixed = to_fixed_2(value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format a size given in megabytes.
///
/// Below 1024 MB: `"X.XX MB"`; otherwise `"X.XX MB (Y.YY GB)"`.
pub fn format_size_mb(size_mb: f64) -> String {
    if size_mb < UNIT_STEP as f64 {
        format!("{} MB", to_fixed_2(size_mb))
    } else {
        format!(
            "{} MB ({} GB)",
            to_fixed_2(size_mb),
            to_fixed_2(size_mb / UNIT_STEP as f64)
        )
    }
}

/// `floor(log_1024(bytes))`, computed exactly in integers
fn unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut remaining = bytes;
    while remaining >= UNIT_STEP {
        remaining /= UNIT_STEP;
        index += 1;
    }
    index
}

/// Format a raw byte count across Bytes/KB/MB, capping at MB (+GB)
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let index = unit_index(bytes);
    if index < SMALL_UNITS.len() {
        let scaled = bytes as f64 / (UNIT_STEP.pow(index as u32)) as f64;
        return format!("{} {}", trim_fixed_2(scaled), SMALL_UNITS[index]);
    }

    let size_mb = bytes as f64 / (UNIT_STEP * UNIT_STEP) as f64;
    if index == 2 {
        format!("{} MB", to_fixed_2(size_mb))
    } else {
        format!(
            "{} MB ({} GB)",
            to_fixed_2(size_mb),
            to_fixed_2(size_mb / UNIT_STEP as f64)
        )
    }
}
