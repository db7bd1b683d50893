//! Form inputs mirrored into the preview

/// Raw annotation text offered by the "insert sample" action
pub const SAMPLE_MARKDOWN: &str = "Electrical Box Here

Main Water Valve

HVAC Unit Location

Load-Bearing Wall

Emergency Exit Door

Access Panel

Cable Routing Path

Fuse Box

Fire Alarm Sensor

Light Switch

Ceiling Height: 10 ft

Plumbing Pipe Route

Ventilation Ducts

Sprinkler System Zone 1

Data Network Outlet

Concrete Foundation

Solar Panel Mounting

Smoke Detector

Gas Meter Location

Structural Support Beam";

/// Generation form fields other than page count and markup selection
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Estimated output size in megabytes (sanitized, never NaN or negative)
    pub target_size_mb: f64,
    /// Output file name as typed (may be blank)
    pub file_name: String,
    /// Annotation markup source
    pub markdown: String,
    /// Modification date as `YYYY-MM-DD`, if one was entered
    pub modified_date: Option<String>,
    /// Whether a background document exists to generate from
    pub default_document_available: bool,
}

impl FormState {
    pub fn new(target_size_mb: f64) -> Self {
        Self {
            target_size_mb,
            file_name: String::new(),
            markdown: String::new(),
            modified_date: None,
            default_document_available: true,
        }
    }

    /// Base name shown in the preview, falling back to `default_name` when blank
    pub fn display_base_name<'a>(&'a self, default_name: &'a str) -> &'a str {
        let trimmed = self.file_name.trim();
        if trimmed.is_empty() {
            default_name
        } else {
            trimmed
        }
    }
}

/// Coerce a raw target size into a displayable value.
///
/// Non-finite input falls back to `default_mb`, negative input becomes zero.
pub fn sanitize_target_size(value: f64, default_mb: f64) -> f64 {
    if !value.is_finite() {
        default_mb
    } else {
        value.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_base_name_falls_back() {
        let mut form = FormState::new(10.0);
        assert_eq!(form.display_base_name("bluebeam_document"), "bluebeam_document");
        form.file_name = "  site_plan ".to_string();
        assert_eq!(form.display_base_name("bluebeam_document"), "site_plan");
    }

    #[test]
    fn test_sanitize_target_size() {
        assert_eq!(sanitize_target_size(f64::NAN, 10.0), 10.0);
        assert_eq!(sanitize_target_size(f64::INFINITY, 10.0), 10.0);
        assert_eq!(sanitize_target_size(-3.0, 10.0), 0.0);
        assert_eq!(sanitize_target_size(2048.5, 10.0), 2048.5);
    }

    #[test]
    fn test_sample_markdown_has_one_label_per_paragraph() {
        let labels: Vec<_> = SAMPLE_MARKDOWN
            .split("\n\n")
            .filter(|line| !line.trim().is_empty())
            .collect();
        assert_eq!(labels.len(), 20);
        assert_eq!(labels[0], "Electrical Box Here");
    }
}
