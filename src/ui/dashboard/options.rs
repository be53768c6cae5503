//! Dropdown option sets for the override and alert forms

/// One selectable dropdown entry. An empty `value` is the "Choose..." placeholder.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

const PLACEHOLDER: SelectOption = opt("", "Choose...");

pub const OVERRIDE_DEPARTMENTS: &[SelectOption] = &[
    PLACEHOLDER,
    opt("opd", "OPD"),
    opt("blood-lab", "Blood Test Lab"),
    opt("xray", "X-Ray Department"),
    opt("ultrasound", "Ultrasound Lab"),
];

pub const OVERRIDE_STATUSES: &[SelectOption] = &[
    PLACEHOLDER,
    opt("open", "Open"),
    opt("busy", "Busy"),
    opt("closed", "Closed"),
];

pub const ALERT_TYPES: &[SelectOption] = &[
    PLACEHOLDER,
    opt("delay", "Delay Notice"),
    opt("closure", "Closure Notice"),
    opt("custom", "Custom Message"),
];

pub const AFFECTED_DEPARTMENTS: &[SelectOption] = &[
    PLACEHOLDER,
    opt("all", "All Departments"),
    opt("opd", "OPD"),
    opt("labs", "All Labs"),
];

/// Preset alert labels offered as one-key shortcuts.
pub const QUICK_MESSAGES: &[&str] = &["Doctor Delayed", "Lab Closed", "Queue Paused", "Custom"];

/// Returns the value after (or before) `current` in `options`, wrapping around.
///
/// A value not found in the set (e.g. a quick-message label) restarts from the placeholder.
pub fn cycle(options: &[SelectOption], current: &str, forward: bool) -> &'static str {
    if options.is_empty() {
        return "";
    }
    let len = options.len();
    let next = match options.iter().position(|o| o.value == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 1 % len,
        None => len - 1,
    };
    options[next].value
}

/// Display label for `value`, falling back to the raw value.
pub fn label_for<'a>(options: &[SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
        .unwrap_or(value)
}
