use owo_colors::{OwoColorize, Style};
use script_runner_core::ResolutionResult;

/// Styles for a report line. Without color every style is a no-op.
struct ReportStyle {
    family: Style,
    available: Style,
    unavailable: Style,
}

impl ReportStyle {
    fn new(with_color: bool) -> Self {
        if with_color {
            Self {
                family: Style::new().bold(),
                available: Style::new().green(),
                unavailable: Style::new().strikethrough().dimmed(),
            }
        } else {
            Self {
                family: Style::new(),
                available: Style::new(),
                unavailable: Style::new(),
            }
        }
    }
}

/// One line per family: the installed runtimes, then the missing ones
/// struck through. Without color the missing runtimes are parenthesised.
pub fn format_resolution(result: &ResolutionResult, with_color: bool) -> String {
    let style = ReportStyle::new(with_color);
    let mut parts = Vec::new();

    if !result.available.is_empty() {
        parts.push(result.available.join(" ").style(style.available).to_string());
    }
    if !result.unavailable.is_empty() {
        let missing = result.unavailable.join(" ");
        if with_color {
            parts.push(missing.style(style.unavailable).to_string());
        } else {
            parts.push(format!("({missing})"));
        }
    }

    format!(
        "{}: {}",
        result.family.name().style(style.family),
        parts.join(" ")
    )
}

pub fn print_resolution_details(result: &ResolutionResult, with_color: bool) {
    let style = ReportStyle::new(with_color);
    let none = || "none".to_string();

    println!("   📦 Family: {}", result.family.name().style(style.family));
    println!(
        "   ✅ Available: {}",
        if result.available.is_empty() {
            none()
        } else {
            result.available.join(" ").style(style.available).to_string()
        }
    );
    println!(
        "   ❌ Unavailable: {}",
        if result.unavailable.is_empty() {
            none()
        } else {
            result.unavailable.join(" ").style(style.unavailable).to_string()
        }
    );
    match result.preferred() {
        Some(runtime) => println!("   🎯 Preferred: {runtime}"),
        None => println!("   🎯 Preferred: none installed"),
    }
}
