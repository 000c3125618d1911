//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the report renderers.

use crate::models::Money;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    if s.len() >= width {
        s.to_string()
    } else {
        format!("{:>width$}", s, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.25), "5.2%");
        assert_eq!(format_percentage(42.7), "43%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
        assert_eq!(format_bar(200.0, 100.0, 4), "████");
    }

    #[test]
    fn test_format_money_colored() {
        let positive = format_money_colored(Money::from_cents(1000));
        assert!(positive.contains("$10.00"));
        assert!(positive.contains("\x1b[32m"));

        let negative = format_money_colored(Money::from_cents(-1000));
        assert!(negative.contains("-$10.00"));
        assert!(negative.contains("\x1b[31m"));

        assert_eq!(format_money_colored(Money::zero()), "$0.00");
    }

    #[test]
    fn test_right_align() {
        assert_eq!(right_align("$1.00", 8), "   $1.00");
        assert_eq!(right_align("$1234567.00", 8), "$1234567.00");
    }
}
