//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Join a combination's words for display, with its letter total
#[must_use]
pub fn format_combination(combination: &[String]) -> String {
    let letters: usize = combination.iter().map(String::len).sum();
    format!("{} ({letters})", combination.join(" + ").to_uppercase())
}

/// Lay words out in fixed-width columns
#[must_use]
pub fn columns(words: &[String], per_row: usize) -> Vec<String> {
    let width = words.iter().map(String::len).max().unwrap_or(0) + 2;
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<width$}", w.to_uppercase()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn combination_formatting() {
        let combination = vec!["at".to_string(), "he".to_string()];
        assert_eq!(format_combination(&combination), "AT + HE (4)");
    }

    #[test]
    fn columns_pad_words() {
        let words: Vec<String> = ["heat", "at", "he"].iter().map(ToString::to_string).collect();
        assert_eq!(columns(&words, 2), vec!["HEAT  AT", "HE"]);
    }
}
