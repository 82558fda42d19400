use colored::*;

use revadd_common::config::Config;
use revadd_core::explore::Outcome;
use revadd_digits::DigitSeq;

use crate::terminal::colors;

/// Renders a digit sequence for display, eliding the middle of values
/// wider than `digits_shown`. A thousand iterations of reverse-and-add
/// produce hundreds of digits; nobody reads those in full.
pub fn digit_preview(value: &DigitSeq, digits_shown: usize) -> String {
    let rendered = value.to_string();
    if digits_shown == 0 || rendered.len() <= digits_shown {
        return rendered;
    }

    let head = digits_shown / 2;
    let tail = digits_shown - head;
    format!("{}…{}", &rendered[..head], &rendered[rendered.len() - tail..])
}

pub fn outcome_to_details(outcome: &Outcome, cfg: &Config) -> Vec<(String, ColoredString)> {
    match outcome {
        Outcome::Found { palindrome, steps } => vec![
            ("Result".to_string(), "converged".green().bold()),
            ("Steps".to_string(), steps.to_string().color(colors::STEPS)),
            (
                "Value".to_string(),
                digit_preview(palindrome, cfg.digits_shown).color(colors::PALINDROME),
            ),
            (
                "Width".to_string(),
                format!("{} digits", palindrome.len()).color(colors::TEXT_DEFAULT),
            ),
        ],
        Outcome::GaveUp { steps, last_value } => vec![
            ("Result".to_string(), "gave up".red().bold()),
            ("Steps".to_string(), steps.to_string().color(colors::STEPS)),
            (
                "Value".to_string(),
                digit_preview(last_value, cfg.digits_shown).color(colors::DIVERGENT),
            ),
            (
                "Width".to_string(),
                format!("{} digits", last_value.len()).color(colors::TEXT_DEFAULT),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_preview_leaves_short_values_alone() {
        let value: DigitSeq = "123454321".parse().unwrap();
        assert_eq!(digit_preview(&value, 24), "123454321");
        assert_eq!(digit_preview(&value, 9), "123454321");
    }

    #[test]
    fn test_digit_preview_elides_the_middle() {
        let value: DigitSeq = "12345678901234567890".parse().unwrap();
        assert_eq!(digit_preview(&value, 8), "1234…7890");
        assert_eq!(digit_preview(&value, 7), "123…7890");
    }

    #[test]
    fn test_digit_preview_zero_width_disables_eliding() {
        let value: DigitSeq = "12345678901234567890".parse().unwrap();
        assert_eq!(digit_preview(&value, 0), "12345678901234567890");
    }
}
