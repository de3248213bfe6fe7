use crate::finance::{self, FinancialStats};
use crate::i18n::{self, Language};
use crate::models::Student;

// Local, deterministic stand-in for the generative advisor. The real
// model call lives outside this crate; panels only depend on this seam.
pub fn generate_advice(
    students: &[Student],
    interest_rate: f64,
    loan_term_years: u32,
    language: Language,
) -> String {
    let stats = FinancialStats::compute(students);
    let mut lines = vec![i18n::text(language, "advisorHeadline").to_string()];

    if stats.total_students == 0 {
        lines.push("Add students on the Loans tab to get tailored advice.".to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "Tracking {} students carrying {:.0} in loans ({:.0} on average).",
        stats.total_students, stats.total_loans, stats.average_loan
    ));

    let ratio = stats.debt_to_income_ratio;
    if ratio >= 1.5 {
        lines.push(
            "Debt is heavy relative to income. Prioritize extra payments on the highest balance and pause new spending goals."
                .to_string(),
        );
    } else if ratio >= 0.8 {
        lines.push(
            "Debt and income are roughly balanced. A small extra monthly payment would shorten the payoff noticeably."
                .to_string(),
        );
    } else {
        lines.push(
            "Income comfortably covers the debt load. Consider moving spare cash into savings goals."
                .to_string(),
        );
    }

    if let Some(heaviest) = students.iter().max_by(|a, b| {
        a.total_loan
            .partial_cmp(&b.total_loan)
            .unwrap_or(std::cmp::Ordering::Equal)
    }) {
        let payment = finance::monthly_payment(heaviest.total_loan, interest_rate, loan_term_years);
        lines.push(format!(
            "{} has the largest balance ({:.0}); at {:.1}% over {} years that is {:.2}/month.",
            heaviest.name, heaviest.total_loan, interest_rate, loan_term_years, payment
        ));
    }

    if interest_rate >= 8.0 {
        lines.push("The simulated rate is high. Compare refinancing offers before extending the term.".to_string());
    }

    sanitize_advice(&lines.join("\n"), 6, 600)
}

// Keeps advisor output panel-sized regardless of what generated it.
pub fn sanitize_advice(text: &str, max_lines: usize, max_len: usize) -> String {
    let mut out = String::new();
    for (i, line) in text.lines().enumerate() {
        if i >= max_lines {
            break;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line.trim());
    }
    if out.is_empty() {
        out = text.trim().to_string();
    }
    if out.len() > max_len {
        let mut cut = max_len;
        while !out.is_char_boundary(cut) {
            cut -= 1;
        }
        out.truncate(cut);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Student> {
        vec![
            Student {
                id: "1".to_string(),
                name: "Alice Johnson".to_string(),
                major: "Computer Science".to_string(),
                monthly_salary: 4500.0,
                total_loan: 25000.0,
            },
            Student {
                id: "2".to_string(),
                name: "Bob Smith".to_string(),
                major: "Philosophy".to_string(),
                monthly_salary: 2800.0,
                total_loan: 45000.0,
            },
        ]
    }

    #[test]
    fn advice_is_deterministic() {
        let a = generate_advice(&roster(), 5.5, 10, Language::English);
        let b = generate_advice(&roster(), 5.5, 10, Language::English);
        assert_eq!(a, b);
    }

    #[test]
    fn advice_names_the_heaviest_borrower() {
        let text = generate_advice(&roster(), 5.5, 10, Language::English);
        assert!(text.contains("Bob Smith"));
        assert!(text.starts_with("Your financial outlook"));
    }

    #[test]
    fn empty_roster_gets_a_pointer_instead_of_numbers() {
        let text = generate_advice(&[], 5.5, 10, Language::English);
        assert!(text.contains("Add students"));
    }

    #[test]
    fn headline_falls_back_to_english() {
        let text = generate_advice(&roster(), 5.5, 10, Language::Hindi);
        // Hindi has no advisorHeadline entry; English fallback applies.
        assert!(text.starts_with("Your financial outlook"));
    }

    #[test]
    fn sanitize_clamps_lines_and_length() {
        let long = "a\nb\nc\nd";
        assert_eq!(sanitize_advice(long, 2, 100), "a\nb");
        assert_eq!(sanitize_advice("abcdef", 1, 3), "abc");
    }
}
