use crate::models::{Expense, SavingsGoal, Student};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialStats {
    pub total_students: usize,
    pub average_salary: f64,
    pub total_loans: f64,
    pub average_loan: f64,
    pub debt_to_income_ratio: f64,
}

impl FinancialStats {
    pub fn compute(students: &[Student]) -> Self {
        if students.is_empty() {
            return Self {
                total_students: 0,
                average_salary: 0.0,
                total_loans: 0.0,
                average_loan: 0.0,
                debt_to_income_ratio: 0.0,
            };
        }

        let count = students.len() as f64;
        let total_salary: f64 = students.iter().map(|s| s.monthly_salary).sum();
        let total_loans: f64 = students.iter().map(|s| s.total_loan).sum();
        let annual_income = total_salary * 12.0;

        Self {
            total_students: students.len(),
            average_salary: total_salary / count,
            total_loans,
            average_loan: total_loans / count,
            debt_to_income_ratio: if annual_income > 0.0 {
                total_loans / annual_income
            } else {
                0.0
            },
        }
    }
}

pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let months = years * 12;
    if principal <= 0.0 {
        return 0.0;
    }
    if months == 0 {
        return principal;
    }
    let rate = annual_rate_pct / 100.0 / 12.0;
    if rate <= 0.0 {
        return principal / months as f64;
    }
    let factor = (1.0 + rate).powi(months as i32);
    principal * rate * factor / (factor - 1.0)
}

pub fn total_interest(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let paid = monthly_payment(principal, annual_rate_pct, years) * (years * 12) as f64;
    (paid - principal).max(0.0)
}

pub fn daily_interest_cost(balance: f64, annual_rate_pct: f64) -> f64 {
    if balance <= 0.0 {
        return 0.0;
    }
    balance * annual_rate_pct / 100.0 / 365.0
}

#[derive(Debug, Clone, Copy)]
pub struct PayoffRow {
    pub month: u32,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

pub fn payoff_schedule(principal: f64, annual_rate_pct: f64, years: u32) -> Vec<PayoffRow> {
    let months = years * 12;
    let payment = monthly_payment(principal, annual_rate_pct, years);
    let rate = annual_rate_pct / 100.0 / 12.0;

    let mut rows = Vec::new();
    let mut balance = principal;
    for month in 1..=months {
        if balance <= 0.0 {
            break;
        }
        let interest = balance * rate;
        let toward_principal = (payment - interest).min(balance);
        balance -= toward_principal;
        rows.push(PayoffRow {
            month,
            interest,
            principal: toward_principal,
            balance: balance.max(0.0),
        });
    }
    rows
}

pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

// Aggregates in first-seen category order.
pub fn expenses_by_category(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = Vec::new();
    for e in expenses {
        match out.iter_mut().find(|(cat, _)| *cat == e.category) {
            Some((_, sum)) => *sum += e.amount,
            None => out.push((e.category.clone(), e.amount)),
        }
    }
    out
}

// Display fraction only; the stored amount may legitimately exceed the target.
pub fn goal_progress(goal: &SavingsGoal) -> f32 {
    if goal.target_amount <= 0.0 {
        return 0.0;
    }
    (goal.current_amount / goal.target_amount).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, salary: f64, loan: f64) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {id}"),
            major: "General".to_string(),
            monthly_salary: salary,
            total_loan: loan,
        }
    }

    #[test]
    fn stats_on_empty_roster_are_zero() {
        let stats = FinancialStats::compute(&[]);
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.average_salary, 0.0);
        assert_eq!(stats.total_loans, 0.0);
        assert_eq!(stats.average_loan, 0.0);
        assert_eq!(stats.debt_to_income_ratio, 0.0);
    }

    #[test]
    fn stats_average_and_ratio() {
        let roster = [student("1", 4500.0, 25000.0), student("2", 2800.0, 45000.0)];
        let stats = FinancialStats::compute(&roster);
        assert_eq!(stats.total_students, 2);
        assert!((stats.average_salary - 3650.0).abs() < 1e-9);
        assert!((stats.total_loans - 70000.0).abs() < 1e-9);
        assert!((stats.average_loan - 35000.0).abs() < 1e-9);
        // 70000 over (7300 * 12) annual income
        assert!((stats.debt_to_income_ratio - 70000.0 / 87600.0).abs() < 1e-9);
    }

    #[test]
    fn stats_zero_income_has_no_nan() {
        let roster = [student("1", 0.0, 10000.0)];
        let stats = FinancialStats::compute(&roster);
        assert_eq!(stats.debt_to_income_ratio, 0.0);
    }

    #[test]
    fn payment_matches_annuity_formula() {
        // 25000 at 5.5% over 10 years is about 271.32/month.
        let p = monthly_payment(25000.0, 5.5, 10);
        assert!((p - 271.32).abs() < 0.01, "got {p}");
    }

    #[test]
    fn payment_zero_rate_is_simple_division() {
        let p = monthly_payment(12000.0, 0.0, 10);
        assert!((p - 100.0).abs() < 1e-9);
    }

    #[test]
    fn payment_degenerate_inputs() {
        assert_eq!(monthly_payment(0.0, 5.5, 10), 0.0);
        assert_eq!(monthly_payment(5000.0, 5.5, 0), 5000.0);
    }

    #[test]
    fn positive_rate_costs_more_than_principal() {
        let paid = monthly_payment(25000.0, 5.5, 10) * 120.0;
        assert!(paid > 25000.0);
        assert!(total_interest(25000.0, 5.5, 10) > 0.0);
    }

    #[test]
    fn schedule_amortizes_to_zero() {
        let rows = payoff_schedule(25000.0, 5.5, 10);
        assert_eq!(rows.len(), 120);
        assert_eq!(rows.first().map(|r| r.month), Some(1));
        let last = rows.last().expect("schedule has rows");
        assert!(last.balance.abs() < 0.01, "ending balance {}", last.balance);
        // Balances only go down.
        for pair in rows.windows(2) {
            assert!(pair[1].balance <= pair[0].balance + 1e-9);
        }
    }

    #[test]
    fn daily_cost_scales_with_balance() {
        assert_eq!(daily_interest_cost(0.0, 5.5), 0.0);
        let cost = daily_interest_cost(36500.0, 5.0);
        assert!((cost - 5.0).abs() < 1e-9);
    }

    #[test]
    fn category_totals_keep_first_seen_order() {
        let e = |cat: &str, amount: f64| Expense {
            id: String::new(),
            category: cat.to_string(),
            name: String::new(),
            amount,
        };
        let totals = expenses_by_category(&[e("Rent", 800.0), e("Food", 120.0), e("Rent", 50.0)]);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].0, "Rent");
        assert!((totals[0].1 - 850.0).abs() < 1e-9);
        assert_eq!(totals[1].0, "Food");
    }

    #[test]
    fn goal_progress_clamps_display_only() {
        let goal = SavingsGoal {
            id: String::new(),
            title: String::new(),
            target_amount: 100.0,
            current_amount: 250.0,
            color: String::new(),
        };
        assert_eq!(goal_progress(&goal), 1.0);
        assert_eq!(goal.current_amount, 250.0);
    }
}
