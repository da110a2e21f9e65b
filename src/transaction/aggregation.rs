//! Totals, ordering and per-month grouping of transactions.
//!
//! Every function here is pure and works on a loaded slice of transactions.

use std::collections::HashMap;

use crate::transaction::{Transaction, TransactionType};

/// The summed income and expenses of a group of transactions.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
}

impl Totals {
    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.income - self.expenses
    }

    fn add(&mut self, transaction: &Transaction) {
        match transaction.type_ {
            TransactionType::Income => self.income += transaction.amount,
            TransactionType::Expense => self.expenses += transaction.amount,
        }
    }
}

/// Sum the income and expenses of `transactions`.
pub fn totals(transactions: &[Transaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut totals, transaction| {
            totals.add(transaction);
            totals
        })
}

/// A copy of `transactions` ordered by date, newest first.
///
/// Dates are compared as strings. The sort is stable, so transactions on the
/// same date keep their stored order.
pub fn sorted_by_date_descending(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// The `YYYY-MM` prefix of a `YYYY-MM-DD` date.
///
/// Dates shorter than seven characters are used as-is.
pub fn month_key(date: &str) -> &str {
    match date.char_indices().nth(7) {
        Some((end, _)) => &date[..end],
        None => date,
    }
}

/// The transactions of a single month along with their totals.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MonthSummary {
    pub totals: Totals,
    /// The month's transactions in stored order.
    pub transactions: Vec<Transaction>,
}

/// Transactions grouped by month.
///
/// Months are kept in the order they are first seen in the input.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MonthlyReport {
    months: Vec<(String, MonthSummary)>,
}

impl MonthlyReport {
    /// Get the summary for the month `key`, e.g. "2024-01".
    pub fn get(&self, key: &str) -> Option<&MonthSummary> {
        self.months
            .iter()
            .find(|(month, _)| month == key)
            .map(|(_, summary)| summary)
    }

    /// The months in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonthSummary)> {
        self.months
            .iter()
            .map(|(month, summary)| (month.as_str(), summary))
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The months ordered by key, newest first.
    pub fn sorted_newest_first(self) -> Vec<(String, MonthSummary)> {
        let mut months = self.months;
        months.sort_by(|(a, _), (b, _)| b.cmp(a));
        months
    }
}

/// Group `transactions` by the month of their date and total each month.
pub fn monthly_report(transactions: &[Transaction]) -> MonthlyReport {
    let mut months: Vec<(String, MonthSummary)> = Vec::new();
    let mut month_positions: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        let key = month_key(&transaction.date);

        let position = match month_positions.get(key) {
            Some(&position) => position,
            None => {
                months.push((key.to_owned(), MonthSummary::default()));
                month_positions.insert(key.to_owned(), months.len() - 1);
                months.len() - 1
            }
        };

        let summary = &mut months[position].1;
        summary.totals.add(transaction);
        summary.transactions.push(transaction.clone());
    }

    MonthlyReport { months }
}

#[cfg(test)]
mod tests {
    use crate::{
        test_utils::sample_transactions,
        transaction::{
            Transaction, TransactionType,
            aggregation::{Totals, month_key, monthly_report, sorted_by_date_descending, totals},
        },
    };

    fn transaction(id: &str, date: &str, amount: f64, type_: TransactionType) -> Transaction {
        Transaction {
            id: id.to_owned(),
            date: date.to_owned(),
            description: format!("transaction {id}"),
            amount,
            type_,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            transaction("1", "2024-01-05", 100.0, TransactionType::Income),
            transaction("2", "2024-01-10", 40.0, TransactionType::Expense),
            transaction("3", "2024-02-01", 10.0, TransactionType::Expense),
        ]
    }

    #[test]
    fn totals_sum_by_type() {
        let got = totals(&sample());

        assert_eq!(
            got,
            Totals {
                income: 100.0,
                expenses: 50.0
            }
        );
        assert_eq!(got.balance(), 50.0);
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        let got = totals(&[]);

        assert_eq!(got, Totals::default());
        assert_eq!(got.balance(), 0.0);
    }

    #[test]
    fn sorts_newest_first() {
        let sorted = sorted_by_date_descending(&sample());

        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn sort_keeps_stored_order_for_equal_dates() {
        let transactions = vec![
            transaction("a", "2024-01-01", 1.0, TransactionType::Income),
            transaction("b", "2024-03-01", 1.0, TransactionType::Income),
            transaction("c", "2024-01-01", 1.0, TransactionType::Income),
            transaction("d", "2024-03-01", 1.0, TransactionType::Income),
        ];

        let sorted = sorted_by_date_descending(&transactions);

        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn sort_does_not_modify_input() {
        let transactions = sample();

        let _ = sorted_by_date_descending(&transactions);

        assert_eq!(transactions, sample());
    }

    #[test]
    fn groups_by_month() {
        let report = monthly_report(&sample());

        assert_eq!(report.len(), 2);

        let january = report.get("2024-01").unwrap();
        assert_eq!(january.totals.income, 100.0);
        assert_eq!(january.totals.expenses, 40.0);
        assert_eq!(january.transactions.len(), 2);
        assert_eq!(january.transactions[0].id, "1");
        assert_eq!(january.transactions[1].id, "2");

        let february = report.get("2024-02").unwrap();
        assert_eq!(february.totals.income, 0.0);
        assert_eq!(february.totals.expenses, 10.0);
        assert_eq!(february.transactions.len(), 1);
    }

    #[test]
    fn months_keep_first_seen_order() {
        let transactions = vec![
            transaction("1", "2024-03-02", 1.0, TransactionType::Income),
            transaction("2", "2023-12-31", 1.0, TransactionType::Expense),
            transaction("3", "2024-03-15", 1.0, TransactionType::Income),
        ];

        let report = monthly_report(&transactions);

        let months: Vec<&str> = report.iter().map(|(month, _)| month).collect();
        assert_eq!(months, vec!["2024-03", "2023-12"]);

        let sorted: Vec<String> = report
            .sorted_newest_first()
            .into_iter()
            .map(|(month, _)| month)
            .collect();
        assert_eq!(sorted, vec!["2024-03", "2023-12"]);
    }

    #[test]
    fn monthly_totals_add_up_to_overall_totals() {
        let transactions = vec![
            transaction("1", "2024-01-05", 100.25, TransactionType::Income),
            transaction("2", "2024-01-10", 40.5, TransactionType::Expense),
            transaction("3", "2024-02-01", 10.0, TransactionType::Expense),
            transaction("4", "2024-04-30", 70.0, TransactionType::Income),
            transaction("5", "2023-11-11", 3.0, TransactionType::Expense),
        ];

        let overall = totals(&transactions);
        let report = monthly_report(&transactions);

        let (income, expenses, count) =
            report
                .iter()
                .fold((0.0, 0.0, 0), |(income, expenses, count), (_, month)| {
                    (
                        income + month.totals.income,
                        expenses + month.totals.expenses,
                        count + month.transactions.len(),
                    )
                });
        assert!((income - overall.income).abs() < 1e-9);
        assert!((expenses - overall.expenses).abs() < 1e-9);
        assert_eq!(count, transactions.len());
    }

    #[test]
    fn empty_input_has_no_months() {
        assert!(monthly_report(&[]).is_empty());
    }

    #[test]
    fn month_key_handles_short_dates() {
        assert_eq!(month_key("2024-01-05"), "2024-01");
        assert_eq!(month_key("2024-1"), "2024-1");
        assert_eq!(month_key(""), "");
    }

    #[test]
    fn short_dates_group_under_their_full_text() {
        let transactions = vec![transaction("1", "2024", 5.0, TransactionType::Income)];

        let report = monthly_report(&transactions);

        assert_eq!(report.get("2024").unwrap().totals.income, 5.0);
    }

    #[test]
    fn salary_and_groceries_in_one_month() {
        let transactions = sample_transactions();

        let got = totals(&transactions);
        assert_eq!(
            got,
            Totals {
                income: 100.0,
                expenses: 40.0
            }
        );
        assert_eq!(got.balance(), 60.0);

        let ids: Vec<String> = sorted_by_date_descending(&transactions)
            .into_iter()
            .map(|transaction| transaction.id)
            .collect();
        assert_eq!(ids, vec!["2", "1"]);

        let report = monthly_report(&transactions);
        assert_eq!(report.len(), 1);
        let january = report.get("2024-01").unwrap();
        assert_eq!(
            january.totals,
            Totals {
                income: 100.0,
                expenses: 40.0
            }
        );
        assert_eq!(january.transactions, transactions);
    }
}
