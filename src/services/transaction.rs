//! Transaction service
//!
//! Creation (typed, parsed from a quick-entry line, in bulk, or from a
//! shortcut), edits, deletion and listing. Every mutation is validated
//! before anything is touched, written back to storage, and only then
//! published as an event.

use chrono::{DateTime, FixedOffset, Local, Weekday};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventBus, LedgerEvent};
use crate::models::{Category, Money, Shortcut, Transaction, TransactionType};
use crate::parser::LineParser;
use crate::reports::{filter_transactions, TimeFilter};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    events: &'a EventBus,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: Money,
    pub kind: TransactionType,
    /// Defaults to the type's default category
    pub category: Option<String>,
    /// Defaults to now
    pub date: Option<DateTime<FixedOffset>>,
    pub note: String,
}

impl CreateTransactionInput {
    pub fn new(amount: Money, kind: TransactionType) -> Self {
        Self {
            amount,
            kind,
            category: None,
            date: None,
            note: String::new(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Partial edit; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct TransactionEdit {
    pub note: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub kind: Option<TransactionType>,
}

impl TransactionEdit {
    pub fn is_empty(&self) -> bool {
        self.note.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.kind.is_none()
    }
}

/// Result of a bulk entry
#[derive(Debug, Clone, Default)]
pub struct BulkOutcome {
    /// Created transactions in input order
    pub created: Vec<Transaction>,
    /// Non-blank lines without an amount
    pub skipped: usize,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage, events: &'a EventBus) -> Self {
        Self { storage, events }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let txn = self.build(input)?;

        self.storage.transactions.insert_front(txn.clone())?;
        self.storage.transactions.save()?;
        debug!(id = %txn.id, amount = %txn.amount, "transaction created");

        self.events.publish(LedgerEvent::TransactionCreated(txn.clone()));
        Ok(txn)
    }

    /// Create a transaction from a quick-entry line such as `"Cơm trưa. 35k"`.
    ///
    /// `current` is the caller's selected category, kept when no keyword
    /// matches. A line without an amount is rejected.
    pub fn create_from_line(
        &self,
        parser: &LineParser,
        line: &str,
        kind: TransactionType,
        current: Option<Category>,
        date: Option<DateTime<FixedOffset>>,
    ) -> LedgerResult<Transaction> {
        let parsed = parser.parse(line, kind);
        if !parsed.has_amount() {
            return Err(LedgerError::Validation(format!(
                "No amount found in '{}'",
                line.trim()
            )));
        }

        let category = parsed.category_or(current.unwrap_or_else(|| Category::default_for(kind)));
        let mut input = CreateTransactionInput::new(parsed.amount, kind)
            .category(category.id())
            .note(parsed.note);
        input.date = date;

        self.create(input)
    }

    /// Create one transaction per line that carries an amount.
    ///
    /// Lines without an amount are skipped, not reported as errors. The
    /// whole block is written back once.
    pub fn create_bulk(
        &self,
        parser: &LineParser,
        text: &str,
        kind: TransactionType,
        current: Option<Category>,
    ) -> LedgerResult<BulkOutcome> {
        let bulk = parser.parse_bulk(text, kind);
        let fallback = current.unwrap_or_else(|| Category::default_for(kind));
        let now = Local::now().fixed_offset();

        let created = bulk
            .drafts
            .into_iter()
            .map(|draft| {
                let category = draft.category_or(fallback);
                self.build(
                    CreateTransactionInput::new(draft.amount, kind)
                        .category(category.id())
                        .date(now)
                        .note(draft.note),
                )
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        if !created.is_empty() {
            self.storage.transactions.insert_many_front(created.clone())?;
            self.storage.transactions.save()?;
        }
        info!(created = created.len(), skipped = bulk.skipped, "bulk entry");

        for txn in &created {
            self.events.publish(LedgerEvent::TransactionCreated(txn.clone()));
        }

        Ok(BulkOutcome {
            created,
            skipped: bulk.skipped,
        })
    }

    /// Record a shortcut, dated `at` (now by default), with its name as note
    pub fn create_from_shortcut(
        &self,
        shortcut: &Shortcut,
        at: Option<DateTime<FixedOffset>>,
    ) -> LedgerResult<Transaction> {
        let txn = shortcut.instantiate(at.unwrap_or_else(|| Local::now().fixed_offset()));
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.transactions.insert_front(txn.clone())?;
        self.storage.transactions.save()?;
        debug!(id = %txn.id, shortcut = %shortcut.id, "transaction created from shortcut");

        self.events.publish(LedgerEvent::TransactionCreated(txn.clone()));
        Ok(txn)
    }

    /// Replace a stored transaction with `txn` (matched by id)
    pub fn update(&self, txn: Transaction) -> LedgerResult<Transaction> {
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let before = self
            .storage
            .transactions
            .replace(txn.clone())?
            .ok_or_else(|| LedgerError::transaction_not_found(txn.id.to_string()))?;
        self.storage.transactions.save()?;
        debug!(id = %txn.id, "transaction updated");

        self.events.publish(LedgerEvent::TransactionUpdated {
            before,
            after: txn.clone(),
        });
        Ok(txn)
    }

    /// Apply a partial edit to the transaction matching `identifier`
    pub fn edit(&self, identifier: &str, edit: TransactionEdit) -> LedgerResult<Transaction> {
        let mut txn = self
            .find(identifier)?
            .ok_or_else(|| LedgerError::transaction_not_found(identifier))?;

        let retyped = edit.kind.is_some() || edit.category.is_some();
        if let Some(kind) = edit.kind {
            txn.kind = kind;
        }
        if let Some(category) = edit.category {
            txn.category = category;
        }
        if retyped {
            check_category(&txn.category, txn.kind)?;
        }
        if let Some(amount) = edit.amount {
            txn.amount = amount;
        }
        if let Some(note) = edit.note {
            txn.note = note.trim().to_string();
        }
        if let Some(date) = edit.date {
            txn.date = date;
        }

        self.update(txn)
    }

    /// Delete the transaction matching `identifier`
    pub fn delete(&self, identifier: &str) -> LedgerResult<Transaction> {
        let txn = self
            .find(identifier)?
            .ok_or_else(|| LedgerError::transaction_not_found(identifier))?;

        self.storage.transactions.remove(&txn.id)?;
        self.storage.transactions.save()?;
        debug!(id = %txn.id, "transaction deleted");

        self.events.publish(LedgerEvent::TransactionDeleted(txn.clone()));
        Ok(txn)
    }

    /// Delete every transaction; returns how many were removed
    pub fn clear(&self) -> LedgerResult<usize> {
        let count = self.storage.clear_transactions()?;
        info!(count, "transactions cleared");

        self.events.publish(LedgerEvent::TransactionsCleared { count });
        Ok(count)
    }

    /// Transactions inside `filter`, newest entry first
    pub fn list(
        &self,
        filter: &TimeFilter,
        now: &DateTime<FixedOffset>,
        week_start: Weekday,
    ) -> LedgerResult<Vec<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        Ok(filter_transactions(&all, filter, now, week_start))
    }

    pub fn get_all(&self) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Find by full id or unique id prefix
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Transaction>> {
        self.storage.transactions.find(identifier.trim())
    }

    fn build(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let category = input
            .category
            .unwrap_or_else(|| Category::default_for(input.kind).id().to_string());
        check_category(&category, input.kind)?;

        let txn = Transaction::new(
            input.amount,
            input.kind,
            category,
            input.date.unwrap_or_else(|| Local::now().fixed_offset()),
            input.note.trim(),
        );
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        Ok(txn)
    }
}

/// The category must exist and apply to the transaction type
fn check_category(id: &str, kind: TransactionType) -> LedgerResult<()> {
    let category = Category::from_id(id).ok_or_else(|| LedgerError::category_not_found(id))?;
    if !category.applies_to(kind) {
        return Err(LedgerError::Validation(format!(
            "Category '{}' cannot be used for {}",
            id, kind
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{daily_food_stats, totals};
    use chrono::NaiveDate;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn setup() -> (Storage, EventBus) {
        (Storage::in_memory(), EventBus::disabled())
    }

    #[test]
    fn test_create_defaults_category_and_inserts_at_head() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);

        let first = service
            .create(CreateTransactionInput::new(Money::from_major(10_000), TransactionType::Expense))
            .unwrap();
        let second = service
            .create(
                CreateTransactionInput::new(Money::from_major(500_000), TransactionType::Income)
                    .note("  Thưởng  "),
            )
            .unwrap();

        assert_eq!(first.category, "food");
        assert_eq!(second.category, "salary");
        assert_eq!(second.note, "Thưởng");

        let all = service.get_all().unwrap();
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[test]
    fn test_rejected_input_leaves_list_untouched() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);

        let zero = service.create(CreateTransactionInput::new(Money::zero(), TransactionType::Expense));
        assert!(zero.unwrap_err().is_validation());

        let unknown = service.create(
            CreateTransactionInput::new(Money::from_major(1), TransactionType::Expense).category("pets"),
        );
        assert!(unknown.unwrap_err().is_not_found());

        let mismatch = service.create(
            CreateTransactionInput::new(Money::from_major(1), TransactionType::Expense).category("salary"),
        );
        assert!(mismatch.unwrap_err().is_validation());

        assert!(service.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_from_line() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        let parser = LineParser::new('.');

        let txn = service
            .create_from_line(&parser, "Cơm trưa. 35k", TransactionType::Expense, None, None)
            .unwrap();
        assert_eq!(txn.note, "Cơm trưa");
        assert_eq!(txn.amount, Money::from_major(35_000));
        assert_eq!(txn.category, "food");

        let kept = service
            .create_from_line(&parser, "xyz. 10k", TransactionType::Expense, Some(Category::Shopping), None)
            .unwrap();
        assert_eq!(kept.category, "shopping");

        let err = service
            .create_from_line(&parser, "Cơm trưa", TransactionType::Expense, None, None)
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get_all().unwrap().len(), 2);
    }

    #[test]
    fn test_bulk_skips_and_keeps_order() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        let parser = LineParser::new('.');

        let outcome = service
            .create_bulk(&parser, "Phở. 45k\nghi chú\nGrab. 30k\n\n", TransactionType::Expense, None)
            .unwrap();

        assert_eq!(outcome.created.len(), 2);
        assert_eq!(outcome.skipped, 1);

        let all = service.get_all().unwrap();
        assert_eq!(all[0].note, "Phở");
        assert_eq!(all[1].category, "transport");
    }

    #[test]
    fn test_bulk_of_nothing_writes_nothing() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);

        let outcome = service
            .create_bulk(&LineParser::default(), "no amounts here", TransactionType::Expense, None)
            .unwrap();
        assert!(outcome.created.is_empty());
        assert_eq!(storage.store().get("transactions").unwrap(), None);
    }

    #[test]
    fn test_shortcut_round_trip() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        let shortcut = Shortcut::defaults().remove(0);

        let txn = service
            .create_from_shortcut(&shortcut, Some(at("2025-04-10T07:30:00+07:00")))
            .unwrap();
        assert_eq!(txn.note, "Cafe sáng");

        let t = totals(&service.get_all().unwrap());
        assert_eq!(t.expense, shortcut.amount);
        assert_eq!(t.income, Money::zero());
    }

    #[test]
    fn test_edit_and_update() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        let txn = service
            .create(CreateTransactionInput::new(Money::from_major(20_000), TransactionType::Expense).note("Cafe"))
            .unwrap();

        let edited = service
            .edit(
                txn.id.short(),
                TransactionEdit {
                    amount: Some(Money::from_major(25_000)),
                    category: Some("entertainment".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edited.id, txn.id);
        assert_eq!(edited.amount, Money::from_major(25_000));
        assert_eq!(edited.note, "Cafe");

        let bad = service.edit(
            txn.id.as_str(),
            TransactionEdit {
                amount: Some(Money::zero()),
                ..Default::default()
            },
        );
        assert!(bad.is_err());
        assert_eq!(service.get_all().unwrap()[0].amount, Money::from_major(25_000));

        let mut missing = txn.clone();
        missing.id = "nope".into();
        assert!(service.update(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_type_change_must_fit_category() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        let txn = service
            .create(CreateTransactionInput::new(Money::from_major(50_000), TransactionType::Expense))
            .unwrap();
        assert_eq!(txn.category, "food");

        let result = service.edit(
            txn.id.as_str(),
            TransactionEdit {
                kind: Some(TransactionType::Income),
                ..Default::default()
            },
        );
        assert!(result.unwrap_err().is_validation());

        let stored = &service.get_all().unwrap()[0];
        assert_eq!(stored.kind, TransactionType::Expense);
        assert_eq!(stored.category, "food");

        let retyped = service
            .edit(
                txn.id.as_str(),
                TransactionEdit {
                    kind: Some(TransactionType::Income),
                    category: Some("bonus".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(retyped.kind, TransactionType::Income);
        assert_eq!(retyped.category, "bonus");
    }

    #[test]
    fn test_note_edit_keeps_unknown_category() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        let mut legacy = Transaction::now(Money::from_major(10), TransactionType::Expense, "pets", "");
        legacy.id = "legacy-1".into();
        storage.transactions.insert_front(legacy).unwrap();

        let edited = service
            .edit(
                "legacy-1",
                TransactionEdit {
                    note: Some("Hạt cho mèo".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edited.category, "pets");
        assert_eq!(edited.note, "Hạt cho mèo");
    }

    #[test]
    fn test_delete_and_clear() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        let a = service
            .create(CreateTransactionInput::new(Money::from_major(1), TransactionType::Expense))
            .unwrap();
        service
            .create(CreateTransactionInput::new(Money::from_major(2), TransactionType::Expense))
            .unwrap();

        service.delete(a.id.as_str()).unwrap();
        assert!(service.delete(a.id.as_str()).unwrap_err().is_not_found());
        assert_eq!(service.clear().unwrap(), 1);
        assert!(service.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_applies_filter() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        for date in ["2025-04-15T09:00:00+07:00", "2025-02-01T09:00:00+07:00"] {
            service
                .create(CreateTransactionInput::new(Money::from_major(1), TransactionType::Expense).date(at(date)))
                .unwrap();
        }

        let now = at("2025-04-16T10:00:00+07:00");
        assert_eq!(service.list(&TimeFilter::Month, &now, Weekday::Sun).unwrap().len(), 1);
        assert_eq!(service.list(&TimeFilter::All, &now, Weekday::Sun).unwrap().len(), 2);
    }

    #[test]
    fn test_end_to_end_food_day() {
        let (storage, events) = setup();
        let service = TransactionService::new(&storage, &events);
        let day = "2025-04-10T";

        for (amount, kind, hour) in [
            (50_000, TransactionType::Expense, "08"),
            (30_000, TransactionType::Expense, "12"),
            (1_000_000, TransactionType::Income, "09"),
        ] {
            service
                .create(
                    CreateTransactionInput::new(Money::from_major(amount), kind)
                        .date(at(&format!("{}{}:00:00+07:00", day, hour))),
                )
                .unwrap();
        }

        let all = service.get_all().unwrap();
        let t = totals(&all);
        assert_eq!(t.balance, Money::from_major(920_000));

        let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let stats = daily_food_stats(&all, Money::from_major(100_000), today);
        assert_eq!(stats.remaining, Money::from_major(20_000));
        assert_eq!(stats.percentage, 80.0);
    }
}
