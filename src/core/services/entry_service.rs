use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::EntryError;
use crate::ledger::{Category, Ledger};

/// Largest single amount the entry form accepts (10^15).
const MAX_ENTRY_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A validated entry, ready to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

/// Turns raw form input into ledger entries. The ledger accepts anything it is
/// given, so every rejection happens here before it is touched.
pub struct EntryService;

impl EntryService {
    pub fn parse(amount: &str, category: &str, description: &str) -> Result<Entry, EntryError> {
        let amount = Self::parse_amount(amount)?;
        let category = Category::from_str(category)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(EntryError::MissingDescription);
        }
        Ok(Entry {
            amount,
            category,
            description: description.to_string(),
        })
    }

    /// Parses a positive decimal amount; plain (`12.50`) and scientific
    /// (`1e3`) notation are both accepted.
    pub fn parse_amount(raw: &str) -> Result<Decimal, EntryError> {
        let trimmed = raw.trim();
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| EntryError::InvalidAmount(trimmed.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(EntryError::NonPositiveAmount(trimmed.to_string()));
        }
        if amount > MAX_ENTRY_AMOUNT {
            return Err(EntryError::AmountTooLarge(trimmed.to_string()));
        }
        Ok(amount)
    }

    /// Validates and records in one step. Nothing is recorded on error.
    pub fn submit(
        ledger: &mut Ledger,
        amount: &str,
        category: &str,
        description: &str,
    ) -> Result<Entry, EntryError> {
        let entry = Self::parse(amount, category, description).map_err(|err| {
            tracing::warn!(error = %err, "entry rejected");
            err
        })?;
        ledger.record(entry.amount, entry.category, entry.description.clone());
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn parses_well_formed_entry() {
        let entry = EntryService::parse(" 12.50 ", "paid", "  Coffee beans ").unwrap();
        assert_eq!(entry.amount, Decimal::new(1250, 2));
        assert_eq!(entry.category, Category::Paid);
        assert_eq!(entry.description, "Coffee beans");
    }

    #[test]
    fn accepts_scientific_notation() {
        assert_eq!(EntryService::parse_amount("1e3").unwrap(), Decimal::from(1000));
    }

    #[test]
    fn rejects_bad_amounts() {
        assert_eq!(
            EntryService::parse_amount("abc"),
            Err(EntryError::InvalidAmount("abc".into()))
        );
        assert_eq!(
            EntryService::parse_amount("0"),
            Err(EntryError::NonPositiveAmount("0".into()))
        );
        assert_eq!(
            EntryService::parse_amount("-5"),
            Err(EntryError::NonPositiveAmount("-5".into()))
        );
    }

    #[test]
    fn caps_amounts_at_one_quadrillion() {
        assert_eq!(MAX_ENTRY_AMOUNT, Decimal::from(1_000_000_000_000_000_i64));
        assert_eq!(
            EntryService::parse_amount("1000000000000000").unwrap(),
            MAX_ENTRY_AMOUNT
        );
        assert_eq!(
            EntryService::parse_amount("1000000000000000.01"),
            Err(EntryError::AmountTooLarge("1000000000000000.01".into()))
        );
        assert_eq!(
            EntryService::parse_amount("79228162514264337593543950335"),
            Err(EntryError::AmountTooLarge(
                "79228162514264337593543950335".into()
            ))
        );
    }

    #[test]
    fn huge_amounts_never_reach_the_ledger() {
        let mut ledger =
            Ledger::with_clock(FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        for _ in 0..2 {
            let err = EntryService::submit(
                &mut ledger,
                "79228162514264337593543950335",
                "income",
                "Lottery",
            )
            .unwrap_err();
            assert!(matches!(err, EntryError::AmountTooLarge(_)));
        }
        EntryService::submit(&mut ledger, "1", "income", "Tip").unwrap();
        assert_eq!(ledger.net_saving(), Decimal::ONE);
    }

    #[test]
    fn rejected_submission_leaves_ledger_untouched() {
        let mut ledger =
            Ledger::with_clock(FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        let err = EntryService::submit(&mut ledger, "40", "Income", "   ").unwrap_err();
        assert_eq!(err, EntryError::MissingDescription);
        assert_eq!(err.to_string(), "Description is required");
        assert!(ledger.is_empty());

        EntryService::submit(&mut ledger, "40", "Income", "Gift").unwrap();
        assert_eq!(ledger.total_income(), Decimal::from(40));
    }
}
