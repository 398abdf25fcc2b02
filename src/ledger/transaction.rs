use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::EntryError;

/// Whether a transaction adds to or draws from net saving.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Paid,
}

impl Category {
    /// Leading sign used when listing the transaction.
    pub fn sign(&self) -> char {
        match self {
            Category::Income => '+',
            Category::Paid => '-',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Income => write!(f, "Income"),
            Category::Paid => write!(f, "Paid"),
        }
    }
}

impl FromStr for Category {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "+" => Ok(Category::Income),
            "paid" | "-" => Ok(Category::Paid),
            _ => Err(EntryError::UnknownCategory(s.trim().to_string())),
        }
    }
}

/// One recorded income or expense event. Fields are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    amount: Decimal,
    category: Category,
    description: String,
    recorded_at: NaiveDateTime,
}

impl Transaction {
    pub(crate) fn new(
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
        recorded_at: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            recorded_at,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }

    /// Contribution to net saving: positive for income, negative for paid.
    pub fn signed_amount(&self) -> Decimal {
        match self.category {
            Category::Income => self.amount,
            Category::Paid => -self.amount,
        }
    }
}
