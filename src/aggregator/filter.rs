//! Month selection and matching.
//!
//! For aggregation, `Unselected` matches nothing: the chart and the totals
//! stay empty until a month is chosen. Listing views that want "all months"
//! use [`MonthFilter::allows`] instead.

use crate::parser::Transaction;
use chrono::Month;
use std::fmt;
use std::str::FromStr;

/// The month the user picked, or none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    Unselected,
    Selected(Month),
}

impl MonthFilter {
    /// Build from a calendar month number (1-12)
    pub fn from_number(number: u32) -> Option<Self> {
        if !(1..=12).contains(&number) {
            return None;
        }

        Month::try_from(number as u8).ok().map(Self::Selected)
    }

    pub fn month(&self) -> Option<Month> {
        match self {
            Self::Unselected => None,
            Self::Selected(month) => Some(*month),
        }
    }

    pub fn number(&self) -> Option<u32> {
        self.month().map(|month| month.number_from_month())
    }

    /// Aggregation rule: an unselected filter matches nothing
    pub fn matches(&self, sale_month: u32) -> bool {
        self.number() == Some(sale_month)
    }

    pub fn matches_transaction(&self, transaction: &Transaction) -> bool {
        self.matches(transaction.sale_month())
    }

    /// Listing rule: an unselected filter lets everything through
    pub fn allows(&self, transaction: &Transaction) -> bool {
        match self {
            Self::Unselected => true,
            Self::Selected(_) => self.matches_transaction(transaction),
        }
    }

    /// Full English month name, if selected
    pub fn name(&self) -> Option<&'static str> {
        self.month().map(|month| month.name())
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(number) => write!(f, "Month {}", number),
            None => write!(f, "Select a month"),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = String;

    /// Accepts `3`, `03`, `March`, `mar`; `none` or an empty string clears the selection
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::Unselected);
        }

        if let Ok(number) = s.parse::<u32>() {
            return Self::from_number(number)
                .ok_or_else(|| format!("month must be between 1 and 12, got {}", number));
        }

        s.parse::<Month>()
            .map(Self::Selected)
            .map_err(|_| format!("unknown month: {}", s))
    }
}
