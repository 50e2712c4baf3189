//! The fixed category table
//!
//! Categories are a closed set with static display metadata. Records keep
//! the raw category id string; [`Category::resolve`] maps any id, known or
//! not, onto a category so lookups never fail.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction::TransactionType;

/// Which transaction types a category may be used with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryScope {
    Income,
    Expense,
    Both,
}

impl CategoryScope {
    pub fn allows(&self, kind: TransactionType) -> bool {
        match self {
            Self::Both => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

/// Static display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Hex color used by charts
    pub color: &'static str,
    /// Icon reference for front-ends
    pub icon: &'static str,
    pub scope: CategoryScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Transport,
    Laundry,
    Beauty,
    Services,
    Housing,
    Shopping,
    Entertainment,
    Salary,
    Bonus,
    Investment,
    Other,
}

impl Category {
    /// All categories in table order
    pub const ALL: [Category; 12] = [
        Category::Food,
        Category::Transport,
        Category::Laundry,
        Category::Beauty,
        Category::Services,
        Category::Housing,
        Category::Shopping,
        Category::Entertainment,
        Category::Salary,
        Category::Bonus,
        Category::Investment,
        Category::Other,
    ];

    pub fn info(&self) -> CategoryInfo {
        use CategoryScope::*;

        let (id, name, color, icon, scope) = match self {
            Self::Food => ("food", "Food & Drink", "#10b981", "utensils", Expense),
            Self::Transport => ("transport", "Transport", "#f59e0b", "car", Expense),
            Self::Laundry => ("laundry", "Laundry", "#06b6d4", "shirt", Expense),
            Self::Beauty => ("beauty", "Beauty", "#f472b6", "sparkles", Expense),
            Self::Services => ("services", "Services", "#8b5cf6", "wifi", Expense),
            Self::Housing => ("housing", "Housing", "#0ea5e9", "home", Expense),
            Self::Shopping => ("shopping", "Shopping", "#6366f1", "shopping-bag", Expense),
            Self::Entertainment => ("entertainment", "Entertainment", "#ec4899", "gamepad", Expense),
            Self::Salary => ("salary", "Salary", "#14b8a6", "banknote", Income),
            Self::Bonus => ("bonus", "Bonus", "#f59e0b", "sparkles", Income),
            Self::Investment => ("investment", "Investment", "#8b5cf6", "trending-up", Income),
            Self::Other => ("other", "Other", "#64748b", "more-horizontal", Both),
        };

        CategoryInfo {
            id,
            name,
            color,
            icon,
            scope,
        }
    }

    pub fn id(&self) -> &'static str {
        self.info().id
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Look up a known category id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Total lookup: unknown ids resolve to [`Category::Other`]
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::Other)
    }

    /// Whether this category may be used with the given transaction type
    pub fn applies_to(&self, kind: TransactionType) -> bool {
        self.info().scope.allows(kind)
    }

    /// Category preselected for a new entry of the given type
    pub fn default_for(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Expense => Self::Food,
            TransactionType::Income => Self::Salary,
        }
    }

    /// Categories selectable for the given type, in table order
    pub fn for_type(kind: TransactionType) -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(move |c| c.applies_to(kind))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
