//! Transaction domain model, type and category vocabulary.
//!
//! `category` stays a free-form string: user-entered transactions carry values such as
//! `MONTHLY_FEE` or `EQUIPMENT` that round-trip unchanged. Only the categories owned by
//! match settlement and the manual match revenue path are modelled as
//! [`TransactionCategory`].

use crate::{
    model::transaction::{
        CreateTransactionDto, TransactionDto, TransactionTypeDto, UpdateTransactionDto,
        UpsertMatchRevenueDto,
    },
    server::{error::internal::InternalError, util::id::id_or_generate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Parses the stored type string.
    ///
    /// # Returns
    /// - `Some(TransactionType)` - For `INCOME` or `EXPENSE`
    /// - `None` - Any other value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl From<TransactionTypeDto> for TransactionType {
    fn from(dto: TransactionTypeDto) -> Self {
        match dto {
            TransactionTypeDto::Income => Self::Income,
            TransactionTypeDto::Expense => Self::Expense,
        }
    }
}

impl From<TransactionType> for TransactionTypeDto {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

/// Categories written by the server itself rather than by users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCategory {
    /// Field rental expense of a settled match.
    FieldRent,
    /// Share of the rent paid by monthly subscribers.
    MatchRevenueMensal,
    /// Share of the rent paid by per-match players.
    MatchRevenueAvulso,
    /// Single manual revenue row per match; superseded by settlement.
    MatchRevenue,
}

impl TransactionCategory {
    /// Categories reconciled by match settlement, in processing order.
    pub const SETTLED: [TransactionCategory; 3] = [
        Self::FieldRent,
        Self::MatchRevenueMensal,
        Self::MatchRevenueAvulso,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FieldRent => "FIELD_RENT",
            Self::MatchRevenueMensal => "MATCH_REVENUE_MENSAL",
            Self::MatchRevenueAvulso => "MATCH_REVENUE_AVULSO",
            Self::MatchRevenue => "MATCH_REVENUE",
        }
    }

    /// Deterministic id of the transaction this category derives for a match.
    pub fn derived_id(self, match_id: &str) -> String {
        match self {
            Self::FieldRent => format!("tx_field_{}", match_id),
            Self::MatchRevenueMensal => format!("tx_mensal_{}", match_id),
            Self::MatchRevenueAvulso => format!("tx_avulso_{}", match_id),
            Self::MatchRevenue => format!("tx_{}", match_id),
        }
    }

    pub fn kind(self) -> TransactionType {
        match self {
            Self::FieldRent => TransactionType::Expense,
            _ => TransactionType::Income,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub group_id: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionType,
    pub date: String,
    pub category: String,
    pub related_player_id: Option<String>,
    pub related_match_id: Option<String>,
}

impl Transaction {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Successfully converted domain model
    /// - `Err(InternalError::UnknownTransactionType)` - Stored type is not INCOME/EXPENSE
    pub fn from_entity(entity: entity::transaction::Model) -> Result<Self, InternalError> {
        let kind = TransactionType::parse(&entity.kind).ok_or_else(|| {
            InternalError::UnknownTransactionType {
                id: entity.id.clone(),
                value: entity.kind.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            group_id: entity.group_id,
            description: entity.description,
            amount: entity.amount,
            kind,
            date: entity.date,
            category: entity.category,
            related_player_id: entity.related_player_id,
            related_match_id: entity.related_match_id,
        })
    }

    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            group_id: self.group_id,
            description: self.description,
            amount: self.amount,
            r#type: self.kind.into(),
            date: self.date,
            category: self.category,
            related_player_id: self.related_player_id,
            related_match_id: self.related_match_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTransactionParams {
    pub id: String,
    pub group_id: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionType,
    pub date: String,
    pub category: String,
    pub related_player_id: Option<String>,
    pub related_match_id: Option<String>,
}

impl CreateTransactionParams {
    pub fn from_dto(dto: CreateTransactionDto) -> Self {
        Self {
            id: id_or_generate(dto.id),
            group_id: dto.group_id,
            description: dto.description,
            amount: dto.amount,
            kind: dto.r#type.into(),
            date: dto.date,
            category: dto.category,
            related_player_id: dto.related_player_id,
            related_match_id: dto.related_match_id,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionParams {
    pub group_id: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub kind: Option<TransactionType>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub related_player_id: Option<Option<String>>,
    pub related_match_id: Option<Option<String>>,
}

impl UpdateTransactionParams {
    pub fn from_dto(dto: UpdateTransactionDto) -> Self {
        Self {
            group_id: dto.group_id,
            description: dto.description,
            amount: dto.amount,
            kind: dto.r#type.map(Into::into),
            date: dto.date,
            category: dto.category,
            related_player_id: dto.related_player_id,
            related_match_id: dto.related_match_id,
        }
    }
}

/// Manual single-row revenue entry for a match.
#[derive(Debug, Clone)]
pub struct UpsertMatchRevenueParams {
    pub group_id: String,
    pub match_id: String,
    pub total_amount: f64,
    pub description: String,
    pub date: String,
}

impl UpsertMatchRevenueParams {
    pub fn from_dto(dto: UpsertMatchRevenueDto) -> Self {
        Self {
            group_id: dto.group_id,
            match_id: dto.match_id,
            total_amount: dto.total_amount,
            description: dto.description,
            date: dto.date,
        }
    }
}
