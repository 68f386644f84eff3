//! Match settlement calculation.
//!
//! Pure part of settlement: given the field rate, the confirmed roster size and the
//! resolved paid players, compute the amounts of the three derived transactions. The
//! settlement service performs the lookups and the reconciliation writes.

use std::collections::HashMap;

use crate::server::model::{
    football_match::Match,
    id_set::IdSet,
    player::Player,
    transaction::{CreateTransactionParams, TransactionCategory, TransactionType},
};

/// Amounts owed for one finished match.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementPlan {
    pub hourly_rate: f64,
    /// Zero when nobody confirmed.
    pub cost_per_person: f64,
    pub mensal_count: usize,
    pub avulso_count: usize,
    pub mensal_amount: f64,
    pub avulso_amount: f64,
}

impl SettlementPlan {
    /// Splits the field rate among confirmed players and totals what each payer bucket owes.
    ///
    /// Paid ids missing from `players` count in neither bucket.
    ///
    /// # Arguments
    /// - `hourly_rate` - Rate of the match's field, 0 when the field is missing
    /// - `confirmed_count` - Size of the confirmed roster
    /// - `paid` - Ids of players marked as paid
    /// - `players` - Paid players that could be resolved, keyed by id
    pub fn compute(
        hourly_rate: f64,
        confirmed_count: usize,
        paid: &IdSet,
        players: &HashMap<String, Player>,
    ) -> Self {
        let cost_per_person = if confirmed_count == 0 {
            0.0
        } else {
            hourly_rate / confirmed_count as f64
        };

        let (mensal_count, avulso_count) = paid
            .iter()
            .filter_map(|id| players.get(id))
            .fold((0, 0), |(mensal, avulso), player| {
                if player.is_monthly_subscriber {
                    (mensal + 1, avulso)
                } else {
                    (mensal, avulso + 1)
                }
            });

        Self {
            hourly_rate,
            cost_per_person,
            mensal_count,
            avulso_count,
            mensal_amount: mensal_count as f64 * cost_per_person,
            avulso_amount: avulso_count as f64 * cost_per_person,
        }
    }

    pub fn amount_for(&self, category: TransactionCategory) -> f64 {
        match category {
            TransactionCategory::FieldRent => self.hourly_rate,
            TransactionCategory::MatchRevenueMensal => self.mensal_amount,
            TransactionCategory::MatchRevenueAvulso => self.avulso_amount,
            TransactionCategory::MatchRevenue => 0.0,
        }
    }

    /// Target state of every settled category for `game`.
    ///
    /// # Arguments
    /// - `game` - The finished match
    /// - `field_name` - Name of the match's field, empty when the field is missing
    pub fn derived_transactions(&self, game: &Match, field_name: &str) -> Vec<DerivedTransaction> {
        TransactionCategory::SETTLED
            .into_iter()
            .map(|category| {
                let description = match category {
                    TransactionCategory::FieldRent => format!("Aluguel Campo - {}", field_name),
                    TransactionCategory::MatchRevenueMensal => {
                        format!("Mensalistas - {}", game.date)
                    }
                    _ => format!("Avulsos - {}", game.date),
                };

                DerivedTransaction {
                    id: category.derived_id(&game.id),
                    category,
                    kind: category.kind(),
                    group_id: game.group_id.clone(),
                    match_id: game.id.clone(),
                    description,
                    amount: self.amount_for(category),
                    date: game.date.clone(),
                }
            })
            .collect()
    }
}

/// Desired state of one derived transaction.
///
/// The row should exist iff `amount > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTransaction {
    pub id: String,
    pub category: TransactionCategory,
    pub kind: TransactionType,
    pub group_id: String,
    pub match_id: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
}

impl DerivedTransaction {
    pub fn should_exist(&self) -> bool {
        self.amount > 0.0
    }

    pub fn into_create_params(self) -> CreateTransactionParams {
        CreateTransactionParams {
            id: self.id,
            group_id: self.group_id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            category: self.category.as_str().to_string(),
            related_player_id: None,
            related_match_id: Some(self.match_id),
        }
    }
}

/// What reconciliation did to one derived transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum SettlementAction {
    Created,
    Updated,
    Deleted,
    Unchanged,
    /// The write failed; holds the error message.
    Failed(String),
}

/// Per-category outcome of settling one match.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementReport {
    pub match_id: String,
    /// Manual MATCH_REVENUE rows removed for the match.
    pub legacy_removed: u64,
    /// Set when legacy cleanup failed; no category is reconciled in that case.
    pub legacy_error: Option<String>,
    pub outcomes: Vec<(TransactionCategory, SettlementAction)>,
}

impl SettlementReport {
    pub fn new(match_id: impl Into<String>) -> Self {
        Self {
            match_id: match_id.into(),
            legacy_removed: 0,
            legacy_error: None,
            outcomes: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn action_for(&self, category: TransactionCategory) -> Option<&SettlementAction> {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, action)| action)
    }

    pub fn has_failures(&self) -> bool {
        self.legacy_error.is_some()
            || self
                .outcomes
                .iter()
                .any(|(_, action)| matches!(action, SettlementAction::Failed(_)))
    }
}
