//! Economy ledger: money, lives and score for the running session.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use serde::{Deserialize, Serialize};

use rampart_core::config::RulesConfig;
use rampart_core::enums::EnemyStatus;
use rampart_core::errors::PlacementError;

/// Running totals for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Never driven below zero by spending.
    pub money: i64,
    pub lives: i32,
    /// Sum of rewards for every defeated enemy.
    pub score: i64,
}

/// Result of reconciling one enemy that left the Alive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    Defeated { reward: i64 },
    Escaped { lives_left: i32 },
    /// The enemy was still alive; nothing changed.
    Ignored,
}

impl Ledger {
    pub fn new(rules: &RulesConfig) -> Self {
        Self {
            money: rules.starting_money,
            lives: rules.starting_lives,
            score: 0,
        }
    }

    /// Fail with `InsufficientFunds` unless `cost` is affordable.
    pub fn check_funds(&self, cost: i64) -> Result<(), PlacementError> {
        if self.money < cost {
            return Err(PlacementError::InsufficientFunds {
                cost,
                available: self.money,
            });
        }
        Ok(())
    }

    /// Deduct `cost`, leaving money untouched when it is not affordable.
    pub fn spend(&mut self, cost: i64) -> Result<(), PlacementError> {
        self.check_funds(cost)?;
        self.money -= cost;
        Ok(())
    }

    /// Settle one enemy transition away from Alive.
    pub fn reconcile(&mut self, status: EnemyStatus, reward: i64) -> Reconciled {
        match status {
            EnemyStatus::Defeated => {
                self.money = self.money.saturating_add(reward);
                self.score = self.score.saturating_add(reward);
                Reconciled::Defeated { reward }
            }
            EnemyStatus::Escaped => {
                self.lives -= 1;
                Reconciled::Escaped {
                    lives_left: self.lives,
                }
            }
            EnemyStatus::Alive => Reconciled::Ignored,
        }
    }

    /// True once every life is gone.
    pub fn is_depleted(&self) -> bool {
        self.lives <= 0
    }
}
