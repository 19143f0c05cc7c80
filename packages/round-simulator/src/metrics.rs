//! Aggregates over simulated rounds.

use std::collections::BTreeMap;

use fingerspell::Outcome;
use serde::Serialize;

use crate::simulator::RoundRecord;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SymbolStats {
    pub attempts: u32,
    pub correct: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationSummary {
    pub rounds: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub inconclusive: u32,
    pub per_symbol: BTreeMap<String, SymbolStats>,
}

impl SimulationSummary {
    pub fn from_records(records: &[RoundRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.rounds += 1;
            let stats = summary.per_symbol.entry(record.target.clone()).or_default();
            stats.attempts += 1;
            match record.outcome {
                Outcome::Correct => {
                    summary.correct += 1;
                    stats.correct += 1;
                }
                Outcome::Incorrect => summary.incorrect += 1,
                Outcome::Inconclusive => summary.inconclusive += 1,
            }
        }
        summary
    }

    /// Share of rounds evaluated as correct (0.0 when nothing was played).
    pub fn accuracy(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.rounds)
    }
}
