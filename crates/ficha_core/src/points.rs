use serde::{Deserialize, Serialize};

use crate::ability::AbilityScores;

/// Total points available to the point-buy allocation.
pub const POINT_BUDGET: i32 = 27;

/// Cost of a single base score. Scores outside the 8..=15 buy range
/// are outside the economy and price at zero: they can only appear
/// once a player hand-edits a score, and such edits are not billed.
pub fn score_cost(score: i32) -> i32 {
    match score {
        8..=13 => score - 8,
        14 => 7,
        15 => 9,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointBuyReport {
    pub spent: i32,
    /// `POINT_BUDGET - spent`. Negative when the allocation overruns
    /// the budget; whether that blocks anything is the caller's call.
    pub remaining: i32,
}

pub fn price_allocation(scores: &AbilityScores) -> PointBuyReport {
    let spent = scores.iter().map(|(_, score)| score_cost(score)).sum();
    PointBuyReport {
        spent,
        remaining: POINT_BUDGET - spent,
    }
}

#[cfg(test)]
mod tests {
    use crate::ability::AbilityScores;

    use super::{POINT_BUDGET, price_allocation, score_cost};

    #[test]
    fn per_score_costs_follow_the_nonlinear_table() {
        assert_eq!(score_cost(8), 0);
        assert_eq!(score_cost(9), 1);
        assert_eq!(score_cost(13), 5);
        assert_eq!(score_cost(14), 7);
        assert_eq!(score_cost(15), 9);
    }

    #[test]
    fn out_of_range_scores_are_not_priced() {
        assert_eq!(score_cost(7), 0);
        assert_eq!(score_cost(16), 0);
        assert_eq!(score_cost(18), 0);
        assert_eq!(score_cost(3), 0);
    }

    #[test]
    fn standard_array_spends_the_full_budget() {
        let scores = AbilityScores {
            strength: 15,
            dexterity: 14,
            constitution: 13,
            intelligence: 12,
            wisdom: 10,
            charisma: 8,
        };
        let report = price_allocation(&scores);
        assert_eq!(report.spent, 27);
        assert_eq!(report.remaining, 0);
    }

    #[test]
    fn overrun_is_reported_as_negative_remaining_not_an_error() {
        let scores = AbilityScores {
            strength: 15,
            dexterity: 15,
            constitution: 15,
            intelligence: 8,
            wisdom: 8,
            charisma: 8,
        };
        let report = price_allocation(&scores);
        assert_eq!(report.spent, 27);

        let scores = AbilityScores {
            strength: 15,
            dexterity: 15,
            constitution: 15,
            intelligence: 15,
            wisdom: 8,
            charisma: 8,
        };
        let report = price_allocation(&scores);
        assert_eq!(report.spent, 36);
        assert_eq!(report.remaining, POINT_BUDGET - 36);
        assert!(report.remaining < 0);
    }

    #[test]
    fn default_allocation_costs_twelve() {
        let report = price_allocation(&AbilityScores::default());
        assert_eq!(report.spent, 12);
        assert_eq!(report.remaining, 15);
    }
}
