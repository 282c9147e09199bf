use crate::models::prediction::{PredictedOutcome, Prediction, PredictionStatus};

/// Points for guessing both final scores exactly.
pub const EXACT_SCORE_POINTS: i32 = 20;
/// Points for guessing only the outcome (win/draw/win).
pub const CORRECT_OUTCOME_POINTS: i32 = 10;

/// What a single prediction earned when its match was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsAward {
    pub points: i32,
    pub tier: AwardTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardTier {
    ExactScore,
    CorrectOutcome,
    Miss,
}

impl PointsAward {
    pub fn status(&self) -> PredictionStatus {
        if self.points > 0 {
            PredictionStatus::Correct
        } else {
            PredictionStatus::Incorrect
        }
    }
}

/// Outcome implied by a final score.
pub fn actual_outcome(home_score: i32, away_score: i32) -> PredictedOutcome {
    if home_score > away_score {
        PredictedOutcome::HomeWin
    } else if away_score > home_score {
        PredictedOutcome::AwayWin
    } else {
        PredictedOutcome::Draw
    }
}

/// Score one prediction against the final result. Tiers are exclusive: an
/// exact score guess never also earns the outcome tier.
pub fn score_prediction(prediction: &Prediction, home_score: i32, away_score: i32) -> PointsAward {
    let exact = prediction.predicted_home_score == Some(home_score)
        && prediction.predicted_away_score == Some(away_score);
    if exact {
        return PointsAward {
            points: EXACT_SCORE_POINTS,
            tier: AwardTier::ExactScore,
        };
    }

    if prediction.predicted_outcome == Some(actual_outcome(home_score, away_score)) {
        return PointsAward {
            points: CORRECT_OUTCOME_POINTS,
            tier: AwardTier::CorrectOutcome,
        };
    }

    PointsAward {
        points: 0,
        tier: AwardTier::Miss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn prediction(
        outcome: Option<PredictedOutcome>,
        home: Option<i32>,
        away: Option<i32>,
    ) -> Prediction {
        Prediction {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            match_id: Uuid::new_v4(),
            predicted_outcome: outcome,
            predicted_home_score: home,
            predicted_away_score: away,
            predicted_card_over_under: None,
            points_awarded: 0,
            status: PredictionStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn outcome_from_final_score() {
        assert_eq!(actual_outcome(2, 1), PredictedOutcome::HomeWin);
        assert_eq!(actual_outcome(0, 3), PredictedOutcome::AwayWin);
        assert_eq!(actual_outcome(1, 1), PredictedOutcome::Draw);
    }

    #[test]
    fn exact_score_takes_the_top_tier() {
        // User A in the 2-1 scenario: outcome and exact score both right
        let p = prediction(Some(PredictedOutcome::HomeWin), Some(2), Some(1));
        let award = score_prediction(&p, 2, 1);
        assert_eq!(award.points, EXACT_SCORE_POINTS);
        assert_eq!(award.tier, AwardTier::ExactScore);
        assert_eq!(award.status(), PredictionStatus::Correct);
    }

    #[test]
    fn correct_outcome_alone_earns_the_second_tier() {
        // User B: right winner, wrong score
        let p = prediction(Some(PredictedOutcome::HomeWin), Some(1), Some(0));
        let award = score_prediction(&p, 2, 1);
        assert_eq!(award.points, CORRECT_OUTCOME_POINTS);
        assert_eq!(award.tier, AwardTier::CorrectOutcome);
    }

    #[test]
    fn wrong_outcome_earns_nothing() {
        // User C: predicted a draw in a 2-1
        let p = prediction(Some(PredictedOutcome::Draw), None, None);
        let award = score_prediction(&p, 2, 1);
        assert_eq!(award.points, 0);
        assert_eq!(award.tier, AwardTier::Miss);
        assert_eq!(award.status(), PredictionStatus::Incorrect);
    }

    #[test]
    fn exact_score_without_outcome_guess_still_scores() {
        let p = prediction(None, Some(0), Some(0));
        let award = score_prediction(&p, 0, 0);
        assert_eq!(award.points, EXACT_SCORE_POINTS);
    }

    #[test]
    fn half_filled_score_guess_is_not_exact() {
        let p = prediction(Some(PredictedOutcome::HomeWin), Some(2), None);
        let award = score_prediction(&p, 2, 1);
        assert_eq!(award.points, CORRECT_OUTCOME_POINTS);
    }

    #[test]
    fn empty_prediction_earns_nothing() {
        let p = prediction(None, None, None);
        let award = score_prediction(&p, 1, 0);
        assert_eq!(award.points, 0);
    }
}
