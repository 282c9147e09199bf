use std::collections::HashSet;

use uuid::Uuid;

use crate::models::achievement::{Achievement, ConditionType};
use crate::models::user::UserStats;

/// Whether a user's current counters satisfy one achievement's threshold.
pub fn condition_met(achievement: &Achievement, stats: &UserStats) -> bool {
    let observed = match achievement.condition_type {
        ConditionType::TotalPoints => stats.points,
        ConditionType::CorrectPredictions => stats.correct_predictions,
        ConditionType::TotalPredictions => stats.total_predictions,
    };
    observed >= achievement.condition_value
}

/// Pure unlock scan: catalog x stats x already-unlocked set -> newly unlocked.
/// Already-unlocked achievements are skipped, which keeps repeated scans safe.
pub fn newly_unlocked<'a>(
    catalog: &'a [Achievement],
    stats: &UserStats,
    unlocked: &HashSet<Uuid>,
) -> Vec<&'a Achievement> {
    catalog
        .iter()
        .filter(|a| !unlocked.contains(&a.id))
        .filter(|a| condition_met(a, stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn achievement(condition_type: ConditionType, condition_value: i32) -> Achievement {
        Achievement {
            id: Uuid::new_v4(),
            name: "test".into(),
            description: None,
            icon_url: None,
            condition_type,
            condition_value,
            points_reward: 50,
            created_at: Utc::now(),
        }
    }

    fn stats(points: i32, correct: i32, total: i32) -> UserStats {
        UserStats {
            points,
            correct_predictions: correct,
            total_predictions: total,
        }
    }

    #[test]
    fn thresholds_are_inclusive() {
        let a = achievement(ConditionType::TotalPoints, 100);
        assert!(condition_met(&a, &stats(100, 0, 0)));
        assert!(!condition_met(&a, &stats(99, 0, 0)));
    }

    #[test]
    fn each_condition_type_reads_its_own_counter() {
        let correct = achievement(ConditionType::CorrectPredictions, 5);
        let total = achievement(ConditionType::TotalPredictions, 10);
        let s = stats(0, 5, 9);
        assert!(condition_met(&correct, &s));
        assert!(!condition_met(&total, &s));
    }

    #[test]
    fn already_unlocked_achievements_are_skipped() {
        let a = achievement(ConditionType::TotalPoints, 100);
        let b = achievement(ConditionType::TotalPoints, 200);
        let catalog = vec![a, b];
        let s = stats(250, 0, 0);

        let first = newly_unlocked(&catalog, &s, &HashSet::new());
        assert_eq!(first.len(), 2);

        // Second scan with both recorded: nothing new
        let unlocked: HashSet<Uuid> = catalog.iter().map(|a| a.id).collect();
        let second = newly_unlocked(&catalog, &s, &unlocked);
        assert!(second.is_empty());
    }

    #[test]
    fn crossing_a_threshold_unlocks_exactly_once() {
        let a = achievement(ConditionType::TotalPoints, 100);
        let catalog = vec![a];
        let mut unlocked = HashSet::new();

        let before = newly_unlocked(&catalog, &stats(90, 0, 0), &unlocked);
        assert!(before.is_empty());

        let after = newly_unlocked(&catalog, &stats(110, 0, 0), &unlocked);
        assert_eq!(after.len(), 1);
        unlocked.insert(after[0].id);

        let again = newly_unlocked(&catalog, &stats(500, 0, 0), &unlocked);
        assert!(again.is_empty());
    }
}
