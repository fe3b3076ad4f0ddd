use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 5;

const HIRE_THRESHOLD: i32 = 12;
const POOL_THRESHOLD: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Hire,
    Pool,
    Reject,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Hire => "HIRE",
            Decision::Pool => "POOL",
            Decision::Reject => "REJECT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HIRE" => Some(Decision::Hire),
            "POOL" => Some(Decision::Pool),
            "REJECT" => Some(Decision::Reject),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub total_score: i32,
    pub suggested_decision: Decision,
}

/// Pure scoring policy: three 0-5 axes (punctuality, attitude, teamwork)
/// summed; 12 or more hires, 8-11 goes to the pool, below 8 is rejected.
pub struct DecisionService;

impl DecisionService {
    pub fn evaluate(punctuality: i32, attitude: i32, teamwork: i32) -> Result<ScoreResult> {
        for score in [punctuality, attitude, teamwork] {
            if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
                return Err(Error::BadRequest(
                    "Las calificaciones deben estar entre 0 y 5.".into(),
                ));
            }
        }

        let total_score = punctuality + attitude + teamwork;
        let suggested_decision = if total_score >= HIRE_THRESHOLD {
            Decision::Hire
        } else if total_score >= POOL_THRESHOLD {
            Decision::Pool
        } else {
            Decision::Reject
        };

        Ok(ScoreResult {
            total_score,
            suggested_decision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_exact_sum() {
        let result = DecisionService::evaluate(4, 3, 2).unwrap();
        assert_eq!(result.total_score, 9);
    }

    #[test]
    fn decision_boundaries() {
        assert_eq!(
            DecisionService::evaluate(5, 4, 3).unwrap().suggested_decision,
            Decision::Hire
        );
        assert_eq!(
            DecisionService::evaluate(4, 4, 3).unwrap().suggested_decision,
            Decision::Pool
        );
        assert_eq!(
            DecisionService::evaluate(3, 3, 2).unwrap().suggested_decision,
            Decision::Pool
        );
        assert_eq!(
            DecisionService::evaluate(3, 2, 2).unwrap().suggested_decision,
            Decision::Reject
        );
    }

    #[test]
    fn example_scores() {
        let hire = DecisionService::evaluate(5, 5, 5).unwrap();
        assert_eq!(hire.total_score, 15);
        assert_eq!(hire.suggested_decision, Decision::Hire);

        let pool = DecisionService::evaluate(3, 3, 3).unwrap();
        assert_eq!(pool.total_score, 9);
        assert_eq!(pool.suggested_decision, Decision::Pool);

        let reject = DecisionService::evaluate(1, 1, 1).unwrap();
        assert_eq!(reject.total_score, 3);
        assert_eq!(reject.suggested_decision, Decision::Reject);
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        assert!(DecisionService::evaluate(6, 3, 3).is_err());
        assert!(DecisionService::evaluate(3, -1, 3).is_err());
        assert!(DecisionService::evaluate(3, 3, 99).is_err());
    }

    #[test]
    fn decision_parse_roundtrip() {
        for raw in ["HIRE", "POOL", "REJECT"] {
            assert_eq!(Decision::parse(raw).unwrap().as_str(), raw);
        }
        assert!(Decision::parse("MAYBE").is_none());
    }
}
