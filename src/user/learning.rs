use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    #[serde(default)]
    pub completed_lessons: Vec<String>,
    /// Best score per quiz.
    #[serde(default)]
    pub quiz_scores: BTreeMap<String, u32>,
    /// Minutes.
    #[serde(default)]
    pub total_time_spent: u64,
    /// Unix time in milliseconds.
    #[serde(default)]
    pub last_activity: i64,
    #[serde(default)]
    pub badges: Vec<String>,
}

impl Default for LearningProgress {
    fn default() -> Self {
        Self {
            completed_lessons: vec![],
            quiz_scores: BTreeMap::new(),
            total_time_spent: 0,
            last_activity: Utc::now().timestamp_millis(),
            badges: vec![],
        }
    }
}

impl LearningProgress {
    fn touch(&mut self) {
        self.last_activity = Utc::now().timestamp_millis();
    }

    pub fn complete_lesson(&mut self, lesson_id: &str) -> bool {
        if self.is_lesson_completed(lesson_id) {
            return false;
        }
        self.completed_lessons.push(lesson_id.to_string());
        self.touch();
        true
    }

    pub fn is_lesson_completed(&self, lesson_id: &str) -> bool {
        self.completed_lessons.iter().any(|l| l == lesson_id)
    }

    /// Records a quiz attempt, keeping the best score.
    pub fn add_quiz_score(&mut self, quiz_id: &str, score: u32) {
        let best = self.quiz_scores.entry(quiz_id.to_string()).or_insert(0);
        *best = (*best).max(score);
        self.touch();
    }

    pub fn quiz_score(&self, quiz_id: &str) -> u32 {
        self.quiz_scores.get(quiz_id).copied().unwrap_or(0)
    }

    pub fn add_time(&mut self, minutes: u64) {
        self.total_time_spent += minutes;
        self.touch();
    }

    pub fn unlock_badge(&mut self, badge_id: &str) -> bool {
        if self.badges.iter().any(|b| b == badge_id) {
            return false;
        }
        self.badges.push(badge_id.to_string());
        self.touch();
        true
    }

    /// Completed lessons as a rounded percentage of `total_lessons`.
    pub fn progress_percentage(&self, total_lessons: usize) -> u32 {
        if total_lessons == 0 {
            return 0;
        }
        (self.completed_lessons.len() as f64 / total_lessons as f64 * 100.0).round() as u32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
