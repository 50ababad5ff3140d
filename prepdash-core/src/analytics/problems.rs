//! Per-problem analysis: difficulty breakdown and topic frequency.

use serde::Serialize;

use crate::types::{DailyLog, Difficulty};

/// How many topics the frequency list keeps.
const TOP_TOPICS: usize = 10;

/// Aggregates for one difficulty tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyStats {
    pub difficulty: Difficulty,
    /// Problems attempted at this tier
    pub total: u32,
    /// Problems solved
    pub solved: u32,
    /// Percent of attempted problems solved
    pub success_rate: f64,
    /// Mean attempts per problem
    pub avg_attempts: f64,
    /// Mean minutes per problem
    pub avg_time: f64,
}

/// A topic and how many problems carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCount {
    pub topic: String,
    pub count: u32,
}

/// Problem analysis across all logged problem details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemAnalysis {
    /// One entry per tier, Easy through Hard
    pub by_difficulty: Vec<DifficultyStats>,
    /// Most frequent topics, descending
    pub top_topics: Vec<TopicCount>,
}

/// Aggregate problem details by difficulty and topic.
pub fn analyze_problems(logs: &[DailyLog]) -> ProblemAnalysis {
    let mut totals = [0u32; 3];
    let mut solved = [0u32; 3];
    let mut attempts = [0u32; 3];
    let mut minutes = [0f64; 3];
    let mut topics: std::collections::HashMap<String, u32> = std::collections::HashMap::new();

    for log in logs {
        for problem in &log.problem_details {
            let i = match problem.difficulty {
                Difficulty::Easy => 0,
                Difficulty::Medium => 1,
                Difficulty::Hard => 2,
            };
            totals[i] += 1;
            if problem.success {
                solved[i] += 1;
            }
            attempts[i] += problem.attempts;
            minutes[i] += problem.time_spent;
            for topic in &problem.topics {
                *topics.entry(topic.clone()).or_default() += 1;
            }
        }
    }

    let by_difficulty = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, &difficulty)| {
            let total = totals[i];
            let (success_rate, avg_attempts, avg_time) = if total > 0 {
                (
                    solved[i] as f64 / total as f64 * 100.0,
                    attempts[i] as f64 / total as f64,
                    minutes[i] / total as f64,
                )
            } else {
                (0.0, 0.0, 0.0)
            };
            DifficultyStats {
                difficulty,
                total,
                solved: solved[i],
                success_rate,
                avg_attempts,
                avg_time,
            }
        })
        .collect();

    let mut top_topics: Vec<TopicCount> = topics
        .into_iter()
        .map(|(topic, count)| TopicCount { topic, count })
        .collect();
    top_topics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.topic.cmp(&b.topic)));
    top_topics.truncate(TOP_TOPICS);

    ProblemAnalysis {
        by_difficulty,
        top_topics,
    }
}
