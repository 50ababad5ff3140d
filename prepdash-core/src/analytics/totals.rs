//! Lifetime totals across all daily logs.

use serde::Serialize;

use crate::types::{DailyLog, GoalCategory};

/// Aggregate counts per goal category, plus the per-tier problem breakdown.
///
/// Pure aggregation over the full log history. Record order does not matter
/// and missing fields count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Problems solved across all three difficulty tiers
    pub leetcode: u32,
    pub leetcode_easy: u32,
    pub leetcode_medium: u32,
    pub leetcode_hard: u32,
    /// System design sessions
    pub system_design: u32,
    /// ML theory sessions
    pub ml_theory: u32,
    /// Project flags summed across days (a day with three flags adds 3)
    pub projects: u32,
    /// Days on which a mock interview was flagged
    pub mock_interviews: u32,
    /// Days on which a research paper was flagged
    pub research_papers: u32,
    /// Days on which a blog post was flagged
    pub blog_posts: u32,
    /// Days on which a LinkedIn post was flagged
    pub linkedin_posts: u32,
}

impl Totals {
    /// Lifetime total for a category.
    pub fn get(&self, category: GoalCategory) -> u32 {
        match category {
            GoalCategory::Leetcode => self.leetcode,
            GoalCategory::SystemDesign => self.system_design,
            GoalCategory::MlTheory => self.ml_theory,
            GoalCategory::Projects => self.projects,
            GoalCategory::MockInterviews => self.mock_interviews,
            GoalCategory::ResearchPapers => self.research_papers,
            GoalCategory::BlogPosts => self.blog_posts,
            GoalCategory::LinkedinPosts => self.linkedin_posts,
        }
    }
}

/// Sum every goal category over the full log history.
pub fn compute_totals(logs: &[DailyLog]) -> Totals {
    let mut totals = Totals::default();
    for log in logs {
        totals.leetcode += log.leetcode_total();
        totals.leetcode_easy += log.leetcode_easy;
        totals.leetcode_medium += log.leetcode_medium;
        totals.leetcode_hard += log.leetcode_hard;
        totals.system_design += log.system_design;
        totals.ml_theory += log.ml_theory;
        totals.projects += log.project_count();
        totals.mock_interviews += log.mock_interview as u32;
        totals.research_papers += log.research_paper as u32;
        totals.blog_posts += log.blog_post as u32;
        totals.linkedin_posts += log.linkedin_post as u32;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        assert_eq!(compute_totals(&[]), Totals::default());
    }

    #[test]
    fn test_totals_sum_categories() {
        let mut day1 = DailyLog::new(date("2024-01-01"));
        day1.leetcode_easy = 2;
        day1.leetcode_medium = 1;
        day1.system_design = 1;
        let mut day2 = DailyLog::new(date("2024-01-02"));
        day2.leetcode_hard = 1;
        day2.project_ml = true;

        let totals = compute_totals(&[day1, day2]);
        assert_eq!(totals.leetcode, 4);
        assert_eq!(totals.leetcode_easy, 2);
        assert_eq!(totals.leetcode_medium, 1);
        assert_eq!(totals.leetcode_hard, 1);
        assert_eq!(totals.system_design, 1);
        assert_eq!(totals.ml_theory, 0);
        assert_eq!(totals.projects, 1);
    }

    #[test]
    fn test_flags_count_days_not_intensity() {
        // Two flagged days contribute 2, no matter what else each day holds.
        let mut day1 = DailyLog::new(date("2024-01-01"));
        day1.mock_interview = true;
        day1.blog_post = true;
        let mut day2 = DailyLog::new(date("2024-01-05"));
        day2.mock_interview = true;

        let totals = compute_totals(&[day1, day2]);
        assert_eq!(totals.mock_interviews, 2);
        assert_eq!(totals.blog_posts, 1);
        assert_eq!(totals.linkedin_posts, 0);
    }

    #[test]
    fn test_multiple_project_flags_each_count() {
        let mut day = DailyLog::new(date("2024-01-01"));
        day.project_ml = true;
        day.project_rag = true;
        day.project_llm = true;

        assert_eq!(compute_totals(&[day]).projects, 3);
    }

    #[test]
    fn test_totals_are_order_independent() {
        let mut a = DailyLog::new(date("2024-01-03"));
        a.leetcode_easy = 5;
        let mut b = DailyLog::new(date("2024-01-01"));
        b.leetcode_hard = 2;
        b.ml_theory = 1;

        let forward = compute_totals(&[a.clone(), b.clone()]);
        let reversed = compute_totals(&[b, a]);
        assert_eq!(forward, reversed);
    }
}
