//! Tip aggregation and feedback view assembly.
//!
//! `aggregate` turns one category's tips into the two lists the rendering
//! layer shows: a compact summary list for pre-scanning and an expanded
//! detail list. No sorting, filtering, or deduplication — input order and
//! multiplicity pass through exactly, and the two lists stay index-aligned.

use serde::Serialize;

use crate::feedback::bands::{category_band, closing_line, overall_band, ScoreBand};
use crate::feedback::models::{Category, CategoryFeedback, Resume, TipPolarity};

/// One-line tip rendering, tagged by polarity for the icon choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipSummary {
    pub polarity: TipPolarity,
    pub text: String,
}

/// Expanded tip rendering: affirmative styling for `good`, cautionary for
/// `improve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipDetail {
    pub polarity: TipPolarity,
    pub heading: String,
    pub body: String,
    pub style_hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTips {
    pub summaries: Vec<TipSummary>,
    pub details: Vec<TipDetail>,
}

fn polarity_style(polarity: TipPolarity) -> &'static str {
    match polarity {
        TipPolarity::Good => "green",
        TipPolarity::Improve => "yellow",
    }
}

pub fn aggregate(category: &CategoryFeedback) -> CategoryTips {
    let summaries = category
        .tips
        .iter()
        .map(|tip| TipSummary {
            polarity: tip.polarity,
            text: tip.summary.clone(),
        })
        .collect();

    let details = category
        .tips
        .iter()
        .map(|tip| TipDetail {
            polarity: tip.polarity,
            heading: tip.summary.clone(),
            body: tip.detail.clone(),
            style_hint: polarity_style(tip.polarity),
        })
        .collect();

    CategoryTips { summaries, details }
}

/// One category section: header badge plus the aggregated tip lists. The
/// badge comes from the category threshold table; tip polarity is unrelated
/// to the category's own tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub category: Category,
    pub title: &'static str,
    pub score: i32,
    pub badge: ScoreBand,
    pub tips: CategoryTips,
}

/// The ATS panel: overall-table band, plain suggestion list, closing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsView {
    pub score: i32,
    pub band: ScoreBand,
    pub suggestions: Vec<TipSummary>,
    pub closing_line: &'static str,
}

/// Everything the rendering layer needs for one resume's feedback page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackView {
    pub overall_score: i32,
    pub overall: ScoreBand,
    pub ats: AtsView,
    pub categories: Vec<CategoryView>,
}

pub fn present(resume: &Resume) -> FeedbackView {
    let ats = &resume.feedback.ats;
    let ats_band = overall_band(ats.score);

    FeedbackView {
        overall_score: resume.score,
        overall: overall_band(resume.score),
        ats: AtsView {
            score: ats.score,
            band: ats_band,
            suggestions: ats
                .tips
                .iter()
                .map(|tip| TipSummary {
                    polarity: tip.polarity,
                    text: tip.summary.clone(),
                })
                .collect(),
            closing_line: closing_line(ats_band.tier),
        },
        categories: Category::ALL
            .iter()
            .map(|&category| {
                let data = resume.feedback.category(category);
                CategoryView {
                    category,
                    title: category.title(),
                    score: data.score,
                    badge: category_band(data.score),
                    tips: aggregate(data),
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::bands::Tier;
    use crate::feedback::models::fixtures::{category, sample_resume, tip};

    #[test]
    fn test_aggregate_preserves_count_order_and_polarity() {
        let input = category(
            60,
            vec![
                tip(TipPolarity::Good, "a", "A"),
                tip(TipPolarity::Improve, "b", "B"),
                tip(TipPolarity::Good, "c", "C"),
            ],
        );

        let out = aggregate(&input);
        assert_eq!(out.summaries.len(), 3);
        assert_eq!(out.details.len(), 3);
        for (i, expected) in input.tips.iter().enumerate() {
            assert_eq!(out.summaries[i].polarity, expected.polarity);
            assert_eq!(out.summaries[i].text, expected.summary);
            assert_eq!(out.details[i].polarity, expected.polarity);
            assert_eq!(out.details[i].heading, expected.summary);
            assert_eq!(out.details[i].body, expected.detail);
        }
    }

    #[test]
    fn test_aggregate_keeps_duplicates() {
        let repeated = tip(TipPolarity::Improve, "same", "same explanation");
        let input = category(30, vec![repeated.clone(), repeated.clone(), repeated]);

        let out = aggregate(&input);
        assert_eq!(out.summaries.len(), 3);
        assert!(out.summaries.iter().all(|s| s.text == "same"));
    }

    #[test]
    fn test_aggregate_empty_tips() {
        let out = aggregate(&category(90, vec![]));
        assert!(out.summaries.is_empty());
        assert!(out.details.is_empty());
    }

    #[test]
    fn test_detail_styling_follows_polarity() {
        let input = category(
            60,
            vec![
                tip(TipPolarity::Good, "a", "A"),
                tip(TipPolarity::Improve, "b", "B"),
            ],
        );

        let out = aggregate(&input);
        assert_eq!(out.details[0].style_hint, "green");
        assert_eq!(out.details[1].style_hint, "yellow");
    }

    #[test]
    fn test_present_builds_every_category_in_order() {
        let view = present(&sample_resume("r1", 85));
        let order: Vec<Category> = view.categories.iter().map(|c| c.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(view.categories[0].title, "Tone & Style");
    }

    #[test]
    fn test_present_badges_use_category_table() {
        let view = present(&sample_resume("r1", 85));
        // skills is 40 in the fixture: weak overall, but moderate as a category
        let skills = &view.categories[3];
        assert_eq!(skills.score, 40);
        assert_eq!(skills.badge.tier, Tier::Moderate);
        assert_eq!(skills.badge.label, "Good Start");
    }

    #[test]
    fn test_present_overall_and_ats_use_overall_table() {
        let view = present(&sample_resume("r1", 85));
        assert_eq!(view.overall.tier, Tier::Strong);
        assert_eq!(view.overall.label, "Excellent ATS Compatibility!");
        assert_eq!(view.ats.band.tier, Tier::Strong);
        assert_eq!(view.ats.closing_line, "Keep up the excellent work!");
        assert_eq!(view.ats.suggestions.len(), 1);

        let weak = present(&sample_resume("r2", 10));
        assert_eq!(weak.overall.tier, Tier::Weak);
        assert!(weak.overall.label.starts_with("Needs Work"));
    }
}
