//! Score band classification — maps a numeric score to a severity tier and
//! the tier's display copy.
//!
//! Two threshold tables exist on purpose. Overall and ATS scores turn
//! moderate above 49; category scores already count as moderate above 39.
//! The cut points are load-bearing: the boundary scores 39, 40, 49, 50, 69
//! and 70 must classify exactly as the inequalities below say.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Strong,
    Moderate,
    Weak,
}

/// Band cut points. Scores strictly above `strong_above` are strong, scores
/// strictly above `moderate_above` are moderate, everything else is weak.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable {
    pub strong_above: i32,
    pub moderate_above: i32,
}

/// Overall resume score and ATS score.
pub const OVERALL_THRESHOLDS: ThresholdTable = ThresholdTable {
    strong_above: 69,
    moderate_above: 49,
};

/// Per-category scores. Same strong cut as the overall table, but a category
/// only turns weak below 40. Do not unify the two tables.
pub const CATEGORY_THRESHOLDS: ThresholdTable = ThresholdTable {
    strong_above: 69,
    moderate_above: 39,
};

/// Total over all integers. Out-of-range scores are not rejected; the same
/// inequalities classify them (the producer guarantees 0..=100 upstream).
pub fn classify(score: i32, table: ThresholdTable) -> Tier {
    if score > table.strong_above {
        Tier::Strong
    } else if score > table.moderate_above {
        Tier::Moderate
    } else {
        Tier::Weak
    }
}

/// Tier plus its fixed display copy. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBand {
    pub tier: Tier,
    pub label: &'static str,
    pub style_hint: &'static str,
    pub explanation: &'static str,
}

/// Band for the overall resume score and the ATS score.
pub fn overall_band(score: i32) -> ScoreBand {
    let tier = classify(score, OVERALL_THRESHOLDS);
    match tier {
        Tier::Strong => ScoreBand {
            tier,
            label: "Excellent ATS Compatibility!",
            style_hint: "green",
            explanation: "Your resume is highly optimized for Applicant Tracking Systems. Great job!",
        },
        Tier::Moderate => ScoreBand {
            tier,
            label: "Good Start on ATS Optimization.",
            style_hint: "yellow",
            explanation: "Your resume has a fair level of ATS compatibility, but there's room for improvement to stand out even more.",
        },
        Tier::Weak => ScoreBand {
            tier,
            label: "Needs Work on ATS Optimization.",
            style_hint: "red",
            explanation: "Your resume might face challenges with Applicant Tracking Systems. It's important to optimize it for better visibility.",
        },
    }
}

/// Badge for a single category score.
pub fn category_band(score: i32) -> ScoreBand {
    let tier = classify(score, CATEGORY_THRESHOLDS);
    match tier {
        Tier::Strong => ScoreBand {
            tier,
            label: "Strong",
            style_hint: "green",
            explanation: "This area reads well and needs little attention.",
        },
        Tier::Moderate => ScoreBand {
            tier,
            label: "Good Start",
            style_hint: "yellow",
            explanation: "A solid base with clear room to sharpen.",
        },
        Tier::Weak => ScoreBand {
            tier,
            label: "Needs Work",
            style_hint: "red",
            explanation: "This area is holding the resume back and deserves attention first.",
        },
    }
}

/// Closing line under the ATS suggestion list.
pub fn closing_line(tier: Tier) -> &'static str {
    match tier {
        Tier::Strong => "Keep up the excellent work!",
        Tier::Moderate => "Consider the suggestions below to boost your score.",
        Tier::Weak => "Review the tips below to significantly improve your ATS score.",
    }
}
