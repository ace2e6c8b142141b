//! Stored record shapes. The analysis step that produces scores and tips is
//! external; these types mirror its serialized JSON (camelCase field names,
//! `type`/`tip`/`explanation` on tips) exactly, so a record round-trips
//! field-for-field through the key-value store.

use serde::{Deserialize, Serialize};

/// Tip polarity. Closed set; every consumption site matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipPolarity {
    Good,
    Improve,
}

/// A single piece of feedback: one-line summary plus a longer explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(rename = "type")]
    pub polarity: TipPolarity,
    #[serde(rename = "tip")]
    pub summary: String,
    #[serde(rename = "explanation")]
    pub detail: String,
}

/// ATS suggestions carry no long-form explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsTip {
    #[serde(rename = "type")]
    pub polarity: TipPolarity,
    #[serde(rename = "tip")]
    pub summary: String,
}

/// Score and ordered tips for one feedback category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFeedback {
    pub score: i32,
    pub tips: Vec<Tip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsFeedback {
    pub score: i32,
    pub tips: Vec<AtsTip>,
}

/// The full feedback block attached to a resume: the ATS section plus the
/// four fixed categories. All fields are required; a stored record missing
/// one does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "ATS")]
    pub ats: AtsFeedback,
    pub tone_and_style: CategoryFeedback,
    pub content: CategoryFeedback,
    pub structure: CategoryFeedback,
    pub skills: CategoryFeedback,
}

/// The four feedback dimensions, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    ToneAndStyle,
    Content,
    Structure,
    Skills,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::ToneAndStyle,
        Category::Content,
        Category::Structure,
        Category::Skills,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::ToneAndStyle => "Tone & Style",
            Category::Content => "Content",
            Category::Structure => "Structure",
            Category::Skills => "Skills",
        }
    }
}

impl Feedback {
    pub fn category(&self, category: Category) -> &CategoryFeedback {
        match category {
            Category::ToneAndStyle => &self.tone_and_style,
            Category::Content => &self.content,
            Category::Structure => &self.structure,
            Category::Skills => &self.skills,
        }
    }
}

/// One analyzed resume as stored in the key-value store. Identity is `id`;
/// `score` is the overall resume score. The company/job fields are display
/// metadata captured at upload time and may be absent on older records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    pub image_path: String,
    pub resume_path: String,
    pub score: i32,
    pub feedback: Feedback,
}
