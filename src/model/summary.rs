use super::FormId;
use serde::{Deserialize, Serialize};

/// Generated natural-language synthesis of one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    #[serde(default)]
    pub user_type: String,
    pub form_id: FormId,
}

impl Summary {
    /// Non-empty paragraphs in display order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.summary.lines().map(str::trim_end).filter(|l| !l.trim().is_empty())
    }
}

/// Where a returned summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrigin {
    Cached,
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOutcome {
    pub summary: Summary,
    pub origin: SummaryOrigin,
}
