use serde::{Deserialize, Serialize};

/// One day's view count for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    pub date: String,
    pub number_of_views: u64,
}

impl ViewRecord {
    pub fn new(date: impl Into<String>, number_of_views: u64) -> Self {
        Self {
            date: date.into(),
            number_of_views,
        }
    }
}

/// Review state codes used by the article API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArticleStatus {
    Draft,
    PendingReview,
    Approved,
    Published,
    Returned,
}

impl ArticleStatus {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Draft),
            1 => Some(Self::PendingReview),
            2 => Some(Self::Approved),
            3 => Some(Self::Published),
            4 => Some(Self::Returned),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingReview => "Pending review",
            Self::Approved => "Approved",
            Self::Published => "Published",
            Self::Returned => "Returned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub views_list: Vec<ViewRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    pub day: String,
    pub date_short: String,
    pub date_full: String,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    pub week_label: String,
    pub week_start: String,
    pub week_end: String,
    pub views: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewCharts {
    pub last_7_days: Vec<DailyBucket>,
    pub last_4_weeks: Vec<WeeklyBucket>,
}

/// An article with its derived view sums. `author_name` here is always set,
/// falling back to the unknown-author sentinel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub author_name: String,
    pub daily_views: u64,
    pub weekly_views: u64,
    pub total_views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCount {
    pub name: String,
    pub article_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub top_daily: Vec<RankedArticle>,
    pub top_weekly: Vec<RankedArticle>,
    pub top_authors: Vec<AuthorCount>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStatsResponse {
    pub id: String,
    pub title: String,
    pub writer_name: String,
    pub editor_name: String,
    pub status: Option<&'static str>,
    pub submitted: String,
    pub published: String,
    pub total_views: u64,
    #[serde(flatten)]
    pub charts: ViewCharts,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IngestResponse {
    pub ingested: usize,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub authors: Option<usize>,
}
