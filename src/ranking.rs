//! Per-article view sums and the dashboard leaderboards built from them.
//!
//! "Weekly" here is the trailing seven days including today, which is not
//! the same window as the complete weeks charted in [`crate::stats`].

use crate::dates::{parse_key, today};
use crate::models::{Article, AuthorCount, Dashboard, RankedArticle, ViewRecord};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const TOP_ARTICLES: usize = 5;
pub const DEFAULT_AUTHOR_LIMIT: usize = 3;

pub fn build_dashboard(articles: &[Article], author_limit: usize) -> Dashboard {
    build_dashboard_at(articles, today(), author_limit)
}

pub fn build_dashboard_at(articles: &[Article], today: NaiveDate, author_limit: usize) -> Dashboard {
    let ranked = rank_articles_at(articles, today);
    Dashboard {
        top_daily: top_by_daily(&ranked),
        top_weekly: top_by_weekly(&ranked),
        top_authors: top_authors(&ranked, author_limit),
    }
}

pub fn rank_articles(articles: &[Article]) -> Vec<RankedArticle> {
    rank_articles_at(articles, today())
}

pub fn rank_articles_at(articles: &[Article], today: NaiveDate) -> Vec<RankedArticle> {
    articles
        .iter()
        .map(|article| rank_article(article, today))
        .collect()
}

pub fn rank_article(article: &Article, today: NaiveDate) -> RankedArticle {
    let yesterday = today - Duration::days(1);
    let week_from = today - Duration::days(6);

    let mut article = article.clone();
    let author_name = resolve_author(article.author_name.take());
    let views = &article.views_list;

    RankedArticle {
        daily_views: sum_views(views, |date| date == yesterday),
        weekly_views: sum_views(views, |date| date >= week_from && date <= today),
        total_views: total_views(views),
        author_name,
        article,
    }
}

pub fn top_by_daily(ranked: &[RankedArticle]) -> Vec<RankedArticle> {
    top_by(ranked, |article| article.daily_views)
}

pub fn top_by_weekly(ranked: &[RankedArticle]) -> Vec<RankedArticle> {
    top_by(ranked, |article| article.weekly_views)
}

/// Authors ordered by article count, most prolific first. Equal counts keep
/// the order in which the authors were first seen.
pub fn top_authors(ranked: &[RankedArticle], limit: usize) -> Vec<AuthorCount> {
    let mut counts: Vec<AuthorCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for article in ranked {
        let name = article.author_name.as_str();
        if name == UNKNOWN_AUTHOR {
            continue;
        }
        match index.get(name) {
            Some(&idx) => counts[idx].article_count += 1,
            None => {
                index.insert(name, counts.len());
                counts.push(AuthorCount {
                    name: name.to_string(),
                    article_count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.article_count.cmp(&a.article_count));
    counts.truncate(limit);
    counts
}

pub fn total_views(views: &[ViewRecord]) -> u64 {
    views
        .iter()
        .fold(0u64, |sum, record| sum.saturating_add(record.number_of_views))
}

fn resolve_author(name: Option<String>) -> String {
    name.map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

fn sum_views(views: &[ViewRecord], in_window: impl Fn(NaiveDate) -> bool) -> u64 {
    views
        .iter()
        .filter(|record| parse_key(&record.date).is_some_and(&in_window))
        .fold(0u64, |sum, record| sum.saturating_add(record.number_of_views))
}

// `sort_by` is stable, so ties keep their input order.
fn top_by(ranked: &[RankedArticle], metric: impl Fn(&RankedArticle) -> u64) -> Vec<RankedArticle> {
    let mut sorted = ranked.to_vec();
    sorted.sort_by(|a, b| metric(b).cmp(&metric(a)));
    sorted.truncate(TOP_ARTICLES);
    sorted
}
