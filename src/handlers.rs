use crate::adapter::normalize_payload;
use crate::dates::{NOT_AVAILABLE, display_label};
use crate::errors::AppError;
use crate::models::{
    Article, ArticleStatsResponse, Dashboard, DashboardQuery, IngestResponse, RankedArticle,
};
use crate::ranking::{build_dashboard, rank_articles, total_views};
use crate::state::AppState;
use crate::stats::article_charts;
use crate::storage::persist_data;
use crate::ui::render_dashboard;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use serde_json::Value;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let dashboard = build_dashboard(&data.articles, state.author_limit);
    Html(render_dashboard(&dashboard, data.articles.len()))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<Dashboard> {
    let data = state.data.lock().await;
    let limit = query.authors.unwrap_or(state.author_limit);
    Json(build_dashboard(&data.articles, limit))
}

pub async fn list_articles(State(state): State<AppState>) -> Json<Vec<RankedArticle>> {
    let data = state.data.lock().await;
    Json(rank_articles(&data.articles))
}

pub async fn ingest_articles(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<IngestResponse>, AppError> {
    let articles = normalize_payload(&payload);
    if articles.is_empty() {
        return Err(AppError::bad_request("payload contains no article objects"));
    }

    let ingested = articles.len();
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    next.upsert(articles);
    persist_data(&state.data_path, &next).await?;
    *data = next;

    info!("ingested {ingested} articles, {} stored", data.articles.len());
    Ok(Json(IngestResponse {
        ingested,
        total: data.articles.len(),
    }))
}

pub async fn get_article_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleStatsResponse>, AppError> {
    let data = state.data.lock().await;
    let article = data
        .find(&id)
        .ok_or_else(|| AppError::not_found(format!("article {id} not found")))?;

    Ok(Json(to_stats_response(article)))
}

pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    if next.remove(&id).is_none() {
        return Err(AppError::not_found(format!("article {id} not found")));
    }
    persist_data(&state.data_path, &next).await?;
    *data = next;

    info!("deleted article {id}");
    Ok(StatusCode::NO_CONTENT)
}

fn to_stats_response(article: &Article) -> ArticleStatsResponse {
    let or_na = |name: &Option<String>| name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());

    ArticleStatsResponse {
        id: article.id.clone(),
        title: if article.title.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            article.title.clone()
        },
        writer_name: or_na(&article.author_name),
        editor_name: or_na(&article.editor_name),
        status: article.status.map(|status| status.label()),
        submitted: display_label(article.submitted_at.as_deref()),
        published: display_label(article.published_at.as_deref()),
        total_views: total_views(&article.views_list),
        charts: article_charts(&article.views_list),
    }
}
