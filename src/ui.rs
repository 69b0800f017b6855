use crate::models::{AuthorCount, Dashboard, RankedArticle};

/// Fills `DASHBOARD_HTML` in one pass, so placeholder-like text inside
/// rendered titles or names is never expanded.
pub fn render_dashboard(dashboard: &Dashboard, article_count: usize) -> String {
    let mut html = String::with_capacity(DASHBOARD_HTML.len() + 4096);
    let mut rest = DASHBOARD_HTML;

    while let Some(open) = rest.find("{{") {
        let Some(close) = rest[open..].find("}}").map(|idx| open + idx) else {
            break;
        };
        html.push_str(&rest[..open]);
        match &rest[open + 2..close] {
            "ARTICLES" => html.push_str(&article_count.to_string()),
            "TOP_DAILY" => html.push_str(&render_article_rows(&dashboard.top_daily, |article| {
                article.daily_views
            })),
            "TOP_WEEKLY" => html.push_str(&render_article_rows(&dashboard.top_weekly, |article| {
                article.weekly_views
            })),
            "TOP_AUTHORS" => html.push_str(&render_author_rows(&dashboard.top_authors)),
            _ => html.push_str(&rest[open..close + 2]),
        }
        rest = &rest[close + 2..];
    }

    html.push_str(rest);
    html
}

fn render_article_rows(articles: &[RankedArticle], metric: impl Fn(&RankedArticle) -> u64) -> String {
    if articles.is_empty() {
        return EMPTY_ROW.to_string();
    }

    let max = articles.iter().map(&metric).max().unwrap_or(0).max(1);
    articles
        .iter()
        .map(|article| {
            let views = metric(article);
            format!(
                r#"<li><span class="title">{}</span><span class="author">{}</span><span class="bar" style="width:{}%"></span><span class="views">{views}</span></li>"#,
                escape_html(&article.article.title),
                escape_html(&article.author_name),
                views.saturating_mul(100) / max,
            )
        })
        .collect()
}

fn render_author_rows(authors: &[AuthorCount]) -> String {
    if authors.is_empty() {
        return EMPTY_ROW.to_string();
    }

    authors
        .iter()
        .map(|author| {
            format!(
                r#"<li><span class="title">{}</span><span class="views">{}</span></li>"#,
                escape_html(&author.name),
                author.article_count,
            )
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const EMPTY_ROW: &str = r#"<li class="empty">No data yet</li>"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Newsroom Analytics</title>
  <style>
    body {
      margin: 0;
      padding: 32px 18px;
      font-family: "Trebuchet MS", sans-serif;
      background: #f6f4ef;
      color: #2b2a28;
    }

    main {
      max-width: 960px;
      margin: 0 auto;
      display: grid;
      gap: 24px;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    }

    header {
      grid-column: 1 / -1;
    }

    section {
      background: #fff;
      border-radius: 16px;
      padding: 20px;
      box-shadow: 0 12px 30px rgba(47, 72, 88, 0.12);
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    li {
      display: grid;
      grid-template-columns: 1fr auto;
      gap: 4px 12px;
    }

    .author {
      grid-column: 1;
      font-size: 0.85rem;
      color: #6b6760;
    }

    .bar {
      grid-column: 1;
      height: 6px;
      border-radius: 3px;
      background: #f7a5b8;
    }

    .views {
      grid-column: 2;
      grid-row: 1;
      font-weight: 600;
    }

    .empty {
      color: #8a867f;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Newsroom Analytics</h1>
      <p>{{ARTICLES}} articles tracked</p>
    </header>
    <section>
      <h2>Most read yesterday</h2>
      <ul>{{TOP_DAILY}}</ul>
    </section>
    <section>
      <h2>Most read this week</h2>
      <ul>{{TOP_WEEKLY}}</ul>
    </section>
    <section>
      <h2>Top writers</h2>
      <ul>{{TOP_AUTHORS}}</ul>
    </section>
  </main>
</body>
</html>
"#;
