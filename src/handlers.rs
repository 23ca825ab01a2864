use crate::chart::TrendChart;
use crate::errors::AppError;
use crate::models::{HoverFrame, HoverQuery, MuteRequest, PageQuery, SeriesStyle, TrendResponse};
use crate::state::AppState;
use crate::storage::load_records;
use crate::ui::{has_chart_mount, render_index};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    if !has_chart_mount(&state.template) {
        debug!("page has no chart mount, skipping dataset");
        return Html(state.template.to_string());
    }

    let Some(records) = load_records(&state.csv_path).await else {
        return Html(render_index(&state.template, None));
    };
    let chart = TrendChart::from_records(&records);

    let names: Vec<&str> = chart.series().iter().map(|s| s.name.as_str()).collect();
    info!(?names, trim_year = chart.trim_year(), "built trend chart");

    // one chart per page load
    let mut pages = state.pages.lock().await;
    let page = pages.insert(chart);
    let html = render_index(&state.template, pages.get(page).map(|chart| (page, chart)));
    Html(html)
}

pub async fn get_trend(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<TrendResponse>, AppError> {
    let pages = state.pages.lock().await;
    let chart = pages.get(query.page).ok_or_else(|| no_chart(query.page))?;
    Ok(Json(chart.to_response()))
}

pub async fn hover(
    State(state): State<AppState>,
    Query(query): Query<HoverQuery>,
) -> Result<Json<HoverFrame>, AppError> {
    if !query.x.is_finite() {
        return Err(AppError::bad_request("x must be a finite number"));
    }

    let pages = state.pages.lock().await;
    let chart = pages.get(query.page).ok_or_else(|| no_chart(query.page))?;
    Ok(Json(chart.hover(query.x)))
}

pub async fn toggle_mute(
    State(state): State<AppState>,
    Json(payload): Json<MuteRequest>,
) -> Result<Json<SeriesStyle>, AppError> {
    let name = payload.name.trim();
    let mut pages = state.pages.lock().await;
    let chart = pages
        .get_mut(payload.page)
        .ok_or_else(|| no_chart(payload.page))?;

    let style = chart
        .toggle_mute(name)
        .ok_or_else(|| AppError::not_found(format!("no series named '{name}'")))?;
    debug!(page = payload.page, name, muted = style.muted, "toggled series mute");
    Ok(Json(style))
}

fn no_chart(page: u64) -> AppError {
    AppError::not_found(format!("no trend chart for page {page}"))
}
