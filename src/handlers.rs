use crate::controller::Controller;
use crate::errors::AppError;
use crate::filter::filter_promises;
use crate::models::{
    EventRequest, EventResponse, InteractionEvent, PromiseQuery, PromiseRecord, StatRecord, Tab,
    ViewState,
};
use crate::state::AppState;
use crate::surface::Fragments;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&state.data, &session))
}

pub async fn get_promises(
    State(state): State<AppState>,
    Query(query): Query<PromiseQuery>,
) -> Result<Json<Vec<PromiseRecord>>, AppError> {
    let view = ViewState::new(parse_tab(query.tab.as_deref())?, query.q.unwrap_or_default());
    let promises = filter_promises(&state.data.promises, &view)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(promises))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Vec<StatRecord>> {
    Json(state.data.stats.clone())
}

pub async fn get_state(State(state): State<AppState>) -> Json<Controller> {
    let session = state.session.lock().await;
    Json(session.clone())
}

pub async fn post_event(
    State(state): State<AppState>,
    Json(payload): Json<EventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let event = to_event(payload)?;
    let mut surface = Fragments::page();
    let mut session = state.session.lock().await;
    session.handle(event, &state.data, &mut surface);
    Ok(Json(surface.into_response(session.revision)))
}

fn parse_tab(value: Option<&str>) -> Result<Tab, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(Tab::All),
        Some(value) => Tab::parse(value).ok_or_else(|| AppError::unknown_tab(value)),
    }
}

fn to_event(payload: EventRequest) -> Result<InteractionEvent, AppError> {
    match payload.kind.trim() {
        "select_tab" => {
            let tab = payload
                .tab
                .ok_or_else(|| AppError::bad_request("select_tab requires 'tab'"))?;
            let tab = Tab::parse(tab.trim()).ok_or_else(|| AppError::unknown_tab(&tab))?;
            Ok(InteractionEvent::SelectTab { tab })
        }
        "search" => Ok(InteractionEvent::Search {
            query: payload.query.unwrap_or_default(),
        }),
        "toggle_menu" => Ok(InteractionEvent::ToggleMenu),
        other => Err(AppError::bad_request(format!(
            "type must be 'select_tab', 'search' or 'toggle_menu', got '{other}'"
        ))),
    }
}
