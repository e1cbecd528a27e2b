#![deny(clippy::redundant_clone)]

use crate::flash::{self, Flash};
use crate::render;
use crate::AppState;
use axum::extract::{Path, Query, RawForm, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use recicla_form::{point_draft_from_form, SubmittedForm};
use recicla_model::PointId;
use recicla_store::StoreError;
use std::collections::HashMap;
use tracing::{error, info};

/// Storage faults surface as a generic failure page; nothing retries.
pub(crate) struct AppError(StoreError);

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("storage fault: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(render::error_page())).into_response()
    }
}

fn redirect_with_flash(to: &str, flash: &Flash, secret: &[u8]) -> Response {
    let mut resp = Redirect::to(to).into_response();
    if let Ok(cookie) = flash::set_cookie_value(flash, secret) {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            resp.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    resp
}

pub(crate) async fn home_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let points = state.store.list().await?;
    Ok(Html(render::home_page(&points)).into_response())
}

pub(crate) async fn pontos_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let points = state.store.list().await?;
    let success = params.get("success").map(String::as_str);
    let taken = flash::take_flash(&headers, state.flash_secret());
    let html = render::pontos_page(&points, &state.taxonomy, success, taken.as_ref());
    let mut resp = Html(html).into_response();
    if taken.is_some() {
        if let Ok(value) = HeaderValue::from_str(&flash::clear_cookie_value()) {
            resp.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    Ok(resp)
}

pub(crate) async fn cadastro_form_handler(State(state): State<AppState>) -> Response {
    Html(render::point_form_page(
        "Cadastrar ponto",
        "/cadastro",
        &SubmittedForm::new(),
        &state.taxonomy,
        None,
    ))
    .into_response()
}

pub(crate) async fn cadastro_submit_handler(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let form = SubmittedForm::from_urlencoded(&body);
    match point_draft_from_form(&form, &state.taxonomy) {
        Ok(draft) => {
            let id = state.store.insert(draft).await?;
            info!("collection point {id} created");
            Ok(redirect_with_flash(
                "/pontos",
                &Flash::success("Ponto cadastrado com sucesso!"),
                state.flash_secret(),
            ))
        }
        Err(err) => Ok(Html(render::point_form_page(
            "Cadastrar ponto",
            "/cadastro",
            &form,
            &state.taxonomy,
            Some(&err.to_string()),
        ))
        .into_response()),
    }
}

pub(crate) async fn editar_form_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<i64>,
) -> Result<Response, AppError> {
    let id = PointId::new(raw_id);
    match state.store.fetch(id).await? {
        None => Ok(redirect_with_flash(
            "/pontos",
            &Flash::error("Ponto não encontrado."),
            state.flash_secret(),
        )),
        Some(point) => {
            let form = render::form_from_point(&point);
            Ok(Html(render::point_form_page(
                "Editar ponto",
                &format!("/editar/{id}"),
                &form,
                &state.taxonomy,
                None,
            ))
            .into_response())
        }
    }
}

pub(crate) async fn editar_submit_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<i64>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let id = PointId::new(raw_id);
    if state.store.fetch(id).await?.is_none() {
        return Ok(redirect_with_flash(
            "/pontos",
            &Flash::error("Ponto não encontrado."),
            state.flash_secret(),
        ));
    }

    let form = SubmittedForm::from_urlencoded(&body);
    match point_draft_from_form(&form, &state.taxonomy) {
        Ok(draft) => {
            state.store.update(id, draft).await?;
            info!("collection point {id} updated");
            Ok(redirect_with_flash(
                "/pontos",
                &Flash::success("Ponto atualizado com sucesso!"),
                state.flash_secret(),
            ))
        }
        Err(err) => Ok(Html(render::point_form_page(
            "Editar ponto",
            &format!("/editar/{id}"),
            &form,
            &state.taxonomy,
            Some(&err.to_string()),
        ))
        .into_response()),
    }
}

pub(crate) async fn delete_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<i64>,
) -> Result<Response, AppError> {
    let id = PointId::new(raw_id);
    state.store.delete(id).await?;
    info!("collection point {id} deleted");
    Ok(redirect_with_flash(
        "/pontos",
        &Flash::success("Ponto removido com sucesso!"),
        state.flash_secret(),
    ))
}

pub(crate) async fn educacao_handler() -> Response {
    Html(render::educacao_page()).into_response()
}

pub(crate) async fn sobre_handler() -> Response {
    Html(render::sobre_page()).into_response()
}
