//! # Provider Routes

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::IdRequest;
use crate::error::{ApiError, ErrorPage};
use crate::AppState;
use inventory_core::validation::parse_id;
use inventory_core::{Provider, ProviderDraft};

const LIST_PATH: &str = "/providers";

#[derive(Debug, Serialize)]
pub struct ProvidersPage {
    pub providers: Vec<Provider>,
}

/// Add/update form. `provider_id` is only read by update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProviderForm {
    pub provider_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
}

impl ProviderForm {
    fn draft(&self) -> ProviderDraft {
        ProviderDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            company_name: self.company_name.clone(),
        }
    }
}

/// `GET /providers`
pub async fn list(State(state): State<AppState>) -> Result<Json<ProvidersPage>, ApiError> {
    let mut session = state.db.begin().await?;
    let providers = session.providers().list().await?;

    Ok(Json(ProvidersPage { providers }))
}

/// `POST /providers` with `{"id": n}`
pub async fn lookup(
    State(state): State<AppState>,
    payload: Result<Json<IdRequest>, JsonRejection>,
) -> Result<Json<Provider>, ApiError> {
    let Json(request) = payload?;

    let mut session = state.db.begin().await?;
    let provider = session.providers().get_info(request.id).await?;

    Ok(Json(provider))
}

/// `POST /providers/add`
pub async fn add(
    State(state): State<AppState>,
    form: Result<Form<ProviderForm>, FormRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Form(form) = form?;
        let mut session = state.db.begin().await?;
        let id = session.providers().add(&form.draft()).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Provider added");

    Ok(Redirect::to(LIST_PATH))
}

/// `POST /providers/update`
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<ProviderForm>, FormRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Form(form) = form?;
        let id = parse_id("provider_id", &form.provider_id)?;
        let mut session = state.db.begin().await?;
        session.providers().update(id, &form.draft()).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Provider updated");

    Ok(Redirect::to(LIST_PATH))
}

/// `GET /providers/delete/{id}`
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Path(id) = id?;
        let mut session = state.db.begin().await?;
        session.providers().delete(id).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Provider deleted");

    Ok(Redirect::to(LIST_PATH))
}
