//! # Goods Routes
//!
//! List page, JSON lookup and form endpoints for goods.

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::IdRequest;
use crate::error::{ApiError, ErrorPage};
use crate::AppState;
use inventory_core::validation::{parse_cost, parse_id};
use inventory_core::{Category, GoodDraft, GoodInfo, Provider, ValidationError};

const LIST_PATH: &str = "/goods";

/// Goods list plus the pickers the add/update forms need.
#[derive(Debug, Serialize)]
pub struct GoodsPage {
    pub goods: Vec<GoodInfo>,
    pub providers: Vec<Provider>,
    pub categories: Vec<Category>,
}

/// Add/update form. `good_id` is only read by update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GoodForm {
    pub good_id: String,
    pub name: String,
    pub cost: String,
    pub provider: String,
    pub category: String,
}

impl GoodForm {
    fn draft(&self) -> Result<GoodDraft, ValidationError> {
        Ok(GoodDraft {
            name: self.name.clone(),
            cost: parse_cost(&self.cost)?,
            category_id: parse_id("category", &self.category)?,
            provider_id: parse_id("provider", &self.provider)?,
        })
    }
}

/// `GET /goods`
pub async fn list(State(state): State<AppState>) -> Result<Json<GoodsPage>, ApiError> {
    let mut session = state.db.begin().await?;
    let goods = session.goods().list().await?;
    let providers = session.providers().list().await?;
    let categories = session.categories().list().await?;

    Ok(Json(GoodsPage {
        goods,
        providers,
        categories,
    }))
}

/// `POST /goods` with `{"id": n}`
pub async fn lookup(
    State(state): State<AppState>,
    payload: Result<Json<IdRequest>, JsonRejection>,
) -> Result<Json<GoodInfo>, ApiError> {
    let Json(request) = payload?;

    let mut session = state.db.begin().await?;
    let info = session.goods().get_info(request.id).await?;

    Ok(Json(info))
}

/// `POST /goods/add`
pub async fn add(
    State(state): State<AppState>,
    form: Result<Form<GoodForm>, FormRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Form(form) = form?;
        let draft = form.draft()?;
        let mut session = state.db.begin().await?;
        let id = session.goods().add(&draft).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Good added");

    Ok(Redirect::to(LIST_PATH))
}

/// `POST /goods/update`
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<GoodForm>, FormRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Form(form) = form?;
        let id = parse_id("good_id", &form.good_id)?;
        let draft = form.draft()?;
        let mut session = state.db.begin().await?;
        session.goods().update(id, &draft).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Good updated");

    Ok(Redirect::to(LIST_PATH))
}

/// `GET /goods/delete/{id}`
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Path(id) = id?;
        let mut session = state.db.begin().await?;
        session.goods().delete(id).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Good deleted");

    Ok(Redirect::to(LIST_PATH))
}
