//! # Category Routes
//!
//! Deletion is also reachable as `/category/delete/{id}`.

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
use inventory_core::{Category, CategoryDraft};

const LIST_PATH: &str = "/categories";

#[derive(Debug, Serialize)]
pub struct CategoriesPage {
    pub categories: Vec<Category>,
}

/// Add/update form. `category_id` is only read by update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryForm {
    pub category_id: String,
    pub name: String,
}

/// `GET /categories`
pub async fn list(State(state): State<AppState>) -> Result<Json<CategoriesPage>, ApiError> {
    let mut session = state.db.begin().await?;
    let categories = session.categories().list().await?;

    Ok(Json(CategoriesPage { categories }))
}

/// `POST /categories` with `{"id": n}`
pub async fn lookup(
    State(state): State<AppState>,
    payload: Result<Json<IdRequest>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let Json(request) = payload?;

    let mut session = state.db.begin().await?;
    let category = session.categories().get_info(request.id).await?;

    Ok(Json(category))
}

/// `POST /categories/add`
pub async fn add(
    State(state): State<AppState>,
    form: Result<Form<CategoryForm>, FormRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Form(form) = form?;
        let draft = CategoryDraft { name: form.name };
        let mut session = state.db.begin().await?;
        let id = session.categories().add(&draft).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Category added");

    Ok(Redirect::to(LIST_PATH))
}

/// `POST /categories/update`
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<CategoryForm>, FormRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Form(form) = form?;
        let id = parse_id("category_id", &form.category_id)?;
        let draft = CategoryDraft {
            name: form.name.clone(),
        };
        let mut session = state.db.begin().await?;
        session.categories().update(id, &draft).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Category updated");

    Ok(Redirect::to(LIST_PATH))
}

/// `GET /categories/delete/{id}`
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Path(id) = id?;
        let mut session = state.db.begin().await?;
        session.categories().delete(id).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Category deleted");

    Ok(Redirect::to(LIST_PATH))
}
