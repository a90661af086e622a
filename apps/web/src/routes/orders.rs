//! # Order Routes
//!
//! ## Form Fields
//! ```text
//! add:     name, address, notes, email, status, good_id
//! update:  order_id + the add fields (`good` accepted for good_id)
//! ```
//!
//! A blank `notes` field is stored as NULL.

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{non_empty, IdRequest};
use crate::error::{ApiError, ErrorPage};
use crate::AppState;
use inventory_core::validation::parse_id;
use inventory_core::{GoodInfo, OrderDraft, OrderInfo, ValidationError};

const LIST_PATH: &str = "/orders";

/// Orders list plus the goods picker.
#[derive(Debug, Serialize)]
pub struct OrdersPage {
    pub orders: Vec<OrderInfo>,
    pub goods: Vec<GoodInfo>,
}

/// Add/update form. `order_id` is only read by update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub order_id: String,
    pub name: String,
    pub address: String,
    pub notes: String,
    pub email: String,
    pub status: String,
    #[serde(alias = "good")]
    pub good_id: String,
}

impl OrderForm {
    fn draft(&self) -> Result<OrderDraft, ValidationError> {
        Ok(OrderDraft {
            full_name: self.name.clone(),
            address: self.address.clone(),
            notes: non_empty(&self.notes),
            email: self.email.clone(),
            status: self.status.clone(),
            good_id: parse_id("good_id", &self.good_id)?,
        })
    }
}

/// `GET /orders`
pub async fn list(State(state): State<AppState>) -> Result<Json<OrdersPage>, ApiError> {
    let mut session = state.db.begin().await?;
    let orders = session.orders().list().await?;
    let goods = session.goods().list().await?;

    Ok(Json(OrdersPage { orders, goods }))
}

/// `POST /orders` with `{"id": n}`
pub async fn lookup(
    State(state): State<AppState>,
    payload: Result<Json<IdRequest>, JsonRejection>,
) -> Result<Json<OrderInfo>, ApiError> {
    let Json(request) = payload?;

    let mut session = state.db.begin().await?;
    let info = session.orders().get_info(request.id).await?;

    Ok(Json(info))
}

/// `POST /orders/add`
pub async fn add(
    State(state): State<AppState>,
    form: Result<Form<OrderForm>, FormRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Form(form) = form?;
        let draft = form.draft()?;
        let mut session = state.db.begin().await?;
        let id = session.orders().add(&draft).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Order added");

    Ok(Redirect::to(LIST_PATH))
}

/// `POST /orders/update`
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<OrderForm>, FormRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Form(form) = form?;
        let id = parse_id("order_id", &form.order_id)?;
        let draft = form.draft()?;
        let mut session = state.db.begin().await?;
        session.orders().update(id, &draft).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Order updated");

    Ok(Redirect::to(LIST_PATH))
}

/// `GET /orders/delete/{id}`
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, ErrorPage> {
    let result: Result<i64, ApiError> = async {
        let Path(id) = id?;
        let mut session = state.db.begin().await?;
        session.orders().delete(id).await?;
        session.commit().await?;
        Ok(id)
    }
    .await;

    let id = result.map_err(|e| ErrorPage::new(e, LIST_PATH))?;
    info!(id, "Order deleted");

    Ok(Redirect::to(LIST_PATH))
}
