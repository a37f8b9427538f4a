use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::{OrderForm, PlacementOutcome};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Fields are deserialized as optional so the service can report exactly
/// which required one is missing, instead of a generic deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub artwork_id: Option<i32>,
    pub shipping_address: Option<String>,
    pub notes: Option<String>,
}

impl From<CreateOrderRequest> for OrderForm {
    fn from(req: CreateOrderRequest) -> Self {
        OrderForm {
            customer_name: req.customer_name,
            customer_email: req.customer_email,
            customer_phone: req.customer_phone,
            artwork_id: req.artwork_id,
            shipping_address: req.shipping_address,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub message: String,
    pub order_id: i32,
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// POST /api/order
///
/// Places an order for a single artwork. The availability check and the
/// order insert run as one transaction in the database, so two concurrent
/// submissions for the same artwork cannot both succeed.
#[utoipa::path(
    post,
    path = "/api/order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = CreateOrderResponse),
        (status = 400, description = "Validation failure or artwork unavailable"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let form: OrderForm = body.into_inner().into();
    let service = service.into_inner();

    let outcome = web::block(move || service.place(form))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match outcome {
        PlacementOutcome::Placed { order_id } => Ok(HttpResponse::Ok().json(CreateOrderResponse {
            success: true,
            message: "Order created successfully".to_string(),
            order_id,
        })),
        PlacementOutcome::Rejected { reason } => Err(AppError::Conflict(reason)),
    }
}
