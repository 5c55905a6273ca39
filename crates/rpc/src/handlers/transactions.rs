use std::sync::Arc;

use actix_web::{
    HttpResponse, Responder, delete, get, patch, post,
    web::{Data, Json, Path},
};
use alloy_primitives::B256;
use egress_api_types::{
    error::ApiError,
    request::NewTransactionRequest,
    responses::{TransactionResponse, TransactionsResponse},
};
use egress_transactions::{log::TransactionLog, transaction::TransactionUpdate};
use tracing::info;

fn parse_hash(hash: &str) -> Result<B256, ApiError> {
    hash.parse::<B256>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid transaction hash: {hash}")))
}

#[get("/transactions")]
pub async fn get_transactions(
    transaction_log: Data<Arc<TransactionLog>>,
) -> Result<impl Responder, ApiError> {
    Ok(HttpResponse::Ok().json(TransactionsResponse::new(
        transaction_log.history(),
        transaction_log.pending(),
    )))
}

#[post("/transactions")]
pub async fn record_transaction(
    transaction_log: Data<Arc<TransactionLog>>,
    request: Json<NewTransactionRequest>,
) -> Result<impl Responder, ApiError> {
    let transaction = request.into_inner().into_transaction()?;
    transaction_log.record(transaction.clone())?;

    Ok(HttpResponse::Created().json(TransactionResponse::from(transaction)))
}

/// Forgets settled transactions. Pending ones are still tracked.
#[delete("/transactions")]
pub async fn clear_transaction_history(
    transaction_log: Data<Arc<TransactionLog>>,
) -> Result<impl Responder, ApiError> {
    transaction_log.clear_history();
    info!("Cleared transaction history");

    Ok(HttpResponse::NoContent().finish())
}

#[get("/transactions/{hash}")]
pub async fn get_transaction(
    transaction_log: Data<Arc<TransactionLog>>,
    hash: Path<String>,
) -> Result<impl Responder, ApiError> {
    let hash = parse_hash(&hash)?;
    let transaction = transaction_log
        .get(&hash)
        .ok_or_else(|| ApiError::NotFound(format!("Transaction not found: {hash}")))?;

    Ok(HttpResponse::Ok().json(TransactionResponse::from(transaction)))
}

#[patch("/transactions/{hash}")]
pub async fn update_transaction(
    transaction_log: Data<Arc<TransactionLog>>,
    hash: Path<String>,
    update: Json<TransactionUpdate>,
) -> Result<impl Responder, ApiError> {
    let hash = parse_hash(&hash)?;
    let transaction = transaction_log.update(hash, update.into_inner())?;

    Ok(HttpResponse::Ok().json(TransactionResponse::from(transaction)))
}
