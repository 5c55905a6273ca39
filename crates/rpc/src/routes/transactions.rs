use actix_web::web::ServiceConfig;

use crate::handlers::transactions::{
    clear_transaction_history, get_transaction, get_transactions, record_transaction,
    update_transaction,
};

pub fn register_transaction_routes(cfg: &mut ServiceConfig) {
    cfg.service(get_transactions)
        .service(record_transaction)
        .service(clear_transaction_history)
        .service(get_transaction)
        .service(update_transaction);
}
