use actix_web::web::ServiceConfig;

use crate::handlers::withdrawals::{decode_withdrawal, prepare_withdrawal};

pub fn register_withdrawal_routes(cfg: &mut ServiceConfig) {
    cfg.service(decode_withdrawal).service(prepare_withdrawal);
}
