pub mod transactions;
pub mod validators;
pub mod withdrawals;

use actix_web::web::{ServiceConfig, scope};

pub fn get_api_routes(config: &mut ServiceConfig) {
    config.service(
        scope("/api")
            .configure(validators::register_validator_routes)
            .configure(withdrawals::register_withdrawal_routes)
            .configure(transactions::register_transaction_routes),
    );
}

pub fn register_routers(config: &mut ServiceConfig) {
    config.configure(get_api_routes);
}
