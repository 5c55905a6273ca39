use actix_web::web::ServiceConfig;

use crate::handlers::validators::get_validators;

pub fn register_validator_routes(cfg: &mut ServiceConfig) {
    cfg.service(get_validators);
}
