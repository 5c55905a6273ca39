use actix_web::{
    HttpResponse, Responder, get,
    web::{Data, Query},
};
use alloy_primitives::Address;
use egress_api_types::{error::ApiError, request::ValidatorsQuery, responses::ValidatorsResponse};
use egress_staking::client::StakingClients;
use egress_withdrawal::input::validate_address;

/// Called by `/api/validators?address=0x..&chainId=..` to list the validators a wallet owns.
#[get("/validators")]
pub async fn get_validators(
    staking_clients: Data<StakingClients>,
    query: Query<ValidatorsQuery>,
) -> Result<impl Responder, ApiError> {
    let query = query.into_inner();
    let address = query
        .address
        .as_deref()
        .filter(|address| !address.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing address parameter".to_string()))?;

    let invalid_address = || ApiError::BadRequest("Invalid Ethereum address format".to_string());
    if !validate_address(address) {
        return Err(invalid_address());
    }
    let wallet = address.parse::<Address>().map_err(|_| invalid_address())?;

    let network = query.network()?;
    let validators = staking_clients
        .for_network(network)?
        .get_validators(&wallet)
        .await?;

    Ok(HttpResponse::Ok().json(ValidatorsResponse::new(validators)))
}
