use actix_web::{HttpResponse, Responder, post, web::Json};
use egress_api_types::{
    error::ApiError,
    request::{DecodeRequest, WithdrawalRequestBody},
};
use egress_withdrawal::{codec::decode_withdrawal_data, withdrawal::ValidatorWithdrawal};

/// Builds the withdrawal request transaction for a validator: target contract and calldata.
#[post("/withdrawals")]
pub async fn prepare_withdrawal(
    request: Json<WithdrawalRequestBody>,
) -> Result<impl Responder, ApiError> {
    let request = request.into_inner();
    let network_spec = request.network()?.spec();
    let amount = request.withdrawal_amount()?;

    let withdrawal = ValidatorWithdrawal::prepare(request.validator, amount, &network_spec)?;

    Ok(HttpResponse::Ok().json(withdrawal))
}

#[post("/withdrawals/decode")]
pub async fn decode_withdrawal(request: Json<DecodeRequest>) -> Result<impl Responder, ApiError> {
    Ok(HttpResponse::Ok().json(decode_withdrawal_data(&request.data)?))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use super::*;

    fn validator(balance_wei: &str) -> Value {
        json!({
            "pubkey": format!("0x{}", "a".repeat(96)),
            "state": "active",
            "balance": balance_wei,
            "effectiveBalance": "32000000000000000000",
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        let app = test::init_service(
            App::new()
                .service(decode_withdrawal)
                .service(prepare_withdrawal),
        )
        .await;
        let request = test::TestRequest::post()
            .uri(uri)
            .set_json(&body)
            .to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status();
        (status, test::read_body(response).await.to_vec())
    }

    #[actix_web::test]
    async fn test_partial_withdrawal() {
        let (status, body) = post_json(
            "/withdrawals",
            json!({"validator": validator("40000000000000000000"), "amount": "5"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(body["to"], "0x00000961Ef480Eb55e80D19ad83579A64c007002");
        assert_eq!(body["amountGwei"], "5000000000");
        assert_eq!(body["isFull"], false);
        assert_eq!(
            body["transactionData"],
            format!("0x{}{}", "a".repeat(96), "000000012a05f200")
        );
    }

    #[actix_web::test]
    async fn test_full_withdrawal_on_hoodi() {
        let (status, body) = post_json(
            "/withdrawals",
            json!({"validator": validator("32000000000000000000"), "full": true, "chainId": 560048}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(body["isFull"], true);
        assert_eq!(body["amountGwei"], "0");
        assert_eq!(
            body["transactionData"],
            format!("0x{}{}", "a".repeat(96), "0".repeat(16))
        );
    }

    #[actix_web::test]
    async fn test_policy_rejection() {
        let (status, body) = post_json(
            "/withdrawals",
            json!({"validator": validator("35000000000000000000"), "amount": "10"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            String::from_utf8_lossy(&body),
            "Validator must have at least 32 ETH remaining. Current: 35 ETH, After withdrawal: 25.0000 ETH"
        );
    }

    #[actix_web::test]
    async fn test_unparseable_amount() {
        let (status, body) = post_json(
            "/withdrawals",
            json!({"validator": validator("40000000000000000000"), "amount": "lots"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(String::from_utf8_lossy(&body), "Invalid number format: lots");
    }

    #[actix_web::test]
    async fn test_unsupported_chain() {
        let (status, body) = post_json(
            "/withdrawals",
            json!({"validator": validator("40000000000000000000"), "amount": "1", "chainId": 17000}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(String::from_utf8_lossy(&body), "Unsupported chain ID: 17000");
    }

    #[actix_web::test]
    async fn test_decode() {
        let data = format!("0x{}{}", "a".repeat(96), "0000000077359400");
        let (status, body) = post_json("/withdrawals/decode", json!({ "data": data })).await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(body["pubkey"], format!("0x{}", "a".repeat(96)));
        assert_eq!(body["amountGwei"], "2000000000");
        assert_eq!(body["amountETH"], 2.0);
    }

    #[actix_web::test]
    async fn test_decode_wrong_length() {
        let (status, body) = post_json(
            "/withdrawals/decode",
            json!({ "data": format!("0x{}", "a".repeat(111)) }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            String::from_utf8_lossy(&body),
            "Invalid withdrawal data length: 111. Expected 112 hex characters."
        );
    }
}
