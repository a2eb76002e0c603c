use serde::de::DeserializeOwned;
use std::time::Duration;

use super::types::*;

/// Default API base when `HAULBOARD_API_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Errors surfaced by the API client. The UI shows a generic message plus
/// a manual retry control; nothing is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: could not reach the server: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned status {status}")]
    Status { status: u16 },
    #[error("Failed to decode server response: {0}")]
    Decode(String),
}

/// Typed client for the back-office REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Build a client from the `HAULBOARD_API_URL` environment variable,
    /// falling back to the local development address.
    pub fn from_env() -> Self {
        let base = std::env::var("HAULBOARD_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Shared fetch path for every page: GET, check status, decode JSON.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn accounts_summary(&self) -> Result<AccountsSummary, ApiError> {
        self.get_json("/api/v1/accounts/summary/").await
    }

    pub async fn accounts_detail(&self) -> Result<AccountsDetail, ApiError> {
        self.get_json("/api/v1/accounts/detail/").await
    }

    pub async fn drivers_summary(&self) -> Result<DriversSummary, ApiError> {
        self.get_json("/api/v1/drivers/summary/").await
    }

    pub async fn revenue_streams(&self) -> Result<RevenueReport, ApiError> {
        self.get_json("/api/v1/revenue/streams/").await
    }

    pub async fn trips(&self) -> Result<TripsData, ApiError> {
        self.get_json("/api/v1/trips/").await
    }

    pub async fn trucking_accounts(&self) -> Result<Vec<AccountRecord>, ApiError> {
        let listing: AccountListing = self.get_json("/api/v1/trucking/").await?;
        Ok(listing.into_records())
    }

    pub async fn salary_accounts(&self) -> Result<Vec<AccountRecord>, ApiError> {
        let listing: AccountListing = self.get_json("/api/v1/salary/").await?;
        Ok(listing.into_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record_json(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "account_number": "0401",
            "account_type": "Trucking",
            "truck_type": "10W",
            "plate_number": "ABC-123",
            "description": "Hauling",
            "debit": 1000.0,
            "credit": 0.0,
            "final_total": 1000.0,
            "remarks": "",
            "reference_number": "R-1",
            "date": "2024-01-15",
            "quantity": null,
            "price": null,
            "driver": "Juan",
            "route": "MNL-BAT",
            "front_load": null,
            "back_load": null
        })
    }

    #[tokio::test]
    async fn test_trips_fetch_and_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/trips/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trips": [{
                    "account_number": "0401",
                    "plate_number": "ABC-123",
                    "date": "2024-01-15",
                    "trip_route": "MNL-BAT",
                    "driver": "Juan",
                    "allowance": 500.0,
                    "reference_number": "R-1",
                    "fuel_liters": 80.5,
                    "fuel_price": 65.0,
                    "front_load": "Cement",
                    "front_load_reference_number": "F-1",
                    "front_load_amount": 12000.0,
                    "back_load_reference_number": "B-1",
                    "back_load_amount": 8000.0,
                    "front_and_back_load_amount": 20000.0,
                    "remarks": "",
                    "insurance_expense": 0.0,
                    "repairs_maintenance_expense": 150.0,
                    "taxes_permits_licenses_expense": 0.0,
                    "salaries_allowance": 700.0
                }],
                "total_trips": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let data = client.trips().await.unwrap();

        assert_eq!(data.total_trips, 1);
        assert_eq!(data.trips.len(), 1);
        assert_eq!(data.trips[0].plate_number, "ABC-123");
        assert_eq!(data.trips[0].front_and_back_load_amount, 20000.0);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/salary/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.salary_accounts().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_retry_reissues_exactly_one_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/salary/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([record_json(1)])))
            .expect(2)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        // First fetch, then a user-initiated retry.
        client.salary_accounts().await.unwrap();
        client.salary_accounts().await.unwrap();
    }

    #[tokio::test]
    async fn test_trucking_accepts_bare_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/trucking/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([record_json(1), record_json(2)])),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let records = client.trucking_accounts().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_trucking_accepts_results_wrapper() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/trucking/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "results": [record_json(7)] })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let records = client.trucking_accounts().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);
    }

    #[tokio::test]
    async fn test_accounts_summary_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/summary/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accounts": {
                    "fuel": {
                        "name": "Fuel & Oil",
                        "total_debit": 5000.0,
                        "total_credit": 0.0,
                        "total_final": 5000.0,
                        "count": 12,
                        "color": "orange"
                    }
                },
                "summary": {
                    "total_debit": 5000.0,
                    "total_credit": 0.0,
                    "total_final": 5000.0,
                    "total_count": 12
                }
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let summary = client.accounts_summary().await.unwrap();
        assert_eq!(summary.accounts.len(), 1);
        assert_eq!(summary.accounts["fuel"].color, "orange");
        assert_eq!(summary.summary.total_count, 12);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
