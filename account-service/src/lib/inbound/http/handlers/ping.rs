use axum::http::StatusCode;

use super::ApiSuccess;

pub async fn ping() -> ApiSuccess<()> {
    ApiSuccess::acknowledge(StatusCode::OK, "OK")
}
