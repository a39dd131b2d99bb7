use axum::Json;
use carbon_txt_domain::CarbonTxtFile;
use serde_json::Value;

pub async fn json_schema() -> Json<Value> {
    Json(CarbonTxtFile::json_schema())
}
