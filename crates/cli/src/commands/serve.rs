use crate::server::start_web_server;
use carbon_txt_api::AppState;
use carbon_txt_application::use_cases::CarbonTxtValidator;
use carbon_txt_domain::config::ServerConfig;
use std::process::ExitCode;
use std::sync::Arc;

pub async fn run_serve(validator: Arc<CarbonTxtValidator>, server: &ServerConfig) -> anyhow::Result<ExitCode> {
    start_web_server(server, AppState::new(validator)).await?;
    Ok(ExitCode::SUCCESS)
}
