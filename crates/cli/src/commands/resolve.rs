use super::output::render_resolution;
use crate::cli::OutputArgs;
use carbon_txt_application::use_cases::CarbonTxtFinder;
use carbon_txt_domain::ResolutionTrace;
use serde_json::json;
use std::process::ExitCode;

pub async fn run_resolve(finder: &CarbonTxtFinder, target: &str, output: OutputArgs) -> anyhow::Result<ExitCode> {
    let mut trace = ResolutionTrace::new();
    let result = finder.resolve_domain_or_uri(target, &mut trace).await;

    if output.json {
        let body = match &result {
            Ok(location) => json!({ "success": true, "location": location, "logs": trace }),
            Err(err) => json!({
                "success": false,
                "errors": [{ "kind": err.kind(), "message": err.to_string() }],
                "logs": trace,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_resolution(&result, trace.entries())?);
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
