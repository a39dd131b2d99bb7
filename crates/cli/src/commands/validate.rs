use super::output::render_validation;
use crate::cli::{OutputArgs, ValidateTarget};
use carbon_txt_application::use_cases::CarbonTxtValidator;
use carbon_txt_domain::ValidationResult;
use std::io::Read;
use std::process::ExitCode;
use tracing::debug;

pub async fn run_validate(validator: &CarbonTxtValidator, target: ValidateTarget) -> anyhow::Result<ExitCode> {
    let (result, output) = match target {
        ValidateTarget::Domain { domain, output } => (validator.validate_domain(&domain).await, output),
        ValidateTarget::Url { url, output } => (validator.validate_url(&url).await, output),
        ValidateTarget::File { path, output } if path == "-" => {
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            debug!(bytes = contents.len(), "Read carbon.txt from stdin");
            (validator.validate_contents(&contents).await, output)
        }
        ValidateTarget::File { path, output } => (validator.validate_url(&path).await, output),
    };

    print_result(&result, output)?;
    Ok(exit_code(&result))
}

fn print_result(result: &ValidationResult, output: OutputArgs) -> anyhow::Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_validation(result)?);
    }
    Ok(())
}

pub fn exit_code(result: &ValidationResult) -> ExitCode {
    if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
