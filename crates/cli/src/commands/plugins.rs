use super::output::render_plugins;
use carbon_txt_application::use_cases::CarbonTxtValidator;
use std::process::ExitCode;

pub fn run_plugins(validator: &CarbonTxtValidator) -> anyhow::Result<ExitCode> {
    eprint!("{}", render_plugins(&validator.active_processors())?);
    Ok(ExitCode::SUCCESS)
}
