use carbon_txt_domain::CarbonTxtFile;
use std::process::ExitCode;

pub fn run_schema() -> anyhow::Result<ExitCode> {
    eprintln!("JSON Schema for a carbon.txt file:\n");
    println!("{}", serde_json::to_string_pretty(&CarbonTxtFile::json_schema())?);
    Ok(ExitCode::SUCCESS)
}
