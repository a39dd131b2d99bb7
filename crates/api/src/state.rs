use carbon_txt_application::use_cases::CarbonTxtValidator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<CarbonTxtValidator>,
}

impl AppState {
    pub fn new(validator: Arc<CarbonTxtValidator>) -> Self {
        Self { validator }
    }
}
