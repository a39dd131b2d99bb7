use carbon_txt_application::use_cases::{CarbonTxtFinder, CarbonTxtValidator, FinderConfig};
use carbon_txt_domain::Config;
use carbon_txt_infrastructure::{
    builtin_registry, HickoryTxtLookup, PublicSuffixListAdapter, ReqwestHttpProbe,
    TokioLocalFiles, TomlCarbonTxtParser,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Wired-up finder and validator for one process.
pub struct Services {
    pub finder: Arc<CarbonTxtFinder>,
    pub validator: Arc<CarbonTxtValidator>,
}

impl Services {
    pub async fn build(config: &Config) -> anyhow::Result<Self> {
        let dns = Arc::new(HickoryTxtLookup::from_config(&config.dns)?);
        let http = Arc::new(ReqwestHttpProbe::from_config(&config.http)?);
        let suffixes = Arc::new(PublicSuffixListAdapter::from_config(config)?);

        let finder = Arc::new(CarbonTxtFinder::new(
            FinderConfig::from_config(config),
            dns,
            http,
            Arc::new(TokioLocalFiles::new()),
            suffixes,
        ));

        if config.resolver.refresh_public_suffix_list {
            if let Err(e) = finder.refresh_public_suffix_list().await {
                warn!(error = %e, "Using the built-in public suffix list");
            }
        }

        let registry = builtin_registry()?;
        let processors = registry.activate(&config.plugins.active)?;
        info!(
            available = ?registry.names(),
            active = ?config.plugins.active,
            "Document processors loaded"
        );

        let validator = Arc::new(CarbonTxtValidator::new(
            finder.clone(),
            Arc::new(TomlCarbonTxtParser::new()),
            processors,
        ));

        Ok(Self { finder, validator })
    }
}
