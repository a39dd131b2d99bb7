use serde::{Deserialize, Serialize};

/// Document processors to run over each disclosure of a valid file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PluginsConfig {
    /// Names of statically registered processors, in run order.
    #[serde(default)]
    pub active: Vec<String>,
}
