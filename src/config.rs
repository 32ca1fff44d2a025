//! Runtime configuration for one bind run.

use tracing::{debug, info};

use crate::bind::BindRequest;

/// Fully resolved configuration: where the API lives, how to authenticate,
/// and what to bind. Built by [`crate::load_config::load_config`].
#[derive(Debug)]
pub struct BinderConfig {
    pub api_url: String,
    pub auth_key: String,
    pub request: BindRequest,
}

impl BinderConfig {
    pub fn trace_loaded(&self) {
        info!(
            api_url = %self.api_url,
            unit_id = %self.request.unit_id,
            output_dir = %self.request.output_dir.display(),
            output_name = %self.request.output_name,
            "Loaded BinderConfig"
        );
        // The key itself never reaches the logs.
        debug!(auth_key_len = self.auth_key.len(), "authorization key present");
    }
}
