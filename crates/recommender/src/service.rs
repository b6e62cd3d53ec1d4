//! Per-request composition: assemble the prompt, call the completion
//! endpoint, normalize the reply.

use std::sync::Arc;

use log::{debug, info};

use chat_core::{ChatTurn, Config, MenuCatalog, Recommendation};
use llm_client::api::models::ChatCompletionRequest;
use llm_client::{CompletionClient, LlmConfig, OpenAiClient};

use crate::error::RecommenderError;
use crate::{normalize, prompt};

pub struct RecommendationService {
    catalog: Arc<MenuCatalog>,
    system_template: String,
    menu_json: String,
    llm: LlmConfig,
    client: Arc<dyn CompletionClient>,
}

impl std::fmt::Debug for RecommendationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationService")
            .field("catalog", &self.catalog)
            .field("system_template", &self.system_template)
            .field("menu_json", &self.menu_json)
            .field("llm", &self.llm)
            .field("client", &"<dyn CompletionClient>")
            .finish()
    }
}

impl RecommendationService {
    /// Wire the service from preloaded parts. Used directly by tests that
    /// substitute a stub completion client.
    pub fn new(
        catalog: Arc<MenuCatalog>,
        system_template: String,
        llm: LlmConfig,
        client: Arc<dyn CompletionClient>,
    ) -> Result<Self, RecommenderError> {
        let menu_json = catalog.to_json_pretty()?;
        Ok(Self {
            catalog,
            system_template,
            menu_json,
            llm,
            client,
        })
    }

    /// Load catalog, template and endpoint settings from the service
    /// config. Any failure here is fatal at startup, never per-request.
    pub fn from_config(config: &Config) -> Result<Self, RecommenderError> {
        let catalog = MenuCatalog::load(&config.menu_path)?;
        let system_template = std::fs::read_to_string(&config.system_prompt_path).map_err(
            |source| RecommenderError::Template {
                path: config.system_prompt_path.display().to_string(),
                source,
            },
        )?;
        let llm = LlmConfig::load(&config.llm_config_path)?;
        let client = Arc::new(OpenAiClient::new(&llm));
        info!(
            "Recommendation service ready (model={}, menu={})",
            llm.model,
            config.menu_path.display()
        );
        Self::new(Arc::new(catalog), system_template, llm, client)
    }

    /// Run one request through the full pipeline. The caller supplies the
    /// already-trimmed history; the same history feeds intent defaulting in
    /// the normalizer.
    pub async fn recommend(
        &self,
        history: &[ChatTurn],
    ) -> Result<Recommendation, RecommenderError> {
        let messages = prompt::build_messages(&self.system_template, &self.menu_json, history);
        let request = ChatCompletionRequest {
            model: self.llm.model.clone(),
            temperature: self.llm.temperature,
            max_tokens: self.llm.max_tokens,
            messages,
        };

        let reply = self.client.complete(request).await?;
        let raw = reply.trim();
        debug!("Raw completion reply: {raw}");

        normalize::normalize(raw, history, &self.catalog)
    }
}
