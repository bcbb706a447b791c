use crate::domain::{ModelApiConfig, ReportTemplates, TemplateRenderer};
use crate::ports::ChatModel;

/// Application context holding dependencies for command execution.
pub struct AppContext<M: ChatModel, R: TemplateRenderer> {
    model: M,
    renderer: R,
    templates: ReportTemplates,
    model_config: ModelApiConfig,
}

impl<M: ChatModel, R: TemplateRenderer> AppContext<M, R> {
    /// Create a new application context.
    pub fn new(
        model: M,
        renderer: R,
        templates: ReportTemplates,
        model_config: ModelApiConfig,
    ) -> Self {
        Self { model, renderer, templates, model_config }
    }

    /// Get a reference to the chat model client.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the report prompt templates.
    pub fn templates(&self) -> &ReportTemplates {
        &self.templates
    }

    /// Get the model configuration.
    pub fn model_config(&self) -> &ModelApiConfig {
        &self.model_config
    }
}
