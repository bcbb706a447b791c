/// Error during prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAssemblyError {
    /// An embedded prompt template is missing.
    TemplateNotFound(String),

    /// The template uses syntax beyond plain variable substitution.
    TemplateSyntaxNotAllowed { template: String, token: String },

    /// Failed to render a template with the provided context.
    TemplateRenderError { template: String, reason: String },
}

impl std::fmt::Display for PromptAssemblyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(path) => write!(f, "Prompt template not found: {}", path),
            Self::TemplateSyntaxNotAllowed { template, token } => {
                write!(f, "Template {} uses disallowed syntax '{}'", template, token)
            }
            Self::TemplateRenderError { template, reason } => {
                write!(f, "Failed to render template {}: {}", template, reason)
            }
        }
    }
}

impl std::error::Error for PromptAssemblyError {}
