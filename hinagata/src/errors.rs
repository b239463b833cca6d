use crate::TemplateKey;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render template '{key}'")]
    Template {
        key: TemplateKey,
        #[source]
        source: tera::Error,
    },

    #[error("failed to serialize package manifest")]
    Manifest(#[from] serde_json::Error),
}
