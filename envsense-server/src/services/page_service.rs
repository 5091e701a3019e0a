use std::borrow::Cow;
use std::path::PathBuf;

use crate::configs::Dashboard;
use crate::errors::PageError;

const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// Produces the dashboard document for every page route.
#[derive(Debug, Clone, Default)]
pub struct PageService {
    template_path: Option<PathBuf>,
}

impl PageService {
    pub fn new(dashboard: &Dashboard) -> Self {
        Self {
            template_path: dashboard.template_path.as_ref().map(PathBuf::from),
        }
    }

    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn from_template(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: Some(template_path.into()),
        }
    }

    pub async fn render(&self) -> Result<Cow<'static, str>, PageError> {
        let document = match &self.template_path {
            Some(path) => Cow::Owned(tokio::fs::read_to_string(path).await.map_err(|source| {
                PageError::TemplateRead {
                    path: path.display().to_string(),
                    source,
                }
            })?),
            None => Cow::Borrowed(DASHBOARD_HTML),
        };

        if document.trim().is_empty() {
            return Err(PageError::EmptyDocument);
        }

        Ok(document)
    }
}
