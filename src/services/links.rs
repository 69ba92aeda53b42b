//! Link management service.
//!
//! Business logic shared by the HTTP API handlers and the page views:
//! validation, code generation, and delegation to the link store.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{LinkletError, Result};
use crate::repository::{Link, LinkStore};
use crate::utils::url_validator::validate_url;
use crate::utils::{CODE_MIN_LEN, generate_random_code, validate_code};

/// Attempts at generate-and-insert before a collision surfaces as a
/// conflict. With a 62^6 code space a second attempt is already rare.
const GENERATE_ATTEMPTS: usize = 3;

/// Request to create a new link. An empty or missing code means one is
/// generated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkRequest {
    pub target_url: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Wire form of a link, timestamps as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<String>,
}

impl From<&Link> for LinkRecord {
    fn from(link: &Link) -> Self {
        LinkRecord {
            code: link.code.clone(),
            target_url: link.target_url.clone(),
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// Result of link creation.
#[derive(Debug, Clone)]
pub struct LinkCreateResult {
    pub link: Link,
    /// Whether the code was auto-generated.
    pub generated_code: bool,
}

pub struct LinkService;

impl LinkService {
    pub async fn create_link(
        store: &dyn LinkStore,
        request: &CreateLinkRequest,
    ) -> Result<LinkCreateResult> {
        validate_url(&request.target_url)
            .map_err(|e| LinkletError::validation(e.to_string()))?;

        let custom_code = request
            .code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        if let Some(code) = custom_code {
            validate_code(code)?;
            let link = store.create(code, &request.target_url).await?;
            info!("Created link {} -> {}", link.code, link.target_url);
            return Ok(LinkCreateResult {
                link,
                generated_code: false,
            });
        }

        // Generated codes are not pre-checked for uniqueness; a collision
        // shows up as a duplicate at insert and we draw again.
        let mut attempt = 0;
        loop {
            let code = generate_random_code(CODE_MIN_LEN);
            match store.create(&code, &request.target_url).await {
                Ok(link) => {
                    info!("Created link {} -> {}", link.code, link.target_url);
                    return Ok(LinkCreateResult {
                        link,
                        generated_code: true,
                    });
                }
                Err(LinkletError::DuplicateCode(_)) if attempt + 1 < GENERATE_ATTEMPTS => {
                    attempt += 1;
                    debug!("Generated code collision, retrying ({})", attempt);
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub async fn list_links(store: &dyn LinkStore, filter: Option<&str>) -> Result<Vec<Link>> {
        store.list(filter).await
    }

    pub async fn get_link(store: &dyn LinkStore, code: &str) -> Result<Link> {
        store.get(code).await
    }

    pub async fn delete_link(store: &dyn LinkStore, code: &str) -> Result<()> {
        store.delete(code).await
    }
}
