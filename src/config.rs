//! Portal, browser and completion configuration.
//!
//! Defaults target the INPI pePI basic search; every endpoint and field name
//! can be overridden through the environment so the same pipeline can be
//! pointed at a staging mirror or a mock server.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_COMPLETION_TIMEOUT_MS: u64 = 60_000;

/// Endpoints and form-field names of the target search portal.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Page carrying the search form and its hidden session state.
    pub form_url: String,
    /// Servlet the form posts to.
    pub submit_url: String,
    /// Source identifier stamped onto every extracted record.
    pub source: String,
    /// Name of the free-text query input.
    pub query_field: String,
    /// Name of the search-type select.
    pub search_type_field: String,
    /// Value selecting the basic search.
    pub search_type_value: String,
    /// Name of the submit button input.
    pub submit_field: String,
    /// Value of the submit button input.
    pub submit_value: String,
    /// Bound applied to every HTTP call and browser navigation step.
    pub timeout: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            form_url: "https://busca.inpi.gov.br/pePI/jsp/patentes/PatenteSearchBasico.jsp"
                .to_string(),
            submit_url: "https://busca.inpi.gov.br/pePI/servlet/PatenteServletController"
                .to_string(),
            source: "INPI".to_string(),
            query_field: "textoPesquisa".to_string(),
            search_type_field: "tipoSearchBas".to_string(),
            search_type_value: "1".to_string(),
            submit_field: "searchBasico".to_string(),
            submit_value: "Pesquisar".to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl PortalConfig {
    /// Defaults with `PATRAWL_FORM_URL`, `PATRAWL_SUBMIT_URL` and
    /// `PATRAWL_TIMEOUT_MS` overrides applied.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = std::env::var("PATRAWL_FORM_URL") {
            cfg.form_url = url;
        }
        if let Ok(url) = std::env::var("PATRAWL_SUBMIT_URL") {
            cfg.submit_url = url;
        }
        if let Some(ms) = env_ms("PATRAWL_TIMEOUT_MS") {
            cfg.timeout = Duration::from_millis(ms);
        }
        cfg
    }
}

/// Headless-browser settings for the rendering strategy.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Explicit browser binary; when `None` the binary is probed from PATH.
    pub browser_path: Option<PathBuf>,
    /// Viewport size the portal's JSP layout is known to behave under.
    pub window: (u32, u32),
    /// Bound applied to every navigation/interaction step.
    pub timeout: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            browser_path: None,
            window: (1920, 1080),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl RenderConfig {
    /// Defaults with a `PATRAWL_BROWSER_PATH` override applied.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(path) = std::env::var("PATRAWL_BROWSER_PATH") {
            cfg.browser_path = Some(PathBuf::from(path));
        }
        if let Some(ms) = env_ms("PATRAWL_TIMEOUT_MS") {
            cfg.timeout = Duration::from_millis(ms);
        }
        cfg
    }
}

/// Settings for the OpenAI-compatible text-completion endpoint.
///
/// Low temperature and bounded length keep the extraction step as
/// deterministic as a sampled model allows.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            api_key: None,
            model: "llama-3.1-70b-versatile".to_string(),
            temperature: 0.1,
            max_tokens: 4000,
            timeout: Duration::from_millis(DEFAULT_COMPLETION_TIMEOUT_MS),
        }
    }
}

impl CompletionConfig {
    /// Defaults with `GROQ_API_KEY`, `PATRAWL_COMPLETION_URL` and
    /// `PATRAWL_COMPLETION_MODEL` overrides applied.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            cfg.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("PATRAWL_COMPLETION_URL") {
            cfg.api_url = url;
        }
        if let Ok(model) = std::env::var("PATRAWL_COMPLETION_MODEL") {
            cfg.model = model;
        }
        cfg
    }
}

fn env_ms(var: &str) -> Option<u64> {
    std::env::var(var).ok().and_then(|v| v.parse().ok())
}
