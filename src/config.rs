pub const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";
pub const DEFAULT_AMOUNT: u32 = 50;
/// La API no devuelve más de 50 preguntas por petición.
pub const MAX_AMOUNT: u32 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    pub endpoint: String,
    pub amount: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            amount: DEFAULT_AMOUNT,
        }
    }
}

impl SourceConfig {
    /// Construye la configuración a partir de valores opcionales; los vacíos o
    /// inválidos caen en los valores por defecto.
    pub fn from_overrides(endpoint: Option<String>, amount: Option<String>) -> Self {
        let endpoint = endpoint
            .as_deref()
            .and_then(normalize_value)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let amount = amount
            .as_deref()
            .and_then(normalize_value)
            .and_then(|v| v.parse::<u32>().ok())
            .map(|n| n.clamp(1, MAX_AMOUNT))
            .unwrap_or(DEFAULT_AMOUNT);
        Self { endpoint, amount }
    }

    pub fn request_url(&self) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}amount={}", self.endpoint, sep, self.amount)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve() -> Self {
        Self::from_overrides(
            std::env::var("TRIVIA_ENDPOINT").ok(),
            std::env::var("TRIVIA_AMOUNT").ok(),
        )
    }

    #[cfg(target_arch = "wasm32")]
    pub fn resolve() -> Self {
        let endpoint = option_env!("TRIVIA_ENDPOINT")
            .map(str::to_string)
            .or_else(|| value_from_querystring("trivia_endpoint"))
            .or_else(value_from_meta);
        let amount = value_from_querystring("trivia_amount");
        Self::from_overrides(endpoint, amount)
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn value_from_querystring(wanted: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if key == wanted {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            return decoded.as_string();
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn value_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='trivia-endpoint']")
        .ok()??;
    meta.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_request_fifty_questions() {
        let config = SourceConfig::default();
        assert_eq!(config.request_url(), "https://opentdb.com/api.php?amount=50");
    }

    #[test]
    fn blank_or_invalid_overrides_fall_back() {
        let config = SourceConfig::from_overrides(Some("   ".into()), Some("many".into()));
        assert_eq!(config, SourceConfig::default());
    }

    #[test]
    fn amount_is_clamped_to_api_limits() {
        let config = SourceConfig::from_overrides(None, Some("500".into()));
        assert_eq!(config.amount, 50);
        let config = SourceConfig::from_overrides(None, Some("0".into()));
        assert_eq!(config.amount, 1);
    }

    #[test]
    fn endpoint_with_query_appends_amount() {
        let config = SourceConfig::from_overrides(
            Some(" http://localhost:9000/api.php?category=9 ".into()),
            Some("10".into()),
        );
        assert_eq!(
            config.request_url(),
            "http://localhost:9000/api.php?category=9&amount=10"
        );
    }
}
