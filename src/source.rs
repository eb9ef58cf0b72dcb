use crate::config::SourceConfig;
use crate::data::parse_questions;
use crate::model::Question;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("trivia API answered HTTP {0}")]
    Status(u16),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload has no `results` list")]
    MissingResults,
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(config: &SourceConfig) -> Result<Vec<Question>, FetchError> {
    use reqwest::header::USER_AGENT;

    let url = config.request_url();
    log::debug!("GET {url}");

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(&url)
        .header(USER_AGENT, concat!("trivia-insights/", env!("CARGO_PKG_VERSION")))
        .send()
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    parse_questions(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(config: &SourceConfig) -> Result<Vec<Question>, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let url = config.request_url();
    log::debug!("GET {url}");

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window =
        web_sys::window().ok_or_else(|| FetchError::Transport("no window object".into()))?;
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|err| FetchError::Transport(format!("{err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| FetchError::Transport(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Transport("fetch did not yield a Response".into()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let promise = response
        .text()
        .map_err(|err| FetchError::Transport(format!("{err:?}")))?;
    let body = JsFuture::from(promise)
        .await
        .map_err(|err| FetchError::Transport(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| FetchError::Transport("response body is not text".into()))?;

    parse_questions(&body)
}
