// src/assistant/client.rs

use super::prompt::{GenerateRequest, GenerateResponse};
use super::{EMPTY_REPLY_FALLBACK, ERROR_FALLBACK};
use crate::config::{AssistantConfig, Credential};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("no hay API_KEY configurada")]
    MissingCredential,

    #[error("error de red: {0}")]
    Http(String),

    #[error("el servicio devolvió HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("respuesta JSON inválida: {0}")]
    InvalidResponse(String),

    #[error("el servicio devolvió una respuesta vacía")]
    EmptyResponse,
}

impl AssistantError {
    /// Texto que ve el usuario en el chat en lugar del error.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AssistantError::EmptyResponse => EMPTY_REPLY_FALLBACK,
            _ => ERROR_FALLBACK,
        }
    }
}

pub type GenerateResult = Result<String, AssistantError>;

/// Callback con el resultado. Puede invocarse desde otro hilo.
pub type Reply = Box<dyn FnOnce(GenerateResult) + Send + 'static>;

/// Servicio remoto de generación de texto. `generate` no debe bloquear el hilo de la UI:
/// lanza la petición y entrega el resultado por `reply` cuando llegue.
pub trait TextGenerator {
    fn generate(&self, request: GenerateRequest, reply: Reply);
}

pub fn generate_url(config: &AssistantConfig) -> String {
    format!(
        "{}/models/{}:generateContent",
        config.endpoint.trim_end_matches('/'),
        config.model
    )
}

pub fn parse_reply(body: &str) -> GenerateResult {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|err| AssistantError::InvalidResponse(err.to_string()))?;
    parsed.text().ok_or(AssistantError::EmptyResponse)
}

fn api_key(config: &AssistantConfig) -> Result<String, AssistantError> {
    match &config.api_key {
        Credential::ApiKey(key) => Ok(key.clone()),
        Credential::Missing => Err(AssistantError::MissingCredential),
    }
}

/// Cliente de Gemini (`generateContent`).
pub struct GeminiClient {
    config: AssistantConfig,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TextGenerator for GeminiClient {
    fn generate(&self, request: GenerateRequest, reply: Reply) {
        let http = self.http.clone();
        let config = self.config.clone();
        std::thread::spawn(move || {
            reply(send_blocking(&http, &config, &request));
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn send_blocking(
    http: &reqwest::blocking::Client,
    config: &AssistantConfig,
    request: &GenerateRequest,
) -> GenerateResult {
    let key = api_key(config)?;
    let url = generate_url(config);

    let response = http
        .post(&url)
        .header("x-goog-api-key", key)
        .json(request)
        .send()
        .map_err(|err| AssistantError::Http(err.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|err| AssistantError::Http(err.to_string()))?;

    if !status.is_success() {
        return Err(AssistantError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        });
    }

    parse_reply(&body)
}

#[cfg(target_arch = "wasm32")]
impl TextGenerator for GeminiClient {
    fn generate(&self, request: GenerateRequest, reply: Reply) {
        let config = self.config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            reply(send_fetch(&config, &request).await);
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn send_fetch(config: &AssistantConfig, request: &GenerateRequest) -> GenerateResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let key = api_key(config)?;
    let payload = serde_json::to_string(request)
        .map_err(|err| AssistantError::InvalidResponse(format!("no se pudo serializar la petición: {err}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let window = web_sys::window().ok_or_else(|| AssistantError::Http("no existe window en WASM".into()))?;

    let url = generate_url(config);
    let fetch_request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|err| AssistantError::Http(format!("no se pudo crear el request: {err:?}")))?;
    let headers = fetch_request.headers();
    headers
        .set("Content-Type", "application/json")
        .and_then(|_| headers.set("x-goog-api-key", &key))
        .map_err(|err| AssistantError::Http(format!("no se pudieron asignar headers: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|err| AssistantError::Http(format!("fetch falló: {err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| AssistantError::Http("la respuesta fetch no es un Response".into()))?;

    let text_promise = response
        .text()
        .map_err(|err| AssistantError::Http(format!("{err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| AssistantError::Http("no se pudo leer el body".into()))?;

    if !response.ok() {
        return Err(AssistantError::Status {
            status: response.status(),
            body: text.trim().to_string(),
        });
    }

    parse_reply(&text)
}
