// https://brasilapi.com.br/docs#tag/CEP

pub mod models;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::CepResponse;

pub const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br";

#[derive(Debug, Error)]
pub enum CepError {
    #[error("CEP inválido.")]
    Invalid,

    #[error("CEP não encontrado.")]
    NotFound,

    #[error("Serviço de busca de CEP indisponível no momento.")]
    Unavailable,

    #[error("Não foi possível buscar o CEP. Verifique sua conexão com a internet.")]
    Connection(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct BrasilApiOptions {
    pub base_url: String,
}

impl Default for BrasilApiOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrasilApiService {
    options: BrasilApiOptions,
    client: Client,
}

/// Keep only the digits of a CEP and require exactly eight of them.
pub fn normalize_cep(cep: &str) -> Result<String, CepError> {
    let digits: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return Err(CepError::Invalid);
    }
    Ok(digits)
}

impl BrasilApiService {
    pub fn new(options: BrasilApiOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    pub async fn lookup_cep(&self, cep: &str) -> Result<CepResponse, CepError> {
        let cep = normalize_cep(cep)?;

        let url = format!(
            "{base}/api/cep/v1/{cep}",
            base = self.options.base_url.trim_end_matches('/'),
            cep = cep
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CepError::Connection)?;

        match response.status() {
            status if status.is_success() => response
                .json::<CepResponse>()
                .await
                .map_err(|_| CepError::Unavailable),
            StatusCode::NOT_FOUND => Err(CepError::NotFound),
            _ => Err(CepError::Unavailable),
        }
    }
}
