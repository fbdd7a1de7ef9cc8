//! Reqwest-backed implementation of the product gateway.

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::catalog::error::CatalogError;
use crate::catalog::models::{ApiProduct, Item};

use super::ProductGateway;

/// Gateway that talks to a products API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductGateway {
    client: reqwest::Client,
    base: Url,
}

impl HttpProductGateway {
    /// Builds a gateway for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] when the base URL cannot be
    /// parsed or cannot serve as a base for endpoint paths.
    pub fn new(api_base: &str) -> Result<Self, CatalogError> {
        // Url::join treats a path without a trailing slash as a file and
        // would replace it, so normalise before parsing.
        let normalised = if api_base.ends_with('/') {
            api_base.to_owned()
        } else {
            format!("{api_base}/")
        };
        let base: Url = normalised
            .parse()
            .map_err(|error: url::ParseError| CatalogError::InvalidBaseUrl(error.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(api_base.to_owned()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base
            .join(path)
            .map_err(|error| CatalogError::InvalidBaseUrl(error.to_string()))
    }

    async fn get(&self, endpoint: Url) -> Result<reqwest::Response, CatalogError> {
        self.client
            .get(endpoint)
            .send()
            .await
            .map_err(|error| CatalogError::Network {
                message: error.to_string(),
            })
    }
}

/// Maps a non-success response into an API error with its status and body.
async fn api_error(response: reqwest::Response) -> CatalogError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "no response body".to_owned());
    CatalogError::Api {
        status: Some(status),
        message,
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, CatalogError> {
    response
        .json::<T>()
        .await
        .map_err(|error| CatalogError::Decode {
            message: error.to_string(),
        })
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list_products(&self) -> Result<Vec<Item>, CatalogError> {
        let endpoint = self.endpoint("products/")?;
        let response = self.get(endpoint).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let products: Vec<ApiProduct> = decode(response).await?;
        Ok(products.into_iter().map(Item::from).collect())
    }

    async fn product(&self, id: u64) -> Result<Item, CatalogError> {
        let endpoint = self.endpoint(&format!("products/{id}"))?;
        let response = self.get(endpoint).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { id });
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let product: ApiProduct = decode(response).await?;
        Ok(Item::from(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_without_trailing_slash_is_normalised() {
        let gateway = HttpProductGateway::new("http://localhost:8000")
            .unwrap_or_else(|error| panic!("gateway construction failed: {error}"));
        let endpoint = gateway
            .endpoint("products/")
            .unwrap_or_else(|error| panic!("join failed: {error}"));
        assert_eq!(endpoint.as_str(), "http://localhost:8000/products/");
    }

    #[test]
    fn base_url_with_path_keeps_the_path() {
        let gateway = HttpProductGateway::new("http://localhost:8000/api")
            .unwrap_or_else(|error| panic!("gateway construction failed: {error}"));
        let endpoint = gateway
            .endpoint("products/3")
            .unwrap_or_else(|error| panic!("join failed: {error}"));
        assert_eq!(endpoint.as_str(), "http://localhost:8000/api/products/3");
    }

    #[test]
    fn unparsable_base_url_is_rejected() {
        let result = HttpProductGateway::new("not a url");
        assert!(matches!(result, Err(CatalogError::InvalidBaseUrl(_))));
    }
}
