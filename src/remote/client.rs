//! Blocking HTTP client for the design-tool REST API.
//!
//! One GET per endpoint, authenticated with a static token header. There is
//! no retry layer: any non-success response aborts the run.

use serde::de::DeserializeOwned;

use crate::error::{RemoteError, RemoteResult};
use crate::remote::DesignSource;
use crate::remote::model::{
    ComponentSetsResponse, ComponentsResponse, RemoteComponent, RemoteComponentSet,
};

/// Characters of an error response body kept in diagnostics.
const MAX_ERROR_BODY: usize = 200;

const TOKEN_HEADER: &str = "X-Figma-Token";

/// Client bound to one published library file.
pub struct FigmaClient {
    api_base: String,
    file_key: String,
    token: String,
    http: ureq::Agent,
}

impl FigmaClient {
    pub fn new(api_base: &str, file_key: &str, token: String) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            file_key: file_key.to_string(),
            token,
            http: ureq::Agent::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> RemoteResult<T> {
        let url = format!("{}{endpoint}", self.api_base);
        tracing::debug!(%url, "remote GET");

        match self.http.get(&url).set(TOKEN_HEADER, &self.token).call() {
            Ok(resp) => resp.into_json().map_err(|e| RemoteError::Decode {
                endpoint: endpoint.to_string(),
                message: format!("failed to parse JSON: {e}"),
            }),
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(RemoteError::Status {
                    code,
                    endpoint: endpoint.to_string(),
                    body: truncate_body(&body),
                })
            }
            Err(ureq::Error::Transport(transport)) => Err(RemoteError::Transport {
                endpoint: endpoint.to_string(),
                message: transport.to_string(),
            }),
        }
    }
}

impl DesignSource for FigmaClient {
    fn fetch_components(&self) -> RemoteResult<Vec<RemoteComponent>> {
        let resp: ComponentsResponse =
            self.get_json(&format!("/files/{}/components", self.file_key))?;
        Ok(resp.meta.components)
    }

    fn fetch_component_sets(&self) -> RemoteResult<Vec<RemoteComponentSet>> {
        let resp: ComponentSetsResponse =
            self.get_json(&format!("/files/{}/component_sets", self.file_key))?;
        Ok(resp.meta.component_sets)
    }
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}
