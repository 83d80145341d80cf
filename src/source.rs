use std::path::PathBuf;

use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Where the JSON data files live.
#[derive(Debug, Clone)]
pub enum Source {
    Http { client: Client, base: Url },
    Dir(PathBuf),
}

impl Source {
    /// `http://` and `https://` bases are fetched over the network, anything else is a directory.
    pub fn from_base(base: &str) -> Result<Self> {
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Ok(Source::Dir(PathBuf::from(base)));
        }

        let mut base = Url::parse(base).map_err(|_| Error::InvalidBase(base.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Source::Http {
            client: Client::new(),
            base,
        })
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.fetch_bytes(path).await?;
        serde_json::from_slice(&bytes).map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>> {
        match self {
            Source::Http { client, base } => {
                let url = base
                    .join(path)
                    .map_err(|_| Error::InvalidBase(format!("{base}{path}")))?;

                debug!("Sending HTTP request to {url}");
                let resp = client.get(url).send().await.map_err(|source| Error::Request {
                    path: path.to_string(),
                    source,
                })?;

                let status = resp.status();
                if !status.is_success() {
                    return Err(Error::Status {
                        path: path.to_string(),
                        status,
                    });
                }

                debug!("Reading response body of {path}");
                let body = resp.bytes().await.map_err(|source| Error::Request {
                    path: path.to_string(),
                    source,
                })?;
                Ok(body.to_vec())
            }
            Source::Dir(root) => {
                let file = root.join(path);
                debug!("Reading {}", file.display());
                tokio::fs::read(&file).await.map_err(|source| Error::Io {
                    path: path.to_string(),
                    source,
                })
            }
        }
    }
}
