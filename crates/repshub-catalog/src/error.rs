use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog request to {url} timed out")]
    Timeout { url: String },

    #[error("unexpected HTTP status {status} from catalog: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("invalid page request: page {page}, page size {page_size}")]
    InvalidPage { page: u32, page_size: u32 },
}
