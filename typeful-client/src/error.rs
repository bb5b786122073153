use miette::Diagnostic;
use thiserror::Error;

/// Result type for client operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("request to '{url}' failed")]
    #[diagnostic(help("check your network connection and the configured host"))]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("the API rejected the request with status {status}: {message}")]
    #[diagnostic(help("verify the space id, environment and access token"))]
    Api { status: u16, message: String },

    #[error("could not decode the content-type listing")]
    #[diagnostic(help(
        "the host may not be a Content Delivery API endpoint; expected cdn.contentful.com or preview.contentful.com"
    ))]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    pub(crate) fn transport(url: impl Into<String>, source: reqwest::Error) -> Box<Self> {
        Box::new(Self::Transport {
            url: url.into(),
            source,
        })
    }

    pub(crate) fn api(status: u16, message: impl Into<String>) -> Box<Self> {
        Box::new(Self::Api {
            status,
            message: message.into(),
        })
    }

    pub(crate) fn decode(source: reqwest::Error) -> Box<Self> {
        Box::new(Self::Decode { source })
    }
}
