use crate::surface::Hook;
use thiserror::Error;

/// Errors raised by the page core and its configuration layer.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// A bound surface is absent from the host. `apply_locale` reports this
    /// instead of returning it.
    #[error("missing UI hook: {0}")]
    MissingUiHook(Hook),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PageError>;
