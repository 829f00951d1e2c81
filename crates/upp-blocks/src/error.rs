//! Error types for upp-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A block body failed to parse in its resolved format.
    #[error("Invalid {format} parse {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// A `lang` tag named a format with no parser.
    #[error("Unknown block lang: {lang}")]
    UnknownLang { lang: String },
}
