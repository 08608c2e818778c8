#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("reqwest error")]
    Request(#[from] reqwest::Error),
    #[error("http status {0}")]
    Http(u16, String),
    #[error("api status {0}")]
    ApiStatus(u64),
    #[error("malformed xml: {0}")]
    Parse(String),
    #[error("cannot coerce {field} from {raw:?}")]
    Coercion { field: &'static str, raw: String },
    #[error("missing field {0}")]
    MissingField(&'static str),
    #[error("url parse failed")]
    Url(#[from] url::ParseError),
    #[error("base url cannot carry a path: {0}")]
    BaseUrl(String),
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
