use std::fmt;

use http::{header::HeaderName, HeaderMap, HeaderValue, Method, Request, Uri, Version};

use crate::head_parser::HeadParseError;

//
//
//
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpVersion {
    pub major: u8,
    pub minor: u8,
}
impl HttpVersion {
    pub const HTTP_10: Self = Self::new(1, 0);
    pub const HTTP_11: Self = Self::new(1, 1);

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// The matching `http::Version`, if `http` knows about it.
    pub fn to_http_version(&self) -> Option<Version> {
        match (self.major, self.minor) {
            (0, 9) => Some(Version::HTTP_09),
            (1, 0) => Some(Version::HTTP_10),
            (1, 1) => Some(Version::HTTP_11),
            (2, 0) => Some(Version::HTTP_2),
            (3, 0) => Some(Version::HTTP_3),
            _ => None,
        }
    }
}
impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

//
//
//
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// Request target as sent, not interpreted.
    pub target: Vec<u8>,
    pub version: HttpVersion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    /// Lower-cased field name.
    pub name: HeaderName,
    /// Field value without surrounding whitespace.
    pub value: HeaderValue,
}

//
//
//
/// A parsed request line plus its header fields in arrival order.
///
/// Repeated field names are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub line: RequestLine,
    pub fields: Vec<HeaderField>,
}

impl RequestHead {
    pub fn method(&self) -> &Method {
        &self.line.method
    }
    pub fn target(&self) -> &[u8] {
        &self.line.target
    }
    pub fn version(&self) -> HttpVersion {
        self.line.version
    }
    pub fn fields(&self) -> &[HeaderField] {
        &self.fields
    }

    /// First value of the field `name`, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.fields
            .iter()
            .find(|x| x.name.as_str().eq_ignore_ascii_case(name))
            .map(|x| &x.value)
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a HeaderValue> + 'a {
        self.fields
            .iter()
            .filter(move |x| x.name.as_str().eq_ignore_ascii_case(name))
            .map(|x| &x.value)
    }

    pub fn to_header_map(&self) -> HeaderMap<HeaderValue> {
        let mut headers = HeaderMap::with_capacity(self.fields.len());
        for field in &self.fields {
            headers.append(field.name.to_owned(), field.value.to_owned());
        }
        headers
    }

    /// Converts into an `http::Request` with an empty body.
    ///
    /// Fails if the target is not a valid `Uri` or the version is unknown to
    /// `http`.
    pub fn into_request(self) -> Result<Request<()>, HeadParseError> {
        let uri = Uri::try_from(self.line.target.as_slice())
            .map_err(|_| HeadParseError::MalformedRequestLine)?;
        let version = self
            .line
            .version
            .to_http_version()
            .ok_or(HeadParseError::MalformedVersion)?;
        let headers = self.to_header_map();

        let mut request = Request::new(());
        *request.method_mut() = self.line.method;
        *request.uri_mut() = uri;
        *request.version_mut() = version;
        *request.headers_mut() = headers;

        Ok(request)
    }
}
