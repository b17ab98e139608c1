use http::Method;

use crate::{
    head_parser::{HeadParseConfig, HeadParseError},
    request_head::{HttpVersion, RequestLine},
    DOT, HTTP_VERSION_PREFIX, SP,
};

//
//
//
const HTTP_VERSION_LEN: usize = 8;

#[derive(Debug, Default)]
pub struct RequestLineParser {
    config: HeadParseConfig,
}

impl RequestLineParser {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: HeadParseConfig) -> Self {
        Self { config }
    }

    /// Parses `METHOD SP request-target SP HTTP/d.d`, CRLF already stripped.
    pub fn parse(&self, line: &[u8]) -> Result<RequestLine, HeadParseError> {
        let mut parts = line.split(|x| x == &SP);
        let (method, target, version) = match (parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(target), Some(version)) if parts.next().is_none() => {
                (method, target, version)
            }
            _ => return Err(HeadParseError::MalformedRequestLine),
        };

        let method = Self::parse_method(method)?;
        let target = Self::parse_target(target, &self.config)?;
        let version = Self::parse_http_version(version)?;

        Ok(RequestLine {
            method,
            target,
            version,
        })
    }

    fn parse_method(bytes: &[u8]) -> Result<Method, HeadParseError> {
        if bytes.is_empty() {
            return Err(HeadParseError::MalformedRequestLine);
        }
        Method::from_bytes(bytes).map_err(|_| HeadParseError::MalformedRequestLine)
    }

    fn parse_target(bytes: &[u8], config: &HeadParseConfig) -> Result<Vec<u8>, HeadParseError> {
        if bytes.is_empty() || bytes.iter().any(|x| x.is_ascii_whitespace() || is_ctl(*x)) {
            return Err(HeadParseError::MalformedRequestLine);
        }
        if bytes.len() > config.get_uri_max_len() {
            return Err(HeadParseError::TooLongUri);
        }
        Ok(bytes.to_vec())
    }

    fn parse_http_version(bytes: &[u8]) -> Result<HttpVersion, HeadParseError> {
        if bytes.is_empty() {
            return Err(HeadParseError::MalformedRequestLine);
        }
        match bytes {
            [p @ .., major, DOT, minor]
                if bytes.len() == HTTP_VERSION_LEN
                    && p == HTTP_VERSION_PREFIX
                    && major.is_ascii_digit()
                    && minor.is_ascii_digit() =>
            {
                Ok(HttpVersion::new(major - b'0', minor - b'0'))
            }
            _ => Err(HeadParseError::MalformedVersion),
        }
    }
}

fn is_ctl(b: u8) -> bool {
    b < 0x20 || b == 0x7f
}
