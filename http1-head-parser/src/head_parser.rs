use std::{cmp, error, fmt, io};

use http::StatusCode;

use crate::request_head::RequestHead;

//
//
//
const REQUEST_LINE_MAX_LEN: usize = 16384;
const HEADERS_MAX_LEN: usize = 65536;

//
//
//
#[derive(Debug, Clone)]
pub struct HeadParseConfig {
    request_line_max_len: usize,
    uri_max_len: usize,
    header_max_len: usize,
    headers_max_len: usize,
}
impl Default for HeadParseConfig {
    fn default() -> Self {
        HeadParseConfig {
            // METHOD SP URI SP VERSION CRLF
            request_line_max_len: 8 + 1 + 1024 + 1 + 8 + 2,
            uri_max_len: 1024,
            header_max_len: 8192,
            headers_max_len: 8192,
        }
    }
}
impl HeadParseConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn buf_capacity(&self) -> usize {
        cmp::min(
            self.get_request_line_max_len() + self.get_header_max_len(),
            4096,
        )
    }

    pub fn set_request_line_max_len(&mut self, value: u16) -> &mut Self {
        self.request_line_max_len = cmp::min(value as usize, REQUEST_LINE_MAX_LEN);
        self
    }
    pub fn get_request_line_max_len(&self) -> usize {
        self.request_line_max_len
    }
    pub fn set_uri_max_len(&mut self, value: u16) -> &mut Self {
        self.uri_max_len = value as usize;
        self
    }
    pub fn get_uri_max_len(&self) -> usize {
        self.uri_max_len
    }
    pub fn set_header_max_len(&mut self, value: u16) -> &mut Self {
        self.header_max_len = value as usize;
        self
    }
    pub fn get_header_max_len(&self) -> usize {
        self.header_max_len
    }
    pub fn set_headers_max_len(&mut self, value: u32) -> &mut Self {
        self.headers_max_len = cmp::min(value as usize, HEADERS_MAX_LEN);
        self
    }
    pub fn get_headers_max_len(&self) -> usize {
        self.headers_max_len
    }
}

//
//
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    AwaitingRequestLine,
    AwaitingHeaders,
    Done,
    Failed,
}
impl Default for ParserState {
    fn default() -> Self {
        Self::AwaitingRequestLine
    }
}
impl ParserState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseEvent {
    /// The head is not complete yet.
    NeedMore,
    /// `body_offset` is where the body starts, counted from the first byte
    /// ever fed to the parser.
    Complete {
        head: RequestHead,
        body_offset: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadParseError {
    MalformedRequestLine,
    MalformedVersion,
    MalformedHeaderField,
    ParserReused,
    TooLongRequestLine,
    TooLongUri,
    TooLongHeader,
    TooLongHeaders,
}
impl HeadParseError {
    /// The status a server should answer this error with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedRequestLine | Self::MalformedVersion | Self::MalformedHeaderField => {
                StatusCode::BAD_REQUEST
            }
            Self::TooLongRequestLine => StatusCode::BAD_REQUEST,
            Self::TooLongUri => StatusCode::URI_TOO_LONG,
            Self::TooLongHeader | Self::TooLongHeaders => {
                StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE
            }
            Self::ParserReused => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
impl fmt::Display for HeadParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl error::Error for HeadParseError {}
impl From<HeadParseError> for io::Error {
    fn from(err: HeadParseError) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_setters_are_capped() {
        let mut config = HeadParseConfig::new();
        config
            .set_request_line_max_len(u16::MAX)
            .set_headers_max_len(u32::MAX)
            .set_uri_max_len(16);

        assert_eq!(config.get_request_line_max_len(), REQUEST_LINE_MAX_LEN);
        assert_eq!(config.get_headers_max_len(), HEADERS_MAX_LEN);
        assert_eq!(config.get_uri_max_len(), 16);
        assert_eq!(config.get_header_max_len(), 8192);
        assert_eq!(config.buf_capacity(), 4096);
    }

    #[test]
    fn status_code() {
        assert_eq!(
            HeadParseError::MalformedVersion.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HeadParseError::TooLongUri.status_code(),
            StatusCode::URI_TOO_LONG
        );
        assert_eq!(
            HeadParseError::TooLongHeaders.status_code(),
            StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE
        );
    }

    #[test]
    fn into_io_error() {
        let err: io::Error = HeadParseError::MalformedHeaderField.into();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "MalformedHeaderField");
    }
}
