use http::{
    header::{HeaderName, CONTENT_LENGTH},
    HeaderValue,
};

use crate::{
    head_parser::{HeadParseConfig, HeadParseError},
    request_head::HeaderField,
    COLON, HTAB, SP,
};

//
//
//
#[derive(Debug, Default)]
pub struct HeaderFieldParser {
    config: HeadParseConfig,
    n_parsed_bytes: usize,
}

impl HeaderFieldParser {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: HeadParseConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Parses one `name: value` line, CRLF already stripped.
    ///
    /// `line_len` is the raw length including CRLF and counts against the
    /// header block limit.
    pub fn parse(&mut self, line: &[u8], line_len: usize) -> Result<HeaderField, HeadParseError> {
        if line_len > self.config.get_header_max_len() {
            return Err(HeadParseError::TooLongHeader);
        }
        self.n_parsed_bytes += line_len;
        if self.n_parsed_bytes > self.config.get_headers_max_len() {
            return Err(HeadParseError::TooLongHeaders);
        }

        let colon_index = line
            .iter()
            .position(|x| x == &COLON)
            .ok_or(HeadParseError::MalformedHeaderField)?;
        let name = &line[..colon_index];
        let value = trim_whitespace(&line[colon_index + 1..]);

        // HeaderName rejects whitespace and lower-cases the rest.
        let name =
            HeaderName::from_bytes(name).map_err(|_| HeadParseError::MalformedHeaderField)?;
        // HeaderValue rejects CR, LF and other control bytes except HTAB.
        let value =
            HeaderValue::from_bytes(value).map_err(|_| HeadParseError::MalformedHeaderField)?;

        if name == CONTENT_LENGTH && !is_content_length(value.as_bytes()) {
            return Err(HeadParseError::MalformedHeaderField);
        }

        Ok(HeaderField { name, value })
    }

    /// Checks the limits for a line that has not been terminated yet.
    pub fn check_partial(&self, n_buffered: usize) -> Result<(), HeadParseError> {
        if n_buffered > self.config.get_header_max_len() {
            return Err(HeadParseError::TooLongHeader);
        }
        if self.n_parsed_bytes + n_buffered > self.config.get_headers_max_len() {
            return Err(HeadParseError::TooLongHeaders);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.n_parsed_bytes = 0;
    }
}

fn is_content_length(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

fn trim_whitespace(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if *first != SP && *first != HTAB {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if *last != SP && *last != HTAB {
            break;
        }
        bytes = rest;
    }
    bytes
}
