use std::mem;

use crate::{
    chunk_buffer::ChunkBuffer,
    head_parser::{HeadParseConfig, HeadParseError, ParseEvent, ParserState},
    header_field_parser::HeaderFieldParser,
    line_scanner::{Line, LineScanError, LineScanner},
    log::{debug, warning},
    request_head::{HeaderField, RequestHead, RequestLine},
    request_line_parser::RequestLineParser,
    CRLF,
};

//
//
//
#[derive(Debug, Default)]
pub struct RequestHeadParser {
    config: HeadParseConfig,
    //
    state: ParserState,
    buf: ChunkBuffer,
    scanner: LineScanner,
    request_line_parser: RequestLineParser,
    header_field_parser: HeaderFieldParser,
    //
    line: Option<RequestLine>,
    fields: Vec<HeaderField>,
}

impl RequestHeadParser {
    pub fn new() -> Self {
        Self::with_config(Default::default())
    }
    pub fn with_config(config: HeadParseConfig) -> Self {
        RequestHeadParser {
            buf: ChunkBuffer::with_capacity(config.buf_capacity()),
            request_line_parser: RequestLineParser::with_config(config.clone()),
            header_field_parser: HeaderFieldParser::with_config(config.clone()),
            config,
            ..Default::default()
        }
    }

    pub fn get_config(&self) -> &HeadParseConfig {
        &self.config
    }
    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Result<ParseEvent, HeadParseError> {
        if self.state.is_terminal() {
            warning!("feed on a {:?} parser without reset", self.state);
            self.state = ParserState::Failed;
            return Err(HeadParseError::ParserReused);
        }

        self.buf.append(chunk);

        match self.parse() {
            Ok(event) => Ok(event),
            Err(err) => {
                warning!(
                    "request head parse failed at offset {}: {}",
                    self.buf.stream_offset(),
                    err
                );
                self.state = ParserState::Failed;
                self.line = None;
                self.fields.clear();
                Err(err)
            }
        }
    }

    fn parse(&mut self) -> Result<ParseEvent, HeadParseError> {
        loop {
            let line = match self.scanner.next_line(&mut self.buf) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.check_partial()?;
                    return Ok(ParseEvent::NeedMore);
                }
                Err(LineScanError::BareLf) => return Err(self.malformed_line_error()),
            };

            match self.state {
                ParserState::AwaitingRequestLine => self.on_request_line(line)?,
                ParserState::AwaitingHeaders => {
                    if line.is_empty() {
                        return Ok(self.complete());
                    }
                    self.on_header_line(line)?
                }
                ParserState::Done | ParserState::Failed => unreachable!(),
            }
        }
    }

    fn on_request_line(&mut self, line: Line) -> Result<(), HeadParseError> {
        if line.len() + CRLF.len() > self.config.get_request_line_max_len() {
            return Err(HeadParseError::TooLongRequestLine);
        }
        let line = self.request_line_parser.parse(line.as_bytes())?;

        self.line = Some(line);
        self.state = ParserState::AwaitingHeaders;
        Ok(())
    }

    fn on_header_line(&mut self, line: Line) -> Result<(), HeadParseError> {
        let field = self
            .header_field_parser
            .parse(line.as_bytes(), line.len() + CRLF.len())?;

        self.fields.push(field);
        Ok(())
    }

    fn complete(&mut self) -> ParseEvent {
        let line = match self.line.take() {
            Some(line) => line,
            None => unreachable!(),
        };
        let head = RequestHead {
            line,
            fields: mem::take(&mut self.fields),
        };
        let body_offset = self.buf.stream_offset();
        self.state = ParserState::Done;

        debug!(
            "request head completed: {} {} fields, body at {}",
            head.method(),
            head.fields().len(),
            body_offset
        );

        ParseEvent::Complete { head, body_offset }
    }

    fn check_partial(&self) -> Result<(), HeadParseError> {
        match self.state {
            ParserState::AwaitingRequestLine => {
                if self.buf.len() > self.config.get_request_line_max_len() {
                    return Err(HeadParseError::TooLongRequestLine);
                }
                Ok(())
            }
            ParserState::AwaitingHeaders => self.header_field_parser.check_partial(self.buf.len()),
            ParserState::Done | ParserState::Failed => Ok(()),
        }
    }

    fn malformed_line_error(&self) -> HeadParseError {
        match self.state {
            ParserState::AwaitingRequestLine => HeadParseError::MalformedRequestLine,
            _ => HeadParseError::MalformedHeaderField,
        }
    }

    /// After `Done`, unclaimed bytes are kept as the start of the next head.
    /// After `Failed`, everything buffered is dropped.
    pub fn reset(&mut self) {
        debug!("reset from {:?}, {} bytes buffered", self.state, self.buf.len());

        if self.state == ParserState::Failed {
            self.buf.clear();
        } else {
            self.buf.compact();
        }

        self.state = ParserState::AwaitingRequestLine;
        self.line = None;
        self.fields.clear();
        self.header_field_parser.reset();
    }

    pub fn buffered(&self) -> &[u8] {
        self.buf.unconsumed()
    }
    pub fn consume_buffered(&mut self, n: usize) {
        self.buf.consume(n)
    }
    pub fn take_buffered(&mut self) -> Vec<u8> {
        self.buf.take_unconsumed()
    }

    pub fn bytes_scanned(&self) -> usize {
        self.buf.scanned()
    }
}
