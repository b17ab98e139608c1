//! Incremental HTTP/1.1 request head parser.
//!
//! Bytes are fed in chunks of any size and split at any boundary, the parser
//! answers [`ParseEvent::NeedMore`] until the blank line ending the head has
//! been seen, then hands back the whole [`RequestHead`] exactly once.
//!
//! ```
//! use http1_head_parser::{ParseEvent, RequestHeadParser};
//!
//! let mut p = RequestHeadParser::new();
//!
//! assert_eq!(p.feed(b"GET / HT").unwrap(), ParseEvent::NeedMore);
//! assert_eq!(p.feed(b"TP/1.1\r").unwrap(), ParseEvent::NeedMore);
//! assert_eq!(p.feed(b"\nHost: exam").unwrap(), ParseEvent::NeedMore);
//! assert_eq!(p.feed(b"ple.com\r\n").unwrap(), ParseEvent::NeedMore);
//!
//! match p.feed(b"\r\n").unwrap() {
//!     ParseEvent::Complete { head, body_offset } => {
//!         assert_eq!(head.method(), "GET");
//!         assert_eq!(head.get("host").unwrap(), "example.com");
//!         assert_eq!(body_offset, 37);
//!     }
//!     ParseEvent::NeedMore => unreachable!(),
//! }
//! ```

mod log;

pub mod chunk_buffer;
pub mod head_parser;
pub mod header_field_parser;
pub mod line_scanner;
pub mod request_head;
pub mod request_head_parser;
pub mod request_line_parser;

pub use http;

pub use head_parser::{HeadParseConfig, HeadParseError, ParseEvent, ParserState};
pub use request_head::{HeaderField, HttpVersion, RequestHead, RequestLine};
pub use request_head_parser::RequestHeadParser;

//
//
//
pub const SP: u8 = b' ';
pub const HTAB: u8 = b'\t';
pub const COLON: u8 = b':';
pub const DOT: u8 = b'.';
pub const LF: u8 = b'\n';
pub const CRLF: &[u8] = b"\r\n";
pub const HTTP_VERSION_PREFIX: &[u8] = b"HTTP/";
