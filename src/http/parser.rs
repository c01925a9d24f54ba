use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::error::ParseError;
use crate::http::headers::Headers;
use crate::http::request::HttpRequest;
use crate::http::request_line::RequestLine;

/// Upper bound for a single request or header line, terminator included.
pub const MAX_LINE_BYTES: usize = 8 * 1024;

/// Reads one line and strips a trailing `\n` or `\r\n`.
///
/// Returns `Ok(None)` at end of stream when nothing was read.
pub async fn read_line<R>(reader: &mut R) -> Result<Option<String>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = (&mut *reader)
        .take(MAX_LINE_BYTES as u64 + 1)
        .read_until(b'\n', &mut buf)
        .await?;

    if n == 0 {
        return Ok(None);
    }
    if n > MAX_LINE_BYTES {
        return Err(ParseError::LineTooLong(MAX_LINE_BYTES));
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    String::from_utf8(buf)
        .map(Some)
        .map_err(|_| ParseError::InvalidEncoding)
}

/// Collects header lines up to and including the blank separator line.
///
/// End of stream also ends the block.
pub async fn read_header_block<R>(reader: &mut R) -> Result<Vec<String>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    while let Some(line) = read_line(reader).await? {
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Reads exactly `len` body bytes.
///
/// A stream that ends early is reported as [`ParseError::TruncatedBody`]
/// rather than yielding a partial or empty body.
pub async fn read_body<R>(reader: &mut R, len: usize) -> Result<Bytes, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    if len == 0 {
        return Ok(Bytes::new());
    }

    let mut body = BytesMut::with_capacity(len);
    while body.len() < len {
        let n = (&mut *reader)
            .take((len - body.len()) as u64)
            .read_buf(&mut body)
            .await?;

        if n == 0 {
            return Err(ParseError::TruncatedBody {
                expected: len,
                received: body.len(),
            });
        }
    }

    Ok(body.freeze())
}

/// Reads one complete request: request line, header block, then body.
///
/// Returns `Ok(None)` if the peer closed before sending anything.
pub async fn read_request<R>(
    reader: &mut R,
    max_body_bytes: usize,
) -> Result<Option<HttpRequest>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let Some(first) = read_line(reader).await? else {
        return Ok(None);
    };
    let request_line = RequestLine::parse(&first)?;

    let headers = Headers::parse(read_header_block(reader).await?)?;

    let content_length = headers.content_length()?;
    if content_length > max_body_bytes {
        return Err(ParseError::BodyTooLarge {
            declared: content_length,
            limit: max_body_bytes,
        });
    }

    let body = read_body(reader, content_length).await?;

    Ok(Some(HttpRequest::new(request_line, headers, body)))
}
