use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::HttpResponse;

/// Encodes `resp` exactly as it goes on the wire. Nothing follows the body.
pub fn serialize_response(resp: &HttpResponse) -> Bytes {
    let body = resp.body();
    let mut buf = BytesMut::with_capacity(128 + body.len());

    let status = resp.status();
    buf.put_slice(
        format!("{} {} {}\r\n", resp.version(), status.as_u16(), status.reason_phrase()).as_bytes(),
    );

    for (name, value) in resp.headers().iter() {
        buf.put_slice(name.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(value.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // empty line ends the head
    buf.put_slice(b"\r\n");
    buf.put_slice(body);

    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &HttpResponse) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
