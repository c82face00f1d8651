use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::parser::ParseError;

/// Reads the next line from `reader` as raw bytes, with any trailing
/// `\r` / `\n` removed.
///
/// A line that is not terminated by `\n` before the stream ends is reported as
/// [`ParseError::EndOfStream`], even if some bytes were already read.
///
/// No length limit is applied to the line.
pub async fn read_line<R>(reader: &mut R) -> Result<Vec<u8>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf).await?;

    if n == 0 || buf.last() != Some(&b'\n') {
        return Err(ParseError::EndOfStream);
    }

    while matches!(buf.last(), Some(b'\r' | b'\n')) {
        buf.pop();
    }
    Ok(buf)
}
