//! Tagged Run-Length Encoding
//! Format: [TAG] records... [TAG][0x00]
//! TAG is the smallest byte value absent from the input. A run of one or two bytes is
//! stored literally, longer runs as [TAG][REPEATS - 1][BYTE], at most 255 repeats each.

use crate::error::{DecodeError, EncodeError};

/// Longest run a single [TAG][COUNT][BYTE] record can carry.
pub const MAX_RUN: usize = 255;

/// Count byte that marks the end of the stream.
pub const TERMINATOR: u8 = 0x00;

/// Pick the escape byte for `data`: the lowest value that never occurs in it.
pub fn select_tag(data: &[u8]) -> Result<u8, EncodeError> {
    let mut histogram = [0usize; 256];
    for &byte in data {
        histogram[byte as usize] += 1;
    }

    histogram
        .iter()
        .position(|&count| count == 0)
        .map(|value| value as u8)
        .ok_or(EncodeError::NoAvailableTag)
}

pub fn encode(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let tag = select_tag(data)?;

    // Header, terminator, and one byte per input byte in the worst case
    let mut encoded = Vec::with_capacity(data.len() + 3);
    encoded.push(tag);

    let mut i = 0;
    while i < data.len() {
        let current_byte = data[i];
        let mut run_length = 1;
        while i + run_length < data.len() && data[i + run_length] == current_byte {
            run_length += 1;
        }

        push_run(&mut encoded, tag, current_byte, run_length);
        i += run_length;
    }

    encoded.push(tag);
    encoded.push(TERMINATOR);
    Ok(encoded)
}

/// Emit one maximal run, splitting it into records of at most `MAX_RUN` repeats.
/// The remainder goes through the same literal/record rules as a short run.
fn push_run(encoded: &mut Vec<u8>, tag: u8, byte: u8, mut remaining: usize) {
    while remaining > 0 {
        let piece = remaining.min(MAX_RUN);
        match piece {
            1 => encoded.push(byte),
            2 => encoded.extend_from_slice(&[byte, byte]),
            _ => encoded.extend_from_slice(&[tag, (piece - 1) as u8, byte]),
        }
        remaining -= piece;
    }
}

pub fn decode(stream: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with_len(stream).map(|(decoded, _)| decoded)
}

/// Decode `stream` and also return how many of its bytes, terminator included, were
/// consumed. Anything past that point is not part of the encoded data.
pub fn decode_with_len(stream: &[u8]) -> Result<(Vec<u8>, usize), DecodeError> {
    let tag = *stream.first().ok_or(DecodeError::TruncatedStream)?;

    let mut decoded = Vec::with_capacity(stream.len() * 2);
    let mut i = 1;

    while i < stream.len() {
        if stream[i] != tag {
            decoded.push(stream[i]);
            i += 1;
            continue;
        }

        let count = *stream
            .get(i + 1)
            .ok_or(DecodeError::MalformedRecord { offset: i })?;
        if count == TERMINATOR {
            return Ok((decoded, i + 2));
        }

        let byte = *stream.get(i + 2).ok_or(DecodeError::TruncatedStream)?;
        decoded.resize(decoded.len() + count as usize + 1, byte);
        i += 3;
    }

    Err(DecodeError::TruncatedStream)
}
