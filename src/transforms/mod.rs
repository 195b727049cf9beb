pub mod rle;

pub use rle::{decode as rle_decode, encode as rle_encode, select_tag};

use crate::config::EncodeMode;
use crate::error::EncodeError;

/// Output of a transform pass over the parsed input bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub data: Vec<u8>,
    /// Escape byte chosen by the RLE pass, `None` when the bytes were stored raw.
    pub tag: Option<u8>,
}

/// Apply the transform selected by `mode`.
///
/// Raw storage is only ever chosen explicitly; an RLE failure is returned, never
/// replaced by the raw bytes.
pub fn apply(data: &[u8], mode: EncodeMode) -> Result<Transformed, EncodeError> {
    match mode {
        EncodeMode::Rle => {
            let encoded = rle::encode(data)?;
            Ok(Transformed { tag: encoded.first().copied(), data: encoded })
        }
        EncodeMode::Raw => Ok(Transformed { data: data.to_vec(), tag: None }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_rle_reports_tag() {
        let out = apply(&[0, 0, 0, 2], EncodeMode::Rle).unwrap();
        assert_eq!(out.tag, Some(1));
        assert_eq!(out.data, vec![1, 1, 2, 0, 2, 1, 0]);
    }

    #[test]
    fn test_apply_raw_passthrough() {
        let out = apply(&[3, 3, 3], EncodeMode::Raw).unwrap();
        assert_eq!(out.tag, None);
        assert_eq!(out.data, vec![3, 3, 3]);
    }

    #[test]
    fn test_apply_rle_does_not_fall_back() {
        let every_value: Vec<u8> = (0..=255u8).collect();
        assert_eq!(apply(&every_value, EncodeMode::Rle), Err(EncodeError::NoAvailableTag));
    }
}
