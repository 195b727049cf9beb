//! # crle
//!
//! A tagged run-length encoder for tables of byte values, aimed at embedding compact
//! lookup tables, sprites and maps in firmware sources.
//!
//! ## Features
//!
//! - **Tagged RLE**: the escape byte is the lowest value absent from the input, so
//!   literals never need escaping
//! - **Several output formats**: decimal or hexadecimal CSV, raw binary, or a ready
//!   to include C array
//! - **Decoder**: turns any of those listings back into the original values
//! - **Grid tiling**: splits a CSV grid into fixed-size tile files in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use crle::{encode_data, decode_data};
//!
//! let original = [1u8, 2, 2, 3, 3, 3];
//! let encoded = encode_data(&original).unwrap();
//! assert_eq!(encoded, vec![0, 1, 2, 2, 0, 2, 3, 0, 0]);
//!
//! let decoded = decode_data(&encoded).unwrap();
//! assert_eq!(decoded, original.to_vec());
//! ```
//!
//! ### Encoding CSV text
//!
//! ```rust
//! use crle::{encode_csv, EncodeConfig, OutputFormat};
//!
//! let config = EncodeConfig::default().with_format(OutputFormat::Hex);
//! let (listing, stats) = encode_csv("7,7,7,7", &config).unwrap();
//! assert_eq!(listing, b"0x00,0x00,0x03,0x07,0x00,0x00\n");
//! assert_eq!(stats.tag, Some(0));
//! ```
//!
//! ### Working with Files
//!
//! ```rust,no_run
//! use crle::{pipeline, EncodeConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EncodeConfig::default();
//! let (stats, written) = pipeline::encode_file(Path::new("level1.csv"), None, &config)?;
//! println!("{} -> {} bytes in {}", stats.original_size, stats.encoded_size, written.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod pipeline;
pub mod split;
pub mod transforms;

// Re-export commonly used types for convenience
pub use config::{DecodeConfig, EncodeConfig, EncodeMode, OutputFormat, SplitConfig};
pub use error::{CrleError, DecodeError, EncodeError, Result};
pub use pipeline::{DecodeStats, EncodeStats};
pub use transforms::rle::{decode, encode, select_tag};

use std::io::Cursor;

/// Run-length encode raw bytes.
///
/// The returned stream starts with the tag byte and ends with the `[tag, 0]`
/// terminator.
///
/// # Example
///
/// ```rust
/// use crle::{encode_data, CrleError, EncodeError};
///
/// assert_eq!(encode_data(&[5, 5, 5, 5, 5]).unwrap(), vec![0, 0, 4, 5, 0, 0]);
///
/// let every_value: Vec<u8> = (0..=255).collect();
/// assert!(matches!(
///     encode_data(&every_value),
///     Err(CrleError::Encode(EncodeError::NoAvailableTag))
/// ));
/// ```
pub fn encode_data(data: &[u8]) -> Result<Vec<u8>> {
    Ok(transforms::rle::encode(data)?)
}

/// Decode a stream produced by [`encode_data`].
pub fn decode_data(stream: &[u8]) -> Result<Vec<u8>> {
    Ok(transforms::rle::decode(stream)?)
}

/// Encode CSV text in memory
///
/// This is a convenience function for tables that are already loaded. Invalid values
/// are skipped and counted in [`EncodeStats::rejected_tokens`].
///
/// # Returns
///
/// The rendered listing in `config.format` together with the encoding statistics.
pub fn encode_csv(text: &str, config: &EncodeConfig) -> Result<(Vec<u8>, EncodeStats)> {
    let mut input = Cursor::new(text);
    let mut output = Vec::new();

    let stats = pipeline::encode(&mut input, &mut output, config, "data")?;
    Ok((output, stats))
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_data() {
        let original = b"aaaaaaaabbbbbbcdd".to_vec();
        let encoded = encode_data(&original).unwrap();
        assert!(encoded.len() < original.len());
        assert_eq!(decode_data(&encoded).unwrap(), original);
    }

    #[test]
    fn test_empty_data() {
        let encoded = encode_data(&[]).unwrap();
        assert_eq!(encoded, vec![0, 0, 0]);
        assert!(decode_data(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_decode_data_errors() {
        assert!(matches!(decode_data(&[]), Err(CrleError::Decode(DecodeError::TruncatedStream))));
        assert!(matches!(
            decode_data(&[4, 4]),
            Err(CrleError::Decode(DecodeError::MalformedRecord { offset: 1 }))
        ));
    }

    #[test]
    fn test_encode_csv_header() {
        let config = EncodeConfig::default().with_format(OutputFormat::CHeader);
        let (listing, stats) = encode_csv("9", &config).unwrap();
        let listing = String::from_utf8(listing).unwrap();
        assert_eq!(listing, "const unsigned char data[4] = {\n0x00,0x09,0x00,0x00\n};\n");
        assert_eq!(stats.encoded_size, 4);
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert!(!DESCRIPTION.is_empty());
    }
}
