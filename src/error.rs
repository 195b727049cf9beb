use thiserror::Error;

/// Failure of the run-length encoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
	#[error("No free tag byte: input uses all 256 byte values")]
	NoAvailableTag,
}

/// Failure of the run-length decoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
	#[error("Encoded stream ended before the terminator")]
	TruncatedStream,

	#[error("Tag byte at offset {offset} has no count byte")]
	MalformedRecord { offset: usize },
}

#[derive(Error, Debug)]
pub enum CrleError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Encoding failed: {0}")]
	Encode(#[from] EncodeError),

	#[error("Decoding failed: {0}")]
	Decode(#[from] DecodeError),

	#[error("'{token}' {reason}")]
	InvalidValue { token: String, reason: &'static str },

	#[error("Ragged grid: line {line} has {found} cells, expected {expected}")]
	RaggedGrid { line: usize, expected: usize, found: usize },

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

pub type Result<T> = std::result::Result<T, CrleError>;
