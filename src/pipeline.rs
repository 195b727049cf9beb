use crate::config::{DecodeConfig, EncodeConfig, OutputFormat};
use crate::error::Result;
use crate::format::{array_identifier, render};
use crate::input::{parse_value, parse_values};
use crate::transforms::{self, rle};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct EncodeStats {
	pub original_size: u64,
	pub encoded_size: u64,
	/// Escape byte of the RLE stream, `None` for raw output
	pub tag: Option<u8>,
	pub rejected_tokens: usize,
}

impl EncodeStats {
	/// Space saved relative to the parsed input, in percent. Negative when the output grew.
	pub fn saving_percent(&self) -> f64 {
		if self.original_size == 0 {
			return 0.0;
		}
		100.0 - (self.encoded_size as f64 / self.original_size as f64) * 100.0
	}
}

#[derive(Debug, Clone)]
pub struct DecodeStats {
	pub encoded_size: u64,
	pub decoded_size: u64,
	pub tag: u8,
	/// Bytes found after the terminator and ignored
	pub trailing_bytes: u64,
}

/// Read a comma-separated byte table from `reader`, transform it and write the rendered
/// result to `writer`.
pub fn encode<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &EncodeConfig,
	array_name: &str,
) -> Result<EncodeStats> {
	let mut text = String::new();
	reader.read_to_string(&mut text)?;

	let parsed = parse_values(&text);
	if !parsed.rejected.is_empty() {
		warn!("Skipped {} invalid value(s)", parsed.rejected.len());
	}

	let transformed = transforms::apply(&parsed.values, config.mode)?;
	if let Some(tag) = transformed.tag {
		debug!("Selected tag 0x{:02X}", tag);
	}

	writer.write_all(&render(&transformed.data, config.format, array_name, config.values_per_line))?;
	writer.flush()?;

	Ok(EncodeStats {
		original_size: parsed.values.len() as u64,
		encoded_size: transformed.data.len() as u64,
		tag: transformed.tag,
		rejected_tokens: parsed.rejected.len(),
	})
}

/// Read an encoded stream in `config.input_format`, decode it and write the rendered
/// bytes to `writer`.
pub fn decode<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &DecodeConfig,
	array_name: &str,
) -> Result<DecodeStats> {
	let mut raw = Vec::new();
	reader.read_to_end(&mut raw)?;

	let stream = match config.input_format {
		OutputFormat::Binary => raw,
		_ => parse_encoded_text(&String::from_utf8_lossy(&raw))?,
	};

	let (decoded, consumed) = rle::decode_with_len(&stream)?;
	let trailing_bytes = (stream.len() - consumed) as u64;
	if trailing_bytes > 0 {
		warn!("Ignoring {} byte(s) after the terminator", trailing_bytes);
	}

	writer.write_all(&render(&decoded, config.format, array_name, config.values_per_line))?;
	writer.flush()?;

	Ok(DecodeStats {
		encoded_size: consumed as u64,
		decoded_size: decoded.len() as u64,
		tag: stream[0],
		trailing_bytes,
	})
}

/// Values of a decimal, hex or C header listing. Unlike plain input parsing, an invalid
/// token is an error here since dropping it would corrupt the stream.
fn parse_encoded_text(text: &str) -> Result<Vec<u8>> {
	let body = match (text.find('{'), text.rfind('}')) {
		(Some(open), Some(close)) if open < close => &text[open + 1..close],
		_ => text,
	};

	let parsed = parse_values(body);
	if let Some(token) = parsed.rejected.first() {
		parse_value(token)?;
	}
	Ok(parsed.values)
}

/// Path used when no output is given: the input with the format's extension, or
/// `{stem}.rle.{ext}` when that would overwrite the input.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
	let candidate = input.with_extension(format.extension());
	if candidate != input {
		return candidate;
	}
	input.with_extension(format!("rle.{}", format.extension()))
}

pub fn encode_file(input: &Path, output: Option<&Path>, config: &EncodeConfig) -> Result<(EncodeStats, PathBuf)> {
	let output = output.map(Path::to_path_buf).unwrap_or_else(|| default_output_path(input, config.format));
	info!("Encoding {} to {}", input.display(), output.display());

	// Read before creating the output: `output` may name the input itself
	let mut in_data = Cursor::new(fs::read(input)?);
	let mut out_file = BufWriter::new(File::create(&output)?);
	let stats = encode(&mut in_data, &mut out_file, config, &array_identifier(input))?;
	Ok((stats, output))
}

pub fn decode_file(input: &Path, output: Option<&Path>, config: &DecodeConfig) -> Result<(DecodeStats, PathBuf)> {
	let output = output
		.map(Path::to_path_buf)
		.unwrap_or_else(|| input.with_extension(format!("decoded.{}", config.format.extension())));
	info!("Decoding {} to {}", input.display(), output.display());

	let mut in_data = Cursor::new(fs::read(input)?);
	let mut out_file = BufWriter::new(File::create(&output)?);
	let stats = decode(&mut in_data, &mut out_file, config, &array_identifier(&output))?;
	Ok((stats, output))
}
