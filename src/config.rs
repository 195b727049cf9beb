use crate::error::CrleError;
use std::str::FromStr;

/// How the encoded bytes are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `12,0,255` decimal values
    Decimal,
    /// `0x0C,0x00,0xFF` hexadecimal values
    Hex,
    /// Raw bytes
    Binary,
    /// `const unsigned char name[N] = { ... };`
    CHeader,
}

impl OutputFormat {
    /// Extension used when no output path is given.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Decimal | OutputFormat::Hex => "txt",
            OutputFormat::Binary => "bin",
            OutputFormat::CHeader => "h",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    Rle,
    /// Store the parsed bytes without compression.
    Raw,
}

#[derive(Debug, Clone)]
pub struct EncodeConfig {
    pub format: OutputFormat,
    pub mode: EncodeMode,
    pub show_info: bool,
    pub values_per_line: usize,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Decimal,
            mode: EncodeMode::Rle,
            show_info: true,
            values_per_line: 16,
        }
    }
}

impl EncodeConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_mode(mut self, mode: EncodeMode) -> Self {
        self.mode = mode;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Representation of the encoded input
    pub input_format: OutputFormat,
    /// Representation of the decoded output
    pub format: OutputFormat,
    pub values_per_line: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            input_format: OutputFormat::Decimal,
            format: OutputFormat::Decimal,
            values_per_line: 16,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub tile_width: usize,
    pub tile_height: usize,
    pub threads: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            tile_width: 16,
            tile_height: 16,
            threads: num_cpus::get(),
        }
    }
}

impl SplitConfig {
    pub fn new(tile_width: usize, tile_height: usize) -> Result<Self, CrleError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(CrleError::ConfigError(format!(
                "Tile size must be at least 1x1, got {}x{}",
                tile_width, tile_height
            )));
        }
        Ok(Self { tile_width, tile_height, ..Default::default() })
    }
}

impl FromStr for OutputFormat {
    type Err = CrleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dec" | "decimal" => Ok(OutputFormat::Decimal),
            "hex" => Ok(OutputFormat::Hex),
            "bin" | "binary" => Ok(OutputFormat::Binary),
            "cpp" | "c" | "header" => Ok(OutputFormat::CHeader),
            _ => Err(CrleError::ConfigError(format!("Invalid format: {}", s))),
        }
    }
}

impl FromStr for EncodeMode {
    type Err = CrleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rle" => Ok(EncodeMode::Rle),
            "raw" | "none" => Ok(EncodeMode::Raw),
            _ => Err(CrleError::ConfigError(format!("Invalid mode: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("HEX".parse::<OutputFormat>().unwrap(), OutputFormat::Hex);
        assert_eq!("cpp".parse::<OutputFormat>().unwrap(), OutputFormat::CHeader);
        assert_eq!("bin".parse::<OutputFormat>().unwrap(), OutputFormat::Binary);
        assert!("octal".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("raw".parse::<EncodeMode>().unwrap(), EncodeMode::Raw);
        assert!("lz".parse::<EncodeMode>().is_err());
    }

    #[test]
    fn test_split_config_rejects_empty_tiles() {
        assert!(SplitConfig::new(0, 4).is_err());
        let cfg = SplitConfig::new(3, 2).unwrap();
        assert_eq!((cfg.tile_width, cfg.tile_height), (3, 2));
    }
}
