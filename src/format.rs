use crate::config::OutputFormat;
use std::fmt::Write as _;
use std::path::Path;

/// Render `bytes` in the requested output format.
///
/// Text formats separate values with commas and break the line after every
/// `values_per_line` values (0 disables wrapping). `array_name` is only used by
/// [`OutputFormat::CHeader`].
pub fn render(bytes: &[u8], format: OutputFormat, array_name: &str, values_per_line: usize) -> Vec<u8> {
    if format == OutputFormat::Binary {
        return bytes.to_vec();
    }

    let mut out = String::with_capacity(bytes.len() * 5 + 64);

    if format == OutputFormat::CHeader {
        let _ = writeln!(out, "const unsigned char {}[{}] = {{", array_name, bytes.len());
    }

    for (i, byte) in bytes.iter().enumerate() {
        match format {
            OutputFormat::Decimal => {
                let _ = write!(out, "{}", byte);
            }
            _ => {
                let _ = write!(out, "0x{:02X}", byte);
            }
        }

        if i + 1 != bytes.len() {
            out.push(',');
            if values_per_line > 0 && (i + 1) % values_per_line == 0 {
                out.push('\n');
            }
        }
    }
    out.push('\n');

    if format == OutputFormat::CHeader {
        out.push_str("};\n");
    }

    out.into_bytes()
}

/// C identifier derived from the file stem of `path`.
pub fn array_identifier(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();

    let mut ident: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Human readable size: `512 b.`, `1.50 Kb.`, `2.00 Mb.`
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    if size <= 1024.0 {
        return format!("{} b.", bytes);
    }

    size /= 1024.0;
    let mut prefix = "K";
    if size > 1024.0 {
        size /= 1024.0;
        prefix = "M";
    }
    format!("{:.2} {}b.", size, prefix)
}
