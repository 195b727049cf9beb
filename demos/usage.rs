use crle::config::{EncodeConfig, OutputFormat};
use crle::{decode_data, encode_csv, encode_data};

fn main() {
	let table = b"hello hello hello hello".to_vec();
	let encoded = encode_data(&table).unwrap();
	println!("encoded {} -> {} bytes, tag 0x{:02X}", table.len(), encoded.len(), encoded[0]);

	let restored = decode_data(&encoded).unwrap();
	println!("restored {} bytes", restored.len());

	let cfg = EncodeConfig::default().with_format(OutputFormat::CHeader);
	let (listing, stats) = encode_csv("0,0,0,0,0,0,1,2,2,3,3,3,3", &cfg).unwrap();
	print!("{}", String::from_utf8_lossy(&listing));
	println!("saved {:.2}%", stats.saving_percent());
}
