use std::{collections::HashMap, fmt::Display, fs::{self, File}, io::BufReader, path::Path, str::FromStr};

use serde::{Serialize, Deserialize};

use crate::{error::HuffError, huffman::HUFF_TREE};

/// Statistics of one compression run, stored next to the compressed file as
/// `<basename>.properties`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub magic: u32,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub header_bits: usize,
    pub body_bits: usize,
    pub distinct_symbols: usize,
    pub max_code_len: u32,
    pub compression_time_ns: u64,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            magic: HUFF_TREE,
            input_bytes: 0,
            output_bytes: 0,
            header_bits: 0,
            body_bits: 0,
            distinct_symbols: 0,
            max_code_len: 0,
            compression_time_ns: 0,
        }
    }
}

impl Properties {
    /// Output size over input size; 0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64
    }

    /// Average number of body bits per input byte, the end-of-data code included.
    pub fn bits_per_byte(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.body_bits as f64 / self.input_bytes as f64
    }

    /// Reads a `.properties` file written by [`Properties::store`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HuffError> {
        let file = File::open(path)?;
        let map = java_properties::read(BufReader::new(file))
            .map_err(|e| HuffError::Properties(e.to_string()))?;

        Properties::try_from(map)
    }

    pub fn store<P: AsRef<Path>>(&self, path: P) -> Result<(), HuffError> {
        fs::write(path, String::from(self.clone()))?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, HuffError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn parse_field<T>(value: &HashMap<String, String>, key: &str) -> Result<T, HuffError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = value
        .get(key)
        .ok_or_else(|| HuffError::Properties(format!("missing key {}", key)))?;

    raw.trim()
        .parse()
        .map_err(|e| HuffError::Properties(format!("{} = {}: {}", key, raw, e)))
}

impl TryFrom<HashMap<String, String>> for Properties {
    type Error = HuffError;

    fn try_from(value: HashMap<String, String>) -> Result<Self, Self::Error> {
        let magic = value
            .get("magic")
            .ok_or_else(|| HuffError::Properties("missing key magic".to_string()))?;
        let magic = u32::from_str_radix(magic.trim().trim_start_matches("0x"), 16)
            .map_err(|e| HuffError::Properties(format!("magic = {}: {}", magic, e)))?;

        if magic != HUFF_TREE {
            return Err(HuffError::BadMagic(magic));
        }

        Ok(Properties {
            magic,
            input_bytes: parse_field(&value, "inputbytes")?,
            output_bytes: parse_field(&value, "outputbytes")?,
            header_bits: parse_field(&value, "headerbits")?,
            body_bits: parse_field(&value, "bodybits")?,
            distinct_symbols: parse_field(&value, "distinctsymbols")?,
            max_code_len: parse_field(&value, "maxcodelength")?,
            compression_time_ns: parse_field(&value, "compressiontime")?,
        })
    }
}

impl From<Properties> for String {
    fn from(val: Properties) -> Self {
        let mut s = String::new();

        s.push_str("#Huffman properties\n");
        s.push_str("version=0\n");
        s.push_str("format=tree\n");
        s.push_str(&format!("magic={:#010x}\n", val.magic));
        s.push_str(&format!("inputbytes={}\n", val.input_bytes));
        s.push_str(&format!("outputbytes={}\n", val.output_bytes));
        s.push_str(&format!("headerbits={}\n", val.header_bits));
        s.push_str(&format!("bodybits={}\n", val.body_bits));
        s.push_str(&format!("distinctsymbols={}\n", val.distinct_symbols));
        s.push_str(&format!("maxcodelength={}\n", val.max_code_len));
        s.push_str(&format!("compressiontime={}\n", val.compression_time_ns));

        s
    }
}
