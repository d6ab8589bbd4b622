use std::{fs, path::{Path, PathBuf}};

use log::LevelFilter;
use serde::{Serialize, Deserialize};

use crate::{
    bitstreams::{BinaryReader, BinaryWriterBuilder, BitRead, BitWrite},
    error::Result,
    huffman::{CodeTable, FrequencyTable, HuffmanDecoder, HuffmanEncoder},
    properties::Properties,
    utils::timer::Timer,
};

pub const DEBUG_LOW: u8 = 1;
pub const DEBUG_HIGH: u8 = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffConfig {
    /// 0 is quiet, [`DEBUG_LOW`] reports the stages, [`DEBUG_HIGH`] also dumps
    /// every code.
    pub debug_level: u8,
    /// Whether [`HuffProcessor::compress_file`] also writes the code table to
    /// `<dest>.codes.bin`.
    pub dump_codes: bool,
}

impl HuffConfig {
    pub fn new(debug_level: u8) -> Self {
        Self { debug_level, dump_codes: false }
    }

    pub fn with_dump_codes(mut self, dump_codes: bool) -> Self {
        self.dump_codes = dump_codes;
        self
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.debug_level {
            0 => LevelFilter::Warn,
            DEBUG_LOW => LevelFilter::Info,
            level if level < DEBUG_HIGH => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompressionStats {
    pub input_bytes: usize,
    pub bits_read: usize,
    pub output_bytes: usize,
    pub decompression_time_ns: u64,
}

/// Static Huffman compressor writing the tree-header format.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffProcessor {
    config: HuffConfig,
}

impl HuffProcessor {
    pub fn new(config: HuffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HuffConfig {
        &self.config
    }

    /// Two passes over `input`: count the words, reset, then encode them. The
    /// stream written to `output` is left open; closing it is up to the caller.
    pub fn compress_bits<R: BitRead, W: BitWrite>(&self, input: &mut R, output: &mut W) -> Result<Properties> {
        self.encode(input, output).map(|(props, _)| props)
    }

    fn encode<R: BitRead, W: BitWrite>(&self, input: &mut R, output: &mut W) -> Result<(Properties, HuffmanEncoder)> {
        let mut timer = Timer::started();

        let freq = FrequencyTable::from_reader(input);
        log::info!(
            "counted {} bytes, {} distinct symbols",
            freq.total(),
            freq.distinct_symbols()
        );

        let encoder = HuffmanEncoder::new(freq);

        if self.config.debug_level >= DEBUG_HIGH {
            for (symbol, code) in encoder.codes().iter() {
                log::trace!("symbol {:3} -> {:0width$b}", symbol, code.bits, width = code.len as usize);
            }
        }

        let header_bits = encoder.write_header(output);
        log::info!("wrote {} header bits", header_bits);

        input.reset();
        let body_bits = encoder.write_body(input, output)?;
        log::info!("wrote {} body bits", body_bits);

        let written = header_bits + body_bits;

        let props = Properties {
            input_bytes: encoder.frequencies().total(),
            output_bytes: written.div_ceil(8),
            header_bits,
            body_bits,
            distinct_symbols: encoder.frequencies().distinct_symbols(),
            max_code_len: encoder.codes().max_len(),
            compression_time_ns: timer.stop() as u64,
            ..Default::default()
        };

        Ok((props, encoder))
    }

    pub fn compress(&self, input: &[u8]) -> Result<(Box<[u8]>, Properties)> {
        self.compress_with_codes(input).map(|(compressed, props, _)| (compressed, props))
    }

    /// Like [`compress`](Self::compress), also handing back the code table the
    /// body was written with.
    pub fn compress_with_codes(&self, input: &[u8]) -> Result<(Box<[u8]>, Properties, CodeTable)> {
        let mut reader = BinaryReader::new(input.into());
        let mut writer = BinaryWriterBuilder::new();

        let (props, encoder) = self.encode(&mut reader, &mut writer)?;
        let compressed = writer.build().os;

        debug_assert_eq!(compressed.len(), props.output_bytes);

        Ok((compressed, props, encoder.into_codes()))
    }

    /// Reads the header and decodes the body up to the end-of-data code. The
    /// decoded bytes are only returned when the whole stream is valid.
    pub fn decompress_bits<R: BitRead>(&self, input: &mut R) -> Result<(Vec<u8>, DecompressionStats)> {
        let mut timer = Timer::started();
        let start = input.bits_read();

        let decoder = HuffmanDecoder::decode_header(input)?;
        log::info!(
            "read tree header: {} leaves, {} bits",
            decoder.root().num_leaves(),
            input.bits_read() - start
        );

        let output = decoder.read_body(input)?;
        let bits_read = input.bits_read() - start;

        let stats = DecompressionStats {
            input_bytes: bits_read.div_ceil(8),
            bits_read,
            output_bytes: output.len(),
            decompression_time_ns: timer.stop() as u64,
        };

        Ok((output, stats))
    }

    pub fn decompress(&self, input: &[u8]) -> Result<(Vec<u8>, DecompressionStats)> {
        let mut reader = BinaryReader::new(input.into());
        self.decompress_bits(&mut reader)
    }

    /// Compresses `source` into `dest`. The whole input is held in memory for the
    /// two passes.
    pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, source: P, dest: Q) -> Result<Properties> {
        let input = fs::read(source)?;
        let (compressed, props, codes) = self.compress_with_codes(&input)?;
        fs::write(&dest, compressed)?;

        if self.config.dump_codes {
            let path = codes_path(dest);
            codes.dump(&path)?;
            log::info!("wrote code table to {}", path.display());
        }

        Ok(props)
    }

    /// Decompresses `source` into `dest`. `dest` is not touched when the input is
    /// rejected.
    pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, source: P, dest: Q) -> Result<DecompressionStats> {
        let input = fs::read(source)?;
        let (output, stats) = self.decompress(&input)?;
        fs::write(dest, output)?;
        Ok(stats)
    }
}

/// `<dest>.codes.bin`, where [`HuffProcessor::compress_file`] dumps the code table.
pub fn codes_path<P: AsRef<Path>>(dest: P) -> PathBuf {
    let mut name = dest.as_ref().as_os_str().to_owned();
    name.push(".codes.bin");
    PathBuf::from(name)
}
