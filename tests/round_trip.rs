use std::{env, fs, path::PathBuf};

use huffman_rust::{
    bitstreams::BinaryReader,
    huffman::{header, CodeTable, FrequencyTable, HuffmanEncoder},
    processor::codes_path,
    HuffConfig, HuffError, HuffProcessor, Properties, HUFF_TREE,
};
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn scratch_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("huffman_rust_{}_{}", std::process::id(), name))
}

proptest! {
    #[test]
    fn prop_round_trip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let compressed = huffman_rust::compress(&data).unwrap();
        prop_assert_eq!(huffman_rust::decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_round_trip_small_alphabet(data in prop::collection::vec(0u8..4, 0..2048)) {
        let compressed = huffman_rust::compress(&data).unwrap();
        prop_assert_eq!(huffman_rust::decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_header_round_trip(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let encoder = HuffmanEncoder::from_bytes(&data);
        let compressed = huffman_rust::compress(&data).unwrap();

        let mut reader = BinaryReader::new(compressed);
        prop_assert_eq!(&header::read_header(&mut reader).unwrap(), encoder.root());
    }

    #[test]
    fn prop_codes_prefix_free(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let encoder = HuffmanEncoder::new(FrequencyTable::from_bytes(&data));
        let codes: &CodeTable = encoder.codes();

        prop_assert_eq!(codes.len(), encoder.frequencies().distinct_symbols());

        for (s1, c1) in codes.iter() {
            for (s2, c2) in codes.iter() {
                if s1 != s2 {
                    prop_assert!(!c1.is_prefix_of(&c2));
                }
            }
        }
    }

    #[test]
    fn prop_wrong_magic_rejected(magic in any::<u32>(), tail in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(magic != HUFF_TREE);

        let mut stream = magic.to_be_bytes().to_vec();
        stream.extend(tail);

        match huffman_rust::decompress(&stream) {
            Err(HuffError::BadMagic(read)) => prop_assert_eq!(read, magic),
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }
}

#[test]
fn test_large_random_input() {
    let mut rng = StdRng::seed_from_u64(0xface8201);

    // skewed towards a few bytes so the codes have very different lengths
    let data: Vec<u8> = (0..200_000)
        .map(|_| if rng.gen_bool(0.7) { rng.gen_range(b'a'..=b'e') } else { rng.gen() })
        .collect();

    let processor = HuffProcessor::default();
    let (compressed, props) = processor.compress(&data).unwrap();

    assert!(compressed.len() < data.len());
    assert_eq!(props.output_bytes, compressed.len());
    assert_eq!(props.input_bytes, data.len());

    let (output, stats) = processor.decompress(&compressed).unwrap();

    assert_eq!(output, data);
    assert_eq!(stats.bits_read, props.header_bits + props.body_bits);
    assert_eq!(stats.input_bytes, compressed.len());
}

#[test]
fn test_empty_input() {
    let compressed = huffman_rust::compress(&[]).unwrap();

    assert_eq!(&compressed[..4], &HUFF_TREE.to_be_bytes());
    assert!(huffman_rust::decompress(&compressed).unwrap().is_empty());
}

#[test]
fn test_single_symbol_input() {
    let data = vec![0x41; 1000];
    let (compressed, props) = HuffProcessor::default().compress(&data).unwrap();

    assert_eq!(props.distinct_symbols, 2);
    assert_eq!(props.max_code_len, 1);
    assert_eq!(props.body_bits, 1001);
    assert_eq!(huffman_rust::decompress(&compressed).unwrap(), data);
}

#[test]
fn test_truncated_body_gives_no_output() {
    let data = b"the quick brown fox jumps over the lazy dog".repeat(20);
    let compressed = huffman_rust::compress(&data).unwrap();

    let half = &compressed[..compressed.len() / 2];

    assert!(matches!(huffman_rust::decompress(half), Err(HuffError::MissingEof)));
}

#[test]
fn test_compression_stats() {
    let data = b"abracadabra";
    let processor = HuffProcessor::new(HuffConfig::new(4));
    let (compressed, props) = processor.compress(data).unwrap();

    assert_eq!(props.magic, HUFF_TREE);
    assert_eq!(props.input_bytes, 11);
    // a b r c d + end of data
    assert_eq!(props.distinct_symbols, 6);
    assert_eq!(props.header_bits, 32 + 11 + 6 * 9);
    assert_eq!(props.output_bytes, (props.header_bits + props.body_bits + 7) / 8);
    assert_eq!(compressed.len(), props.output_bytes);
}

#[test]
fn test_file_round_trip() {
    let source = scratch_path("source");
    let packed = scratch_path("packed");
    let unpacked = scratch_path("unpacked");
    let props_path = scratch_path("packed.properties");

    let data: Vec<u8> = (0..10_000u32).map(|i| (i * i % 251) as u8).collect();
    fs::write(&source, &data).unwrap();

    let processor = HuffProcessor::default();
    let props = processor.compress_file(&source, &packed).unwrap();
    props.store(&props_path).unwrap();

    let stats = processor.decompress_file(&packed, &unpacked).unwrap();

    assert_eq!(fs::read(&unpacked).unwrap(), data);
    assert_eq!(stats.output_bytes, data.len());
    assert_eq!(Properties::load(&props_path).unwrap(), props);

    for path in [source, packed, unpacked, props_path] {
        fs::remove_file(path).unwrap();
    }
}

#[test]
fn test_code_table_dump() {
    let source = scratch_path("dump_source");
    let packed = scratch_path("dump_packed");
    let dump = codes_path(&packed);

    let data = b"she sells sea shells by the sea shore".repeat(10);
    fs::write(&source, &data).unwrap();

    let processor = HuffProcessor::new(HuffConfig::new(0).with_dump_codes(true));
    let props = processor.compress_file(&source, &packed).unwrap();

    let codes = CodeTable::load(&dump).unwrap();

    assert_eq!(dump.file_name().unwrap().to_str().unwrap(), format!("huffman_rust_{}_dump_packed.codes.bin", std::process::id()));
    assert_eq!(&codes, HuffmanEncoder::from_bytes(&data).codes());
    assert_eq!(codes.len(), props.distinct_symbols);
    assert_eq!(codes.max_len(), props.max_code_len);

    for path in [source, packed, dump] {
        fs::remove_file(path).unwrap();
    }
}

#[test]
fn test_no_dump_by_default() {
    let source = scratch_path("nodump_source");
    let packed = scratch_path("nodump_packed");

    fs::write(&source, b"abracadabra").unwrap();
    HuffProcessor::default().compress_file(&source, &packed).unwrap();

    assert!(!codes_path(&packed).exists());

    for path in [source, packed] {
        fs::remove_file(path).unwrap();
    }
}

#[test]
fn test_compress_with_codes() {
    let data = b"abracadabra";
    let processor = HuffProcessor::default();

    let (compressed, props, codes) = processor.compress_with_codes(data).unwrap();

    assert_eq!(compressed, processor.compress(data).unwrap().0);
    assert_eq!(codes.len(), props.distinct_symbols);
    assert_eq!(&codes, HuffmanEncoder::from_bytes(data).codes());
}

#[test]
fn test_corrupt_code_dump() {
    let path = scratch_path("corrupt.codes.bin");
    fs::write(&path, [0xff; 3]).unwrap();

    assert!(matches!(CodeTable::load(&path), Err(HuffError::Serialization(_))));

    fs::remove_file(path).unwrap();
}

#[test]
fn test_rejected_file_leaves_no_output() {
    let source = scratch_path("garbage");
    let dest = scratch_path("garbage.out");

    fs::write(&source, b"definitely not huffman").unwrap();

    let result = HuffProcessor::default().decompress_file(&source, &dest);

    assert!(matches!(result, Err(HuffError::BadMagic(_))));
    assert!(!dest.exists());

    fs::remove_file(source).unwrap();
}

#[test]
fn test_log_levels() {
    use log::LevelFilter;

    assert_eq!(HuffConfig::new(0).log_level(), LevelFilter::Warn);
    assert_eq!(HuffConfig::new(1).log_level(), LevelFilter::Info);
    assert_eq!(HuffConfig::new(3).log_level(), LevelFilter::Debug);
    assert_eq!(HuffConfig::new(4).log_level(), LevelFilter::Trace);
}
