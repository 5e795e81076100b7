//! End-to-end checks against known encodings.

use canon_huff::bitstream::bit_seq::BitSeq;
use canon_huff::error::HuffError;
use canon_huff::huffman_coding::decoder::CanonicalDecoder;
use canon_huff::huffman_coding::session::{HuffmanSession, Stage};

const PASSAGE: &str = "Once there were brook trouts in the streams in the mountains. \
You could see them standing in the amber current where the white edges of their fins \
wimpled softly in the flow. They smelled of moss in your hand. \
Polished and muscular and torsional. On their backs were vermiculate patterns \
that were maps of the world in its becoming. Maps and mazes. \
Of a thing which could not be put back. Not be made right again. \
In the deep glens where they lived all things were older than man and they hummed of mystery.";

fn codes_as_text(table: &canon_huff::huffman_coding::code_table::CodeTable) -> Vec<String> {
    table
        .iter()
        .map(|(s, c)| format!("{}={}", s as char, c))
        .collect()
}

#[test]
fn simple_case() {
    let text = b"AAAABBBCCCDDEEF";
    let mut session = HuffmanSession::new();

    let counts = session.count_frequencies(text).unwrap().iter().collect::<Vec<_>>();
    assert_eq!(
        counts,
        vec![(b'A', 4), (b'B', 3), (b'C', 3), (b'D', 2), (b'E', 2), (b'F', 1)]
    );

    session.build_tree().unwrap();
    let raw = session.generate_codes().unwrap();
    assert_eq!(
        codes_as_text(raw),
        vec!["A=10", "B=111", "C=00", "D=011", "E=110", "F=010"]
    );

    let canonical = session.generate_canonical_codes().unwrap();
    assert_eq!(
        codes_as_text(canonical),
        vec!["A=00", "B=100", "C=01", "D=101", "E=110", "F=111"]
    );

    let encoded = session.encode(text, true).unwrap();
    let expected: BitSeq = "00000000100100100010101101101110110111".parse().unwrap();
    assert_eq!(encoded, expected);

    let raw_encoded = session.encode(text, false).unwrap();
    assert_eq!(
        raw_encoded.to_binary_text(),
        "10101010111111111000000011011110110010"
    );
}

#[test]
fn passage_round_trip() {
    let text = PASSAGE.as_bytes();
    let mut session = HuffmanSession::new();
    session.count_frequencies(text).unwrap();
    session.build_tree().unwrap();
    session.generate_codes().unwrap();
    let lengths = session.generate_canonical_codes().unwrap().lengths();
    let encoded = session.encode(text, true).unwrap();

    // Frequent symbols get short codes: the space is the most common byte in the passage.
    assert_eq!(lengths[0].0, b' ');
    assert!(encoded.len() < text.len() * 8);
    assert_eq!(encoded.byte_len(), (encoded.len() + 7) / 8);

    let decoded = CanonicalDecoder::from_lengths(&lengths)
        .unwrap()
        .decode(&encoded)
        .unwrap();
    assert_eq!(decoded, text);
}

#[test]
fn single_symbol_round_trip() {
    let text = b"aaaaaaaaa";
    let mut session = HuffmanSession::new();
    session.count_frequencies(text).unwrap();
    session.build_tree().unwrap();
    session.generate_codes().unwrap();
    let lengths = session.generate_canonical_codes().unwrap().lengths();
    assert_eq!(lengths, vec![(b'a', 1)]);

    let encoded = session.encode(text, true).unwrap();
    assert_eq!(encoded.len(), 9);
    assert_eq!(encoded.to_hex_text(None), "0000");

    let decoded = CanonicalDecoder::from_lengths(&lengths)
        .unwrap()
        .decode(&encoded)
        .unwrap();
    assert_eq!(decoded, text);
}

#[test]
fn encode_different_text() {
    let mut session = HuffmanSession::new();
    session.count_frequencies(b"abc").unwrap();
    session.build_tree().unwrap();
    session.generate_codes().unwrap();
    session.generate_canonical_codes().unwrap();
    let err = session.encode(b"abcd", true).unwrap_err();
    assert!(matches!(
        err,
        HuffError::UnknownSymbol {
            symbol: b'd',
            position: 3
        }
    ));
    assert_eq!(session.stage(), Stage::CanonicalCodesGenerated);
}

#[test]
fn sessions_are_independent() {
    let mut first = HuffmanSession::new();
    let mut second = HuffmanSession::new();
    first.count_frequencies(b"xxxy").unwrap();
    second.count_frequencies(b"pq").unwrap();
    first.build_tree().unwrap();
    second.build_tree().unwrap();
    assert_eq!(first.generate_codes().unwrap().len(), 2);
    assert_eq!(second.generate_codes().unwrap().len(), 2);
    assert!(first.raw_codes().unwrap().get(b'p').is_none());
}
