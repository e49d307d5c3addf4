use super::codon::{CodonTable, UNKNOWN};
use super::motif::{find_j_anchor, select_frame_index, select_translation};
use super::translate::{translate, translate_all_frames};
use proptest::prelude::*;

fn bases() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'N')],
        0..90,
    )
}

fn anchorless_residues() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ARNDCEQGHILKMPSTYV*X".to_vec()), 0..30)
}

fn anchor() -> impl Strategy<Value = [u8; 4]> {
    (
        prop::sample::select(vec![b'F', b'W']),
        prop::sample::select(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_vec()),
    )
        .prop_map(|(head, wild)| [head, b'G', wild, b'G'])
}

fn plant(residues: &mut Vec<u8>, at: usize, motif: [u8; 4]) {
    let at = at % (residues.len() + 1);
    residues.splice(at..at, motif);
}

fn noisy(seq: &[u8], noise: &[(u8, bool)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len() * 2);
    for (i, &b) in seq.iter().enumerate() {
        let (ws, lower) = noise[i % noise.len()];
        if ws % 4 == 0 {
            out.push(b'\n');
        } else if ws % 4 == 1 {
            out.push(b' ');
        }
        out.push(if lower { b.to_ascii_lowercase() } else { b });
    }
    out
}

#[test]
fn end_to_end_j_anchor_in_frame_zero() {
    let protein = translate(b"ATGTTTGGTGCTGGT", 0);
    assert_eq!(protein.to_string(), "MFGAG");
    assert_eq!(find_j_anchor(protein.as_bytes()), Some(1));
    assert_eq!(select_translation(&[protein.clone()]), protein);
}

proptest! {
    #[test]
    fn translation_length(seq in bases(), offset in 0usize..6) {
        let protein = translate(&seq, offset);
        prop_assert_eq!(protein.len(), seq.len().saturating_sub(offset) / 3);
    }

    #[test]
    fn normalization_is_invisible(
        seq in bases(),
        noise in prop::collection::vec((any::<u8>(), any::<bool>()), 1..8),
        offset in 0usize..3,
    ) {
        let dirty = noisy(&seq, &noise);
        prop_assert_eq!(translate(&dirty, offset), translate(&seq, offset));
    }

    #[test]
    fn all_frames_match_single_frame(seq in bases()) {
        let frames = translate_all_frames(&seq);
        for (k, frame) in frames.iter().enumerate() {
            prop_assert_eq!(frame.clone(), translate(&seq, k));
        }
    }

    #[test]
    fn lookup_is_total(codon in prop::collection::vec(any::<u8>(), 3)) {
        let residue = CodonTable::standard().lookup(&codon);
        let canonical = codon.iter().all(|b| b"ACGT".contains(b));
        prop_assert!(canonical || residue == UNKNOWN);
        prop_assert!(b"ARNDCEQGHILKMFPSTWYV*X".contains(&residue));
    }

    #[test]
    fn selection_picks_planted_frame(
        mut frames in prop::collection::vec(anchorless_residues(), 3),
        target in 0usize..3,
        plant_later in any::<bool>(),
        motif in anchor(),
        at in any::<usize>(),
    ) {
        plant(&mut frames[target], at, motif);
        if plant_later {
            for frame in frames.iter_mut().skip(target + 1) {
                plant(frame, at / 2, motif);
            }
        }
        prop_assert_eq!(select_frame_index(&frames), Some(target));
    }

    #[test]
    fn selection_without_anchor_is_frame_zero(
        frames in prop::collection::vec(anchorless_residues(), 1..4),
    ) {
        prop_assert_eq!(select_frame_index(&frames), Some(0));
    }

    #[test]
    fn non_ascii_counts_as_one_base(
        seq in bases(),
        at in any::<usize>(),
        ch in prop::sample::select(vec!['é', '€', '\u{00a0}', '🧬']),
    ) {
        let mut text = String::from_utf8(seq.clone()).unwrap();
        text.insert(at % (seq.len() + 1), ch);
        prop_assert_eq!(translate(text.as_bytes(), 0).len(), (seq.len() + 1) / 3);
    }
}
