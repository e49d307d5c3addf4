//! J-anchor detection and frame selection.
//!
//! The J-region anchor is `F` or `W`, then `G`, any residue in `A..=Z`, then `G`.
//! `X` fills the wildcard position; a stop `*` does not.

use crate::seq::protein::ProteinSeq;
use memchr::memchr2_iter;

const ANCHOR_LEN: usize = 4;

/// Start of the first anchor window in `protein`.
pub fn find_j_anchor(protein: &[u8]) -> Option<usize> {
    memchr2_iter(b'F', b'W', protein).find(|&i| is_anchor(protein.get(i..i + ANCHOR_LEN)))
}

#[inline]
fn is_anchor(window: Option<&[u8]>) -> bool {
    matches!(window, Some(&[_, b'G', x, b'G']) if x.is_ascii_uppercase())
}

/// Index of the first translation that carries the anchor.
///
/// Falls back to 0 when none match; `None` only for an empty list. Earlier
/// entries win, regardless of where or how often later ones match.
pub fn select_frame_index<S: AsRef<[u8]>>(translations: &[S]) -> Option<usize> {
    if translations.is_empty() {
        return None;
    }
    let hit = translations
        .iter()
        .position(|t| find_j_anchor(t.as_ref()).is_some());
    Some(hit.unwrap_or(0))
}

pub fn select_translation(translations: &[ProteinSeq]) -> ProteinSeq {
    match select_frame_index(translations) {
        Some(idx) => translations[idx].clone(),
        None => ProteinSeq::default(),
    }
}

/// Consuming form of [`select_translation`] for the three frame translations.
pub fn select_frame(translations: [ProteinSeq; 3]) -> ProteinSeq {
    let idx = select_frame_index(&translations).unwrap_or(0);
    let [f0, f1, f2] = translations;
    match idx {
        1 => f1,
        2 => f2,
        _ => f0,
    }
}
