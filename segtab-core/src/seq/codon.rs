//! Standard genetic code lookup.

use crate::alphabets::{dna, RankTransform};
use std::sync::LazyLock;

/// Symbol for codons outside the table.
pub const UNKNOWN: u8 = b'X';
pub const STOP: u8 = b'*';

/// Residues for NCBI table 1, indexed by `16 * r1 + 4 * r2 + r3` with A=0, C=1, G=2, T=3.
const STANDARD_CODE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

static STANDARD: LazyLock<CodonTable> = LazyLock::new(|| CodonTable {
    ranks: RankTransform::new(&dna::alphabet()),
    residues: STANDARD_CODE,
});

#[derive(Clone, Debug)]
pub struct CodonTable {
    ranks: RankTransform,
    residues: [u8; 64],
}

impl CodonTable {
    pub fn standard() -> &'static CodonTable {
        &STANDARD
    }

    /// Residue for a codon. Anything that is not three upper-case `ACGT` bytes is `X`.
    #[inline]
    pub fn lookup(&self, codon: &[u8]) -> u8 {
        let [b1, b2, b3] = codon else {
            return UNKNOWN;
        };
        match (self.ranks.get(*b1), self.ranks.get(*b2), self.ranks.get(*b3)) {
            (Some(r1), Some(r2), Some(r3)) => {
                let idx = ((r1 as usize) << 4) | ((r2 as usize) << 2) | (r3 as usize);
                self.residues[idx]
            }
            _ => UNKNOWN,
        }
    }

    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.lookup(codon) == STOP
    }
}
