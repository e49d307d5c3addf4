use crate::alphabets::Alphabet;

/// Canonical upper-case bases; the only symbols the codon table resolves.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

/// IUPAC nucleotide codes in either case, plus `-` for gaps.
pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTUWSMKRYBDHVNacgtuwsmkrybdhvn-")
}
