use crate::alphabets::Alphabet;

/// Residues a translation can produce: the 20 standard amino acids, stop and unknown.
pub fn translation_alphabet() -> Alphabet {
    Alphabet::new(&b"ARNDCEQGHILKMFPSTWYV*X"[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_and_unknown_are_residues() {
        assert!(translation_alphabet().is_word(b"MFGAG*X"));
        assert_eq!(translation_alphabet().len(), 22);
    }

    #[test]
    fn ambiguity_letters_are_not_residues() {
        assert!(!translation_alphabet().is_word(b"B"));
        assert!(!translation_alphabet().is_word(b"m"));
    }
}
