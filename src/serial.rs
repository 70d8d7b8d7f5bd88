// WHY: Row labels a., b., ..., z., aa., bb., ... derived purely from sorted rank

const ALPHABET_LEN: usize = 26;

/// Label for the row at zero-based `rank`, including the trailing `". "`.
///
/// The letter is `'a' + rank % 26`, repeated once per completed cycle of 26
/// plus one: ranks 0..=25 give one letter, 26..=51 two, and so on.
pub fn serial(rank: usize) -> String {
    let letter = char::from(b'a' + (rank % ALPHABET_LEN) as u8);
    let repeats = rank / ALPHABET_LEN + 1;

    let mut label = String::with_capacity(repeats + 2);
    label.extend(std::iter::repeat(letter).take(repeats));
    label.push_str(". ");
    label
}
