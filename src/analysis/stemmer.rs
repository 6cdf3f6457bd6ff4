//! Porter stemmer
//!
//! Reduces a lowercase English word to its stem through five ordered rule
//! groups. Two local departures from the published algorithm are kept:
//! words of one or two letters are returned untouched, and step 2 maps
//! `bli -> ble` and `logi -> log`.
//!
//! All per-word state lives in a `StemBuffer` created for each call, so one
//! `PorterStemmer` can be shared freely.

/// Working state for a single word.
///
/// `b` always ends at the current end of the word (the published algorithm's
/// `k`). `j` is the length of the stem in front of the last matched suffix.
struct StemBuffer {
    b: Vec<char>,
    j: usize,
}

impl StemBuffer {
    fn new(word: &str) -> Self {
        let b: Vec<char> = word.chars().collect();
        let j = b.len();
        Self { b, j }
    }

    #[inline]
    fn len(&self) -> usize {
        self.b.len()
    }

    #[inline]
    fn last(&self) -> Option<char> {
        self.b.last().copied()
    }

    #[inline]
    fn penultimate(&self) -> Option<char> {
        let n = self.len();
        if n < 2 { None } else { Some(self.b[n - 2]) }
    }

    /// `y` counts as a consonant at the start of the word or after a vowel
    ///
    /// Inside a run of `y`s the answer alternates, so only the letter in
    /// front of the run matters.
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => {
                let start = self.b[..i].iter().rposition(|&c| c != 'y').map_or(0, |p| p + 1);
                let first_is_consonant = start == 0 || matches!(self.b[start - 1], 'a' | 'e' | 'i' | 'o' | 'u');
                ((i - start) % 2 == 0) == first_is_consonant
            }
            _ => true,
        }
    }

    /// `is_consonant` for every position, in one pass
    fn consonant_flags(&self) -> Vec<bool> {
        let mut flags: Vec<bool> = Vec::with_capacity(self.len());
        for (i, &c) in self.b.iter().enumerate() {
            let consonant = match c {
                'a' | 'e' | 'i' | 'o' | 'u' => false,
                'y' => i == 0 || !flags[i - 1],
                _ => true,
            };
            flags.push(consonant);
        }
        flags
    }

    /// Number of vowel-sequence to consonant-sequence transitions in `b[..j]`
    ///
    /// ```text
    /// <c><v>       -> 0
    /// <c>vc<v>     -> 1
    /// <c>vcvc<v>   -> 2
    /// ```
    fn measure(&self) -> usize {
        let end = self.j.min(self.len());
        let consonant = self.consonant_flags();
        let mut n = 0;
        let mut i = 0;
        // leading consonants
        while i < end && consonant[i] {
            i += 1;
        }
        loop {
            // vowels
            while i < end && !consonant[i] {
                i += 1;
            }
            if i >= end {
                return n;
            }
            n += 1;
            // consonants
            while i < end && consonant[i] {
                i += 1;
            }
            if i >= end {
                return n;
            }
        }
    }

    fn vowel_in_stem(&self) -> bool {
        let end = self.j.min(self.len());
        self.consonant_flags()[..end].iter().any(|&consonant| !consonant)
    }

    /// `b[i-1]` and `b[i]` are the same consonant
    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// `b[i-2..=i]` is consonant-vowel-consonant and `b[i]` is not w, x or y
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2) {
            return false;
        }
        !matches!(self.b[i], 'w' | 'x' | 'y')
    }

    /// On a match, moves `j` to the start of the suffix.
    fn ends_with(&mut self, suffix: &str) -> bool {
        let n = suffix.chars().count();
        if n > self.len() {
            return false;
        }
        let start = self.len() - n;
        if !self.b[start..].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.j = start;
        true
    }

    /// Replaces everything after the stem with `suffix`
    fn replace_suffix(&mut self, suffix: &str) {
        self.b.truncate(self.j);
        self.b.extend(suffix.chars());
    }

    fn replace_if_substantial(&mut self, suffix: &str) {
        if self.measure() > 0 {
            self.replace_suffix(suffix);
        }
    }

    fn drop_last(&mut self, n: usize) {
        let keep = self.len().saturating_sub(n);
        self.b.truncate(keep);
    }

    /// Plurals and -ed / -ing
    fn plurals_and_participles(&mut self) {
        if self.last() == Some('s') {
            if self.ends_with("sses") {
                self.drop_last(2);
            } else if self.ends_with("ies") {
                self.replace_suffix("i");
            } else if self.penultimate() != Some('s') {
                self.drop_last(1);
            }
        }

        if self.ends_with("eed") {
            if self.measure() > 0 {
                self.drop_last(1);
            }
        } else if (self.ends_with("ed") || self.ends_with("ing")) && self.vowel_in_stem() {
            self.b.truncate(self.j);
            if self.ends_with("at") {
                self.replace_suffix("ate");
            } else if self.ends_with("bl") {
                self.replace_suffix("ble");
            } else if self.ends_with("iz") {
                self.replace_suffix("ize");
            } else if self.double_consonant(self.len() - 1) {
                if !matches!(self.last(), Some('l' | 's' | 'z')) {
                    self.drop_last(1);
                }
            } else if self.measure() == 1 && self.cvc(self.len() - 1) {
                self.replace_suffix("e");
            }
        }
    }

    /// Terminal y -> i when the stem has another vowel
    fn terminal_y(&mut self) {
        if self.ends_with("y") && self.vowel_in_stem() {
            let last = self.len() - 1;
            self.b[last] = 'i';
        }
    }

    /// Double suffixes to single ones, keyed on the penultimate letter
    fn suffix_families(&mut self) {
        const RULES: &[(char, &[(&str, &str)])] = &[
            ('a', &[("ational", "ate"), ("tional", "tion")]),
            ('c', &[("enci", "ence"), ("anci", "ance")]),
            ('e', &[("izer", "ize")]),
            ('l', &[("bli", "ble"), ("alli", "al"), ("entli", "ent"), ("eli", "e"), ("ousli", "ous")]),
            ('o', &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")]),
            ('s', &[("alism", "al"), ("iveness", "ive"), ("fulness", "ful"), ("ousness", "ous")]),
            ('t', &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")]),
            ('g', &[("logi", "log")]),
        ];
        let Some(key) = self.penultimate() else { return };
        self.apply_first_match(key, RULES);
    }

    /// -ic-, -full, -ness and friends, keyed on the last letter
    fn suffix_trimming(&mut self) {
        const RULES: &[(char, &[(&str, &str)])] = &[
            ('e', &[("icate", "ic"), ("ative", ""), ("alize", "al")]),
            ('i', &[("iciti", "ic")]),
            ('l', &[("ical", "ic"), ("ful", "")]),
            ('s', &[("ness", "")]),
        ];
        let Some(key) = self.last() else { return };
        self.apply_first_match(key, RULES);
    }

    fn apply_first_match(&mut self, key: char, rules: &[(char, &[(&str, &str)])]) {
        let Some((_, group)) = rules.iter().find(|(c, _)| *c == key) else { return };
        for (suffix, replacement) in group.iter() {
            if self.ends_with(suffix) {
                self.replace_if_substantial(replacement);
                return;
            }
        }
    }

    /// Drops -ant, -ence etc. in context `<c>vcvc<v>`
    fn contextual_removal(&mut self) {
        let Some(key) = self.penultimate() else { return };
        let matched = match key {
            'a' => self.ends_with("al"),
            'c' => self.ends_with("ance") || self.ends_with("ence"),
            'e' => self.ends_with("er"),
            'i' => self.ends_with("ic"),
            'l' => self.ends_with("able") || self.ends_with("ible"),
            'n' => {
                self.ends_with("ant")
                    || self.ends_with("ement")
                    || self.ends_with("ment")
                    || self.ends_with("ent")
            }
            // -ion only after s or t; -ou covers -ous
            'o' => {
                (self.ends_with("ion") && self.j > 0 && matches!(self.b[self.j - 1], 's' | 't'))
                    || self.ends_with("ou")
            }
            's' => self.ends_with("ism"),
            't' => self.ends_with("ate") || self.ends_with("iti"),
            'u' => self.ends_with("ous"),
            'v' => self.ends_with("ive"),
            'z' => self.ends_with("ize"),
            _ => false,
        };
        if matched && self.measure() > 1 {
            self.b.truncate(self.j);
        }
    }

    /// Final -e and -ll
    fn final_cleanup(&mut self) {
        self.j = self.len();
        // j stays at the word end for both checks, so the measure is read once
        let m = self.measure();
        if self.last() == Some('e') {
            let last = self.len() - 1;
            if m > 1 || (m == 1 && !(last >= 1 && self.cvc(last - 1))) {
                self.drop_last(1);
            }
        }
        if self.last() == Some('l') && self.double_consonant(self.len() - 1) && m > 1 {
            self.drop_last(1);
        }
    }

    fn into_string(self) -> String {
        self.b.into_iter().collect()
    }
}

/// Porter stemmer
///
/// Expects lowercase alphabetic input; callers normalize case first.
/// Other characters are treated as consonants and never cause a failure.
///
/// # Examples
/// ```
/// use stem_cluster::PorterStemmer;
/// let stemmer = PorterStemmer::new();
/// assert_eq!(stemmer.stem("meetings"), "meet");
/// assert_eq!(stemmer.stem("ab"), "ab");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Stem one word
    pub fn stem(&self, word: &str) -> String {
        if word.chars().count() <= 2 {
            return word.to_string();
        }
        let mut buf = StemBuffer::new(word);
        buf.plurals_and_participles();
        buf.terminal_y();
        buf.suffix_families();
        buf.suffix_trimming();
        buf.contextual_removal();
        buf.final_cleanup();
        buf.into_string()
    }
}
