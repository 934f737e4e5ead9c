//! # Note Types
//!
//! A [`Note`] is a spelled pitch: a letter A through G plus an accidental.
//! Spelling is identity here: two notes are equal only when both the letter
//! and the accidental match. C# and Db sound the same but are different
//! notes, and a scale that needs one of them is wrong with the other.
//!
//! Double sharps and double flats are valid spellings (the seventh degree of
//! a G# harmonic minor scale is F##), but a plain note name carries at most
//! two of the same accidental mark.

use crate::error::TheoryError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Note letters A through G
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// Letters in diatonic order, starting from C so that indices line up with
/// the pitch-class origin.
const DIATONIC_ORDER: [Letter; 7] = [
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
];

impl Letter {
    fn from_char(c: char) -> Option<Letter> {
        match c {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }

    /// Pitch class of the plain (natural) letter.
    pub(crate) fn natural_semitone(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn diatonic_index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// The letter `steps` diatonic positions above this one, wrapping at B.
    pub(crate) fn advance(self, steps: u8) -> Letter {
        DIATONIC_ORDER[(self.diatonic_index() + steps as usize) % 7]
    }
}

/// Accidentals: natural (unmarked), sharp, flat, or their doubles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accidental {
    Natural,     // (none)
    Sharp,       // #
    Flat,        // b
    DoubleSharp, // ##
    DoubleFlat,  // bb
}

impl Accidental {
    /// Semitone adjustment applied to the natural letter.
    pub(crate) fn chromatic_offset(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
            Accidental::DoubleSharp => 2,
            Accidental::DoubleFlat => -2,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::DoubleSharp => "##",
            Accidental::DoubleFlat => "bb",
        }
    }
}

/// A spelled pitch: letter plus accidental, octave-independent.
///
/// Equality is exact spelling, not enharmonic pitch equality:
///
/// ```
/// use diatonic::Note;
///
/// let c_sharp = Note::parse("C#")?;
/// let d_flat = Note::parse("Db")?;
/// assert_ne!(c_sharp, d_flat);
/// # Ok::<(), diatonic::TheoryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
}

impl Note {
    pub const fn new(letter: Letter, accidental: Accidental) -> Note {
        Note { letter, accidental }
    }

    /// Parse a note name: one letter A-G, then an optional `#`, `##`, `b`,
    /// or `bb`.
    ///
    /// # Example
    /// ```
    /// use diatonic::Note;
    ///
    /// assert_eq!(Note::parse("Bb")?.to_string(), "Bb");
    /// assert_eq!(Note::parse("F##")?.to_string(), "F##");
    /// assert!(Note::parse("H").is_err());
    /// # Ok::<(), diatonic::TheoryError>(())
    /// ```
    pub fn parse(name: &str) -> Result<Note, TheoryError> {
        let invalid = || TheoryError::InvalidNote {
            name: name.to_string(),
        };

        let mut chars = name.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(invalid)?;

        let accidental = match chars.as_str() {
            "" => Accidental::Natural,
            "#" => Accidental::Sharp,
            "b" => Accidental::Flat,
            "##" => Accidental::DoubleSharp,
            "bb" => Accidental::DoubleFlat,
            _ => return Err(invalid()),
        };

        Ok(Note { letter, accidental })
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Pitch class 0-11, with C natural at 0.
    pub(crate) fn semitone(self) -> u8 {
        let value =
            self.letter.natural_semitone() as i8 + self.accidental.chromatic_offset();
        value.rem_euclid(12) as u8
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Note, TheoryError> {
        Note::parse(s)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.suffix())
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for name in ["C", "F#", "Bb", "G##", "Ebb", "A", "Cb", "B#"] {
            let note = Note::parse(name).unwrap();
            assert_eq!(note.to_string(), name);
        }
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        for name in ["", "H", "c", "C###", "Cbbb", "C#b", "Cx", " C", "C "] {
            assert!(Note::parse(name).is_err(), "{:?} should not parse", name);
        }
    }

    #[test]
    fn test_equality_is_spelling_not_pitch() {
        let c_sharp = Note::parse("C#").unwrap();
        let d_flat = Note::parse("Db").unwrap();
        assert_eq!(c_sharp.semitone(), d_flat.semitone());
        assert_ne!(c_sharp, d_flat);
    }

    #[test]
    fn test_semitone_values() {
        // C=0, B#=0 (wraps), Cb=11 (wraps), F##=7, Abb=7
        assert_eq!(Note::parse("C").unwrap().semitone(), 0);
        assert_eq!(Note::parse("B#").unwrap().semitone(), 0);
        assert_eq!(Note::parse("Cb").unwrap().semitone(), 11);
        assert_eq!(Note::parse("F##").unwrap().semitone(), 7);
        assert_eq!(Note::parse("Abb").unwrap().semitone(), 7);
    }

    #[test]
    fn test_letter_advance_wraps_at_b() {
        assert_eq!(Letter::C.advance(4), Letter::G);
        assert_eq!(Letter::A.advance(2), Letter::C);
        assert_eq!(Letter::B.advance(6), Letter::A);
        assert_eq!(Letter::F.advance(0), Letter::F);
    }

    #[test]
    fn test_from_str_trait() {
        let note: Note = "Eb".parse().unwrap();
        assert_eq!(note, Note::new(Letter::E, Accidental::Flat));
    }
}
