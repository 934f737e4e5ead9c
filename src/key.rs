//! # Key Signatures
//!
//! A key signature is a signed count of fifths: positive for sharp keys,
//! negative for flat keys, zero for C major / A minor. Sharps always enter
//! in the order F# C# G# D# A# E# B#, flats in the order Bb Eb Ab Db Gb Cb
//! Fb, so the count alone determines the altered notes.
//!
//! Not every note name can carry a key signature. A tonic is legal for a
//! mode exactly when its signature stays within seven sharps or seven flats;
//! G# major, for instance, would need eight sharps (an F##) and is rejected.
//! The legal tonic sets are fixed reference data: fifteen tonics per mode,
//! and the two sets are not mirror images of each other (G# minor is legal,
//! G# major is not).

use crate::note::{Accidental, Letter, Note};
use serde::{Serialize, Serializer};

const fn natural(letter: Letter) -> Note {
    Note::new(letter, Accidental::Natural)
}

const fn sharp(letter: Letter) -> Note {
    Note::new(letter, Accidental::Sharp)
}

const fn flat(letter: Letter) -> Note {
    Note::new(letter, Accidental::Flat)
}

/// Sharps in the order they enter a key signature.
static SHARPS: [Note; 7] = [
    sharp(Letter::F),
    sharp(Letter::C),
    sharp(Letter::G),
    sharp(Letter::D),
    sharp(Letter::A),
    sharp(Letter::E),
    sharp(Letter::B),
];

/// Flats in the order they enter a key signature.
static FLATS: [Note; 7] = [
    flat(Letter::B),
    flat(Letter::E),
    flat(Letter::A),
    flat(Letter::D),
    flat(Letter::G),
    flat(Letter::C),
    flat(Letter::F),
];

/// Tonics with a legal major key signature: the naturals, then the sharp
/// tonics, then the flat tonics.
static MAJOR_TONICS: [Note; 15] = [
    natural(Letter::A),
    natural(Letter::B),
    natural(Letter::C),
    natural(Letter::D),
    natural(Letter::E),
    natural(Letter::F),
    natural(Letter::G),
    sharp(Letter::C),
    sharp(Letter::F),
    flat(Letter::A),
    flat(Letter::B),
    flat(Letter::C),
    flat(Letter::D),
    flat(Letter::E),
    flat(Letter::G),
];

/// Tonics with a legal minor key signature. More sharp tonics are legal here
/// than in major (A#, D#, G#), and fewer flat ones (no Cb, Db, or Gb minor).
static MINOR_TONICS: [Note; 15] = [
    natural(Letter::A),
    natural(Letter::B),
    natural(Letter::C),
    natural(Letter::D),
    natural(Letter::E),
    natural(Letter::F),
    natural(Letter::G),
    sharp(Letter::A),
    sharp(Letter::D),
    sharp(Letter::G),
    sharp(Letter::C),
    sharp(Letter::F),
    flat(Letter::A),
    flat(Letter::E),
    flat(Letter::B),
];

/// Key-signature mode class.
///
/// Natural, harmonic, and melodic minor scales on the same tonic all share
/// one key signature, so only major versus minor matters here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// The tonics that can carry a key signature in this mode.
    pub fn legal_tonics(self) -> &'static [Note; 15] {
        match self {
            Mode::Major => &MAJOR_TONICS,
            Mode::Minor => &MINOR_TONICS,
        }
    }
}

/// Key signature as a signed count of fifths.
/// Positive = sharps, negative = flats, zero = C major / A minor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySignature {
    fifths: i8,
}

impl KeySignature {
    /// Look up the key signature for a tonic in the given mode.
    ///
    /// Returns `None` when the tonic has no key signature within seven
    /// sharps or flats; these are exactly the tonics missing from
    /// [`Mode::legal_tonics`].
    ///
    /// # Example
    /// ```
    /// use diatonic::{KeySignature, Mode, Note};
    ///
    /// let g = Note::parse("G")?;
    /// let signature = KeySignature::for_key(g, Mode::Major).unwrap();
    /// assert_eq!(signature.fifths(), 1);
    ///
    /// let g_sharp = Note::parse("G#")?;
    /// assert!(KeySignature::for_key(g_sharp, Mode::Major).is_none());
    /// assert!(KeySignature::for_key(g_sharp, Mode::Minor).is_some());
    /// # Ok::<(), diatonic::TheoryError>(())
    /// ```
    pub fn for_key(tonic: Note, mode: Mode) -> Option<KeySignature> {
        use Accidental::{Flat, Natural, Sharp};
        use Letter::{A, B, C, D, E, F, G};

        let fifths = match mode {
            Mode::Major => match (tonic.letter(), tonic.accidental()) {
                (C, Natural) => 0,
                (G, Natural) => 1,
                (D, Natural) => 2,
                (A, Natural) => 3,
                (E, Natural) => 4,
                (B, Natural) => 5,
                (F, Sharp) => 6,
                (C, Sharp) => 7,
                (F, Natural) => -1,
                (B, Flat) => -2,
                (E, Flat) => -3,
                (A, Flat) => -4,
                (D, Flat) => -5,
                (G, Flat) => -6,
                (C, Flat) => -7,
                _ => return None,
            },
            Mode::Minor => match (tonic.letter(), tonic.accidental()) {
                (A, Natural) => 0,  // A minor (same signature as C major)
                (E, Natural) => 1,  // E minor (same as G major)
                (B, Natural) => 2,  // B minor (same as D major)
                (F, Sharp) => 3,    // F# minor (same as A major)
                (C, Sharp) => 4,    // C# minor (same as E major)
                (G, Sharp) => 5,    // G# minor (same as B major)
                (D, Sharp) => 6,    // D# minor (same as F# major)
                (A, Sharp) => 7,    // A# minor (same as C# major)
                (D, Natural) => -1, // D minor (same as F major)
                (G, Natural) => -2, // G minor (same as Bb major)
                (C, Natural) => -3, // C minor (same as Eb major)
                (F, Natural) => -4, // F minor (same as Ab major)
                (B, Flat) => -5,    // Bb minor (same as Db major)
                (E, Flat) => -6,    // Eb minor (same as Gb major)
                (A, Flat) => -7,    // Ab minor (same as Cb major)
                _ => return None,
            },
        };

        Some(KeySignature { fifths })
    }

    /// Signed fifths count, -7 to +7.
    pub fn fifths(self) -> i8 {
        self.fifths
    }

    /// The altered notes, in the order they appear in the signature.
    ///
    /// # Example
    /// ```
    /// use diatonic::{KeySignature, Mode, Note};
    ///
    /// let d = Note::parse("D")?;
    /// let signature = KeySignature::for_key(d, Mode::Major).unwrap();
    /// let names: Vec<String> = signature.notes().iter().map(|n| n.to_string()).collect();
    /// assert_eq!(names, ["F#", "C#"]);
    /// # Ok::<(), diatonic::TheoryError>(())
    /// ```
    pub fn notes(self) -> &'static [Note] {
        if self.fifths > 0 {
            &SHARPS[..self.fifths as usize]
        } else if self.fifths < 0 {
            &FLATS[..(-self.fifths) as usize]
        } else {
            &[]
        }
    }
}

impl Serialize for KeySignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.notes())
    }
}
