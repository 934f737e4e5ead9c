//! # Scales
//!
//! This module builds scales from a name like `"C MAJOR"` or
//! `"F# HARMONIC MINOR"` and is the main surface of the crate.
//!
//! ## Construction Pipeline
//! 1. Split the name into a tonic token and a quality token
//! 2. Resolve the quality token against the closed [`Quality`] set
//! 3. Validate the tonic against the quality's legal tonic set
//! 4. Spell the seven notes by walking the quality's interval pattern
//! 5. Look up the key signature for the tonic's mode class
//!
//! Construction either succeeds with every invariant holding (seven notes,
//! tonic first, key signature consistent with the tonic) or fails with a
//! [`TheoryError`] before any `Scale` exists.
//!
//! ## Validation
//! The legal tonic sets encode which spellings stay within single and double
//! accidentals. A tonic can be a valid note name and still be rejected for a
//! quality: G# major would need an F## in its key signature, so only the
//! minor qualities accept G#. See [`Mode::legal_tonics`].
//!
//! ## Degrees
//! Each note of a constructed scale is addressable by its classical degree
//! name (TONIC through LEADING TONE), either as a string (checked at run
//! time) or through the closed [`Degree`] enum (checked at compile time):
//!
//! ```
//! use diatonic::{Degree, Scale};
//!
//! let scale = Scale::new("D MAJOR")?;
//! assert_eq!(scale.degree("DOMINANT")?.to_string(), "A");
//! assert_eq!(scale[Degree::Dominant].to_string(), "A");
//! # Ok::<(), diatonic::TheoryError>(())
//! ```

use crate::error::TheoryError;
use crate::interval::Interval;
use crate::key::{KeySignature, Mode};
use crate::note::Note;
use serde::Serialize;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Scale qualities: major and the three minor variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quality {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
}

impl Quality {
    /// Resolve an uppercase quality token.
    ///
    /// `"MINOR"` is accepted as shorthand for `"NATURAL MINOR"`.
    pub fn from_name(name: &str) -> Option<Quality> {
        match name {
            "MAJOR" => Some(Quality::Major),
            "MINOR" | "NATURAL MINOR" => Some(Quality::NaturalMinor),
            "HARMONIC MINOR" => Some(Quality::HarmonicMinor),
            "MELODIC MINOR" => Some(Quality::MelodicMinor),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Quality::Major => "MAJOR",
            Quality::NaturalMinor => "NATURAL MINOR",
            Quality::HarmonicMinor => "HARMONIC MINOR",
            Quality::MelodicMinor => "MELODIC MINOR",
        }
    }

    /// The key-signature mode class. All three minor qualities share their
    /// tonic's minor key signature.
    pub fn mode(self) -> Mode {
        match self {
            Quality::Major => Mode::Major,
            Quality::NaturalMinor | Quality::HarmonicMinor | Quality::MelodicMinor => Mode::Minor,
        }
    }

    /// Interval pattern measured up from the tonic.
    pub fn intervals(self) -> &'static [Interval; 7] {
        use Interval::*;
        match self {
            Quality::Major => &[
                Unison,
                MajorSecond,
                MajorThird,
                PerfectFourth,
                PerfectFifth,
                MajorSixth,
                MajorSeventh,
            ],
            Quality::NaturalMinor => &[
                Unison,
                MajorSecond,
                MinorThird,
                PerfectFourth,
                PerfectFifth,
                MinorSixth,
                MinorSeventh,
            ],
            Quality::HarmonicMinor => &[
                Unison,
                MajorSecond,
                MinorThird,
                PerfectFourth,
                PerfectFifth,
                MinorSixth,
                MajorSeventh, // raised seventh
            ],
            Quality::MelodicMinor => &[
                Unison,
                MajorSecond,
                MinorThird,
                PerfectFourth,
                PerfectFifth,
                MajorSixth,   // raised sixth
                MajorSeventh, // raised seventh
            ],
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Quality {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Named positions in a seven-note scale, TONIC through LEADING TONE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degree {
    Tonic,
    Supertonic,
    Mediant,
    Subdominant,
    Dominant,
    Submediant,
    LeadingTone,
}

impl Degree {
    /// Resolve an uppercase degree name ("LEADING TONE" keeps its space).
    pub fn from_name(name: &str) -> Option<Degree> {
        match name {
            "TONIC" => Some(Degree::Tonic),
            "SUPERTONIC" => Some(Degree::Supertonic),
            "MEDIANT" => Some(Degree::Mediant),
            "SUBDOMINANT" => Some(Degree::Subdominant),
            "DOMINANT" => Some(Degree::Dominant),
            "SUBMEDIANT" => Some(Degree::Submediant),
            "LEADING TONE" => Some(Degree::LeadingTone),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Degree::Tonic => "TONIC",
            Degree::Supertonic => "SUPERTONIC",
            Degree::Mediant => "MEDIANT",
            Degree::Subdominant => "SUBDOMINANT",
            Degree::Dominant => "DOMINANT",
            Degree::Submediant => "SUBMEDIANT",
            Degree::LeadingTone => "LEADING TONE",
        }
    }

    /// Zero-based position in the scale.
    pub fn index(self) -> usize {
        match self {
            Degree::Tonic => 0,
            Degree::Supertonic => 1,
            Degree::Mediant => 2,
            Degree::Subdominant => 3,
            Degree::Dominant => 4,
            Degree::Submediant => 5,
            Degree::LeadingTone => 6,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A seven-note scale with its key signature.
///
/// Immutable once constructed; every accessor is a pure read. A `Scale`
/// holds only `Copy` data, so sharing it across threads needs no locking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    tonic: Note,
    quality: Quality,
    notes: [Note; 7],
    key_signature: KeySignature,
}

impl Scale {
    /// Build a scale from a `"<TONIC> <QUALITY>"` name.
    ///
    /// The tonic is a letter A-G with an optional single sharp or flat; the
    /// quality is one of the uppercase names MAJOR, NATURAL MINOR (or
    /// MINOR), HARMONIC MINOR, MELODIC MINOR.
    ///
    /// # Example
    /// ```
    /// use diatonic::Scale;
    ///
    /// let scale = Scale::new("E HARMONIC MINOR")?;
    /// assert_eq!(scale.ascend(), ["E", "F#", "G", "A", "B", "C", "D#"]);
    /// # Ok::<(), diatonic::TheoryError>(())
    /// ```
    ///
    /// # Errors
    /// - [`TheoryError::InvalidScaleName`] when the name has no quality token
    /// - [`TheoryError::UnknownQuality`] for an unrecognized quality
    /// - [`TheoryError::InvalidTonic`] when the tonic cannot carry the
    ///   quality, the expected failure mode:
    ///
    /// ```
    /// use diatonic::{Scale, TheoryError};
    ///
    /// assert!(matches!(
    ///     Scale::new("G# MAJOR"),
    ///     Err(TheoryError::InvalidTonic { .. })
    /// ));
    /// assert!(Scale::new("G# MINOR").is_ok());
    /// ```
    pub fn new(name: &str) -> Result<Scale, TheoryError> {
        let (tonic_name, quality_name) =
            name.split_once(' ').ok_or_else(|| TheoryError::InvalidScaleName {
                name: name.to_string(),
            })?;

        let quality =
            Quality::from_name(quality_name).ok_or_else(|| TheoryError::UnknownQuality {
                quality: quality_name.to_string(),
            })?;

        // An unparseable tonic and a parseable-but-illegal tonic fail the
        // same way: no scale of this quality can be spelled from it.
        let tonic = match Note::parse(tonic_name) {
            Ok(note) if quality.mode().legal_tonics().contains(&note) => note,
            _ => {
                return Err(TheoryError::InvalidTonic {
                    tonic: tonic_name.to_string(),
                    quality,
                })
            }
        };

        let intervals = quality.intervals();
        let notes: [Note; 7] = std::array::from_fn(|degree| tonic.interval_up(intervals[degree]));

        // The legal tonic sets and the signature registry cover the same
        // domains, so this lookup cannot miss once validation has passed.
        let key_signature = KeySignature::for_key(tonic, quality.mode())
            .expect("every legal tonic has a key signature");

        Ok(Scale {
            tonic,
            quality,
            notes,
            key_signature,
        })
    }

    pub fn tonic(&self) -> Note {
        self.tonic
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// The seven notes in ascending order, tonic first.
    pub fn notes(&self) -> &[Note; 7] {
        &self.notes
    }

    pub fn key_signature(&self) -> KeySignature {
        self.key_signature
    }

    /// Look up a note by its uppercase degree name.
    ///
    /// # Errors
    /// [`TheoryError::InvalidDegree`] for an unrecognized name.
    pub fn degree(&self, name: &str) -> Result<Note, TheoryError> {
        let degree = Degree::from_name(name).ok_or_else(|| TheoryError::InvalidDegree {
            degree: name.to_string(),
        })?;
        Ok(self.notes[degree.index()])
    }

    /// Whether the scale contains `note`, spelled exactly. The enharmonic
    /// equivalent of a scale note does not count.
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// Display names of the seven notes in ascending order.
    pub fn ascend(&self) -> Vec<String> {
        self.notes.iter().map(|note| note.to_string()).collect()
    }
}

impl Index<Degree> for Scale {
    type Output = Note;

    fn index(&self, degree: Degree) -> &Note {
        &self.notes[degree.index()]
    }
}

impl FromStr for Scale {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Scale, TheoryError> {
        Scale::new(s)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_scale_spelling() {
        let scale = Scale::new("C MAJOR").unwrap();
        assert_eq!(scale.ascend(), ["C", "D", "E", "F", "G", "A", "B"]);

        let scale = Scale::new("D MAJOR").unwrap();
        assert_eq!(scale.ascend(), ["D", "E", "F#", "G", "A", "B", "C#"]);

        let scale = Scale::new("Eb MAJOR").unwrap();
        assert_eq!(scale.ascend(), ["Eb", "F", "G", "Ab", "Bb", "C", "D"]);
    }

    #[test]
    fn test_minor_variants_differ_in_sixth_and_seventh() {
        let natural = Scale::new("A NATURAL MINOR").unwrap();
        let harmonic = Scale::new("A HARMONIC MINOR").unwrap();
        let melodic = Scale::new("A MELODIC MINOR").unwrap();

        assert_eq!(natural.ascend(), ["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(harmonic.ascend(), ["A", "B", "C", "D", "E", "F", "G#"]);
        assert_eq!(melodic.ascend(), ["A", "B", "C", "D", "E", "F#", "G#"]);
    }

    #[test]
    fn test_minor_is_shorthand_for_natural_minor() {
        let shorthand = Scale::new("G# MINOR").unwrap();
        let spelled_out = Scale::new("G# NATURAL MINOR").unwrap();
        assert_eq!(shorthand, spelled_out);
        assert_eq!(shorthand.quality(), Quality::NaturalMinor);
    }

    #[test]
    fn test_double_sharps_inside_legal_scales() {
        // The raised seventh of G# harmonic minor is F##
        let scale = Scale::new("G# HARMONIC MINOR").unwrap();
        assert_eq!(scale.ascend(), ["G#", "A#", "B", "C#", "D#", "E", "F##"]);

        let scale = Scale::new("A# MELODIC MINOR").unwrap();
        assert_eq!(scale.ascend(), ["A#", "B#", "C#", "D#", "E#", "F##", "G##"]);
    }

    #[test]
    fn test_degree_lookup() {
        let scale = Scale::new("D MAJOR").unwrap();
        assert_eq!(scale.degree("TONIC").unwrap().to_string(), "D");
        assert_eq!(scale.degree("SUPERTONIC").unwrap().to_string(), "E");
        assert_eq!(scale.degree("MEDIANT").unwrap().to_string(), "F#");
        assert_eq!(scale.degree("SUBDOMINANT").unwrap().to_string(), "G");
        assert_eq!(scale.degree("DOMINANT").unwrap().to_string(), "A");
        assert_eq!(scale.degree("SUBMEDIANT").unwrap().to_string(), "B");
        assert_eq!(scale.degree("LEADING TONE").unwrap().to_string(), "C#");
    }

    #[test]
    fn test_degree_lookup_rejects_unknown_names() {
        let scale = Scale::new("D MAJOR").unwrap();
        for name in ["NONSENSE", "tonic", "LEADING-TONE", ""] {
            assert!(matches!(
                scale.degree(name),
                Err(TheoryError::InvalidDegree { .. })
            ));
        }
    }

    #[test]
    fn test_typed_degree_indexing() {
        let scale = Scale::new("Bb MAJOR").unwrap();
        assert_eq!(scale[Degree::Tonic].to_string(), "Bb");
        assert_eq!(scale[Degree::Dominant].to_string(), "F");
        assert_eq!(scale[Degree::LeadingTone].to_string(), "A");
    }

    #[test]
    fn test_degree_names_round_trip() {
        let degrees = [
            Degree::Tonic,
            Degree::Supertonic,
            Degree::Mediant,
            Degree::Subdominant,
            Degree::Dominant,
            Degree::Submediant,
            Degree::LeadingTone,
        ];
        for (index, degree) in degrees.into_iter().enumerate() {
            assert_eq!(degree.index(), index);
            assert_eq!(Degree::from_name(&degree.to_string()), Some(degree));
        }
    }

    #[test]
    fn test_contains_is_exact_spelling() {
        let scale = Scale::new("D MAJOR").unwrap();
        assert!(scale.contains(Note::parse("F#").unwrap()));
        assert!(!scale.contains(Note::parse("Gb").unwrap())); // enharmonic, wrong spelling
        assert!(!scale.contains(Note::parse("F").unwrap()));
    }

    #[test]
    fn test_malformed_names() {
        assert!(matches!(
            Scale::new("CMAJOR"),
            Err(TheoryError::InvalidScaleName { .. })
        ));
        assert!(matches!(
            Scale::new("C major"),
            Err(TheoryError::UnknownQuality { .. })
        ));
        assert!(matches!(
            Scale::new("C DORIAN"),
            Err(TheoryError::UnknownQuality { .. })
        ));
        // "H" is not a note name; it fails as a tonic for the quality
        assert!(matches!(
            Scale::new("H MAJOR"),
            Err(TheoryError::InvalidTonic { .. })
        ));
    }

    #[test]
    fn test_from_str_and_display_round_trip() {
        let scale: Scale = "F# HARMONIC MINOR".parse().unwrap();
        assert_eq!(scale.to_string(), "F# HARMONIC MINOR");

        let shorthand: Scale = "E MINOR".parse().unwrap();
        assert_eq!(shorthand.to_string(), "E NATURAL MINOR");
    }

    #[test]
    fn test_key_signature_collapses_minor_variants() {
        let natural = Scale::new("C# NATURAL MINOR").unwrap();
        let harmonic = Scale::new("C# HARMONIC MINOR").unwrap();
        let melodic = Scale::new("C# MELODIC MINOR").unwrap();
        assert_eq!(natural.key_signature(), harmonic.key_signature());
        assert_eq!(natural.key_signature(), melodic.key_signature());
        assert_eq!(natural.key_signature().fifths(), 4);
    }
}
