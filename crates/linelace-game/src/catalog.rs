//! Puzzle sets grouped by difficulty tier.
//!
//! A catalog is stored as JSON: an object mapping each tier name to an
//! ordered list of entries. An entry is either a puzzle (its row strings,
//! optionally with a caption) or a pure-text message shown as an
//! interstitial screen.
//!
//! ```json
//! {
//!   "tutorial": [
//!     { "message": "Stretch each number into a line of that length." },
//!     { "puzzle": ["3.."] }
//!   ]
//! }
//! ```
//!
//! Entries are addressed by [`PuzzleId`], written `tier.index` with a
//! 1-based index.

use std::{collections::BTreeMap, num::ParseIntError, str::FromStr};

use linelace_core::{Puzzle, PuzzleError};

use crate::ProgressStore;

/// One entry of a tier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A playable puzzle.
    Puzzle {
        /// Row strings in the puzzle definition format.
        puzzle: Vec<String>,
        /// Optional caption shown above the board.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// A text-only screen.
    Message {
        /// Text to show.
        message: String,
    },
}

impl Entry {
    /// Returns the entry's text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Puzzle { message, .. } => message.as_deref(),
            Self::Message { message } => Some(message),
        }
    }

    /// Parses the entry's puzzle; message entries yield `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the puzzle rows are malformed.
    pub fn parse_puzzle(&self) -> Result<Option<Puzzle>, PuzzleError> {
        match self {
            Self::Puzzle { puzzle, .. } => Puzzle::from_rows(puzzle).map(Some),
            Self::Message { .. } => Ok(None),
        }
    }
}

/// Errors produced when parsing a [`PuzzleId`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleIdError {
    /// The text has no `.` between tier and index.
    #[display("puzzle id must look like `tier.index`")]
    MissingSeparator,
    /// The tier part is empty.
    #[display("puzzle id has an empty tier")]
    EmptyTier,
    /// The index part is not a number.
    #[display("invalid puzzle index: {_0}")]
    InvalidIndex(ParseIntError),
    /// The index is zero; indices start at 1.
    #[display("puzzle indices start at 1")]
    ZeroIndex,
}

/// Identity of a catalog entry: a tier name and a 1-based index.
///
/// # Examples
///
/// ```
/// use linelace_game::PuzzleId;
///
/// let id: PuzzleId = "easy.3".parse().unwrap();
/// assert_eq!(id.tier(), "easy");
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.next().to_string(), "easy.4");
///
/// assert!("easy".parse::<PuzzleId>().is_err());
/// assert!("easy.0".parse::<PuzzleId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{tier}.{index}")]
pub struct PuzzleId {
    tier: String,
    index: usize,
}

impl PuzzleId {
    /// Creates an id.
    ///
    /// # Panics
    ///
    /// Panics if `index` is zero.
    #[must_use]
    pub fn new(tier: impl Into<String>, index: usize) -> Self {
        assert!(index >= 1, "puzzle indices start at 1");
        Self {
            tier: tier.into(),
            index,
        }
    }

    /// Returns the tier name.
    #[must_use]
    pub fn tier(&self) -> &str {
        &self.tier
    }

    /// Returns the 1-based index within the tier.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the id of the following entry in the same tier.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::new(self.tier.clone(), self.index + 1)
    }
}

impl FromStr for PuzzleId {
    type Err = PuzzleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tier, index) = s.rsplit_once('.').ok_or(PuzzleIdError::MissingSeparator)?;
        if tier.is_empty() {
            return Err(PuzzleIdError::EmptyTier);
        }
        let index: usize = index.parse().map_err(PuzzleIdError::InvalidIndex)?;
        if index == 0 {
            return Err(PuzzleIdError::ZeroIndex);
        }
        Ok(Self::new(tier, index))
    }
}

/// Errors produced when looking up or validating catalog entries.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[display("invalid catalog: {_0}")]
    Json(serde_json::Error),
    /// No tier with this name exists.
    #[display("unknown tier `{tier}`")]
    #[from(ignore)]
    UnknownTier {
        /// The requested tier.
        tier: String,
    },
    /// The index is past the end of the tier.
    #[display("{id} is out of range: tier has {len} entries")]
    #[from(ignore)]
    IndexOutOfRange {
        /// The requested id.
        id: PuzzleId,
        /// Number of entries in the tier.
        len: usize,
    },
    /// An entry's puzzle definition is malformed.
    #[display("{id}: {source}")]
    #[from(ignore)]
    Malformed {
        /// The entry's id.
        id: PuzzleId,
        /// The parse error.
        source: PuzzleError,
    },
}

/// All tiers of puzzles.
///
/// # Examples
///
/// ```
/// use linelace_game::{Catalog, Entry, PuzzleId};
///
/// let catalog = Catalog::from_json(r#"{
///     "easy": [ { "message": "Welcome" }, { "puzzle": ["3.."] } ]
/// }"#).unwrap();
///
/// let id: PuzzleId = "easy.2".parse().unwrap();
/// let entry = catalog.entry(&id).unwrap();
/// assert!(entry.parse_puzzle().unwrap().is_some());
/// assert!(catalog.entry(&id.next()).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tiers: BTreeMap<String, Vec<Entry>>,
}

impl Catalog {
    /// Parses a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the text is not a valid catalog.
    /// Puzzle rows are not parsed here; see [`Catalog::validate`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the catalog as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Adds an entry to the end of a tier, creating the tier if needed.
    pub fn push(&mut self, tier: impl Into<String>, entry: Entry) -> PuzzleId {
        let tier = tier.into();
        let entries = self.tiers.entry(tier.clone()).or_default();
        entries.push(entry);
        PuzzleId::new(tier, entries.len())
    }

    /// Iterates over tier names in sorted order.
    pub fn tiers(&self) -> impl Iterator<Item = &str> {
        self.tiers.keys().map(String::as_str)
    }

    /// Returns the number of entries in a tier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTier`] if the tier does not exist.
    pub fn tier_len(&self, tier: &str) -> Result<usize, CatalogError> {
        self.tiers
            .get(tier)
            .map(Vec::len)
            .ok_or_else(|| CatalogError::UnknownTier {
                tier: tier.to_owned(),
            })
    }

    /// Looks up an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTier`] or
    /// [`CatalogError::IndexOutOfRange`].
    pub fn entry(&self, id: &PuzzleId) -> Result<&Entry, CatalogError> {
        let entries = self
            .tiers
            .get(id.tier())
            .ok_or_else(|| CatalogError::UnknownTier {
                tier: id.tier().to_owned(),
            })?;
        entries
            .get(id.index() - 1)
            .ok_or_else(|| CatalogError::IndexOutOfRange {
                id: id.clone(),
                len: entries.len(),
            })
    }

    /// Returns the entry a player should resume a tier at.
    ///
    /// This is the furthest unlocked index recorded in `progress`, clamped
    /// to the tier's last entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTier`] if the tier does not exist or
    /// is empty.
    pub fn resume_id(
        &self,
        tier: &str,
        progress: &impl ProgressStore,
    ) -> Result<PuzzleId, CatalogError> {
        let len = self.tier_len(tier)?;
        if len == 0 {
            return Err(CatalogError::UnknownTier {
                tier: tier.to_owned(),
            });
        }
        let index = progress.furthest_unlocked(tier).clamp(1, len);
        Ok(PuzzleId::new(tier, index))
    }

    /// Parses every puzzle in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] for the first malformed puzzle,
    /// in tier order then index order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (tier, entries) in &self.tiers {
            for (i, entry) in entries.iter().enumerate() {
                entry
                    .parse_puzzle()
                    .map_err(|source| CatalogError::Malformed {
                        id: PuzzleId::new(tier.clone(), i + 1),
                        source,
                    })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryProgress;

    const CATALOG: &str = r#"{
        "tutorial": [
            { "message": "Drag from a number." },
            { "puzzle": ["3.."], "message": "Cover the dots." },
            { "puzzle": ["1 2"] }
        ],
        "easy": [
            { "puzzle": ["2.", "  "] }
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
        assert_eq!(catalog.tiers().collect::<Vec<_>>(), ["easy", "tutorial"]);
        assert_eq!(catalog.tier_len("tutorial").expect("known tier"), 3);

        let intro = catalog
            .entry(&PuzzleId::new("tutorial", 1))
            .expect("in range");
        assert_eq!(intro.message(), Some("Drag from a number."));
        assert_eq!(intro.parse_puzzle(), Ok(None));

        let captioned = catalog
            .entry(&PuzzleId::new("tutorial", 2))
            .expect("in range");
        assert_eq!(captioned.message(), Some("Cover the dots."));
        let puzzle = captioned
            .parse_puzzle()
            .expect("valid puzzle")
            .expect("puzzle entry");
        assert_eq!(puzzle.width(), 3);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_lookup_errors() {
        let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
        assert!(matches!(
            catalog.entry(&PuzzleId::new("expert", 1)),
            Err(CatalogError::UnknownTier { .. })
        ));
        let err = catalog
            .entry(&PuzzleId::new("easy", 2))
            .expect_err("past the end");
        assert_eq!(err.to_string(), "easy.2 is out of range: tier has 1 entries");
        assert!(Catalog::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_validate_reports_first_malformed_puzzle() {
        let mut catalog = Catalog::default();
        catalog.push(
            "easy",
            Entry::Puzzle {
                puzzle: vec!["1 ".into()],
                message: None,
            },
        );
        let bad = catalog.push(
            "easy",
            Entry::Puzzle {
                puzzle: vec!["1 ".into(), "1".into()],
                message: None,
            },
        );
        let err = catalog.validate().expect_err("ragged puzzle");
        assert!(matches!(
            &err,
            CatalogError::Malformed { id, source: PuzzleError::RaggedRow { .. } } if *id == bad
        ));
        assert_eq!(err.to_string(), "easy.2: row 1 has 1 cells, expected 2");
    }

    #[test]
    fn test_puzzle_id_parsing() {
        assert_eq!(
            "hard.12".parse::<PuzzleId>(),
            Ok(PuzzleId::new("hard", 12))
        );
        assert_eq!(
            "v1.2.7".parse::<PuzzleId>(),
            Ok(PuzzleId::new("v1.2", 7))
        );
        assert_eq!(
            "hard".parse::<PuzzleId>(),
            Err(PuzzleIdError::MissingSeparator)
        );
        assert_eq!(".3".parse::<PuzzleId>(), Err(PuzzleIdError::EmptyTier));
        assert_eq!("hard.0".parse::<PuzzleId>(), Err(PuzzleIdError::ZeroIndex));
        assert!(matches!(
            "hard.x".parse::<PuzzleId>(),
            Err(PuzzleIdError::InvalidIndex(_))
        ));
    }

    #[test]
    fn test_resume_id_clamps_to_tier() {
        let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
        let mut progress = MemoryProgress::default();
        assert_eq!(
            catalog.resume_id("tutorial", &progress).expect("known tier"),
            PuzzleId::new("tutorial", 1)
        );
        progress.record_completed(&PuzzleId::new("tutorial", 2));
        assert_eq!(
            catalog.resume_id("tutorial", &progress).expect("known tier"),
            PuzzleId::new("tutorial", 3)
        );
        progress.record_completed(&PuzzleId::new("tutorial", 3));
        assert_eq!(
            catalog.resume_id("tutorial", &progress).expect("known tier"),
            PuzzleId::new("tutorial", 3)
        );
    }

    #[test]
    fn test_json_round_trip_keeps_captions() {
        let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
        let json = catalog.to_json().expect("serializable");
        assert_eq!(Catalog::from_json(&json).expect("valid catalog"), catalog);
    }
}
