use crate::{
    error::{PowerIndexError, Result},
    validation::check_game,
};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "borsh")]
use borsh::{BorshDeserialize, BorshSerialize};

#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

/// A vector weighted voting game: a coalition wins when it meets the quota on every issue.
///
/// Built only through [`GameDescription::new`] (or its integer/serde front doors), so every
/// instance has matching quota and weight vector shapes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "borsh", derive(BorshSerialize))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "GameSpec", into = "GameSpec")
)]
pub struct GameDescription {
    quotas: Vec<f64>,
    weight_vectors: Vec<Vec<f64>>,
}

/// Unchecked wire form of a game
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameSpec {
    quotas: Vec<f64>,
    weight_vectors: Vec<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<GameSpec> for GameDescription {
    type Error = PowerIndexError;

    fn try_from(spec: GameSpec) -> Result<Self> {
        GameDescription::new(spec.quotas, spec.weight_vectors)
    }
}

#[cfg(feature = "serde")]
impl From<GameDescription> for GameSpec {
    fn from(game: GameDescription) -> Self {
        GameSpec {
            quotas: game.quotas,
            weight_vectors: game.weight_vectors,
        }
    }
}

#[cfg(feature = "borsh")]
impl BorshDeserialize for GameDescription {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let quotas = Vec::<f64>::deserialize_reader(reader)?;
        let weight_vectors = Vec::<Vec<f64>>::deserialize_reader(reader)?;
        GameDescription::new(quotas, weight_vectors)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl GameDescription {
    /// Create a game from one quota per issue and one weight vector per issue
    pub fn new(quotas: Vec<f64>, weight_vectors: Vec<Vec<f64>>) -> Result<Self> {
        check_game(&quotas, &weight_vectors)?;
        Ok(GameDescription {
            quotas,
            weight_vectors,
        })
    }

    /// Create a game from integer quotas and weights, as entered on a form
    pub fn from_integers(quotas: &[i64], weight_vectors: &[Vec<i64>]) -> Result<Self> {
        Self::new(
            quotas.iter().map(|&q| q as f64).collect(),
            weight_vectors
                .iter()
                .map(|weights| weights.iter().map(|&w| w as f64).collect())
                .collect(),
        )
    }

    /// Number of issues (k)
    pub fn issue_count(&self) -> usize {
        self.quotas.len()
    }

    /// Number of players (n)
    pub fn player_count(&self) -> usize {
        // check_game guarantees at least one issue
        self.weight_vectors.first().map_or(0, Vec::len)
    }

    pub fn quotas(&self) -> &[f64] {
        &self.quotas
    }

    pub fn weight_vectors(&self) -> &[Vec<f64>] {
        &self.weight_vectors
    }

    /// Quota for `issue`, if it exists
    pub fn quota(&self, issue: usize) -> Option<f64> {
        self.quotas.get(issue).copied()
    }

    /// Weight of `player` on `issue`, if both exist
    pub fn weight(&self, issue: usize, player: usize) -> Option<f64> {
        self.weight_vectors.get(issue)?.get(player).copied()
    }
}

/// Power index method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Shapley–Shubik index
    #[default]
    Shapley,
    /// Normalized Banzhaf index
    Banzhaf,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Shapley => "shapley",
            Method::Banzhaf => "banzhaf",
        }
    }
}

impl FromStr for Method {
    type Err = PowerIndexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shapley" => Ok(Method::Shapley),
            "banzhaf" => Ok(Method::Banzhaf),
            _ => Err(PowerIndexError::InvalidMethod(s.to_string())),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per player, in player order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultVector {
    method: Method,
    values: Vec<f64>,
}

impl ResultVector {
    pub(crate) fn new(method: Method, values: Vec<f64>) -> Self {
        ResultVector { method, values }
    }

    /// Method that produced these values
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value attributed to `player`
    pub fn get(&self, player: usize) -> Option<f64> {
        self.values.get(player).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum over all players; one for any game with at least one swing
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Per-player rows with each player's share of the total
    pub fn rows(&self) -> Vec<PlayerIndex> {
        let total = self.sum();
        self.values
            .iter()
            .enumerate()
            .map(|(player, &value)| {
                let percent = if total > 0.0 { value / total } else { 0.0 };
                PlayerIndex::new(player, value, percent)
            })
            .collect()
    }
}

impl Display for ResultVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (player, value) in self.values.iter().enumerate() {
            writeln!(f, "player {player}: {value}")?;
        }
        Ok(())
    }
}

/// Power index of a single player
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Tabled))]
pub struct PlayerIndex {
    pub player: usize,
    pub value: f64,
    #[cfg_attr(feature = "serde", tabled(display = "display_as_percent"))]
    pub percent: f64,
}

#[cfg(feature = "serde")]
fn display_as_percent(percent: &f64) -> String {
    format!("{:.2}%", percent * 100.0)
}

impl PlayerIndex {
    pub fn new(player: usize, value: f64, percent: f64) -> Self {
        PlayerIndex {
            player,
            value,
            percent,
        }
    }
}

#[cfg(feature = "serde")]
mod csv_support {
    use super::*;
    use crate::form::coerce_field;
    use std::{io::Read, path::Path};

    impl GameDescription {
        /// Read a game from CSV: a header row, then one `quota,w0,w1,...` record per issue.
        /// Blank cells count as zero.
        pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
            let file = std::fs::File::open(path)?;
            Self::from_csv_reader(file)
        }

        pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
            let mut reader = csv::ReaderBuilder::new()
                .flexible(true)
                .trim(csv::Trim::All)
                .from_reader(reader);

            let mut quotas = Vec::new();
            let mut weight_vectors = Vec::new();
            for (issue, record) in reader.records().enumerate() {
                let record = record?;
                let mut cells = record.iter().map(|cell| {
                    coerce_field(cell).ok_or_else(|| {
                        PowerIndexError::InvalidInput(format!(
                            "'{cell}' in issue {issue} is not an integer"
                        ))
                    })
                });
                let quota = cells.next().transpose()?.ok_or_else(|| {
                    PowerIndexError::InvalidInput(format!("issue {issue} has no quota"))
                })?;
                let weights = cells.collect::<Result<Vec<i64>>>()?;
                quotas.push(quota);
                weight_vectors.push(weights);
            }

            Self::from_integers(&quotas, &weight_vectors)
        }
    }
}
