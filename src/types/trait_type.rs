use crate::error::DiscError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the four DISC behavioural traits.
///
/// Declaration order is significant: it is the tie-break order used when
/// selecting a primary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscType {
    D,
    I,
    S,
    C,
}

impl DiscType {
    pub const ALL: [DiscType; 4] = [DiscType::D, DiscType::I, DiscType::S, DiscType::C];

    pub fn letter(self) -> char {
        match self {
            DiscType::D => 'D',
            DiscType::I => 'I',
            DiscType::S => 'S',
            DiscType::C => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DiscType::D => "Dominance",
            DiscType::I => "Influence",
            DiscType::S => "Steadiness",
            DiscType::C => "Conscientiousness",
        }
    }
}

impl fmt::Display for DiscType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for DiscType {
    type Err = DiscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "D" => Ok(DiscType::D),
            "I" => Ok(DiscType::I),
            "S" => Ok(DiscType::S),
            "C" => Ok(DiscType::C),
            _ => Err(DiscError::UnknownTrait(s.to_string())),
        }
    }
}

/// A value per trait, serialized as `{ "D": .., "I": .., "S": .., "C": .. }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitMap<T> {
    #[serde(rename = "D")]
    pub d: T,
    #[serde(rename = "I")]
    pub i: T,
    #[serde(rename = "S")]
    pub s: T,
    #[serde(rename = "C")]
    pub c: T,
}

impl<T> TraitMap<T> {
    pub fn from_fn(mut f: impl FnMut(DiscType) -> T) -> Self {
        Self {
            d: f(DiscType::D),
            i: f(DiscType::I),
            s: f(DiscType::S),
            c: f(DiscType::C),
        }
    }

    /// Entries in declaration order (D, I, S, C).
    pub fn iter(&self) -> impl Iterator<Item = (DiscType, &T)> + '_ {
        DiscType::ALL.into_iter().map(move |ty| (ty, &self[ty]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> TraitMap<U> {
        TraitMap::from_fn(|ty| f(&self[ty]))
    }
}

impl<T> Index<DiscType> for TraitMap<T> {
    type Output = T;

    fn index(&self, ty: DiscType) -> &T {
        match ty {
            DiscType::D => &self.d,
            DiscType::I => &self.i,
            DiscType::S => &self.s,
            DiscType::C => &self.c,
        }
    }
}

impl<T> IndexMut<DiscType> for TraitMap<T> {
    fn index_mut(&mut self, ty: DiscType) -> &mut T {
        match ty {
            DiscType::D => &mut self.d,
            DiscType::I => &mut self.i,
            DiscType::S => &mut self.s,
            DiscType::C => &mut self.c,
        }
    }
}
