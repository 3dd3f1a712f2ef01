use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе. Роял-флеш — старший стрит-флеш,
/// отдельной категорией не считается.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Все категории от сильнейшей к слабейшей.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCard,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ключ разрешения ничьих внутри одной категории: числовые значения рангов,
/// сравниваются лексикографически (больше — сильнее).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TieBreakKey(pub Vec<u8>);

impl TieBreakKey {
    pub fn from_ranks(ranks: impl IntoIterator<Item = Rank>) -> Self {
        TieBreakKey(ranks.into_iter().map(Rank::value).collect())
    }

    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// Первый элемент ключа как ранг. Для младшего стрита это пятёрка.
    pub fn lead(&self) -> Option<Rank> {
        self.0.first().copied().and_then(Rank::from_value)
    }
}

/// Результат классификации: категория + ключ.
///
/// Порядок полей важен: производный `Ord` сравнивает сначала категорию,
/// затем ключ — это и есть полный порядок на руках.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandRank {
    pub category: HandCategory,
    pub key: TieBreakKey,
}

impl HandRank {
    pub fn new(category: HandCategory, key: TieBreakKey) -> Self {
        Self { category, key }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_hand(self))
    }
}

/// Человеческое описание руки: категория и ключевые ранги.
pub fn describe_hand(rank: &HandRank) -> String {
    let name = rank.category.name();
    let lead = rank.key.lead().map(|r| r.symbol()).unwrap_or('?');
    let second = rank
        .key
        .values()
        .get(1)
        .copied()
        .and_then(Rank::from_value)
        .map(|r| r.symbol())
        .unwrap_or('?');

    match rank.category {
        HandCategory::StraightFlush
        | HandCategory::Straight
        | HandCategory::Flush
        | HandCategory::HighCard => format!("{name}, {lead} high"),
        HandCategory::FourOfAKind => format!("{name}, {lead}s with {second} kicker"),
        HandCategory::FullHouse => format!("{name}, {lead} over {second}"),
        HandCategory::ThreeOfAKind | HandCategory::OnePair => format!("{name}, {lead}s"),
        HandCategory::TwoPair => format!("{name}, {lead}s and {second}s"),
    }
}
