use crate::domain::card::Rank;
use crate::domain::hand::Hand;

use super::hand_rank::{HandCategory, HandRank, TieBreakKey};
use super::stats::{is_flush, straight_high};

/// Группа одинаковых рангов в руке.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RankGroup {
    rank: Rank,
    count: u8,
}

/// Группы рангов: сначала по размеру (desc), затем по рангу (desc).
///
/// Для всех категорий «по счётчикам» ранги групп в этом порядке —
/// готовый ключ: каре + кикер, сет + пара, старшая пара + младшая + кикер и т.д.
fn rank_groups(hand: &Hand) -> Vec<RankGroup> {
    let counts = hand.rank_counts();
    let mut groups: Vec<RankGroup> = Rank::ALL
        .into_iter()
        .filter_map(|rank| {
            let count = counts[rank.value() as usize];
            (count > 0).then_some(RankGroup { rank, count })
        })
        .collect();

    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| b.rank.cmp(&a.rank)));
    groups
}

/// Оценка руки из пяти карт: категория + ключ разрешения ничьих.
///
/// Каскад от сильнейшей категории к слабейшей, первое совпадение побеждает.
pub fn evaluate(hand: &Hand) -> HandRank {
    let rank = classify(hand);
    log::debug!("{hand} => {rank} {:?}", rank.key.values());
    rank
}

fn classify(hand: &Hand) -> HandRank {
    let flush = is_flush(hand);
    let straight = straight_high(hand);

    let groups = rank_groups(hand);
    let pattern: Vec<u8> = groups.iter().map(|g| g.count).collect();
    let by_groups = || TieBreakKey::from_ranks(groups.iter().map(|g| g.rank));

    if let (true, Some(high)) = (flush, straight) {
        return HandRank::new(HandCategory::StraightFlush, TieBreakKey::from_ranks([high]));
    }

    match pattern.as_slice() {
        [4, 1] => return HandRank::new(HandCategory::FourOfAKind, by_groups()),
        [3, 2] => return HandRank::new(HandCategory::FullHouse, by_groups()),
        _ => {}
    }

    if flush {
        // Все пять значений по убыванию, включая повторы.
        let mut values = hand.values();
        values.sort_unstable_by(|a, b| b.cmp(a));
        return HandRank::new(HandCategory::Flush, TieBreakKey(values.to_vec()));
    }

    if let Some(high) = straight {
        return HandRank::new(HandCategory::Straight, TieBreakKey::from_ranks([high]));
    }

    let category = match pattern.as_slice() {
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };
    HandRank::new(category, by_groups())
}
