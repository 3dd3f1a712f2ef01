use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Пять подряд идущих бит — «окно» стрита.
const RUN_OF_FIVE: RankMask = 0b1_1111;

/// Маски всех стритов с туза как старшей карты (A) вниз до шестёрки.
///
/// Индекс `i` соответствует стриту со старшей картой `Rank::Ace - i`.
/// Младший стрит A2345 сюда не входит, для него отдельная `WHEEL_MASK`.
pub const STRAIGHT_MASKS: [RankMask; 9] = straight_masks();

/// A-2-3-4-5: туз считается единицей, старшая карта — пятёрка.
pub const WHEEL_MASK: RankMask =
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);

const fn straight_masks() -> [RankMask; 9] {
    let mut masks = [0; 9];
    let mut i = 0;
    while i < masks.len() {
        // Старшая карта Ace (бит 12) -> окно начинается с бита 8.
        masks[i] = RUN_OF_FIVE << (8 - i);
        i += 1;
    }
    masks
}

pub const fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank as u8 - Rank::Two as u8)
}

pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

/// Старшая карта стрита, если маска — ровно пять подряд идущих рангов.
///
/// Маска с повторами рангов (меньше пяти бит) стритом не является.
/// Для A2345 возвращается `Rank::Five`.
pub fn detect_straight(mask: RankMask) -> Option<Rank> {
    if mask == WHEEL_MASK {
        return Some(Rank::Five);
    }
    STRAIGHT_MASKS
        .iter()
        .position(|&m| m == mask)
        .and_then(|i| Rank::from_value(Rank::Ace.value() - i as u8))
}
