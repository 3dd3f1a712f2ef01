use std::cmp::Ordering;

/// Пара рук с ожидаемым результатом сравнения левой с правой.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub left: &'static str,
    pub right: &'static str,
    pub expected: Ordering,
}

const fn fixture(left: &'static str, right: &'static str, expected: Ordering) -> Fixture {
    Fixture {
        left,
        right,
        expected,
    }
}

/// Эталонные пары рук, покрывающие все переходы между соседними категориями,
/// кикеры и ничьи по масти.
pub const POKER_HANDS: [Fixture; 16] = [
    // стрит-флеш 6 vs роял-флеш
    fixture("2H 3H 4H 5H 6H", "KS AS TS QS JS", Ordering::Less),
    // стрит-флеш vs каре
    fixture("2H 3H 4H 5H 6H", "AS AD AC AH JD", Ordering::Greater),
    // каре тузов vs каре валетов
    fixture("AS AH 2H AD AC", "JS JD JC JH 3D", Ordering::Greater),
    // фулл-хаус vs каре
    fixture("2S AH 2H AS AC", "JS JD JC JH AD", Ordering::Less),
    // фулл-хаус vs флеш
    fixture("2S AH 2H AS AC", "2H 3H 5H 6H 7H", Ordering::Greater),
    // флеш с тузом vs флеш с семёркой
    fixture("AS 3S 4S 8S 2S", "2H 3H 5H 6H 7H", Ordering::Greater),
    // флеш vs стрит
    fixture("2H 3H 5H 6H 7H", "2S 3H 4H 5S 6C", Ordering::Greater),
    // одинаковые стриты в разных мастях
    fixture("2S 3H 4H 5S 6C", "3D 4C 5H 6H 2S", Ordering::Equal),
    // стрит vs сет
    fixture("2S 3H 4H 5S 6C", "AH AC 5H 6H AS", Ordering::Greater),
    // две пары vs сет
    fixture("2S 2H 4H 5S 4C", "AH AC 5H 6H AS", Ordering::Less),
    // две пары vs пара
    fixture("2S 2H 4H 5S 4C", "AH AC 5H 6H 7S", Ordering::Greater),
    // пара тузов, решает последний кикер
    fixture("6S AD 7H 4S AS", "AH AC 5H 6H 7S", Ordering::Less),
    // старшая карта vs пара
    fixture("2S AH 4H 5S KC", "AH AC 5H 6H 7S", Ordering::Less),
    // старшая карта 9 vs старшая карта T
    fixture("2S 3H 6H 7S 9C", "7H 3C TH 6H 9S", Ordering::Less),
    // старшая карта, решает пятый кикер
    fixture("4S 5H 6H TS AC", "3S 5H 6H TS AC", Ordering::Greater),
    // одинаковая старшая карта в разных мастях
    fixture("2S AH 4H 5S 6C", "AD 4C 5H 6H 2C", Ordering::Equal),
];
