use std::cmp::Ordering;

use crate::domain::hand::Hand;
use crate::eval::evaluate;

use super::errors::HandError;

/// Сравнить две провалидированные руки.
///
/// Категория решает сразу; при равной категории ключи сравниваются
/// лексикографически. Полный порядок: для любых валидных рук ответ есть.
pub fn compare_hands(left: &Hand, right: &Hand) -> Ordering {
    let l = evaluate(left);
    let r = evaluate(right);
    let ord = l.cmp(&r);
    log::debug!("compare [{left}] ({l}) vs [{right}] ({r}) => {ord:?}");
    ord
}

/// Разобрать обе строки и сравнить руки.
///
/// Левая рука валидируется первой: если невалидны обе, наружу уходит
/// ошибка левой.
pub fn compare_hand_texts(left: &str, right: &str) -> Result<Ordering, HandError> {
    let left = Hand::parse(left)?;
    let right = Hand::parse(right)?;
    Ok(compare_hands(&left, &right))
}

/// `Ordering` в виде -1 / 0 / 1.
pub fn ordering_to_sign(ord: Ordering) -> i8 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Индекс сильнейшей руки; при равенстве — первый из лучших.
/// Для пустого среза `None`.
pub fn winner(hands: &[Hand]) -> Option<usize> {
    let mut best: Option<(usize, &Hand)> = None;
    for (idx, hand) in hands.iter().enumerate() {
        match best {
            Some((_, current)) if compare_hands(hand, current) != Ordering::Greater => {}
            _ => best = Some((idx, hand)),
        }
    }
    best.map(|(idx, _)| idx)
}
