//! Deterministic coin selection.
//!
//! Picks which coin objects fund a payment plus its gas reserve. The
//! policy is fixed — sort by descending balance, accumulate greedily —
//! so the same inputs always produce the same selection; there is no
//! randomness and no dependency on map iteration order.

use crate::types::Coin;
use sui_types::{ObjectID, ObjectRef};

/// Errors from coin selection.
#[derive(Debug, thiserror::Error)]
pub enum CoinSelectionError {
    /// The available balance cannot cover target plus reserve, or too
    /// few coins would remain for gas.
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// Total required (target + gas reserve).
        required: u128,
        /// Total balance of the available set.
        available: u128,
    },

    /// Accumulation would need more coins than the caller allows.
    #[error("selection would exceed the {limit}-coin limit")]
    SelectionLimitExceeded {
        /// The configured maximum.
        limit: usize,
    },
}

/// The outcome of a selection: an ordered coin subset and its total.
#[derive(Debug, Clone)]
pub struct PickedCoins {
    /// Selected coins, in descending balance order.
    pub coins: Vec<Coin>,
    /// Combined balance of the selection.
    pub total: u128,
}

impl PickedCoins {
    /// Object ids of the selected coins.
    ///
    /// # Returns
    /// Ids in selection order.
    pub fn coin_ids(&self) -> Vec<ObjectID> {
        self.coins.iter().map(|c| c.coin_object_id).collect()
    }

    /// Exact object references of the selected coins.
    ///
    /// # Returns
    /// References in selection order, ready for a gas payment list or a
    /// `pay` recipe.
    pub fn object_refs(&self) -> Vec<ObjectRef> {
        self.coins.iter().map(|c| c.object_ref()).collect()
    }
}

/// Select coins covering `target` plus `gas_reserve`.
///
/// Candidates are sorted by descending balance (stable, so equal
/// balances keep their input order) and accumulated greedily until the
/// running total covers the requirement.
///
/// # Arguments
/// * `available` - The caller's coin snapshot; never mutated.
/// * `target` - Amount to spend.
/// * `gas_reserve` - Gas budget to cover on top of the target.
/// * `min_coins` - When non-zero, at least this many coins beyond the
///   selection must remain untouched for gas payment.
/// * `max_coins` - When non-zero, the selection may not grow past this
///   many coins.
///
/// # Returns
/// The selected coins, `InsufficientFunds` when the set cannot cover the
/// requirement (or too few coins would remain for gas), or
/// `SelectionLimitExceeded` when accumulation would need more than
/// `max_coins` coins.
pub fn pick_coins(
    available: &[Coin],
    target: u128,
    gas_reserve: u64,
    min_coins: usize,
    max_coins: usize,
) -> Result<PickedCoins, CoinSelectionError> {
    let required = target + gas_reserve as u128;
    let available_total: u128 = available
        .iter()
        .map(|c| c.balance.value() as u128)
        .sum();
    if available_total < required {
        return Err(CoinSelectionError::InsufficientFunds {
            required,
            available: available_total,
        });
    }

    let mut candidates: Vec<&Coin> = available.iter().collect();
    candidates.sort_by(|a, b| b.balance.value().cmp(&a.balance.value()));

    let mut picked: Vec<Coin> = Vec::new();
    let mut total: u128 = 0;
    for coin in candidates {
        if total >= required {
            break;
        }
        if max_coins > 0 && picked.len() == max_coins {
            return Err(CoinSelectionError::SelectionLimitExceeded { limit: max_coins });
        }
        total += coin.balance.value() as u128;
        picked.push(coin.clone());
    }

    // The spend set must leave enough coins behind to pay gas.
    let remaining = available.len() - picked.len();
    if min_coins > 0 && remaining < min_coins {
        return Err(CoinSelectionError::InsufficientFunds {
            required,
            available: available_total,
        });
    }

    Ok(PickedCoins {
        coins: picked,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BigInt;
    use sui_types::{Digest, SuiAddress};

    fn coin(low_byte: u8, balance: u64) -> Coin {
        let mut id = [0u8; 32];
        id[31] = low_byte;
        Coin {
            coin_type: "0x2::sui::SUI".to_string(),
            coin_object_id: SuiAddress::new(id),
            version: BigInt(1),
            digest: Digest::new([low_byte; 32]),
            balance: BigInt(balance),
            previous_transaction: Digest::new([0; 32]),
        }
    }

    #[test]
    fn accumulates_descending_until_covered() {
        let coins = [coin(1, 50), coin(2, 30), coin(3, 20)];
        let picked = pick_coins(&coins, 60, 5, 0, 0).unwrap();
        assert_eq!(picked.total, 80);
        let balances: Vec<u64> =
            picked.coins.iter().map(|c| c.balance.value()).collect();
        assert_eq!(balances, vec![50, 30]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let shuffled = [coin(3, 20), coin(1, 50), coin(2, 30)];
        let picked = pick_coins(&shuffled, 60, 5, 0, 0).unwrap();
        let balances: Vec<u64> =
            picked.coins.iter().map(|c| c.balance.value()).collect();
        assert_eq!(balances, vec![50, 30]);
    }

    #[test]
    fn equal_balances_keep_input_order() {
        let coins = [coin(7, 30), coin(8, 30), coin(9, 30)];
        let picked = pick_coins(&coins, 55, 0, 0, 0).unwrap();
        let ids: Vec<ObjectID> = picked.coin_ids();
        assert_eq!(ids[0], coins[0].coin_object_id);
        assert_eq!(ids[1], coins[1].coin_object_id);
    }

    #[test]
    fn shortfall_is_insufficient_funds() {
        let coins = [coin(1, 10), coin(2, 10)];
        let err = pick_coins(&coins, 100, 0, 0, 0).unwrap_err();
        assert!(matches!(
            err,
            CoinSelectionError::InsufficientFunds {
                required: 100,
                available: 20
            }
        ));
    }

    #[test]
    fn empty_set_is_insufficient_funds() {
        let err = pick_coins(&[], 1, 0, 0, 0).unwrap_err();
        assert!(matches!(err, CoinSelectionError::InsufficientFunds { .. }));
    }

    #[test]
    fn gas_reserve_extends_the_requirement() {
        let coins = [coin(1, 50), coin(2, 30)];
        // Target alone fits in one coin; the reserve forces a second.
        let picked = pick_coins(&coins, 45, 20, 0, 0).unwrap();
        assert_eq!(picked.coins.len(), 2);
    }

    #[test]
    fn min_coins_reserves_gas_coins() {
        let coins = [coin(1, 50), coin(2, 30), coin(3, 20)];
        // Covering 95 takes all three coins, leaving none for gas.
        let err = pick_coins(&coins, 95, 0, 1, 0).unwrap_err();
        assert!(matches!(err, CoinSelectionError::InsufficientFunds { .. }));
        // The same request without the reservation succeeds.
        assert!(pick_coins(&coins, 95, 0, 0, 0).is_ok());
    }

    #[test]
    fn max_coins_bounds_the_selection() {
        let coins = [coin(1, 10), coin(2, 10), coin(3, 10)];
        let err = pick_coins(&coins, 25, 0, 0, 2).unwrap_err();
        assert!(matches!(
            err,
            CoinSelectionError::SelectionLimitExceeded { limit: 2 }
        ));
        assert!(pick_coins(&coins, 25, 0, 0, 3).is_ok());
    }

    #[test]
    fn selection_is_reproducible() {
        let coins = [coin(1, 50), coin(2, 30), coin(3, 20)];
        let a = pick_coins(&coins, 60, 5, 0, 0).unwrap();
        let b = pick_coins(&coins, 60, 5, 0, 0).unwrap();
        assert_eq!(a.coin_ids(), b.coin_ids());
        assert_eq!(a.total, b.total);
    }

    #[test]
    fn snapshot_is_not_mutated() {
        let coins = [coin(1, 50), coin(2, 30)];
        let before: Vec<u64> = coins.iter().map(|c| c.balance.value()).collect();
        let _ = pick_coins(&coins, 60, 5, 0, 0).unwrap();
        let after: Vec<u64> = coins.iter().map(|c| c.balance.value()).collect();
        assert_eq!(before, after);
    }
}
