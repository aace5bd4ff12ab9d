use crate::domain::models::{TokenBalance, TokenTransaction};
use std::collections::HashSet;

/// Extracts the mints a transaction appears to have created.
///
/// A candidate is a mint present in the post token balances but absent from
/// the pre token balances that satisfies the NFT predicate. Candidates are
/// returned in post-balance order.
///
/// With a non-empty `minter_programs` allow-list, transactions whose account
/// keys do not intersect it yield no candidates. This narrows the crawl to
/// known minter programs (e.g. Candy Machine); it is not part of NFT
/// detection itself.
pub fn extract_candidates(
    tx: &TokenTransaction,
    minter_programs: &HashSet<String>,
) -> Vec<String> {
    if !minter_programs.is_empty()
        && !tx
            .account_keys
            .iter()
            .any(|key| minter_programs.contains(key))
    {
        return Vec::new();
    }

    let pre_mints: HashSet<&str> = tx
        .pre_token_balances
        .iter()
        .map(|balance| balance.mint.as_str())
        .collect();

    tx.post_token_balances
        .iter()
        .filter(|balance| !pre_mints.contains(balance.mint.as_str()) && is_nft(balance))
        .map(|balance| balance.mint.clone())
        .collect()
}

/// An NFT holds exactly one indivisible unit: zero decimals, amount one.
fn is_nft(balance: &TokenBalance) -> bool {
    balance.decimals == 0 && balance.amount.parse::<u64>() == Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(mint: &str, decimals: u8, amount: &str) -> TokenBalance {
        TokenBalance {
            mint: mint.to_string(),
            decimals,
            amount: amount.to_string(),
        }
    }

    fn no_scoping() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn nft_predicate() {
        assert!(is_nft(&balance("A", 0, "1")));
        assert!(!is_nft(&balance("A", 0, "2")));
        assert!(!is_nft(&balance("A", 6, "1")));
        assert!(!is_nft(&balance("A", 0, "not-a-number")));
    }

    #[test]
    fn detects_mints_absent_before_the_transaction() {
        let tx = TokenTransaction {
            pre_token_balances: vec![balance("A", 0, "1")],
            post_token_balances: vec![balance("A", 0, "1"), balance("B", 0, "1")],
            ..Default::default()
        };

        assert_eq!(extract_candidates(&tx, &no_scoping()), vec!["B"]);
    }

    #[test]
    fn preserves_post_balance_order() {
        let tx = TokenTransaction {
            post_token_balances: vec![
                balance("C", 0, "1"),
                balance("A", 0, "1"),
                balance("B", 0, "1"),
            ],
            ..Default::default()
        };

        assert_eq!(extract_candidates(&tx, &no_scoping()), vec!["C", "A", "B"]);
    }

    #[test]
    fn excludes_fungible_balances() {
        let tx = TokenTransaction {
            post_token_balances: vec![
                balance("A", 6, "1"),
                balance("B", 0, "250"),
                balance("C", 0, "1"),
            ],
            ..Default::default()
        };

        assert_eq!(extract_candidates(&tx, &no_scoping()), vec!["C"]);
    }

    #[test]
    fn allow_list_skips_unrelated_transactions() {
        let minters: HashSet<String> =
            ["cndy3Z4yapfJBmL3ShUp5exZKqR3z33thTzeNMm2gRZ".to_string()].into();
        let tx = TokenTransaction {
            account_keys: vec!["somebody-else".to_string()],
            post_token_balances: vec![balance("A", 0, "1")],
            ..Default::default()
        };

        assert!(extract_candidates(&tx, &minters).is_empty());
    }

    #[test]
    fn allow_list_keeps_matching_transactions() {
        let minter = "cndy3Z4yapfJBmL3ShUp5exZKqR3z33thTzeNMm2gRZ";
        let minters: HashSet<String> = [minter.to_string()].into();
        let tx = TokenTransaction {
            account_keys: vec!["payer".to_string(), minter.to_string()],
            post_token_balances: vec![balance("A", 0, "1")],
            ..Default::default()
        };

        assert_eq!(extract_candidates(&tx, &minters), vec!["A"]);
    }
}
