//! 画像への製品ID割当
//!
//! ページ内で一致した製品ID（カタログ順）と、画像のページ内連番から割当を決める。
//!
//! | 一致数 | 条件 | 結果 |
//! |---|---|---|
//! | 0 | - | `UNKNOWN_PAGE_<page>` |
//! | 1 | - | その製品ID |
//! | 2以上 | 連番 <= 一致数 | 連番番目の製品ID（位置推定） |
//! | 2以上 | 連番 > 一致数 | `MULTI_<page>_<先頭の製品ID>` |
//!
//! 位置推定は「抽出順 ≒ 紙面の読み順 ≒ カタログ順」という仮定に基づく経験則であり、
//! 正しさは保証されない。

use crate::types::Resolution;

/// 割当の根拠
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// 一致が1件のみ
    SingleMatch,
    /// 複数一致を連番で割当
    Positional,
    /// 一致なし
    NoMatch,
    /// 画像数が一致数を超過
    Overflow,
}

/// 画像1枚の判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub resolution: Resolution,
    pub basis: Basis,
}

/// 実行統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub mapped: usize,
    pub unmapped: usize,
    pub multiple_matches: usize,
}

impl RunStats {
    /// 判定結果を1件加算した統計を返す
    pub fn record(self, decision: &Decision) -> Self {
        let mut next = self;
        match decision.basis {
            Basis::SingleMatch | Basis::Positional => next.mapped += 1,
            Basis::NoMatch => next.unmapped += 1,
            Basis::Overflow => next.multiple_matches += 1,
        }
        next
    }

    pub fn total(&self) -> usize {
        self.mapped + self.unmapped + self.multiple_matches
    }
}

/// ページ番号・ページ内連番・一致リストから割当を決定
///
/// `ordinal` は1始まり。
pub fn resolve(page: u32, ordinal: u32, matches: &[String]) -> Decision {
    match matches {
        [] => Decision {
            resolution: Resolution::UnknownPage(page),
            basis: Basis::NoMatch,
        },
        [only] => Decision {
            resolution: Resolution::Resolved(only.clone()),
            basis: Basis::SingleMatch,
        },
        [first, ..] => {
            let index = ordinal as usize;
            if index >= 1 && index <= matches.len() {
                Decision {
                    resolution: Resolution::Resolved(matches[index - 1].clone()),
                    basis: Basis::Positional,
                }
            } else {
                Decision {
                    resolution: Resolution::MultiMatch {
                        page,
                        first: first.clone(),
                    },
                    basis: Basis::Overflow,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_match_gives_unknown_page() {
        for ordinal in 1..=3 {
            let d = resolve(5, ordinal, &[]);
            assert_eq!(d.resolution.to_string(), "UNKNOWN_PAGE_005");
            assert_eq!(d.basis, Basis::NoMatch);
        }
    }

    #[test]
    fn test_single_match_applies_to_every_image() {
        let matches = ids(&["YC0027CA"]);
        for ordinal in 1..=3 {
            let d = resolve(7, ordinal, &matches);
            assert_eq!(d.resolution, Resolution::Resolved("YC0027CA".into()));
            assert_eq!(d.basis, Basis::SingleMatch);
        }
    }

    #[test]
    fn test_positional_assignment() {
        let matches = ids(&["YC0018CA", "YC0018CAEVB"]);
        assert_eq!(resolve(3, 1, &matches).resolution.to_string(), "YC0018CA");
        assert_eq!(resolve(3, 2, &matches).resolution.to_string(), "YC0018CAEVB");
        assert_eq!(resolve(3, 2, &matches).basis, Basis::Positional);
    }

    #[test]
    fn test_overflow_gives_multi_placeholder() {
        let matches = ids(&["YC0018CA", "YC0018CAEVB"]);
        let d = resolve(3, 3, &matches);
        assert_eq!(d.resolution.to_string(), "MULTI_003_YC0018CA");
        assert_eq!(d.basis, Basis::Overflow);
    }

    #[test]
    fn test_stats_accumulate() {
        let matches = ids(&["A1", "B2"]);
        let stats = [
            resolve(1, 1, &matches),
            resolve(1, 2, &matches),
            resolve(1, 3, &matches),
            resolve(2, 1, &[]),
            resolve(3, 1, &ids(&["C3"])),
        ]
        .iter()
        .fold(RunStats::default(), |acc, d| acc.record(d));

        assert_eq!(stats.mapped, 3);
        assert_eq!(stats.unmapped, 1);
        assert_eq!(stats.multiple_matches, 1);
        assert_eq!(stats.total(), 5);
    }
}
