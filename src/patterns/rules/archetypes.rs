//! The five archetypal patterns, read from the principal stars of life,
//! wealth and career

use crate::chart::stars::*;
use crate::patterns::predicates::PatternContext;
use std::collections::BTreeSet;

const SHA_PO_LANG: [&str; 3] = [QI_SHA, PO_JUN, TAN_LANG];
const FU_XIANG: [&str; 2] = [TIAN_FU, TIAN_XIANG];
const JI_YUE_TONG_LIANG: [&str; 4] = [TIAN_JI, TAI_YIN, TIAN_TONG, TIAN_LIANG];
const ZI_WU_LIAN: [&str; 3] = [ZI_WEI, WU_QU, LIAN_ZHEN];

/// Principal stars anywhere in life, wealth and career
fn three_side_principals<'a>(ctx: &'a PatternContext<'_>) -> BTreeSet<&'a str> {
    ctx.union(&ctx.three_sides())
        .into_iter()
        .filter(|s| is_major(s))
        .collect()
}

pub fn sha_po_lang(ctx: &PatternContext<'_>) -> Option<String> {
    let majors = three_side_principals(ctx);
    SHA_PO_LANG
        .iter()
        .all(|s| majors.contains(s))
        .then(|| format!("Life/wealth/career principals include {}", SHA_PO_LANG.join("/")))
}

pub fn fu_xiang(ctx: &PatternContext<'_>) -> Option<String> {
    let majors = three_side_principals(ctx);
    (!majors.is_empty() && majors.iter().all(|s| FU_XIANG.contains(s)))
        .then(|| format!("Life/wealth/career principals are only {}", FU_XIANG.join("/")))
}

pub fn ji_yue_tong_liang(ctx: &PatternContext<'_>) -> Option<String> {
    let majors = three_side_principals(ctx);
    (majors.len() >= 3 && majors.iter().all(|s| JI_YUE_TONG_LIANG.contains(s))).then(|| {
        format!(
            "Life/wealth/career principals drawn from {}",
            JI_YUE_TONG_LIANG.join("/")
        )
    })
}

/// Zi/Wu/Lian leading Fu/Xiang: principals only from both families, each represented
pub fn zi_wu_lian_fu_xiang(ctx: &PatternContext<'_>) -> Option<String> {
    let majors = three_side_principals(ctx);
    let leads = majors.iter().any(|s| ZI_WU_LIAN.contains(s));
    let keeps = majors.iter().any(|s| FU_XIANG.contains(s));
    let closed = majors
        .iter()
        .all(|s| ZI_WU_LIAN.contains(s) || FU_XIANG.contains(s));
    (leads && keeps && closed).then(|| {
        let listed: Vec<&str> = majors.iter().copied().collect();
        format!("Life/wealth/career principals {} pair a ruler with Fu/Xiang", listed.join("/"))
    })
}

/// Full Sha-Po-Lang set led by at least two of Zi/Wu/Lian
pub fn zi_wu_lian_sha_po_lang(ctx: &PatternContext<'_>) -> Option<String> {
    let majors = three_side_principals(ctx);
    let leaders: Vec<&str> = ZI_WU_LIAN
        .iter()
        .copied()
        .filter(|s| majors.contains(s))
        .collect();
    (leaders.len() >= 2 && SHA_PO_LANG.iter().all(|s| majors.contains(s))).then(|| {
        format!(
            "{} led by {} across life/wealth/career",
            SHA_PO_LANG.join("/"),
            leaders.join("/")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartBuilder, ChartIndex};
    use crate::patterns::predicates::PatternConfig;

    fn run(builder: ChartBuilder, rule: fn(&PatternContext<'_>) -> Option<String>) -> Option<String> {
        let index = ChartIndex::build(&builder.build().unwrap());
        let config = PatternConfig::default();
        let ctx = PatternContext::new(&index, &config).unwrap();
        rule(&ctx)
    }

    #[test]
    fn test_fu_xiang_requires_exclusive_set() {
        // life 0, wealth 8, career 4
        let pure = ChartBuilder::new().stars(0, &[TIAN_FU]).stars(4, &[TIAN_XIANG]);
        assert!(run(pure, fu_xiang).is_some());

        let mixed = ChartBuilder::new().stars(0, &[TIAN_FU]).stars(8, &[WU_QU]);
        assert!(run(mixed, fu_xiang).is_none());

        assert!(run(ChartBuilder::new(), fu_xiang).is_none());
    }

    #[test]
    fn test_travel_does_not_count_for_archetypes() {
        // travel is sector 6
        let builder = ChartBuilder::new()
            .stars(0, &[QI_SHA])
            .stars(4, &[PO_JUN])
            .stars(6, &[TAN_LANG]);
        assert!(run(builder, sha_po_lang).is_none());
    }

    #[test]
    fn test_ji_yue_tong_liang_needs_three() {
        let two = ChartBuilder::new().stars(0, &[TIAN_JI, TAI_YIN]);
        assert!(run(two, ji_yue_tong_liang).is_none());

        let three = ChartBuilder::new()
            .stars(0, &[TIAN_JI, TAI_YIN])
            .stars(8, &[TIAN_TONG]);
        assert!(run(three, ji_yue_tong_liang).is_some());
    }

    #[test]
    fn test_zi_wu_lian_sha_po_lang() {
        let builder = ChartBuilder::new()
            .stars(0, &[ZI_WEI, QI_SHA])
            .stars(4, &[LIAN_ZHEN, PO_JUN])
            .stars(8, &[TAN_LANG]);
        assert!(run(builder.clone(), zi_wu_lian_sha_po_lang).is_some());
        assert!(run(builder, sha_po_lang).is_some());
    }

    #[test]
    fn test_zi_wu_lian_fu_xiang_stays_closed() {
        let builder = ChartBuilder::new().stars(0, &[ZI_WEI, TIAN_FU]).stars(4, &[WU_QU, TIAN_XIANG]);
        assert!(run(builder, zi_wu_lian_fu_xiang).is_some());

        let with_sha = ChartBuilder::new()
            .stars(0, &[ZI_WEI, TIAN_FU])
            .stars(4, &[WU_QU, TIAN_XIANG])
            .stars(8, &[QI_SHA]);
        assert!(run(with_sha, zi_wu_lian_fu_xiang).is_none());

        let rulers_only = ChartBuilder::new().stars(0, &[ZI_WEI]).stars(4, &[LIAN_ZHEN]);
        assert!(run(rulers_only, zi_wu_lian_fu_xiang).is_none());

        // keepers alone read as plain Fu-Xiang
        let keepers_only = ChartBuilder::new().stars(0, &[TIAN_FU]).stars(8, &[TIAN_XIANG]);
        assert!(run(keepers_only, zi_wu_lian_fu_xiang).is_none());
    }

    #[test]
    fn test_zi_wu_lian_sha_po_lang_needs_two_leaders() {
        let one_leader = ChartBuilder::new()
            .stars(0, &[ZI_WEI, QI_SHA])
            .stars(4, &[PO_JUN])
            .stars(8, &[TAN_LANG]);
        assert!(run(one_leader.clone(), zi_wu_lian_sha_po_lang).is_none());
        assert!(run(one_leader, sha_po_lang).is_some());

        let missing_lang = ChartBuilder::new()
            .stars(0, &[ZI_WEI, QI_SHA])
            .stars(4, &[LIAN_ZHEN, PO_JUN]);
        assert!(run(missing_lang, zi_wu_lian_sha_po_lang).is_none());

        // a leader on travel is outside the three sides
        let leader_on_travel = ChartBuilder::new()
            .stars(0, &[ZI_WEI, QI_SHA])
            .stars(4, &[PO_JUN])
            .stars(6, &[WU_QU])
            .stars(8, &[TAN_LANG]);
        assert!(run(leader_on_travel, zi_wu_lian_sha_po_lang).is_none());
    }
}
