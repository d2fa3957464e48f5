//! Status patterns: the ruler star with its ministers and treasury

use crate::chart::stars::*;
use crate::chart::Branch;
use crate::patterns::predicates::PatternContext;

/// Zi Wei and Po Jun share the life palace, Zuo Fu and You Bi both reach it
pub fn ruler_minister_a(ctx: &PatternContext<'_>) -> Option<String> {
    let hood = ctx.life_neighborhood();
    (ctx.co_resident(ctx.life, &[ZI_WEI, PO_JUN]) && ctx.union_has_all(&hood, &[ZUO_FU, YOU_BI]))
        .then(|| {
            format!(
                "{}+{} in {}, {}/{} meet in the four-way",
                ZI_WEI, PO_JUN, ctx.describe(ctx.life), ZUO_FU, YOU_BI
            )
        })
}

/// Zi Wei with Tian Xiang in life, Wen Chang and Wen Qu across life and travel
pub fn ruler_minister_b(ctx: &PatternContext<'_>) -> Option<String> {
    let axis = [ctx.life, ctx.travel];
    (ctx.co_resident(ctx.life, &[ZI_WEI, TIAN_XIANG])
        && ctx.union_has_all(&axis, &[WEN_CHANG, WEN_QU]))
    .then(|| {
        format!(
            "{}+{} in {}, {}/{} on the life-travel axis",
            ZI_WEI, TIAN_XIANG, ctx.describe(ctx.life), WEN_CHANG, WEN_QU
        )
    })
}

/// Tian Fu in life, Zuo/You joined by Ji-Liang or Tong-Yin
pub fn ruler_minister_c(ctx: &PatternContext<'_>) -> Option<String> {
    if !ctx.has(ctx.life, TIAN_FU) {
        return None;
    }
    let hood = ctx.life_neighborhood();
    if !ctx.union_has_all(&hood, &[ZUO_FU, YOU_BI]) {
        return None;
    }
    let companions = if ctx.union_has_all(&hood, &[TIAN_JI, TIAN_LIANG]) {
        [TIAN_JI, TIAN_LIANG]
    } else if ctx.union_has_all(&hood, &[TIAN_TONG, TAI_YIN]) {
        [TIAN_TONG, TAI_YIN]
    } else {
        return None;
    };
    Some(format!(
        "{} in {}, {}/{} with {}/{} in the four-way",
        TIAN_FU,
        ctx.describe(ctx.life),
        ZUO_FU,
        YOU_BI,
        companions[0],
        companions[1]
    ))
}

pub fn ziwei_tianfu_together(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.first_co_resident(&[ZI_WEI, TIAN_FU], &[])
        .map(|i| format!("{}+{} share {}", ZI_WEI, TIAN_FU, ctx.describe(i)))
}

/// Tian Fu in life, Zuo/You and the sun and moon all reach it
pub fn golden_carriage(ctx: &PatternContext<'_>) -> Option<String> {
    let hood = ctx.life_neighborhood();
    (ctx.has(ctx.life, TIAN_FU) && ctx.union_has_all(&hood, &[ZUO_FU, YOU_BI, TAI_YANG, TAI_YIN]))
        .then(|| {
            format!(
                "{} in {}, {}/{} and {}/{} in the four-way",
                TIAN_FU, ctx.describe(ctx.life), ZUO_FU, YOU_BI, TAI_YANG, TAI_YIN
            )
        })
}

/// Ji-Yue in life, flanked by Zi Wei and Tian Fu
pub fn ruler_treasury_flank(ctx: &PatternContext<'_>) -> Option<String> {
    (ctx.exact_principals(ctx.life, &[TIAN_JI, TAI_YIN], &[])
        && ctx.flanked_by(ctx.life, ZI_WEI, TIAN_FU))
    .then(|| {
        format!(
            "{}+{} in {}, flanked by {} and {}",
            TIAN_JI, TAI_YIN, ctx.describe(ctx.life), ZI_WEI, TIAN_FU
        )
    })
}

/// Zi Wei in life at 午 with a clean four-way
pub fn facing_the_light(ctx: &PatternContext<'_>) -> Option<String> {
    (ctx.has(ctx.life, ZI_WEI)
        && ctx.branch(ctx.life) == Branch::Wu
        && ctx.is_unafflicted(&ctx.life_neighborhood()))
    .then(|| format!("{} in {} with no malefic or Ji in the four-way", ZI_WEI, ctx.describe(ctx.life)))
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
    fn test_ruler_treasury_flank() {
        let builder = ChartBuilder::new()
            .stars(0, &[TIAN_JI, TAI_YIN])
            .stars(11, &[TIAN_FU])
            .stars(1, &[ZI_WEI]);
        assert!(run(builder, ruler_treasury_flank).is_some());

        let missing = ChartBuilder::new().stars(0, &[TIAN_JI, TAI_YIN]).stars(1, &[ZI_WEI]);
        assert!(run(missing, ruler_treasury_flank).is_none());
    }

    #[test]
    fn test_facing_the_light_blocked_by_malefic() {
        // offset 6 puts 午 on sector 0
        let clean = ChartBuilder::new().branch_offset(6).stars(0, &[ZI_WEI]);
        let reason = run(clean, facing_the_light).unwrap();
        assert!(reason.contains("午"));

        let afflicted = ChartBuilder::new()
            .branch_offset(6)
            .stars(0, &[ZI_WEI])
            .stars(6, &[HUO_XING]);
        assert!(run(afflicted, facing_the_light).is_none());
    }

    #[test]
    fn test_ruler_minister_c_accepts_tong_yin() {
        let builder = ChartBuilder::new()
            .stars(0, &[TIAN_FU, ZUO_FU])
            .stars(4, &[YOU_BI, TIAN_TONG])
            .stars(8, &[TAI_YIN]);
        let reason = run(builder, ruler_minister_c).unwrap();
        assert!(reason.contains(TIAN_TONG));
    }

    #[test]
    fn test_ruler_minister_a_needs_both_aides_in_four_way() {
        let builder = ChartBuilder::new().stars(0, &[ZI_WEI, PO_JUN, ZUO_FU]).stars(8, &[YOU_BI]);
        assert!(run(builder, ruler_minister_a).is_some());

        // 右弼 next door is not part of the four-way
        let outside = ChartBuilder::new().stars(0, &[ZI_WEI, PO_JUN, ZUO_FU]).stars(1, &[YOU_BI]);
        assert!(run(outside, ruler_minister_a).is_none());

        let split = ChartBuilder::new()
            .stars(0, &[ZI_WEI, ZUO_FU])
            .stars(6, &[PO_JUN])
            .stars(8, &[YOU_BI]);
        assert!(run(split, ruler_minister_a).is_none());
    }

    #[test]
    fn test_ruler_minister_b_reads_only_life_travel_axis() {
        let builder = ChartBuilder::new()
            .stars(0, &[ZI_WEI, TIAN_XIANG, WEN_CHANG])
            .stars(6, &[WEN_QU]);
        assert!(run(builder, ruler_minister_b).is_some());

        let on_trine = ChartBuilder::new()
            .stars(0, &[ZI_WEI, TIAN_XIANG, WEN_CHANG])
            .stars(4, &[WEN_QU]);
        assert!(run(on_trine, ruler_minister_b).is_none());

        let split = ChartBuilder::new()
            .stars(0, &[ZI_WEI, WEN_CHANG])
            .stars(6, &[TIAN_XIANG, WEN_QU]);
        assert!(run(split, ruler_minister_b).is_none());
    }

    #[test]
    fn test_ruler_minister_c_rejects_incomplete_companions() {
        let half_pair = ChartBuilder::new()
            .stars(0, &[TIAN_FU, ZUO_FU])
            .stars(4, &[YOU_BI, TIAN_JI])
            .stars(8, &[TAI_YIN]);
        assert!(run(half_pair, ruler_minister_c).is_none());

        let aide_outside = ChartBuilder::new()
            .stars(0, &[TIAN_FU, ZUO_FU])
            .stars(2, &[YOU_BI])
            .stars(4, &[TIAN_JI, TIAN_LIANG]);
        assert!(run(aide_outside, ruler_minister_c).is_none());

        let no_fu = ChartBuilder::new()
            .stars(0, &[ZUO_FU])
            .stars(4, &[YOU_BI, TIAN_FU, TIAN_JI])
            .stars(8, &[TIAN_LIANG]);
        assert!(run(no_fu, ruler_minister_c).is_none());
    }

    #[test]
    fn test_golden_carriage_needs_all_four_helpers() {
        let builder = ChartBuilder::new()
            .stars(0, &[TIAN_FU, ZUO_FU])
            .stars(4, &[YOU_BI, TAI_YANG])
            .stars(8, &[TAI_YIN]);
        assert!(run(builder, golden_carriage).is_some());

        let moon_outside = ChartBuilder::new()
            .stars(0, &[TIAN_FU, ZUO_FU])
            .stars(4, &[YOU_BI, TAI_YANG])
            .stars(10, &[TAI_YIN]);
        assert!(run(moon_outside, golden_carriage).is_none());

        let fu_on_travel = ChartBuilder::new()
            .stars(0, &[ZUO_FU])
            .stars(6, &[TIAN_FU])
            .stars(4, &[YOU_BI, TAI_YANG])
            .stars(8, &[TAI_YIN]);
        assert!(run(fu_on_travel, golden_carriage).is_none());
    }

    #[test]
    fn test_ruler_treasury_flank_needs_exact_pair_and_both_sides() {
        let extra_principal = ChartBuilder::new()
            .stars(0, &[TIAN_JI, TAI_YIN, TIAN_TONG])
            .stars(11, &[TIAN_FU])
            .stars(1, &[ZI_WEI]);
        assert!(run(extra_principal, ruler_treasury_flank).is_none());

        let one_side = ChartBuilder::new().stars(0, &[TIAN_JI, TAI_YIN]).stars(11, &[TIAN_FU, ZI_WEI]);
        assert!(run(one_side, ruler_treasury_flank).is_none());

        let too_far = ChartBuilder::new()
            .stars(0, &[TIAN_JI, TAI_YIN])
            .stars(10, &[TIAN_FU])
            .stars(2, &[ZI_WEI]);
        assert!(run(too_far, ruler_treasury_flank).is_none());
    }
}
