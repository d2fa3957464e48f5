//! Assisting patterns: helper stars flanking the life palace

use crate::chart::stars::*;
use crate::patterns::predicates::PatternContext;

pub fn zuo_you_flank(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.flanked_by(ctx.life, ZUO_FU, YOU_BI)
        .then(|| format!("{} and {} in the sectors either side of {}", ZUO_FU, YOU_BI, ctx.describe(ctx.life)))
}

pub fn kui_yue_flank(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.flanked_by(ctx.life, TIAN_KUI, TIAN_YUE)
        .then(|| format!("{} and {} in the sectors either side of {}", TIAN_KUI, TIAN_YUE, ctx.describe(ctx.life)))
}
