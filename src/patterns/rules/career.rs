//! Career patterns

use crate::chart::stars::*;
use crate::chart::Branch;
use crate::patterns::predicates::PatternContext;

pub fn sha_po_lang_meeting(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.union_has_all(&ctx.life_neighborhood(), &[QI_SHA, PO_JUN, TAN_LANG])
        .then(|| format!("{}/{}/{} all reach the life four-way", QI_SHA, PO_JUN, TAN_LANG))
}

pub fn sun_liang_chang_lu(ctx: &PatternContext<'_>) -> Option<String> {
    let need = [TAI_YANG, TIAN_LIANG, WEN_CHANG, LU_CUN];
    ctx.union_has_all(&ctx.life_neighborhood(), &need)
        .then(|| format!("{} all reach the life four-way", need.join("/")))
}

pub fn seven_killings_facing_dipper(ctx: &PatternContext<'_>) -> Option<String> {
    let seats = [Branch::Zi, Branch::Wu, Branch::Yin, Branch::Shen];
    (ctx.has(ctx.life, QI_SHA) && seats.contains(&ctx.branch(ctx.life)))
        .then(|| format!("{} holds {}", QI_SHA, ctx.describe(ctx.life)))
}

pub fn hero_star_in_temple(ctx: &PatternContext<'_>) -> Option<String> {
    (ctx.has(ctx.life, PO_JUN) && [Branch::Zi, Branch::Wu].contains(&ctx.branch(ctx.life)))
        .then(|| format!("{} holds {}", PO_JUN, ctx.describe(ctx.life)))
}
