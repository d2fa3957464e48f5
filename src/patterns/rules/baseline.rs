//! Baseline patterns around Zi Wei in the life palace
//!
//! `hundred_officials` and `corrupted_ruler` are evaluated independently and
//! can both fire on the same chart.

use crate::chart::stars::*;
use crate::chart::Branch;
use crate::patterns::predicates::PatternContext;

/// Zi Wei is the only principal star of life, seated at 子 or 午
pub fn solo_seat(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.exact_principals(ctx.life, &[ZI_WEI], &[Branch::Zi, Branch::Wu])
        .then(|| format!("{} sits alone in {}", ZI_WEI, ctx.describe(ctx.life)))
}

pub fn hundred_officials(ctx: &PatternContext<'_>) -> Option<String> {
    if !ctx.has(ctx.life, ZI_WEI) {
        return None;
    }
    let pairs = ctx.pair_count(&ctx.life_neighborhood());
    (pairs >= ctx.pair_threshold()).then(|| {
        format!(
            "{} in {}, {} auspicious pairs in the four-way (needs {})",
            ZI_WEI,
            ctx.describe(ctx.life),
            pairs,
            ctx.pair_threshold()
        )
    })
}

/// Zi Wei in life with neither support nor affliction in the four-way
pub fn lone_ruler(ctx: &PatternContext<'_>) -> Option<String> {
    if !ctx.has(ctx.life, ZI_WEI) {
        return None;
    }
    let hood = ctx.life_neighborhood();
    let supported = AUSPICIOUS_PAIRS
        .iter()
        .any(|&(a, b)| ctx.union_has_any(&hood, &[a, b]));
    (!supported && ctx.is_unafflicted(&hood))
        .then(|| format!("{} in {}, four-way has no helpers and no malefics", ZI_WEI, ctx.describe(ctx.life)))
}

pub fn corrupted_ruler(ctx: &PatternContext<'_>) -> Option<String> {
    (ctx.has(ctx.life, ZI_WEI) && !ctx.is_unafflicted(&ctx.life_neighborhood()))
        .then(|| format!("{} in {}, four-way broken by malefics or Hua Ji", ZI_WEI, ctx.describe(ctx.life)))
}

pub fn zi_po_pairing(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.first_co_resident(&[ZI_WEI, PO_JUN], &[Branch::Chou, Branch::Wei])
        .map(|i| format!("{}+{} share {}", ZI_WEI, PO_JUN, ctx.describe(i)))
}

pub fn zi_tan_pairing(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.first_co_resident(&[ZI_WEI, TAN_LANG], &[Branch::Mao, Branch::You])
        .map(|i| format!("{}+{} share {}", ZI_WEI, TAN_LANG, ctx.describe(i)))
}
