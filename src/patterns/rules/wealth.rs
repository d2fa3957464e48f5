//! Wealth patterns built on Lu Cun and the Lu transform

use crate::chart::stars::*;
use crate::chart::{TransformKind, SECTOR_COUNT};
use crate::patterns::predicates::PatternContext;

/// Lu, Quan and Ke transforms all inside the life four-way
pub fn three_marvels(ctx: &PatternContext<'_>) -> Option<String> {
    let hood = ctx.life_neighborhood();
    [TransformKind::Lu, TransformKind::Quan, TransformKind::Ke]
        .iter()
        .all(|k| ctx.any_transform(&hood, *k))
        .then(|| "Hua Lu, Hua Quan and Hua Ke all reach the life four-way".to_string())
}

pub fn lu_ma_gallop(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.first_co_resident(&[LU_CUN, TIAN_MA], &[])
        .map(|i| format!("{}+{} share {}", LU_CUN, TIAN_MA, ctx.describe(i)))
}

/// Lu Cun sharing a sector with a Lu-transformed star
pub fn lu_union(ctx: &PatternContext<'_>) -> Option<String> {
    (0..SECTOR_COUNT)
        .find(|&i| ctx.has(i, LU_CUN) && ctx.has_transform(i, TransformKind::Lu))
        .map(|i| format!("{} and Hua Lu share {}", LU_CUN, ctx.describe(i)))
}

pub fn double_lu(ctx: &PatternContext<'_>) -> Option<String> {
    let hood = ctx.life_neighborhood();
    (ctx.union_has_all(&hood, &[LU_CUN])
        && ctx.any_transform(&hood, TransformKind::Lu)
        && ctx.is_unafflicted(&hood))
    .then(|| format!("{} and Hua Lu both reach a clean life four-way", LU_CUN))
}
