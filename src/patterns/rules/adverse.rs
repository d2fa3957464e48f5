//! Adverse patterns

use crate::chart::stars::*;
use crate::chart::{opposite, TransformKind, SECTOR_COUNT};
use crate::patterns::predicates::PatternContext;

pub fn liang_ma_drift(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.first_co_resident(&[TIAN_LIANG, TIAN_MA], &[])
        .map(|i| format!("{}+{} share {}", TIAN_LIANG, TIAN_MA, ctx.describe(i)))
}

/// Hua Lu pinched by Di Kong/Di Jie, or facing Hua Ji across the chart
pub fn broken_lu(ctx: &PatternContext<'_>) -> Option<String> {
    (0..SECTOR_COUNT)
        .filter(|&i| ctx.has_transform(i, TransformKind::Lu))
        .find_map(|i| {
            if ctx.flanked_by(i, DI_KONG, DI_JIE) {
                Some(format!("Hua Lu in {} is flanked by {} and {}", ctx.describe(i), DI_KONG, DI_JIE))
            } else if ctx.has_transform(opposite(i), TransformKind::Ji) {
                Some(format!(
                    "Hua Lu in {} faces Hua Ji in {}",
                    ctx.describe(i),
                    ctx.describe(opposite(i))
                ))
            } else {
                None
            }
        })
}
