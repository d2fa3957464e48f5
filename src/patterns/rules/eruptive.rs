//! Eruptive patterns: Tan Lang meeting Huo Xing or Ling Xing

use crate::chart::stars::*;
use crate::patterns::predicates::PatternContext;

pub fn fire_greed(ctx: &PatternContext<'_>) -> Option<String> {
    ctx.co_resident(ctx.life, &[TAN_LANG, HUO_XING])
        .then(|| format!("{}+{} share {}", TAN_LANG, HUO_XING, ctx.describe(ctx.life)))
}

/// Only when Huo Xing is absent; the fire reading takes precedence
pub fn bell_greed(ctx: &PatternContext<'_>) -> Option<String> {
    (ctx.co_resident(ctx.life, &[TAN_LANG, LING_XING]) && !ctx.has(ctx.life, HUO_XING))
        .then(|| format!("{}+{} share {}", TAN_LANG, LING_XING, ctx.describe(ctx.life)))
}

pub fn fire_bell_greed_weak(ctx: &PatternContext<'_>) -> Option<String> {
    let hood = ctx.life_neighborhood();
    (ctx.union_has_all(&hood, &[TAN_LANG]) && ctx.union_has_any(&hood, &[HUO_XING, LING_XING]))
        .then(|| format!("{} meets {}/{} in the life four-way", TAN_LANG, HUO_XING, LING_XING))
}
