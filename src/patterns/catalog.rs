//! Static pattern catalog
//!
//! Every descriptor is paired with its detection rule. The slice order is the
//! order the engine evaluates in and the order matches are reported.

use super::predicates::PatternContext;
use super::rules::{adverse, archetypes, assisting, baseline, career, eruptive, status, wealth};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternGroup {
    Status,
    Archetype,
    Eruptive,
    Career,
    Wealth,
    Assisting,
    Adverse,
    Baseline,
}

impl PatternGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::Archetype => "Five archetypes",
            Self::Eruptive => "Eruptive",
            Self::Career => "Career",
            Self::Wealth => "Wealth",
            Self::Assisting => "Assisting",
            Self::Adverse => "Adverse",
            Self::Baseline => "Baseline",
        }
    }
}

impl fmt::Display for PatternGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptor for a named pattern
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternDescriptor {
    pub id: &'static str,
    pub group: PatternGroup,
    pub title: &'static str,
    pub description: &'static str,
}

pub type Detector = fn(&PatternContext<'_>) -> Option<String>;

pub struct PatternRule {
    pub descriptor: PatternDescriptor,
    pub detect: Detector,
}

const fn rule(
    id: &'static str,
    group: PatternGroup,
    title: &'static str,
    description: &'static str,
    detect: Detector,
) -> PatternRule {
    PatternRule {
        descriptor: PatternDescriptor { id, group, title, description },
        detect,
    }
}

use PatternGroup::*;

pub static CATALOG: [PatternRule; 33] = [
    // Status
    rule(
        "ruler-minister-a",
        Status,
        "Ruler and ministers (Zi-Po)",
        "Zi Wei with Po Jun in life, Zuo Fu and You Bi reaching in: authority backed by aides, good for command and coordination.",
        status::ruler_minister_a,
    ),
    rule(
        "ruler-minister-b",
        Status,
        "Ruler and ministers (Zi-Xiang)",
        "Zi Wei with Tian Xiang in life, Wen Chang and Wen Qu across life and travel: reputation that follows credentials.",
        status::ruler_minister_b,
    ),
    rule(
        "ruler-minister-c",
        Status,
        "Ruler and ministers (Tian Fu)",
        "Tian Fu in life, Zuo/You meeting Ji-Liang or Tong-Yin: clear lines of command, steady resources.",
        status::ruler_minister_c,
    ),
    rule(
        "ziwei-tianfu-together",
        Status,
        "Zi Wei and Tian Fu together",
        "Zi Wei and Tian Fu share a palace: leadership and stewardship in one seat, suits large stable platforms.",
        status::ziwei_tianfu_together,
    ),
    rule(
        "golden-carriage",
        Status,
        "Golden carriage",
        "Tian Fu guards life, Zuo/You and the sun and moon reach it: support from inside and out, titles come easily.",
        status::golden_carriage,
    ),
    rule(
        "ruler-treasury-flank",
        Status,
        "Ruler and treasury flank life",
        "Ji-Yue in life flanked by Zi Wei and Tian Fu: plans before acting, draws on senior patrons.",
        status::ruler_treasury_flank,
    ),
    rule(
        "facing-the-light",
        Status,
        "Facing the light",
        "Zi Wei at 午 in an unbroken four-way: authority and reputation shine, fragile if malefics or Ji break in.",
        status::facing_the_light,
    ),
    // Five archetypes
    rule(
        "archetype-sha-po-lang",
        Archetype,
        "Sha-Po-Lang archetype",
        "Change through motion and assault; suits pioneering and competition, avoid head-on emotional clashes.",
        archetypes::sha_po_lang,
    ),
    rule(
        "archetype-fu-xiang",
        Archetype,
        "Fu-Xiang archetype",
        "Steady, executes well; suits control roles inside large organizations, progress through stability.",
        archetypes::fu_xiang,
    ),
    rule(
        "archetype-ji-yue-tong-liang",
        Archetype,
        "Ji-Yue-Tong-Liang archetype",
        "Gentle and meticulous craftsmanship; suits stable posts or an independent specialist track.",
        archetypes::ji_yue_tong_liang,
    ),
    rule(
        "archetype-zi-wu-lian-fu-xiang",
        Archetype,
        "Zi-Wu-Lian with Fu-Xiang",
        "Command and steadiness together, can lead or support; suits senior management and administration.",
        archetypes::zi_wu_lian_fu_xiang,
    ),
    rule(
        "archetype-zi-wu-lian-sha-po-lang",
        Archetype,
        "Zi-Wu-Lian with Sha-Po-Lang",
        "Able in both attack and defence; suits staged goals and building a durable moat.",
        archetypes::zi_wu_lian_sha_po_lang,
    ),
    // Eruptive
    rule(
        "fire-greed",
        Eruptive,
        "Fire greed",
        "Tan Lang meets Huo Xing: bold and aggressive, good for charging ahead, beware burning out.",
        eruptive::fire_greed,
    ),
    rule(
        "bell-greed",
        Eruptive,
        "Bell greed",
        "Tan Lang meets Ling Xing: quick and changeable, good for creative trials, watch rhythm and stability.",
        eruptive::bell_greed,
    ),
    rule(
        "fire-bell-greed-weak",
        Eruptive,
        "Fire/bell greed (weak)",
        "Tan Lang and Huo/Ling meet across the four-way: weaker momentum, suited to staged pilots.",
        eruptive::fire_bell_greed_weak,
    ),
    // Career
    rule(
        "sha-po-lang",
        Career,
        "Sha-Po-Lang",
        "Change and expansion accelerate; suits restructuring under firm risk controls.",
        career::sha_po_lang_meeting,
    ),
    rule(
        "sun-liang-chang-lu",
        Career,
        "Sun, Liang, Chang and Lu",
        "Rank and reputation backed by institutions and credentials; favors promotion and public roles.",
        career::sun_liang_chang_lu,
    ),
    rule(
        "seven-killings-facing-dipper",
        Career,
        "Seven Killings facing the Dipper",
        "Qi Sha holds life at 子/午/寅/申: sharp and decisive, suits breakthroughs and enforcement careers.",
        career::seven_killings_facing_dipper,
    ),
    rule(
        "hero-star-in-temple",
        Career,
        "Hero star in temple",
        "Po Jun holds life at 子/午: reform and rebuild, avoid repeated tear-downs.",
        career::hero_star_in_temple,
    ),
    // Wealth
    rule(
        "three-marvels",
        Wealth,
        "Three marvels converge",
        "Lu, Quan and Ke gather: resources, authority and renown resonate at key moments.",
        wealth::three_marvels,
    ),
    rule(
        "lu-ma-gallop",
        Wealth,
        "Lu and Ma gallop together",
        "Income and mobility together; favors cash flow and field work.",
        wealth::lu_ma_gallop,
    ),
    rule(
        "lu-union",
        Wealth,
        "Lu union",
        "Lu Cun shares a palace with Hua Lu: income streams merge, rewards are realized.",
        wealth::lu_union,
    ),
    rule(
        "double-lu",
        Wealth,
        "Double Lu facing the seat",
        "Lu Cun and Hua Lu both reach a clean four-way: prosperous, especially for wealth and career.",
        wealth::double_lu,
    ),
    // Assisting
    rule(
        "zuo-you-flank",
        Assisting,
        "Zuo and You flank life",
        "Zuo Fu and You Bi flank life: help from inside and outside, play to the leading role.",
        assisting::zuo_you_flank,
    ),
    rule(
        "kui-yue-flank",
        Assisting,
        "Kui and Yue flank life",
        "Tian Kui and Tian Yue flank life: noble help and problem solving, patrons appear at key points.",
        assisting::kui_yue_flank,
    ),
    // Adverse
    rule(
        "liang-ma-drift",
        Adverse,
        "Liang and Ma drift",
        "Restless and unsettled, gathers little and scatters much; suits short mobile projects over long commitments.",
        adverse::liang_ma_drift,
    ),
    rule(
        "broken-lu",
        Adverse,
        "Lu broken",
        "Hua Lu pinched by Di Kong/Di Jie or struck by Ji from the opposite palace: gains first, loses later.",
        adverse::broken_lu,
    ),
    // Baseline
    rule(
        "solo-seat",
        Baseline,
        "Zi Wei seated alone",
        "The emperor star alone at 子/午: self-respecting and independent, stronger at 午.",
        baseline::solo_seat,
    ),
    rule(
        "hundred-officials",
        Baseline,
        "Hundred officials pay court",
        "Zi Wei in life with enough auspicious pairs across the four-way: prestige and support both ample.",
        baseline::hundred_officials,
    ),
    rule(
        "lone-ruler",
        Baseline,
        "Lone ruler in the wilds",
        "Zi Wei in life with neither helpers nor malefics around: aloof and self-reliant, must build its own system.",
        baseline::lone_ruler,
    ),
    rule(
        "corrupted-ruler",
        Baseline,
        "Ruler without the way",
        "Zi Wei in life broken by malefics or Ji: prone to arrogance and misjudgment, needs checks and balances.",
        baseline::corrupted_ruler,
    ),
    rule(
        "zi-po-pairing",
        Baseline,
        "Zi Wei with Po Jun",
        "Zi Wei and Po Jun share a palace at 丑/未: break first then build, a late bloomer with strong reforming drive.",
        baseline::zi_po_pairing,
    ),
    rule(
        "zi-tan-pairing",
        Baseline,
        "Zi Wei with Tan Lang",
        "Zi Wei and Tan Lang share a palace at 卯/酉: desire and power run together, set boundaries on appetite.",
        baseline::zi_tan_pairing,
    ),
];

/// Descriptor lookup by id
pub fn descriptor(id: &str) -> Option<&'static PatternDescriptor> {
    CATALOG.iter().map(|r| &r.descriptor).find(|d| d.id == id)
}

pub fn descriptors() -> impl Iterator<Item = &'static PatternDescriptor> {
    CATALOG.iter().map(|r| &r.descriptor)
}
