//! Star vocabulary and reference sets
//!
//! Names are the provider's labels. The sets here are fixed reference data
//! shared by pattern rules and scoring.

use super::model::MarkerCategory;

// 14 principal stars
pub const ZI_WEI: &str = "紫微";
pub const TIAN_JI: &str = "天机";
pub const TAI_YANG: &str = "太阳";
pub const WU_QU: &str = "武曲";
pub const TIAN_TONG: &str = "天同";
pub const LIAN_ZHEN: &str = "廉贞";
pub const TIAN_FU: &str = "天府";
pub const TAI_YIN: &str = "太阴";
pub const TAN_LANG: &str = "贪狼";
pub const JU_MEN: &str = "巨门";
pub const TIAN_XIANG: &str = "天相";
pub const TIAN_LIANG: &str = "天梁";
pub const QI_SHA: &str = "七杀";
pub const PO_JUN: &str = "破军";

// Auspicious minor stars
pub const ZUO_FU: &str = "左辅";
pub const YOU_BI: &str = "右弼";
pub const WEN_CHANG: &str = "文昌";
pub const WEN_QU: &str = "文曲";
pub const TIAN_KUI: &str = "天魁";
pub const TIAN_YUE: &str = "天钺";
pub const LU_CUN: &str = "禄存";
pub const TIAN_MA: &str = "天马";

// Malefic minor stars
pub const QING_YANG: &str = "擎羊";
pub const TUO_LUO: &str = "陀罗";
pub const HUO_XING: &str = "火星";
pub const LING_XING: &str = "铃星";
pub const DI_KONG: &str = "地空";
pub const DI_JIE: &str = "地劫";

// Helper (paired) adjective stars
pub const SAN_TAI: &str = "三台";
pub const BA_ZUO: &str = "八座";
pub const EN_GUANG: &str = "恩光";
pub const TIAN_GUI: &str = "天贵";
pub const TAI_FU: &str = "台辅";
pub const FENG_GAO: &str = "封诰";
pub const TIAN_GUAN: &str = "天官";
/// 天福, distinct from the principal star 天府
pub const TIAN_FU_BLESSING: &str = "天福";

pub const MAJOR_14: [&str; 14] = [
    ZI_WEI, TIAN_JI, TAI_YANG, WU_QU, TIAN_TONG, LIAN_ZHEN, TIAN_FU,
    TAI_YIN, TAN_LANG, JU_MEN, TIAN_XIANG, TIAN_LIANG, QI_SHA, PO_JUN,
];

/// The six malefics whose presence afflicts a neighborhood
pub const MALEFICS: [&str; 6] = [QING_YANG, TUO_LUO, HUO_XING, LING_XING, DI_KONG, DI_JIE];

pub const SOFT: [&str; 6] = [ZUO_FU, YOU_BI, WEN_CHANG, WEN_QU, TIAN_KUI, TIAN_YUE];

/// Auspicious pairs counted by the hundred-officials escalation
pub const AUSPICIOUS_PAIRS: [(&str, &str); 7] = [
    (TIAN_KUI, TIAN_YUE),
    (WEN_CHANG, WEN_QU),
    (ZUO_FU, YOU_BI),
    (SAN_TAI, BA_ZUO),
    (EN_GUANG, TIAN_GUI),
    (TAI_FU, FENG_GAO),
    (TIAN_GUAN, TIAN_FU_BLESSING),
];

/// Romance stars
pub const FLOWER: [&str; 4] = ["红鸾", "天喜", "咸池", "天姚"];

pub const HELPER: [&str; 8] = [
    SAN_TAI, BA_ZUO, EN_GUANG, TIAN_GUI, TAI_FU, FENG_GAO, TIAN_GUAN, TIAN_FU_BLESSING,
];

pub const POSITIVE_ADJECTIVE: [&str; 7] = ["龙池", "凤阁", "天巫", "天德", "月德", "解神", "天寿"];

pub const NEGATIVE_ADJECTIVE: [&str; 9] = [
    "天刑", "阴煞", "孤辰", "寡宿", "破碎", "大耗", "蜚廉", "天哭", "天虚",
];

pub fn is_major(name: &str) -> bool {
    MAJOR_14.contains(&name)
}

/// Category a provider would report for a known star name
pub fn category_of(name: &str) -> MarkerCategory {
    if is_major(name) {
        MarkerCategory::Major
    } else if SOFT.contains(&name) {
        MarkerCategory::Soft
    } else if MALEFICS.contains(&name) {
        MarkerCategory::Tough
    } else if name == LU_CUN {
        MarkerCategory::Lucun
    } else if name == TIAN_MA {
        MarkerCategory::Tianma
    } else if FLOWER.contains(&name) {
        MarkerCategory::Flower
    } else if HELPER.contains(&name) {
        MarkerCategory::Helper
    } else {
        MarkerCategory::Adjective
    }
}
