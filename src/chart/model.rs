//! Chart data model
//!
//! Closed vocabularies (branches, palaces, categories, brightness grades,
//! transforms) are enums; star names stay strings because the provider owns
//! that vocabulary. Serde renames follow the provider's Chinese labels, with
//! pinyin/English aliases accepted on input.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::relations::{opposite, trines};

/// Number of sectors in every chart
pub const SECTOR_COUNT: usize = 12;

/// Earthly branch: the positional label of a sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子", alias = "zi", alias = "Zi")]
    Zi,
    #[serde(rename = "丑", alias = "chou", alias = "Chou")]
    Chou,
    #[serde(rename = "寅", alias = "yin", alias = "Yin")]
    Yin,
    #[serde(rename = "卯", alias = "mao", alias = "Mao")]
    Mao,
    #[serde(rename = "辰", alias = "chen", alias = "Chen")]
    Chen,
    #[serde(rename = "巳", alias = "si", alias = "Si")]
    Si,
    #[serde(rename = "午", alias = "wu", alias = "Wu")]
    Wu,
    #[serde(rename = "未", alias = "wei", alias = "Wei")]
    Wei,
    #[serde(rename = "申", alias = "shen", alias = "Shen")]
    Shen,
    #[serde(rename = "酉", alias = "you", alias = "You")]
    You,
    #[serde(rename = "戌", alias = "xu", alias = "Xu")]
    Xu,
    #[serde(rename = "亥", alias = "hai", alias = "Hai")]
    Hai,
}

impl Branch {
    pub const ALL: [Branch; SECTOR_COUNT] = [
        Branch::Zi, Branch::Chou, Branch::Yin, Branch::Mao,
        Branch::Chen, Branch::Si, Branch::Wu, Branch::Wei,
        Branch::Shen, Branch::You, Branch::Xu, Branch::Hai,
    ];

    /// Position in the 12-branch cycle (Zi = 0)
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(n: usize) -> Self {
        Self::ALL[n % SECTOR_COUNT]
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }

    pub fn pinyin(self) -> &'static str {
        match self {
            Branch::Zi => "Zi",
            Branch::Chou => "Chou",
            Branch::Yin => "Yin",
            Branch::Mao => "Mao",
            Branch::Chen => "Chen",
            Branch::Si => "Si",
            Branch::Wu => "Wu",
            Branch::Wei => "Wei",
            Branch::Shen => "Shen",
            Branch::You => "You",
            Branch::Xu => "Xu",
            Branch::Hai => "Hai",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The twelve palaces, in the provider's canonical order starting at Life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Palace {
    #[serde(rename = "命宫", alias = "命", alias = "life")]
    Life,
    #[serde(rename = "兄弟", alias = "siblings")]
    Siblings,
    #[serde(rename = "夫妻", alias = "spouse")]
    Spouse,
    #[serde(rename = "子女", alias = "children")]
    Children,
    #[serde(rename = "财帛", alias = "wealth")]
    Wealth,
    #[serde(rename = "疾厄", alias = "health")]
    Health,
    #[serde(rename = "迁移", alias = "travel")]
    Travel,
    #[serde(rename = "仆役", alias = "交友", alias = "friends")]
    Friends,
    #[serde(rename = "官禄", alias = "事业", alias = "career")]
    Career,
    #[serde(rename = "田宅", alias = "property")]
    Property,
    #[serde(rename = "福德", alias = "fortune")]
    Fortune,
    #[serde(rename = "父母", alias = "parents")]
    Parents,
}

impl Palace {
    pub const ALL: [Palace; SECTOR_COUNT] = [
        Palace::Life, Palace::Siblings, Palace::Spouse, Palace::Children,
        Palace::Wealth, Palace::Health, Palace::Travel, Palace::Friends,
        Palace::Career, Palace::Property, Palace::Fortune, Palace::Parents,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn chinese(self) -> &'static str {
        match self {
            Palace::Life => "命宫",
            Palace::Siblings => "兄弟",
            Palace::Spouse => "夫妻",
            Palace::Children => "子女",
            Palace::Wealth => "财帛",
            Palace::Health => "疾厄",
            Palace::Travel => "迁移",
            Palace::Friends => "仆役",
            Palace::Career => "官禄",
            Palace::Property => "田宅",
            Palace::Fortune => "福德",
            Palace::Parents => "父母",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Palace::Life => "Life",
            Palace::Siblings => "Siblings",
            Palace::Spouse => "Spouse",
            Palace::Children => "Children",
            Palace::Wealth => "Wealth",
            Palace::Health => "Health",
            Palace::Travel => "Travel",
            Palace::Friends => "Friends",
            Palace::Career => "Career",
            Palace::Property => "Property",
            Palace::Fortune => "Fortune",
            Palace::Parents => "Parents",
        }
    }
}

impl fmt::Display for Palace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

impl FromStr for Palace {
    type Err = AnalysisError;

    /// Accepts the Chinese name with or without the trailing 宫, or the English name
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let bare = trimmed.trim_end_matches('宫');
        Palace::ALL
            .iter()
            .copied()
            .find(|p| {
                p.chinese().trim_end_matches('宫') == bare
                    || p.english().eq_ignore_ascii_case(trimmed)
            })
            .or(match bare {
                "交友" => Some(Palace::Friends),
                "事业" => Some(Palace::Career),
                _ => None,
            })
            .ok_or_else(|| AnalysisError::lookup(format!("Unknown palace '{}'", s)))
    }
}

/// Star category as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerCategory {
    Major,
    Soft,
    Tough,
    Lucun,
    Tianma,
    Flower,
    Helper,
    Adjective,
}

/// Brightness grade of a star in its sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Brightness {
    #[serde(rename = "庙")]
    Miao,
    #[serde(rename = "旺")]
    Wang,
    #[serde(rename = "得")]
    De,
    #[serde(rename = "利")]
    Li,
    #[serde(rename = "平")]
    Ping,
    #[serde(rename = "不")]
    Bu,
    #[serde(rename = "陷")]
    Xian,
}

/// Long-form and romanized labels folded onto the canonical grades
pub const BRIGHTNESS_ALIASES: &[(&str, Brightness)] = &[
    ("入庙", Brightness::Miao),
    ("庙旺", Brightness::Miao),
    ("得地", Brightness::De),
    ("利益", Brightness::Li),
    ("平和", Brightness::Ping),
    ("不得", Brightness::Bu),
    ("不得地", Brightness::Bu),
    ("落陷", Brightness::Xian),
];

impl Brightness {
    pub const ALL: [Brightness; 7] = [
        Brightness::Miao, Brightness::Wang, Brightness::De, Brightness::Li,
        Brightness::Ping, Brightness::Bu, Brightness::Xian,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Brightness::Miao => "庙",
            Brightness::Wang => "旺",
            Brightness::De => "得",
            Brightness::Li => "利",
            Brightness::Ping => "平",
            Brightness::Bu => "不",
            Brightness::Xian => "陷",
        }
    }

    fn pinyin(self) -> &'static str {
        match self {
            Brightness::Miao => "miao",
            Brightness::Wang => "wang",
            Brightness::De => "de",
            Brightness::Li => "li",
            Brightness::Ping => "ping",
            Brightness::Bu => "bu",
            Brightness::Xian => "xian",
        }
    }

    /// Normalize a provider label through the alias table
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.symbol() == label || b.pinyin().eq_ignore_ascii_case(label))
            .or_else(|| {
                BRIGHTNESS_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == label)
                    .map(|(_, b)| *b)
            })
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unknown grades are logged and dropped
fn lenient_brightness<'de, D>(deserializer: D) -> std::result::Result<Option<Brightness>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.and_then(|l| {
        let parsed = Brightness::from_label(&l);
        if parsed.is_none() && !l.trim().is_empty() {
            tracing::warn!("Ignoring unknown brightness label '{}'", l);
        }
        parsed
    }))
}

/// The four transforms (si hua)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransformKind {
    #[serde(rename = "禄", alias = "lu", alias = "Lu")]
    Lu,
    #[serde(rename = "权", alias = "quan", alias = "Quan")]
    Quan,
    #[serde(rename = "科", alias = "ke", alias = "Ke")]
    Ke,
    #[serde(rename = "忌", alias = "ji", alias = "Ji")]
    Ji,
}

impl TransformKind {
    /// Order used by scope transform lists
    pub const ORDER: [TransformKind; 4] = [
        TransformKind::Lu, TransformKind::Quan, TransformKind::Ke, TransformKind::Ji,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TransformKind::Lu => "禄",
            TransformKind::Quan => "权",
            TransformKind::Ke => "科",
            TransformKind::Ji => "忌",
        }
    }

    /// Accepts the symbol or the pinyin
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "禄" | "lu" | "Lu" => Some(TransformKind::Lu),
            "权" | "quan" | "Quan" => Some(TransformKind::Quan),
            "科" | "ke" | "Ke" => Some(TransformKind::Ke),
            "忌" | "ji" | "Ji" => Some(TransformKind::Ji),
            _ => None,
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A star placed in a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub name: String,
    #[serde(alias = "type")]
    pub category: MarkerCategory,
    #[serde(
        default,
        deserialize_with = "lenient_brightness",
        skip_serializing_if = "Option::is_none"
    )]
    pub brightness: Option<Brightness>,
    #[serde(default, alias = "mutagen", skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformKind>,
}

impl Marker {
    pub fn new(name: impl Into<String>, category: MarkerCategory) -> Self {
        Self {
            name: name.into(),
            category,
            brightness: None,
            transform: None,
        }
    }

    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn with_transform(mut self, transform: TransformKind) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// One of the twelve chart positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub index: usize,
    #[serde(alias = "earthlyBranch")]
    pub branch: Branch,
    pub name: Palace,
    #[serde(default, alias = "majorStars")]
    pub primary: Vec<Marker>,
    #[serde(default, alias = "minorStars")]
    pub secondary: Vec<Marker>,
    #[serde(default, alias = "adjectiveStars")]
    pub auxiliary: Vec<Marker>,
}

impl Sector {
    pub fn new(index: usize, branch: Branch, name: Palace) -> Self {
        Self {
            index,
            branch,
            name,
            primary: Vec::new(),
            secondary: Vec::new(),
            auxiliary: Vec::new(),
        }
    }

    /// All markers across the three groups
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .chain(self.auxiliary.iter())
    }

    pub fn has(&self, name: &str) -> bool {
        self.markers().any(|m| m.name == name)
    }

    fn dedup(&mut self) {
        for group in [&mut self.primary, &mut self.secondary, &mut self.auxiliary] {
            let mut seen = HashSet::new();
            group.retain(|m| seen.insert(m.name.clone()));
        }
    }
}

/// Time scope of a chart view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Origin,
    Decadal,
    Yearly,
    Monthly,
    Daily,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scope::Origin => "origin",
            Scope::Decadal => "decadal",
            Scope::Yearly => "yearly",
            Scope::Monthly => "monthly",
            Scope::Daily => "daily",
        })
    }
}

impl FromStr for Scope {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "origin" => Ok(Scope::Origin),
            "decadal" => Ok(Scope::Decadal),
            "yearly" => Ok(Scope::Yearly),
            "monthly" => Ok(Scope::Monthly),
            "daily" => Ok(Scope::Daily),
            _ => Err(AnalysisError::lookup(format!("Invalid scope '{}'", s))),
        }
    }
}

/// Scope-specific palace naming and active transforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeRecord {
    pub scope: Scope,
    /// Palace name of each sector index under this scope
    #[serde(alias = "palaceNames")]
    pub palace_names: Vec<Palace>,
    /// Star names receiving Lu, Quan, Ke, Ji in this scope window (in that order)
    #[serde(default, alias = "mutagen")]
    pub active_transforms: Vec<String>,
}

impl ScopeRecord {
    fn validate(&self) -> Result<()> {
        if self.scope == Scope::Origin {
            return Err(AnalysisError::validation("Scope record cannot use the origin scope"));
        }
        check_palace_permutation(&self.palace_names, "scope palace names")?;
        if self.active_transforms.len() > TransformKind::ORDER.len() {
            return Err(AnalysisError::validation(format!(
                "Scope record lists {} active transforms (max 4)",
                self.active_transforms.len()
            )));
        }
        Ok(())
    }

    /// (star, transform) pairs of the active list
    pub fn transforms(&self) -> impl Iterator<Item = (&str, TransformKind)> {
        self.active_transforms
            .iter()
            .zip(TransformKind::ORDER)
            .map(|(star, kind)| (star.as_str(), kind))
    }
}

fn check_palace_permutation(names: &[Palace], what: &str) -> Result<()> {
    if names.len() != SECTOR_COUNT {
        return Err(AnalysisError::validation(format!(
            "Expected {} {}, found {}",
            SECTOR_COUNT,
            what,
            names.len()
        )));
    }
    let distinct: HashSet<_> = names.iter().collect();
    if distinct.len() != SECTOR_COUNT {
        return Err(AnalysisError::validation(format!("Duplicate entries in {}", what)));
    }
    Ok(())
}

/// Target sector with its opposite and trine partners
#[derive(Debug, Clone, Copy)]
pub struct Surrounded<'a> {
    pub target: &'a Sector,
    pub opposite: &'a Sector,
    pub trines: [&'a Sector; 2],
}

/// A validated chart: 12 sectors, branch and palace permutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChart")]
pub struct Chart {
    sectors: Vec<Sector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<ScopeRecord>,
}

#[derive(Deserialize)]
struct RawChart {
    #[serde(alias = "palaces")]
    sectors: Vec<Sector>,
    #[serde(default)]
    scope: Option<ScopeRecord>,
}

impl TryFrom<RawChart> for Chart {
    type Error = AnalysisError;

    fn try_from(raw: RawChart) -> Result<Self> {
        Chart::new(raw.sectors, raw.scope)
    }
}

impl Chart {
    /// Validate and normalize sectors (sorted by index, groups deduplicated)
    pub fn new(mut sectors: Vec<Sector>, scope: Option<ScopeRecord>) -> Result<Self> {
        if sectors.len() != SECTOR_COUNT {
            return Err(AnalysisError::validation(format!(
                "Chart must have {} sectors, found {}",
                SECTOR_COUNT,
                sectors.len()
            )));
        }

        sectors.sort_by_key(|s| s.index);
        for (expected, sector) in sectors.iter().enumerate() {
            if sector.index != expected {
                return Err(AnalysisError::validation(format!(
                    "Sector indices must cover 0..11 exactly once (found {} at position {})",
                    sector.index, expected
                )));
            }
        }

        let branches: HashSet<Branch> = sectors.iter().map(|s| s.branch).collect();
        if branches.len() != SECTOR_COUNT {
            return Err(AnalysisError::validation(
                "Sector branches must be a permutation of the 12 earthly branches",
            ));
        }

        let names: Vec<Palace> = sectors.iter().map(|s| s.name).collect();
        check_palace_permutation(&names, "palace names")?;

        if let Some(record) = &scope {
            record.validate()?;
        }

        for sector in &mut sectors {
            sector.dedup();
        }

        Ok(Self { sectors, scope })
    }

    /// Same sectors viewed through a time scope
    pub fn with_scope(&self, record: ScopeRecord) -> Result<Self> {
        record.validate()?;
        Ok(Self {
            sectors: self.sectors.clone(),
            scope: Some(record),
        })
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn sector_at(&self, index: usize) -> &Sector {
        &self.sectors[index % SECTOR_COUNT]
    }

    pub fn scope(&self) -> Option<&ScopeRecord> {
        self.scope.as_ref()
    }

    /// Palace name of a sector, through the scope record when scoped
    pub fn palace_name(&self, index: usize) -> Palace {
        let index = index % SECTOR_COUNT;
        match &self.scope {
            Some(record) => record.palace_names[index],
            None => self.sectors[index].name,
        }
    }

    pub fn index_of(&self, palace: Palace) -> Result<usize> {
        (0..SECTOR_COUNT)
            .find(|&i| self.palace_name(i) == palace)
            .ok_or_else(|| AnalysisError::lookup(format!("Palace {} not present in chart", palace)))
    }

    pub fn sector(&self, palace: Palace) -> Result<&Sector> {
        Ok(&self.sectors[self.index_of(palace)?])
    }

    /// The opposite and trine sectors around a palace
    pub fn surrounded(&self, palace: Palace) -> Result<Surrounded<'_>> {
        let i = self.index_of(palace)?;
        let [t1, t2] = trines(i);
        Ok(Surrounded {
            target: &self.sectors[i],
            opposite: &self.sectors[opposite(i)],
            trines: [&self.sectors[t1], &self.sectors[t2]],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;

    #[test]
    fn test_palace_from_str_variants() {
        assert_eq!("命宫".parse::<Palace>().unwrap(), Palace::Life);
        assert_eq!("命".parse::<Palace>().unwrap(), Palace::Life);
        assert_eq!("夫妻宫".parse::<Palace>().unwrap(), Palace::Spouse);
        assert_eq!("career".parse::<Palace>().unwrap(), Palace::Career);
        assert_eq!("交友".parse::<Palace>().unwrap(), Palace::Friends);
        assert!("nowhere".parse::<Palace>().is_err());
    }

    #[test]
    fn test_brightness_aliases() {
        assert_eq!(Brightness::from_label("庙"), Some(Brightness::Miao));
        assert_eq!(Brightness::from_label("落陷"), Some(Brightness::Xian));
        assert_eq!(Brightness::from_label("得地"), Some(Brightness::De));
        assert_eq!(Brightness::from_label("Wang"), Some(Brightness::Wang));
        assert_eq!(Brightness::from_label(""), None);
        assert_eq!(Brightness::from_label("bright"), None);
    }

    #[test]
    fn test_marker_deserializes_provider_fields() {
        let json = r#"{"name":"太阳","type":"major","brightness":"落陷","mutagen":"忌"}"#;
        let marker: Marker = serde_json::from_str(json).unwrap();
        assert_eq!(marker.category, MarkerCategory::Major);
        assert_eq!(marker.brightness, Some(Brightness::Xian));
        assert_eq!(marker.transform, Some(TransformKind::Ji));

        let unknown = r#"{"name":"天姚","category":"flower","brightness":"???"}"#;
        let marker: Marker = serde_json::from_str(unknown).unwrap();
        assert_eq!(marker.brightness, None);
    }

    #[test]
    fn test_chart_rejects_duplicate_branch() {
        let chart = ChartBuilder::new().build().unwrap();
        let mut sectors = chart.sectors().to_vec();
        sectors[3].branch = sectors[4].branch;
        let err = Chart::new(sectors, None).unwrap_err();
        assert!(err.to_string().contains("permutation"));
    }

    #[test]
    fn test_chart_rejects_wrong_count() {
        let chart = ChartBuilder::new().build().unwrap();
        let sectors = chart.sectors()[..11].to_vec();
        assert!(Chart::new(sectors, None).is_err());
    }

    #[test]
    fn test_chart_deduplicates_markers() {
        let chart = ChartBuilder::new()
            .stars(0, &["紫微", "紫微"])
            .build()
            .unwrap();
        assert_eq!(chart.sector_at(0).primary.len(), 1);
    }

    #[test]
    fn test_surrounded_follows_relations() {
        let chart = ChartBuilder::new().life_at(2).build().unwrap();
        let around = chart.surrounded(Palace::Life).unwrap();
        assert_eq!(around.target.index, 2);
        assert_eq!(around.opposite.index, 8);
        assert_eq!(around.trines[0].index, 6);
        assert_eq!(around.trines[1].index, 10);
        assert_eq!(around.opposite.name, Palace::Travel);
    }

    #[test]
    fn test_scoped_names_take_precedence() {
        let chart = ChartBuilder::new().life_at(0).build().unwrap();
        let mut names = Palace::ALL.to_vec();
        names.rotate_right(3);
        let scoped = chart
            .with_scope(ScopeRecord {
                scope: Scope::Yearly,
                palace_names: names,
                active_transforms: vec![],
            })
            .unwrap();
        assert_eq!(scoped.palace_name(3), Palace::Life);
        assert_eq!(scoped.index_of(Palace::Life).unwrap(), 3);
    }

    #[test]
    fn test_scope_record_rejects_origin() {
        let chart = ChartBuilder::new().build().unwrap();
        let err = chart
            .with_scope(ScopeRecord {
                scope: Scope::Origin,
                palace_names: Palace::ALL.to_vec(),
                active_transforms: vec![],
            })
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Validation { .. }));
    }
}
