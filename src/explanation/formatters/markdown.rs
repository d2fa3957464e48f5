use crate::analyzer::{PalaceView, PatternReport, SectorView, SynastryAnalysis};
use crate::chart::Marker;
use crate::explanation::types::{PalaceReading, SynastryReport};
use crate::patterns::PatternMatch;
use crate::utils::Polarity;

/// Markdown formatter for reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a full synastry analysis as markdown
    pub fn format_synastry(analysis: &SynastryAnalysis) -> String {
        let mut md = String::with_capacity(4096);

        md.push_str(&format!("# Synastry: {}\n\n", analysis.summary.headline));
        md.push_str(&format!("**Scope:** {}", analysis.summary.scope));
        if let Some(date) = &analysis.summary.query_date {
            md.push_str(&format!(" ({})", date));
        }
        md.push_str("  \n");
        md.push_str(&format!(
            "**Minimum effect shown:** {:.2}\n\n",
            analysis.metadata.min_effect_threshold
        ));

        Self::format_report_body(&mut md, &analysis.report);
        md
    }

    /// Format a bare report (no summary or metadata)
    pub fn format_report(report: &SynastryReport) -> String {
        let mut md = String::with_capacity(4096);
        md.push_str(&format!("# Synastry: {}\n\n", report.headline));
        Self::format_report_body(&mut md, report);
        md
    }

    fn format_report_body(md: &mut String, report: &SynastryReport) {
        md.push_str("## Overview\n\n");
        md.push_str("| Palace | Score | Bucket | Summary |\n");
        md.push_str("|--------|-------|--------|---------|\n");
        for reading in &report.palaces {
            md.push_str(&format!(
                "| {} {} | {} | {} | {} |\n",
                reading.palace.english(),
                reading.palace.chinese(),
                reading.display_score,
                reading.bucket,
                reading.one_liner
            ));
        }
        md.push('\n');

        for reading in &report.palaces {
            Self::format_reading(md, reading);
        }
    }

    fn format_reading(md: &mut String, reading: &PalaceReading) {
        let marker = match reading.polarity {
            Polarity::Favorable => "✅",
            Polarity::Adverse => "⚠️",
            Polarity::Neutral => "➖",
        };
        md.push_str(&format!(
            "## {} {} {}: {} ({})\n\n",
            marker,
            reading.palace.english(),
            reading.palace.chinese(),
            reading.bucket,
            reading.display_score
        ));
        md.push_str(&format!("{}\n\n", reading.one_liner));

        if !reading.highlights.is_empty() {
            md.push_str("**Highlights:**\n\n");
            for line in &reading.highlights {
                md.push_str(&format!("- `{}`\n", line));
            }
            md.push('\n');
        }

        if !reading.risks.is_empty() {
            md.push_str("**Risks:**\n\n");
            for line in &reading.risks {
                md.push_str(&format!("- `{}`\n", line));
            }
            md.push('\n');
        }

        if !reading.advice.is_empty() {
            md.push_str("**Advice:**\n\n");
            for advice in &reading.advice {
                md.push_str(&format!("- {}\n", advice));
            }
            md.push('\n');
        }
    }

    /// Format detected patterns grouped by catalog group
    pub fn format_patterns(report: &PatternReport) -> String {
        let mut md = String::with_capacity(2048);
        md.push_str(&format!("# Patterns: {} ({})\n\n", report.subject, report.scope));

        if report.patterns.is_empty() {
            md.push_str("No patterns detected.\n");
            return md;
        }

        md.push_str(&format!("**Detected:** {}\n\n", report.patterns.len()));
        Self::format_pattern_list(&mut md, &report.patterns, "##");
        md
    }

    fn format_pattern_list(md: &mut String, patterns: &[PatternMatch], level: &str) {
        let mut current = None;
        for pattern in patterns {
            if current != Some(pattern.group) {
                md.push_str(&format!("{} {}\n\n", level, pattern.group.label()));
                current = Some(pattern.group);
            }
            md.push_str(&format!("- **{}** `{}`: {}  \n", pattern.title, pattern.id, pattern.description));
            md.push_str(&format!("  *{}*\n", pattern.reason));
        }
        md.push('\n');
    }

    /// Format a palace with its opposite and trines
    pub fn format_palace(view: &PalaceView) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str(&format!(
            "# {} {}: {} ({})\n\n",
            view.target.palace.english(),
            view.target.palace.chinese(),
            view.subject,
            view.scope
        ));
        if let Some(date) = &view.query_date {
            md.push_str(&format!("**Query date:** {}\n\n", date));
        }

        md.push_str("| Role | Palace | Branch | Primary | Secondary | Auxiliary |\n");
        md.push_str("|------|--------|--------|---------|-----------|-----------|\n");
        Self::format_sector_row(&mut md, "Target", &view.target);
        Self::format_sector_row(&mut md, "Opposite", &view.opposite);
        for trine in &view.trines {
            Self::format_sector_row(&mut md, "Trine", trine);
        }
        md.push('\n');

        if !view.active_transforms.is_empty() {
            md.push_str("## Active Transforms\n\n");
            for active in &view.active_transforms {
                md.push_str(&format!("- {} 化{}\n", active.star, active.transform));
            }
            md.push('\n');
        }

        md.push_str("## Patterns\n\n");
        if view.patterns.is_empty() {
            md.push_str("None.\n");
        } else {
            Self::format_pattern_list(&mut md, &view.patterns, "###");
        }
        md
    }

    fn format_sector_row(md: &mut String, role: &str, sector: &SectorView) {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            role,
            sector.palace.chinese(),
            sector.branch,
            Self::marker_list(&sector.primary),
            Self::marker_list(&sector.secondary),
            Self::marker_list(&sector.auxiliary)
        ));
    }

    fn marker_list(markers: &[Marker]) -> String {
        if markers.is_empty() {
            return "-".to_string();
        }
        markers
            .iter()
            .map(|m| {
                let mut text = m.name.clone();
                if let Some(brightness) = m.brightness {
                    text.push_str(&format!("({})", brightness));
                }
                if let Some(transform) = m.transform {
                    text.push_str(&format!("[{}]", transform));
                }
                text
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Brightness, MarkerCategory, Palace, Scope, TransformKind};
    use crate::patterns::PatternGroup;

    fn reading(palace: Palace, polarity: Polarity) -> PalaceReading {
        PalaceReading {
            palace,
            raw: 1.0,
            score: 50.0,
            display_score: 50,
            bucket: "Neutral".to_string(),
            polarity,
            highlights: vec!["Life←Career: B star[太阳|庙] *0.5 => 1.20".to_string()],
            risks: vec![],
            advice: vec!["Take time to learn each other's pace".to_string()],
            one_liner: "Neither helping nor hindering.".to_string(),
        }
    }

    fn pattern(id: &str, group: PatternGroup) -> PatternMatch {
        PatternMatch {
            id: id.to_string(),
            group,
            title: id.to_string(),
            description: "blurb".to_string(),
            reason: "because".to_string(),
        }
    }

    #[test]
    fn test_format_report() {
        let report = SynastryReport {
            headline: "A × B".to_string(),
            palaces: vec![reading(Palace::Life, Polarity::Neutral)],
        };
        let md = MarkdownFormatter::format_report(&report);

        assert!(md.contains("# Synastry: A × B"));
        assert!(md.contains("| Life 命宫 | 50 | Neutral |"));
        assert!(md.contains("- `Life←Career: B star[太阳|庙] *0.5 => 1.20`"));
        assert!(md.contains("**Advice:**"));
        assert!(!md.contains("**Risks:**"));
    }

    #[test]
    fn test_format_patterns_groups_once() {
        let report = PatternReport {
            subject: "a".to_string(),
            scope: Scope::Origin,
            patterns: vec![
                pattern("fire-greed", PatternGroup::Eruptive),
                pattern("bell-greed", PatternGroup::Eruptive),
                pattern("solo-seat", PatternGroup::Baseline),
            ],
        };
        let md = MarkdownFormatter::format_patterns(&report);

        assert_eq!(md.matches(&format!("## {}", PatternGroup::Eruptive.label())).count(), 1);
        assert!(md.contains("**Detected:** 3"));
        assert!(md.contains("`solo-seat`"));
    }

    #[test]
    fn test_format_empty_patterns() {
        let report = PatternReport { subject: "a".to_string(), scope: Scope::Yearly, patterns: vec![] };
        let md = MarkdownFormatter::format_patterns(&report);
        assert!(md.contains("No patterns detected."));
    }

    #[test]
    fn test_marker_list() {
        let markers = vec![
            Marker::new("太阳", MarkerCategory::Major)
                .with_brightness(Brightness::Miao)
                .with_transform(TransformKind::Lu),
            Marker::new("文昌", MarkerCategory::Soft),
        ];
        assert_eq!(MarkdownFormatter::marker_list(&markers), "太阳(庙)[禄] 文昌");
        assert_eq!(MarkdownFormatter::marker_list(&[]), "-");
    }
}
