//! Projection of a report response onto independently rendered sections.

use shared::protocol::{AdPerformer, Analysis, Insights, OptimizedCreative, ReportResponse};

use crate::{controller::SubmissionState, format};

const MISSING_SCORE: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Metrics,
    Insights,
    Creatives,
    Recommendation,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 4] = [
        SectionKind::Metrics,
        SectionKind::Insights,
        SectionKind::Creatives,
        SectionKind::Recommendation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Metrics => "Performance Overview",
            SectionKind::Insights => "Insights",
            SectionKind::Creatives => "AI-Generated Optimized Creatives",
            SectionKind::Recommendation => "Recommendation",
        }
    }
}

/// A response with every optional section resolved to present or absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedReport<'a> {
    pub analysis: Option<&'a Analysis>,
    pub insights: Option<&'a Insights>,
    pub creatives: Option<&'a [OptimizedCreative]>,
    pub recommendation: Option<&'a str>,
    pub timestamp: Option<&'a str>,
}

impl<'a> NormalizedReport<'a> {
    pub fn normalize(response: &'a ReportResponse) -> Self {
        Self {
            analysis: response.analysis.as_ref(),
            insights: response.insights.as_ref(),
            creatives: response.optimized_creatives.as_deref(),
            recommendation: non_blank(response.recommendation.as_deref()),
            timestamp: non_blank(response.timestamp.as_deref()),
        }
    }

    pub fn has(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Metrics => self.analysis.is_some(),
            SectionKind::Insights => self.insights.is_some(),
            SectionKind::Creatives => self.creatives.is_some(),
            SectionKind::Recommendation => self.recommendation.is_some(),
        }
    }

    pub fn present_sections(&self) -> Vec<SectionKind> {
        SectionKind::ORDER
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformerRow {
    pub name: String,
    pub impressions: String,
    pub clicks: String,
    pub ctr: String,
    pub conversions: String,
    pub cost_per_conversion: String,
    pub score: String,
}

impl From<&AdPerformer> for PerformerRow {
    fn from(performer: &AdPerformer) -> Self {
        Self {
            name: performer.name.clone(),
            impressions: performer.impressions.to_string(),
            clicks: performer.clicks.to_string(),
            ctr: format::percent(performer.ctr),
            conversions: performer.conversions.to_string(),
            cost_per_conversion: format::currency(performer.cost_per_conversion, 2),
            score: performer
                .performance_score
                .map(|score| format::to_fixed(score, 1))
                .unwrap_or_else(|| MISSING_SCORE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSection {
    pub tiles: Vec<MetricTile>,
    pub top_performers: Vec<PerformerRow>,
    pub bottom_performers: Vec<PerformerRow>,
}

impl From<&Analysis> for MetricsSection {
    fn from(analysis: &Analysis) -> Self {
        let metrics = &analysis.metrics;
        Self {
            tiles: vec![
                MetricTile {
                    label: "Total Ads",
                    value: metrics.total_ads.to_string(),
                },
                MetricTile {
                    label: "Avg CTR",
                    value: format::percent(metrics.avg_ctr),
                },
                MetricTile {
                    label: "Avg Conv",
                    value: format::whole(metrics.avg_conversions),
                },
                MetricTile {
                    label: "Total Spend",
                    value: format::currency(metrics.total_spend, 0),
                },
            ],
            top_performers: analysis.top_performers.iter().map(PerformerRow::from).collect(),
            bottom_performers: analysis
                .bottom_performers
                .iter()
                .map(PerformerRow::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsSection {
    pub top_patterns: Vec<String>,
    pub bottom_weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreativeCard {
    /// 1-based position in the response, independent of any identifier.
    pub position: usize,
    pub headline: String,
    pub primary_text: String,
    pub cta: String,
    pub reasoning: String,
}

impl CreativeCard {
    pub fn label(&self) -> String {
        format!("Variation {}", self.position)
    }

    /// Ad copy ready to paste into an ads manager.
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}\n\n{}", self.headline, self.primary_text, self.cta)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreativesSection {
    pub cards: Vec<CreativeCard>,
}

impl From<&[OptimizedCreative]> for CreativesSection {
    fn from(creatives: &[OptimizedCreative]) -> Self {
        let cards = creatives
            .iter()
            .enumerate()
            .map(|(idx, creative)| CreativeCard {
                position: idx + 1,
                headline: creative.headline.clone(),
                primary_text: creative.primary_text.clone(),
                cta: creative.cta.clone(),
                reasoning: creative.reasoning.clone(),
            })
            .collect();
        Self { cards }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Metrics(MetricsSection),
    Insights(InsightsSection),
    Creatives(CreativesSection),
    Recommendation(String),
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Metrics(_) => SectionKind::Metrics,
            Section::Insights(_) => SectionKind::Insights,
            Section::Creatives(_) => SectionKind::Creatives,
            Section::Recommendation(_) => SectionKind::Recommendation,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportView {
    pub sections: Vec<Section>,
    pub generated_at: Option<String>,
}

impl ReportView {
    /// Only a successful submission whose body reports `success: true` renders.
    pub fn from_state(state: &SubmissionState) -> Option<Self> {
        match state {
            SubmissionState::Success(response) if response.success => {
                Some(Self::from_response(response))
            }
            _ => None,
        }
    }

    pub fn from_response(response: &ReportResponse) -> Self {
        let normalized = NormalizedReport::normalize(response);
        let mut sections = Vec::new();

        if let Some(analysis) = normalized.analysis {
            sections.push(Section::Metrics(MetricsSection::from(analysis)));
        }
        if let Some(insights) = normalized.insights {
            sections.push(Section::Insights(InsightsSection {
                top_patterns: insights.top_patterns.clone(),
                bottom_weaknesses: insights.bottom_weaknesses.clone(),
            }));
        }
        if let Some(creatives) = normalized.creatives {
            sections.push(Section::Creatives(CreativesSection::from(creatives)));
        }
        if let Some(recommendation) = normalized.recommendation {
            sections.push(Section::Recommendation(recommendation.to_string()));
        }

        Self {
            sections,
            generated_at: normalized.timestamp.map(str::to_string),
        }
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(Section::kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind() == kind)
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
