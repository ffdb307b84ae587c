//! Sample datasets backing the guided analysis flow.
//!
//! These are the curated demonstration figures shown by every screen. The
//! workbench demonstrates the analysis flow; it does not derive numbers
//! from an uploaded table.

use serde::Serialize;

/// The four economy sectors used throughout the sample data.
pub const SECTORS: [&str; 4] = ["Pertanian", "Industri", "Jasa", "Perdagangan"];

/// Headline figures for the initial-analysis stat cards.
pub const TOTAL_SECTORS: usize = 4;
pub const TOTAL_OUTPUT_LABEL: &str = "545K";
pub const AVG_MULTIPLIER: f64 = 1.69;
pub const LINKAGE_INDEX: f64 = 0.85;

/// Output and share of total economy for one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorOutput {
    pub sector: &'static str,
    /// Contribution to total output, in percent.
    pub share: f64,
    pub output: f64,
}

/// Direct, indirect, and total multiplier effect for one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiplierRecord {
    pub sector: &'static str,
    pub direct: f64,
    pub indirect: f64,
    pub total: f64,
}

/// Full multiplier breakdown used on the multiplier-analysis screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiplierDetail {
    pub sector: &'static str,
    pub output: f64,
    pub income: f64,
    pub employment: f64,
    pub backward: f64,
    pub forward: f64,
}

/// Backward/forward linkage indices for one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkageRecord {
    pub sector: &'static str,
    pub backward: f64,
    pub forward: f64,
    pub total: f64,
}

/// One axis of the Pertanian-vs-Industri multidimensional comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarRecord {
    pub subject: &'static str,
    pub pertanian: f64,
    pub industri: f64,
    pub full_mark: f64,
}

/// Per-sector shock impact for one simulated period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShockPath {
    pub period: &'static str,
    pub pertanian: f64,
    pub industri: f64,
    pub jasa: f64,
    pub perdagangan: f64,
}

/// Cumulative direct vs indirect shock impact for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeImpact {
    pub period: &'static str,
    pub total: f64,
    pub direct: f64,
    pub indirect: f64,
}

/// Final-period shock impact breakdown for one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectoralImpact {
    pub sector: &'static str,
    pub direct: f64,
    pub indirect: f64,
    pub total: f64,
}

/// Sector performance comparison used by the final report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRecord {
    pub sector: &'static str,
    pub multiplier: f64,
    pub linkage: f64,
    pub resilience: f64,
}

/// One executive-summary metric with its change badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStat {
    pub metric: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub fn sector_outputs() -> Vec<SectorOutput> {
    vec![
        SectorOutput { sector: "Pertanian", share: 25.5, output: 125_000.0 },
        SectorOutput { sector: "Industri", share: 35.2, output: 180_000.0 },
        SectorOutput { sector: "Jasa", share: 28.8, output: 155_000.0 },
        SectorOutput { sector: "Perdagangan", share: 10.5, output: 85_000.0 },
    ]
}

pub fn multiplier_effects() -> Vec<MultiplierRecord> {
    vec![
        MultiplierRecord { sector: "Pertanian", direct: 1.25, indirect: 0.35, total: 1.60 },
        MultiplierRecord { sector: "Industri", direct: 1.45, indirect: 0.52, total: 1.97 },
        MultiplierRecord { sector: "Jasa", direct: 1.35, indirect: 0.41, total: 1.76 },
        MultiplierRecord { sector: "Perdagangan", direct: 1.15, indirect: 0.28, total: 1.43 },
    ]
}

pub fn multiplier_details() -> Vec<MultiplierDetail> {
    vec![
        MultiplierDetail {
            sector: "Pertanian",
            output: 1.60,
            income: 1.35,
            employment: 1.85,
            backward: 1.25,
            forward: 1.15,
        },
        MultiplierDetail {
            sector: "Industri",
            output: 1.97,
            income: 1.52,
            employment: 1.45,
            backward: 1.75,
            forward: 1.65,
        },
        MultiplierDetail {
            sector: "Jasa",
            output: 1.76,
            income: 1.41,
            employment: 1.92,
            backward: 1.55,
            forward: 1.35,
        },
        MultiplierDetail {
            sector: "Perdagangan",
            output: 1.43,
            income: 1.28,
            employment: 1.68,
            backward: 1.35,
            forward: 1.25,
        },
    ]
}

pub fn linkages() -> Vec<LinkageRecord> {
    vec![
        LinkageRecord { sector: "Pertanian", backward: 0.85, forward: 0.75, total: 1.60 },
        LinkageRecord { sector: "Industri", backward: 1.25, forward: 1.15, total: 2.40 },
        LinkageRecord { sector: "Jasa", backward: 1.05, forward: 0.95, total: 2.00 },
        LinkageRecord { sector: "Perdagangan", backward: 0.95, forward: 0.85, total: 1.80 },
    ]
}

pub fn radar_comparison() -> Vec<RadarRecord> {
    vec![
        RadarRecord { subject: "Output", pertanian: 1.60, industri: 1.97, full_mark: 2.5 },
        RadarRecord { subject: "Income", pertanian: 1.35, industri: 1.52, full_mark: 2.5 },
        RadarRecord { subject: "Employment", pertanian: 1.85, industri: 1.45, full_mark: 2.5 },
        RadarRecord { subject: "Backward", pertanian: 1.25, industri: 1.75, full_mark: 2.5 },
        RadarRecord { subject: "Forward", pertanian: 1.15, industri: 1.65, full_mark: 2.5 },
    ]
}

pub fn shock_paths() -> Vec<ShockPath> {
    vec![
        ShockPath { period: "Year 1", pertanian: 2.5, industri: 8.2, jasa: 4.1, perdagangan: 3.8 },
        ShockPath { period: "Year 2", pertanian: 3.2, industri: 12.5, jasa: 6.8, perdagangan: 5.4 },
        ShockPath { period: "Year 3", pertanian: 4.1, industri: 15.8, jasa: 8.9, perdagangan: 7.2 },
        ShockPath { period: "Year 4", pertanian: 4.8, industri: 18.2, jasa: 10.5, perdagangan: 8.6 },
        ShockPath { period: "Year 5", pertanian: 5.2, industri: 19.8, jasa: 11.8, perdagangan: 9.4 },
    ]
}

pub fn cumulative_impacts() -> Vec<CumulativeImpact> {
    vec![
        CumulativeImpact { period: "Year 1", total: 18.6, direct: 8.2, indirect: 10.4 },
        CumulativeImpact { period: "Year 2", total: 27.9, direct: 12.5, indirect: 15.4 },
        CumulativeImpact { period: "Year 3", total: 36.0, direct: 15.8, indirect: 20.2 },
        CumulativeImpact { period: "Year 4", total: 42.1, direct: 18.2, indirect: 23.9 },
        CumulativeImpact { period: "Year 5", total: 46.2, direct: 19.8, indirect: 26.4 },
    ]
}

pub fn sectoral_impacts() -> Vec<SectoralImpact> {
    vec![
        SectoralImpact { sector: "Pertanian", direct: 1.2, indirect: 4.0, total: 5.2 },
        SectoralImpact { sector: "Industri", direct: 19.8, indirect: 8.5, total: 28.3 },
        SectoralImpact { sector: "Jasa", direct: 2.8, indirect: 9.0, total: 11.8 },
        SectoralImpact { sector: "Perdagangan", direct: 1.5, indirect: 7.9, total: 9.4 },
    ]
}

pub fn performance_records() -> Vec<PerformanceRecord> {
    vec![
        PerformanceRecord { sector: "Pertanian", multiplier: 1.60, linkage: 1.60, resilience: 0.85 },
        PerformanceRecord { sector: "Industri", multiplier: 1.97, linkage: 2.40, resilience: 0.65 },
        PerformanceRecord { sector: "Jasa", multiplier: 1.76, linkage: 2.00, resilience: 0.78 },
        PerformanceRecord { sector: "Perdagangan", multiplier: 1.43, linkage: 1.80, resilience: 0.82 },
    ]
}

pub fn summary_stats() -> Vec<SummaryStat> {
    vec![
        SummaryStat { metric: "Total Sektor", value: "4", change: "+0%" },
        SummaryStat { metric: "Avg Output Multiplier", value: "1.69", change: "+12%" },
        SummaryStat { metric: "Avg Employment Multiplier", value: "1.73", change: "+8%" },
        SummaryStat { metric: "Economic Resilience Index", value: "0.75", change: "-5%" },
    ]
}
