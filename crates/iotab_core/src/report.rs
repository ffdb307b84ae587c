//! Final report aggregation and export.
//!
//! Collects the summary, performance, impact, finding, and recommendation
//! data shown on the final screen into one serializable document and writes
//! it as JSON. Aggregation only; nothing here derives new numbers.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::dataset::{
    self, PerformanceRecord, SectoralImpact, SummaryStat,
};
use crate::error::ReportError;

/// Severity tag for a key finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    High,
    Medium,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyFinding {
    pub title: &'static str,
    pub description: &'static str,
    pub status: FindingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRecommendation {
    pub priority: &'static str,
    pub recommendation: &'static str,
    pub impact: &'static str,
    pub difficulty: &'static str,
}

pub fn key_findings() -> Vec<KeyFinding> {
    vec![
        KeyFinding {
            title: "Sektor Industri Paling Berpengaruh",
            description: "Memiliki output multiplier tertinggi (1.97) dan dampak shock terbesar",
            status: FindingStatus::High,
        },
        KeyFinding {
            title: "Keterkaitan Ekonomi Kuat",
            description: "Backward linkage rata-rata 1.35, menunjukkan interdependensi yang baik",
            status: FindingStatus::Medium,
        },
        KeyFinding {
            title: "Kerentanan Terhadap Shock",
            description: "Sektor industri rentan dengan potensi dampak negatif hingga 28.3%",
            status: FindingStatus::Warning,
        },
    ]
}

pub fn policy_recommendations() -> Vec<PolicyRecommendation> {
    vec![
        PolicyRecommendation {
            priority: "Tinggi",
            recommendation: "Diversifikasi struktur ekonomi untuk mengurangi ketergantungan pada sektor industri",
            impact: "Jangka Panjang",
            difficulty: "Tinggi",
        },
        PolicyRecommendation {
            priority: "Tinggi",
            recommendation: "Strengthening backward linkage sektor pertanian untuk meningkatkan multiplier effect",
            impact: "Jangka Menengah",
            difficulty: "Sedang",
        },
        PolicyRecommendation {
            priority: "Sedang",
            recommendation: "Pengembangan sektor jasa untuk meningkatkan employment multiplier",
            impact: "Jangka Menengah",
            difficulty: "Sedang",
        },
        PolicyRecommendation {
            priority: "Sedang",
            recommendation: "Implementasi early warning system untuk mendeteksi shock ekonomi",
            impact: "Jangka Pendek",
            difficulty: "Rendah",
        },
    ]
}

pub fn conclusion() -> Vec<&'static str> {
    vec![
        "Analisis input-output menunjukkan bahwa struktur ekonomi memiliki karakteristik yang \
         khas dengan sektor industri sebagai penggerak utama pertumbuhan ekonomi. Efek \
         multiplier yang tinggi pada sektor industri (1.97) mengindikasikan bahwa investasi \
         pada sektor ini akan memberikan dampak yang signifikan terhadap perekonomian secara \
         keseluruhan.",
        "Namun, ketergantungan yang tinggi pada sektor industri juga menimbulkan kerentanan \
         terhadap shock ekonomi. Hasil analisis shock menunjukkan bahwa gangguan pada sektor \
         industri dapat berdampak negatif hingga 28.3% terhadap output total.",
        "Untuk meningkatkan ketahanan ekonomi, diperlukan diversifikasi struktur ekonomi dan \
         penguatan keterkaitan antar sektor, terutama pada sektor pertanian dan jasa yang \
         memiliki potensi employment multiplier yang tinggi.",
    ]
}

/// The exported analysis report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub generated: jiff::civil::Date,
    pub summary: Vec<SummaryStat>,
    pub performance: Vec<PerformanceRecord>,
    pub sectoral_impacts: Vec<SectoralImpact>,
    pub findings: Vec<KeyFinding>,
    pub recommendations: Vec<PolicyRecommendation>,
    pub conclusion: Vec<&'static str>,
}

impl Report {
    /// Assemble the report from the sample datasets, stamped with `generated`.
    pub fn assemble(generated: jiff::civil::Date) -> Self {
        Self {
            title: "Laporan Analisis Input-Output",
            generated,
            summary: dataset::summary_stats(),
            performance: dataset::performance_records(),
            sectoral_impacts: dataset::sectoral_impacts(),
            findings: key_findings(),
            recommendations: policy_recommendations(),
            conclusion: conclusion(),
        }
    }

    /// Default export file name, e.g. `laporan-analisis-2026-08-31.json`.
    pub fn file_name(&self) -> String {
        format!("laporan-analisis-{}.json", self.generated)
    }

    /// Write the report as pretty JSON into `dir`, returning the file path.
    pub fn write_json(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(path)
    }
}
