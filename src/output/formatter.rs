//! Output formatters for recommendation reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::RecommendationReport;
use crate::processing::ranker::ScoredOffer;
use crate::processing::similarity::MatchTier;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for formatting recommendation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
}

/// Console formatter with colored match tiers
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn tier_color(tier: MatchTier) -> Color {
    match tier {
        MatchTier::High => Color::Green,
        MatchTier::Medium => Color::Yellow,
        MatchTier::Low => Color::Red,
    }
}

fn percentage(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_score_bar(&self, score: f64) -> String {
        let filled = (score.clamp(0.0, 1.0) * 20.0).round() as usize;
        let bar = format!("{}{}", "■".repeat(filled), "·".repeat(20 - filled));
        self.colorize(&bar, tier_color(MatchTier::from_score(score)))
    }

    fn format_offer(&self, rank: usize, scored: &ScoredOffer) -> String {
        let offer = &scored.offer;
        let tier = scored.tier();
        let mut output = format!(
            "{:>3}. {} {} [{}] {}\n",
            rank,
            self.format_score_bar(scored.score),
            self.colorize(&percentage(scored.score), tier_color(tier)),
            tier,
            offer.name
        );
        output.push_str(&format!(
            "     {} | {} | {} | {}\n",
            offer.metadata.company, offer.metadata.location, offer.metadata.job_type, offer.metadata.salary
        ));
        output.push_str(&format!("     {}\n", offer.link));

        if self.detailed {
            if !scored.matched_terms.is_empty() {
                output.push_str(&format!("     Matched terms: {}\n", scored.matched_terms.join(", ")));
            }
            output.push_str(&format!("     {}\n", offer.metadata.description));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let summary = &report.result.summary;
        let mut output = String::new();

        output.push_str(&self.format_header("JOB RECOMMENDATIONS"));
        output.push_str(&format!(
            "Generated: {} | Resume: {} | Processing time: {}ms\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.resume,
            report.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary"));
        output.push_str(&format!("  • Total offers: {}\n", summary.total_jobs));
        output.push_str(&format!(
            "  • Matched offers (> {}): {}\n",
            percentage(report.threshold),
            summary.matched_jobs
        ));
        output.push_str(&format!("  • Average similarity: {}\n", percentage(summary.average_score)));
        output.push_str(&format!("  • Top score: {}\n", percentage(summary.max_score)));
        if self.detailed {
            output.push_str(&format!("  • Vocabulary size: {} terms\n", report.vocabulary_size));
        }

        output.push_str(&self.format_header("Recommendations"));
        if report.result.recommendations.is_empty() {
            output.push_str("  No job offers to show.\n");
        } else if report.result.fallback {
            output.push_str(&self.colorize(
                &format!(
                    "  No offer cleared the threshold; showing the top {} offers by score.\n",
                    report.result.recommendations.len()
                ),
                Color::Yellow,
            ));
            output.push('\n');
        }

        for (index, scored) in report.result.recommendations.iter().enumerate() {
            output.push_str(&self.format_offer(index + 1, scored));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Percent-encode characters that end a link target or a table cell
    fn escape_link(link: &str) -> String {
        let mut escaped = String::with_capacity(link.len());
        for c in link.trim().chars() {
            match c {
                ' ' => escaped.push_str("%20"),
                '(' => escaped.push_str("%28"),
                ')' => escaped.push_str("%29"),
                '<' => escaped.push_str("%3C"),
                '>' => escaped.push_str("%3E"),
                '|' => escaped.push_str("%7C"),
                '\n' | '\r' => {}
                c => escaped.push(c),
            }
        }
        escaped
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let summary = &report.result.summary;
        let mut output = String::from("# Job Recommendations\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "_Generated {} for `{}`_\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.resume
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str("| Total offers | Matched | Average | Top score |\n");
        output.push_str("|---:|---:|---:|---:|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n\n",
            summary.total_jobs,
            summary.matched_jobs,
            percentage(summary.average_score),
            percentage(summary.max_score)
        ));

        output.push_str("## Recommendations\n\n");
        if report.result.fallback {
            output.push_str(&format!(
                "> No offer scored above {}; showing the top offers by score.\n\n",
                percentage(report.threshold)
            ));
        }

        if report.result.recommendations.is_empty() {
            output.push_str("_No job offers to show._\n");
            return Ok(output);
        }

        output.push_str("| # | Offer | Company | Location | Type | Salary | Score | Match |\n");
        output.push_str("|---:|---|---|---|---|---|---:|---|\n");
        for (index, scored) in report.result.recommendations.iter().enumerate() {
            let offer = &scored.offer;
            output.push_str(&format!(
                "| {} | [{}]({}) | {} | {} | {} | {} | {} | {} |\n",
                index + 1,
                Self::escape_cell(&offer.name),
                Self::escape_link(&offer.link),
                Self::escape_cell(&offer.metadata.company),
                Self::escape_cell(&offer.metadata.location),
                Self::escape_cell(&offer.metadata.job_type),
                Self::escape_cell(&offer.metadata.salary),
                percentage(scored.score),
                scored.tier()
            ));
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &RecommendationReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Target file for `--save`; a directory receives a timestamped report name
pub fn resolve_save_path(target: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, resume_name, true))
    } else {
        target.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_recommendations{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_recommendations{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_recommendations{}.md", base_name, timestamp_suffix),
    }
}
