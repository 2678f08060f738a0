use crate::analysis::{AnalysisReport, ContentSizeStats, KeyedCount};
use crate::store::ParseSummary;
use owo_colors::OwoColorize;
use std::fmt::Display;

const BAR_WIDTH: usize = 20;

/// Plain-text rendering of a full report.
pub fn render_report(report: &AnalysisReport, color: bool) -> String {
    let mut out = render_summary(&report.summary, color);

    out.push_str(&heading("Content size", color));
    match &report.content_size {
        Some(stats) => push_content_size(&mut out, stats),
        None => out.push_str("  <no records>\n"),
    }

    out.push_str(&heading("Response codes", color));
    push_bars(&mut out, &report.response_codes.counts);

    out.push_str(&heading("Hosts", color));
    out.push_str(&format!("  unique: {}\n", report.unique_hosts));
    out.push_str(&format!(
        "  more than 10 requests: {}\n",
        report.frequent_hosts.total
    ));
    for host in &report.frequent_hosts.sample {
        out.push_str(&format!("    {host}\n"));
    }

    out.push_str(&heading(
        &format!("Top endpoints ({} distinct)", report.endpoints.distinct),
        color,
    ));
    push_ranked(&mut out, &report.endpoints.top);

    out.push_str(&heading(
        &format!(
            "Top error endpoints ({} distinct)",
            report.error_endpoints.distinct
        ),
        color,
    ));
    push_ranked(&mut out, &report.error_endpoints.top);

    out.push_str(&heading("Unique hosts per hour", color));
    push_bars(&mut out, &report.unique_hosts_per_hour);

    out.push_str(&heading("Average requests per host per hour", color));
    push_bars(&mut out, &report.avg_hourly_requests_per_host);

    let not_found = &report.not_found;
    out.push_str(&heading(
        &format!("404 responses ({})", not_found.count),
        color,
    ));
    if !not_found.endpoints.is_empty() {
        out.push_str("  endpoints:\n");
        for endpoint in &not_found.endpoints {
            out.push_str(&format!("    {endpoint}\n"));
        }
        out.push_str("  top:\n");
        push_ranked(&mut out, &not_found.top_endpoints);
        out.push_str("  per hour:\n");
        push_bars(&mut out, &not_found.hourly);
    }

    out
}

/// Line accounting, then the failure sample when anything failed.
pub fn render_summary(summary: &ParseSummary, color: bool) -> String {
    let mut out = format!("{summary}\n");

    if summary.has_failures() {
        let title = format!(
            "Invalid lines (showing {} of {})",
            summary.failed_lines.len(),
            summary.failed
        );
        out.push_str(&heading(&title, color));
        for failure in &summary.failed_lines {
            let line = if color {
                failure.line.yellow().to_string()
            } else {
                failure.line.clone()
            };
            out.push_str(&format!("  {line}\n    ({})\n", failure.reason));
        }
    }

    out
}

fn heading(title: &str, color: bool) -> String {
    if color {
        format!("\n{}\n", title.bold())
    } else {
        format!("\n{title}\n{}\n", "=".repeat(title.chars().count()))
    }
}

fn push_content_size(out: &mut String, stats: &ContentSizeStats) {
    out.push_str(&format!(
        "  requests: {} | avg: {}B | min: {}B | max: {}B\n",
        stats.count, stats.average, stats.min, stats.max
    ));
    out.push_str(&format!(
        "  p50 ≤ {}B | p95 ≤ {}B\n",
        stats.p50, stats.p95
    ));
    push_bars(out, &stats.distribution);
}

/// One row per entry with a bar proportional to its share of the total.
fn push_bars<K: Display>(out: &mut String, rows: &[KeyedCount<K>]) {
    let total: u64 = rows.iter().map(|r| r.count).sum();
    if total == 0 {
        out.push_str("  <no samples>\n");
        return;
    }

    for row in rows {
        let pct = (row.count as f64 / total as f64) * 100.0;
        let bars = if row.count == 0 {
            0
        } else {
            ((pct / 100.0 * BAR_WIDTH as f64).floor() as usize).max(1)
        };
        out.push_str(&format!(
            "  {:<8} {:<width$} {:>5.1}% {:>8}\n",
            row.key.to_string(),
            "█".repeat(bars),
            pct,
            row.count,
            width = BAR_WIDTH
        ));
    }
}

fn push_ranked<K: Display>(out: &mut String, rows: &[KeyedCount<K>]) {
    if rows.is_empty() {
        out.push_str("  <none>\n");
        return;
    }

    for row in rows {
        out.push_str(&format!("  {:>8}  {}\n", row.count, row.key));
    }
}
