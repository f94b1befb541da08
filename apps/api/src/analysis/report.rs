//! Plain-text analysis report offered as a download.

use chrono::NaiveDateTime;

use crate::analysis::result::AnalysisResult;

/// Assembles the downloadable report: role, score, missing skills and numbered suggestions.
pub fn build_report(job_title: &str, analysis: &AnalysisResult) -> String {
    let mut report = String::from("Resume Analysis Report\n\n");
    report.push_str(&format!("Job Title: {job_title}\n"));
    report.push_str(&format!("ATS Score: {}/100\n\n", analysis.ats_score));

    report.push_str("Missing Technical Skills:\n");
    report.push_str(&bulleted(&analysis.missing_technical_skills));
    report.push_str("\n\n");

    report.push_str("Missing Soft Skills:\n");
    report.push_str(&bulleted(&analysis.missing_soft_skills));
    report.push_str("\n\n");

    report.push_str("Improvement Suggestions:\n");
    let numbered: Vec<String> = analysis
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {s}", i + 1))
        .collect();
    report.push_str(&numbered.join("\n"));

    report
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `resume_analysis_<YYYYMMDD_HHMMSS>.txt`
pub fn report_file_name(at: NaiveDateTime) -> String {
    format!("resume_analysis_{}.txt", at.format("%Y%m%d_%H%M%S"))
}
