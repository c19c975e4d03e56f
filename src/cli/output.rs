//! Output formatting utilities

use crate::application::ConversionReport;

/// Summary printed at the end of a conversion
pub fn format_report(report: &ConversionReport) -> String {
    let mut output = format!("Complete: {} entries processed.\n", report.processed());

    if report.renamed_media > 0 {
        output.push_str(&format!("Renamed {} media files.\n", report.renamed_media));
    }
    if report.fallbacks > 0 {
        output.push_str(&format!(
            "Warning: {} entries written without body text (see log).\n",
            report.fallbacks
        ));
    }
    if report.unresolved > 0 {
        output.push_str(&format!(
            "Warning: {} references could not be resolved (see log).\n",
            report.unresolved
        ));
    }

    output
}
