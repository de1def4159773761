use crate::types::report::ScoreReport;
use crate::types::trait_type::DiscType;

pub fn to_markdown(report: &ScoreReport) -> String {
    let results = &report.results;
    let primary = report.profile;

    let mut output = String::new();
    match &report.user_name {
        Some(user) => output.push_str(&format!("# DISC Result: {user}\n\n")),
        None => output.push_str("# DISC Result\n\n"),
    }
    if let Some(completed_at) = report.completed_at {
        output.push_str(&format!("Completed: {}\n\n", completed_at.to_rfc3339()));
    }

    output.push_str("## Primary Type\n\n");
    output.push_str(&format!(
        "**{} ({})** - {} ({}%)\n\n{}\n\n",
        primary.name,
        results.primary_type,
        primary.subtitle,
        results.percentages[results.primary_type],
        primary.summary
    ));
    output.push_str("Strengths:\n");
    for strength in primary.strengths {
        output.push_str(&format!("- {strength}\n"));
    }
    output.push_str("\nDevelopment areas:\n");
    for area in primary.development_areas {
        output.push_str(&format!("- {area}\n"));
    }

    output.push_str("\n## Scores\n\n");
    output.push_str("| Type | Score | Percent | Most like | Least like |\n");
    output.push_str("|------|------:|--------:|----------:|-----------:|\n");
    for ty in DiscType::ALL {
        output.push_str(&format!(
            "| {} {} | {} | {}% | {} | {} |\n",
            ty,
            ty.name(),
            results.scores[ty],
            results.percentages[ty],
            report.statistics.most_like[ty],
            report.statistics.least_like[ty]
        ));
    }

    output.push_str(&format!(
        "\nAnswered {} of {} questions.\n",
        report.statistics.answered_questions, report.statistics.total_questions
    ));
    output
}
