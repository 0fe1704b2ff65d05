use crate::infra::parse_month;
use clap::Args;
use habit_eval::config::AppConfig;
use habit_eval::error::AppError;
use habit_eval::evaluation::HabitEvaluator;
use habit_eval::habit_log::HabitLogImporter;
use habit_eval::normalize::MonthKey;
use habit_eval::periods::{evaluate_periods, PeriodReport, StudentEvaluation};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Habit log CSV export to evaluate
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Month to report (YYYY-MM). Defaults to each student's latest month.
    #[arg(long, value_parser = parse_month)]
    pub(crate) month: Option<MonthKey>,
    /// Print the report as pretty JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { csv, month, json } = args;

    let config = AppConfig::load()?;
    let evaluator = HabitEvaluator::new(config.evaluation);
    let log = HabitLogImporter::from_path(&csv)?;
    let report = evaluate_periods(&evaluator, &log.entries, &log.directory, month.into());

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => return Err(AppError::Io(err.into())),
        }
    } else {
        print!("{}", render_report(&report, log.skipped_rows));
    }

    Ok(())
}

pub(crate) fn render_report(report: &PeriodReport, skipped_rows: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Habit evaluation report");
    match report.requested_period {
        Some(month) => {
            let _ = writeln!(out, "Period: {month}");
        }
        None => {
            let _ = writeln!(out, "Period: latest month per student");
        }
    }
    let months: Vec<String> = report
        .available_periods
        .iter()
        .map(|period| {
            if period.inferred {
                format!("{} (no data)", period.period.key)
            } else {
                format!("{} ({} entries)", period.period.key, period.entry_count)
            }
        })
        .collect();
    if !months.is_empty() {
        let _ = writeln!(out, "Available periods: {}", months.join(", "));
    }
    if skipped_rows > 0 {
        let _ = writeln!(out, "Skipped rows without a readable date: {skipped_rows}");
    }

    if report.results.is_empty() {
        let _ = writeln!(out, "\nNo entries found for the selected period.");
        return out;
    }

    for result in &report.results {
        render_student(&mut out, result);
    }
    out
}

fn render_student(out: &mut String, result: &StudentEvaluation) {
    let _ = writeln!(
        out,
        "\n{} ({}) | {} | {} entries",
        result.student_name, result.student_id, result.period.key, result.entry_count
    );
    for summary in &result.indicators {
        let _ = writeln!(
            out,
            "- {}: {} ({})",
            summary.label, summary.rating, summary.rating_label
        );
        let _ = writeln!(out, "    {}", summary.note);
    }

    let worship = &result.bundle.worship;
    if worship.total_days > 0 {
        let _ = writeln!(out, "  Worship components:");
        for component in &worship.components {
            let _ = writeln!(
                out,
                "    - {}: {} -> {}",
                component.label, component.value, component.score
            );
        }
    }

    let study = &result.bundle.study;
    if study.total_days > 0 {
        let _ = writeln!(out, "  Study components:");
        for component in &study.components {
            let _ = writeln!(
                out,
                "    - {}: {} -> {}",
                component.label, component.count, component.score
            );
        }
    }
}
