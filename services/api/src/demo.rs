use crate::cli::{BatchArgs, ScoreArgs};
use crate::infra::InMemoryDecisionPublisher;
use chrono::Local;
use clap::Args;
use credit_ai::config::AppConfig;
use credit_ai::error::AppError;
use credit_ai::scoring::{
    BatchProfileImporter, CreditHistory, Decision, DecisionView, EvaluationEngine,
    EvaluationOutcome, FormulaVersion, ProfileGuard, ScoreRequest, ScoringService,
    ValidationReport,
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Monthly income in dollars (200-5000)
    #[arg(long, default_value_t = 1200)]
    pub(crate) income: i64,
    /// Total outstanding debt in dollars (0-20000)
    #[arg(long, default_value_t = 500)]
    pub(crate) debt: i64,
    /// Applicant age in years (18-70)
    #[arg(long, default_value_t = 25)]
    pub(crate) age: i64,
    /// Credit history band: no_history, good, bad, or excellent
    #[arg(long, value_parser = crate::infra::parse_history, default_value = "no_history")]
    pub(crate) history: CreditHistory,
    /// Formula release to apply (defaults to the configured release)
    #[arg(long, value_parser = crate::infra::parse_formula_version)]
    pub(crate) formula_version: Option<FormulaVersion>,
    /// Skip the cosmetic optimization preview between phases
    #[arg(long)]
    pub(crate) no_delay: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let publisher = Arc::new(InMemoryDecisionPublisher::default());
    let service = ScoringService::new(publisher, config.scoring.default_formula);

    let request = ScoreRequest {
        monthly_income: args.income,
        total_debt: args.debt,
        age: args.age,
        credit_history: args.history,
        formula_version: args.formula_version,
    };

    let outcome = service.evaluate(&request)?;
    let view = DecisionView::from_outcome(&outcome);

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("decision view unavailable: {err}"),
        }
        return Ok(());
    }

    render_outcome(&outcome, &view);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let publisher = Arc::new(InMemoryDecisionPublisher::default());
    let service = ScoringService::new(publisher, config.scoring.default_formula);

    let requests = BatchProfileImporter::from_path(&args.csv, args.formula_version)?;
    let batch = service.evaluate_batch(&requests);

    println!("Batch scoring sweep ({} profiles)", batch.total);
    for row in &batch.rows {
        match &row.outcome {
            Ok(outcome) => println!(
                "- line {}: {} (raw score {:.2}, {})",
                row.line,
                outcome.decision.label(),
                outcome.raw_score,
                outcome.formula_version
            ),
            Err(error) => println!("- line {}: skipped ({error})", row.line),
        }
    }
    println!(
        "Totals: {} approved | {} rejected | {} invalid",
        batch.approved, batch.rejected, batch.invalid
    );

    Ok(())
}

pub(crate) fn run_report() -> Result<(), AppError> {
    render_validation_report(&ValidationReport::standard());
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let version = args.formula_version.unwrap_or(config.scoring.default_formula);
    let today = Local::now().date_naive();

    println!("Hybrid credit scoring demo ({today})");
    println!(
        "Profile: income {} | debt {} | age {} | history {}",
        args.income,
        args.debt,
        args.age,
        args.history.label()
    );

    if !args.no_delay && !cosmetic_optimization_preview().await {
        return Ok(());
    }

    let publisher = Arc::new(InMemoryDecisionPublisher::default());
    let service = ScoringService::new(publisher.clone(), version);

    let request = ScoreRequest {
        monthly_income: args.income,
        total_debt: args.debt,
        age: args.age,
        credit_history: args.history,
        formula_version: Some(version),
    };

    let outcome = match service.evaluate(&request) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Request rejected: {err}");
            return Ok(());
        }
    };

    println!("\nDecision under {version}");
    let view = DecisionView::from_outcome(&outcome);
    render_outcome(&outcome, &view);

    render_version_comparison(&request);

    let events = publisher.events();
    if events.is_empty() {
        println!("\nExternal alerts: none dispatched");
    } else {
        println!("\nExternal alerts:");
        for alert in events {
            println!(
                "  - template={} raw_score={:.2} ({})",
                alert.template, alert.raw_score, alert.formula_version
            );
        }
    }

    println!();
    render_validation_report(&ValidationReport::standard());
    Ok(())
}

/// Cosmetic stand-in for the retired optimization animation. Purely a
/// presentation pause: the evaluator never waits on it, and ctrl-c skips it.
/// Returns false when the user cancelled the run.
async fn cosmetic_optimization_preview() -> bool {
    println!("\nSegmentation preview");
    for generation in (0..=80).step_by(20) {
        let pause = tokio::time::sleep(Duration::from_millis(120));
        tokio::select! {
            _ = pause => {
                println!("  Generation {generation}: refining segment centroids...");
            }
            _ = tokio::signal::ctrl_c() => {
                println!("  Preview cancelled.");
                return false;
            }
        }
    }
    println!("  Convergence reached. Centroids frozen for this session.");
    true
}

fn render_outcome(outcome: &EvaluationOutcome, view: &DecisionView) {
    match outcome.decision {
        Decision::Approved => println!("  {}", view.banner),
        Decision::Rejected => {
            println!("  {}", view.banner);
            if let Some(caption) = &view.caption {
                println!("  {caption}");
            }
        }
    }
    println!(
        "  Simulated FICO: {} | {}",
        view.simulated_fico_label,
        outcome.risk_tier.label()
    );
    println!(
        "  Raw score {:.2} under {}",
        outcome.raw_score, outcome.formula_version
    );
    println!("  Score components:");
    for component in &outcome.components {
        println!(
            "    - {:?}: {:.2} ({})",
            component.factor, component.amount, component.notes
        );
    }
}

fn render_version_comparison(request: &ScoreRequest) {
    let guard = ProfileGuard::default();
    let profile = match guard.profile_from_request(request) {
        Ok(profile) => profile,
        Err(_) => return,
    };

    println!("\nRelease comparison");
    for version in FormulaVersion::ALL {
        let outcome = EvaluationEngine::new(version).score(&profile);
        println!(
            "  - {}: raw score {:.2} -> {}",
            version,
            outcome.raw_score,
            outcome.decision.label()
        );
    }
}

fn render_validation_report(report: &ValidationReport) {
    println!("Validation results (illustrative figures)");
    for entry in &report.entries {
        println!("  - {}: {:.1}%", entry.model, entry.accuracy_pct);
    }

    let curve = report
        .accuracy_curve
        .iter()
        .map(|point| format!("{point:.2}"))
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("  Accuracy curve: {curve}");

    let card = &report.model_card;
    let layers = card
        .hidden_layers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("  Model card: {} | hidden layers [{}]", card.architecture, layers);
    println!(
        "  Optimizer {} (lr={}) | loss {} | activations {}",
        card.optimizer,
        card.learning_rate,
        card.loss_function,
        card.activations.join(", ")
    );
}
