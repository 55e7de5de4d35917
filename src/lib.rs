// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod submit;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::SessionFile;
use crate::dag::{GraphController, JobRegistry};
use crate::errors::Result;
use crate::submit::{build_request, OptimizerClient, SchedulingRequest, SchedulingResult};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - session loading + structural validation
/// - graph construction through the mutation controller
/// - request assembly
/// - submission to the optimizer and result rendering
pub async fn run(args: CliArgs) -> Result<()> {
    let session = load_and_validate(&args.session)?;
    info!(jobs = session.job.len(), "session loaded");

    let controller = build_graph(&session)?;

    if args.dry_run {
        print_dry_run(&session, &controller);
        return Ok(());
    }

    let deadline = args.deadline.or(session.submit.deadline);
    let request = build_request(controller.registry(), controller.graph(), deadline)?;

    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| session.submit.endpoint.clone());
    let client = OptimizerClient::new(endpoint)?;

    let result = client.submit(&request).await?;
    print_result(&request, &result);
    Ok(())
}

/// Build the dependency graph by replaying each job's `needs` list through
/// the mutation controller.
///
/// Session files pass the exact same guards as interactive edits, so a
/// rejected assignment surfaces with its precise kind (self-reference,
/// unknown job, already claimed, cyclic) and the job it belongs to.
pub fn build_graph(session: &SessionFile) -> Result<GraphController> {
    let mut registry = JobRegistry::new();
    for (name, job) in session.job.iter() {
        registry.register(name.clone(), &job.file);
    }

    // Profits stay editable through the controller until assembly.
    let mut controller = GraphController::new(registry);
    for (name, job) in session.job.iter() {
        if let Some(profit) = job.profit {
            controller.set_profit(name, profit);
        }
    }

    for (name, job) in session.job.iter() {
        if job.needs.is_empty() {
            continue;
        }
        controller.propose_dependencies(name, &job.needs)?;
        debug!(
            job = %name,
            forbidden = ?controller.forbidden_targets(name),
            "dependency set committed from session"
        );
    }

    Ok(controller)
}

/// Simple dry-run output: print jobs, profits, dependencies and deadline.
fn print_dry_run(session: &SessionFile, controller: &GraphController) {
    println!("jobdag dry-run");
    match session.submit.deadline {
        Some(deadline) => println!("  deadline: {deadline}s"),
        None => println!("  deadline: (not set)"),
    }
    println!("  endpoint: {}", session.submit.endpoint);
    println!();

    println!("jobs ({}):", controller.registry().len());
    for job in controller.registry().jobs() {
        println!("  - {}", job.name);
        println!("      file: {}", job.artifact.display());
        match job.profit {
            Some(profit) => println!("      profit: {profit}"),
            None => println!("      profit: (not set)"),
        }
        let needs = controller.graph().targets_of(&job.name);
        if !needs.is_empty() {
            println!("      needs: {needs:?}");
        }
    }

    debug!("dry-run complete (nothing submitted)");
}

/// Render the optimizer's answer.
fn print_result(request: &SchedulingRequest, result: &SchedulingResult) {
    if result.is_empty() {
        println!(
            "no valid sequence within the {}s deadline",
            request.deadline
        );
    } else {
        println!("optimal job order: {}", result.sequence.join(", "));
    }
    println!("total profit: {}", result.max_profit);
    println!("time used: {} ms", result.used_time_ms);

    if let Some(chains) = &result.chains {
        println!("dependency chains:");
        for chain in chains {
            println!("  {}", chain.join(" -> "));
        }
    }
}
