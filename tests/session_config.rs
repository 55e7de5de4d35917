use std::error::Error;
use std::io::Write;

use jobdag::build_graph;
use jobdag::config::load_and_validate;
use jobdag::errors::JobdagError;

type TestResult = Result<(), Box<dyn Error>>;

fn session_file(contents: &str) -> Result<tempfile::NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn loads_a_complete_session_with_defaults() -> TestResult {
    let file = session_file(
        r#"
[submit]
deadline = 5.0

[job.A]
file = "jobs/a.py"
profit = 10.0
needs = ["B"]

[job.B]
file = "jobs/b.py"
profit = 20.0
"#,
    )?;

    let session = load_and_validate(file.path())?;
    assert_eq!(session.submit.deadline, Some(5.0));
    // Endpoint falls back to the default optimizer route.
    assert!(session.submit.endpoint.ends_with("/process_jobs"));
    assert_eq!(session.job.len(), 2);
    assert_eq!(session.job["A"].needs, vec!["B".to_string()]);
    Ok(())
}

#[test]
fn empty_session_is_rejected() -> TestResult {
    let file = session_file("[submit]\ndeadline = 5.0\n")?;
    let err = load_and_validate(file.path()).unwrap_err();
    assert!(err.to_string().contains("at least one [job"));
    Ok(())
}

#[test]
fn negative_profit_is_rejected() -> TestResult {
    let file = session_file(
        r#"
[job.A]
file = "jobs/a.py"
profit = -1.0
"#,
    )?;
    let err = load_and_validate(file.path()).unwrap_err();
    assert!(err.to_string().contains("invalid profit"));
    Ok(())
}

#[test]
fn non_positive_deadline_is_rejected() -> TestResult {
    let file = session_file(
        r#"
[submit]
deadline = 0.0

[job.A]
file = "jobs/a.py"
"#,
    )?;
    let err = load_and_validate(file.path()).unwrap_err();
    assert!(err.to_string().contains("deadline"));
    Ok(())
}

#[test]
fn missing_file_path_errors_with_context() {
    let err = load_and_validate("definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("reading session file"));
}

#[test]
fn cyclic_needs_surface_through_the_controller() -> TestResult {
    let file = session_file(
        r#"
[job.A]
file = "jobs/a.py"
needs = ["B"]

[job.B]
file = "jobs/b.py"
needs = ["A"]
"#,
    )?;

    let session = load_and_validate(file.path())?;
    let err = build_graph(&session).unwrap_err();
    assert!(matches!(err, JobdagError::Proposal(_)));
    assert!(err.to_string().contains("cycle"));
    Ok(())
}

#[test]
fn doubly_claimed_target_surfaces_through_the_controller() -> TestResult {
    let file = session_file(
        r#"
[job.A]
file = "jobs/a.py"
needs = ["X"]

[job.B]
file = "jobs/b.py"
needs = ["X"]

[job.X]
file = "jobs/x.py"
"#,
    )?;

    let session = load_and_validate(file.path())?;
    let err = build_graph(&session).unwrap_err();
    assert!(err.to_string().contains("already a dependency"));
    Ok(())
}

#[test]
fn valid_session_builds_the_expected_graph() -> TestResult {
    let file = session_file(
        r#"
[job.A]
file = "jobs/a.py"
profit = 10.0
needs = ["B"]

[job.B]
file = "jobs/b.py"
profit = 20.0
"#,
    )?;

    let session = load_and_validate(file.path())?;
    let controller = build_graph(&session)?;
    assert_eq!(controller.graph().targets_of("A"), ["B".to_string()]);
    assert!(controller.graph().targets_of("B").is_empty());
    // B is claimed by A, so it is off limits to everyone but A.
    assert!(controller.forbidden_targets("A").is_empty());
    assert!(controller.forbidden_targets("B").contains("B"));
    Ok(())
}
