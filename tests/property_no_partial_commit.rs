use proptest::prelude::*;

use jobdag::dag::{GraphController, JobRegistry};

fn name(i: usize) -> String {
    format!("job_{i}")
}

fn controller(n: usize) -> GraphController {
    let mut registry = JobRegistry::new();
    for i in 0..n {
        registry.register(name(i), format!("jobs/{}.py", name(i)));
        registry.set_profit(&name(i), i as f64);
    }
    GraphController::new(registry)
}

proptest! {
    /// Any proposal either leaves the graph untouched (on rejection) or
    /// replaces exactly the proposed job's edge set (on commit). Never a
    /// partial graph.
    #[test]
    fn proposals_never_partially_commit(
        n in 2usize..8,
        seeds in proptest::collection::vec(any::<usize>(), 1..8),
        job_seed in any::<usize>(),
        target_seeds in proptest::collection::vec(any::<usize>(), 0..4),
    ) {
        let mut controller = controller(n);

        // Seed an existing graph: job i may depend on one lower-indexed job.
        // Acyclic by construction; exclusivity rejections are simply skipped,
        // so the seeded graph always satisfies both invariants.
        for (slot, seed) in seeds.iter().enumerate() {
            let i = slot % n;
            if i == 0 {
                continue;
            }
            let target = seed % i;
            let _ = controller.propose_dependencies(&name(i), &[name(target)]);
        }

        let before = controller.graph().clone();
        let job = name(job_seed % n);
        let targets: Vec<String> = target_seeds.iter().map(|t| name(t % n)).collect();

        match controller.propose_dependencies(&job, &targets) {
            Err(_) => {
                prop_assert_eq!(controller.graph(), &before);
            }
            Ok(()) => {
                // The committed set is the proposal, de-duplicated in order.
                let mut expected: Vec<String> = Vec::new();
                for target in &targets {
                    if !expected.contains(target) {
                        expected.push(target.clone());
                    }
                }
                prop_assert_eq!(controller.graph().targets_of(&job), expected.as_slice());

                // Every other job's edge set is untouched.
                let others: Vec<String> = before
                    .jobs()
                    .filter(|j| *j != job)
                    .map(|j| j.to_string())
                    .collect();
                for other in others {
                    prop_assert_eq!(
                        controller.graph().targets_of(&other),
                        before.targets_of(&other)
                    );
                }
            }
        }
    }
}
