use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::scenarios::{CheckContext, Scenario};

/// Failures beyond this many are counted but not kept.
const MAX_RECORDED_FAILURES: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: Scenario,
        ctx: &CheckContext,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.key().bright_white()
                    );
                }
                Self::run_single(scenario, ctx, seed, iterations)
            })
            .collect()
    }

    fn run_single(
        scenario: Scenario,
        ctx: &CheckContext,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failed = 0;
        let mut failures = Vec::new();
        let started = Instant::now();

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let mut rng = ChaCha8Rng::seed_from_u64(iteration_seed);
            match scenario.check(&mut rng, ctx) {
                Ok(()) => successes += 1,
                Err(err) => {
                    failed += 1;
                    log::debug!("{} seed {iteration_seed}: {err}", scenario.key());
                    if failures.len() < MAX_RECORDED_FAILURES {
                        failures.push(format!("Iteration {} (seed {iteration_seed}): {err}", i + 1));
                    }
                }
            }
        }
        if failed > MAX_RECORDED_FAILURES {
            failures.push(format!("… and {} more", failed - MAX_RECORDED_FAILURES));
        }

        let average_duration = if iterations == 0 {
            Duration::ZERO
        } else {
            started.elapsed() / u32::try_from(iterations).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.key().to_string(),
            seed,
            passed: failed == 0,
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}
