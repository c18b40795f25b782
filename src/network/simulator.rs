use std::collections::BTreeSet;
use std::time::Duration;

use super::{MalwareProfile, Sampler, SimConfig, SimError};
use crate::report::{InfectionRecord, Report};

/// The node infected when a run starts.
pub const PATIENT_ZERO: usize = 0;
/// Hard cap on step iterations if infection stalls.
pub const SAFETY_LIMIT: usize = 50;

/// A fixed-size network of nodes that a malware preset can spread across.
pub struct Simulator {
    nodes: usize,
    infected: BTreeSet<usize>,
    step: usize,
    config: SimConfig,
    sampler: Box<dyn Sampler>,
    pub report: Report,
}

impl Simulator {
    /// Create a network with the given node count, pacing configuration, and
    /// randomness source. The node count must be at least 1.
    pub fn new(
        nodes: usize,
        config: SimConfig,
        sampler: Box<dyn Sampler>,
    ) -> Result<Self, SimError> {
        if nodes == 0 {
            return Err(SimError::EmptyNetwork);
        }
        let mut infected = BTreeSet::new();
        infected.insert(PATIENT_ZERO);
        Ok(Simulator {
            nodes,
            infected,
            step: 0,
            config,
            sampler,
            report: Report::new(),
        })
    }

    /// Spread the given malware preset across the network, one attempt per
    /// step, until every node is infected or the safety limit trips.
    pub async fn spread(&mut self, kind: &str) -> Result<(), SimError> {
        let profile = MalwareProfile::lookup(kind)?;
        self.infected.clear();
        self.infected.insert(PATIENT_ZERO);
        self.step = 0;
        self.report.clear();

        self.emit(Report::banner(profile.label, self.nodes));
        while self.infected.len() < self.nodes {
            if self.config.live {
                tokio::time::sleep(Duration::from_millis(
                    (profile.speed * 1000.0 / self.config.timescale) as u64,
                ))
                .await;
            }
            let available: Vec<usize> = (0..self.nodes)
                .filter(|node| !self.infected.contains(node))
                .collect();
            if !available.is_empty() && self.sampler.roll() < profile.infectivity {
                let victim = available[self.sampler.pick(available.len())];
                self.infected.insert(victim);
                let record = InfectionRecord::new(
                    self.step,
                    victim,
                    integrity(self.infected.len(), self.nodes),
                );
                self.emit(record.render());
                if self.config.logs {
                    self.report.log(record);
                }
            } else {
                log::debug!("step {}: spread attempt failed", self.step);
            }
            self.step += 1;
            if self.step > SAFETY_LIMIT {
                break;
            }
        }
        self.emit(Report::summary(self.infected.len(), self.nodes, self.step));
        Ok(())
    }

    fn emit(&self, line: String) {
        if self.config.console {
            println!("{}", line);
        }
    }

    /// Number of nodes infected so far.
    pub fn infected_count(&self) -> usize {
        self.infected.len()
    }

    /// Total nodes in the network.
    pub fn total_nodes(&self) -> usize {
        self.nodes
    }

    /// Step counter of the current run.
    pub fn steps(&self) -> usize {
        self.step
    }

    pub fn is_infected(&self, node: usize) -> bool {
        self.infected.contains(&node)
    }
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("nodes", &self.nodes)
            .field("infected", &self.infected)
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

/// Percentage of the network still uninfected.
pub fn integrity(infected: usize, nodes: usize) -> u32 {
    ((1.0 - infected as f64 / nodes as f64) * 100.0).round() as u32
}
