use crate::network::{SimError, Simulator};

/// An ordered batch of simulation runs, executed strictly one after another.
pub struct Campaign {
    pub runs: Vec<(String, Simulator)>,
}

impl Campaign {
    pub fn new() -> Self {
        Campaign { runs: Vec::new() }
    }

    /// Queue a simulator to spread the given malware preset.
    pub fn add_run(&mut self, kind: &str, sim: Simulator) -> usize {
        self.runs.push((kind.to_string(), sim));
        self.runs.len() - 1
    }

    /// Run every queued simulation in order, collecting per-run results.
    pub async fn run_all(&mut self) -> Vec<Result<(), SimError>> {
        let mut results = Vec::with_capacity(self.runs.len());
        for (kind, sim) in self.runs.iter_mut() {
            results.push(sim.spread(kind).await);
        }
        results
    }
}
