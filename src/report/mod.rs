mod record;

pub use record::InfectionRecord;

/// Records the infections of a single run and renders the console output.
pub struct Report {
    records: Vec<InfectionRecord>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Report {
            records: Vec::new(),
        }
    }

    /// Append one infection to the run history.
    pub fn log(&mut self, record: InfectionRecord) {
        self.records.push(record);
    }

    /// The infections recorded so far, in step order.
    pub fn records(&self) -> &[InfectionRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Header printed before the first spread attempt.
    pub fn banner(label: &str, nodes: usize) -> String {
        let rule = "=".repeat(40);
        format!(
            "\n{}\n  {} SIMULATION\n{}\nNetwork: {} nodes\nPatient zero: Node 0\n",
            rule, label, rule, nodes
        )
    }

    /// Footer printed after the run loop exits.
    pub fn summary(infected: usize, nodes: usize, steps: usize) -> String {
        let rule = "=".repeat(40);
        format!(
            "\n{}\nSIMULATION COMPLETE\nTotal infected: {}/{}\nSteps taken: {}\n{}\n",
            rule, infected, nodes, steps, rule
        )
    }
}
