use serde::Serialize;

/// One successful infection, as reported on the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InfectionRecord {
    pub step: usize,
    pub node: usize,
    pub integrity: u32,
}

impl InfectionRecord {
    pub fn new(step: usize, node: usize, integrity: u32) -> Self {
        InfectionRecord {
            step,
            node,
            integrity,
        }
    }

    /// The per-infection progress line.
    pub fn render(&self) -> String {
        format!(
            "[Step {}] Node {} infected! Integrity: {}%",
            self.step, self.node, self.integrity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_format() {
        let record = InfectionRecord::new(3, 7, 42);
        assert_eq!(record.render(), "[Step 3] Node 7 infected! Integrity: 42%");
    }
}
