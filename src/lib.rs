use network::Sampler;

pub mod campaign;
pub mod network;
pub mod report;

/// Deterministic sampler for tests and benches: every roll succeeds and the
/// lowest available node is picked.
pub struct TestSampler;

impl Sampler for TestSampler {
    fn roll(&mut self) -> f64 {
        0.0
    }
    fn pick(&mut self, _bound: usize) -> usize {
        0
    }
}
