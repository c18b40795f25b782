/// Pacing configuration for a simulation run
#[derive(Clone)]
pub struct SimConfig {
    pub live: bool,
    pub logs: bool,
    pub console: bool,
    pub timescale: f64, // 1.0 = real-time, 0.5 = half-time, 2.0 = double-time
}

impl SimConfig {
    pub fn new(live: bool, logs: bool, console: bool, timescale: f64) -> Self {
        SimConfig {
            live,
            logs,
            console,
            timescale,
        }
    }
}
