use outbreak::campaign::Campaign;
use outbreak::network::{SimConfig, Simulator, StdSampler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut campaign = Campaign::new();
    for kind in ["virus", "worm", "trojan"] {
        let sim = Simulator::new(
            10,
            SimConfig::new(true, true, true, 1.0),
            Box::new(StdSampler::from_entropy()),
        )?;
        campaign.add_run(kind, sim);
    }
    for result in campaign.run_all().await {
        result?;
    }
    Ok(())
    // run with: cargo run --bin spread
    // pass a larger timescale to SimConfig to speed up playback
}
