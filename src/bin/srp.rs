use solid_principles::{logging, run_demo, DemoConfig, Principle, Rendition};
use std::io;

fn main() -> anyhow::Result<()> {
    logging::init();

    run_demo(
        Principle::SingleResponsibility,
        Rendition::Corrected,
        &DemoConfig::default(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}
