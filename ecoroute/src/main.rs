use clap::Parser;
use ecoroute::{
    app::{EcoRouteCliArguments, EcoRouteCliError},
    config::EcoRouteConfiguration,
};

fn main() {
    env_logger::init();
    let args = EcoRouteCliArguments::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            log::info!("finished.");
        }
        Err(e) => {
            log::error!("failed running ecoroute: {e}");
            std::process::exit(1);
        }
    }
}

/// runs the selected operation and renders its result as pretty JSON
fn run(args: &EcoRouteCliArguments) -> Result<String, EcoRouteCliError> {
    let conf = EcoRouteConfiguration::load(args.config_file.as_deref())?;
    let output = args.op.run(&conf)?;
    Ok(serde_json::to_string_pretty(&output)?)
}
