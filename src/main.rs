use clap::Parser;
use std::error::Error;
use std::path::Path;
use subnet_calculator::config::Config;
use subnet_calculator::interactive;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::parse();
    // No config file means no logging, a broken one is worth a notice
    if Path::new(&config.log_config).exists() {
        if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
            eprintln!("Logging disabled, cannot load {}: {e}", config.log_config);
        }
    }
    log::info!("#Start main()");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    interactive::run(&config, &mut stdin.lock(), &mut stdout)?;

    log::info!("#End main()");
    Ok(())
}
