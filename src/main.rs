use clap::Command;
use clinic_geojson::{run, Config};
use tracing::Level;

fn main() {
    Command::new("Clinic GeoJSON")
        .version("0.1.0")
        .about("Converts the master clinic CSV in the working directory into Mapbox GeoJSON")
        .get_matches();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    // Input and output names are fixed and relative to the working directory.
    let config = Config::default();

    match run(&config) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
