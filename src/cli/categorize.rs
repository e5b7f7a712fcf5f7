use crate::categorizer::categorize;
use crate::config::load_config;
use crate::error::Result;
use crate::paths::Paths;

pub fn run(paths: &Paths, place: &str) -> Result<()> {
    let config = load_config(&paths.config())?;
    println!("{}", categorize(place, &config));
    Ok(())
}
