use anyhow::Error;

use logogen::logo;

fn main() -> Result<(), Error> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    logo::generate()?;
    println!("✓ Logo image created: {}", logo::OUTPUT);

    Ok(())
}
