use std::io;

use pixel_resolution::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let output_dir = std::env::current_dir()?;
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());

    session.run(&output_dir)?;

    Ok(())
}
