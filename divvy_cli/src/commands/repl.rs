use anyhow::Result;
use std::io::IsTerminal;

use crate::config::Config;
use crate::session::Session;

pub fn run(config: Config) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();

    // no prompt when input is piped in
    let prompt = interactive.then(|| config.prompt.clone());

    if interactive {
        println!("Type 'quit' or press Ctrl-D to leave.");
    }

    let mut session = Session::new(config);
    session.drive(
        stdin.lock(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        prompt.as_deref(),
    )?;

    if interactive {
        println!();
    }

    Ok(())
}
