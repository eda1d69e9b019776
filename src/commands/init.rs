use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{Result, UserDirError};

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_with(&config_path, &mut input, &mut out)
}

pub fn run_with<R: BufRead, W: Write>(config_path: &Path, input: &mut R, out: &mut W) -> Result<()> {
    if config_path.exists() {
        write!(
            out,
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        )?;
        out.flush()?;

        if !read_answer(input)?.eq_ignore_ascii_case("y") {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }
    }

    writeln!(out, "userdir configuration")?;
    writeln!(out, "=====================\n")?;

    write!(out, "Users endpoint [{DEFAULT_API_URL}]: ")?;
    out.flush()?;
    let answer = read_answer(input)?;
    let api_url = if answer.is_empty() {
        None
    } else {
        Some(Config::default().api_url(Some(&answer))?)
    };

    write!(out, "Simulated submit delay in ms [1000]: ")?;
    out.flush()?;
    let delay = read_answer(input)?;
    let delay: Option<u64> = delay.parse().ok();

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| UserDirError::ConfigWrite {
            path: config_path.to_path_buf(),
            source: e,
        })?;
    }

    let mut config_content = String::new();
    if let Some(url) = api_url {
        config_content.push_str(&format!("api_url = \"{url}\"\n"));
    }
    if let Some(delay) = delay {
        config_content.push_str(&format!("submit_delay_ms = {delay}\n"));
    }

    std::fs::write(config_path, config_content).map_err(|e| UserDirError::ConfigWrite {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    writeln!(out, "\nConfig saved to {}", config_path.display())?;
    Ok(())
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
