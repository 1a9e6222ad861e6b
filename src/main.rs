use chrono::Local;
use clap::Parser;
use memory_stats::memory_stats;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use wordtrielib::{error::SessionError, session::Session};

/// Run word store commands (INSERT, REMOVE, LOAD, AUTOCORRECT, AUTOCOMPLETE, EXIT)
#[derive(Parser)]
struct Cli {
    /// Read commands from this file instead of standard input
    script: Option<PathBuf>,
    /// Log trie and memory statistics when the session ends
    #[arg(long)]
    stats: bool,
}

fn run(args: &Cli) -> Result<(), SessionError> {
    let stdout = io::stdout();
    let mut session = Session::new(BufWriter::new(stdout.lock()));
    match &args.script {
        Some(path) => {
            log::info!("Reading commands from {:?}", path);
            session.run(BufReader::new(File::open(path)?))?;
        }
        None => session.run(io::stdin().lock())?,
    }

    if args.stats {
        let trie = session.trie();
        log::info!(
            "Stored {} words in {} nodes",
            trie.len(),
            trie.node_count()
        );
        if let Some(stats) = memory_stats() {
            log::info!("Physical memory: {} bytes", stats.physical_mem);
        }
    }
    Ok(())
}

fn main() {
    let args = Cli::parse();
    env_logger::builder()
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level()).bold();
            writeln!(
                buf,
                "{}|{level_style}{:7}{level_style:#}|{:10}| {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        process::exit(1);
    }
}
