use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use whitehat_session::{Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("whitehat starting");

    let mut session = Session::new(SessionConfig::default());

    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        let report = session
            .load(&path)
            .with_context(|| format!("failed to replay {}", path.display()))?;
        for rejected in &report.rejected {
            println!("line {}: {}: {}", rejected.line, rejected.text, rejected.error);
        }
        println!("{report}");
        println!("{}", session.game().status());
    }

    session.run(io::stdin().lock(), io::stdout().lock())?;

    info!("whitehat shutting down");
    Ok(())
}
