use appicon_gen::{ICON_DIR, logging};
use eyre::WrapErr;

fn main() -> eyre::Result<()> {
    logging::setup_logger()?;

    let written = appicon_gen::run()
        .wrap_err_with(|| format!("failed to generate app icons into {}", ICON_DIR))?;
    tracing::debug!(files = written.len(), "done");
    Ok(())
}
