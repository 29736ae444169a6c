use std::io::{self, BufWriter, Write};

use anyhow::Context;
use dcl::config::Config;
use dcl::frame::FrameClock;
use dcl::wireframe::Scene;

fn main() -> anyhow::Result<()> {
    dcl::init_logger!();

    let config = Config::from_env()?;
    let scene = Scene::new(&config);
    log::debug!(
        "rendering {} frames at {} FPS ({} projection)",
        config.frames,
        config.fps,
        config.projection,
    );

    let mut out = BufWriter::new(io::stdout().lock());
    let mut clock = FrameClock::new(config.fps);
    for _ in 0..config.frames {
        let frame = clock.tick();
        let points = scene.render(&frame);
        log::trace!("frame {}: delta={:?}", frame.index, frame.delta);

        write!(out, "{}:", frame.index)?;
        for p in &points {
            write!(out, " {p}")?;
        }
        writeln!(out)?;
        out.flush().context("failed to write frame to stdout")?;
    }

    Ok(())
}
