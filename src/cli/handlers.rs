use std::time::Instant;

use crate::{
    core::{
        bounds::{fit_frame, fit_width, terminal_geometry},
        config::Config,
        error::PatternError,
        sweep::Sweep,
    },
    render::{Renderer, encode_rows},
};

use super::parse::{DemoArgs, PrintArgs};

pub fn print(a: &PrintArgs) -> Result<(), PatternError> {
    let t0 = Instant::now();

    let bound = if a.fit {
        fit_width(terminal_geometry(), a.bound)
    } else {
        a.bound
    };
    let cfg = Config::builder(bound).color_opt(&a.color).build()?;

    let rows = encode_rows(Sweep::new(cfg.bound));
    Renderer::full().render(&cfg, &rows)?;

    if a.debug {
        eprintln!(
            "sweep written in {} µs   ({} rows)",
            t0.elapsed().as_micros(),
            rows.len()
        );
    }
    Ok(())
}

pub fn demo(a: &DemoArgs) -> Result<(), PatternError> {
    let fps = a.fps.max(1);
    let bound = fit_frame(terminal_geometry(), a.bound);
    let cfg = Config::builder(bound)
        .title("Triangle Sweep")
        .subtitle(format!("bound {bound}   {fps} fps"))
        .color(&a.color)
        .build()?;

    let mut renderer = Renderer::delta();
    let frame_pause = std::time::Duration::from_micros(1_000_000 / fps);
    let demo_start = Instant::now();
    let mut total_render_us: u128 = 0;
    let mut frame_no: usize = 0;

    for _ in 0..a.cycles.max(1) {
        // the two-phase counter drives the triangle height frame by frame
        for height in Sweep::new(cfg.bound) {
            let rows = encode_rows(0..=height);

            let t0 = Instant::now();
            renderer.render(&cfg, &rows)?;
            total_render_us += t0.elapsed().as_micros();
            frame_no += 1;

            std::thread::sleep(frame_pause);
        }
    }

    if a.debug && frame_no > 0 {
        eprintln!(
            "demo complete: {frame_no} frames   total {} µs   avg render {:.1} µs",
            demo_start.elapsed().as_micros(),
            total_render_us as f64 / frame_no as f64,
        );
    }
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    use crate::core::color::{Ansi, colorize};

    println!("\nPossible colors:");
    println!("{}", colorize(Ansi::black(), "black"));
    println!("{}", colorize(Ansi::red(), "red"));
    println!("{}", colorize(Ansi::green(), "green"));
    println!("{}", colorize(Ansi::yellow(), "yellow"));
    println!("{}", colorize(Ansi::blue(), "blue"));
    println!("{}", colorize(Ansi::magenta(), "magenta"));
    println!("{}", colorize(Ansi::cyan(), "cyan"));
    println!("{}", colorize(Ansi::white(), "white"));
    println!("{}", colorize(Ansi::amber(), "amber | orange"));
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(Ansi::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Default pattern  : {bin}
• Wider pattern    : {bin} print --bound 11
• Negative bound   : {bin} print --bound=-1   (prints nothing, exits 0)
• Named color      : {bin} print --color cyan
• Hex color        : {bin} print --color #6048c1
• Fit the terminal : {bin} print --bound 40 --fit
• Animated pulse   : {bin} demo --bound 12 --fps 20 --cycles 3
• Debug mode       : {bin} print --debug
"
    );
}
