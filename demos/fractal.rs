use shapetree::{Point, Rectangle, Shape};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let depth = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);

    let square = Rectangle::new(Point::new(64.0, 64.0), 128.0, 128.0);
    let fractal = square.expand_fractal(square.duplicate(), depth)?;
    print!("{}", shapetree::svg::document(&fractal.to_svg(), 256.0, 256.0));
    Ok(())
}
