use shapetree::{Circle, Group, Point, Shape, ShapeError, ShapeKind};
use tracing_subscriber::EnvFilter;

fn tree(figure: ShapeKind) -> Result<Group, ShapeError> {
    let mut mini = figure.duplicate();
    mini.rescale(0.5, 0.5)?;

    let mut group = Group::new(vec![figure]);
    group.add(mini);

    let mut mini_group = group.duplicate();
    mini_group.rescale(0.25, 0.25)?;
    group.add(mini_group);
    Ok(group)
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let tree = tree(Circle::new(Point::new(256.0, 256.0), 128.0)?.into())?;
    println!("{}", tree.describe(0));
    println!("{}", tree.to_svg());
    Ok(())
}
