use shapetree::{Circle, Group, Line, Point, Polygon, Rectangle, Shape, Triangle};

fn main() -> miette::Result<()> {
    let mut gallery = Group::default();
    gallery
        .add(Circle::new(Point::new(256.0, 256.0), 128.0)?)
        .add(Line::from_coords(&[128.0, 128.0, 128.0, 256.0, 256.0, 128.0, 256.0, 256.0])?)
        .add(Polygon::from_coords(&[128.0, 128.0, 128.0, 256.0, 256.0, 128.0, 256.0, 256.0])?)
        .add(Rectangle::new(Point::new(256.0, 256.0), 256.0, 128.0))
        .add(Triangle::new(
            Point::new(192.0, 128.0),
            Point::new(256.0, 128.0),
            Point::new(256.0, 256.0),
        ));

    print!("{}", shapetree::svg::document(&gallery.to_svg(), 512.0, 512.0));
    Ok(())
}
