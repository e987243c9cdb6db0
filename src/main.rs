use ncubic::draw::svg::document;
use ncubic::{CurveKind, EditCommand, EditSession, EditorConfig, Point};
use std::env;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
enum UsageError {
    #[error("usage: ncubic <hermite|bezier|bspline> [--step STEP] x,y [x,y ...]")]
    Usage,

    #[error("invalid point `{0}`, expected x,y")]
    Point(String),

    #[error("invalid step `{0}`")]
    Step(String),
}

fn parse_point(arg: &str) -> Result<Point, UsageError> {
    let invalid = || UsageError::Point(arg.to_owned());
    let (x, y) = arg.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let kind: CurveKind = args.next().ok_or(UsageError::Usage)?.parse()?;

    let mut config = EditorConfig::default();
    let mut commands = vec![EditCommand::CurveKindSelected(kind)];
    while let Some(arg) = args.next() {
        if arg == "--step" {
            let raw = args.next().ok_or(UsageError::Usage)?;
            let step = raw.parse::<f64>().map_err(|_| UsageError::Step(raw.clone()))?;
            config = config.with_step(step)?;
        } else {
            commands.push(EditCommand::PointAdded(parse_point(&arg)?));
        }
    }

    let mut session = EditSession::with_config(config);
    session.apply_all(commands);
    let frame = session.frame();
    log::info!(
        "{} curve through {} points, {} samples",
        frame.kind,
        frame.points.len(),
        frame.samples.len()
    );

    print!("{}", document(&frame));
    Ok(())
}
