use std::time::Duration;

use tcw_place::tokio;
use tcw_place::{defend, CanvasConfig, Coordinate, DefendOptions, RemoteCanvas, Unifont};

#[tokio::main]
async fn main() {
    let canvas = RemoteCanvas::new(CanvasConfig::default()).unwrap();
    let canvas = &canvas;
    let options = DefendOptions {
        delay: Duration::from_secs(5),
        ..DefendOptions::default()
    };
    defend(
        || {
            canvas.render_lines(
                ["HELLO", "PLACE"],
                Coordinate::new(4, 4),
                &Unifont,
                "FFD700",
                Some("202020"),
            )
        },
        options,
    )
    .await
    .unwrap();
}
