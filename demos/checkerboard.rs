use tcw_place::tokio;
use tcw_place::{CanvasConfig, Coordinate, RemoteCanvas};

const SQUARE: i32 = 20;

#[tokio::main]
async fn main() {
    let canvas = RemoteCanvas::new(CanvasConfig::default()).unwrap();
    println!("{}", canvas.get_board().await.unwrap());
    let bounds = canvas.bounds();
    for y in (bounds.min_y..bounds.max_y).step_by(SQUARE as usize) {
        for x in (bounds.min_x..bounds.max_x).step_by(SQUARE as usize) {
            let color = if (x / SQUARE + y / SQUARE) % 2 == 0 {
                "000000"
            } else {
                "FFFFFF"
            };
            canvas
                .render_rectangle(
                    Coordinate::new(x, y),
                    Coordinate::new(x + SQUARE, y + SQUARE),
                    color,
                )
                .await
                .unwrap();
        }
    }
}
