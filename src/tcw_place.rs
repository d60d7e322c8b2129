use std::path::Path;

use futures::future::{self, BoxFuture, FutureExt};
use log::debug;
pub use tokio;
pub use url;
use url::Url;

mod bounds;
mod config;
mod defend;
mod error;
mod font;
mod transport;

pub use bounds::{Bounds, Coordinate, MAX_X, MAX_Y, MIN_X, MIN_Y};
pub use config::{CanvasConfig, DefendConfig, DEFAULT_BASE_URL};
pub use defend::{defend, DefendOptions};
pub use error::{Error, Result};
pub use font::{Font, GlyphBitmap, Unifont};
pub use transport::{HttpTransport, Transport};

/// A single pixel write that has been built but not sent yet.
pub type PixelRequest = BoxFuture<'static, Result<()>>;

/// Polls every request concurrently and waits for all of them. Failed
/// requests do not cancel their siblings; the first failure in batch order is
/// returned once the whole batch has settled.
pub async fn dispatch<I>(requests: I) -> Result<()>
where
    I: IntoIterator<Item = PixelRequest>,
{
    let requests: Vec<_> = requests.into_iter().collect();
    let total = requests.len();
    debug!("dispatching {} pixel writes", total);
    let mut failures = future::join_all(requests)
        .await
        .into_iter()
        .filter_map(Result::err);
    match failures.next() {
        None => Ok(()),
        Some(first) => {
            let failed = 1 + failures.count();
            debug!("{} of {} pixel writes failed", failed, total);
            Err(Error::Batch {
                failed,
                total,
                source: Box::new(first),
            })
        }
    }
}

pub struct RemoteCanvas<T = HttpTransport> {
    config: CanvasConfig,
    transport: T,
}

impl RemoteCanvas<HttpTransport> {
    pub fn new(config: CanvasConfig) -> Result<Self> {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> RemoteCanvas<T> {
    pub fn with_transport(config: CanvasConfig, transport: T) -> Result<Self> {
        if config.base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(config.base_url));
        }
        Ok(Self { config, transport })
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    /// Fetches the raw board state. The body is returned as-is.
    pub async fn get_board(&self) -> Result<String> {
        let url = self.endpoint("get")?;
        self.transport.get(url).await
    }

    /// Builds the write for one pixel, clamped into the canvas bounds. Nothing
    /// is sent until the returned future is polled.
    pub fn build_render_request(&self, coordinate: Coordinate, color: &str) -> PixelRequest {
        let target = self.config.bounds.clamp(coordinate);
        match self.change_url(target, color) {
            Ok(url) => self.transport.get(url).map(|body| body.map(drop)).boxed(),
            Err(err) => future::ready(Err(err)).boxed(),
        }
    }

    /// Paints every cell of the canvas.
    pub async fn clear(&self, color: &str) -> Result<()> {
        let Bounds {
            min_x,
            max_x,
            min_y,
            max_y,
        } = self.config.bounds;
        let requests = (min_x..max_x).flat_map(|x| {
            (min_y..max_y).map(move |y| self.build_render_request(Coordinate::new(x, y), color))
        });
        dispatch(requests).await
    }

    pub async fn render_pixel(&self, coordinate: Coordinate, color: &str) -> Result<()> {
        self.build_render_request(coordinate, color).await
    }

    /// Fills the half-open rectangle `[start, end)`. Parts outside the canvas
    /// are cut off at the clamp boundary.
    pub async fn render_rectangle(
        &self,
        start: Coordinate,
        end: Coordinate,
        color: &str,
    ) -> Result<()> {
        if end.x <= start.x || end.y <= start.y {
            return Err(Error::InvalidRectangle { start, end });
        }
        let bounds = self.config.bounds;
        let (x0, x1) = (bounds.clamp_x(start.x), bounds.clamp_x(end.x));
        let (y0, y1) = (bounds.clamp_y(start.y), bounds.clamp_y(end.y));
        let requests = (x0..x1).flat_map(|x| {
            (y0..y1).map(move |y| self.build_render_request(Coordinate::new(x, y), color))
        });
        dispatch(requests).await
    }

    /// Renders one line of text with its top-left corner at `start`. Blank
    /// cells are only painted when a background color is given. No wrapping.
    pub async fn render_text<F: Font + ?Sized>(
        &self,
        text: &str,
        start: Coordinate,
        font: &F,
        color: &str,
        background: Option<&str>,
    ) -> Result<()> {
        let bitmap = font.render(text);
        let mut requests = Vec::new();
        for (dy, row) in bitmap.rows().iter().enumerate() {
            for (dx, &filled) in row.iter().enumerate() {
                let at = Coordinate::new(
                    start.x.saturating_add(dx as i32),
                    start.y.saturating_add(dy as i32),
                );
                if filled {
                    requests.push(self.build_render_request(at, color));
                } else if let Some(background) = background {
                    requests.push(self.build_render_request(at, background));
                }
            }
        }
        dispatch(requests).await
    }

    /// Renders each line below the previous one, `font.height() + 1` cells
    /// apart. Each line completes before the next starts; a failing line stops
    /// the rest.
    pub async fn render_lines<I, S, F>(
        &self,
        lines: I,
        start: Coordinate,
        font: &F,
        color: &str,
        background: Option<&str>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Font + ?Sized,
    {
        let step = font.height() as i32 + 1;
        let mut at = start;
        for line in lines {
            self.render_text(line.as_ref(), at, font, color, background)
                .await?;
            at.y = at.y.saturating_add(step);
        }
        Ok(())
    }

    pub async fn render_lines_from_file<F: Font + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        start: Coordinate,
        font: &F,
        color: &str,
        background: Option<&str>,
    ) -> Result<()> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.render_lines(content.lines(), start, font, color, background)
            .await
    }

    fn endpoint(&self, name: &str) -> Result<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    fn change_url(&self, target: Coordinate, color: &str) -> Result<Url> {
        let mut url = self.endpoint("change")?;
        url.query_pairs_mut()
            .append_pair("x", &target.x.to_string())
            .append_pair("y", &target.y.to_string())
            .append_pair("col", color);
        Ok(url)
    }
}
