use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tiny_skia::{ColorU8, IntSize, Pixmap};

use crate::error::{CanvasError, CanvasResult};

/// The raster battle map drawn beneath the active layer.
pub struct BaseMap {
    source: Option<PathBuf>,
    pixmap: Pixmap,
}

impl std::fmt::Debug for BaseMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseMap")
            .field("source", &self.source)
            .field("size", &self.size())
            .finish()
    }
}

impl BaseMap {
    /// Reads and decodes the image at `path`
    pub fn load(path: &Path) -> CanvasResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            CanvasError::MissingCollaborator(format!("base map {}: {e}", path.display()))
        })?;
        let mut map = Self::from_bytes(&bytes)?;
        map.source = Some(path.to_path_buf());
        log::info!("Loaded base map {} ({}x{})", path.display(), map.width(), map.height());
        Ok(map)
    }

    /// Decodes an encoded image (PNG, JPEG, ...) held in memory
    pub fn from_bytes(bytes: &[u8]) -> CanvasResult<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| CanvasError::MissingCollaborator(format!("base map decode: {e}")))?;
        Self::from_rgba(image.to_rgba8())
    }

    pub fn from_rgba(image: image::RgbaImage) -> CanvasResult<Self> {
        let size = IntSize::from_wh(image.width(), image.height())
            .ok_or_else(|| CanvasError::MissingCollaborator("base map has no pixels".into()))?;
        let mut pixmap = Pixmap::new(size.width(), size.height())
            .ok_or_else(|| CanvasError::MissingCollaborator("base map too large".into()))?;
        // tiny-skia stores premultiplied alpha
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(Self {
            source: None,
            pixmap,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

/// A base map that is being loaded.
///
/// Native builds read the file straight away. The web build fetches the path
/// relative to the page and fills the result in when the response arrives.
#[derive(Debug, Clone)]
pub struct PendingMap {
    slot: Rc<RefCell<Option<CanvasResult<BaseMap>>>>,
}

impl PendingMap {
    pub fn request(path: &Path, ctx: &egui::Context) -> Self {
        let slot = Rc::new(RefCell::new(None));

        #[cfg(not(target_arch = "wasm32"))]
        {
            *slot.borrow_mut() = Some(BaseMap::load(path));
            ctx.request_repaint();
        }

        #[cfg(target_arch = "wasm32")]
        {
            let url = path.to_string_lossy().into_owned();
            let done = Rc::clone(&slot);
            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_bytes(&url).await.and_then(|bytes| {
                    let mut map = BaseMap::from_bytes(&bytes)?;
                    map.source = Some(PathBuf::from(&url));
                    log::info!("Fetched base map {url} ({}x{})", map.width(), map.height());
                    Ok(map)
                });
                *done.borrow_mut() = Some(result);
                ctx.request_repaint();
            });
        }

        Self { slot }
    }

    /// Takes the result once loading has finished
    pub fn poll(&self) -> Option<CanvasResult<BaseMap>> {
        self.slot.borrow_mut().take()
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_bytes(url: &str) -> CanvasResult<Vec<u8>> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let fail = |what: &str, e: JsValue| {
        CanvasError::MissingCollaborator(format!("base map {url}: {what} failed: {e:?}"))
    };

    let window = web_sys::window()
        .ok_or_else(|| CanvasError::MissingCollaborator("no window to fetch the base map".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fail("fetch", e))?;
    let response: web_sys::Response = response.dyn_into().map_err(|e| fail("fetch", e))?;
    if !response.ok() {
        return Err(CanvasError::MissingCollaborator(format!(
            "base map {url}: HTTP {}",
            response.status()
        )));
    }
    let body = response.array_buffer().map_err(|e| fail("read", e))?;
    let buffer = JsFuture::from(body).await.map_err(|e| fail("read", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
