//! Browser navigation adapter: `window.open` for external tabs and `location.reload`.

use platform_host::NavigationService;

#[derive(Debug, Clone, Copy, Default)]
/// Navigation service backed by the browser window.
pub struct WebNavigationService;

impl NavigationService for WebNavigationService {
    fn open_external(&self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .open_with_url_and_target(url, "_blank")
                .map_err(|e| format!("window.open failed: {e:?}"))?;
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Ok(())
        }
    }

    fn reload(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .location()
                .reload()
                .map_err(|e| format!("location.reload failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(())
        }
    }
}
