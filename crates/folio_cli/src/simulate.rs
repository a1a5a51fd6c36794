//! `folio simulate`

use anyhow::{Context, Result};
use folio_core::Route;
use folio_site::{Site, SiteConfig, SiteSnapshot};
use std::time::Duration;
use tracing::{info, warn};

/// Time allowed for reveals after each scroll step
const SETTLE: Duration = Duration::from_millis(1_200);

pub fn run(config: SiteConfig, route: &str, section: Option<&str>, ms: u64, json: bool) -> Result<()> {
    let route = Route::new(route);
    info!("Simulating {}", route);

    let mut site = Site::new(config, route).context("Failed to boot the site")?;
    print(&site.snapshot(), json)?;

    site.run_for(Duration::from_millis(ms));
    print(&site.snapshot(), json)?;

    if let Some(anchor) = section {
        if !site.go_to_section(anchor) {
            anyhow::bail!("Navigation bar is not mounted");
        }
        site.run_for(SETTLE);
        return print(&site.snapshot(), json);
    }

    scroll_through(&mut site, |snapshot| print(snapshot, json))
}

/// Scroll one viewport at a time to the bottom, reporting after each step
///
/// Stops early if a step leaves the scroll position where it was.
fn scroll_through<F>(site: &mut Site, mut report: F) -> Result<()>
where
    F: FnMut(&SiteSnapshot) -> Result<()>,
{
    let step = site.document().borrow().viewport().height;
    loop {
        let (scroll, max) = scroll_position(site);
        if scroll >= max {
            break;
        }
        site.scroll_by(step);
        let (moved, _) = scroll_position(site);
        if moved <= scroll {
            warn!("Scrolling stalled at {:.0}px", scroll);
            break;
        }
        site.run_for(SETTLE);
        report(&site.snapshot())?;
    }
    Ok(())
}

fn scroll_position(site: &Site) -> (f32, f32) {
    let doc = site.document().borrow();
    let viewport = doc.viewport();
    (viewport.scroll_y, (doc.content_height() - viewport.height).max(0.0))
}

fn print(snapshot: &SiteSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
    } else {
        println!("{}\n", snapshot);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_through_reaches_bottom() {
        let mut site = Site::new(SiteConfig::default(), Route::new("/projects")).unwrap();
        let mut steps = 0;
        scroll_through(&mut site, |_| {
            steps += 1;
            Ok(())
        })
        .unwrap();

        let (scroll, max) = scroll_position(&site);
        assert!(steps > 0);
        assert_eq!(scroll, max);
    }

    #[test]
    fn test_scroll_through_stops_when_stalled() {
        let mut site = Site::new(SiteConfig::default(), Route::new("/projects")).unwrap();
        // Zero-height viewport: every step is a no-op
        site.resize(1280.0, 0.0);
        let mut steps = 0;
        scroll_through(&mut site, |_| {
            steps += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_run_rejects_zero_height_viewport() {
        let mut config = SiteConfig::default();
        config.site.viewport_height = 0.0;
        assert!(run(config, "/projects", None, 0, true).is_err());
    }
}
