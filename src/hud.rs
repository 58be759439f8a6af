use crate::progress::ProgressState;

// ---------------------------------------------------------------------------
// Core helpers
// ---------------------------------------------------------------------------

fn doc() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn set_text(id: &str, text: &str) {
    if let Some(doc) = doc() {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

fn set_visible(id: &str, visible: bool) {
    if let Some(doc) = doc() {
        if let Some(el) = doc.get_element_by_id(id) {
            let display = if visible {
                "display: block;"
            } else {
                "display: none;"
            };
            let _ = el.set_attribute("style", display);
        }
    }
}

// ---------------------------------------------------------------------------
// Stat panel and progress bar
// ---------------------------------------------------------------------------

pub fn update_stats(progress: &ProgressState) {
    set_text("stat-stage", &progress.stage.to_string());
    set_text("stat-height", &format!("{:.1}m", progress.height));
    set_text("stat-zone", progress.zone.label());
    set_text("stat-checkpoints", &progress.checkpoints.to_string());
    set_text("progress-text", &format!("{:.1}% Complete", progress.percent));

    if let Some(doc) = doc()
        && let Some(el) = doc.get_element_by_id("progress-fill")
    {
        let _ = el.set_attribute("style", &format!("width: {:.1}%;", progress.percent));
    }

    if progress.victory {
        set_visible("victory-overlay", true);
    }
}

// ---------------------------------------------------------------------------
// Transient overlays
// ---------------------------------------------------------------------------

pub fn flash_checkpoint(level: u32) {
    set_text("checkpoint-toast", &format!("Checkpoint {} reached", level));
    set_visible("checkpoint-toast", true);
}

pub fn clear_checkpoint_flash() {
    set_visible("checkpoint-toast", false);
}
