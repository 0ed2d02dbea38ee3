//! Check which viewport a surface snapshot resolves to.

use std::path::PathBuf;

use spectator_cursor_mapper::{
    resolve_display_resolution, select_viewport, DisplayMode, DisplaySurfaceProvider,
    SurfaceSnapshot, SurfaceViewport,
};

/// One line per candidate viewport. The viewport that resolution picks is
/// tagged `[SELECTED]`; eligible runners-up get `[OK]`.
fn viewport_lines(snapshot: &SurfaceSnapshot) -> Vec<String> {
    let mode = DisplayMode::classify(snapshot);
    let candidates = if mode.is_editor() {
        vec![
            ("Play preview viewport", snapshot.play_preview_viewport()),
            ("Active editor viewport", snapshot.active_editor_viewport()),
        ]
    } else {
        vec![("Runtime viewport", snapshot.runtime_viewport())]
    };

    // Candidates are listed in preference order, so the first match wins.
    let mut selected = select_viewport(snapshot);
    candidates
        .into_iter()
        .map(|(label, viewport)| {
            let is_selected = viewport.is_some() && viewport == selected;
            if is_selected {
                selected = None;
            }
            describe(label, viewport, is_selected, mode.is_editor())
        })
        .collect()
}

fn describe(
    label: &str,
    viewport: Option<SurfaceViewport>,
    selected: bool,
    needs_stereo: bool,
) -> String {
    let Some(vp) = viewport else {
        return format!("[--] {label}: none");
    };

    let size = match vp.window {
        Some(w) => format!("{}x{}", w.width, w.height),
        None => "no window".to_string(),
    };
    let eligible = vp.window.is_some() && (vp.stereo_allowed || !needs_stereo);
    let tag = if selected {
        "[SELECTED]"
    } else if eligible {
        "[OK]"
    } else {
        "[WARN]"
    };
    format!(
        "{tag} {label}: {size} (stereo: {})",
        if vp.stereo_allowed { "allowed" } else { "disallowed" },
    )
}

pub fn run(surfaces: PathBuf) -> anyhow::Result<()> {
    let snapshot = super::load_surfaces(&surfaces)?;

    println!("Spectator Surface Check");
    println!("{}", "=".repeat(50));

    let mode = DisplayMode::classify(&snapshot);
    println!("Display mode: {mode}");
    println!();

    for line in viewport_lines(&snapshot) {
        println!("{line}");
    }

    let resolution = resolve_display_resolution(&snapshot);
    println!();
    if resolution.is_positive_extent() {
        println!(
            "Spectator resolution: {}x{}. Cursor mapping is ready.",
            resolution.x, resolution.y
        );
    } else {
        println!("No eligible viewport. Cursor widgets will receive (0, 0).");
        if mode.is_editor() {
            println!("In-editor viewports must allow stereo rendering to be used.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{fixture_path, load_surfaces};

    #[test]
    fn test_vr_preview_is_marked_selected() {
        let snapshot = load_surfaces(&fixture_path("editor_vr_preview.json")).unwrap();
        let lines = viewport_lines(&snapshot);
        assert_eq!(
            lines,
            vec![
                "[SELECTED] Play preview viewport: 2160x1200 (stereo: allowed)".to_string(),
                "[OK] Active editor viewport: 1600x900 (stereo: allowed)".to_string(),
            ]
        );
    }

    #[test]
    fn test_flat_preview_falls_through_to_editor_viewport() {
        let snapshot =
            load_surfaces(&fixture_path("editor_flat_preview_stereo_editor.json")).unwrap();
        let lines = viewport_lines(&snapshot);
        assert!(lines[0].starts_with("[WARN] Play preview viewport"));
        assert!(lines[1].starts_with("[SELECTED] Active editor viewport"));
    }

    #[test]
    fn test_identical_viewports_select_only_preview() {
        let vp = SurfaceViewport::new(1920.0, 1080.0, true);
        let snapshot = SurfaceSnapshot::editor()
            .with_play_preview(vp)
            .with_active_editor(vp);
        let lines = viewport_lines(&snapshot);
        assert!(lines[0].starts_with("[SELECTED]"));
        assert!(lines[1].starts_with("[OK]"));
    }

    #[test]
    fn test_nothing_selected_without_stereo() {
        let snapshot = load_surfaces(&fixture_path("editor_flat_only.json")).unwrap();
        let lines = viewport_lines(&snapshot);
        assert_eq!(lines[0], "[--] Play preview viewport: none");
        assert!(lines[1].starts_with("[WARN] Active editor viewport"));
        assert!(lines.iter().all(|l| !l.contains("[SELECTED]")));
    }

    #[test]
    fn test_standalone_runtime_is_selected() {
        let snapshot = load_surfaces(&fixture_path("standalone_1440p.json")).unwrap();
        assert_eq!(
            viewport_lines(&snapshot),
            vec!["[SELECTED] Runtime viewport: 2560x1440 (stereo: allowed)".to_string()]
        );

        let windowless = load_surfaces(&fixture_path("standalone_before_window.json")).unwrap();
        assert_eq!(
            viewport_lines(&windowless),
            vec!["[SELECTED] Runtime viewport: no window (stereo: disallowed)".to_string()]
        );
    }
}
