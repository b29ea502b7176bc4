use geostage::application::Command;
use geostage::domain::ports::MapEvent;
use geostage::domain::value_objects::GeoBounds;

pub fn render_map_event(event: &MapEvent) -> String {
    match event {
        MapEvent::Attached {
            layer,
            z_priority: Some(z),
        } => format!("attach  {} (z {})", layer, z),
        MapEvent::Attached {
            layer,
            z_priority: None,
        } => format!("attach  {}", layer),
        MapEvent::Detached { layer } => format!("detach  {}", layer),
        MapEvent::ZPriority { layer, z_priority } => format!("z       {} = {}", layer, z_priority),
        MapEvent::FitBounds { bounds, padding } => {
            format!("fit     {} padding {}x{}", bounds, padding.x, padding.y)
        }
    }
}

/// One replayed command with the map events it caused.
pub fn render_command(index: usize, command: &Command, events: &[MapEvent]) -> String {
    let mut out = format!("[{}] {}\n", index + 1, command);
    if events.is_empty() {
        out.push_str("    (no change)\n");
    }
    for event in events {
        out.push_str("    ");
        out.push_str(&render_map_event(event));
        out.push('\n');
    }
    out
}

pub fn render_summary<'a>(
    active: impl Iterator<Item = &'a str>,
    attached: impl Iterator<Item = &'a str>,
    viewport: Option<GeoBounds>,
) -> String {
    let join = |items: Vec<&str>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    format!(
        "\nActive:   {}\nAttached: {}\nViewport: {}\n",
        join(active.collect()),
        join(attached.collect()),
        viewport
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geostage::domain::value_objects::{FitPadding, LatLng, ZPriority};

    #[test]
    fn command_block_lists_events_in_order() {
        let command = Command::parse("activate MDR", 1).unwrap();
        let bounds = GeoBounds::from_corners(
            LatLng {
                lat: 52.1,
                lng: 11.6,
            },
            LatLng {
                lat: 52.2,
                lng: 11.7,
            },
        );
        let events = vec![
            MapEvent::Attached {
                layer: "MDR - Anker".to_string(),
                z_priority: None,
            },
            MapEvent::ZPriority {
                layer: "MDR - Anker".to_string(),
                z_priority: ZPriority::new(300),
            },
            MapEvent::FitBounds {
                bounds,
                padding: FitPadding::uniform(50),
            },
        ];

        let out = render_command(0, &command, &events);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[1] activate MDR");
        assert_eq!(lines[1], "    attach  MDR - Anker");
        assert_eq!(lines[2], "    z       MDR - Anker = 300");
        assert!(lines[3].starts_with("    fit     [52.10000, 11.60000]"));
        assert!(lines[3].ends_with("padding 50x50"));
    }

    #[test]
    fn noop_commands_are_marked() {
        let command = Command::parse("focus Nowhere", 1).unwrap();
        let out = render_command(2, &command, &[]);
        assert_eq!(out, "[3] focus Nowhere\n    (no change)\n");
    }

    #[test]
    fn summary_uses_dash_for_empty_state() {
        let out = render_summary(std::iter::empty(), std::iter::empty(), None);
        assert_eq!(out, "\nActive:   -\nAttached: -\nViewport: -\n");
    }
}
