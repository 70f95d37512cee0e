use colored::Colorize;

use crate::api::snapshot_dto::{NetworkSummary, ZoneSnapshot};
use crate::domain::zone::events::ZoneEvent;
use crate::error::Error;

pub fn render_events(events: &[ZoneEvent]) -> String {
    events.iter().map(|event| event.to_string()).collect::<Vec<_>>().join("\n")
}

pub fn render_error(error: &Error) -> String {
    format!("Error: {}", error).as_str().red().to_string()
}

pub fn render_zone(snapshot: &ZoneSnapshot) -> String {
    let center = &snapshot.switching_center;
    let mut lines = vec![
        format!("\n--- Network: {} ---", snapshot.name),
        format!("  MSC: {} at {} (Users={})", center.name, center.position, center.registered_users),
    ];
    for link in &center.linked_towers {
        lines.push(format!("    link -> {} ({:.2})", link.tower, link.distance));
    }

    lines.push(format!("  Towers ({}):", snapshot.towers.len()));
    if snapshot.towers.is_empty() {
        lines.push("    No towers added yet.".to_string());
    }
    for tower in &snapshot.towers {
        lines.push(format!("    - Tower({}, Pos={}, Height={}, Coverage={:.2}m)", tower.name, tower.position, tower.height, tower.coverage_radius));
        if tower.connected_users.is_empty() {
            lines.push("      No users connected.".to_string());
            continue;
        }
        lines.push(format!("      Connected Users ({}):", tower.connected_users.len()));
        for user in &tower.connected_users {
            lines.push(format!("        - {} ({}) at {}", user.name, user.phone, user.position));
        }
    }

    lines.push(format!("  Registered Users ({}):", snapshot.users.len()));
    if snapshot.users.is_empty() {
        lines.push("    No users registered yet.".to_string());
    }
    for user in &snapshot.users {
        let tower = user.tower.as_ref().map(|t| t.as_str()).unwrap_or("None");
        let partner = user.call_partner.as_ref().map(|p| p.as_str()).unwrap_or("None");
        lines.push(format!("    - {} ({}) at {}, tower={}, status={}, partner={}", user.name, user.phone, user.position, tower, user.call_status, partner));
    }

    lines.join("\n")
}

pub fn render_summaries(summaries: &[NetworkSummary]) -> String {
    if summaries.is_empty() {
        return "\nNo networks created yet.".to_string();
    }

    let mut lines = vec!["\n--- All Networks Summary ---".to_string()];
    lines.extend(summaries.iter().map(|summary| format!("- Network: {}, Towers: {}, Users: {}", summary.name, summary.tower_count, summary.user_count)));
    lines.join("\n")
}
