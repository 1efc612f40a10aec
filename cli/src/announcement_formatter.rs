// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};
use gatepass_core::{Announcement, AnnouncementPriority};

/// Announcements as cards, most urgent first, newest first within a priority.
pub struct Announcements<'a>(pub &'a [Announcement]);

impl fmt::Display for Announcements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items: Vec<&Announcement> = self.0.iter().collect();
        items.sort_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let priority = item.priority();
            let label = format!("[{}]", priority.label()).color(priority_color(priority));
            match &item.created_at {
                Some(created_at) => {
                    writeln!(f, "{label} {} {}", item.title.bold(), created_at.dimmed())?;
                }
                None => writeln!(f, "{label} {}", item.title.bold())?,
            }
            if !item.content.is_empty() {
                writeln!(f, "  {}", item.content)?;
            }
            match (&item.event_title, &item.author_name) {
                (Some(event), Some(author)) => writeln!(f, "  {event}, by {author}")?,
                (Some(event), None) => writeln!(f, "  {event}")?,
                (None, Some(author)) => writeln!(f, "  By {author}")?,
                (None, None) => {}
            }
        }
        Ok(())
    }
}

const fn priority_color(priority: AnnouncementPriority) -> Color {
    match priority {
        AnnouncementPriority::Urgent => Color::Red,
        AnnouncementPriority::High => Color::Yellow,
        AnnouncementPriority::Medium => Color::Blue,
        AnnouncementPriority::Low => Color::BrightBlack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(id: u64, priority: &str, created_at: &str) -> Announcement {
        Announcement {
            id,
            title: format!("Notice {id}"),
            content: String::new(),
            priority_name: Some(priority.to_string()),
            event_title: None,
            author_name: None,
            created_at: Some(created_at.to_string()),
        }
    }

    #[test]
    fn test_urgent_first_then_newest() {
        colored::control::set_override(false);
        let items = [
            announcement(1, "low", "2026-09-01"),
            announcement(2, "medium", "2026-09-01"),
            announcement(3, "urgent", "2026-09-01"),
            announcement(4, "medium", "2026-09-02"),
        ];
        let out = Announcements(&items).to_string();
        assert_eq!(
            out,
            "[URGENT] Notice 3 2026-09-01\n\n\
             [MEDIUM] Notice 4 2026-09-02\n\n\
             [MEDIUM] Notice 2 2026-09-01\n\n\
             [LOW] Notice 1 2026-09-01\n"
        );
    }

    #[test]
    fn test_card_body() {
        colored::control::set_override(false);
        let mut item = announcement(1, "high", "2026-09-01");
        item.content = "Keynote moved to Hall B.".to_string();
        item.event_title = Some("RustConf".to_string());
        item.author_name = Some("Alice".to_string());
        let out = Announcements(&[item]).to_string();
        assert_eq!(
            out,
            "[HIGH] Notice 1 2026-09-01\n  Keynote moved to Hall B.\n  RustConf, by Alice\n"
        );
    }
}
