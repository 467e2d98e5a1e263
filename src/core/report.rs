use crate::config::team::Team;
use crate::domain::model::{Assignment, Report, Ticket};

pub const TRIAGE_EMAIL_SUBJECT: &str = "Front-end Triage Carpool Crew - the triage list";

/// Deep link showing a member's whole batch in the tracker UI.
pub const BUGLIST_URL: &str = "https://bugzilla.mozilla.org/buglist.cgi?quicksearch=";

fn email_body(bug_lists: &str) -> String {
    format!(
        "\nHello team,\n\nHere's the weekly triage list.\n\n{bug_lists}\nThanks,\n\n-Your friendly triage list generator\n"
    )
}

/// Renders the announcement email. Every roster member gets a block, in
/// case-insensitive key order: their batch sorted by bug id, or an away note,
/// or a "lucked out" note when they are active but drew nothing.
pub fn render(team: &Team, assignment: &Assignment) -> Report {
    let mut keys: Vec<&String> = team.members().map(|(key, _)| key).collect();
    keys.sort_by_key(|key| key.to_lowercase());

    let mut bug_lists = String::new();
    for key in keys {
        let Some(member) = team.get(key) else {
            continue;
        };
        let bugs: &[Ticket] = assignment.get(key).map(Vec::as_slice).unwrap_or(&[]);

        tracing::info!("{} will try to triage {} bug(s)", key, bugs.len());
        bug_lists.push_str(&format!("{}: {} bug(s)\n", key, bugs.len()));

        if bugs.is_empty() {
            match &member.disabled {
                Some(reason) => bug_lists.push_str(&format!("    Away: {}\n\n", reason)),
                None => bug_lists.push_str("    Lucked out this week!\n\n"),
            }
            continue;
        }

        let mut sorted: Vec<&Ticket> = bugs.iter().collect();
        sorted.sort_by_key(|bug| bug.id);

        let ids: Vec<String> = sorted.iter().map(|bug| bug.id.to_string()).collect();
        bug_lists.push_str(&format!("    List URL: {}{}\n", BUGLIST_URL, ids.join("%2C")));

        for bug in &sorted {
            bug_lists.push_str(&format!("        Bug {}: {}\n", bug.id, bug.summary));
        }
        bug_lists.push('\n');
    }

    Report {
        to: team.active_emails().iter().map(|e| e.to_string()).collect(),
        subject: TRIAGE_EMAIL_SUBJECT.to_string(),
        body: email_body(&bug_lists),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::team::Member;
    use std::collections::BTreeMap;

    fn member(email: &str, disabled: Option<&str>) -> Member {
        Member {
            email: email.to_string(),
            disabled: disabled.map(str::to_string),
        }
    }

    fn ticket(id: u64, summary: &str) -> Ticket {
        Ticket {
            id,
            creator: "reporter@example.com".to_string(),
            summary: summary.to_string(),
        }
    }

    fn sample_team() -> Team {
        let mut members = BTreeMap::new();
        members.insert("alice".to_string(), member("alice@example.com", None));
        members.insert("Bob".to_string(), member("bob@example.com", None));
        members.insert(
            "carol".to_string(),
            member("carol@example.com", Some("Conference week")),
        );
        Team::new(members)
    }

    #[test]
    fn test_recipient_list_covers_active_members_only() {
        let team = sample_team();
        let assignment: Assignment = Assignment::new();

        let report = render(&team, &assignment);

        assert_eq!(report.subject, TRIAGE_EMAIL_SUBJECT);
        assert!(report.to.contains(&"alice@example.com".to_string()));
        assert!(report.to.contains(&"bob@example.com".to_string()));
        assert!(!report.to.contains(&"carol@example.com".to_string()));
    }

    #[test]
    fn test_blocks_ordered_case_insensitively() {
        let team = sample_team();
        let assignment: Assignment = Assignment::new();

        let report = render(&team, &assignment);

        let alice = report.body.find("alice: ").unwrap();
        let bob = report.body.find("Bob: ").unwrap();
        let carol = report.body.find("carol: ").unwrap();
        assert!(alice < bob && bob < carol);
    }

    #[test]
    fn test_bug_lines_sorted_by_id_with_list_url() {
        let team = sample_team();
        let mut assignment = Assignment::new();
        assignment.insert(
            "alice".to_string(),
            vec![ticket(300, "Later bug"), ticket(12, "Earlier bug")],
        );

        let report = render(&team, &assignment);

        assert!(report.body.contains("alice: 2 bug(s)"));
        assert!(report
            .body
            .contains("https://bugzilla.mozilla.org/buglist.cgi?quicksearch=12%2C300"));
        let first = report.body.find("Bug 12: Earlier bug").unwrap();
        let second = report.body.find("Bug 300: Later bug").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_away_and_lucked_out_notes() {
        let team = sample_team();
        let mut assignment = Assignment::new();
        assignment.insert("alice".to_string(), vec![ticket(1, "Only bug")]);
        assignment.insert("Bob".to_string(), Vec::new());

        let report = render(&team, &assignment);

        assert!(report.body.contains("Bob: 0 bug(s)\n    Lucked out this week!"));
        assert!(report.body.contains("carol: 0 bug(s)\n    Away: Conference week"));
    }

    #[test]
    fn test_to_text_layout() {
        let team = sample_team();
        let report = render(&team, &Assignment::new());
        let text = report.to_text();

        // Roster map order is byte-wise, so "Bob" sorts ahead of "alice".
        assert!(text.starts_with("To: bob@example.com, alice@example.com"));
        assert!(text.contains(&format!("Subject: {}", TRIAGE_EMAIL_SUBJECT)));
        assert!(text.contains("Hello team,"));
        assert!(text.ends_with("-Your friendly triage list generator\n"));
    }
}
